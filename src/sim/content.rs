//! Spawnable content pools (glyph + color per object variant)

use serde::Serialize;

/// Visual descriptor carried by every object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Content {
    /// Emoji drawn for the object
    pub glyph: &'static str,
    /// 0xRRGGBB, also used for the slice burst
    pub color: u32,
    /// Display name (hidden characters only)
    pub name: Option<&'static str>,
}

impl Content {
    const fn fruit(glyph: &'static str, color: u32) -> Self {
        Self {
            glyph,
            color,
            name: None,
        }
    }

    const fn character(glyph: &'static str, color: u32, name: &'static str) -> Self {
        Self {
            glyph,
            color,
            name: Some(name),
        }
    }
}

pub const FRUITS: [Content; 9] = [
    Content::fruit("🍎", 0xef4444),
    Content::fruit("🍌", 0xeab308),
    Content::fruit("🍉", 0x22c55e),
    Content::fruit("🍊", 0xf97316),
    Content::fruit("🥥", 0xebd5c1),
    Content::fruit("🥝", 0x84cc16),
    Content::fruit("🍓", 0xef4444),
    Content::fruit("🎄", 0x15803d), // Christmas tree cookie
    Content::fruit("🍪", 0xd97706), // Gingerbread
];

pub const HIDDEN_CHARACTERS: [Content; 5] = [
    Content::character("✈️", 0xef4444, "Super Jet"),
    Content::character("🦸", 0x3b82f6, "Ultra Hero"),
    Content::character("🤖", 0x6366f1, "Mecha"),
    Content::character("👾", 0xa855f7, "Alien Monster"),
    Content::character("🎅", 0xef4444, "Santa"),
];

pub const BOMB: Content = Content::fruit("💣", 0x000000);

/// Pointer/trail colors
pub const BLADE_COLOR: u32 = 0xef4444;
pub const BLADE_GLOW: u32 = 0xfbbf24;
pub const BLADE_CORE: u32 = 0xffffff;
