//! Pointer tracking contract
//!
//! A tracking provider (camera + face landmark model) runs at its own cadence
//! and delivers, per processed camera frame, either a normalized nose position
//! or an explicit "lost" signal. Deliveries land in a `PointerSlot`, a
//! single-slot cell the engine reads once per tick. The provider can only
//! write that slot; it never touches simulation state.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use thiserror::Error;

/// Setup failures reported by a tracking provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackingError {
    #[error("camera access was denied")]
    CameraDenied,
    #[error("camera failed to start after {attempts} attempts")]
    CameraUnavailable { attempts: u32 },
    #[error("failed to load the face tracking model: {0}")]
    ModelLoad(String),
    #[error("tracker used before initialization")]
    NotInitialized,
}

/// One delivery from the provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerReading {
    /// Normalized camera coordinates in [0, 1]
    Detected(Vec2),
    /// No face in this camera frame
    Lost,
}

#[derive(Debug, Default)]
struct SlotInner {
    latest: Cell<Option<Vec2>>,
    open: Cell<bool>,
}

/// Latest-value pointer channel shared between provider and engine
#[derive(Debug, Clone, Default)]
pub struct PointerSlot {
    inner: Rc<SlotInner>,
}

impl PointerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot. Returns false (and drops the reading) while closed.
    pub fn publish(&self, reading: PointerReading) -> bool {
        if !self.inner.open.get() {
            return false;
        }
        let value = match reading {
            PointerReading::Detected(pos) => Some(pos),
            PointerReading::Lost => None,
        };
        self.inner.latest.set(value);
        true
    }

    /// Latest normalized position, if the pointer is currently tracked
    pub fn latest(&self) -> Option<Vec2> {
        self.inner.latest.get()
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.get()
    }

    /// Start accepting readings with an empty slot
    pub(crate) fn open(&self) {
        self.inner.latest.set(None);
        self.inner.open.set(true);
    }

    /// Stop accepting readings and forget the last one
    pub(crate) fn close(&self) {
        self.inner.open.set(false);
        self.inner.latest.set(None);
    }
}

/// A source of primary pointer readings
pub trait TrackingProvider {
    /// Bring up camera and model. Readings go to `sink` from then on.
    fn initialize(&mut self, sink: PointerSlot) -> Result<(), TrackingError>;

    /// Tear down. Idempotent; no reading is delivered after it returns.
    fn stop(&mut self);
}

/// Replays a fixed list of readings, one per `pump`, looping at the end
#[derive(Debug, Clone, Default)]
pub struct ScriptedTracker {
    script: Vec<PointerReading>,
    cursor: usize,
    sink: Option<PointerSlot>,
    setup_error: Option<TrackingError>,
}

impl ScriptedTracker {
    pub fn new(script: Vec<PointerReading>) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// Lissajous sweep across the middle of the frame, dropping out briefly
    /// every `period` readings to exercise the lost-pointer path
    pub fn sweep(len: usize, period: usize) -> Self {
        let script = (0..len)
            .map(|i| {
                if period > 0 && i % period >= period.saturating_sub(period / 8) {
                    return PointerReading::Lost;
                }
                let t = i as f32 * 0.045;
                PointerReading::Detected(Vec2::new(
                    0.5 + 0.4 * t.sin(),
                    0.5 + 0.35 * (t * 1.7).cos(),
                ))
            })
            .collect();
        Self::new(script)
    }

    /// A provider whose setup always fails with `error`
    pub fn failing(error: TrackingError) -> Self {
        Self {
            setup_error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.sink.is_some()
    }

    /// Deliver the next scripted reading
    pub fn pump(&mut self) -> Result<(), TrackingError> {
        let sink = self.sink.as_ref().ok_or(TrackingError::NotInitialized)?;
        if self.script.is_empty() {
            return Ok(());
        }
        let reading = self.script[self.cursor % self.script.len()];
        self.cursor = self.cursor.wrapping_add(1);
        sink.publish(reading);
        Ok(())
    }
}

impl TrackingProvider for ScriptedTracker {
    fn initialize(&mut self, sink: PointerSlot) -> Result<(), TrackingError> {
        if let Some(err) = self.setup_error.clone() {
            return Err(err);
        }
        self.sink = Some(sink);
        self.cursor = 0;
        Ok(())
    }

    fn stop(&mut self) {
        self.sink = None;
    }
}
