//! Object spawning
//!
//! Spawn events fire on a cadence measured in simulated time. Each event
//! launches one object, or a burst of 2-3 with a probability that grows with
//! difficulty.

use glam::Vec2;
use rand::Rng;

use super::content::{BOMB, Content, FRUITS, HIDDEN_CHARACTERS};
use super::level::LevelConfig;
use super::state::{ObjectKind, SimObject, SimState};
use crate::consts::*;

/// True once at least one cadence has elapsed since the last spawn
#[inline]
pub fn should_spawn(now_ms: f64, last_spawn_ms: f64, cadence_ms: f64) -> bool {
    now_ms - last_spawn_ms >= cadence_ms
}

/// Run the spawn check for this tick. Returns the number of objects created.
///
/// `viewport` is the current surface size; placement never uses a cached width.
pub fn spawn_tick(state: &mut SimState, viewport: Vec2) -> usize {
    if !should_spawn(state.time_ms, state.last_spawn_ms, state.config.spawn_cadence_ms) {
        return 0;
    }

    let config = state.config;
    let count = if state.rng.random_bool(config.burst_chance()) {
        state.rng.random_range(2..=3)
    } else {
        1
    };

    for _ in 0..count {
        let id = state.next_entity_id();
        let object = spawn_object(&mut state.rng, id, &config, viewport);
        log::trace!(
            "Spawned {:?} #{} at x={:.0} vy={:.1}",
            object.kind,
            object.id,
            object.pos.x,
            object.vel.y
        );
        state.objects.push(object);
    }

    state.last_spawn_ms = state.time_ms;
    count
}

/// Pick kind and content for one spawn
pub fn choose_content<R: Rng>(rng: &mut R, config: &LevelConfig) -> (ObjectKind, Content) {
    if config.is_hidden {
        let content = HIDDEN_CHARACTERS[rng.random_range(0..HIDDEN_CHARACTERS.len())];
        return (ObjectKind::HiddenCharacter, content);
    }
    if rng.random_bool(config.bomb_chance.clamp(0.0, 1.0)) {
        (ObjectKind::Bomb, BOMB)
    } else {
        (ObjectKind::Fruit, FRUITS[rng.random_range(0..FRUITS.len())])
    }
}

/// Build one object launched from below the viewport
pub fn spawn_object<R: Rng>(rng: &mut R, id: u32, config: &LevelConfig, viewport: Vec2) -> SimObject {
    let (kind, content) = choose_content(rng, config);

    let min_x = SPAWN_EDGE_MARGIN;
    let max_x = viewport.x - SPAWN_EDGE_MARGIN;
    let x = if max_x > min_x {
        rng.random_range(min_x..=max_x)
    } else {
        viewport.x * 0.5
    };
    let y = viewport.y + OFFSCREEN_MARGIN;

    let vx = rng.random_range(-MAX_LAUNCH_VX..MAX_LAUNCH_VX);
    let vy = -(rng.random_range(0.0..LAUNCH_SPEED_JITTER) + BASE_LAUNCH_SPEED + config.launch_bonus());

    let scale = rng.random_range(MIN_OBJECT_SCALE..MAX_OBJECT_SCALE);

    SimObject {
        id,
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        radius: BASE_OBJECT_RADIUS * scale,
        scale,
        rotation: 0.0,
        rotation_speed: rng.random_range(-MAX_ROTATION_SPEED..MAX_ROTATION_SPEED),
        kind,
        content,
        sliced: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{self, BOSS_LEVEL};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn test_cadence_gate() {
        assert!(!should_spawn(999.0, 0.0, 1000.0));
        assert!(should_spawn(1000.0, 0.0, 1000.0));

        let mut state = SimState::new(3, 1);
        state.time_ms = 500.0;
        assert_eq!(spawn_tick(&mut state, VIEWPORT), 0);
        assert!(state.objects.is_empty());

        state.time_ms = 1100.0;
        let n = spawn_tick(&mut state, VIEWPORT);
        assert!((1..=3).contains(&n));
        assert_eq!(state.objects.len(), n);
        assert_eq!(state.last_spawn_ms, 1100.0);

        // Gate resets
        assert_eq!(spawn_tick(&mut state, VIEWPORT), 0);
    }

    #[test]
    fn test_placement_and_kinematics() {
        let mut rng = Pcg32::seed_from_u64(42);
        let config = level::resolve(2);
        for id in 0..500 {
            let obj = spawn_object(&mut rng, id, &config, VIEWPORT);
            assert!(obj.pos.x >= SPAWN_EDGE_MARGIN);
            assert!(obj.pos.x <= VIEWPORT.x - SPAWN_EDGE_MARGIN);
            assert_eq!(obj.pos.y, VIEWPORT.y + OFFSCREEN_MARGIN);
            assert!(obj.vel.x.abs() <= MAX_LAUNCH_VX);
            assert!(obj.vel.y <= -(BASE_LAUNCH_SPEED + config.launch_bonus()));
            assert!(obj.radius > 0.0);
            assert!(obj.radius >= BASE_OBJECT_RADIUS * MIN_OBJECT_SCALE);
            assert!(obj.radius < BASE_OBJECT_RADIUS * MAX_OBJECT_SCALE);
            assert!(!obj.sliced);
        }
    }

    #[test]
    fn test_narrow_viewport_centers() {
        let mut rng = Pcg32::seed_from_u64(1);
        let obj = spawn_object(&mut rng, 1, &level::resolve(1), Vec2::new(60.0, 400.0));
        assert_eq!(obj.pos.x, 30.0);
    }

    #[test]
    fn test_content_selection() {
        let mut rng = Pcg32::seed_from_u64(9);

        // Level 1 never spawns bombs
        let l1 = level::resolve(1);
        for _ in 0..200 {
            let (kind, content) = choose_content(&mut rng, &l1);
            assert_eq!(kind, ObjectKind::Fruit);
            assert!(FRUITS.contains(&content));
        }

        // Boss level spawns only hidden characters
        let boss = level::resolve(BOSS_LEVEL);
        for _ in 0..200 {
            let (kind, content) = choose_content(&mut rng, &boss);
            assert_eq!(kind, ObjectKind::HiddenCharacter);
            assert!(HIDDEN_CHARACTERS.contains(&content));
        }

        // Level 4 mixes both
        let l4 = level::resolve(4);
        let bombs = (0..1000)
            .filter(|_| choose_content(&mut rng, &l4).0 == ObjectKind::Bomb)
            .count();
        assert!(bombs > 250 && bombs < 450, "bombs = {bombs}");
    }
}
