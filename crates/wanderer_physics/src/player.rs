//! Character locomotion
//!
//! Kinematic player movement with gravity, jumping and ground snapping.
//! All quantities are per frame: velocities are world units per frame and
//! one call to [`LocomotionIntegrator::step`] advances exactly one frame.

use wanderer_input::InputState;
use wanderer_math::Vec3;

use crate::collider::{WorldCollider, DEFAULT_GROUND_PROBE_LENGTH};

/// Default horizontal speed (units/frame)
pub const DEFAULT_MOVE_SPEED: f32 = 0.3;
/// Default gravity decrement (units/frame²)
pub const DEFAULT_GRAVITY: f32 = 0.25;
/// Default upward velocity applied when jumping
pub const DEFAULT_JUMP_IMPULSE: f32 = 8.0;
/// Default per-frame horizontal velocity decay
pub const DEFAULT_DAMPING: f32 = 0.9;
/// Default terminal fall speed
pub const DEFAULT_MAX_FALL_SPEED: f32 = 20.0;
/// Default height of the character origin above the ground
pub const DEFAULT_FOOT_OFFSET: f32 = 1.0;

/// Locomotion tuning
#[derive(Clone, Debug, PartialEq)]
pub struct LocomotionConfig {
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Subtracted from vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity set by a jump
    pub jump_impulse: f32,
    /// Horizontal velocity multiplier per frame, in (0, 1)
    pub damping: f32,
    /// Vertical velocity never drops below `-max_fall_speed`
    pub max_fall_speed: f32,
    /// Distance from the ground surface to the character origin
    pub foot_offset: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            damping: DEFAULT_DAMPING,
            max_fall_speed: DEFAULT_MAX_FALL_SPEED,
            foot_offset: DEFAULT_FOOT_OFFSET,
        }
    }
}

/// Ground contact state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locomotion {
    /// Standing on a surface
    Grounded,
    /// In the air; `jumping` is set when the player left the ground by
    /// jumping rather than walking off a ledge
    Airborne { jumping: bool },
}

/// Player kinematic state
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Heading around +Y in radians
    pub facing_yaw: f32,
    pub locomotion: Locomotion,
}

impl PlayerState {
    /// Create a player at rest, falling until it finds ground
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            facing_yaw: 0.0,
            locomotion: Locomotion::Airborne { jumping: false },
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.locomotion == Locomotion::Grounded
    }

    pub fn is_airborne(&self) -> bool {
        !self.is_grounded()
    }

    /// True while airborne because of a jump
    pub fn is_jumping(&self) -> bool {
        self.locomotion == Locomotion::Airborne { jumping: true }
    }
}

/// Notable state change produced by a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    /// Airborne → Grounded
    Landed,
    /// Grounded → Airborne without jumping
    LeftGround,
    /// Jump impulse applied (possibly on the frame of landing)
    Jumped,
}

/// Advances a [`PlayerState`] one frame at a time
#[derive(Clone, Debug, Default)]
pub struct LocomotionIntegrator {
    config: LocomotionConfig,
}

impl LocomotionIntegrator {
    /// Create an integrator for colliders with the default ground reach
    ///
    /// Out-of-range settings are replaced by their defaults with a warning.
    pub fn new(config: LocomotionConfig) -> Self {
        Self::with_ground_reach(config, DEFAULT_GROUND_PROBE_LENGTH)
    }

    /// Create an integrator for colliders that look `reach` units below the
    /// character
    ///
    /// The foot offset must stay below `reach`, otherwise a resting character
    /// would lose the ground every other frame.
    pub fn with_ground_reach(config: LocomotionConfig, reach: f32) -> Self {
        Self {
            config: Self::validated(config, reach),
        }
    }

    fn validated(mut config: LocomotionConfig, reach: f32) -> LocomotionConfig {
        let defaults = LocomotionConfig::default();

        fn check(name: &str, value: &mut f32, default: f32, valid: bool) {
            if !valid {
                log::warn!("Locomotion {} {} out of range, using {}", name, value, default);
                *value = default;
            }
        }

        let c = &mut config;
        let ok = c.move_speed.is_finite() && c.move_speed >= 0.0;
        check("move_speed", &mut c.move_speed, defaults.move_speed, ok);
        let ok = c.gravity.is_finite() && c.gravity > 0.0;
        check("gravity", &mut c.gravity, defaults.gravity, ok);
        let ok = c.jump_impulse.is_finite() && c.jump_impulse >= 0.0;
        check("jump_impulse", &mut c.jump_impulse, defaults.jump_impulse, ok);
        let ok = c.damping.is_finite() && c.damping > 0.0 && c.damping < 1.0;
        check("damping", &mut c.damping, defaults.damping, ok);
        let ok = c.max_fall_speed.is_finite() && c.max_fall_speed > 0.0;
        check("max_fall_speed", &mut c.max_fall_speed, defaults.max_fall_speed, ok);

        let fits = |offset: f32| offset.is_finite() && offset >= 0.0 && offset < reach;
        if !fits(c.foot_offset) {
            let fallback = if fits(defaults.foot_offset) {
                defaults.foot_offset
            } else {
                reach * 0.5
            };
            log::warn!(
                "Locomotion foot_offset {} must be below the ground reach {}, using {}",
                c.foot_offset,
                reach,
                fallback
            );
            c.foot_offset = fallback;
        }

        config
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Simulate one frame
    ///
    /// Order: input sets horizontal velocity, gravity, integration, ground
    /// snap, jump, horizontal damping, fall clamp, facing.
    pub fn step(&self, player: &mut PlayerState, input: &InputState, collider: &WorldCollider) -> Transition {
        let was_grounded = player.is_grounded();

        let move_vector = self.move_vector(input);
        let moving = move_vector.x != 0.0 || move_vector.z != 0.0;

        // Input sets velocity directly; with no input the old velocity is
        // left to decay, so releasing a key slides to a stop
        if moving {
            player.velocity.x = move_vector.x;
            player.velocity.z = move_vector.z;
        }

        self.apply_gravity(player);
        player.position += player.velocity;

        let supported = self.resolve_ground(player, collider);
        let jumped = self.try_jump(player, input);

        self.apply_damping(player);
        self.clamp_fall_speed(player);

        if moving {
            player.facing_yaw = move_vector.x.atan2(move_vector.z);
        }

        if jumped {
            Transition::Jumped
        } else if supported && !was_grounded {
            Transition::Landed
        } else if !supported && was_grounded {
            Transition::LeftGround
        } else {
            Transition::None
        }
    }

    /// Horizontal move vector for an input snapshot
    pub fn move_vector(&self, input: &InputState) -> Vec3 {
        let (x, z) = input.move_axes();
        Vec3::new(x * self.config.move_speed, 0.0, z * self.config.move_speed)
    }

    fn apply_gravity(&self, player: &mut PlayerState) {
        player.velocity.y -= self.config.gravity;
    }

    /// Snap to the ground if a surface is within reach
    ///
    /// The plane supports the character once it sinks below foot height;
    /// a mesh supports it whenever the downward ray hits.
    /// Returns whether the player is supported this frame.
    fn resolve_ground(&self, player: &mut PlayerState, collider: &WorldCollider) -> bool {
        let ground = collider.ground_height_at(player.position);
        let reach = match collider {
            WorldCollider::Plane { .. } => self.config.foot_offset,
            WorldCollider::Mesh { .. } => collider.probe_length(),
        };

        if ground.hit && player.position.y - ground.height < reach {
            player.position.y = ground.height + self.config.foot_offset;
            player.velocity.y = 0.0;
            player.locomotion = Locomotion::Grounded;
            true
        } else {
            if player.is_grounded() {
                player.locomotion = Locomotion::Airborne { jumping: false };
            }
            false
        }
    }

    /// Jump if requested while grounded
    fn try_jump(&self, player: &mut PlayerState, input: &InputState) -> bool {
        if input.jump_requested && player.is_grounded() {
            player.velocity.y = self.config.jump_impulse;
            player.locomotion = Locomotion::Airborne { jumping: true };
            true
        } else {
            false
        }
    }

    fn apply_damping(&self, player: &mut PlayerState) {
        player.velocity.x *= self.config.damping;
        player.velocity.z *= self.config.damping;
    }

    fn clamp_fall_speed(&self, player: &mut PlayerState) {
        player.velocity.y = player.velocity.y.max(-self.config.max_fall_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{flat_quad, TerrainMesh};
    use std::sync::Arc;
    use wanderer_input::Intent;
    use wanderer_math::Triangle;

    const EPSILON: f32 = 0.0001;

    fn plane() -> WorldCollider {
        WorldCollider::plane(0.0)
    }

    fn integrator() -> LocomotionIntegrator {
        LocomotionIntegrator::default()
    }

    fn grounded_at(position: Vec3) -> PlayerState {
        let mut player = PlayerState::new(position);
        player.locomotion = Locomotion::Grounded;
        player
    }

    fn input(intent: Intent) -> InputState {
        InputState::from(intent)
    }

    #[test]
    fn test_new_player() {
        let player = PlayerState::new(Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(player.velocity, Vec3::ZERO);
        assert_eq!(player.facing_yaw, 0.0);
        assert!(player.is_airborne());
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_gravity_never_skipped() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(player.velocity.y, 0.0);

        loco.apply_gravity(&mut player);
        assert!(player.velocity.y < 0.0);
        assert_eq!(player.velocity.y, -DEFAULT_GRAVITY);
    }

    #[test]
    fn test_resting_player_is_re_grounded_every_frame() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        for _ in 0..10 {
            let transition = loco.step(&mut player, &InputState::IDLE, &plane());
            assert_eq!(transition, Transition::None);
            assert!(player.is_grounded());
            assert_eq!(player.velocity.y, 0.0);
        }
    }

    #[test]
    fn test_ground_snap_is_idempotent() {
        let loco = integrator();
        let height = DEFAULT_FOOT_OFFSET;
        let mut player = grounded_at(Vec3::new(3.0, height, -2.0));

        loco.step(&mut player, &InputState::IDLE, &plane());
        assert!((player.position.y - height).abs() < EPSILON);

        loco.step(&mut player, &InputState::IDLE, &plane());
        assert!((player.position.y - height).abs() < EPSILON);
    }

    #[test]
    fn test_jump_impulse_exact() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));

        let transition = loco.step(&mut player, &input(Intent::JUMP), &plane());

        assert_eq!(transition, Transition::Jumped);
        assert_eq!(player.velocity.y, DEFAULT_JUMP_IMPULSE);
        assert!(player.is_jumping());
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let loco = integrator();
        let mut player = PlayerState::new(Vec3::new(0.0, 50.0, 0.0));
        player.velocity.y = -2.0;

        let transition = loco.step(&mut player, &input(Intent::JUMP), &plane());

        assert_eq!(transition, Transition::None);
        assert_eq!(player.velocity.y, -2.0 - DEFAULT_GRAVITY);
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_held_jump_does_not_retrigger_mid_air() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        let jump = input(Intent::JUMP);

        assert_eq!(loco.step(&mut player, &jump, &plane()), Transition::Jumped);

        // Rising: each frame loses exactly one gravity step
        let mut expected = DEFAULT_JUMP_IMPULSE;
        for _ in 0..5 {
            assert_eq!(loco.step(&mut player, &jump, &plane()), Transition::None);
            expected -= DEFAULT_GRAVITY;
            assert!((player.velocity.y - expected).abs() < EPSILON);
            assert!(player.is_jumping());
        }
    }

    #[test]
    fn test_jump_fires_on_landing_frame() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        let jump = input(Intent::JUMP);
        loco.step(&mut player, &jump, &plane());

        let mut jumps = 0;
        for _ in 0..200 {
            if loco.step(&mut player, &jump, &plane()) == Transition::Jumped {
                jumps += 1;
                break;
            }
        }
        assert_eq!(jumps, 1, "held jump should re-fire as soon as the player lands");
        assert_eq!(player.velocity.y, DEFAULT_JUMP_IMPULSE);
    }

    #[test]
    fn test_jump_and_land() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        loco.step(&mut player, &input(Intent::JUMP), &plane());

        let mut landed = false;
        for _ in 0..200 {
            if loco.step(&mut player, &InputState::IDLE, &plane()) == Transition::Landed {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert!(player.is_grounded());
        assert!(!player.is_jumping());
        assert!((player.position.y - DEFAULT_FOOT_OFFSET).abs() < EPSILON);
    }

    #[test]
    fn test_move_up_from_origin() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::ZERO);

        let transition = loco.step(&mut player, &input(Intent::UP), &plane());

        assert_eq!(transition, Transition::None);
        assert!(player.is_grounded());
        assert_eq!(player.position.x, 0.0);
        assert!((player.position.z + DEFAULT_MOVE_SPEED).abs() < EPSILON);
        assert!((player.position.y - DEFAULT_FOOT_OFFSET).abs() < EPSILON);
        // (0, -speed) before damping
        assert_eq!(player.velocity.x, 0.0);
        assert!((player.velocity.z + DEFAULT_MOVE_SPEED * DEFAULT_DAMPING).abs() < EPSILON);
        assert!((player.facing_yaw - std::f32::consts::PI).abs() < EPSILON);
    }

    #[test]
    fn test_horizontal_damping_is_geometric() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        player.velocity = Vec3::new(2.0, 0.0, -1.0);
        let v0 = player.velocity;

        for n in 1..=10 {
            loco.step(&mut player, &InputState::IDLE, &plane());
            let factor = DEFAULT_DAMPING.powi(n);
            assert!((player.velocity.x - v0.x * factor).abs() < EPSILON);
            assert!((player.velocity.z - v0.z * factor).abs() < EPSILON);
            assert!(player.velocity.x > 0.0);
        }
    }

    #[test]
    fn test_release_slides() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        loco.step(&mut player, &input(Intent::RIGHT), &plane());
        let x_after_press = player.position.x;

        loco.step(&mut player, &InputState::IDLE, &plane());
        assert!(player.position.x > x_after_press, "released input should keep sliding");
    }

    #[test]
    fn test_vertical_velocity_not_damped() {
        let loco = integrator();
        let mut player = PlayerState::new(Vec3::new(0.0, 100.0, 0.0));
        player.velocity.y = 5.0;
        loco.step(&mut player, &InputState::IDLE, &plane());
        assert_eq!(player.velocity.y, 5.0 - DEFAULT_GRAVITY);
    }

    #[test]
    fn test_fall_speed_clamped() {
        let loco = integrator();
        let mut player = PlayerState::new(Vec3::new(0.0, 100.0, 0.0));
        player.velocity.y = -24.75;

        loco.step(&mut player, &InputState::IDLE, &plane());

        // Integrated at -25, then clamped
        assert!((player.position.y - 75.0).abs() < EPSILON);
        assert_eq!(player.velocity.y, -DEFAULT_MAX_FALL_SPEED);
    }

    #[test]
    fn test_upward_velocity_not_clamped() {
        let loco = LocomotionIntegrator::new(LocomotionConfig {
            jump_impulse: 50.0,
            ..Default::default()
        });
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        loco.step(&mut player, &input(Intent::JUMP), &plane());
        assert_eq!(player.velocity.y, 50.0);
    }

    #[test]
    fn test_facing_only_changes_with_input() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));

        loco.step(&mut player, &input(Intent::RIGHT), &plane());
        let yaw = player.facing_yaw;
        assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < EPSILON);

        // Sliding and gravity leave the heading alone
        for _ in 0..5 {
            loco.step(&mut player, &InputState::IDLE, &plane());
            assert_eq!(player.facing_yaw, yaw);
        }
    }

    #[test]
    fn test_opposing_input_cancels() {
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.0, 1.0, 0.0));
        let before = player.position;

        loco.step(&mut player, &input(Intent::UP | Intent::DOWN), &plane());

        assert_eq!(player.position.x, before.x);
        assert_eq!(player.position.z, before.z);
        assert_eq!(player.facing_yaw, 0.0);
    }

    #[test]
    fn test_diagonal_move_vector() {
        let loco = integrator();
        let v = loco.move_vector(&input(Intent::DOWN | Intent::LEFT));
        assert_eq!(v, Vec3::new(-DEFAULT_MOVE_SPEED, 0.0, DEFAULT_MOVE_SPEED));
    }

    #[test]
    fn test_plane_snap_band() {
        let loco = integrator();

        // Falling from between foot height and the ray length: not yet supported
        let mut near = PlayerState::new(Vec3::new(0.0, 1.75, 0.0));
        assert_eq!(loco.step(&mut near, &InputState::IDLE, &plane()), Transition::None);
        assert!(near.is_airborne());
        assert!((near.position.y - 1.5).abs() < EPSILON);

        // Sinks below foot height on the following frames and lands there
        let mut landed = false;
        for _ in 0..3 {
            if loco.step(&mut near, &InputState::IDLE, &plane()) == Transition::Landed {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(near.position.y, DEFAULT_FOOT_OFFSET);

        // Well above: still falling
        let mut high = PlayerState::new(Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(loco.step(&mut high, &InputState::IDLE, &plane()), Transition::None);
        assert!(high.is_airborne());

        // Below the plane: pushed back up
        let mut sunk = PlayerState::new(Vec3::new(0.0, -3.0, 0.0));
        loco.step(&mut sunk, &InputState::IDLE, &plane());
        assert!(sunk.is_grounded());
        assert_eq!(sunk.position.y, DEFAULT_FOOT_OFFSET);
    }

    #[test]
    fn test_mesh_snaps_within_ground_reach() {
        let collider = WorldCollider::mesh(Arc::new(TerrainMesh::new(flat_quad(10.0, 0.0))));
        let loco = integrator();

        // 1.5 above the surface after gravity: within reach, snapped
        let mut player = PlayerState::new(Vec3::new(1.0, 1.75, -2.0));
        assert_eq!(loco.step(&mut player, &InputState::IDLE, &collider), Transition::Landed);
        assert_eq!(player.position.y, DEFAULT_FOOT_OFFSET);
    }

    #[test]
    fn test_invalid_settings_fall_back() {
        let loco = LocomotionIntegrator::new(LocomotionConfig {
            move_speed: f32::NAN,
            gravity: 0.0,
            jump_impulse: f32::INFINITY,
            damping: 1.0,
            max_fall_speed: -5.0,
            foot_offset: 1.0,
        });
        let defaults = LocomotionConfig::default();
        assert_eq!(loco.config(), &defaults);

        let loco = LocomotionIntegrator::new(LocomotionConfig {
            damping: 1.5,
            ..Default::default()
        });
        assert_eq!(loco.config().damping, DEFAULT_DAMPING);
    }

    #[test]
    fn test_valid_settings_kept() {
        let config = LocomotionConfig {
            move_speed: 0.5,
            gravity: 0.1,
            jump_impulse: 4.0,
            damping: 0.5,
            max_fall_speed: 10.0,
            foot_offset: 0.5,
        };
        let loco = LocomotionIntegrator::new(config.clone());
        assert_eq!(loco.config(), &config);
    }

    #[test]
    fn test_foot_offset_must_fit_under_ground_reach() {
        let loco = LocomotionIntegrator::new(LocomotionConfig {
            foot_offset: 3.0,
            ..Default::default()
        });
        assert_eq!(loco.config().foot_offset, DEFAULT_FOOT_OFFSET);

        // A resting character stays grounded with the corrected offset
        let mut player = grounded_at(Vec3::new(0.0, DEFAULT_FOOT_OFFSET, 0.0));
        for _ in 0..12 {
            assert_eq!(loco.step(&mut player, &InputState::IDLE, &plane()), Transition::None);
            assert!(player.is_grounded());
        }

        // Reach too short for the default offset as well
        let loco = LocomotionIntegrator::with_ground_reach(LocomotionConfig::default(), 0.8);
        assert_eq!(loco.config().foot_offset, 0.4);
        let collider = WorldCollider::mesh(Arc::new(TerrainMesh::new(flat_quad(10.0, 0.0))))
            .with_probe_length(0.8);
        let mut player = grounded_at(Vec3::new(1.0, 0.4, -2.0));
        for _ in 0..12 {
            assert_eq!(loco.step(&mut player, &InputState::IDLE, &collider), Transition::None);
            assert!(player.is_grounded());
        }
    }

    #[test]
    fn test_mesh_ground_follows_slope() {
        // Ramp rising along +X: y = 0.25 * x
        let ramp = vec![
            Triangle::new(Vec3::new(-20.0, -5.0, -20.0), Vec3::new(20.0, 5.0, -20.0), Vec3::new(20.0, 5.0, 20.0)),
            Triangle::new(Vec3::new(-20.0, -5.0, -20.0), Vec3::new(20.0, 5.0, 20.0), Vec3::new(-20.0, -5.0, 20.0)),
        ];
        let collider = WorldCollider::mesh(Arc::new(TerrainMesh::new(ramp)));
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(0.1, 1.0, 0.3));

        for _ in 0..10 {
            loco.step(&mut player, &input(Intent::RIGHT), &collider);
            assert!(player.is_grounded());
            let surface = 0.25 * player.position.x;
            assert!((player.position.y - (surface + DEFAULT_FOOT_OFFSET)).abs() < 0.001);
        }
    }

    #[test]
    fn test_walking_off_mesh_edge() {
        let collider = WorldCollider::mesh(Arc::new(TerrainMesh::new(flat_quad(2.0, 0.0))));
        let loco = integrator();
        let mut player = grounded_at(Vec3::new(1.5, 1.0, 0.3));
        let right = input(Intent::RIGHT);

        let mut left_ground = false;
        for _ in 0..5 {
            if loco.step(&mut player, &right, &collider) == Transition::LeftGround {
                left_ground = true;
                break;
            }
        }
        assert!(left_ground);
        assert!(player.is_airborne());
        assert!(!player.is_jumping());

        // No mid-air jump after walking off
        let vy = player.velocity.y;
        assert_eq!(loco.step(&mut player, &input(Intent::JUMP), &collider), Transition::None);
        assert_eq!(player.velocity.y, vy - DEFAULT_GRAVITY);
    }

    #[test]
    fn test_mesh_miss_keeps_falling() {
        let collider = WorldCollider::mesh(Arc::new(TerrainMesh::new(flat_quad(10.0, 0.0))));
        let loco = integrator();
        let mut player = PlayerState::new(Vec3::new(1.0, 30.0, -1.0));

        loco.step(&mut player, &InputState::IDLE, &collider);

        assert!(player.is_airborne());
        assert_eq!(player.velocity.y, -DEFAULT_GRAVITY);
        assert!((player.position.y - (30.0 - DEFAULT_GRAVITY)).abs() < EPSILON);
    }
}
