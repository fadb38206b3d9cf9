//! Per-frame driver
//!
//! Runs one tick per display refresh:
//! - Character readiness → player spawn
//! - Collider snapshot
//! - Input snapshot → locomotion
//! - Camera follow
//! - Frame output to the presentation sink

use std::sync::Arc;

use crossbeam_channel::{Receiver, TryRecvError};
use wanderer_input::InputAggregator;
use wanderer_physics::{ColliderSlot, LocomotionIntegrator, PlayerState, Transition};

use crate::camera_rig::CameraRig;
use crate::character::CharacterRig;
use crate::output::{FrameOutput, FrameSink, PlayerTransform};

/// Owns the simulation state and advances it once per frame
///
/// Everything here lives on the frame thread. Other threads reach it only
/// through input source handles, the collider slot and the character channel.
pub struct FrameDriver {
    input: InputAggregator,
    collider: Arc<ColliderSlot>,
    integrator: LocomotionIntegrator,
    camera: CameraRig,
    characters: Receiver<CharacterRig>,
    player: Option<PlayerState>,
    rig: Option<CharacterRig>,
    mesh_seen: bool,
    running: bool,
    frame: u64,
}

impl FrameDriver {
    pub fn new(
        input: InputAggregator,
        collider: Arc<ColliderSlot>,
        integrator: LocomotionIntegrator,
        camera: CameraRig,
        characters: Receiver<CharacterRig>,
    ) -> Self {
        Self {
            input,
            collider,
            integrator,
            camera,
            characters,
            player: None,
            rig: None,
            mesh_seen: false,
            running: true,
            frame: 0,
        }
    }

    /// Run one frame and present it
    ///
    /// Returns whether another frame should be scheduled. After
    /// [`shutdown`](Self::shutdown) this does nothing and returns false.
    pub fn frame<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if !self.running {
            return false;
        }

        // 1. Character readiness
        self.receive_characters();

        // 2. Collider snapshot, held for the whole frame
        let collider = self.collider.current();
        if collider.is_mesh_backed() && !self.mesh_seen {
            self.mesh_seen = true;
            log::info!("Terrain collision active from frame {}", self.frame);
        }

        // 3. Input snapshot
        let input = self.input.current_intent();

        // 4. Locomotion and camera
        if let Some(player) = self.player.as_mut() {
            match self.integrator.step(player, &input, &collider) {
                Transition::None => {}
                Transition::Landed => log::debug!("Landed at {:?}", player.position),
                Transition::LeftGround => log::debug!("Left ground at {:?}", player.position),
                Transition::Jumped => log::debug!("Jumped from {:?}", player.position),
            }
            self.camera.follow(player);
        }

        // 5. Present
        let output = FrameOutput {
            frame: self.frame,
            player: self.player.as_ref().map(PlayerTransform::from),
            camera: self.camera.pose(),
            terrain_loaded: collider.is_mesh_backed(),
        };
        sink.present(&output);

        self.frame += 1;
        true
    }

    fn receive_characters(&mut self) {
        loop {
            match self.characters.try_recv() {
                Ok(rig) => {
                    if self.player.is_some() {
                        log::warn!("Ignoring extra character rig {:?}", rig.source);
                        continue;
                    }
                    log::info!("Spawning player at {:?} ({:?})", rig.spawn, rig.source);
                    self.player = Some(PlayerState::new(rig.spawn));
                    self.rig = Some(rig);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.player.is_none() {
                        log::warn!("Character loader gone before a rig arrived");
                    }
                    // Swap in a channel that never yields so we stop polling a dead sender
                    self.characters = crossbeam_channel::never();
                    break;
                }
            }
        }
    }

    /// Stop scheduling frames and detach every input source
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.input.detach_all();
        log::info!("Frame driver stopped after {} frames", self.frame);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The player, once the character rig has arrived
    pub fn player(&self) -> Option<&PlayerState> {
        self.player.as_ref()
    }

    /// The character rig the player was spawned from
    pub fn rig(&self) -> Option<&CharacterRig> {
        self.rig.as_ref()
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    /// Frames presented so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
