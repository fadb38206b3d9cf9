//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`WANDERER_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use wanderer_core::{CameraMode, CameraPose, CameraRigConfig, DeviceClass, DeviceInfo, Vec3};
use wanderer_physics::{LocomotionConfig, WorldCollider};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Follow camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input source configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Character movement tuning
    #[serde(default)]
    pub locomotion: LocomotionSettings,
    /// Terrain and character assets
    #[serde(default)]
    pub assets: AssetConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`WANDERER_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // WANDERER_CAMERA__SMOOTHING=0.2 -> camera.smoothing = 0.2
        figment = figment.merge(Env::prefixed("WANDERER_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Write player and camera pose into the title bar every this many frames
    /// (0 disables)
    pub title_stats_interval: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wanderer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            title_stats_interval: 30,
        }
    }
}

/// Follow camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub start_position: [f32; 3],
    /// Starting look-at point [x, y, z]
    pub start_target: [f32; 3],
    /// `chase` rotates the offset with the character, `fixed` keeps it in world space
    pub mode: CameraMode,
    /// Offset from the character to the camera [x, y, z]
    pub offset: [f32; 3],
    /// Look-at height above the character origin
    pub look_at_height: f32,
    /// Fraction of the remaining distance covered per frame, in (0, 1]
    pub smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, 10.0, 20.0],
            start_target: [0.0, 0.0, 0.0],
            mode: CameraMode::Chase,
            offset: [0.0, 5.0, 15.0],
            look_at_height: 2.0,
            smoothing: 0.1,
        }
    }
}

impl CameraConfig {
    pub fn to_rig_config(&self) -> CameraRigConfig {
        CameraRigConfig {
            mode: self.mode,
            offset: Vec3::from(self.offset),
            look_at_height: self.look_at_height,
            smoothing: self.smoothing,
            initial: CameraPose {
                position: Vec3::from(self.start_position),
                target: Vec3::from(self.start_target),
            },
        }
    }
}

/// When the on-screen touch controls are mounted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchControls {
    /// Detect from the device
    #[default]
    Auto,
    Always,
    Never,
}

/// Input source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub touch_controls: TouchControls,
    /// User agent string to match against mobile patterns, if the host
    /// provides one
    pub user_agent: Option<String>,
}

impl InputConfig {
    /// Decide the device class for this session
    pub fn device_class(&self) -> DeviceClass {
        match self.touch_controls {
            TouchControls::Always => DeviceClass::Touch,
            TouchControls::Never => DeviceClass::Desktop,
            TouchControls::Auto => {
                let mut info = DeviceInfo::native();
                if let Some(agent) = &self.user_agent {
                    info = info.with_user_agent(agent.clone());
                }
                DeviceClass::detect(&info)
            }
        }
    }
}

/// Character movement tuning, all per frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionSettings {
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Subtracted from vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity set by a jump
    pub jump_impulse: f32,
    /// Horizontal velocity multiplier per frame
    pub damping: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Character origin height above the ground
    pub foot_offset: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        let defaults = LocomotionConfig::default();
        Self {
            move_speed: defaults.move_speed,
            gravity: defaults.gravity,
            jump_impulse: defaults.jump_impulse,
            damping: defaults.damping,
            max_fall_speed: defaults.max_fall_speed,
            foot_offset: defaults.foot_offset,
        }
    }
}

impl LocomotionSettings {
    pub fn to_locomotion_config(&self) -> LocomotionConfig {
        LocomotionConfig {
            move_speed: self.move_speed,
            gravity: self.gravity,
            jump_impulse: self.jump_impulse,
            damping: self.damping,
            max_fall_speed: self.max_fall_speed,
            foot_offset: self.foot_offset,
        }
    }
}

/// Terrain and character assets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Terrain model (.glb / .gltf)
    pub terrain_path: PathBuf,
    /// Character model (.glb / .gltf)
    pub character_path: PathBuf,
    /// Spawn point for a loaded character [x, y, z]
    pub spawn: [f32; 3],
    /// Spawn point for the fallback box [x, y, z]
    pub fallback_spawn: [f32; 3],
    /// Ground plane height used until terrain loads
    pub plane_height: f32,
    /// How far below the character the terrain probe reaches
    pub ground_probe_length: f32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            terrain_path: PathBuf::from("assets/terrain.glb"),
            character_path: PathBuf::from("assets/character.glb"),
            spawn: [0.0, 2.0, 0.0],
            fallback_spawn: [0.0, 3.0, 0.0],
            plane_height: wanderer_physics::DEFAULT_PLANE_HEIGHT,
            ground_probe_length: wanderer_physics::DEFAULT_GROUND_PROBE_LENGTH,
        }
    }
}

impl AssetConfig {
    /// Collider used until the terrain mesh is published
    pub fn initial_collider(&self) -> WorldCollider {
        WorldCollider::plane(self.plane_height).with_probe_length(self.ground_probe_length)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
