//! Wanderer - third-person character controller
//!
//! Walk a character over terrain with keyboard or touch controls while a
//! chase camera follows.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use wanderer::assets::AssetLoader;
use wanderer::config::AppConfig;
use wanderer::input::{InputAction, InputMapper};
use wanderer::systems::{TitlePresenter, WindowSystem};
use wanderer_core::{CameraRig, FrameDriver, Vec3};
use wanderer_input::{InputAggregator, KeyboardSource, MountedInput, TouchLayout, TouchSource};
use wanderer_physics::{ColliderSlot, LocomotionIntegrator};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    presenter: Option<TitlePresenter>,
    driver: FrameDriver,
    keyboard: KeyboardSource,
    touch: Option<TouchSource>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let device = config.input.device_class();
        let MountedInput {
            aggregator,
            keyboard,
            touch,
        } = InputAggregator::mount(device, TouchLayout::default());

        let slot = Arc::new(ColliderSlot::new(config.assets.initial_collider()));
        let (characters_tx, characters_rx) = crossbeam_channel::bounded(1);

        let driver = FrameDriver::new(
            aggregator,
            Arc::clone(&slot),
            LocomotionIntegrator::with_ground_reach(
                config.locomotion.to_locomotion_config(),
                config.assets.ground_probe_length,
            ),
            CameraRig::new(config.camera.to_rig_config()),
            characters_rx,
        );

        let loader = AssetLoader {
            terrain_path: config.assets.terrain_path.clone(),
            character_path: config.assets.character_path.clone(),
            spawn: Vec3::from(config.assets.spawn),
            fallback_spawn: Vec3::from(config.assets.fallback_spawn),
        };
        // The loader thread runs detached; its results arrive through the slot and channel
        if let Err(e) = loader.spawn(slot, characters_tx) {
            log::error!("{}; running without assets", e);
        }

        Self {
            config,
            window: None,
            presenter: None,
            driver,
            keyboard,
            touch,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.keyboard.release_all();
        if let Some(touch) = &mut self.touch {
            touch.release_all();
        }
        self.driver.shutdown();
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => {
                self.presenter = Some(window.title_presenter(self.config.window.title_stats_interval));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("{}", e);
                self.shutdown(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                self.keyboard.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => {
                            self.shutdown(event_loop);
                            return;
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {}
                    }
                    if !event.repeat || event.state == ElementState::Released {
                        self.keyboard.process_key(key, event.state);
                    }
                }
            }

            WindowEvent::Touch(touch) => {
                if let (Some(source), Some(window)) = (&mut self.touch, &self.window) {
                    source.process_touch(touch.id, touch.phase, touch.location, &window.viewport());
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(presenter) = self.presenter.as_mut() else {
                    return;
                };
                if self.driver.frame(presenter) {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Wanderer");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
