//! Window management system
//!
//! Handles window creation, fullscreen toggle, and the title-bar presenter.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use wanderer_core::{FrameOutput, FrameSink};
use wanderer_input::Viewport;
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Current drawable area, for touch hit testing
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.inner_size(), self.window.scale_factor())
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Presenter that writes frame state into this window's title
    pub fn title_presenter(&self, interval: u32) -> TitlePresenter {
        TitlePresenter {
            window: Arc::clone(&self.window),
            base_title: self.base_title.clone(),
            interval,
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Frame sink that shows player and camera pose in the title bar
///
/// Only every `interval`-th frame is written; title updates are slow on
/// some platforms.
pub struct TitlePresenter {
    window: Arc<Window>,
    base_title: String,
    interval: u32,
}

impl FrameSink for TitlePresenter {
    fn present(&mut self, frame: &FrameOutput) {
        if self.interval == 0 || frame.frame % u64::from(self.interval) != 0 {
            return;
        }
        self.window.set_title(&format_title(&self.base_title, frame));
    }
}

/// Title text for a frame
pub fn format_title(base: &str, frame: &FrameOutput) -> String {
    let ground = if frame.terrain_loaded { "terrain" } else { "plane" };
    let camera = frame.camera.position;
    match frame.player {
        Some(player) => format!(
            "{} - ({:.1}, {:.1}, {:.1}) yaw {:.2} cam ({:.1}, {:.1}, {:.1}) [{}]",
            base,
            player.position.x,
            player.position.y,
            player.position.z,
            player.yaw,
            camera.x,
            camera.y,
            camera.z,
            ground
        ),
        None => format!("{} - loading character [{}]", base, ground),
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
