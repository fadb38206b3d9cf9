//! Device-class detection
//!
//! Performed once when the scene mounts. The result decides whether the
//! touch overlay exists at all and never changes during a session.

/// User-agent fragments that identify handheld devices (matched case-insensitively)
const MOBILE_AGENTS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// What the host reports about its input hardware
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Maximum simultaneous touch points (0 when touch is unsupported)
    pub max_touch_points: u32,
    /// Whether the host delivers touch events at all
    pub touch_events: bool,
    /// Browser-style user agent, if the host has one
    pub user_agent: Option<String>,
}

impl DeviceInfo {
    /// Describe the native platform
    ///
    /// Only touch event support is known at build time; the touch point
    /// count is left at 0 rather than guessed.
    pub fn native() -> Self {
        let handheld = cfg!(any(target_os = "android", target_os = "ios"));
        Self {
            max_touch_points: 0,
            touch_events: handheld,
            user_agent: None,
        }
    }

    /// Builder: set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn has_mobile_agent(&self) -> bool {
        self.user_agent
            .as_deref()
            .map(|agent| {
                let agent = agent.to_ascii_lowercase();
                MOBILE_AGENTS.iter().any(|pattern| agent.contains(pattern))
            })
            .unwrap_or(false)
    }
}

/// Input device class for the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Keyboard only
    Desktop,
    /// Touch-capable; gets the on-screen overlay in addition to the keyboard
    Touch,
}

impl DeviceClass {
    /// Classify a device from its capabilities
    pub fn detect(info: &DeviceInfo) -> Self {
        if info.has_mobile_agent() || info.max_touch_points > 0 || info.touch_events {
            DeviceClass::Touch
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_touch(self) -> bool {
        self == DeviceClass::Touch
    }
}
