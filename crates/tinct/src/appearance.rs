//! Appearance mode (light/dark) and its detection.
//!
//! Every color resolution reads an [`AppearanceMode`]. The mode is supplied
//! by the host environment: [`detect_appearance_mode`] queries the OS through
//! the `dark-light` crate, after checking the `TINCT_APPEARANCE` environment
//! variable. Override detection for tests with [`set_appearance_detector`]:
//!
//! ```rust
//! use tinct::{detect_appearance_mode, set_appearance_detector, AppearanceMode};
//!
//! set_appearance_detector(|| AppearanceMode::Light);
//! assert_eq!(detect_appearance_mode(), AppearanceMode::Light);
//! ```
//!
//! The mode currently in effect is held by the
//! [`ThemeRegistry`](crate::ThemeRegistry) in an [`AppearanceCell`], so a
//! user toggle takes effect at the next resolution without touching themes.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use dark_light::Mode as OsMode;
use once_cell::sync::Lazy;

/// Environment variable that forces the detected appearance (`dark`/`light`).
pub const APPEARANCE_ENV: &str = "TINCT_APPEARANCE";

/// The active appearance mode. Closed: there is no "unknown" mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppearanceMode {
    /// Dark background, light text.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl AppearanceMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            AppearanceMode::Dark => AppearanceMode::Light,
            AppearanceMode::Light => AppearanceMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == AppearanceMode::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            AppearanceMode::Dark => "dark",
            AppearanceMode::Light => "light",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a string that is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown appearance mode '{0}' (expected 'dark' or 'light')")]
pub struct UnknownAppearanceMode(pub String);

impl FromStr for AppearanceMode {
    type Err = UnknownAppearanceMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(AppearanceMode::Dark),
            "light" => Ok(AppearanceMode::Light),
            _ => Err(UnknownAppearanceMode(s.to_string())),
        }
    }
}

type AppearanceDetector = fn() -> AppearanceMode;

static APPEARANCE_DETECTOR: Lazy<Mutex<AppearanceDetector>> =
    Lazy::new(|| Mutex::new(default_appearance_detector));

/// Overrides the detector used by [`detect_appearance_mode`].
pub fn set_appearance_detector(detector: AppearanceDetector) {
    let mut guard = APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the default detector (environment variable, then OS).
pub fn reset_appearance_detector() {
    set_appearance_detector(default_appearance_detector);
}

/// Detects the appearance mode using the configured detector.
///
/// The default detector honours [`APPEARANCE_ENV`] first, then asks the OS.
/// When the OS gives no answer the result is [`AppearanceMode::Dark`].
pub fn detect_appearance_mode() -> AppearanceMode {
    let detector = *APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn default_appearance_detector() -> AppearanceMode {
    if let Some(mode) = env_appearance() {
        return mode;
    }
    match dark_light::detect() {
        Ok(OsMode::Light) => AppearanceMode::Light,
        Ok(_) => AppearanceMode::Dark,
        Err(err) => {
            tracing::debug!(error = %err, "appearance detection failed, assuming dark");
            AppearanceMode::Dark
        }
    }
}

fn env_appearance() -> Option<AppearanceMode> {
    let value = std::env::var(APPEARANCE_ENV).ok()?;
    match value.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!(env = APPEARANCE_ENV, value = %value, "{}", err);
            None
        }
    }
}

/// Lock-free holder for the current [`AppearanceMode`].
#[derive(Debug)]
pub struct AppearanceCell(AtomicU8);

impl AppearanceCell {
    const DARK: u8 = 0;
    const LIGHT: u8 = 1;

    pub fn new(mode: AppearanceMode) -> Self {
        Self(AtomicU8::new(Self::encode(mode)))
    }

    pub fn load(&self) -> AppearanceMode {
        match self.0.load(Ordering::Acquire) {
            Self::LIGHT => AppearanceMode::Light,
            _ => AppearanceMode::Dark,
        }
    }

    /// Stores `mode`, returning the previous mode.
    pub fn store(&self, mode: AppearanceMode) -> AppearanceMode {
        match self.0.swap(Self::encode(mode), Ordering::AcqRel) {
            Self::LIGHT => AppearanceMode::Light,
            _ => AppearanceMode::Dark,
        }
    }

    /// Flips the mode atomically, returning the new mode.
    pub fn toggle(&self) -> AppearanceMode {
        let previous = self.0.fetch_xor(1, Ordering::AcqRel);
        if previous == Self::LIGHT {
            AppearanceMode::Dark
        } else {
            AppearanceMode::Light
        }
    }

    fn encode(mode: AppearanceMode) -> u8 {
        match mode {
            AppearanceMode::Dark => Self::DARK,
            AppearanceMode::Light => Self::LIGHT,
        }
    }
}

impl Default for AppearanceCell {
    fn default() -> Self {
        Self::new(AppearanceMode::default())
    }
}
