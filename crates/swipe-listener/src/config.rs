//! Listener configuration.
//!
//! A [`SwipeConfig`] is resolved once when the listener is registered and is
//! immutable afterwards. It can be built in code with the `with_*` methods or
//! loaded from a JSON or TOML document that uses the camelCase option names:
//!
//! ```
//! use swipe_listener::SwipeConfig;
//!
//! let config = SwipeConfig::from_json_str(r#"{ "minHorizontal": 40, "lockAxis": false }"#)?;
//! assert_eq!(config.min_horizontal, 40.0);
//! assert_eq!(config.min_vertical, 10.0);
//! # Ok::<(), swipe_listener::Error>(())
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use swipe_listener_core::logging::targets;

use crate::error::{Error, Result};
use crate::events::SwipeEvent;

/// Default minimum horizontal travel in pixels.
pub const DEFAULT_MIN_HORIZONTAL: f32 = 10.0;

/// Default minimum vertical travel in pixels.
pub const DEFAULT_MIN_VERTICAL: f32 = 10.0;

/// Default horizontal straightness tolerance in pixels.
pub const DEFAULT_DELTA_HORIZONTAL: f32 = 3.0;

/// Default vertical straightness tolerance in pixels.
pub const DEFAULT_DELTA_VERTICAL: f32 = 5.0;

/// Predicate deciding per progress event whether to suppress scrolling.
pub type ScrollPredicate = Arc<dyn Fn(&SwipeEvent) -> bool + Send + Sync>;

/// Whether the listener suppresses platform scrolling while swiping.
#[derive(Clone, Default)]
pub enum PreventScroll {
    /// Never suppress.
    #[default]
    Never,
    /// Suppress on every progress event.
    Always,
    /// Suppress when the predicate returns `true` for the progress event
    /// about to be dispatched.
    When(ScrollPredicate),
}

impl PreventScroll {
    /// Build a predicate policy.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&SwipeEvent) -> bool + Send + Sync + 'static,
    {
        Self::When(Arc::new(predicate))
    }

    /// Evaluate the policy for a progress event.
    pub fn should_prevent(&self, event: &SwipeEvent) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::When(predicate) => predicate(event),
        }
    }

    /// Whether scrolling can never be suppressed.
    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }
}

impl From<bool> for PreventScroll {
    fn from(value: bool) -> Self {
        if value { Self::Always } else { Self::Never }
    }
}

impl fmt::Debug for PreventScroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str("Never"),
            Self::Always => f.write_str("Always"),
            Self::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

// Files can only express the boolean form.
impl<'de> Deserialize<'de> for PreventScroll {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::from)
    }
}

/// Configuration for a [`SwipeListener`](crate::SwipeListener).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SwipeConfig {
    /// Minimum net horizontal travel, in pixels, to consider left/right.
    pub min_horizontal: f32,
    /// Minimum net vertical travel, in pixels, to consider top/bottom.
    pub min_vertical: f32,
    /// Maximum distance between the furthest horizontal excursion and the
    /// horizontal endpoint.
    pub delta_horizontal: f32,
    /// Maximum distance between the furthest vertical excursion and the
    /// vertical endpoint.
    pub delta_vertical: f32,
    /// Scroll suppression policy applied to progress events.
    pub prevent_scroll: PreventScroll,
    /// Keep only the axis with the larger net travel.
    pub lock_axis: bool,
    /// Listen to touch input.
    pub touch: bool,
    /// Listen to mouse input.
    pub mouse: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_horizontal: DEFAULT_MIN_HORIZONTAL,
            min_vertical: DEFAULT_MIN_VERTICAL,
            delta_horizontal: DEFAULT_DELTA_HORIZONTAL,
            delta_vertical: DEFAULT_DELTA_VERTICAL,
            prevent_scroll: PreventScroll::Never,
            lock_axis: true,
            touch: true,
            mouse: true,
        }
    }
}

impl SwipeConfig {
    /// Creates a configuration with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_horizontal(mut self, pixels: f32) -> Self {
        self.min_horizontal = pixels;
        self
    }

    pub fn with_min_vertical(mut self, pixels: f32) -> Self {
        self.min_vertical = pixels;
        self
    }

    pub fn with_delta_horizontal(mut self, pixels: f32) -> Self {
        self.delta_horizontal = pixels;
        self
    }

    pub fn with_delta_vertical(mut self, pixels: f32) -> Self {
        self.delta_vertical = pixels;
        self
    }

    /// Sets the scroll policy; accepts a `bool` or a [`PreventScroll`].
    pub fn with_prevent_scroll(mut self, policy: impl Into<PreventScroll>) -> Self {
        self.prevent_scroll = policy.into();
        self
    }

    pub fn with_lock_axis(mut self, lock: bool) -> Self {
        self.lock_axis = lock;
        self
    }

    pub fn with_touch(mut self, enabled: bool) -> Self {
        self.touch = enabled;
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    /// Hint for the host's touch-move listener: `true` when the listener
    /// never calls `prevent_default`, so the platform may scroll without
    /// waiting for it.
    pub fn passive_hint(&self) -> bool {
        self.prevent_scroll.is_never()
    }

    /// Checks that every threshold is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("minHorizontal", self.min_horizontal),
            ("minVertical", self.min_vertical),
            ("deltaHorizontal", self.delta_horizontal),
            ("deltaVertical", self.delta_vertical),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() {
                return Err(Error::invalid_value(field, format!("{value} is not finite")));
            }
            if value < 0.0 {
                return Err(Error::invalid_value(field, format!("{value} is negative")));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| Error::parse("JSON", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse("TOML", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = parse(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded swipe configuration");
        Ok(config)
    }
}
