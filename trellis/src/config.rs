//! Per-surface render configuration.
//!
//! Hosts usually ship this alongside their own settings, so it deserializes
//! from JSON with every field optional.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primitives::{Insets, Rect};
use crate::query::Viewport;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid render config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("overscan must be non-negative, got {0:?}")]
    NegativeOverscan(Insets),
}

/// Settings for one hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Extra area around the visible bounds that is materialized ahead of
    /// scrolling.
    pub overscan: Insets,

    /// When a key comes back while its delete transition is still running,
    /// reuse that object instead of acquiring a fresh one.
    pub reuse_pending_deletes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            overscan: Insets::ZERO,
            reuse_pending_deletes: true,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let o = self.overscan;
        if o.top < 0.0 || o.right < 0.0 || o.bottom < 0.0 || o.left < 0.0 {
            return Err(ConfigError::NegativeOverscan(o));
        }
        Ok(())
    }

    /// Viewport for the given visible bounds with this config's overscan.
    pub fn viewport(&self, visible: Rect) -> Viewport {
        Viewport::new(visible).with_overscan(self.overscan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert!(config.reuse_pending_deletes);
    }

    #[test]
    fn partial_overscan() {
        let config = RenderConfig::from_json(r#"{"overscan": {"top": 100, "bottom": 200}}"#).unwrap();
        assert_eq!(config.overscan, Insets::new(100.0, 0.0, 200.0, 0.0));
        let vp = config.viewport(Rect::new(0.0, 500.0, 320.0, 480.0));
        assert_eq!(vp.query_rect(), Rect::new(0.0, 400.0, 320.0, 780.0));
    }

    #[test]
    fn rejects_negative_overscan() {
        let err = RenderConfig::from_json(r#"{"overscan": {"top": -1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeOverscan(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = RenderConfig::from_json("{overscan").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
