use std::time::Duration;

use serde::{Deserialize, Serialize};

// Longest animation duration in button.module.css
pub const CLICKED_TIMEOUT_MS: u64 = 400;

pub const LOADING_CLOSE_DURATION_MS: u64 = 200;

/// `setTimeout` takes a signed 32-bit delay.
pub const MAX_TIMEOUT_MS: u64 = i32::MAX as u64;

/// Timings shared by every `Button` under a `provide_context` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub clicked_timeout_ms: u64,
    pub loading_close_duration_ms: u64,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            clicked_timeout_ms: CLICKED_TIMEOUT_MS,
            loading_close_duration_ms: LOADING_CLOSE_DURATION_MS,
        }
    }
}

impl ButtonConfig {
    pub fn clicked_timeout(&self) -> Duration {
        Duration::from_millis(self.clicked_timeout_ms.min(MAX_TIMEOUT_MS))
    }

    pub fn loading_close_duration(&self) -> Duration {
        Duration::from_millis(self.loading_close_duration_ms.min(MAX_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stylesheet_timings() {
        let config = ButtonConfig::default();
        assert_eq!(config.clicked_timeout(), Duration::from_millis(400));
        assert_eq!(config.loading_close_duration(), Duration::from_millis(200));
    }

    #[test]
    fn oversized_timings_are_clamped() {
        let config = ButtonConfig {
            clicked_timeout_ms: u64::MAX,
            loading_close_duration_ms: MAX_TIMEOUT_MS + 1,
        };
        assert_eq!(config.clicked_timeout(), Duration::from_millis(MAX_TIMEOUT_MS));
        assert_eq!(
            config.loading_close_duration(),
            Duration::from_millis(MAX_TIMEOUT_MS)
        );
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: ButtonConfig =
            serde_json::from_str(r#"{ "clicked_timeout_ms": 250 }"#).unwrap();
        assert_eq!(config.clicked_timeout_ms, 250);
        assert_eq!(config.loading_close_duration_ms, LOADING_CLOSE_DURATION_MS);
    }
}
