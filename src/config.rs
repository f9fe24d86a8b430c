//! Launch settings: where the API lives and how the window behaves.
//!
//! Layered with figment: built-in defaults, then `KIOSK_*` environment
//! variables, then the first command-line argument (API base URL).
//! Branding, theme and timing come from `/api/config` instead, see
//! [`crate::types::KioskConfig`].

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::engine::scroll::{ScrollPolicy, ScrollSettings};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Scheme + host (+ port) of the leaderboard API, no trailing path.
    pub api_base: String,
    pub fullscreen: bool,
    pub scroll_policy: ScrollPolicy,
    /// Auto-scroll speed in points per second.
    pub scroll_speed: f32,
    pub edge_pause_ms: u64,
    /// Delay between a scene change and the start of auto-scroll.
    pub settle_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".to_string(),
            fullscreen: true,
            scroll_policy: ScrollPolicy::Reset,
            scroll_speed: 40.0,
            edge_pause_ms: 3_000,
            settle_delay_ms: 500,
        }
    }
}

impl Settings {
    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default())).merge(Env::prefixed("KIOSK_"))
    }

    /// Load settings; `api_base` from the command line wins over everything.
    pub fn load(api_base: Option<String>) -> Result<Self> {
        let mut settings: Settings = Self::figment().extract()?;
        if let Some(base) = api_base {
            settings.api_base = base;
        }
        settings.api_base = settings.api_base.trim_end_matches('/').to_string();
        Ok(settings)
    }

    pub fn scroll(&self) -> ScrollSettings {
        ScrollSettings {
            policy: self.scroll_policy,
            pixels_per_second: self.scroll_speed,
            edge_pause: Duration::from_millis(self.edge_pause_ms),
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_environment() {
        Jail::expect_with(|_jail| {
            let s = Settings::load(None).expect("load");
            assert_eq!(s, Settings::default());
            assert_eq!(s.scroll().edge_pause, Duration::from_secs(3));
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("KIOSK_API_BASE", "http://10.0.0.5:8080/");
            jail.set_env("KIOSK_FULLSCREEN", "false");
            jail.set_env("KIOSK_SCROLL_POLICY", "bounce");
            jail.set_env("KIOSK_SCROLL_SPEED", "25.5");
            jail.set_env("KIOSK_SETTLE_DELAY_MS", "750");

            let s = Settings::load(None).expect("load");
            assert_eq!(s.api_base, "http://10.0.0.5:8080");
            assert!(!s.fullscreen);
            assert_eq!(s.scroll_policy, ScrollPolicy::Bounce);
            assert_eq!(s.scroll_speed, 25.5);
            assert_eq!(s.settle_delay(), Duration::from_millis(750));
            Ok(())
        });
    }

    #[test]
    fn command_line_base_wins() {
        Jail::expect_with(|jail| {
            jail.set_env("KIOSK_API_BASE", "http://ignored");
            let s = Settings::load(Some("http://bar.local:5000".to_string())).expect("load");
            assert_eq!(s.api_base, "http://bar.local:5000");
            Ok(())
        });
    }

    #[test]
    fn bad_policy_is_a_config_error() {
        Jail::expect_with(|jail| {
            jail.set_env("KIOSK_SCROLL_POLICY", "sideways");
            assert!(Settings::load(None).is_err());
            Ok(())
        });
    }
}
