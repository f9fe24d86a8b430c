//! HTTP client for the leaderboard API and the background fetch loop.

use std::sync::mpsc::Sender as StdSender;
use std::time::Duration;

use reqwest::blocking;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinSet;

use crate::engine::board::SceneData;
use crate::engine::scene::SceneId;
use crate::error::{AppError, Result};
use crate::network::{AppMessage, Control};
use crate::types::{Health, KioskConfig};

const CONFIG_PATH: &str = "/api/config";
const HEALTH_PATH: &str = "/api/health";
/// Upper bound for one background request, connect to last body byte.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ── Client ─────────────────────────────────────────────────────────────────────

/// Thin wrapper around a `reqwest::Client` bound to one API base URL.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base` must be an absolute `http(s)://` URL; a trailing `/` is dropped.
    pub fn new(base: &str) -> Result<Self> {
        Self::with_timeout(base, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base: &str, timeout: Duration) -> Result<Self> {
        let base = base.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::Url(base.to_string()));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base: base.to_string(),
            http,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Resolve a URI from the config (e.g. the logo) against the API base.
    /// Absolute and `data:` URIs pass through unchanged.
    pub fn resolve(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") || uri.starts_with("data:") {
            uri.to_string()
        } else if uri.starts_with('/') {
            self.url(uri)
        } else {
            format!("{}/{}", self.base, uri)
        }
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let body = self
            .http
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    pub async fn fetch_scene(&self, scene: SceneId) -> Result<SceneData> {
        let body = self.get_text(scene.endpoint()).await?;
        parse_scene(scene, &body)
    }

    pub async fn fetch_config(&self) -> Result<KioskConfig> {
        let body = self.get_text(CONFIG_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Startup-only: fetch `/api/config` on the calling thread.
    ///
    /// Must not run inside a Tokio runtime.
    pub fn fetch_config_blocking(&self) -> Result<KioskConfig> {
        let body = blocking::get(self.url(CONFIG_PATH))?
            .error_for_status()?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Startup-only: probe `/api/health` on the calling thread.
    pub fn health_blocking(&self) -> Result<Health> {
        // An unhealthy server answers 500 with a JSON body; read it either way.
        let body = blocking::get(self.url(HEALTH_PATH))?.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Parse an endpoint body into the variant for `scene`.
pub fn parse_scene(scene: SceneId, body: &str) -> Result<SceneData> {
    let data = match scene {
        SceneId::Top10 => SceneData::Top10(serde_json::from_str(body)?),
        SceneId::Champions => SceneData::Champions(serde_json::from_str(body)?),
        SceneId::Activity => SceneData::Activity(serde_json::from_str(body)?),
        SceneId::Roster => SceneData::Roster(serde_json::from_str(body)?),
        SceneId::Statistics => SceneData::Statistics(serde_json::from_str(body)?),
    };
    Ok(data)
}

/// Fetch the kiosk configuration at startup, falling back to the built-in
/// defaults when the API is unreachable or returns garbage.
pub fn load_kiosk_config(api: &ApiClient) -> KioskConfig {
    match api.fetch_config_blocking() {
        Ok(config) => {
            log::info!("Loaded kiosk config for \"{}\"", config.bar_name);
            config
        }
        Err(e) => {
            log::error!("Failed to load config from {}: {e}", api.base());
            KioskConfig::default()
        }
    }
}

// ── Fetch loop ─────────────────────────────────────────────────────────────────

fn deliver(tx: &StdSender<AppMessage>, ctx: &egui::Context, msg: AppMessage) -> Result<()> {
    tx.send(msg).map_err(|_| AppError::ChannelClosed)?;
    ctx.request_repaint();
    Ok(())
}

async fn load_scene(
    api: ApiClient,
    tx: StdSender<AppMessage>,
    ctx: egui::Context,
    scene: SceneId,
    generation: u64,
) -> Result<()> {
    let data = api.fetch_scene(scene).await?;
    log::debug!(
        "Loaded {scene} ({} records, generation {generation})",
        data.record_count()
    );
    deliver(&tx, &ctx, AppMessage::Scene { generation, data })
}

async fn reload_config(
    api: ApiClient,
    tx: StdSender<AppMessage>,
    ctx: egui::Context,
) -> Result<()> {
    let config = api.fetch_config().await?;
    log::info!("Reloaded kiosk config.");
    deliver(&tx, &ctx, AppMessage::Config(config))
}

/// Long-running async loop: turns [`Control`] commands into API requests and
/// forwards the parsed results to the UI thread as [`AppMessage`]s.
///
/// Each request runs as its own task so a slow endpoint never holds up the
/// next scene. Failures are logged and dropped; the UI keeps whatever it
/// showed before. Exits cleanly, after in-flight requests settle, when the
/// `control_rx` channel is closed (UI shut down).
pub async fn run_fetch_loop(
    tx: StdSender<AppMessage>,
    ctx: egui::Context,
    mut control_rx: Receiver<Control>,
    api: ApiClient,
) {
    let mut tasks = JoinSet::new();

    while let Some(ctrl) = control_rx.recv().await {
        while tasks.try_join_next().is_some() {}

        match ctrl {
            Control::Load { scene, generation } => {
                let (api, tx, ctx) = (api.clone(), tx.clone(), ctx.clone());
                tasks.spawn(async move {
                    if let Err(e) = load_scene(api, tx, ctx, scene, generation).await {
                        log::warn!("Failed to load {scene}: {e}");
                    }
                });
            }
            Control::ReloadConfig => {
                let (api, tx, ctx) = (api.clone(), tx.clone(), ctx.clone());
                tasks.spawn(async move {
                    if let Err(e) = reload_config(api, tx, ctx).await {
                        log::warn!("Failed to reload config: {e}");
                    }
                });
            }
        }
    }

    while tasks.join_next().await.is_some() {}
    log::info!("Control channel closed, fetch loop exiting.");
}
