//! Application orchestrator: owns all kiosk state and drives the scene views.

use std::sync::mpsc::{self as std_mpsc, Receiver as StdReceiver};
use std::thread;
use std::time::Duration;

use crate::config::Settings;
use crate::engine::{
    board::SceneBoard,
    player::{PlayerEvent, PlayerTiming, ScenePlayer},
    scroll::ScrollAnimator,
};
use crate::network::{AppMessage, Control, client::{self, ApiClient}};
use crate::types::KioskConfig;
use crate::ui::theme::Theme;
use crate::ui::view::{SceneState, SceneView, scene_heading};
use crate::ui::views::{
    activity_view::ActivityView, champions_view::ChampionsView, roster_view::RosterView,
    stats_view::StatsView, top10_view::Top10View,
};
use crate::utils;
use eframe::egui::{self, Align, Layout, RichText};
use tokio::sync::mpsc::{self as tokio_mpsc, Sender as TokioSender};

/// Upper bound on the time between frames, so timers keep running unattended.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// All timing logic lives in the engine structs; `App` only:
/// 1. Drains the incoming message channel into the board.
/// 2. Feeds frame time to the player and scroll animator and turns their
///    events into fetch commands.
/// 3. Renders header, footer and the active scene's view.
pub struct App {
    api: ApiClient,
    settings: Settings,
    config: KioskConfig,
    theme: Theme,
    logo_uri: String,
    rx: StdReceiver<AppMessage>,
    control_tx: TokioSender<Control>,

    // ── Engine state ───────────────────────────────────────────────────────
    player: ScenePlayer,
    scroll: ScrollAnimator,
    board: SceneBoard,

    // ── Frame bookkeeping ──────────────────────────────────────────────────
    last_frame: Option<f64>,
    /// Generation whose scene is currently faded in / scrolled.
    shown_generation: u64,
    /// `ctx.input().time` when the current scene appeared.
    shown_at: f64,

    // ── View registry, in `SceneId::ALL` order ─────────────────────────────
    views: Vec<Box<dyn SceneView>>,
}

fn timing(config: &KioskConfig, settings: &Settings) -> PlayerTiming {
    PlayerTiming {
        scene_duration: Duration::from_secs(config.display.scene_duration),
        refresh_interval: Duration::from_millis(config.api.refresh_interval),
        settle_delay: settings.settle_delay(),
    }
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        api: ApiClient,
        config: KioskConfig,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let (tx, rx) = std_mpsc::channel();
        let (control_tx, control_rx) = tokio_mpsc::channel(16);
        let ctx = cc.egui_ctx.clone();
        let fetch_api = api.clone();

        // Spawn background Tokio runtime + fetch loop onto a dedicated OS thread.
        thread::spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(client::run_fetch_loop(tx, ctx, control_rx, fetch_api)),
                Err(e) => log::error!("Failed to build Tokio runtime: {e}"),
            }
        });

        let theme = Theme::from_config(&config.theme);
        theme.apply(&cc.egui_ctx);

        // Register all scene views. Adding a new scene = one line here.
        let views: Vec<Box<dyn SceneView>> = vec![
            Box::new(Top10View::default()),
            Box::new(ChampionsView::default()),
            Box::new(ActivityView::default()),
            Box::new(RosterView::default()),
            Box::new(StatsView::default()),
        ];

        let mut app = Self {
            logo_uri: api.resolve(&config.logo_url),
            player: ScenePlayer::new(timing(&config, &settings)),
            scroll: ScrollAnimator::new(settings.scroll()),
            api,
            settings,
            config,
            theme,
            rx,
            control_tx,
            board: SceneBoard::default(),
            last_frame: None,
            shown_generation: 0,
            shown_at: 0.0,
            views,
        };
        let events = app.player.start();
        app.dispatch(events);
        app
    }

    // ── Player plumbing ────────────────────────────────────────────────────────

    /// Forward player events to the fetch loop / scroll animator.
    fn dispatch(&mut self, events: Vec<PlayerEvent>) {
        if self.player.generation() != self.shown_generation {
            self.shown_generation = self.player.generation();
            self.scroll.reset();
            if let Some(t) = self.last_frame {
                self.shown_at = t;
            }
        }

        for event in events {
            match event {
                PlayerEvent::Load { scene, generation } => {
                    if let Err(e) = self.control_tx.try_send(Control::Load { scene, generation }) {
                        log::warn!("Dropping load of {scene}: {e}");
                    }
                }
                PlayerEvent::StartScroll { generation } => {
                    if generation == self.player.generation() && self.player.current().scrolls() {
                        self.scroll.arm();
                    }
                }
            }
        }
    }

    fn navigate(&mut self, direction: i32) {
        let events = self.player.advance(direction);
        self.dispatch(events);
    }

    fn reload(&mut self) {
        log::info!("Reloading configuration and current scene.");
        if let Err(e) = self.control_tx.try_send(Control::ReloadConfig) {
            log::warn!("Dropping config reload: {e}");
        }
        let event = self.player.refresh();
        self.dispatch(vec![event]);
    }

    fn apply_config(&mut self, ctx: &egui::Context, config: KioskConfig) {
        self.theme = Theme::from_config(&config.theme);
        self.theme.apply(ctx);
        self.logo_uri = self.api.resolve(&config.logo_url);
        self.player.retime(timing(&config, &self.settings));
        self.config = config;
    }

    fn drain_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::Scene { generation, data } => {
                    let scene = data.scene();
                    if self.player.accepts(scene, generation) {
                        self.board.apply(data, utils::now_clock_string());
                    } else {
                        log::debug!("Dropping stale {scene} response (generation {generation})");
                    }
                }
                AppMessage::Config(config) => self.apply_config(ctx, config),
            }
        }
    }

    // ── Panels ───────────────────────────────────────────────────────────────────

    fn header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(egui::Margin::same(12)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::new(self.logo_uri.as_str())
                            .max_height(64.0)
                            .max_width(160.0),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(&self.config.bar_name)
                            .size(36.0)
                            .strong()
                            .color(self.theme.primary),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(stamp) = &self.board.last_updated {
                            ui.label(
                                RichText::new(format!("Updated {stamp}"))
                                    .size(16.0)
                                    .color(self.theme.text.gamma_multiply(0.6)),
                            );
                            ui.add_space(16.0);
                        }
                        ui.label(
                            RichText::new(self.player.indicator())
                                .size(20.0)
                                .color(self.theme.accent),
                        );
                    });
                });
            });
    }

    /// Returns `(prev, pause, next)` button clicks.
    fn footer(&self, ctx: &egui::Context) -> (bool, bool, bool) {
        let mut clicks = (false, false, false);
        egui::TopBottomPanel::bottom("controls")
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(egui::Margin::same(10)))
            .show(ctx, |ui| {
                ui.add(
                    egui::ProgressBar::new(self.player.progress())
                        .desired_height(6.0)
                        .fill(self.theme.primary),
                );
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    clicks.0 = ui.button(RichText::new("◀ Prev").size(18.0)).clicked();
                    let pause_label = if self.player.is_paused() {
                        "▶ Resume"
                    } else {
                        "⏸ Pause"
                    };
                    clicks.1 = ui.button(RichText::new(pause_label).size(18.0)).clicked();
                    clicks.2 = ui.button(RichText::new("Next ▶").size(18.0)).clicked();
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}s", self.player.seconds_left()))
                                .size(22.0)
                                .strong()
                                .color(self.theme.secondary),
                        );
                    });
                });
            });
        clicks
    }

    fn scene_panel(&mut self, ctx: &egui::Context, now: f64) {
        let scene = self.player.current();
        let fade_secs = self.config.display.transition_speed as f64 / 1000.0;
        let opacity = if fade_secs > 0.0 {
            ((now - self.shown_at) / fade_secs).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };

        let state = SceneState {
            board: &self.board,
            theme: &self.theme,
        };
        let view = &mut self.views[scene.index()];
        debug_assert_eq!(view.scene(), scene);
        let scroll = &mut self.scroll;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.multiply_opacity(opacity);
            scene_heading(ui, scene, state.theme);

            if state.board.is_empty(scene) {
                scroll.set_extent(0.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.label(
                        RichText::new("No data yet")
                            .size(24.0)
                            .color(state.theme.text.gamma_multiply(0.5)),
                    );
                });
            } else if scene.scrolls() {
                let output = egui::ScrollArea::vertical()
                    .id_salt(scene.title())
                    .auto_shrink([false, false])
                    .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                    .vertical_scroll_offset(scroll.offset())
                    .show(ui, |ui| view.show(ui, &state));
                scroll.set_extent(output.content_size.y - output.inner_rect.height());
            } else {
                view.show(ui, &state);
            }
        });
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Clock ─────────────────────────────────────────────────────────
        let now = ctx.input(|i| i.time);
        let dt = self
            .last_frame
            .map(|t| Duration::from_secs_f64((now - t).max(0.0)))
            .unwrap_or(Duration::ZERO);
        if self.last_frame.is_none() {
            self.shown_at = now;
        }
        self.last_frame = Some(now);

        // ── 2. Drain incoming messages ───────────────────────────────────────
        self.drain_messages(ctx);

        // ── 3. Keyboard ──────────────────────────────────────────────────────
        let (key_prev, key_next, key_pause, key_reload) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::F5),
            )
        });

        // ── 4. Timers ────────────────────────────────────────────────────────
        let events = self.player.tick(dt);
        self.dispatch(events);
        self.scroll.step(dt, self.player.is_paused());

        // ── 5. Panels ────────────────────────────────────────────────────────
        self.header(ctx);
        let (prev, pause, next) = self.footer(ctx);
        self.scene_panel(ctx, now);

        // ── 6. Input → player (applied next frame) ───────────────────────────
        if prev || key_prev {
            self.navigate(-1);
        }
        if next || key_next {
            self.navigate(1);
        }
        if pause || key_pause {
            self.player.toggle_pause();
        }
        if key_reload {
            self.reload();
        }

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
