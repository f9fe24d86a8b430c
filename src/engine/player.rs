//! Scene player: which scene is on screen, the auto-advance countdown, the
//! background refresh timer and the scroll settle delay.
//!
//! The player never performs I/O. Time is injected through [`ScenePlayer::tick`]
//! and every transition returns [`PlayerEvent`]s describing what the caller
//! must do (fetch data, arm the scroll animator).

use std::time::Duration;

use crate::engine::scene::SceneId;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Side effects requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Fetch and render `scene`; responses must carry `generation` back.
    Load { scene: SceneId, generation: u64 },
    /// The settle delay after a scene change elapsed; start auto-scroll.
    StartScroll { generation: u64 },
}

/// Timing knobs, taken from the kiosk configuration and launch settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTiming {
    pub scene_duration: Duration,
    pub refresh_interval: Duration,
    pub settle_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct ScenePlayer {
    timing: PlayerTiming,
    current: usize,
    paused: bool,
    seconds_left: u64,
    /// Sub-second time accumulated towards the next countdown decrement.
    countdown_acc: Duration,
    refresh_acc: Duration,
    /// Remaining settle time before scrolling starts, if still pending.
    settle_left: Option<Duration>,
    generation: u64,
}

impl ScenePlayer {
    pub fn new(timing: PlayerTiming) -> Self {
        Self {
            seconds_left: whole_seconds(timing.scene_duration),
            timing,
            current: 0,
            paused: false,
            countdown_acc: Duration::ZERO,
            refresh_acc: Duration::ZERO,
            settle_left: None,
            generation: 0,
        }
    }

    /// Show the first scene. Call once after construction.
    pub fn start(&mut self) -> Vec<PlayerEvent> {
        self.show_scene(0)
    }

    // ── Accessors ──────────────────────────────────────────────────────────────

    pub fn current(&self) -> SceneId {
        SceneId::from_index(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn seconds_left(&self) -> u64 {
        self.seconds_left
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn timing(&self) -> PlayerTiming {
        self.timing
    }

    /// Fraction of the scene still to run, `1.0` right after a scene change.
    pub fn progress(&self) -> f32 {
        let total = whole_seconds(self.timing.scene_duration);
        self.seconds_left as f32 / total as f32
    }

    /// `"Scene 2 of 5"`.
    pub fn indicator(&self) -> String {
        format!("Scene {} of {}", self.current_index() + 1, SceneId::COUNT)
    }

    /// Whether data fetched for `scene` under `generation` may still be shown.
    ///
    /// Responses for a scene that has since been left are stale even if the
    /// same scene is shown again later.
    pub fn accepts(&self, scene: SceneId, generation: u64) -> bool {
        generation == self.generation && scene == self.current()
    }

    // ── Transitions ────────────────────────────────────────────────────────────

    /// Move one scene forward (`+1`) or back (`-1`), wrapping at both ends.
    pub fn advance(&mut self, direction: i32) -> Vec<PlayerEvent> {
        let n = SceneId::COUNT as i64;
        let next = (self.current as i64 + direction as i64).rem_euclid(n) as usize;
        self.show_scene(next)
    }

    /// Activate `index`, reset the countdown and schedule data load and scroll.
    pub fn show_scene(&mut self, index: usize) -> Vec<PlayerEvent> {
        self.current = index % SceneId::COUNT;
        self.generation += 1;
        self.reset_countdown();
        self.settle_left = Some(self.timing.settle_delay);
        log::debug!("showing scene {} ({})", self.current, self.current());
        vec![PlayerEvent::Load {
            scene: self.current(),
            generation: self.generation,
        }]
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
    }

    /// Re-load the current scene without touching scene or countdown.
    pub fn refresh(&self) -> PlayerEvent {
        PlayerEvent::Load {
            scene: self.current(),
            generation: self.generation,
        }
    }

    /// Replace timing after a configuration reload. The running countdown is
    /// restarted with the new duration.
    pub fn retime(&mut self, timing: PlayerTiming) {
        self.timing = timing;
        self.reset_countdown();
    }

    fn reset_countdown(&mut self) {
        self.seconds_left = whole_seconds(self.timing.scene_duration);
        self.countdown_acc = Duration::ZERO;
    }

    /// Advance the clock by `elapsed`.
    ///
    /// While paused the countdown and settle delay are frozen; the background
    /// refresh keeps running so data stays current on a paused screen.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        let refresh_due = self.refresh_due(elapsed);

        if self.paused {
            if refresh_due {
                events.push(self.refresh());
            }
            return events;
        }

        if let Some(left) = self.settle_left {
            if elapsed >= left {
                self.settle_left = None;
                events.push(PlayerEvent::StartScroll {
                    generation: self.generation,
                });
            } else {
                self.settle_left = Some(left - elapsed);
            }
        }

        let mut advanced = false;
        self.countdown_acc += elapsed;
        while self.countdown_acc >= ONE_SECOND {
            self.countdown_acc -= ONE_SECOND;
            self.seconds_left = self.seconds_left.saturating_sub(1);
            if self.seconds_left == 0 {
                // show_scene resets the accumulator, dropping any backlog.
                events.extend(self.advance(1));
                advanced = true;
                break;
            }
        }

        // A scene change already loads the new scene.
        if refresh_due && !advanced {
            events.push(self.refresh());
        }

        events
    }

    /// Feed `elapsed` to the refresh timer. Any number of missed intervals
    /// collapse into a single refresh.
    fn refresh_due(&mut self, elapsed: Duration) -> bool {
        let interval = self.timing.refresh_interval;
        if interval.is_zero() {
            return false;
        }
        self.refresh_acc += elapsed;
        if self.refresh_acc < interval {
            return false;
        }
        let rest = self.refresh_acc.as_nanos() % interval.as_nanos();
        self.refresh_acc = Duration::from_nanos(rest as u64);
        true
    }
}

fn whole_seconds(d: Duration) -> u64 {
    d.as_secs().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(duration_secs: u64) -> ScenePlayer {
        let mut p = ScenePlayer::new(PlayerTiming {
            scene_duration: Duration::from_secs(duration_secs),
            refresh_interval: Duration::from_secs(300),
            settle_delay: Duration::from_millis(500),
        });
        p.start();
        p
    }

    fn loads(events: &[PlayerEvent]) -> Vec<SceneId> {
        events
            .iter()
            .filter_map(|e| match e {
                PlayerEvent::Load { scene, .. } => Some(*scene),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn advance_wraps_in_both_directions() {
        let n = SceneId::COUNT;
        for i in 0..n {
            let mut p = player(60);
            p.show_scene(i);
            p.advance(1);
            assert_eq!(p.current_index(), (i + 1) % n);

            let mut p = player(60);
            p.show_scene(i);
            p.advance(-1);
            assert_eq!(p.current_index(), (i + n - 1) % n);
        }
    }

    #[test]
    fn show_scene_requests_load_and_bumps_generation() {
        let mut p = player(60);
        let before = p.generation();
        let events = p.show_scene(3);
        assert_eq!(
            events,
            vec![PlayerEvent::Load {
                scene: SceneId::Roster,
                generation: before + 1
            }]
        );
        assert_eq!(p.indicator(), "Scene 4 of 5");
    }

    #[test]
    fn countdown_decrements_once_per_second() {
        let mut p = player(60);
        p.tick(Duration::from_millis(999));
        assert_eq!(p.seconds_left(), 60);
        p.tick(Duration::from_millis(1));
        assert_eq!(p.seconds_left(), 59);
        p.tick(Duration::from_millis(2500));
        assert_eq!(p.seconds_left(), 57);
    }

    #[test]
    fn pause_freezes_countdown() {
        let mut p = player(60);
        p.tick(Duration::from_secs(10));
        assert_eq!(p.seconds_left(), 50);

        p.toggle_pause();
        for _ in 0..100 {
            p.tick(Duration::from_secs(1));
        }
        assert_eq!(p.seconds_left(), 50);
        assert_eq!(p.current(), SceneId::Top10);

        p.toggle_pause();
        p.tick(Duration::from_secs(1));
        assert_eq!(p.seconds_left(), 49);
    }

    #[test]
    fn countdown_zero_advances_exactly_once_and_resets() {
        let mut p = player(10);
        let events = p.tick(Duration::from_secs(9));
        assert!(loads(&events).is_empty());

        let events = p.tick(Duration::from_secs(1));
        assert_eq!(loads(&events), vec![SceneId::Champions]);
        assert_eq!(p.seconds_left(), 10);

        // A long stall must not skip several scenes at once.
        let events = p.tick(Duration::from_secs(35));
        assert_eq!(loads(&events), vec![SceneId::Activity]);
        assert_eq!(p.seconds_left(), 10);
    }

    #[test]
    fn manual_navigation_resets_countdown() {
        let mut p = player(60);
        p.tick(Duration::from_millis(20_400));
        assert_eq!(p.seconds_left(), 40);
        p.advance(1);
        assert_eq!(p.seconds_left(), 60);
        // The partial second is discarded too.
        p.tick(Duration::from_millis(700));
        assert_eq!(p.seconds_left(), 60);
    }

    #[test]
    fn refresh_reloads_current_scene_without_moving() {
        let mut p = ScenePlayer::new(PlayerTiming {
            scene_duration: Duration::from_secs(600),
            refresh_interval: Duration::from_secs(30),
            settle_delay: Duration::ZERO,
        });
        p.start();
        p.advance(1);
        let generation = p.generation();

        let events = p.tick(Duration::from_secs(30));
        assert!(events.contains(&PlayerEvent::Load {
            scene: SceneId::Champions,
            generation
        }));
        assert_eq!(p.current(), SceneId::Champions);
        assert_eq!(p.generation(), generation);
        assert_eq!(p.seconds_left(), 570);
    }

    #[test]
    fn refresh_keeps_running_while_paused() {
        let mut p = ScenePlayer::new(PlayerTiming {
            scene_duration: Duration::from_secs(60),
            refresh_interval: Duration::from_secs(5),
            settle_delay: Duration::ZERO,
        });
        p.start();
        p.toggle_pause();
        let events = p.tick(Duration::from_secs(5));
        assert_eq!(loads(&events), vec![SceneId::Top10]);
        assert_eq!(p.seconds_left(), 60);
    }

    #[test]
    fn long_stall_loads_each_scene_at_most_once() {
        let mut p = ScenePlayer::new(PlayerTiming {
            scene_duration: Duration::from_secs(60),
            refresh_interval: Duration::from_secs(30),
            settle_delay: Duration::ZERO,
        });
        p.start();

        // Twenty refresh intervals and ten scene lengths in a single frame.
        let events = p.tick(Duration::from_secs(600));
        assert_eq!(loads(&events), vec![SceneId::Champions]);
        assert_eq!(
            events.last(),
            Some(&PlayerEvent::Load {
                scene: SceneId::Champions,
                generation: p.generation()
            })
        );

        // Missed refreshes collapse into one while paused too.
        p.toggle_pause();
        let events = p.tick(Duration::from_secs(600));
        assert_eq!(loads(&events), vec![SceneId::Champions]);
    }

    #[test]
    fn refresh_timer_keeps_phase_after_stall() {
        let mut p = ScenePlayer::new(PlayerTiming {
            scene_duration: Duration::from_secs(600),
            refresh_interval: Duration::from_secs(30),
            settle_delay: Duration::ZERO,
        });
        p.start();
        assert_eq!(loads(&p.tick(Duration::from_secs(95))), vec![SceneId::Top10]);
        // 5 s carried over, so the next refresh is 25 s away.
        assert!(loads(&p.tick(Duration::from_secs(24))).is_empty());
        assert_eq!(loads(&p.tick(Duration::from_secs(1))), vec![SceneId::Top10]);
    }

    #[test]
    fn scroll_starts_after_settle_delay() {
        let mut p = player(60);
        let generation = p.generation();
        assert!(p.tick(Duration::from_millis(300)).is_empty());
        assert_eq!(
            p.tick(Duration::from_millis(200)),
            vec![PlayerEvent::StartScroll { generation }]
        );
        assert!(p.tick(Duration::from_millis(500)).is_empty());
    }

    #[test]
    fn settle_delay_is_frozen_while_paused() {
        let mut p = player(60);
        p.toggle_pause();
        assert!(p.tick(Duration::from_secs(2)).is_empty());
        p.toggle_pause();
        let events = p.tick(Duration::from_millis(500));
        assert!(matches!(events[..], [PlayerEvent::StartScroll { .. }]));
    }

    #[test]
    fn stale_generations_are_rejected() {
        let mut p = player(60);
        let old = p.generation();
        p.advance(1);
        assert!(!p.accepts(SceneId::Top10, old));
        assert!(!p.accepts(SceneId::Champions, old));
        assert!(p.accepts(SceneId::Champions, p.generation()));

        // Coming back to the same scene still invalidates the old request.
        p.advance(-1);
        assert!(!p.accepts(SceneId::Top10, old));
    }

    #[test]
    fn five_minutes_unattended_visits_each_scene_once_in_order() {
        let mut p = player(60);
        let mut shown = Vec::new();
        // 60 fps for five minutes, plus half a second for frame rounding.
        let frame = Duration::from_micros(16_667);
        let mut elapsed = Duration::ZERO;
        while elapsed < Duration::from_millis(300_500) {
            shown.extend(loads(&p.tick(frame)));
            elapsed += frame;
        }
        // Background refresh fires exactly at 300 s; drop reloads of the same scene.
        shown.dedup();
        assert_eq!(
            shown,
            vec![
                SceneId::Champions,
                SceneId::Activity,
                SceneId::Roster,
                SceneId::Statistics,
                SceneId::Top10,
            ]
        );
    }

    #[test]
    fn retime_restarts_countdown_with_new_duration() {
        let mut p = player(60);
        p.tick(Duration::from_secs(5));
        p.retime(PlayerTiming {
            scene_duration: Duration::from_secs(20),
            ..p.timing()
        });
        assert_eq!(p.seconds_left(), 20);
        assert_eq!(p.progress(), 1.0);
    }
}
