//! Auto-scroll animator for list scenes.
//!
//! Two states: [`Phase::Scrolling`] and [`Phase::PausingAtEdge`]. The animator
//! starts paused at the top. What happens at the bottom edge depends on the
//! [`ScrollPolicy`]:
//!
//! * `Reset`: pause at the bottom, jump to the top, pause, scroll down again.
//! * `Bounce`: pause at the bottom, scroll back up, pause at the top, repeat.
//!
//! The overflow extent (content height minus viewport height) is reported by
//! the renderer every frame. With no overflow the animator is inert.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollPolicy {
    #[default]
    Reset,
    Bounce,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    pub policy: ScrollPolicy,
    pub pixels_per_second: f32,
    pub edge_pause: Duration,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            policy: ScrollPolicy::Reset,
            pixels_per_second: 40.0,
            edge_pause: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Scrolling,
    PausingAtEdge { edge: Edge, remaining: Duration },
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    settings: ScrollSettings,
    /// `false` until the scene's settle delay elapsed.
    armed: bool,
    offset: f32,
    max_scroll: f32,
    /// `1.0` scrolling down, `-1.0` scrolling up (bounce only).
    direction: f32,
    phase: Phase,
}

impl ScrollAnimator {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            armed: false,
            offset: 0.0,
            max_scroll: 0.0,
            direction: 1.0,
            phase: Phase::PausingAtEdge {
                edge: Edge::Top,
                remaining: settings.edge_pause,
            },
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Back to the top, disarmed. Called on every scene change.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    /// Start animating (after the render settle delay).
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Record how far the content overflows its viewport, in points.
    pub fn set_extent(&mut self, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
    }

    /// Advance the animation by `dt` and return the new offset.
    ///
    /// A paused player, an unarmed animator or a non-overflowing container
    /// leave the state untouched.
    pub fn step(&mut self, dt: Duration, paused: bool) -> f32 {
        if paused || !self.armed || self.max_scroll <= 0.0 {
            return self.offset;
        }

        // Time left over at an edge carries into the next phase.
        let mut left = dt;
        while !left.is_zero() {
            match self.phase {
                Phase::PausingAtEdge { edge, remaining } => {
                    if left < remaining {
                        self.phase = Phase::PausingAtEdge {
                            edge,
                            remaining: remaining - left,
                        };
                        break;
                    }
                    left -= remaining;
                    self.leave_edge(edge);
                }
                Phase::Scrolling => {
                    let speed = self.settings.pixels_per_second;
                    if speed <= 0.0 {
                        break;
                    }
                    let (target, edge) = if self.direction > 0.0 {
                        (self.max_scroll, Edge::Bottom)
                    } else {
                        (0.0, Edge::Top)
                    };
                    let distance = (target - self.offset).abs();
                    let travel = speed * left.as_secs_f32();
                    if travel < distance {
                        self.offset += travel * self.direction;
                        break;
                    }
                    self.offset = target;
                    self.pause_at(edge);
                    let spent = Duration::from_secs_f32(distance / speed).max(Duration::from_nanos(1));
                    left = left.saturating_sub(spent);
                }
            }
        }

        self.offset
    }

    fn pause_at(&mut self, edge: Edge) {
        self.phase = Phase::PausingAtEdge {
            edge,
            remaining: self.settings.edge_pause,
        };
    }

    fn leave_edge(&mut self, edge: Edge) {
        match (edge, self.settings.policy) {
            (Edge::Top, _) => {
                self.direction = 1.0;
                self.phase = Phase::Scrolling;
            }
            (Edge::Bottom, ScrollPolicy::Reset) => {
                self.offset = 0.0;
                self.pause_at(Edge::Top);
            }
            (Edge::Bottom, ScrollPolicy::Bounce) => {
                self.direction = -1.0;
                self.phase = Phase::Scrolling;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(100);

    fn animator(policy: ScrollPolicy) -> ScrollAnimator {
        let mut a = ScrollAnimator::new(ScrollSettings {
            policy,
            pixels_per_second: 100.0,
            edge_pause: Duration::from_secs(1),
        });
        a.arm();
        a
    }

    fn run(a: &mut ScrollAnimator, total: Duration) {
        let mut t = Duration::ZERO;
        while t < total {
            a.step(FRAME, false);
            t += FRAME;
        }
    }

    #[test]
    fn non_overflowing_container_never_scrolls() {
        let mut a = animator(ScrollPolicy::Reset);
        a.set_extent(-20.0);
        let phase = a.phase();
        for _ in 0..100 {
            assert_eq!(a.step(FRAME, false), 0.0);
        }
        assert_eq!(a.phase(), phase);
    }

    #[test]
    fn unarmed_animator_is_inert() {
        let mut a = ScrollAnimator::new(ScrollSettings::default());
        a.set_extent(500.0);
        run(&mut a, Duration::from_secs(10));
        assert_eq!(a.offset(), 0.0);
    }

    #[test]
    fn starts_paused_at_top_then_scrolls() {
        let mut a = animator(ScrollPolicy::Reset);
        a.set_extent(200.0);
        run(&mut a, Duration::from_millis(900));
        assert_eq!(a.offset(), 0.0);
        run(&mut a, Duration::from_millis(100));
        assert_eq!(a.phase(), Phase::Scrolling);
        run(&mut a, Duration::from_millis(500));
        assert!((a.offset() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn reset_policy_jumps_to_top_after_bottom_pause() {
        let mut a = animator(ScrollPolicy::Reset);
        a.set_extent(200.0);
        // 1 s top pause + 2 s travel.
        run(&mut a, Duration::from_secs(3));
        assert_eq!(a.offset(), 200.0);
        assert!(matches!(
            a.phase(),
            Phase::PausingAtEdge {
                edge: Edge::Bottom,
                ..
            }
        ));

        run(&mut a, Duration::from_secs(1));
        assert_eq!(a.offset(), 0.0);
        assert!(matches!(
            a.phase(),
            Phase::PausingAtEdge { edge: Edge::Top, .. }
        ));

        run(&mut a, Duration::from_millis(1500));
        assert!(a.offset() > 0.0);
    }

    #[test]
    fn bounce_policy_scrolls_back_up() {
        let mut a = animator(ScrollPolicy::Bounce);
        a.set_extent(200.0);
        run(&mut a, Duration::from_secs(3));
        assert_eq!(a.offset(), 200.0);

        // Bottom pause, then half a second upwards.
        run(&mut a, Duration::from_millis(1500));
        assert!((a.offset() - 150.0).abs() < 1e-3);

        run(&mut a, Duration::from_millis(1500));
        assert_eq!(a.offset(), 0.0);
        assert!(matches!(
            a.phase(),
            Phase::PausingAtEdge { edge: Edge::Top, .. }
        ));
    }

    #[test]
    fn leftover_frame_time_after_edge_pause_scrolls() {
        let mut a = animator(ScrollPolicy::Reset);
        a.set_extent(500.0);
        // 1 s top pause ends 0.1 s into the fourth 300 ms frame.
        for _ in 0..3 {
            a.step(Duration::from_millis(300), false);
        }
        assert_eq!(a.offset(), 0.0);
        a.step(Duration::from_millis(300), false);
        assert!((a.offset() - 20.0).abs() < 1e-3);
        assert_eq!(a.phase(), Phase::Scrolling);
    }

    #[test]
    fn reaching_bottom_mid_frame_starts_the_edge_pause() {
        let mut a = animator(ScrollPolicy::Bounce);
        a.set_extent(50.0);
        a.step(Duration::from_secs(1), false);
        // 0.5 s to the bottom, then 0.5 s of the 1 s bottom pause.
        a.step(Duration::from_secs(1), false);
        assert_eq!(a.offset(), 50.0);
        match a.phase() {
            Phase::PausingAtEdge { edge, remaining } => {
                assert_eq!(edge, Edge::Bottom);
                assert!(remaining.abs_diff(Duration::from_millis(500)) < Duration::from_millis(1));
            }
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn pause_freezes_position() {
        let mut a = animator(ScrollPolicy::Reset);
        a.set_extent(500.0);
        run(&mut a, Duration::from_secs(2));
        let frozen = a.offset();
        let phase = a.phase();
        for _ in 0..50 {
            assert_eq!(a.step(FRAME, true), frozen);
        }
        assert_eq!(a.phase(), phase);
        a.step(FRAME, false);
        assert!(a.offset() > frozen);
    }

    #[test]
    fn shrinking_extent_clamps_offset() {
        let mut a = animator(ScrollPolicy::Reset);
        a.set_extent(500.0);
        run(&mut a, Duration::from_secs(4));
        assert!(a.offset() > 100.0);
        a.set_extent(100.0);
        assert_eq!(a.offset(), 100.0);
    }

    #[test]
    fn reset_returns_to_top_disarmed() {
        let mut a = animator(ScrollPolicy::Bounce);
        a.set_extent(500.0);
        run(&mut a, Duration::from_secs(3));
        a.reset();
        assert_eq!(a.offset(), 0.0);
        assert!(!a.is_armed());
    }
}
