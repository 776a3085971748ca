// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastQueue` shows requests one at a time, in order. It owns the
//! display timer: once a surface has finished sliding in, the timer runs
//! for the toast's duration and then dismisses it. Manual toasts
//! ([`NO_POP_TIME`](super::NO_POP_TIME)) wait for a tap instead.

use super::geometry::Environment;
use super::measure::{ParagraphMeasure, TextMeasure};
use super::request::Toast;
use super::surface::{ActiveContext, Phase, ToastSurface};
use crate::config::Config;
use log::{debug, info};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The current toast was tapped.
    Tapped,
    /// Animation frame / timer tick.
    Tick(Instant),
}

/// The toast on screen and its display timer.
struct Current<C: ActiveContext> {
    surface: ToastSurface<C>,
    /// Time left before the timer dismisses the toast. `None` until the
    /// surface becomes visible, and for manual toasts.
    remaining: Option<Duration>,
    timer_started: bool,
}

/// Queues toasts and shows them one at a time.
pub struct ToastQueue<C: ActiveContext + Clone> {
    /// Context reactivated after each toast.
    host: C,
    environment: Environment,
    config: Config,
    measure: Box<dyn TextMeasure>,
    current: Option<Current<C>>,
    pending: VecDeque<Toast>,
    last_tick: Option<Instant>,
}

impl<C: ActiveContext + Clone> fmt::Debug for ToastQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("current", &self.current.as_ref().map(|c| &c.surface))
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<C: ActiveContext + Clone> ToastQueue<C> {
    /// Creates an empty queue that measures text with [`ParagraphMeasure`].
    pub fn new(host: C, environment: Environment, config: Config) -> Self {
        Self::with_measure(host, environment, config, ParagraphMeasure)
    }

    /// Creates an empty queue with a custom text measurer.
    pub fn with_measure(
        host: C,
        environment: Environment,
        config: Config,
        measure: impl TextMeasure + 'static,
    ) -> Self {
        Self {
            host,
            environment,
            config,
            measure: Box::new(measure),
            current: None,
            pending: VecDeque::new(),
            last_tick: None,
        }
    }

    /// Queues a toast. It is shown right away when nothing else is on screen.
    pub fn push(&mut self, toast: Toast) {
        info!("queueing toast {:?}", toast.message());
        self.pending.push_back(toast);
        if self.current.is_none() {
            self.show_next();
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tapped => {
                self.tap();
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Forwards a tap to the current toast. Returns whether it was handled.
    pub fn tap(&mut self) -> bool {
        let handled = self
            .current
            .as_mut()
            .is_some_and(|current| current.surface.tap());
        self.advance_queue();
        handled
    }

    /// Processes a tick at `now`, advancing animations and the display timer
    /// by the time elapsed since the previous tick.
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        self.advance(dt);

        // Ticks stop while nothing moves; the next stream restarts from zero.
        if !self.needs_ticks() {
            self.last_tick = None;
        }
    }

    /// Advances animations and the display timer by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let Some(current) = self.current.as_mut() else {
            return;
        };

        let was_visible = current.surface.phase() == Phase::Visible;
        current.surface.tick(dt);

        if current.surface.phase() == Phase::Visible {
            if !current.timer_started {
                current.timer_started = true;
                current.remaining = if current.surface.appearance().is_manual() {
                    None
                } else {
                    Some(current.surface.duration())
                };
            } else if was_visible {
                if let Some(remaining) = current.remaining.as_mut() {
                    *remaining = remaining.saturating_sub(dt);
                }
            }

            if current.remaining == Some(Duration::ZERO) {
                debug!("display time elapsed for {:?}", current.surface.message());
                current.remaining = None;
                current.surface.dismiss();
            }
        }

        self.advance_queue();
    }

    /// Dismisses the toast on screen, if any.
    pub fn dismiss_current(&mut self) -> bool {
        let dismissed = self
            .current
            .as_mut()
            .is_some_and(|current| current.surface.dismiss());
        self.advance_queue();
        dismissed
    }

    /// Updates the screen geometry, e.g. after a window resize.
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
        if let Some(current) = self.current.as_mut() {
            current.surface.relayout(environment, self.measure.as_ref());
        }
    }

    /// Drops pending toasts and dismisses the one on screen.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.dismiss_current();
    }

    /// The surface currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&ToastSurface<C>> {
        self.current.as_ref().map(|current| &current.surface)
    }

    /// Display time left for the current toast, once its timer has started.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.current.as_ref().and_then(|current| current.remaining)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is shown or waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }

    /// Whether the queue needs ticks to make progress.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.current.as_ref().is_some_and(|current| {
            current.surface.is_animating() || current.remaining.is_some()
        })
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Retires a dismissed surface and shows the next request.
    fn advance_queue(&mut self) {
        let finished = self
            .current
            .as_ref()
            .is_some_and(|current| current.surface.phase() == Phase::Dismissed);
        if finished {
            self.current = None;
            self.show_next();
        }
    }

    fn show_next(&mut self) {
        let Some(toast) = self.pending.pop_front() else {
            self.last_tick = None;
            return;
        };

        let mut surface = ToastSurface::new(
            &toast,
            Some(self.host.clone()),
            self.environment,
            &self.config,
            self.measure.as_ref(),
        );
        surface.show();
        self.current = Some(Current {
            surface,
            remaining: None,
            timer_started: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::request::{ToastFont, NO_POP_TIME};
    use iced::Size;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Host {
        activations: Rc<Cell<u32>>,
        active: Rc<Cell<bool>>,
    }

    impl ActiveContext for Host {
        fn make_active(&mut self) {
            self.activations.set(self.activations.get() + 1);
            self.active.set(true);
        }

        fn resign_active(&mut self) {
            self.active.set(false);
        }
    }

    fn queue() -> (ToastQueue<Host>, Host) {
        let host = Host::default();
        let queue = ToastQueue::with_measure(
            host.clone(),
            Environment::new(Size::new(375.0, 667.0)),
            Config::default(),
            |_: &str, _: &ToastFont, _: f32| Size::new(100.0, 20.0),
        );
        (queue, host)
    }

    /// Runs ticks of `step` until `done` holds, up to a bound.
    fn run_until(queue: &mut ToastQueue<Host>, step: Duration, done: impl Fn(&ToastQueue<Host>) -> bool) {
        for _ in 0..10_000 {
            if done(queue) {
                return;
            }
            queue.advance(step);
        }
        panic!("condition not reached");
    }

    fn phase(queue: &ToastQueue<Host>) -> Option<Phase> {
        queue.current().map(ToastSurface::phase)
    }

    #[test]
    fn new_queue_is_idle() {
        let (queue, _) = queue();
        assert!(queue.is_idle());
        assert!(queue.current().is_none());
        assert!(!queue.needs_ticks());
    }

    #[test]
    fn push_shows_immediately_when_idle() {
        let (mut queue, _) = queue();
        queue.push(Toast::new("Hi"));

        assert_eq!(phase(&queue), Some(Phase::Showing));
        assert_eq!(queue.pending_count(), 0);
        assert!(queue.needs_ticks());
    }

    #[test]
    fn push_waits_while_a_toast_is_on_screen() {
        let (mut queue, _) = queue();
        queue.push(Toast::new("first"));
        queue.push(Toast::new("second"));

        assert_eq!(queue.current().map(ToastSurface::message), Some("first"));
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn timer_dismisses_after_duration() {
        let (mut queue, host) = queue();
        let step = Duration::from_millis(10);
        queue.push(Toast::new("Loading…").duration(Duration::from_secs(3)));

        run_until(&mut queue, step, |q| phase(q) == Some(Phase::Visible));
        assert_eq!(queue.remaining(), Some(Duration::from_secs(3)));

        queue.advance(Duration::from_millis(2_990));
        assert_eq!(phase(&queue), Some(Phase::Visible));

        queue.advance(step);
        assert_eq!(phase(&queue), Some(Phase::Dismissing));

        run_until(&mut queue, step, ToastQueue::is_idle);
        assert_eq!(host.activations.get(), 1);
    }

    #[test]
    fn manual_toast_waits_for_tap() {
        let (mut queue, host) = queue();
        let step = Duration::from_millis(10);
        queue.push(Toast::new("Hi").duration(NO_POP_TIME));

        run_until(&mut queue, step, |q| phase(q) == Some(Phase::Visible));
        queue.advance(Duration::from_secs(60));
        assert_eq!(phase(&queue), Some(Phase::Visible));
        assert!(queue.remaining().is_none());

        queue.handle_message(&Message::Tapped);
        assert_eq!(phase(&queue), Some(Phase::Dismissing));

        run_until(&mut queue, step, ToastQueue::is_idle);
        assert_eq!(host.activations.get(), 1);
    }

    #[test]
    fn tap_is_ignored_for_timed_toast() {
        let (mut queue, _) = queue();
        queue.push(Toast::new("Saved").duration(Duration::from_secs(1)));
        run_until(&mut queue, Duration::from_millis(10), |q| {
            phase(q) == Some(Phase::Visible)
        });

        assert!(!queue.tap());
        assert_eq!(phase(&queue), Some(Phase::Visible));
    }

    #[test]
    fn next_toast_is_shown_after_dismissal() {
        let (mut queue, _) = queue();
        queue.push(Toast::new("first"));
        queue.push(Toast::new("second"));

        assert!(queue.dismiss_current());
        run_until(&mut queue, Duration::from_millis(10), |q| {
            q.current().map(ToastSurface::message) == Some("second")
        });

        assert_eq!(phase(&queue), Some(Phase::Showing));
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn back_to_back_toasts_keep_a_single_active_context() {
        let (mut queue, host) = queue();
        let step = Duration::from_millis(16);
        queue.push(Toast::new("first"));
        queue.push(Toast::new("second"));
        assert!(!host.active.get());

        queue.dismiss_current();
        run_until(&mut queue, step, |q| {
            q.current().map(ToastSurface::message) == Some("second")
        });

        let surface = queue.current().expect("second toast on screen");
        assert!(surface.is_active());
        assert!(!host.active.get());
        assert_eq!(host.activations.get(), 1);

        queue.dismiss_current();
        run_until(&mut queue, step, ToastQueue::is_idle);
        assert!(host.active.get());
        assert_eq!(host.activations.get(), 2);
    }

    #[test]
    fn tick_uses_instant_deltas() {
        let (mut queue, _) = queue();
        queue.push(Toast::new("Hi"));
        let start = Instant::now();

        queue.handle_message(&Message::Tick(start));
        assert_eq!(phase(&queue), Some(Phase::Showing));

        queue.handle_message(&Message::Tick(start + Duration::from_secs(1)));
        assert_eq!(phase(&queue), Some(Phase::Visible));
    }

    #[test]
    fn clear_drops_pending_and_dismisses_current() {
        let (mut queue, _) = queue();
        for i in 0..4 {
            queue.push(Toast::new(format!("toast-{i}")));
        }

        queue.clear();
        assert_eq!(queue.pending_count(), 0);
        assert_eq!(phase(&queue), Some(Phase::Dismissing));

        run_until(&mut queue, Duration::from_millis(10), ToastQueue::is_idle);
    }

    #[test]
    fn set_environment_relayouts_current_toast() {
        let (mut queue, _) = queue();
        queue.push(Toast::new("Hi"));
        run_until(&mut queue, Duration::from_millis(10), |q| {
            phase(q) == Some(Phase::Visible)
        });

        queue.set_environment(Environment::new(Size::new(1024.0, 768.0)));
        let frame = queue.current().map(ToastSurface::frame).expect("toast on screen");
        assert!((frame.center_x() - 512.0).abs() < 1e-3);
    }
}
