// SPDX-License-Identifier: MPL-2.0
//! The floating surface that displays a single toast.
//!
//! A [`ToastSurface`] is built once from an immutable [`Toast`] request. All
//! derived display parameters (effective position, tap behavior, colors,
//! font, measured text size and both rectangles) are computed in the
//! constructor, so nothing is ever half-updated.
//!
//! # Lifecycle
//!
//! ```text
//! Created --show()--> Showing --tick()--> Visible --dismiss()--> Dismissing --tick()--> Dismissed
//! ```
//!
//! `dismiss()` can come from a display timer, an explicit call, or a tap.
//! Reaching `Dismissed` hides the surface, hands activity back to the
//! context that was active before the toast, and fires the completion
//! callback exactly once.

use super::geometry::{inset, visible_part, Environment, Placement};
use super::measure::TextMeasure;
use super::request::{
    Position, Toast, ToastFont, DEFAULT_BACKGROUND, DEFAULT_TEXT_COLOR, NO_POP_TIME,
};
use super::spring::Spring;
use super::transition::Transition;
use crate::config::{Config, LayoutConfig};
use iced::{Color, Rectangle, Size};
use log::{debug, warn};
use std::fmt;
use std::time::Duration;

/// Something that can become the active top-level context again once the
/// toast is gone, typically the window that had focus before it appeared.
pub trait ActiveContext {
    fn make_active(&mut self);

    /// Called when a toast takes over as the active context.
    fn resign_active(&mut self) {}
}

impl<F> ActiveContext for F
where
    F: FnMut(),
{
    fn make_active(&mut self) {
        self()
    }
}

/// Lifecycle phase of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built but not shown yet.
    Created,
    /// Entrance animation in flight.
    Showing,
    /// Resting on screen.
    Visible,
    /// Exit animation in flight.
    Dismissing,
    /// Hidden, previous context restored, callback fired. Terminal.
    Dismissed,
}

/// Display parameters resolved from a [`Toast`] request.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub message: String,
    pub position: Position,
    pub duration: Duration,
    pub dismiss_on_tap: bool,
    pub background: Color,
    pub text_color: Color,
    pub font: ToastFont,
}

impl Appearance {
    /// Resolves every optional field of `toast` to its effective value.
    #[must_use]
    pub fn resolve(toast: &Toast) -> Self {
        Self {
            message: toast.message().to_string(),
            position: toast.resolved_position(),
            duration: toast.resolved_duration(),
            dismiss_on_tap: toast.resolved_dismiss_on_tap(),
            background: toast.requested_background().unwrap_or(DEFAULT_BACKGROUND),
            text_color: toast.requested_text_color().unwrap_or(DEFAULT_TEXT_COLOR),
            font: toast.requested_font().unwrap_or_default(),
        }
    }

    /// Whether this toast waits for a tap instead of a timer.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.duration == NO_POP_TIME
    }
}

type DismissCallback<C> = Box<dyn FnOnce(&ToastSurface<C>)>;

/// A single on-screen toast.
pub struct ToastSurface<C: ActiveContext> {
    appearance: Appearance,
    layout: LayoutConfig,
    spring: Spring,
    environment: Environment,
    text_size: Size,
    placement: Placement,
    frame: Rectangle,
    phase: Phase,
    transition: Option<Transition>,
    interactive: bool,
    active: bool,
    hidden: bool,
    previous: Option<C>,
    on_dismissed: Option<DismissCallback<C>>,
}

impl<C: ActiveContext> fmt::Debug for ToastSurface<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastSurface")
            .field("message", &self.appearance.message)
            .field("position", &self.appearance.position)
            .field("phase", &self.phase)
            .field("frame", &self.frame)
            .field("interactive", &self.interactive)
            .finish()
    }
}

impl<C: ActiveContext> ToastSurface<C> {
    /// Builds a hidden surface for `toast`.
    ///
    /// `previous` is the context to reactivate after dismissal. The surface
    /// starts parked on its off-screen start rectangle.
    pub fn new(
        toast: &Toast,
        previous: Option<C>,
        environment: Environment,
        config: &Config,
        measure: &dyn TextMeasure,
    ) -> Self {
        let config = config.sanitized();
        let appearance = Appearance::resolve(toast);
        let text_size = measure_text(&appearance, &environment, &config.layout, measure);
        let placement =
            Placement::compute(text_size, appearance.position, &environment, &config.layout);

        Self {
            interactive: appearance.dismiss_on_tap,
            appearance,
            layout: config.layout,
            spring: Spring::from_config(&config.animation),
            environment,
            text_size,
            placement,
            frame: placement.start,
            phase: Phase::Created,
            transition: None,
            active: false,
            hidden: true,
            previous,
            on_dismissed: None,
        }
    }

    /// Registers the callback fired once the surface is fully dismissed.
    #[must_use]
    pub fn on_dismissed(mut self, callback: impl FnOnce(&ToastSurface<C>) + 'static) -> Self {
        self.on_dismissed = Some(Box::new(callback));
        self
    }

    /// Makes the surface the active context and starts the entrance
    /// animation from the start rectangle to the resting rectangle.
    pub fn show(&mut self) {
        if self.phase != Phase::Created {
            warn!(
                "ignoring show() on toast {:?} in phase {:?}",
                self.appearance.message, self.phase
            );
            return;
        }

        if let Some(previous) = self.previous.as_mut() {
            previous.resign_active();
        }
        self.active = true;
        self.hidden = false;
        self.frame = self.placement.start;
        self.transition = Some(Transition::new(
            self.placement.start,
            self.placement.resting,
            self.spring,
        ));
        self.set_phase(Phase::Showing);
    }

    /// Starts the exit animation back to the start rectangle.
    ///
    /// Only the first call has an effect: once dismissal is under way the
    /// completion path owns the terminal transition, so later calls return
    /// `false`. A surface that was never shown is dismissed immediately.
    pub fn dismiss(&mut self) -> bool {
        match self.phase {
            Phase::Showing | Phase::Visible => {
                self.transition = Some(Transition::new(
                    self.frame,
                    self.placement.start,
                    self.spring,
                ));
                self.set_phase(Phase::Dismissing);
                true
            }
            Phase::Created => {
                self.frame = self.placement.start;
                self.finish_dismissal();
                true
            }
            Phase::Dismissing | Phase::Dismissed => {
                debug!("dismiss() already handled for toast {:?}", self.appearance.message);
                false
            }
        }
    }

    /// Handles a tap anywhere on the surface.
    ///
    /// When tap-to-dismiss is on, interaction is disabled and the surface is
    /// dismissed. Returns whether the tap was handled.
    pub fn tap(&mut self) -> bool {
        if !self.interactive {
            return false;
        }
        self.interactive = false;
        self.dismiss()
    }

    /// Advances the in-flight animation by `dt`, completing the current
    /// phase when it lands.
    pub fn tick(&mut self, dt: Duration) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };

        let finished = transition.advance(dt);
        self.frame = transition.frame();
        if !finished {
            return;
        }

        self.transition = None;
        match self.phase {
            Phase::Showing => self.set_phase(Phase::Visible),
            Phase::Dismissing => self.finish_dismissal(),
            Phase::Created | Phase::Visible | Phase::Dismissed => {}
        }
    }

    /// Recomputes the layout after the screen geometry changed.
    ///
    /// A resting surface snaps to its new resting rectangle; an in-flight
    /// animation is redirected to the new destination.
    pub fn relayout(&mut self, environment: Environment, measure: &dyn TextMeasure) {
        self.environment = environment;
        self.text_size = measure_text(&self.appearance, &environment, &self.layout, measure);
        self.placement = Placement::compute(
            self.text_size,
            self.appearance.position,
            &environment,
            &self.layout,
        );

        match self.phase {
            Phase::Created | Phase::Dismissed => self.frame = self.placement.start,
            Phase::Visible => self.frame = self.placement.resting,
            Phase::Showing => {
                if let Some(transition) = self.transition.as_mut() {
                    transition.retarget(self.placement.resting);
                    self.frame = transition.frame();
                }
            }
            Phase::Dismissing => {
                if let Some(transition) = self.transition.as_mut() {
                    transition.retarget(self.placement.start);
                    self.frame = transition.frame();
                }
            }
        }
    }

    fn finish_dismissal(&mut self) {
        self.hidden = true;
        self.active = false;
        self.interactive = false;
        if let Some(previous) = self.previous.as_mut() {
            previous.make_active();
        }
        self.set_phase(Phase::Dismissed);

        if let Some(callback) = self.on_dismissed.take() {
            callback(&*self);
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(
            "toast {:?}: {:?} -> {:?}",
            self.appearance.message, self.phase, phase
        );
        self.phase = phase;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.appearance.message
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.appearance.position
    }

    /// Display duration; [`NO_POP_TIME`] for toasts dismissed by tap only.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.appearance.duration
    }

    /// Whether this toast was configured to dismiss on tap.
    #[must_use]
    pub fn dismiss_on_tap(&self) -> bool {
        self.appearance.dismiss_on_tap
    }

    /// Whether taps are currently accepted.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether the surface is the active top-level context.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether an entrance or exit animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether any part of the current card overlaps the screen bounds.
    #[must_use]
    pub fn is_on_screen(&self) -> bool {
        !self.hidden && visible_part(self.frame, self.environment.bounds).is_some()
    }

    /// Current card rectangle, in screen coordinates.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Rectangle of the text inside the current card.
    #[must_use]
    pub fn text_frame(&self) -> Rectangle {
        inset(self.frame, self.layout.inner_padding)
    }

    #[must_use]
    pub fn start_rect(&self) -> Rectangle {
        self.placement.start
    }

    #[must_use]
    pub fn resting_rect(&self) -> Rectangle {
        self.placement.resting
    }

    /// Wrapped size of the message text.
    #[must_use]
    pub fn text_size(&self) -> Size {
        self.text_size
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.layout.corner_radius
    }
}

fn measure_text(
    appearance: &Appearance,
    environment: &Environment,
    layout: &LayoutConfig,
    measure: &dyn TextMeasure,
) -> Size {
    let max_width = environment.device_class.max_text_width(layout);
    let size = measure.measure(&appearance.message, &appearance.font, max_width);
    Size::new(size.width.min(max_width), size.height)
}
