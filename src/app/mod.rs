// SPDX-License-Identifier: MPL-2.0
//! Demo application showing toasts over a simple control panel.
//!
//! The `App` owns a [`ToastQueue`] and feeds it ticks, taps and window
//! resizes. The control panel is the "previously active" context: while a
//! toast is up it loses focus, and the queue hands focus back to it after
//! each toast is dismissed.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::toast::view::view_overlay;
use crate::toast::{ActiveContext, Environment, Position, Toast, ToastQueue, NO_POP_TIME};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, window, Element, Length, Size, Subscription, Task};
use log::{info, warn};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 390.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;

const LONG_MESSAGE: &str = "Toasts wrap long messages to the maximum width of the \
device class and grow vertically to fit every line of text.";

/// Shared focus flag of the control panel.
///
/// Cloned into every toast as its previous context; activating it marks the
/// panel as focused again.
#[derive(Debug, Clone, Default)]
pub struct PanelFocus {
    focused: Rc<Cell<bool>>,
}

impl PanelFocus {
    #[must_use]
    pub fn focused() -> Self {
        Self {
            focused: Rc::new(Cell::new(true)),
        }
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn blur(&self) {
        self.focused.set(false);
    }
}

impl ActiveContext for PanelFocus {
    fn make_active(&mut self) {
        self.focused.set(true);
    }

    fn resign_active(&mut self) {
        self.blur();
    }
}

/// Root Iced application state.
pub struct App {
    toasts: ToastQueue<PanelFocus>,
    focus: PanelFocus,
    position: Position,
    shown: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts)
            .field("position", &self.position)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a reusable boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) =
            config::load_with_override(flags.config_dir.map(std::path::PathBuf::from));
        if let Some(warning) = warning {
            warn!("toast config ignored: {}", warning);
        }

        let environment = Environment::new(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
            .device_class(flags.device_class);
        let focus = PanelFocus::focused();

        let app = App {
            toasts: ToastQueue::new(focus.clone(), environment, config),
            focus,
            position: flags.position.unwrap_or_default(),
            shown: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toast")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => self.toasts.handle_message(&toast_message),
            Message::ShowTimed(duration) => {
                self.shown += 1;
                let toast = Toast::new(format!("Toast #{} for {:?}", self.shown, duration))
                    .duration(duration);
                self.enqueue(toast);
            }
            Message::ShowSticky => {
                self.shown += 1;
                let toast = Toast::new(format!("Toast #{}: tap to dismiss", self.shown))
                    .duration(NO_POP_TIME);
                self.enqueue(toast);
            }
            Message::ShowLong => {
                self.shown += 1;
                let toast = Toast::new(LONG_MESSAGE)
                    .duration(Duration::from_secs(4))
                    .dismiss_on_tap(true);
                self.enqueue(toast);
            }
            Message::TogglePosition => {
                self.position = match self.position {
                    Position::Top => Position::Bottom,
                    Position::Bottom => Position::Top,
                };
                info!("new toasts slide in from {:?}", self.position);
            }
            Message::DismissCurrent => {
                self.toasts.dismiss_current();
            }
            Message::Resized(size) => {
                let environment = Environment {
                    bounds: size,
                    ..*self.toasts.environment()
                };
                self.toasts.set_environment(environment);
            }
            Message::Tick(now) => self.toasts.handle_message(&crate::toast::Message::Tick(now)),
        }
        Task::none()
    }

    fn enqueue(&mut self, toast: Toast) {
        self.toasts.push(toast.position(self.position));
    }

    fn view(&self) -> Element<'_, Message> {
        let position_label = match self.position {
            Position::Top => "Slide from: top",
            Position::Bottom => "Slide from: bottom",
        };
        let focus_label = if self.focus.is_focused() {
            "Focus: panel"
        } else {
            "Focus: toast"
        };

        let controls = Column::new()
            .spacing(12.0)
            .align_x(alignment::Horizontal::Center)
            .push(text("Iced Toast").size(28.0))
            .push(
                button(text("Toast for 2 seconds"))
                    .on_press(Message::ShowTimed(Duration::from_secs(2))),
            )
            .push(button(text("Sticky toast")).on_press(Message::ShowSticky))
            .push(button(text("Long toast")).on_press(Message::ShowLong))
            .push(
                Row::new()
                    .spacing(8.0)
                    .push(button(text(position_label)).on_press(Message::TogglePosition))
                    .push(button(text("Dismiss")).on_press(Message::DismissCurrent)),
            )
            .push(text(focus_label))
            .push(text(format!("Waiting: {}", self.toasts.pending_count())));

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(content)
            .push(view_overlay(&self.toasts).map(Message::Toast))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.toasts.needs_ticks()),
            subscription::create_resize_subscription(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let (app, _) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        app
    }

    #[test]
    fn showing_a_toast_moves_focus_away_from_panel() {
        let mut app = app();
        assert!(app.focus.is_focused());

        let _ = app.update(Message::ShowSticky);
        assert!(!app.focus.is_focused());
        assert!(app.toasts.current().is_some());
    }

    #[test]
    fn dismissing_the_last_toast_restores_panel_focus() {
        let mut app = app();
        let _ = app.update(Message::ShowSticky);
        let _ = app.update(Message::DismissCurrent);

        for _ in 0..200 {
            app.toasts.advance(Duration::from_millis(16));
        }

        assert!(app.toasts.is_idle());
        assert!(app.focus.is_focused());
    }

    #[test]
    fn panel_stays_unfocused_while_queued_toasts_follow_each_other() {
        let mut app = app();
        let _ = app.update(Message::ShowSticky);
        let _ = app.update(Message::ShowSticky);
        let _ = app.update(Message::DismissCurrent);

        for _ in 0..60 {
            app.toasts.advance(Duration::from_millis(16));
        }

        let surface = app.toasts.current().expect("second toast on screen");
        assert!(surface.is_active());
        assert!(!app.focus.is_focused());
    }

    #[test]
    fn toggle_position_applies_to_new_toasts() {
        let mut app = app();
        let _ = app.update(Message::TogglePosition);
        let _ = app.update(Message::ShowTimed(Duration::from_secs(1)));

        let surface = app.toasts.current().expect("toast on screen");
        assert_eq!(surface.position(), Position::Top);
    }

    #[test]
    fn resize_keeps_status_bar_and_device_class() {
        let mut app = app();
        let _ = app.update(Message::Resized(Size::new(800.0, 600.0)));

        let environment = app.toasts.environment();
        assert_eq!(environment.bounds, Size::new(800.0, 600.0));
        assert_eq!(environment.device_class, Flags::default().device_class);
    }
}
