// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_toast::config::{self, Config};
use iced_toast::toast::{
    ActiveContext, ApproximateMeasure, DeviceClass, Environment, Message, Phase, Position, Toast,
    ToastQueue, ToastSurface, NO_POP_TIME,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

const FRAME: Duration = Duration::from_millis(16);

/// Window that counts how often it became active again.
#[derive(Clone, Default)]
struct KeyWindow {
    activations: Rc<Cell<u32>>,
}

impl ActiveContext for KeyWindow {
    fn make_active(&mut self) {
        self.activations.set(self.activations.get() + 1);
    }
}

fn phone() -> Environment {
    Environment::new(Size::new(375.0, 667.0)).status_bar_height(20.0)
}

fn build(toast: &Toast, window: &KeyWindow) -> ToastSurface<KeyWindow> {
    ToastSurface::new(
        toast,
        Some(window.clone()),
        phone(),
        &Config::default(),
        &ApproximateMeasure::default(),
    )
}

fn run_animation(surface: &mut ToastSurface<KeyWindow>) {
    for _ in 0..1_000 {
        if !surface.is_animating() {
            return;
        }
        surface.tick(FRAME);
    }
    panic!("animation did not finish");
}

#[test]
fn manual_toast_is_dismissed_by_tap() {
    let window = KeyWindow::default();
    let phases = Rc::new(RefCell::new(Vec::new()));
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);

    let toast = Toast::new("Hi").position(Position::Bottom).duration(NO_POP_TIME);
    let mut surface = build(&toast, &window).on_dismissed(move |_| counter.set(counter.get() + 1));
    assert!(surface.dismiss_on_tap());

    surface.show();
    phases.borrow_mut().push(surface.phase());
    run_animation(&mut surface);
    phases.borrow_mut().push(surface.phase());

    assert!(surface.tap());
    phases.borrow_mut().push(surface.phase());
    run_animation(&mut surface);
    phases.borrow_mut().push(surface.phase());

    assert_eq!(
        *phases.borrow(),
        vec![
            Phase::Showing,
            Phase::Visible,
            Phase::Dismissing,
            Phase::Dismissed
        ]
    );
    assert_eq!(fired.get(), 1);
    assert_eq!(window.activations.get(), 1);
}

#[test]
fn timed_toast_ignores_taps_and_leaves_after_its_duration() {
    let window = KeyWindow::default();
    let mut queue = ToastQueue::new(window.clone(), phone(), Config::default());
    queue.push(
        Toast::new("Loading…")
            .position(Position::Top)
            .duration(Duration::from_secs_f64(3.0))
            .dismiss_on_tap(false),
    );

    for _ in 0..100 {
        queue.advance(FRAME);
    }
    let surface = queue.current().expect("toast on screen");
    assert_eq!(surface.phase(), Phase::Visible);
    assert!(!surface.dismiss_on_tap());

    queue.handle_message(&Message::Tapped);
    assert_eq!(queue.current().map(ToastSurface::phase), Some(Phase::Visible));

    for _ in 0..1_000 {
        if queue.is_idle() {
            break;
        }
        queue.advance(FRAME);
    }
    assert!(queue.is_idle());
    assert_eq!(window.activations.get(), 1);
}

#[test]
fn start_rectangles_are_offscreen_for_every_message_length() {
    let window = KeyWindow::default();
    let env = phone();
    let words = "lorem ipsum dolor sit amet ";

    for repeat in [1, 3, 10, 40] {
        let message = words.repeat(repeat);

        let top = build(&Toast::new(message.clone()).position(Position::Top), &window);
        let start = top.start_rect();
        assert!(start.y + start.height <= -env.status_bar_height + 1e-3);

        let bottom = build(&Toast::new(message).position(Position::Bottom), &window);
        assert!(bottom.start_rect().y >= env.bounds.height);

        for surface in [&top, &bottom] {
            let center = surface.resting_rect().center_x();
            assert!((center - env.bounds.width / 2.0).abs() < 1e-3);
            assert!(surface.text_size().width <= 300.0);
        }
    }
}

#[test]
fn tablet_toasts_can_be_wider() {
    let words = "lorem ipsum dolor sit amet ".repeat(20);
    let config = Config::default();
    let measure = ApproximateMeasure::default();

    let handheld: ToastSurface<KeyWindow> =
        ToastSurface::new(&Toast::new(words.clone()), None, phone(), &config, &measure);
    let tablet: ToastSurface<KeyWindow> = ToastSurface::new(
        &Toast::new(words),
        None,
        Environment::new(Size::new(1024.0, 768.0)).device_class(DeviceClass::Tablet),
        &config,
        &measure,
    );

    assert!(tablet.text_size().width > handheld.text_size().width);
    assert!(tablet.text_size().height < handheld.text_size().height);
}

#[test]
fn config_from_disk_changes_layout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut custom = Config::default();
    custom.layout.inner_padding = 20.0;
    custom.layout.edge_distance = 40.0;
    config::save_with_override(&custom, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let surface: ToastSurface<KeyWindow> = ToastSurface::new(
        &Toast::new("Hi").position(Position::Top),
        None,
        phone(),
        &loaded,
        &ApproximateMeasure::default(),
    );
    assert_eq!(surface.resting_rect().y, 40.0);
    assert_eq!(
        surface.resting_rect().height,
        surface.text_size().height + 40.0
    );

    dir.close().expect("Failed to close temporary directory");
}
