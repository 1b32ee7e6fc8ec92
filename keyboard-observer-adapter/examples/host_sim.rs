// Example: a simulated host wiring the controller to a notification center.
use std::sync::Arc;

use keyboard_observer::{Notification, ObserverOptions, Rect, ScrollViewHandle};
use keyboard_observer_adapter::{Controller, NotificationCenter, SharedScrollView};

fn main() {
    let center = NotificationCenter::new();
    let scroll_view = Arc::new(SharedScrollView::new());

    let mut controller = Controller::with_scroll_view(
        ObserverOptions::new(800.0),
        Arc::clone(&scroll_view) as ScrollViewHandle,
    );
    controller.set_on_frame_change(Some(|frame: Rect, event| {
        println!("callback: event={event:?} keyboard_top={}", frame.min_y());
    }));
    controller.subscribe(&center);

    let keyboard = |y: f64, h: f64| Rect::new(0.0, y, 320.0, h);

    // The platform would post these as the user focuses a field, toggles the
    // predictive bar, and dismisses the keyboard.
    let sequence = [
        ("show", keyboard(800.0, 300.0), keyboard(500.0, 300.0)),
        ("grow", keyboard(500.0, 300.0), keyboard(450.0, 350.0)),
        ("hide", keyboard(450.0, 350.0), keyboard(800.0, 300.0)),
    ];

    for (label, begin, end) in sequence {
        center.post(&Notification::will_change_frame(begin, end));
        println!("{label}: insets={:?}", scroll_view.insets());
    }

    controller.unsubscribe();
    center.post(&Notification::will_change_frame(
        keyboard(800.0, 300.0),
        keyboard(500.0, 300.0),
    ));
    println!("after unsubscribe: insets={:?}", scroll_view.insets());

    controller.with_observer(|observer| {
        println!("last_change={:?}", observer.last_change());
    });
}
