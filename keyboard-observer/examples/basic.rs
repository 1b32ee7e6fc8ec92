// Example: drive the observer directly with a frame-change notification.
use keyboard_observer::{KeyboardObserver, Notification, ObserverOptions, Rect};

fn main() {
    let mut observer = KeyboardObserver::new(ObserverOptions::new(800.0).with_on_frame_change(
        Some(|frame: Rect, event| {
            println!("keyboard frame={frame:?} event={event:?}");
        }),
    ));

    // Keyboard slides up from below the screen.
    observer.handle_notification(&Notification::will_change_frame(
        Rect::new(0.0, 800.0, 320.0, 300.0),
        Rect::new(0.0, 500.0, 320.0, 300.0),
    ));
    println!("last_change={:?}", observer.last_change());

    // ...and slides back out.
    observer.handle_notification(&Notification::will_change_frame(
        Rect::new(0.0, 500.0, 320.0, 300.0),
        Rect::new(0.0, 800.0, 320.0, 300.0),
    ));
    println!("last_change={:?}", observer.last_change());
}
