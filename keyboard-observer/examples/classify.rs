// Example: the pure classification + inset rules, no observer involved.
use keyboard_observer::{Rect, bottom_inset, classify};

fn main() {
    let screen_height = 800.0;
    let cases = [
        ("show", Rect::new(0.0, 800.0, 320.0, 300.0), Rect::new(0.0, 500.0, 320.0, 300.0)),
        ("hide", Rect::new(0.0, 500.0, 320.0, 300.0), Rect::new(0.0, 800.0, 320.0, 300.0)),
        ("grow", Rect::new(0.0, 500.0, 320.0, 300.0), Rect::new(0.0, 450.0, 320.0, 350.0)),
    ];

    for (label, begin, end) in cases {
        let event = classify(begin, end, screen_height);
        let inset = bottom_inset(end, screen_height);
        println!("{label}: event={event:?} bottom_inset={inset}");
    }
}
