//! Drag a control point of the Bézier mode and print the result as SVG.

use drawmodes::kurbo::{Point, Size};
use drawmodes::{to_svg, PointerEvent, Shell};

fn main() {
    env_logger::init();
    let size = Size::new(300.0, 300.0);
    let mut shell = Shell::new(size);
    shell.select_mode(5);
    shell.pointer(PointerEvent::Down(Point::new(205.0, 95.0)));
    for i in 1..=10 {
        let t = i as f64 / 10.0;
        shell.pointer(PointerEvent::Move(Point::new(205.0 + 60.0 * t, 95.0 - 40.0 * t)));
    }
    eprintln!("{}", shell.instructions());
    print!("{}", to_svg(size, &shell.paint()));
}
