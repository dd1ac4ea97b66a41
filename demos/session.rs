//! Replay a scripted session against every mode.
//!
//! An optional first argument names a JSON settings file. Each mode is fed
//! the same gestures and rendered to `<mode>.svg` in the current directory.

use anyhow::Context;
use drawmodes::kurbo::{Point, Size};
use drawmodes::{to_svg, ModeId, PointerEvent, Settings, Shell};

fn swipe(shell: &mut Shell, from: Point, to: Point) {
    shell.pointer(PointerEvent::Down(from));
    for i in 1..=8 {
        shell.pointer(PointerEvent::Move(from.lerp(to, i as f64 / 8.0)));
    }
    shell.pointer(PointerEvent::Up(to));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading settings from {}", path))?;
            Settings::from_json(&json).with_context(|| format!("parsing {}", path))?
        }
        None => Settings::default(),
    };
    let size = Size::new(400.0, 400.0);
    let mut shell = Shell::with_settings(size, settings);
    for (ix, id) in ModeId::ALL.iter().enumerate() {
        shell.select_mode(ix);
        swipe(&mut shell, Point::new(100.0, 300.0), Point::new(300.0, 200.0));
        swipe(&mut shell, Point::new(140.0, 140.0), Point::new(260.0, 260.0));
        swipe(&mut shell, Point::new(80.0, 200.0), Point::new(320.0, 200.0));
        let file = format!("{}.svg", id.name().to_lowercase());
        std::fs::write(&file, to_svg(size, &shell.paint()))
            .with_context(|| format!("writing {}", file))?;
        println!("{:<10} {}", id.name(), shell.instructions());
    }
    Ok(())
}
