//! Print a substitution fractal as an SVG document.
//!
//! Usage: `fractal_svg [paperfolding|dragon|terdragon] [depth]`

use anyhow::{bail, Context};
use drawmodes::kurbo::{Line, Size};
use drawmodes::{to_svg, Canvas, Color, TemplateKind, DEFAULT_MAX_DEPTH};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let kind = match args.next().as_deref() {
        None | Some("paperfolding") => TemplateKind::Paperfolding,
        Some("dragon") => TemplateKind::Dragon,
        Some("terdragon") => TemplateKind::Terdragon,
        Some(other) => bail!("unknown template {:?}", other),
    };
    let depth: u32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad depth {:?}", s))?,
        None => 8,
    };
    let depth = depth.min(DEFAULT_MAX_DEPTH);

    let size = Size::new(500.0, 500.0);
    let template = kind.template();
    let seg = Line::new((125.0, 250.0), (375.0, 250.0));
    let mut canvas = Canvas::new(size);
    canvas.clear(Color::WHITE);
    canvas.stroke_path(template.render(seg, depth), 1.0, Color::BLACK);
    eprintln!(
        "{} segments at depth {}",
        template.segment_count(depth).unwrap_or(0),
        depth
    );
    print!("{}", to_svg(size, canvas.commands()));
    Ok(())
}
