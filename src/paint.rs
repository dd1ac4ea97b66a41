//! Draw commands handed to the host for rasterization.

use kurbo::{BezPath, Line, Point, Rect, Size};

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb8(0xff, 0, 0);
    pub const BLUE: Color = Color::rgb8(0, 0, 0xff);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// The color as a `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single drawing primitive.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// Fill the whole viewport.
    Clear(Color),
    StrokeLine {
        line: Line,
        width: f64,
        color: Color,
    },
    /// A path of lines and cubic curves, stroked.
    StrokePath {
        path: BezPath,
        width: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// An ellipse inscribed in `rect`.
    FillOval {
        rect: Rect,
        color: Color,
    },
    /// Text whose baseline starts at `origin`.
    Text {
        text: String,
        origin: Point,
        size: f64,
        color: Color,
    },
}

// `BezPath` has no `PartialEq`, so paths compare by their elements.
impl PartialEq for DrawCommand {
    fn eq(&self, other: &DrawCommand) -> bool {
        use DrawCommand::*;
        match (self, other) {
            (Clear(a), Clear(b)) => a == b,
            (
                StrokeLine { line, width, color },
                StrokeLine {
                    line: line2,
                    width: width2,
                    color: color2,
                },
            ) => line == line2 && width == width2 && color == color2,
            (
                StrokePath { path, width, color },
                StrokePath {
                    path: path2,
                    width: width2,
                    color: color2,
                },
            ) => path.elements() == path2.elements() && width == width2 && color == color2,
            (
                FillCircle {
                    center,
                    radius,
                    color,
                },
                FillCircle {
                    center: center2,
                    radius: radius2,
                    color: color2,
                },
            ) => center == center2 && radius == radius2 && color == color2,
            (FillRect { rect, color }, FillRect { rect: rect2, color: color2 }) => {
                rect == rect2 && color == color2
            }
            (FillOval { rect, color }, FillOval { rect: rect2, color: color2 }) => {
                rect == rect2 && color == color2
            }
            (
                Text {
                    text,
                    origin,
                    size,
                    color,
                },
                Text {
                    text: text2,
                    origin: origin2,
                    size: size2,
                    color: color2,
                },
            ) => text == text2 && origin == origin2 && size == size2 && color == color2,
            _ => false,
        }
    }
}

/// Collects draw commands for one frame.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new(size: Size) -> Canvas {
        Canvas {
            size,
            commands: Vec::new(),
        }
    }

    /// The viewport size.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeLine { line, width, color });
    }

    pub fn stroke_path(&mut self, path: BezPath, width: f64, color: Color) {
        self.commands
            .push(DrawCommand::StrokePath { path, width, color });
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn fill_oval(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillOval { rect, color });
    }

    pub fn text(&mut self, text: impl Into<String>, origin: Point, size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            origin,
            size,
            color,
        });
    }

    /// A short label roughly centered on `center`, the way point markers
    /// are labelled.
    pub fn label(&mut self, text: impl Into<String>, center: Point, color: Color) {
        let origin = Point::new(center.x - LABEL_OFFSET.0, center.y + LABEL_OFFSET.1);
        self.text(text, origin, LABEL_TEXT_SIZE, color);
    }
}

pub const LABEL_TEXT_SIZE: f64 = 40.0;
const LABEL_OFFSET: (f64, f64) = (13.0, 14.0);

/// Render draw commands as an SVG document.
pub fn to_svg(size: Size, commands: &[DrawCommand]) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        size.width, size.height
    );
    out.push('\n');
    for cmd in commands {
        let el = match cmd {
            DrawCommand::Clear(c) => format!(
                r#"<rect width="100%" height="100%" fill="{}" />"#,
                c.to_hex()
            ),
            DrawCommand::StrokeLine { line, width, color } => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" />"#,
                line.p0.x,
                line.p0.y,
                line.p1.x,
                line.p1.y,
                color.to_hex(),
                width
            ),
            DrawCommand::StrokePath { path, width, color } => format!(
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" />"#,
                path.to_svg(),
                color.to_hex(),
                width
            ),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
                center.x,
                center.y,
                radius,
                color.to_hex()
            ),
            DrawCommand::FillRect { rect, color } => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" />"#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                color.to_hex()
            ),
            DrawCommand::FillOval { rect, color } => {
                let c = rect.center();
                format!(
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" />"#,
                    c.x,
                    c.y,
                    rect.width() / 2.0,
                    rect.height() / 2.0,
                    color.to_hex()
                )
            }
            DrawCommand::Text {
                text,
                origin,
                size,
                color,
            } => format!(
                r#"<text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
                origin.x,
                origin.y,
                size,
                color.to_hex(),
                text
            ),
        };
        out.push_str("  ");
        out.push_str(&el);
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}
