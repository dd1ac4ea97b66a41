use kurbo::{Line, Point, Rect, Size};

use super::{default_pair, MARKER_RADIUS};
use crate::mode::{Mode, ModeId};
use crate::paint::{Canvas, Color};

const BACKGROUND: Color = Color::rgb8(235, 245, 255);
const A_COLOR: Color = Color::rgb8(0, 85, 170);
const B_COLOR: Color = Color::rgb8(0, 170, 85);
const C_COLOR: Color = Color::rgb8(170, 0, 85);
const LINE_WIDTH: f64 = 5.0;

/// Three points joined to the corners: a swipe moves A to where it starts
/// and B to where it ends. C sits halfway between them.
#[derive(Clone, Debug, Default)]
pub struct Sketchy {
    a: Point,
    b: Point,
    size: Size,
    touched: bool,
}

impl Sketchy {
    pub fn points(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    pub fn midpoint(&self) -> Point {
        self.a.lerp(self.b, 0.5)
    }
}

impl Mode for Sketchy {
    fn id(&self) -> ModeId {
        ModeId::Sketchy
    }

    fn layout(&mut self, size: Size) {
        self.size = size;
        if !self.touched {
            let (a, b) = default_pair(size);
            self.a = a;
            self.b = b;
        }
    }

    fn pointer_down(&mut self, pos: Point) -> bool {
        self.touched = true;
        self.a = pos;
        true
    }

    fn pointer_move(&mut self, _pos: Point) -> bool {
        self.touched = true;
        false
    }

    fn pointer_up(&mut self, pos: Point) -> bool {
        self.touched = true;
        self.b = pos;
        true
    }

    fn paint(&self, canvas: &mut Canvas) {
        let size = canvas.size();
        let c = self.midpoint();
        canvas.clear(BACKGROUND);
        canvas.stroke_line(
            Line::new((0.0, size.height), self.a),
            LINE_WIDTH,
            Color::BLACK,
        );
        canvas.stroke_line(Line::new(self.a, self.b), LINE_WIDTH, Color::BLACK);
        canvas.stroke_line(
            Line::new(self.b, (size.width, 0.0)),
            LINE_WIDTH,
            Color::BLACK,
        );
        canvas.fill_circle(self.a, MARKER_RADIUS, A_COLOR);
        canvas.fill_rect(Rect::from_center_size(self.b, (48.0, 48.0)), B_COLOR);
        canvas.fill_oval(Rect::from_center_size(c, (24.0, 48.0)), C_COLOR);
        canvas.label("A", self.a, Color::WHITE);
        canvas.label("B", self.b, Color::WHITE);
        canvas.label("C", c, Color::WHITE);
    }

    fn reset(&mut self) {
        self.touched = false;
        self.layout(self.size);
    }
}
