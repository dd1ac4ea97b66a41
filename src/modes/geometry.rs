use kurbo::{Line, Point, Rect, Size};

use super::{default_pair, MARKER_RADIUS};
use crate::mode::{Mode, ModeId};
use crate::paint::{Canvas, Color};

const ACTIVE_COLOR: Color = Color::rgb8(0, 170, 0);
const INACTIVE_COLOR: Color = Color::RED;
const LINE_WIDTH: f64 = 5.0;

/// Which of the two points a gesture moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    A,
    B,
}

impl Default for Handle {
    fn default() -> Self {
        Handle::A
    }
}

impl Handle {
    fn other(self) -> Handle {
        match self {
            Handle::A => Handle::B,
            Handle::B => Handle::A,
        }
    }
}

/// Two points and the shapes they span: the circle with AB as diameter,
/// the rectangle with AB as diagonal, and the line AB itself.
///
/// Gestures alternate between moving A and moving B.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    a: Point,
    b: Point,
    active: Handle,
    size: Size,
    touched: bool,
}

impl Geometry {
    pub fn points(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    pub fn active(&self) -> Handle {
        self.active
    }

    pub fn diagonal(&self) -> Line {
        Line::new(self.a, self.b)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.a, self.b)
    }

    fn move_active(&mut self, pos: Point) -> bool {
        self.touched = true;
        match self.active {
            Handle::A => self.a = pos,
            Handle::B => self.b = pos,
        }
        true
    }
}

impl Mode for Geometry {
    fn id(&self) -> ModeId {
        ModeId::Geometry
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
        self.move_active(pos)
    }

    fn pointer_move(&mut self, pos: Point) -> bool {
        self.move_active(pos)
    }

    fn pointer_up(&mut self, _pos: Point) -> bool {
        self.touched = true;
        self.active = self.active.other();
        true
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.clear(Color::WHITE);
        let diagonal = self.diagonal();
        let radius = (self.b - self.a).hypot() / 2.0;
        canvas.fill_circle(self.a.lerp(self.b, 0.5), radius, Color::BLACK);
        canvas.fill_rect(self.bounds(), Color::BLUE);
        canvas.stroke_line(diagonal, LINE_WIDTH, Color::WHITE);

        let (a_color, b_color) = match self.active {
            Handle::A => (ACTIVE_COLOR, INACTIVE_COLOR),
            Handle::B => (INACTIVE_COLOR, ACTIVE_COLOR),
        };
        canvas.fill_circle(self.a, MARKER_RADIUS, a_color);
        canvas.fill_circle(self.b, MARKER_RADIUS, b_color);
        canvas.label("A", self.a, Color::WHITE);
        canvas.label("B", self.b, Color::WHITE);
    }

    fn reset(&mut self) {
        self.touched = false;
        self.active = Handle::A;
        self.layout(self.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    use crate::modes::test_util::paint;
    use crate::paint::DrawCommand;

    #[test]
    fn gestures_alternate_handles() {
        let mut mode = Geometry::default();
        mode.layout(Size::new(300.0, 300.0));
        assert_eq!(mode.active(), Handle::A);
        mode.pointer_down(Point::new(10.0, 10.0));
        mode.pointer_move(Point::new(20.0, 30.0));
        mode.pointer_up(Point::new(25.0, 35.0));
        assert_eq!(
            mode.points(),
            (Point::new(20.0, 30.0), Point::new(200.0, 100.0))
        );
        assert_eq!(mode.active(), Handle::B);

        mode.pointer_down(Point::new(90.0, 80.0));
        mode.cancel(Point::new(90.0, 80.0));
        assert_eq!(mode.points().1, Point::new(90.0, 80.0));
        assert_eq!(mode.active(), Handle::A);
    }

    #[test]
    fn bounds_are_normalized() {
        let mut mode = Geometry::default();
        mode.layout(Size::new(300.0, 300.0));
        assert_eq!(mode.bounds(), Rect::new(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn paint_highlights_active_point() {
        let mut mode = Geometry::default();
        let size = Size::new(300.0, 300.0);
        mode.layout(size);
        mode.pointer_up(Point::ZERO);
        let cmds = paint(&mode, size);
        assert_eq!(cmds.len(), 8);
        match cmds[1] {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                assert_eq!(center, Point::new(150.0, 150.0));
                assert_abs_diff_eq!(radius, 2f64.sqrt() * 50.0, epsilon = 1e-9);
                assert_eq!(color, Color::BLACK);
            }
            ref other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            cmds[5],
            DrawCommand::FillCircle {
                center: Point::new(200.0, 100.0),
                radius: MARKER_RADIUS,
                color: ACTIVE_COLOR,
            }
        );
    }
}
