use kurbo::{Line, Point};

use crate::mode::{Mode, ModeId};
use crate::paint::{Canvas, Color};

/// The tap that would reach this many points clears the plot instead.
pub const MAX_POINTS: usize = 10;

const LINE_COLOR: Color = Color::rgb8(225, 225, 225);
const LINE_WIDTH: f64 = 5.0;

/// Each tap plots a numbered point, joined to the previous one.
#[derive(Clone, Debug, Default)]
pub struct Points {
    points: Vec<Point>,
}

impl Points {
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Mode for Points {
    fn id(&self) -> ModeId {
        ModeId::Points
    }

    fn pointer_down(&mut self, pos: Point) -> bool {
        if self.points.len() + 1 < MAX_POINTS {
            self.points.push(pos);
        } else {
            log::debug!("point plot full, clearing");
            self.points.clear();
        }
        true
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.clear(Color::WHITE);
        for pair in self.points.windows(2) {
            canvas.stroke_line(Line::new(pair[0], pair[1]), LINE_WIDTH, LINE_COLOR);
        }
        for (i, pt) in self.points.iter().enumerate() {
            canvas.label((i + 1).to_string(), *pt, Color::BLACK);
        }
    }

    fn reset(&mut self) {
        self.points.clear();
    }
}
