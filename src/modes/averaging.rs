use kurbo::Point;

use crate::mode::{Mode, ModeId};
use crate::paint::{Canvas, Color};

const RADIUS_SCALE: f64 = 9.0;

/// Tracks the mean of every tapped position.
#[derive(Clone, Debug, Default)]
pub struct Averaging {
    mean: Point,
    count: u32,
}

impl Averaging {
    /// The running mean, if anything has been tapped.
    pub fn mean(&self) -> Option<Point> {
        if self.count > 0 {
            Some(self.mean)
        } else {
            None
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// The marker grows with the square root of the sample count.
    pub fn radius(&self) -> f64 {
        (self.count as f64).sqrt() * RADIUS_SCALE
    }
}

impl Mode for Averaging {
    fn id(&self) -> ModeId {
        ModeId::Averaging
    }

    fn pointer_down(&mut self, pos: Point) -> bool {
        self.count += 1;
        if self.count == 1 {
            self.mean = pos;
        } else {
            let n = self.count as f64;
            let prev = self.mean.to_vec2() * (n - 1.0);
            self.mean = ((prev + pos.to_vec2()) / n).to_point();
        }
        true
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.clear(Color::BLACK);
        if let Some(mean) = self.mean() {
            canvas.fill_circle(mean, self.radius(), Color::WHITE);
        }
    }

    fn reset(&mut self) {
        *self = Averaging::default();
    }
}
