//! Substitution fractals.
//!
//! A substitution fractal is drawn by replacing a line segment with a small,
//! fixed set of sub-segments, and then doing the same to each of those, down
//! to some recursion depth. The set of sub-segments is described by a
//! [`Template`].

use std::borrow::Cow;

use kurbo::{Affine, BezPath, Line, Point};

/// One rule of a template: a sub-segment in template coordinates.
///
/// Template coordinates place the parent segment's start at `(0, 0)` and its
/// end at `(1, 1)`.
pub type Rule = (Point, Point);

const fn rule(x0: f64, y0: f64, x1: f64, y1: f64) -> Rule {
    (Point::new(x0, y0), Point::new(x1, y1))
}

/// A table of substitution rules.
///
/// Different tables give different curves; the recursion is the same for
/// all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    rules: Cow<'static, [Rule]>,
}

const PAPERFOLDING_RULES: [Rule; 3] = [
    rule(0.00, 0.00, 0.25, 0.60),
    rule(0.25, 0.25, 0.75, 0.75),
    rule(0.75, 0.40, 1.00, 1.00),
];

const DRAGON_RULES: [Rule; 2] = [rule(0.0, 0.0, 1.0, 0.0), rule(1.0, 0.0, 1.0, 1.0)];

// The two interior vertices sit at the chord midpoint offset by 1/(2√3) of
// the chord length on either side.
const TERDRAGON_A: f64 = 0.211_324_865_405_187_1;
const TERDRAGON_B: f64 = 0.788_675_134_594_812_9;

const TERDRAGON_RULES: [Rule; 3] = [
    rule(0.0, 0.0, TERDRAGON_A, TERDRAGON_B),
    rule(TERDRAGON_A, TERDRAGON_B, TERDRAGON_B, TERDRAGON_A),
    rule(TERDRAGON_B, TERDRAGON_A, 1.0, 1.0),
];

impl Template {
    /// A loose approximation of the regular paperfolding sequence.
    ///
    /// The three strips overlap rather than join, so the output is not a
    /// single connected polyline.
    pub const PAPERFOLDING: Template = Template {
        rules: Cow::Borrowed(&PAPERFOLDING_RULES),
    };

    /// The Heighway dragon: each segment folds into two at a right angle.
    pub const DRAGON: Template = Template {
        rules: Cow::Borrowed(&DRAGON_RULES),
    };

    /// The terdragon: each segment is replaced by three at 120° turns.
    pub const TERDRAGON: Template = Template {
        rules: Cow::Borrowed(&TERDRAGON_RULES),
    };

    /// Create a template from an arbitrary rule table.
    pub fn new(rules: Vec<Rule>) -> Template {
        Template {
            rules: Cow::Owned(rules),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The number of sub-segments each segment is replaced with.
    pub fn fan_out(&self) -> usize {
        self.rules.len()
    }

    /// `true` if each rule starts where the previous one ended, and the
    /// table as a whole runs from `(0, 0)` to `(1, 1)`.
    pub fn is_continuous(&self) -> bool {
        let (first, last) = match (self.rules.first(), self.rules.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return false,
        };
        first.0 == Point::ZERO
            && last.1 == Point::new(1.0, 1.0)
            && self.rules.windows(2).all(|w| w[0].1 == w[1].0)
    }

    /// The number of segments produced at `depth`, or `None` on overflow.
    pub fn segment_count(&self, depth: u32) -> Option<usize> {
        self.fan_out().checked_pow(depth)
    }

    /// The largest depth no greater than `depth` whose output fits in
    /// `budget` segments.
    pub fn depth_within_budget(&self, depth: u32, budget: usize) -> u32 {
        if self.fan_out() <= 1 {
            return depth;
        }
        let mut d = 0;
        while d < depth {
            match self.segment_count(d + 1) {
                Some(n) if n <= budget => d += 1,
                _ => break,
            }
        }
        d
    }

    /// Generate the leaf segments for `segment` at recursion `depth`.
    ///
    /// The result has `fan_out().pow(depth)` segments, in rule order. A depth
    /// of zero returns the segment itself.
    pub fn generate(&self, segment: Line, depth: u32) -> Vec<Line> {
        let mut out = Vec::with_capacity(self.segment_count(depth).unwrap_or(0).min(1 << 20));
        self.generate_extend(segment, depth, &mut out);
        out
    }

    /// Generate the leaf segments, appending to `out`.
    pub fn generate_extend(&self, segment: Line, depth: u32, out: &mut Vec<Line>) {
        if depth == 0 {
            out.push(segment);
            return;
        }
        let a = frame(segment);
        for &(p0, p1) in self.rules.iter() {
            self.generate_extend(Line::new(a * p0, a * p1), depth - 1, out);
        }
    }

    /// Render the fractal as a path of disjoint line segments.
    pub fn render(&self, segment: Line, depth: u32) -> BezPath {
        let mut path = BezPath::new();
        for line in self.generate(segment, depth) {
            path.move_to(line.p0);
            path.line_to(line.p1);
        }
        path
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::PAPERFOLDING
    }
}

/// The transform taking template coordinates onto `segment`.
///
/// This is a rotation by -45° and a scale by 1/√2 of the segment's direction,
/// so that `(1, 1)` lands on the segment's end. A zero-length segment
/// collapses everything onto its start point.
fn frame(segment: Line) -> Affine {
    let (from, to) = (segment.p0, segment.p1);
    let cos_distance = ((to.x - from.x) + (to.y - from.y)) / 2.0;
    let sin_distance = ((from.x - to.x) + (to.y - from.y)) / 2.0;
    Affine::new([
        cos_distance,
        sin_distance,
        -sin_distance,
        cos_distance,
        from.x,
        from.y,
    ])
}
