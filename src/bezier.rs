//! An editable cubic Bézier.

use kurbo::{BezPath, CubicBez, Line, ParamCurve, Point, Size};

/// Default per-axis distance within which a pointer grabs a control point.
pub const DEFAULT_HIT_RADIUS: f64 = 50.0;

/// The minimum number of line segments used when flattening the curve.
pub const MIN_FLATTEN_SEGMENTS: usize = 32;

/// Four control points and the state of an in-progress drag.
///
/// There are always exactly four points. `dragged` is `None` whenever no
/// pointer is down.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierEditor {
    points: [Point; 4],
    dragged: Option<usize>,
    hit_radius: f64,
}

impl BezierEditor {
    pub fn new(points: [Point; 4]) -> BezierEditor {
        BezierEditor {
            points,
            dragged: None,
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }

    /// The default layout for a viewport: a square between one and two
    /// thirds of the way across each axis, starting top-left and running
    /// clockwise.
    pub fn for_viewport(size: Size) -> BezierEditor {
        BezierEditor::new(Self::default_points(size))
    }

    pub fn default_points(size: Size) -> [Point; 4] {
        let (x0, x1) = (size.width / 3.0, 2.0 * size.width / 3.0);
        let (y0, y1) = (size.height / 3.0, 2.0 * size.height / 3.0);
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    pub fn with_hit_radius(mut self, radius: f64) -> BezierEditor {
        self.hit_radius = radius;
        self
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Replace all four points, ending any drag.
    pub fn set_points(&mut self, points: [Point; 4]) {
        self.points = points;
        self.dragged = None;
    }

    /// The index of the point being dragged, if any.
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    pub fn to_cubic(&self) -> CubicBez {
        let [p0, p1, p2, p3] = self.points;
        CubicBez::new(p0, p1, p2, p3)
    }

    /// Evaluate the curve at `t`, clamped to `0..=1`.
    ///
    /// The endpoints are exact: `evaluate(0.0)` is `P0` and `evaluate(1.0)`
    /// is `P3`.
    pub fn evaluate(&self, t: f64) -> Point {
        self.to_cubic().eval(t.max(0.0).min(1.0))
    }

    /// A path with the curve as a single cubic segment.
    pub fn to_path(&self) -> BezPath {
        let [p0, p1, p2, p3] = self.points;
        let mut path = BezPath::new();
        path.move_to(p0);
        path.curve_to(p1, p2, p3);
        path
    }

    /// The control polygon `P0 → P1 → P2 → P3`.
    pub fn control_polygon(&self) -> [Line; 3] {
        let p = &self.points;
        [
            Line::new(p[0], p[1]),
            Line::new(p[1], p[2]),
            Line::new(p[2], p[3]),
        ]
    }

    /// Approximate the curve with `n` evenly parametrized line segments.
    ///
    /// `n` is raised to [`MIN_FLATTEN_SEGMENTS`] if smaller.
    pub fn flatten(&self, n: usize) -> Vec<Point> {
        let n = n.max(MIN_FLATTEN_SEGMENTS);
        let cubic = self.to_cubic();
        let step = (n as f64).recip();
        let mut pts: Vec<Point> = (0..n).map(|i| cubic.eval(i as f64 * step)).collect();
        pts.push(self.points[3]);
        pts
    }

    /// The first control point within the hit radius of `pos` on both axes.
    ///
    /// Points are scanned in index order, so the lower index wins when
    /// several are in range.
    pub fn hit_test(&self, pos: Point) -> Option<usize> {
        let r = self.hit_radius;
        self.points
            .iter()
            .position(|p| (pos.x - p.x).abs() <= r && (pos.y - p.y).abs() <= r)
    }

    /// Grab the point under `pos` and move it there.
    ///
    /// Returns `true` if a point was hit; otherwise nothing changes.
    pub fn pointer_down(&mut self, pos: Point) -> bool {
        match self.hit_test(pos) {
            Some(ix) => {
                if self.dragged != Some(ix) {
                    log::debug!("dragging control point {}", ix);
                }
                self.dragged = Some(ix);
                self.points[ix] = pos;
                true
            }
            None => false,
        }
    }

    /// Same as [`pointer_down`](BezierEditor::pointer_down): each move
    /// re-runs the hit test.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        self.pointer_down(pos)
    }

    /// Release the current drag.
    pub fn pointer_up(&mut self) {
        if let Some(ix) = self.dragged.take() {
            log::debug!("released control point {}", ix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn editor() -> BezierEditor {
        BezierEditor::for_viewport(Size::new(300.0, 300.0))
    }

    #[test]
    fn default_layout() {
        let ed = editor();
        assert_eq!(
            ed.points(),
            &[
                Point::new(100.0, 100.0),
                Point::new(200.0, 100.0),
                Point::new(200.0, 200.0),
                Point::new(100.0, 200.0),
            ]
        );
        assert_eq!(ed.dragged(), None);
    }

    #[test]
    fn evaluate_endpoints_exact() {
        let ed = BezierEditor::new([
            Point::new(-3.7, 12.25),
            Point::new(1e4, -8.0),
            Point::new(0.1, 0.2),
            Point::new(99.9, -0.003),
        ]);
        assert_eq!(ed.evaluate(0.0), ed.points()[0]);
        assert_eq!(ed.evaluate(1.0), ed.points()[3]);
        assert_eq!(ed.evaluate(-2.0), ed.points()[0]);
        assert_eq!(ed.evaluate(7.0), ed.points()[3]);
    }

    #[test]
    fn evaluate_midpoint() {
        let p = editor().evaluate(0.5);
        assert_abs_diff_eq!(p.x, 175.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn drag_moves_only_the_grabbed_point() {
        let mut ed = editor();
        let before = *ed.points();
        assert!(ed.pointer_down(Point::new(205.0, 95.0)));
        assert_eq!(ed.dragged(), Some(1));
        assert!(ed.pointer_move(Point::new(230.0, 80.0)));
        assert_eq!(ed.points()[1], Point::new(230.0, 80.0));
        for ix in &[0, 2, 3] {
            assert_eq!(ed.points()[*ix], before[*ix]);
        }
        ed.pointer_up();
        assert_eq!(ed.dragged(), None);
    }

    #[test]
    fn miss_changes_nothing() {
        let mut ed = editor();
        let before = ed.clone();
        assert!(!ed.pointer_down(Point::new(260.0, 150.0)));
        assert_eq!(ed, before);
    }

    #[test]
    fn hit_radius_is_inclusive_per_axis() {
        let ed = editor();
        // the center is exactly one radius from every point
        assert_eq!(ed.hit_test(Point::new(150.0, 150.0)), Some(0));
        assert_eq!(ed.hit_test(Point::new(250.0, 150.0)), Some(1));
        assert_eq!(ed.hit_test(Point::new(50.0, 50.0)), Some(0));
        assert_eq!(ed.hit_test(Point::new(49.9, 100.0)), None);
        assert_eq!(ed.hit_test(Point::new(250.1, 150.0)), None);
        assert_eq!(ed.hit_test(Point::new(150.0, 250.1)), None);
    }

    #[test]
    fn lower_index_wins_ties() {
        let mut ed = BezierEditor::new([
            Point::new(100.0, 100.0),
            Point::new(120.0, 100.0),
            Point::new(300.0, 300.0),
            Point::new(110.0, 100.0),
        ]);
        assert!(ed.pointer_down(Point::new(110.0, 100.0)));
        assert_eq!(ed.dragged(), Some(0));
        assert_eq!(ed.points()[1], Point::new(120.0, 100.0));
        assert_eq!(ed.points()[3], Point::new(110.0, 100.0));
    }

    #[test]
    fn flatten_hits_both_ends() {
        let ed = editor();
        let pts = ed.flatten(4);
        assert_eq!(pts.len(), MIN_FLATTEN_SEGMENTS + 1);
        assert_eq!(pts[0], ed.points()[0]);
        assert_eq!(pts[pts.len() - 1], ed.points()[3]);
    }

    #[test]
    fn custom_hit_radius() {
        let ed = editor().with_hit_radius(5.0);
        assert_eq!(ed.hit_test(Point::new(106.0, 100.0)), None);
        assert_eq!(ed.hit_test(Point::new(104.0, 100.0)), Some(0));
    }
}
