use kurbo::{Point, Size};

use crate::bezier::BezierEditor;
use crate::mode::{Mode, ModeId};
use crate::paint::{Canvas, Color};
use crate::settings::BezierSettings;

const POLYGON_COLOR: Color = Color::rgb8(227, 227, 227);
const POINT_COLOR: Color = Color::RED;
const DRAGGED_POINT_COLOR: Color = Color::rgb8(0, 170, 0);

/// Drag the four control points of a cubic Bézier.
#[derive(Clone, Debug)]
pub struct BezierMode {
    editor: BezierEditor,
    point_radius: f64,
    stroke_width: f64,
    flatten_segments: usize,
    size: Size,
    touched: bool,
}

impl BezierMode {
    pub fn new(settings: &BezierSettings) -> BezierMode {
        BezierMode {
            editor: BezierEditor::for_viewport(Size::ZERO).with_hit_radius(settings.hit_radius),
            point_radius: settings.point_radius,
            stroke_width: settings.stroke_width,
            flatten_segments: settings.flatten_segments,
            size: Size::ZERO,
            touched: false,
        }
    }

    pub fn editor(&self) -> &BezierEditor {
        &self.editor
    }

    /// The curve as a polyline at the configured resolution, for hosts that
    /// cannot draw cubics.
    pub fn flattened(&self) -> Vec<Point> {
        self.editor.flatten(self.flatten_segments)
    }
}

impl Default for BezierMode {
    fn default() -> Self {
        BezierMode::new(&BezierSettings::default())
    }
}

impl Mode for BezierMode {
    fn id(&self) -> ModeId {
        ModeId::Bezier
    }

    fn layout(&mut self, size: Size) {
        self.size = size;
        if !self.touched {
            self.editor
                .set_points(BezierEditor::default_points(size));
        }
    }

    fn pointer_down(&mut self, pos: Point) -> bool {
        self.touched = true;
        self.editor.pointer_down(pos)
    }

    fn pointer_move(&mut self, pos: Point) -> bool {
        self.touched = true;
        self.editor.pointer_move(pos)
    }

    fn pointer_up(&mut self, _pos: Point) -> bool {
        self.touched = true;
        self.editor.pointer_up();
        true
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.clear(Color::WHITE);
        for line in self.editor.control_polygon().iter() {
            canvas.stroke_line(*line, self.stroke_width, POLYGON_COLOR);
        }
        canvas.stroke_path(self.editor.to_path(), self.stroke_width, Color::BLACK);

        let dragged = self.editor.dragged();
        for (i, pt) in self.editor.points().iter().enumerate() {
            let color = if dragged == Some(i) {
                DRAGGED_POINT_COLOR
            } else {
                POINT_COLOR
            };
            canvas.fill_circle(*pt, self.point_radius, color);
        }
        for (i, pt) in self.editor.points().iter().enumerate() {
            canvas.label(i.to_string(), *pt, Color::WHITE);
        }
    }

    fn reset(&mut self) {
        self.touched = false;
        self.layout(self.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::test_util::paint;
    use crate::paint::DrawCommand;

    fn mode() -> BezierMode {
        let mut mode = BezierMode::default();
        mode.layout(Size::new(300.0, 300.0));
        mode
    }

    #[test]
    fn layout_until_touched() {
        let mut mode = mode();
        assert_eq!(mode.editor().points()[0], Point::new(100.0, 100.0));
        mode.pointer_down(Point::new(0.0, 0.0));
        mode.layout(Size::new(600.0, 600.0));
        assert_eq!(mode.editor().points()[0], Point::new(100.0, 100.0));
        mode.reset();
        assert_eq!(mode.editor().points()[0], Point::new(200.0, 200.0));
    }

    #[test]
    fn paint_order_and_highlight() {
        let mut mode = mode();
        mode.pointer_down(Point::new(198.0, 203.0));
        let cmds = paint(&mode, Size::new(300.0, 300.0));
        // clear, 3 polygon lines, curve, 4 points, 4 labels
        assert_eq!(cmds.len(), 13);
        assert!(matches!(cmds[4], DrawCommand::StrokePath { .. }));
        assert_eq!(
            cmds[7],
            DrawCommand::FillCircle {
                center: Point::new(198.0, 203.0),
                radius: 27.0,
                color: DRAGGED_POINT_COLOR,
            }
        );
        assert!(matches!(
            cmds[5],
            DrawCommand::FillCircle { color: POINT_COLOR, .. }
        ));

        mode.pointer_up(Point::new(198.0, 203.0));
        let cmds = paint(&mode, Size::new(300.0, 300.0));
        assert!(matches!(
            cmds[7],
            DrawCommand::FillCircle { color: POINT_COLOR, .. }
        ));
    }

    #[test]
    fn flattened_follows_settings() {
        let settings = BezierSettings {
            flatten_segments: 100,
            ..BezierSettings::default()
        };
        let mut mode = BezierMode::new(&settings);
        mode.layout(Size::new(300.0, 300.0));
        mode.pointer_down(Point::new(100.0, 100.0));
        mode.pointer_move(Point::new(40.0, 70.0));
        let pts = mode.flattened();
        assert_eq!(pts.len(), 101);
        assert_eq!(pts[0], Point::new(40.0, 70.0));
        assert_eq!(pts[100], mode.editor().points()[3]);
        assert_eq!(mode.flattened(), mode.editor().flatten(100));

        assert_eq!(self::mode().flattened().len(), 65);
    }

    #[test]
    fn cancel_releases_drag() {
        let mut mode = mode();
        mode.pointer_down(Point::new(100.0, 100.0));
        assert_eq!(mode.editor().dragged(), Some(0));
        mode.cancel(Point::new(100.0, 100.0));
        assert_eq!(mode.editor().dragged(), None);
    }
}
