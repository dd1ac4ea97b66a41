use kurbo::{Line, Point};

use crate::fractal::Template;
use crate::mode::{Mode, ModeId};
use crate::paint::{Canvas, Color};
use crate::settings::FractalSettings;

const PREVIEW_COLOR: Color = Color::BLUE;

/// The fractal produced by the gestures so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalState {
    /// The segment the most recent gesture traced.
    pub origin: Line,
    /// One more than the number of gestures before the most recent one,
    /// up to the configured maximum.
    pub depth: u32,
}

/// Each swipe draws a fractal along the swiped line, one level deeper than
/// the last.
#[derive(Clone, Debug)]
pub struct FractalMode {
    template: Template,
    max_depth: u32,
    segment_budget: usize,
    stroke_width: f64,
    /// The line being swiped, while a gesture is in progress.
    preview: Option<Line>,
    state: Option<FractalState>,
}

impl FractalMode {
    pub fn new(settings: &FractalSettings) -> FractalMode {
        FractalMode {
            template: settings.template.template(),
            max_depth: settings.max_depth,
            segment_budget: settings.segment_budget,
            stroke_width: settings.stroke_width,
            preview: None,
            state: None,
        }
    }

    pub fn state(&self) -> Option<&FractalState> {
        self.state.as_ref()
    }

    pub fn preview(&self) -> Option<Line> {
        self.preview
    }

    /// The depth actually drawn: the current depth, reduced if necessary
    /// to stay within the segment budget.
    pub fn render_depth(&self) -> u32 {
        self.state
            .map(|s| {
                self.template
                    .depth_within_budget(s.depth, self.segment_budget)
            })
            .unwrap_or(0)
    }

    /// The segments currently drawn, or none while a gesture is active.
    pub fn segments(&self) -> Vec<Line> {
        match (self.preview, self.state) {
            (None, Some(state)) if state.depth > 0 => {
                self.template.generate(state.origin, self.render_depth())
            }
            _ => Vec::new(),
        }
    }

    fn commit(&mut self, to: Point) {
        let origin = match self.preview.take() {
            Some(line) => Line::new(line.p0, to),
            None => return,
        };
        let depth = match self.state {
            Some(s) if s.depth >= self.max_depth => {
                log::warn!("fractal depth capped at {}", self.max_depth);
                self.max_depth
            }
            Some(s) => s.depth + 1,
            None => 1u32.min(self.max_depth),
        };
        log::debug!("fractal gesture complete, depth {}", depth);
        self.state = Some(FractalState { origin, depth });
        let drawn = self.render_depth();
        if drawn < depth {
            log::warn!(
                "drawing depth {} instead of {} to stay within {} segments",
                drawn,
                depth,
                self.segment_budget
            );
        }
    }
}

impl Default for FractalMode {
    fn default() -> Self {
        FractalMode::new(&FractalSettings::default())
    }
}

impl Mode for FractalMode {
    fn id(&self) -> ModeId {
        ModeId::Fractal
    }

    fn instructions(&self) -> String {
        match self.state {
            Some(state) if state.depth > 0 => format!("Fractal depth: {}", state.depth),
            _ => self.id().instructions().to_string(),
        }
    }

    fn pointer_down(&mut self, pos: Point) -> bool {
        self.preview = Some(Line::new(pos, pos));
        false
    }

    fn pointer_move(&mut self, pos: Point) -> bool {
        match self.preview.as_mut() {
            Some(line) => {
                line.p1 = pos;
                true
            }
            None => false,
        }
    }

    fn pointer_up(&mut self, pos: Point) -> bool {
        if self.preview.is_none() {
            return false;
        }
        self.commit(pos);
        true
    }

    fn paint(&self, canvas: &mut Canvas) {
        if let Some(line) = self.preview {
            canvas.stroke_line(line, self.stroke_width, PREVIEW_COLOR);
        } else if let Some(state) = self.state.filter(|s| s.depth > 0) {
            let path = self.template.render(state.origin, self.render_depth());
            canvas.stroke_path(path, self.stroke_width, Color::BLACK);
        }
    }

    fn reset(&mut self) {
        self.preview = None;
        self.state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    use crate::modes::test_util::paint;
    use crate::paint::DrawCommand;
    use crate::settings::TemplateKind;

    fn swipe(mode: &mut FractalMode, from: (f64, f64), to: (f64, f64)) {
        mode.pointer_down(from.into());
        mode.pointer_move(Point::new((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0));
        mode.pointer_up(to.into());
    }

    #[test]
    fn each_swipe_adds_a_level() {
        let mut mode = FractalMode::default();
        assert!(mode.state().is_none());
        assert_eq!(mode.instructions(), ModeId::Fractal.instructions());
        swipe(&mut mode, (0.0, 0.0), (100.0, 0.0));
        assert_eq!(mode.state().unwrap().depth, 1);
        assert_eq!(mode.segments().len(), 3);
        swipe(&mut mode, (10.0, 10.0), (50.0, 90.0));
        let state = mode.state().unwrap();
        assert_eq!(state.depth, 2);
        assert_eq!(
            state.origin,
            Line::new(Point::new(10.0, 10.0), Point::new(50.0, 90.0))
        );
        assert_eq!(mode.segments().len(), 9);
        assert_eq!(mode.instructions(), "Fractal depth: 2");
    }

    #[test]
    fn preview_while_swiping() {
        let mut mode = FractalMode::default();
        assert!(!mode.pointer_down(Point::new(1.0, 2.0)));
        assert!(mode.pointer_move(Point::new(3.0, 4.0)));
        let cmds = paint(&mode, Size::new(10.0, 10.0));
        assert_eq!(
            cmds,
            vec![DrawCommand::StrokeLine {
                line: Line::new((1.0, 2.0), (3.0, 4.0)),
                width: 3.0,
                color: PREVIEW_COLOR,
            }]
        );
        assert!(mode.segments().is_empty());
    }

    #[test]
    fn up_without_move_uses_up_position() {
        let mut mode = FractalMode::default();
        mode.pointer_down(Point::new(1.0, 1.0));
        mode.pointer_up(Point::new(8.0, 8.0));
        assert_eq!(
            mode.state().unwrap().origin,
            Line::new((1.0, 1.0), (8.0, 8.0))
        );
    }

    #[test]
    fn stray_up_is_ignored() {
        let mut mode = FractalMode::default();
        assert!(!mode.pointer_up(Point::new(8.0, 8.0)));
        assert!(!mode.pointer_move(Point::new(8.0, 8.0)));
        assert!(mode.state().is_none());
        assert!(paint(&mode, Size::new(10.0, 10.0)).is_empty());
    }

    #[test]
    fn depth_is_capped() {
        let settings = FractalSettings {
            template: TemplateKind::Dragon,
            max_depth: 3,
            ..FractalSettings::default()
        };
        let mut mode = FractalMode::new(&settings);
        for _ in 0..6 {
            swipe(&mut mode, (0.0, 0.0), (10.0, 0.0));
        }
        assert_eq!(mode.state().unwrap().depth, 3);
        assert_eq!(mode.segments().len(), 8);
    }

    #[test]
    fn budget_limits_drawn_depth() {
        let settings = FractalSettings {
            segment_budget: 10,
            ..FractalSettings::default()
        };
        let mut mode = FractalMode::new(&settings);
        for _ in 0..4 {
            swipe(&mut mode, (0.0, 0.0), (10.0, 0.0));
        }
        assert_eq!(mode.state().unwrap().depth, 4);
        assert_eq!(mode.render_depth(), 2);
        assert_eq!(mode.segments().len(), 9);
    }

    #[test]
    fn cancel_commits_gesture() {
        let mut mode = FractalMode::default();
        mode.pointer_down(Point::new(0.0, 0.0));
        mode.pointer_move(Point::new(5.0, 5.0));
        assert!(mode.cancel(Point::new(5.0, 5.0)));
        assert_eq!(mode.state().unwrap().depth, 1);
        mode.reset();
        assert!(mode.state().is_none());
    }
}
