//! The set of drawing modes and the interface they share.

use kurbo::{Point, Size};

use crate::modes::{Averaging, BezierMode, FractalMode, Geometry, Points, Sketchy};
use crate::paint::{Canvas, Color};
use crate::settings::Settings;

/// Identifies a drawing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeId {
    Sketchy,
    Fractal,
    Points,
    Averaging,
    Geometry,
    Bezier,
    /// Placeholder for a selection that names no mode.
    Inert,
}

/// One step of a pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

/// A drawing mode.
///
/// Each pointer method returns `true` when the mode's state changed in a way
/// that needs a redraw.
pub trait Mode {
    fn id(&self) -> ModeId;

    /// The text shown to the user alongside the canvas.
    fn instructions(&self) -> String {
        self.id().instructions().to_string()
    }

    /// Compute the initial layout for a viewport.
    fn layout(&mut self, _size: Size) {}

    fn pointer_down(&mut self, pos: Point) -> bool;

    fn pointer_move(&mut self, _pos: Point) -> bool {
        false
    }

    fn pointer_up(&mut self, _pos: Point) -> bool {
        false
    }

    /// The gesture was cancelled; `last` is the last known pointer position.
    fn cancel(&mut self, last: Point) -> bool {
        self.pointer_up(last)
    }

    fn paint(&self, canvas: &mut Canvas);

    /// Discard all state, as if the mode had just been selected.
    fn reset(&mut self);
}

impl ModeId {
    /// The modes in selection order.
    pub const ALL: [ModeId; 6] = [
        ModeId::Sketchy,
        ModeId::Fractal,
        ModeId::Points,
        ModeId::Averaging,
        ModeId::Geometry,
        ModeId::Bezier,
    ];

    pub fn from_index(index: usize) -> ModeId {
        ModeId::ALL.get(index).copied().unwrap_or(ModeId::Inert)
    }

    pub fn name(self) -> &'static str {
        match self {
            ModeId::Sketchy => "Sketchy",
            ModeId::Fractal => "Fractal",
            ModeId::Points => "Points",
            ModeId::Averaging => "Averaging",
            ModeId::Geometry => "Geometry",
            ModeId::Bezier => "Bezier",
            ModeId::Inert => "None",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            ModeId::Sketchy => "Swipe the screen to make the points move.",
            ModeId::Fractal => "Swipe the screen to draw a pretty fractal.",
            ModeId::Points => "Tap the screen to plot a point.",
            ModeId::Averaging => "Tap the screen to register a point to include in the average.",
            ModeId::Geometry => "Move the green point around to change the shapes.",
            ModeId::Bezier => "Drag the points around to change the Bezier curve.",
            ModeId::Inert => "Please choose a mode above.",
        }
    }
}

/// Create a fresh mode for a selection index.
///
/// Indices past the end of [`ModeId::ALL`] give an [`Inert`] mode.
pub fn mode_for_index(index: usize, settings: &Settings) -> Box<dyn Mode> {
    mode_for_id(ModeId::from_index(index), settings)
}

pub fn mode_for_id(id: ModeId, settings: &Settings) -> Box<dyn Mode> {
    match id {
        ModeId::Sketchy => Box::new(Sketchy::default()),
        ModeId::Fractal => Box::new(FractalMode::new(&settings.fractal)),
        ModeId::Points => Box::new(Points::default()),
        ModeId::Averaging => Box::new(Averaging::default()),
        ModeId::Geometry => Box::new(Geometry::default()),
        ModeId::Bezier => Box::new(BezierMode::new(&settings.bezier)),
        ModeId::Inert => Box::new(Inert),
    }
}

/// Accepts every event and draws a blank canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inert;

impl Mode for Inert {
    fn id(&self) -> ModeId {
        ModeId::Inert
    }

    fn pointer_down(&mut self, _pos: Point) -> bool {
        false
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.clear(Color::WHITE);
    }

    fn reset(&mut self) {}
}
