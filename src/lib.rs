//! Interactive drawing modes.
//!
//! This crate holds the logic behind a handful of small touch-driven
//! drawing toys: a swipe-to-grow substitution fractal, a cubic Bézier with
//! draggable control points, and a few simpler point-plotting modes. It
//! knows nothing about any particular GUI toolkit; a host forwards pointer
//! events to a [`Shell`] and rasterizes the [`DrawCommand`]s it gets back.
//!
//! The two pieces with real geometry in them are also usable on their own:
//! [`Template::generate`] expands a line segment into a fractal, and
//! [`BezierEditor`] evaluates and edits a cubic curve.

mod bezier;
mod fractal;
mod mode;
pub mod modes;
mod paint;
mod settings;
mod shell;

pub use bezier::{BezierEditor, DEFAULT_HIT_RADIUS, MIN_FLATTEN_SEGMENTS};
pub use fractal::{Rule, Template};
pub use mode::{mode_for_id, mode_for_index, Inert, Mode, ModeId, PointerEvent};
pub use paint::{to_svg, Canvas, Color, DrawCommand};
pub use settings::{
    BezierSettings, FractalSettings, Settings, TemplateKind, DEFAULT_MAX_DEPTH,
    DEFAULT_SEGMENT_BUDGET,
};
pub use shell::Shell;

pub use kurbo;
