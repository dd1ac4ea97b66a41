//! Glue between a host toolkit and the drawing modes.
//!
//! The host owns the window, the mode picker and the instruction label. It
//! forwards pointer events and viewport changes here, polls
//! [`Shell::take_redraw`] to decide when to repaint, and rasterizes the
//! commands returned by [`Shell::paint`].

use kurbo::{Point, Size};

use crate::mode::{mode_for_index, Mode, ModeId, PointerEvent};
use crate::paint::{Canvas, DrawCommand};
use crate::settings::Settings;

pub struct Shell {
    settings: Settings,
    mode: Box<dyn Mode>,
    size: Size,
    /// Position of the pointer while a gesture is in progress.
    gesture: Option<Point>,
    needs_redraw: bool,
}

impl Shell {
    /// Create a shell showing the first mode.
    pub fn new(size: Size) -> Shell {
        Shell::with_settings(size, Settings::default())
    }

    pub fn with_settings(size: Size, settings: Settings) -> Shell {
        let settings = settings.sanitized();
        let mut shell = Shell {
            mode: mode_for_index(0, &settings),
            settings,
            size,
            gesture: None,
            needs_redraw: false,
        };
        shell.mode.layout(size);
        shell.needs_redraw = true;
        shell
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> &dyn Mode {
        &*self.mode
    }

    pub fn mode_id(&self) -> ModeId {
        self.mode.id()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the current mode with a fresh one.
    ///
    /// An index that names no mode selects [`ModeId::Inert`].
    pub fn select_mode(&mut self, index: usize) {
        let mode = mode_for_index(index, &self.settings);
        log::debug!("selecting mode {} ({})", index, mode.id().name());
        self.mode = mode;
        self.gesture = None;
        self.mode.layout(self.size);
        self.needs_redraw = true;
    }

    /// Start the current mode over.
    pub fn reset(&mut self) {
        self.mode.reset();
        self.gesture = None;
        self.needs_redraw = true;
    }

    pub fn resize(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.mode.layout(size);
            self.needs_redraw = true;
        }
    }

    /// Deliver a pointer event to the current mode.
    ///
    /// `Move` and `Up` outside a gesture are dropped, as is `Cancel`. A
    /// cancelled gesture ends at the last position the pointer was seen.
    pub fn pointer(&mut self, event: PointerEvent) {
        let changed = match event {
            PointerEvent::Down(pos) => {
                self.gesture = Some(pos);
                self.mode.pointer_down(pos)
            }
            PointerEvent::Move(pos) => match self.gesture {
                Some(_) => {
                    self.gesture = Some(pos);
                    self.mode.pointer_move(pos)
                }
                None => false,
            },
            PointerEvent::Up(pos) => match self.gesture.take() {
                Some(_) => self.mode.pointer_up(pos),
                None => false,
            },
            PointerEvent::Cancel => match self.gesture.take() {
                Some(last) => self.mode.cancel(last),
                None => false,
            },
        };
        if changed {
            self.needs_redraw = true;
        }
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Ask for a repaint. Requests made before the next
    /// [`take_redraw`](Shell::take_redraw) are merged.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns `true` if a repaint is pending, and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    pub fn instructions(&self) -> String {
        self.mode.instructions()
    }

    /// Paint the current mode.
    pub fn paint(&self) -> Vec<DrawCommand> {
        let mut canvas = Canvas::new(self.size);
        self.mode.paint(&mut canvas);
        canvas.into_commands()
    }
}
