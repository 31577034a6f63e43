//! Pointer gesture state

use crate::types::{Point, Tool};

/// Transient state of one pointer-down to pointer-up interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub tool: Tool,
    /// Last point a freehand segment was drawn to (or the press point)
    pub last: Point,
    /// Press point, kept only by the line tool
    pub anchor: Option<Point>,
}

impl Gesture {
    pub fn start(tool: Tool, point: Point) -> Self {
        Self {
            tool,
            last: point,
            anchor: (tool == Tool::Line).then_some(point),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Gesturing(Gesture),
}

impl GestureState {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, GestureState::Gesturing(_))
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            GestureState::Gesturing(gesture) => Some(gesture),
            GestureState::Idle => None,
        }
    }

    pub fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        match self {
            GestureState::Gesturing(gesture) => Some(gesture),
            GestureState::Idle => None,
        }
    }

    /// Leave the gesture, returning it if one was active
    pub fn take(&mut self) -> Option<Gesture> {
        match std::mem::take(self) {
            GestureState::Gesturing(gesture) => Some(gesture),
            GestureState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_line_keeps_anchor() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Gesture::start(Tool::Line, p).anchor, Some(p));
        assert_eq!(Gesture::start(Tool::Brush, p).anchor, None);
        assert_eq!(Gesture::start(Tool::Pencil, p).anchor, None);
    }

    #[test]
    fn test_take_returns_to_idle() {
        let mut state = GestureState::Gesturing(Gesture::start(Tool::Brush, Point::default()));
        assert!(state.is_active());
        assert!(state.take().is_some());
        assert_eq!(state, GestureState::Idle);
        assert!(state.take().is_none());
    }
}
