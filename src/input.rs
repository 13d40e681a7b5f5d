//! Pointer state threaded explicitly through the draw dispatch.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Current and previous pointer position plus the held flag.
#[derive(Serialize, Deserialize, Clone, Copy, Default, PartialEq, Debug)]
pub struct PointerState {
    pub position: Point,
    pub previous: Point,
    pub down: bool,
}

impl PointerState {
    pub fn new() -> PointerState {
        PointerState::default()
    }

    pub fn press(&mut self) {
        self.down = true;
    }

    pub fn release(&mut self) {
        self.down = false;
    }

    /// Record a pointer move, shifting the current position into `previous`.
    pub fn moved(&mut self, position: Point) {
        self.previous = self.position;
        self.position = position;
    }

    /// Movement since the previous pointer event.
    pub fn delta(&self) -> Vec2 {
        self.position - self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_shifts_previous() {
        let mut pointer = PointerState::new();
        pointer.moved(Point::new(10.0, 20.0));
        pointer.moved(Point::new(13.0, 24.0));
        assert_eq!(pointer.previous, Point::new(10.0, 20.0));
        assert_eq!(pointer.position, Point::new(13.0, 24.0));
        assert_eq!(pointer.delta(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn press_release_toggle_held_flag() {
        let mut pointer = PointerState::new();
        assert!(!pointer.down);
        pointer.press();
        assert!(pointer.down);
        pointer.moved(Point::new(1.0, 1.0));
        assert!(pointer.down, "moving must not release the pointer");
        pointer.release();
        assert!(!pointer.down);
    }
}
