//! Button latch decoupling input capture from frame processing.
//!
//! This crate is intentionally independent of any input device. An
//! input-handling collaborator calls the button-down/button-up entry points
//! as events arrive; once per frame the host takes an immutable
//! [`InputSnapshot`] and hands it to the controller's update. One-shot
//! buttons (rotations, hard drop) and the directional press/release edges
//! drain with the snapshot, so each is seen by exactly one frame; held
//! directions persist until the matching button-up.

use tetro_control_types::{Button, InputSnapshot};

/// Latched button state between frames.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    left_held: bool,
    right_held: bool,
    down_held: bool,
    rotate_left: bool,
    rotate_right: bool,
    hard_drop: bool,
    direction_pressed: bool,
    direction_released: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Down-edge entry point, one per button.
    pub fn button_down(&mut self, button: Button) {
        if button.is_directional() {
            self.direction_pressed = true;
        }
        match button {
            Button::MoveLeft => self.left_held = true,
            Button::MoveRight => self.right_held = true,
            Button::SoftDrop => self.down_held = true,
            Button::HardDrop => self.hard_drop = true,
            Button::RotateLeft => self.rotate_left = true,
            Button::RotateRight => self.rotate_right = true,
        }
    }

    /// Up-edge entry point. Only the directional buttons carry an up edge;
    /// releases of the one-shot buttons are ignored.
    pub fn button_up(&mut self, button: Button) {
        match button {
            Button::MoveLeft => self.left_held = false,
            Button::MoveRight => self.right_held = false,
            Button::SoftDrop => self.down_held = false,
            Button::HardDrop | Button::RotateLeft | Button::RotateRight => return,
        }
        self.direction_released = true;
    }

    /// Take the frame's input view, draining one-shot flags and edges.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left_held: self.left_held,
            right_held: self.right_held,
            down_held: self.down_held,
            rotate_left: self.rotate_left,
            rotate_right: self.rotate_right,
            hard_drop: self.hard_drop,
            direction_pressed: self.direction_pressed,
            direction_released: self.direction_released,
        };

        self.rotate_left = false;
        self.rotate_right = false;
        self.hard_drop = false;
        self.direction_pressed = false;
        self.direction_released = false;

        snapshot
    }
}
