use macroquad::prelude::*;

use crate::direction::Dir4;
use crate::movement::Controls;
use crate::skin::Skin;

const REPEAT_DELAY: f32 = 0.25;
const REPEAT_RATE: f32 = 0.08;

/// Tracks how long each direction has been held so that held keys step at a steady pace.
pub(crate) struct InputState {
    held: [f32; 4],
}

impl InputState {
    pub(crate) fn new() -> Self {
        Self { held: [0.0; 4] }
    }

    pub(crate) fn reset(&mut self) {
        self.held = [0.0; 4];
    }

    /// Poll the keyboard for this frame's control signals.
    pub(crate) fn poll(&mut self, dt: f32) -> Controls {
        let mut controls = Controls {
            quit: quit_requested(),
            restart: is_key_pressed(KeyCode::R),
            ..Controls::default()
        };

        for (idx, (dir, keys)) in [
            (Dir4::North, [KeyCode::Up, KeyCode::W]),
            (Dir4::South, [KeyCode::Down, KeyCode::S]),
            (Dir4::West, [KeyCode::Left, KeyCode::A]),
            (Dir4::East, [KeyCode::Right, KeyCode::D]),
        ]
        .into_iter()
        .enumerate()
        {
            let down = keys.iter().any(|&key| is_key_down(key));
            let pressed = keys.iter().any(|&key| is_key_pressed(key));
            if input_repeat(down, pressed, &mut self.held[idx], dt) {
                match dir {
                    Dir4::North => controls.up = true,
                    Dir4::South => controls.down = true,
                    Dir4::West => controls.left = true,
                    Dir4::East => controls.right = true,
                }
            }
        }

        controls
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Skin picked on the selection screen, if any key was pressed this frame.
pub(crate) fn poll_skin_choice() -> Option<Skin> {
    if is_key_pressed(KeyCode::Key1) {
        Some(Skin::Pink)
    } else if is_key_pressed(KeyCode::Key2) {
        Some(Skin::Blue)
    } else {
        None
    }
}

pub(crate) fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_quit_requested()
}

fn input_repeat(down: bool, pressed: bool, held: &mut f32, dt: f32) -> bool {
    if down {
        *held += dt;
        pressed || (*held > REPEAT_DELAY && *held % REPEAT_RATE < dt)
    } else {
        *held = 0.0;
        false
    }
}
