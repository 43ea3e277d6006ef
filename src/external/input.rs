use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chippy::consts;

/// What the host loop should do after a poll.
pub enum Poll {
    Keys([bool; consts::KEYBOARD_SIZE]),
    Quit,
}

pub struct KeyboardDriver {
    events: sdl2::EventPump,
}

/// 1 2 3 4 / Q W E R / A S D F / Z X C V onto the hex keypad.
fn keypad_index(key: Keycode) -> Option<usize> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

impl KeyboardDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, &'static str> {
        Ok(KeyboardDriver {
            events: match context.event_pump() {
                Ok(t) => t,
                Err(_) => return Err("Could not obtain event context"),
            },
        })
    }

    /// Snapshot of the keys held right now. Releases show up as `false`.
    pub fn poll(&mut self) -> Poll {
        for event in self.events.poll_iter() {
            if let Event::Quit { .. } = event {
                return Poll::Quit;
            }
        }

        let mut keys = [false; consts::KEYBOARD_SIZE];
        let held: Vec<Keycode> = self
            .events
            .keyboard_state()
            .pressed_scancodes()
            .filter_map(Keycode::from_scancode)
            .collect();

        for key in held {
            if key == Keycode::Escape {
                return Poll::Quit;
            }
            if let Some(i) = keypad_index(key) {
                keys[i] = true;
            }
        }
        Poll::Keys(keys)
    }
}
