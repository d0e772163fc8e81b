use crate::constants::KEY_COUNT;

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
/// Whatever owns the real input device maps it onto these 16 logical keys; the CPU only
/// ever asks whether one of them is held down.
pub trait Keypad {
    fn is_pressed(&self, key: u8) -> bool;
}

/// Pressed status of every logical key
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: [bool; KEY_COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys outside of 0..=F are ignored
    pub fn press(&mut self, key: u8) {
        if let Some(pressed) = self.pressed.get_mut(key as usize) {
            *pressed = true;
        }
    }

    pub fn release(&mut self, key: u8) {
        if let Some(pressed) = self.pressed.get_mut(key as usize) {
            *pressed = false;
        }
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }
}

impl Keypad for KeyState {
    fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }
}

/// Lowest logical key currently held down, scanning 0..=F in order
pub fn first_pressed(keypad: &dyn Keypad) -> Option<u8> {
    (0..KEY_COUNT as u8).find(|&key| keypad.is_pressed(key))
}
