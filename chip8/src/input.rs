use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use crossterm::terminal;
use log::{debug, warn};

use chipvm_core::constants::KEY_COUNT;
use chipvm_core::{Chip8, RandomSource};

use crate::keymap::keymap;

/// How long a key stays pressed after the terminal last reported it.
/// Terminals report presses and their auto-repeat but never a release.
pub const KEY_HOLD: Duration = Duration::from_millis(200);

/// What the player asked the runner to do
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Continue,
    Quit,
}

/// Puts the terminal in raw mode so single key presses arrive unbuffered.
/// Raw mode is switched off again when this is dropped.
pub struct RawMode;

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            warn!("unable to restore the terminal: {}", err);
        }
    }
}

/// # Keyboard
/// Feeds terminal key events to the Chip-8 keypad.
///
/// Each mapped key is pressed when it is reported and released once it hasn't been
/// reported for `KEY_HOLD`. Esc or Ctrl+C asks the runner to quit.
pub struct Keyboard {
    last_seen: [Option<Instant>; KEY_COUNT],
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard {
            last_seen: [None; KEY_COUNT],
        }
    }

    /// Drains every pending terminal event without blocking
    pub fn poll<R: RandomSource>(&mut self, chip8: &mut Chip8<R>) -> io::Result<Command> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(event) = read()? {
                let command = self.key_event(event.code, event.modifiers, Instant::now(), chip8);
                if command == Command::Quit {
                    return Ok(Command::Quit);
                }
            }
        }
        self.release_expired(Instant::now(), chip8);
        Ok(Command::Continue)
    }

    /// Handles a single key event seen at `now`
    pub fn key_event<R: RandomSource>(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
        chip8: &mut Chip8<R>,
    ) -> Command {
        match code {
            KeyCode::Esc => Command::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
            KeyCode::Char(c) => {
                match keymap(c) {
                    Some(key) => {
                        if self.last_seen[key as usize].is_none() {
                            debug!("key {:X} down", key);
                            chip8.key_press(key);
                        }
                        self.last_seen[key as usize] = Some(now);
                    }
                    None => debug!("{:?} isn't on the keypad", c),
                }
                Command::Continue
            }
            _ => Command::Continue,
        }
    }

    /// Releases every key that hasn't been reported for `KEY_HOLD`
    pub fn release_expired<R: RandomSource>(&mut self, now: Instant, chip8: &mut Chip8<R>) {
        for (key, last_seen) in self.last_seen.iter_mut().enumerate() {
            if let Some(seen) = *last_seen {
                if now.duration_since(seen) >= KEY_HOLD {
                    debug!("key {:X} up", key);
                    chip8.key_release(key as u8);
                    *last_seen = None;
                }
            }
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipvm_core::{FixedRandom, Step};

    fn waiting_chip8() -> Chip8<FixedRandom> {
        // F30A: wait for a key into V3
        let mut chip8 = Chip8::with_rng(FixedRandom(0));
        chip8.load(&[0xF3, 0x0A]).unwrap();
        chip8
    }

    #[test]
    fn test_mapped_key_presses_keypad() {
        let mut chip8 = waiting_chip8();
        let mut keyboard = Keyboard::new();
        let command = keyboard.key_event(
            KeyCode::Char('r'),
            KeyModifiers::NONE,
            Instant::now(),
            &mut chip8,
        );
        assert_eq!(command, Command::Continue);
        assert_eq!(chip8.step(), Ok(Step::Continue));
        assert_eq!(chip8.state().register(0x3), 0xD);
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut chip8 = waiting_chip8();
        let mut keyboard = Keyboard::new();
        keyboard.key_event(
            KeyCode::Char('p'),
            KeyModifiers::NONE,
            Instant::now(),
            &mut chip8,
        );
        assert!(chip8.is_waiting_for_key());
    }

    #[test]
    fn test_key_releases_after_hold() {
        let mut chip8 = waiting_chip8();
        let mut keyboard = Keyboard::new();
        let pressed_at = Instant::now();
        keyboard.key_event(KeyCode::Char('x'), KeyModifiers::NONE, pressed_at, &mut chip8);

        keyboard.release_expired(pressed_at + KEY_HOLD / 2, &mut chip8);
        assert!(!chip8.is_waiting_for_key());

        keyboard.release_expired(pressed_at + KEY_HOLD, &mut chip8);
        assert!(chip8.is_waiting_for_key());
    }

    #[test]
    fn test_repeat_keeps_key_held() {
        let mut chip8 = waiting_chip8();
        let mut keyboard = Keyboard::new();
        let pressed_at = Instant::now();
        keyboard.key_event(KeyCode::Char('1'), KeyModifiers::NONE, pressed_at, &mut chip8);
        let repeated_at = pressed_at + KEY_HOLD / 2;
        keyboard.key_event(KeyCode::Char('1'), KeyModifiers::NONE, repeated_at, &mut chip8);

        keyboard.release_expired(pressed_at + KEY_HOLD, &mut chip8);
        assert!(!chip8.is_waiting_for_key());
    }

    #[test]
    fn test_escape_quits() {
        let mut chip8 = waiting_chip8();
        let mut keyboard = Keyboard::new();
        let now = Instant::now();
        assert_eq!(
            keyboard.key_event(KeyCode::Esc, KeyModifiers::NONE, now, &mut chip8),
            Command::Quit
        );
        assert_eq!(
            keyboard.key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, now, &mut chip8),
            Command::Quit
        );
        // plain c is keypad B
        assert_eq!(
            keyboard.key_event(KeyCode::Char('c'), KeyModifiers::NONE, now, &mut chip8),
            Command::Continue
        );
    }
}
