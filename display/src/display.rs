use std::io::{self, Write};

use chipvm_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chipvm_core::state::FrameBuffer;

const LIT: char = '█';
const UNLIT: char = ' ';

/// A raw mode terminal doesn't return the carriage on a bare newline
const LINE_END: &str = "\r\n";

/// Moves the cursor to the top left so each frame overwrites the last
const CURSOR_HOME: &str = "\x1b[H";

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// This draws them as 32 lines of 64 characters on a terminal, or anything else that
/// takes bytes.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display<W: Write> {
    out: W,
}

impl<W: Write> Display<W> {
    /// Creates a new display that writes frames to `out`.
    pub fn new(out: W) -> Self {
        Display { out }
    }

    /// Formats a Chip-8 FrameBuffer as text: one line per row, one character per pixel.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn frame_to_text(frame: &FrameBuffer) -> String {
        let mut text =
            String::with_capacity((DISPLAY_WIDTH * LIT.len_utf8() + LINE_END.len()) * DISPLAY_HEIGHT);
        for row in frame.iter() {
            text.extend(row.iter().map(|&lit| if lit { LIT } else { UNLIT }));
            text.push_str(LINE_END);
        }
        text
    }

    /// Writes the FrameBuffer over the previous frame.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        write!(self.out, "{}{}", CURSOR_HOME, Self::frame_to_text(frame))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_text() {
        let mut frame: FrameBuffer = [[false; 64]; 32];
        frame[0][0..2].copy_from_slice(&[false, true]);
        frame[1][0..2].copy_from_slice(&[true, false]);
        let text = Display::<Vec<u8>>::frame_to_text(&frame);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 32);
        assert!(lines.iter().all(|line| line.chars().count() == 64));
        assert!(lines[0].starts_with(" █ "));
        assert!(lines[1].starts_with("█  "));
        assert!(lines[2].chars().all(|c| c == ' '));
        assert_eq!(text.matches("\r\n").count(), 32);
    }

    #[test]
    fn test_render_homes_cursor() {
        let frame: FrameBuffer = [[true; 64]; 32];
        let mut display = Display::new(Vec::new());
        display.render(&frame).unwrap();
        display.render(&frame).unwrap();
        let written = String::from_utf8(display.into_inner()).unwrap();
        assert!(written.starts_with(CURSOR_HOME));
        assert_eq!(written.matches(CURSOR_HOME).count(), 2);
        assert_eq!(written.matches('█').count(), 2 * 64 * 32);
    }
}
