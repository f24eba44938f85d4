use std::fmt;

use crate::error::{Result, TrackerError};

/// A decimal number being typed on the keypad.
///
/// Only digits and `.` are accepted. A second `.` is not rejected here; such
/// a buffer fails at `parse` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightEntryBuffer {
    text: String,
}

impl WeightEntryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn append_char(&mut self, c: char) -> Result<()> {
        if !(c.is_ascii_digit() || c == '.') {
            return Err(TrackerError::InvalidInput(format!(
                "'{c}' is not a keypad character"
            )));
        }
        self.text.push(c);
        Ok(())
    }

    /// Drop the last character. No-op on an empty buffer.
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Parse the buffer as a weight.
    pub fn parse(&self) -> Result<f64> {
        if self.text.is_empty() {
            return Err(TrackerError::InvalidInput("No weight entered".to_string()));
        }

        self.text
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| TrackerError::InvalidInput(format!("Invalid weight value '{}'", self.text)))
    }
}

impl fmt::Display for WeightEntryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A key on the weight keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Delete,
    Clear,
}

impl Key {
    /// Keypad layout, row by row.
    pub const LAYOUT: [&'static [Key]; 5] = [
        &[Key::Digit(1), Key::Digit(2), Key::Digit(3)],
        &[Key::Digit(4), Key::Digit(5), Key::Digit(6)],
        &[Key::Digit(7), Key::Digit(8), Key::Digit(9)],
        &[Key::Point, Key::Digit(0), Key::Delete],
        &[Key::Clear],
    ];

    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Point => ".".to_string(),
            Key::Delete => "DEL".to_string(),
            Key::Clear => "C".to_string(),
        }
    }

    /// Apply this key press to a buffer.
    pub fn apply(&self, buffer: &mut WeightEntryBuffer) -> Result<()> {
        match *self {
            Key::Digit(d) => {
                let c = char::from_digit(d as u32, 10)
                    .ok_or_else(|| TrackerError::InvalidInput(format!("{d} is not a digit")))?;
                buffer.append_char(c)
            }
            Key::Point => buffer.append_char('.'),
            Key::Delete => {
                buffer.delete_last();
                Ok(())
            }
            Key::Clear => {
                buffer.clear();
                Ok(())
            }
        }
    }

    /// All keys in layout order.
    pub fn all() -> impl Iterator<Item = Key> {
        Self::LAYOUT.into_iter().flat_map(|row| row.iter().copied())
    }
}
