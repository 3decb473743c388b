//! Color values and the generators components draw them from.

use core::fmt;
use core::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use spin::Mutex;
use thiserror::Error;

/// Largest value a 24-bit `#RRGGBB` color can hold.
const MAX_RGB: u32 = 0xFF_FFFF;

/// A CSS-style color string such as `#FFF` or `#AA11BB`.
///
/// [`Color::new`] accepts any string without checking it; components pass
/// colors through untouched. Parsing via [`FromStr`] (and deserialization)
/// validates the hex form and is meant for user input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

/// Errors produced when parsing a user-supplied color.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),

    #[error("color `{0}` must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("color `{0}` contains a non-hex digit")]
    NotHex(String),
}

impl Color {
    /// Initial color handed to children before any interaction.
    pub const DEFAULT_CHILDREN: &'static str = "#FFF";

    /// Wrap a color string as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    fn from_u24(value: u32) -> Self {
        Self(format!("#{:06X}", value & MAX_RGB))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the channels of a `#RGB` or `#RRGGBB` color.
    ///
    /// Returns `None` for anything else, since unvalidated colors may hold
    /// arbitrary text.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.0.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            // `#ABC` is shorthand for `#AABBCC`.
            3 => Some((
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            )),
            6 => Some((
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHILDREN)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 3 && digits.len() != 6 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::NotHex(s.to_string()));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Produce a random `#RRGGBB` color from the thread-local RNG.
///
/// Values are for visual variety only: two calls in a row may return the
/// same color.
pub fn random_color() -> Color {
    let color = Color::from_u24(rand::thread_rng().gen_range(0..=MAX_RGB));
    tracing::trace!(%color, "generated random color");
    color
}

/// Source of fresh colors for components.
///
/// Both the parent's notification handler and each child's click handler
/// draw from the same generator.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ColorGenerator {
    fn next_color(&self) -> Color;
}

/// Generator backed by [`random_color`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngColors;

impl ColorGenerator for ThreadRngColors {
    fn next_color(&self) -> Color {
        random_color()
    }
}

/// Reproducible generator for demos and tests.
///
/// Two instances built from the same seed yield the same sequence.
pub struct SeededColors {
    rng: Mutex<StdRng>,
}

impl SeededColors {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ColorGenerator for SeededColors {
    fn next_color(&self) -> Color {
        let color = Color::from_u24(self.rng.lock().gen_range(0..=MAX_RGB));
        tracing::trace!(%color, "generated seeded color");
        color
    }
}
