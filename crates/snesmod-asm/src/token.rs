//! Literal tokens for `.word` table data.

use std::fmt;

/// Number of hex digits in a rendered table literal.
pub const HEX_DIGITS: usize = 5;

/// Radix used when rendering table entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenRadix {
    /// Zero-padded uppercase hex with an `h` suffix, e.g. `02174h`.
    #[default]
    Hex,
    /// Plain decimal, e.g. `8564`.
    Decimal,
}

impl std::str::FromStr for TokenRadix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(TokenRadix::Hex),
            "decimal" => Ok(TokenRadix::Decimal),
            _ => Err(format!(
                "unknown radix '{}', expected 'hex' or 'decimal'",
                s
            )),
        }
    }
}

/// A single formatted table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    value: u32,
    radix: TokenRadix,
}

impl Token {
    /// Creates a hex token for a value.
    pub fn hex(value: u32) -> Self {
        Self {
            value,
            radix: TokenRadix::Hex,
        }
    }

    /// Creates a token with an explicit radix.
    pub fn with_radix(value: u32, radix: TokenRadix) -> Self {
        Self { value, radix }
    }

    /// Returns the numeric value of the token.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the radix the token renders with.
    pub fn radix(&self) -> TokenRadix {
        self.radix
    }

    /// Decodes a rendered literal back to its value.
    ///
    /// Accepts `NNNNNh` hex literals (any digit count, either case) and plain
    /// decimal literals. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<u32> {
        let text = text.trim();
        if let Some(digits) = text.strip_suffix('h').or_else(|| text.strip_suffix('H')) {
            if digits.is_empty() {
                return None;
            }
            u32::from_str_radix(digits, 16).ok()
        } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.radix {
            TokenRadix::Hex => write!(f, "{:0width$X}h", self.value, width = HEX_DIGITS),
            TokenRadix::Decimal => write!(f, "{}", self.value),
        }
    }
}
