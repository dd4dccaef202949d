//! Pitch frequency lookup table (`LUT_FTAB`).
//!
//! The SPC driver converts a fine pitch index into a DSP pitch value with a
//! 768-step table covering one octave. Each entry is
//!
//! ```text
//! round(FTAB_BASE * 2^(i / 768))
//! ```
//!
//! and the table is emitted as `.word` data, 16 entries per line:
//!
//! ```text
//! LUT_FTAB:
//! 	.word 02174h, 02178h, ...
//! ```
//!
//! Computation ([`generate_frequency_table`]) is pure; serialization
//! ([`write_frequency_table`]) takes any [`Write`] sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AsmError, AsmResult};
use crate::token::{Token, TokenRadix};

/// Number of entries in the table (one octave).
pub const FTAB_LEN: usize = 768;

/// Scale of entry 0, derived from the DSP reference clock.
pub const FTAB_BASE: f64 = 1070.464 * 8.0;

/// Symbol the table is emitted under.
pub const FTAB_LABEL: &str = "LUT_FTAB";

/// Entries per `.word` line.
pub const ENTRIES_PER_LINE: usize = 16;

/// Whitespace placed before each `.word` directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DirectiveStyle {
    /// A single tab.
    #[default]
    Tab,
    /// Eight spaces.
    Spaces,
}

impl DirectiveStyle {
    /// Returns the full line prefix, including the trailing space.
    pub fn marker(&self) -> &'static str {
        match self {
            DirectiveStyle::Tab => "\t.word ",
            DirectiveStyle::Spaces => "        .word ",
        }
    }
}

impl std::str::FromStr for DirectiveStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" => Ok(DirectiveStyle::Tab),
            "spaces" => Ok(DirectiveStyle::Spaces),
            _ => Err(format!(
                "unknown directive style '{}', expected 'tab' or 'spaces'",
                s
            )),
        }
    }
}

/// Serialization options for the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FtabOptions {
    /// Directive indentation.
    pub style: DirectiveStyle,
    /// Literal radix.
    pub radix: TokenRadix,
}

impl FtabOptions {
    /// Sets the directive style.
    pub fn style(mut self, style: DirectiveStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the literal radix.
    pub fn radix(mut self, radix: TokenRadix) -> Self {
        self.radix = radix;
        self
    }
}

/// The computed frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: [u32; FTAB_LEN],
}

impl FrequencyTable {
    /// Returns all entries in index order.
    pub fn entries(&self) -> &[u32; FTAB_LEN] {
        &self.entries
    }

    /// Returns the entry at `index`, or `None` past the end of the table.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.entries.get(index).copied()
    }

    /// Iterates over entry values.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().copied()
    }

    /// Iterates over the entries as formatted tokens.
    pub fn tokens(&self, radix: TokenRadix) -> impl Iterator<Item = Token> + '_ {
        self.iter().map(move |value| Token::with_radix(value, radix))
    }

    /// Number of entries (always [`FTAB_LEN`]).
    pub fn len(&self) -> usize {
        FTAB_LEN
    }

    /// Always false; the table has a fixed size.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Computes a single table entry.
///
/// Rounds half to even. The growth factor is irrational, so no entry lands
/// on an exact tie.
///
/// # Panics
/// Panics if `index >= FTAB_LEN`.
pub fn frequency_entry(index: usize) -> u32 {
    assert!(index < FTAB_LEN, "table index {} out of range", index);
    let exponent = index as f64 / FTAB_LEN as f64;
    (FTAB_BASE * 2f64.powf(exponent)).round_ties_even() as u32
}

/// Computes the full table.
pub fn generate_frequency_table() -> FrequencyTable {
    let mut entries = [0u32; FTAB_LEN];
    for (index, entry) in entries.iter_mut().enumerate() {
        *entry = frequency_entry(index);
    }
    FrequencyTable { entries }
}

/// Writes the table as an assembly data block.
///
/// Errors from the sink are reported as [`AsmError::WriteFailure`] with no
/// path attached.
pub fn write_frequency_table<W: Write>(
    table: &FrequencyTable,
    out: &mut W,
    options: &FtabOptions,
) -> AsmResult<()> {
    emit(table, out, options).map_err(AsmError::write_stream)
}

/// Writes the table to a file, creating or truncating it.
///
/// A partially written file is left in place if writing fails.
pub fn write_frequency_table_file(
    table: &FrequencyTable,
    path: &Path,
    options: &FtabOptions,
) -> AsmResult<()> {
    let file = File::create(path).map_err(|e| AsmError::write_file(path, e))?;
    let mut out = BufWriter::new(file);
    emit(table, &mut out, options)
        .and_then(|()| out.flush())
        .map_err(|e| AsmError::write_file(path, e))
}

/// Renders the table to a string.
pub fn render_frequency_table(table: &FrequencyTable, options: &FtabOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = emit(table, &mut buf, options);
    String::from_utf8_lossy(&buf).into_owned()
}

fn emit<W: Write>(
    table: &FrequencyTable,
    out: &mut W,
    options: &FtabOptions,
) -> std::io::Result<()> {
    write!(out, "{}:", FTAB_LABEL)?;
    for (index, token) in table.tokens(options.radix).enumerate() {
        if index % ENTRIES_PER_LINE == 0 {
            write!(out, "\n{}", options.style.marker())?;
        } else {
            out.write_all(b", ")?;
        }
        write!(out, "{}", token)?;
    }
    out.write_all(b"\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_first_entry() {
        assert_eq!(frequency_entry(0), 8564);
        assert_eq!(Token::hex(frequency_entry(0)).to_string(), "02174h");
    }

    #[test]
    fn test_last_entry_is_one_octave_up() {
        let first = frequency_entry(0) as f64;
        let last = frequency_entry(FTAB_LEN - 1) as f64;
        let ratio = last / first;
        assert!(ratio < 2.0, "ratio {} should stay below an octave", ratio);
        assert!(ratio > 1.99, "ratio {} should approach an octave", ratio);
    }

    #[test]
    #[should_panic(expected = "table index 768 out of range")]
    fn test_entry_past_octave_panics() {
        frequency_entry(FTAB_LEN);
    }

    #[test]
    fn test_table_is_monotonic() {
        let table = generate_frequency_table();
        assert_eq!(table.len(), FTAB_LEN);
        assert!(table.entries().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(table.get(FTAB_LEN), None);
    }

    #[test]
    fn test_render_shape() {
        let text = render_frequency_table(&generate_frequency_table(), &FtabOptions::default());
        assert!(text.starts_with("LUT_FTAB:\n\t.word 02174h, "));
        assert!(text.ends_with("h\n\n"));

        let lines: Vec<&str> = text.trim_end().lines().collect();
        assert_eq!(lines.len(), 1 + FTAB_LEN / ENTRIES_PER_LINE);
        for line in &lines[1..] {
            assert!(line.starts_with("\t.word "));
            assert_eq!(line.split(", ").count(), ENTRIES_PER_LINE);
        }
    }

    #[test]
    fn test_spaces_style() {
        let options = FtabOptions::default().style(DirectiveStyle::Spaces);
        let text = render_frequency_table(&generate_frequency_table(), &options);
        assert!(text.starts_with("LUT_FTAB:\n        .word 02174h, "));
        assert!(!text.contains('\t'));
    }

    #[test]
    fn test_decimal_radix() {
        let options = FtabOptions::default().radix(TokenRadix::Decimal);
        let text = render_frequency_table(&generate_frequency_table(), &options);
        assert!(text.starts_with("LUT_FTAB:\n\t.word 8564, "));
        assert!(!text.contains('h'));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("tab".parse::<DirectiveStyle>(), Ok(DirectiveStyle::Tab));
        assert_eq!("SPACES".parse::<DirectiveStyle>(), Ok(DirectiveStyle::Spaces));
        assert!("tabs".parse::<DirectiveStyle>().is_err());
    }

    #[test]
    fn test_write_matches_render() {
        let table = generate_frequency_table();
        let options = FtabOptions::default();
        let mut buf = Vec::new();
        write_frequency_table(&table, &mut buf, &options).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            render_frequency_table(&table, &options)
        );
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_is_write_failure() {
        let err = write_frequency_table(
            &generate_frequency_table(),
            &mut FailingSink,
            &FtabOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AsmError::WriteFailure { path: None, .. }));
    }
}
