//! Binary to ca65 source conversion.
//!
//! Wraps the raw contents of a file in a `.byte` array, optionally bracketed
//! by an exported `<label>` / `<label>_end` symbol pair and placed in a named
//! segment.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AsmError, AsmResult};

/// First line of every converted file, unchanged from the `bin2ca.py` era.
pub const HEADER_COMMENT: &str = "; bin2ca.py converted binary data";

/// Default number of bytes per `.byte` line.
pub const DEFAULT_BYTES_PER_LINE: usize = 64;

/// ca65 symbol names: letter or underscore, then letters, digits, underscores.
const LABEL_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

static LABEL_REGEX: OnceLock<Regex> = OnceLock::new();

fn label_regex() -> &'static Regex {
    LABEL_REGEX.get_or_init(|| Regex::new(LABEL_PATTERN).expect("invalid regex pattern"))
}

/// Converter options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin2CaOptions {
    /// Symbol to export; `<label>_end` is emitted after the data.
    pub label: Option<String>,
    /// Segment to place the data in.
    pub segment: Option<String>,
    /// Bytes per `.byte` line.
    pub bytes_per_line: usize,
}

impl Default for Bin2CaOptions {
    fn default() -> Self {
        Self {
            label: None,
            segment: None,
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
        }
    }
}

impl Bin2CaOptions {
    /// Sets the exported label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the target segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Sets the line width in bytes.
    pub fn bytes_per_line(mut self, bytes_per_line: usize) -> Self {
        self.bytes_per_line = bytes_per_line;
        self
    }

    /// Checks that every option can be emitted as valid ca65 source.
    pub fn validate(&self) -> AsmResult<()> {
        if self.bytes_per_line == 0 {
            return Err(AsmError::invalid_option(
                "bytes_per_line",
                "must be at least 1",
            ));
        }

        if let Some(label) = &self.label {
            if !label_regex().is_match(label) {
                return Err(AsmError::invalid_option(
                    "label",
                    format!("'{}' is not a valid symbol name", label),
                ));
            }
        }

        if let Some(segment) = &self.segment {
            if segment.is_empty() {
                return Err(AsmError::invalid_option("segment", "cannot be empty"));
            }
            if segment.contains(['"', '\n', '\r']) {
                return Err(AsmError::invalid_option(
                    "segment",
                    "cannot contain quotes or line breaks",
                ));
            }
        }

        Ok(())
    }
}

/// Writes `data` as a ca65 source file.
///
/// Options are validated before anything is written.
pub fn write_assembly<W: Write>(
    data: &[u8],
    out: &mut W,
    options: &Bin2CaOptions,
) -> AsmResult<()> {
    options.validate()?;
    emit(data, out, options).map_err(AsmError::write_stream)
}

/// Renders `data` as ca65 source text.
pub fn render_assembly(data: &[u8], options: &Bin2CaOptions) -> AsmResult<String> {
    let mut buf = Vec::new();
    write_assembly(data, &mut buf, options)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Converts the file at `input` into ca65 source at `output`.
///
/// Returns the number of bytes converted.
pub fn convert_file(input: &Path, output: &Path, options: &Bin2CaOptions) -> AsmResult<usize> {
    options.validate()?;

    let data = fs::read(input).map_err(|e| AsmError::InputNotFound {
        path: input.to_path_buf(),
        source: e,
    })?;

    let file = File::create(output).map_err(|e| AsmError::write_file(output, e))?;
    let mut out = BufWriter::new(file);
    emit(&data, &mut out, options)
        .and_then(|()| out.flush())
        .map_err(|e| AsmError::write_file(output, e))?;

    Ok(data.len())
}

fn emit<W: Write>(data: &[u8], out: &mut W, options: &Bin2CaOptions) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER_COMMENT)?;
    writeln!(out, "; total size: {} bytes", data.len())?;
    writeln!(out)?;

    if let Some(label) = &options.label {
        writeln!(out, "\t.global {}, {}_end", label, label)?;
    }
    if let Some(segment) = &options.segment {
        writeln!(out, "\t.segment \"{}\"", segment)?;
    }
    writeln!(out)?;

    if let Some(label) = &options.label {
        writeln!(out, "{}:", label)?;
    }

    for chunk in data.chunks(options.bytes_per_line) {
        out.write_all(b"\t.byte ")?;
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.write_all(b",")?;
            }
            write!(out, "${:02x}", byte)?;
        }
        writeln!(out)?;
    }

    if let Some(label) = &options.label {
        writeln!(out, "{}_end:", label)?;
    }

    Ok(())
}
