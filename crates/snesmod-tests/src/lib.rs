//! SNESMOD End-to-End Test Infrastructure
//!
//! Integration tests for the build tools:
//!
//! - Frequency table: value, shape and formatting properties of `LUT_FTAB`
//! - bin2ca: byte-exact round trip through the generated source
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p snesmod-tests
//! ```

pub mod asm_parse;
pub mod determinism;

// Re-export commonly used items
pub use asm_parse::{extract_byte_literals, extract_word_tokens, WordLine};
pub use determinism::{
    assert_deterministic, compute_hash, verify_determinism, DeterminismResult, DiffInfo,
};
