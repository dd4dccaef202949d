//! SNESMOD assembly data generators.
//!
//! Build-time helpers for the SPC sound driver. Each generator computes its
//! data without side effects and serializes it to any [`std::io::Write`]
//! sink, so the same code backs the command-line tools and the tests.
//!
//! # Example
//!
//! ```
//! use snesmod_asm::ftab::{generate_frequency_table, render_frequency_table, FtabOptions};
//!
//! let table = generate_frequency_table();
//! assert_eq!(table.get(0), Some(8564));
//!
//! let text = render_frequency_table(&table, &FtabOptions::default());
//! assert!(text.starts_with("LUT_FTAB:\n\t.word 02174h, "));
//! ```
//!
//! # Modules
//!
//! - [`ftab`]: 768-step pitch frequency table (`LUT_FTAB`)
//! - [`bin2ca`]: binary file to ca65 `.byte` source conversion
//! - [`token`]: table literal formatting and decoding
//! - [`error`]: error type shared by the generators

pub mod bin2ca;
pub mod error;
pub mod ftab;
pub mod token;

pub use bin2ca::{convert_file, render_assembly, write_assembly, Bin2CaOptions};
pub use error::{AsmError, AsmResult};
pub use ftab::{
    generate_frequency_table, render_frequency_table, write_frequency_table,
    write_frequency_table_file, DirectiveStyle, FrequencyTable, FtabOptions, FTAB_LEN,
};
pub use token::{Token, TokenRadix};
