//! Ftab command implementation
//!
//! Generates the `LUT_FTAB` pitch table as assembly data.

use anyhow::{Context, Result};
use colored::Colorize;
use snesmod_asm::ftab::{
    generate_frequency_table, write_frequency_table, write_frequency_table_file, DirectiveStyle,
    FtabOptions, ENTRIES_PER_LINE, FTAB_LABEL,
};
use snesmod_asm::TokenRadix;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

/// Run the ftab command
///
/// # Arguments
/// * `output` - Output file path (default: stdout)
/// * `style` - Directive indentation (default: tab for stdout, spaces for files)
/// * `radix` - Literal radix
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    output: Option<&str>,
    style: Option<DirectiveStyle>,
    radix: TokenRadix,
) -> Result<ExitCode> {
    let table = generate_frequency_table();

    let Some(output_path) = output else {
        // Nothing but the table goes to stdout so it can be redirected.
        let options = FtabOptions::default()
            .style(style.unwrap_or(DirectiveStyle::Tab))
            .radix(radix);
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_frequency_table(&table, &mut out, &options)
            .context("Failed to write frequency table to stdout")?;
        out.flush().context("Failed to flush stdout")?;
        return Ok(ExitCode::SUCCESS);
    };

    let options = FtabOptions::default()
        .style(style.unwrap_or(DirectiveStyle::Spaces))
        .radix(radix);

    println!("{} {}", "Generating:".cyan().bold(), FTAB_LABEL);

    write_frequency_table_file(&table, Path::new(output_path), &options)
        .with_context(|| format!("Failed to write frequency table: {}", output_path))?;

    println!(
        "{} Wrote {} entries ({} lines) to: {}",
        "SUCCESS".green().bold(),
        table.len(),
        table.len() / ENTRIES_PER_LINE,
        output_path
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_writes_file_with_spaces_style() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ftab.txt");
        let path_str = path.to_str().unwrap();

        let code = run(Some(path_str), None, TokenRadix::Hex).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("LUT_FTAB:\n        .word 02174h, "));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_run_honors_explicit_style() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ftab.inc");

        run(
            Some(path.to_str().unwrap()),
            Some(DirectiveStyle::Tab),
            TokenRadix::Decimal,
        )
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("LUT_FTAB:\n\t.word 8564, "));
    }

    #[test]
    fn test_run_unwritable_destination_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing-dir").join("ftab.txt");

        let err = run(Some(path.to_str().unwrap()), None, TokenRadix::Hex).unwrap_err();
        assert!(err.to_string().contains("Failed to write frequency table"));
        assert!(err
            .chain()
            .any(|cause| cause.to_string().starts_with("failed to write")));
    }
}
