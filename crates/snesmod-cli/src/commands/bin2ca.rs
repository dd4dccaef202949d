//! Bin2ca command implementation
//!
//! Converts a binary file into a ca65 `.byte` source file.

use anyhow::{Context, Result};
use colored::Colorize;
use snesmod_asm::bin2ca::{convert_file, Bin2CaOptions};
use std::path::Path;
use std::process::ExitCode;

/// Run the bin2ca command
///
/// # Arguments
/// * `input` - Binary file to convert
/// * `output` - Assembly file to write
/// * `options` - Label, segment and line width
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, output: &str, options: &Bin2CaOptions) -> Result<ExitCode> {
    options.validate().context("Invalid bin2ca options")?;

    println!("{} {}", "Converting:".cyan().bold(), input);

    let size = convert_file(Path::new(input), Path::new(output), options)
        .with_context(|| format!("Failed to convert {} to {}", input, output))?;

    if let Some(label) = &options.label {
        println!("  {}: {}, {}_end", "Symbols".dimmed(), label, label);
    }
    if let Some(segment) = &options.segment {
        println!("  {}: {}", "Segment".dimmed(), segment);
    }
    println!(
        "{} Wrote {} {} to: {}",
        "SUCCESS".green().bold(),
        size,
        if size == 1 { "byte" } else { "bytes" },
        output
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_run_converts_file() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("driver.bin");
        let output = tmp.path().join("driver.asm");
        fs::write(&input, [0xde, 0xad, 0xbe, 0xef]).unwrap();

        let options = Bin2CaOptions::default().label("DRIVER").bytes_per_line(2);
        let code = run(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &options,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let text = fs::read_to_string(&output).unwrap();
        let byte_lines: Vec<&str> = text.lines().filter(|l| l.contains(".byte")).collect();
        assert_eq!(byte_lines, vec!["\t.byte $de,$ad", "\t.byte $be,$ef"]);
    }

    #[test]
    fn test_run_missing_input_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("nope.bin");
        let output = tmp.path().join("out.asm");

        let err = run(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &Bin2CaOptions::default(),
        )
        .unwrap_err();
        assert!(err
            .chain()
            .any(|cause| cause.to_string().starts_with("failed to read input")));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_rejects_invalid_options() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("data.bin");
        fs::write(&input, [1]).unwrap();

        let output = tmp.path().join("data.asm");

        let options = Bin2CaOptions::default().bytes_per_line(0);
        let err = run(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &options,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid bin2ca options");
        assert!(!output.exists());
    }
}
