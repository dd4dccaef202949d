//! SNESMOD build tools - command-line interface
//!
//! This binary provides the offline generators used while building the SPC
//! sound driver: the pitch frequency table and the binary-to-ca65 converter.

use clap::{Parser, Subcommand};
use snesmod_asm::bin2ca::{Bin2CaOptions, DEFAULT_BYTES_PER_LINE};
use snesmod_asm::{DirectiveStyle, TokenRadix};
use std::process::ExitCode;

use snesmod_cli::commands;

/// SNESMOD build tools
#[derive(Parser)]
#[command(name = "snesmod-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the LUT_FTAB pitch frequency table as .word data
    Ftab {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Directive indentation (default: tab for stdout, spaces for files)
        #[arg(long, value_parser = ["tab", "spaces"])]
        style: Option<String>,

        /// Literal radix
        #[arg(long, default_value = "hex", value_parser = ["hex", "decimal"])]
        radix: String,
    },

    /// Convert a binary file to a ca65 assembly file
    #[command(name = "bin2ca")]
    Bin2ca {
        /// The binary file to convert
        input: String,

        /// The output assembly file
        output: String,

        /// Label to export; LABEL and LABEL_end are emitted when given
        #[arg(long)]
        label: Option<String>,

        /// Segment to place the data in
        #[arg(long)]
        segment: Option<String>,

        /// Number of bytes per .byte line
        #[arg(
            long = "bytes-per-line",
            alias = "bytesperline",
            default_value_t = DEFAULT_BYTES_PER_LINE
        )]
        bytes_per_line: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ftab {
            output,
            style,
            radix,
        } => {
            let style = style.map(|s| {
                s.parse::<DirectiveStyle>()
                    .expect("clap should have validated style")
            });
            let radix = radix
                .parse::<TokenRadix>()
                .expect("clap should have validated radix");
            commands::ftab::run(output.as_deref(), style, radix)
        }
        Commands::Bin2ca {
            input,
            output,
            label,
            segment,
            bytes_per_line,
        } => {
            let options = Bin2CaOptions {
                label,
                segment,
                bytes_per_line,
            };
            commands::bin2ca::run(&input, &output, &options)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
