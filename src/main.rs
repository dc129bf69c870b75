//! # db32 CLI
//!
//! Command-line interface for Dbase32 encoding, decoding and ID generation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use dbase32::{
    codec::Backend,
    commands::{
        self, completions, CheckArgs, DecodeArgs, EncodeArgs, InputFormat, RandomArgs, TableArgs,
        TimeArgs,
    },
    config::{Config, Overrides},
    constants::DB32_REMOVED,
    id::TimestampPolicy,
    ui,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/dbase32/config   backend, timestamp_policy, id_size (see `db32 setup`)

Length Rules:
  binary  5..=60 bytes, a multiple of 5
  text    8..=96 symbols, a multiple of 8

Examples:
  db32 encode 62696e61727920666f6f    Encode hex bytes
  db32 encode --format raw 'binary foo'
  db32 decode FCNPVRELI7J9FUUI        Print bytes as hex
  db32 check FCNPVRELI7J9FUUI         Validate without decoding
  db32 random --size 30 --count 5     Five 240-bit random IDs
  db32 time                           Timestamp-prefixed ID for now";

#[derive(Parser)]
#[command(name = "db32")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Base32 encoding with a sorted-order alphabet, for database IDs")]
#[command(
    long_about = "db32 encodes binary IDs as text using the Dbase32 alphabet \
(3-9, A-Y). Because the alphabet is sorted, encoded IDs sort exactly like the \
bytes they encode, which keeps them ordered in key-value stores."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Codec implementation (overrides config)
    #[arg(long, global = true, value_enum)]
    backend: Option<Backend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode bytes as Dbase32 text
    #[command(after_help = "Examples:\n  \
db32 encode 0000000000              -> 33333333\n  \
db32 encode --format raw 'binary foo'\n  \
printf 'hello' | db32 encode        Read raw bytes from stdin")]
    Encode {
        /// Input bytes (read from stdin when omitted)
        data: Option<String>,

        /// How DATA is written
        #[arg(long, value_enum, default_value = "hex")]
        format: InputFormat,
    },

    /// Decode Dbase32 text into bytes
    Decode {
        /// Dbase32 text
        text: String,

        /// Write raw bytes instead of hex
        #[arg(long)]
        raw: bool,
    },

    /// Validate Dbase32 text without decoding it
    #[command(long_about = "Validate Dbase32 text without decoding it.\n\n\
Valid inputs are echoed to stdout, invalid ones are reported on stderr with \
the first problem found. Exits with status 1 if any input is invalid.")]
    Check {
        /// Texts to validate
        #[arg(required = true)]
        texts: Vec<String>,

        /// Print nothing; report only through the exit status
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate random IDs
    Random {
        /// Size in bytes: 5..=60, a multiple of 5 (default from config, 15)
        #[arg(short, long)]
        size: Option<usize>,

        /// Number of IDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Generate a timestamp-prefixed ID
    Time {
        /// Seconds since the Unix epoch (default: now)
        #[arg(short, long, allow_hyphen_values = true)]
        timestamp: Option<String>,

        /// What to do with timestamps outside 0..=4294967295 (overrides config)
        #[arg(long, value_enum)]
        policy: Option<TimestampPolicy>,
    },

    /// Generate alphabet tables as Rust source
    Table {
        /// The 4 symbols to remove from 0-9A-Z
        #[arg(long, default_value = DB32_REMOVED)]
        remove: String,

        /// Prefix for the constant names
        #[arg(long, default_value = "DB32")]
        prefix: String,
    },

    /// Write a default config file
    Setup,

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            ui::print_error(&err);
            std::process::exit(1);
        }
    }
}

/// Runs the CLI. `Ok(false)` means a check failed without an error to print.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    let policy = match &cli.command {
        Commands::Time { policy, .. } => *policy,
        _ => None,
    };
    let overrides = Overrides {
        backend: cli.backend,
        timestamp_policy: policy,
    };

    match cli.command {
        Commands::Setup => commands::setup()?,

        Commands::Completions { shell } => completions::execute(shell, &mut Cli::command())?,

        Commands::Table { remove, prefix } => commands::table(&TableArgs { remove, prefix })?,

        Commands::Encode { data, format } => {
            commands::encode(&EncodeArgs { data, format }, &load_config(overrides)?)?;
        }

        Commands::Decode { text, raw } => {
            commands::decode(&DecodeArgs { text, raw }, &load_config(overrides)?)?;
        }

        Commands::Check { texts, quiet } => {
            return commands::check(&CheckArgs { texts, quiet }, &load_config(overrides)?);
        }

        Commands::Random { size, count } => {
            commands::random(&RandomArgs { size, count }, &load_config(overrides)?)?;
        }

        Commands::Time { timestamp, .. } => {
            commands::time(&TimeArgs { timestamp }, &load_config(overrides)?)?;
        }
    }

    Ok(true)
}

/// Loads the config and prints any warnings about it.
fn load_config(overrides: Overrides) -> Result<Config> {
    let config = Config::load(overrides)?;
    ui::print_warnings(&config.warnings);
    Ok(config)
}
