//! marks - read legacy gradebook classes
//!
//! # Commands
//!
//! - `marks convert <DIR> -o <OUT>` - Convert every class in a directory to CSV
//! - `marks show <REC>` - Print a class report
//! - `marks dump <REC>` - Print a class as JSON
//! - `marks hex <REC>` - Hex dump the start of a record file
//!
//! The schema defaults to the `.txt` file beside the `.rec` file. Set
//! `RUST_LOG` to change log verbosity (default `info`).

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marks_export::hex::render_hex_walk;
use marks_export::report::render_report;
use marks_export::{convert_directory, load_class, ClassFiles, ExportOptions};

/// Read gradebook files written by the legacy marks program
#[derive(Parser, Debug)]
#[command(name = "marks")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert every class in a directory to CSV files
    Convert {
        /// Directory holding `.rec` and `.txt` pairs
        classes_dir: PathBuf,

        /// Directory to write CSV files to
        #[arg(short, long)]
        output: PathBuf,

        /// Skip the students-as-columns table
        #[arg(long)]
        no_transposed: bool,
    },

    /// Print a class report
    Show {
        /// Record file
        rec: PathBuf,

        /// Schema file (default: REC with a .txt extension)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Text shown for slots without a mark [default: __]
        #[arg(long)]
        placeholder: Option<String>,
    },

    /// Print a class as JSON
    Dump {
        /// Record file
        rec: PathBuf,

        /// Schema file (default: REC with a .txt extension)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Single-line output
        #[arg(long)]
        compact: bool,
    },

    /// Hex dump the start of a record file
    Hex {
        /// Record file
        rec: PathBuf,

        /// Number of bytes to dump
        #[arg(short, long, default_value_t = 800)]
        bytes: u64,
    },
}

fn class_files(rec: PathBuf, schema: Option<PathBuf>) -> ClassFiles {
    let mut files = ClassFiles::for_rec(rec);
    if let Some(schema) = schema {
        files.schema = schema;
    }
    files
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            classes_dir,
            output,
            no_transposed,
        } => {
            let options = ExportOptions {
                transposed: !no_transposed,
                ..ExportOptions::default()
            };
            let summaries = convert_directory(&classes_dir, &output, &options)
                .with_context(|| format!("converting {}", classes_dir.display()))?;
            for s in &summaries {
                println!(
                    "{:<12} {:<30} {:>3} students {:>3} assignments",
                    s.class_code, s.class_description, s.num_students, s.num_assignments
                );
            }
            println!("Converted {} classes into {}", summaries.len(), output.display());
        }
        Commands::Show {
            rec,
            schema,
            placeholder,
        } => {
            let mut options = ExportOptions::default();
            if let Some(placeholder) = placeholder {
                options.no_mark_placeholder = placeholder;
            }
            let class = load_class(&class_files(rec, schema))?;
            print!("{}", render_report(&class, &options));
        }
        Commands::Dump {
            rec,
            schema,
            compact,
        } => {
            let class = load_class(&class_files(rec, schema))?;
            let json = if compact {
                serde_json::to_string(&class)?
            } else {
                serde_json::to_string_pretty(&class)?
            };
            println!("{}", json);
        }
        Commands::Hex { rec, bytes } => {
            let mut data = Vec::new();
            File::open(&rec)
                .with_context(|| format!("opening {}", rec.display()))?
                .take(bytes)
                .read_to_end(&mut data)
                .with_context(|| format!("reading {}", rec.display()))?;
            print!("{}", render_hex_walk(&data));
        }
    }

    Ok(())
}
