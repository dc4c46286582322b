//! Command-line surface: argument definitions and command execution.
//!
//! Commands write to a caller-supplied sink so integration tests can run
//! them without spawning the binary.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use datesift_core::config::Config;
use datesift_core::{DateNormalizer, FieldMeta};
use datesift_pipeline::{csv_io, ItemSchema, Pipeline};

#[derive(Parser)]
#[command(name = "datesift", about = "Find and normalise dates in scraped text")]
pub struct Cli {
    /// Write debug logs to datesift-debug.log in the temp directory.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file layered over the built-in defaults instead of
    /// ~/.config/datesift/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Normalise the first date found in TEXT.
    Normalize {
        text: String,
        /// Field name used for start/end inference.
        #[arg(long, default_value = "date")]
        field: String,
        /// Treat the field as the start of a range.
        #[arg(long, conflicts_with = "end")]
        start: bool,
        /// Treat the field as the end of a range.
        #[arg(long)]
        end: bool,
    },
    /// List the enabled date patterns in matching order.
    Patterns,
    /// Clean a CSV and normalise its date columns.
    Csv {
        input: PathBuf,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Date columns whose role is inferred from name and content.
        #[arg(long = "date", value_delimiter = ',')]
        date: Vec<String>,
        /// Date columns that mark the start of a range.
        #[arg(long = "start", value_delimiter = ',')]
        start: Vec<String>,
        /// Date columns that mark the end of a range.
        #[arg(long = "end", value_delimiter = ',')]
        end: Vec<String>,
    },
}

/// Resolve the effective configuration for `cli`.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Config::load(),
    }
}

pub fn execute(command: &Command, config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Normalize {
            text,
            field,
            start,
            end,
        } => {
            let normalizer = DateNormalizer::new(&config.dates)?;
            let meta = FieldMeta {
                date_field: true,
                start_date_field: *start,
                end_date_field: *end,
            };
            writeln!(out, "{}", normalizer.normalize(field, &meta, text))?;
        }
        Command::Patterns => {
            let normalizer = DateNormalizer::new(&config.dates)?;
            for (shape, re) in normalizer.table().iter() {
                writeln!(out, "{:<12}{}", shape.name(), re.as_str())?;
            }
        }
        Command::Csv {
            input,
            output,
            date,
            start,
            end,
        } => {
            let schema = csv_schema(date, start, end)?;
            let file = File::open(input)
                .with_context(|| format!("opening {}", input.display()))?;
            let (headers, items) = csv_io::read_items(BufReader::new(file), &schema)?;

            let items = Pipeline::from_config(config)?.process_all(items)?;

            match output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    csv_io::write_items(file, Some(&headers), &items)?;
                    tracing::info!(rows = items.len(), path = %path.display(), "wrote csv");
                }
                None => csv_io::write_items(out, Some(&headers), &items)?,
            }
        }
    }
    Ok(())
}

fn csv_schema(date: &[String], start: &[String], end: &[String]) -> anyhow::Result<ItemSchema> {
    if date.is_empty() && start.is_empty() && end.is_empty() {
        anyhow::bail!("no date columns given; use --date, --start or --end");
    }
    let mut schema = ItemSchema::new();
    for name in date {
        schema.push(name.as_str(), FieldMeta::date());
    }
    for name in start {
        schema.push(name.as_str(), FieldMeta::start());
    }
    for name in end {
        schema.push(name.as_str(), FieldMeta::end());
    }
    Ok(schema)
}

/// Run `cli` against stdout.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &config, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_normalize_flags() {
        let cli = Cli::try_parse_from(["datesift", "normalize", "Mar-2024", "--start"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Normalize {
                text: "Mar-2024".into(),
                field: "date".into(),
                start: true,
                end: false,
            }
        );
    }

    #[test]
    fn start_and_end_conflict() {
        assert!(Cli::try_parse_from(["datesift", "normalize", "2024", "--start", "--end"]).is_err());
    }

    #[test]
    fn csv_columns_split_on_commas() {
        let cli = Cli::try_parse_from([
            "datesift", "csv", "in.csv", "--date", "frsDate,eoSupport", "--start", "ga",
        ])
        .unwrap();
        let Command::Csv { date, start, end, .. } = cli.command else {
            panic!("expected csv command");
        };
        assert_eq!(date, vec!["frsDate", "eoSupport"]);
        assert_eq!(start, vec!["ga"]);
        assert!(end.is_empty());
    }

    #[test]
    fn csv_needs_a_date_column() {
        assert!(csv_schema(&[], &[], &[]).is_err());
    }
}
