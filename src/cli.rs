//! Command-line interface for the structuring engine.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::pipeline::{self, DocumentInput, DEFAULT_EXCLUDED_SECTIONS};
use crate::roster::JudgeRoster;
use crate::types::SectionName;

/// ECHR Structuring - Turn HUDOC judgment exports into structured records.
#[derive(Parser)]
#[command(name = "echr-structuring")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Structure one or more extracted documents into JSON and plain text.
    Structure {
        /// Extracted document files (JSON with paragraphs, tables, conclusion).
        inputs: Vec<PathBuf>,

        /// Judge roster JSON file.
        #[arg(short, long)]
        roster: PathBuf,

        /// Output directory (default: next to each input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the law and conclusion sections in the rendered text.
        #[arg(long)]
        keep_all_sections: bool,
    },

    /// Convert a plain-text judge listing into a roster JSON file.
    Roster {
        /// Plain-text judge listing.
        listing: PathBuf,

        /// Output file (default: roster.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Structure {
            inputs,
            roster,
            output,
            keep_all_sections,
        } => structure_command(&inputs, &roster, output.as_deref(), keep_all_sections),
        Commands::Roster { listing, output } => roster_command(&listing, output.as_deref()),
    }
}

/// Execute the structure command.
fn structure_command(
    inputs: &[PathBuf],
    roster_path: &Path,
    output: Option<&Path>,
    keep_all_sections: bool,
) -> Result<()> {
    let roster = JudgeRoster::load(roster_path)?;
    println!(
        "{} {} judges from {}",
        style("Loaded").bold(),
        style(roster.len()).cyan(),
        roster_path.display()
    );
    println!();

    let exclude: HashSet<SectionName> = if keep_all_sections {
        HashSet::new()
    } else {
        DEFAULT_EXCLUDED_SECTIONS.iter().copied().collect()
    };

    let pb = ProgressBar::new(inputs.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut failures = 0usize;
    for input in inputs {
        pb.set_message(input.display().to_string());
        if let Err(e) = structure_one(input, &roster, &exclude, output) {
            // One malformed document must not abort the batch.
            tracing::warn!(document = %input.display(), error = %e, "Skipping document");
            failures += 1;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let structured = inputs.len() - failures;
    println!(
        "{} {} structured, {} skipped",
        style("Done:").green().bold(),
        structured,
        if failures > 0 {
            style(failures).yellow().bold()
        } else {
            style(failures).dim()
        }
    );

    Ok(())
}

/// Structure a single document file and write its two outputs.
fn structure_one(
    input: &Path,
    roster: &JudgeRoster,
    exclude: &HashSet<SectionName>,
    output: Option<&Path>,
) -> Result<()> {
    let content = std::fs::read_to_string(input)?;
    let document: DocumentInput = serde_json::from_str(&content)?;
    let id = document_id(input);

    let structured = pipeline::structure_document(&id, &document, roster)?;

    let dir = output
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let json_path = dir.join(format!("{id}_parsed.json"));
    std::fs::write(&json_path, serde_json::to_string_pretty(&structured)?)?;

    let text_path = dir.join(format!("{id}_text.txt"));
    std::fs::write(&text_path, structured.rendered_text(exclude))?;

    Ok(())
}

/// Execute the roster command.
fn roster_command(listing: &Path, output: Option<&Path>) -> Result<()> {
    let text = std::fs::read_to_string(listing)?;
    let roster = JudgeRoster::from_listing(&text);

    let output_path = output.unwrap_or_else(|| Path::new("roster.json"));
    std::fs::write(output_path, serde_json::to_string_pretty(&roster)?)?;

    println!(
        "{} {} judges to {}",
        style("Saved").green().bold(),
        style(roster.len()).cyan(),
        output_path.display()
    );

    Ok(())
}

/// Document identifier derived from the input file name.
fn document_id(input: &Path) -> String {
    input
        .file_stem()
        .map_or_else(|| "document".to_string(), |s| s.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_structure() {
        let cli = Cli::parse_from([
            "echr-structuring",
            "structure",
            "001-12345.json",
            "--roster",
            "roster.json",
        ]);

        let Commands::Structure {
            inputs,
            roster,
            output,
            keep_all_sections,
        } = cli.command
        else {
            panic!("expected structure command");
        };
        assert_eq!(inputs, vec![PathBuf::from("001-12345.json")]);
        assert_eq!(roster, PathBuf::from("roster.json"));
        assert!(output.is_none());
        assert!(!keep_all_sections);
    }

    #[test]
    fn test_cli_parse_structure_keep_all_sections() {
        let cli = Cli::parse_from([
            "echr-structuring",
            "structure",
            "a.json",
            "b.json",
            "--roster",
            "roster.json",
            "--keep-all-sections",
        ]);

        let Commands::Structure {
            inputs,
            keep_all_sections,
            ..
        } = cli.command
        else {
            panic!("expected structure command");
        };
        assert_eq!(inputs.len(), 2);
        assert!(keep_all_sections);
    }

    #[test]
    fn test_cli_parse_roster() {
        let cli = Cli::parse_from([
            "echr-structuring",
            "roster",
            "listing.txt",
            "--output",
            "out.json",
        ]);

        let Commands::Roster { listing, output } = cli.command else {
            panic!("expected roster command");
        };
        assert_eq!(listing, PathBuf::from("listing.txt"));
        assert_eq!(output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_document_id_from_path() {
        assert_eq!(document_id(Path::new("/tmp/001-12345.json")), "001-12345");
    }
}
