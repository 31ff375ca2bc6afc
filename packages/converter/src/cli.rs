//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_INPUT_PATH, DEFAULT_JSON_PATH, DEFAULT_MARKDOWN_PATH};
use crate::converter::convert_file;
use crate::error::Result;

/// Kanun Converter - Turn the Turkish Civil Code HTML export into JSON and Markdown.
#[derive(Parser)]
#[command(name = "kanun-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the HTML document into a JSON tree and a Markdown file.
    Convert {
        /// Input HTML document (default: kanun.htm)
        input: Option<PathBuf>,

        /// JSON output file (default: kanun.json)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Markdown output file (default: kanun.md)
        #[arg(short, long)]
        markdown: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            json,
            markdown,
        } => convert_command(
            input.as_deref().unwrap_or(Path::new(DEFAULT_INPUT_PATH)),
            json.as_deref().unwrap_or(Path::new(DEFAULT_JSON_PATH)),
            markdown.as_deref().unwrap_or(Path::new(DEFAULT_MARKDOWN_PATH)),
        ),
    }
}

/// Execute the convert command.
fn convert_command(input: &Path, json: &Path, markdown: &Path) -> Result<()> {
    println!(
        "{} {}",
        style("Converting").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Parsing document...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let conversion = match convert_file(input, json, markdown) {
        Ok(conversion) => conversion,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let stats = conversion.document.stats();
    println!("  Books: {}", stats.books);
    println!("  Parts: {}", stats.parts);
    println!("  Chapters: {}", stats.chapters);
    println!("  Articles: {}", style(stats.articles).green());
    println!("  Footnotes: {}", stats.footnotes);
    if !conversion.warnings.is_empty() {
        println!(
            "  Warnings: {}",
            style(conversion.warnings.len()).yellow().bold()
        );
    }

    println!();
    println!("{} {}", style("Saved to:").green().bold(), json.display());
    println!("{} {}", style("Saved to:").green().bold(), markdown.display());

    Ok(())
}
