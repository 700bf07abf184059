//! docport CLI - convert documents between editor interchange formats.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use docport::{
    detect, DirectorySink, EditorBuffer, ExportFormat, ImportFormat, Interchange, ReadOptions,
};

#[derive(Parser)]
#[command(name = "docport")]
#[command(version)]
#[command(about = "Convert documents between txt, HTML, PDF, DOCX, and email drafts", long_about = None)]
struct Cli {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    to: ExportArg,

    /// Input format (detected from extension or magic bytes if omitted)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    from: Option<ImportArg>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// PDF line-grouping tolerance in layout units
    #[arg(long, value_name = "UNITS")]
    tolerance: Option<f64>,
}

/// Import format tags accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum ImportArg {
    Txt,
    Html,
    Pdf,
    Docx,
}

impl From<ImportArg> for ImportFormat {
    fn from(arg: ImportArg) -> Self {
        match arg {
            ImportArg::Txt => ImportFormat::Txt,
            ImportArg::Html => ImportFormat::Html,
            ImportArg::Pdf => ImportFormat::Pdf,
            ImportArg::Docx => ImportFormat::Docx,
        }
    }
}

/// Export format tags accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum ExportArg {
    Txt,
    Html,
    Pdf,
    Docx,
    Email,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Txt => ExportFormat::Txt,
            ExportArg::Html => ExportFormat::Html,
            ExportArg::Pdf => ExportFormat::Pdf,
            ExportArg::Docx => ExportFormat::Docx,
            ExportArg::Email => ExportFormat::Email,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {message}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let data = fs::read(&cli.input)
        .map_err(|e| format!("cannot read {}: {e}", cli.input.display()))?;

    let import_format: ImportFormat = match cli.from {
        Some(arg) => arg.into(),
        None => detect::detect_format_from_path(&cli.input)
            .unwrap_or_else(|| detect::detect_format(&data)),
    };

    let mut options = ReadOptions::new();
    if let Some(tolerance) = cli.tolerance {
        options = options.with_line_tolerance(tolerance);
    }

    let mut engine = Interchange::new(EditorBuffer::new(), DirectorySink::new(&cli.output))
        .with_read_options(options);

    let report = engine
        .import(import_format, &data)
        .map_err(|e| e.to_string())?;
    log::debug!("parsed {} blocks from {import_format}", report.blocks);

    let export_format: ExportFormat = cli.to.into();
    let report = engine.export(export_format).map_err(|e| e.to_string())?;

    match report.downloaded_bytes {
        Some(bytes) => {
            let target = cli.output.join(format!("content.{export_format}"));
            println!(
                "{} {} -> {} ({bytes} bytes)",
                "converted".green().bold(),
                cli.input.display(),
                target.display(),
            );
        }
        None => {
            let target = cli.output.join("content.mailto");
            println!(
                "{} mail draft written to {}",
                "converted".green().bold(),
                target.display(),
            );
        }
    }

    Ok(())
}
