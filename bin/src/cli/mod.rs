use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

mod extractxlsx;
mod gui;
mod tabulaargs;

pub use tabulaargs::TabulaArgs;

/// Extracts tables from PDF files into XLSX spreadsheets using Tabula.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    ExtractXlsx(extractxlsx::Command),
    Gui(gui::Command),
}

const XDG_PREFIX: &str = "pdf2xlsx";

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    let xdg_dirs = xdg::BaseDirectories::with_prefix(XDG_PREFIX);

    use Command::*;
    match &args.command {
        ExtractXlsx(cmd) => extractxlsx::run(cmd),
        Gui(cmd) => gui::run(cmd, xdg_dirs),
    }
}
