use anyhow::Result;
use clap::Args;

use crate::{cli::TabulaArgs, gui};

/// Runs a GUI to extract tables from PDF files into XLSX spreadsheets.
#[derive(Args, Debug, Default)]
pub struct Command {
    /// Options relating to running Tabula.
    #[command(flatten)]
    tabula: TabulaArgs,

    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    gtk_options: Vec<String>,
}

pub fn run(cmd: &Command, xdg_dirs: xdg::BaseDirectories) -> Result<()> {
    let tabula_client = cmd.tabula.build()?;
    gui::main::run(&tabula_client, &cmd.gtk_options, xdg_dirs)
}
