use anyhow::{Context, Result, anyhow};
use clap::Args;
use extraction::tabula_wrapper::TabulaClient;

use crate::distpaths;

/// CLI arguments relating to running Tabula.
#[derive(Args, Debug, Default)]
pub struct TabulaArgs {
    /// Path to Tabula JAR file. Defaults to the tabula.jar distributed alongside this program,
    /// if present.
    #[arg(long)]
    tabula_libpath: Option<String>,
}

impl TabulaArgs {
    /// Starts Tabula.
    pub fn build(&self) -> Result<TabulaClient> {
        let libpath = self
            .tabula_libpath
            .clone()
            .or_else(distpaths::tabula_jar)
            .ok_or_else(|| {
                anyhow!("--tabula-libpath must be specified, as tabula.jar could not be located")
            })?;
        TabulaClient::new(&libpath).with_context(|| "initialising Tabula")
    }
}
