use anyhow::Result;

mod cli;
mod distpaths;
mod gui;

fn main() -> Result<()> {
    cli::run()
}
