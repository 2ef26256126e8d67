mod extract;
mod inputpdf;
pub mod main;
mod mainwin;
mod settings;
mod util;
mod workers;
