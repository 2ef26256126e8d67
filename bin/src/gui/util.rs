use std::path::PathBuf;

use relm4::{Component, ComponentSender};

const NOT_SELECTED: &str = "<not selected>";

pub fn format_opt_path(path: &Option<PathBuf>) -> &str {
    match path {
        None => NOT_SELECTED,
        Some(path) => match path.to_str() {
            None => "<selected - cannot be displayed>",
            Some(path_str) => path_str,
        },
    }
}

/// Sends `output` from the component, logging a warning if it fails to send.
pub fn send_output_or_log<C>(output: C::Output, description: &str, sender: &ComponentSender<C>)
where
    C: Component,
{
    if let Err(err) = sender.output(output) {
        log::warn!("Failed to send {description}: {err:?}");
    }
}

/// Returns the path to the XDG config file `name`, creating its parent directory if required.
///
/// The path is leaked to satisfy the `'static` lifetime required by
/// [relm4_components::open_button::OpenButtonSettings].
pub fn xdg_cfg_static_str(xdg_dirs: &xdg::BaseDirectories, name: &str) -> Option<&'static str> {
    let path = match xdg_dirs.place_config_file(name) {
        Ok(path) => path,
        Err(err) => {
            log::warn!("Could not place config file {name:?}: {err}");
            return None;
        }
    };
    let path_str = path.to_str()?.to_owned();
    Some(Box::leak(path_str.into_boxed_str()))
}
