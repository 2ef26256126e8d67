use std::{sync::Arc, thread};

use anyhow::Result;
use extraction::TableExtractor;
use relm4::RelmApp;

use crate::gui::{mainwin, workers};

const APPLICATION_ID: &str = "pdf2xlsx.gui";

/// Runs the GUI. Must be called from the main thread.
pub fn run(
    extractor: &dyn TableExtractor,
    gtk_options: &[String],
    xdg_dirs: xdg::BaseDirectories,
) -> Result<()> {
    thread::scope(|s| {
        let worker = workers::extractor::MainThreadWorker::new(extractor);

        run_gui_thread(
            s,
            gtk_options,
            mainwin::Init {
                xdg_dirs: Arc::new(xdg_dirs),
                worker_channel: worker.worker_channel(),
            },
        );

        // Run the extraction worker (and the JVM that it uses) in the main thread.
        worker.run();
    });

    Ok(())
}

fn run_gui_thread<'scope, 'args>(
    s: &'scope thread::Scope<'scope, '_>,
    gtk_options: &'args [String],
    init: mainwin::Init,
) where
    'args: 'scope,
{
    // Run the gui in a non-main thread, as the JVM will likely want to be
    // on the main thread.
    s.spawn(move || {
        let program_invocation = std::env::args().next().unwrap_or_default();
        let mut gtk_args = vec![program_invocation];
        gtk_args.extend(gtk_options.iter().cloned());

        let app = RelmApp::new(APPLICATION_ID).with_args(gtk_args);
        app.run::<mainwin::MainWindow>(init);
    });
}
