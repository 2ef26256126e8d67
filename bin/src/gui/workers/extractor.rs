use std::{path::PathBuf, sync::mpsc};

use anyhow::{Context, Result, anyhow};
use extraction::{
    ExtractionAdapter, ExtractionRequest, Strategy, TableExtractor, naming,
    pipeline::{self, Report},
};
use relm4::Worker;

use crate::gui::util;

/// Initialisation data for [ExtractorWorker].
pub struct Init {
    pub worker_channel: WorkChannel,
}

/// Specifies an extraction for [ExtractorWorker] to perform.
#[derive(Debug)]
pub struct Request {
    pub input_pdf: PathBuf,
    pub strategy: Strategy,
    pub page_selector: String,
}

/// Input messages for [ExtractorWorker].
#[derive(Debug)]
pub enum Input {
    // External:
    Start(Request),
    // Internal:
    Ended,
}

/// Output messages for [ExtractorWorker].
#[derive(Debug)]
pub enum Output {
    /// The extraction ran to completion, successfully or not.
    Finished {
        report: Report,
        /// Filename to suggest when saving the spreadsheet.
        suggested_name: String,
    },
    /// Indicates a failure to start the extraction process. This will be the only event emitted
    /// for the work.
    Failure(anyhow::Error),
}

/// Relm4 worker that forwards extraction requests to the [MainThreadWorker], one at a time.
pub struct ExtractorWorker {
    worker_channel: WorkChannel,
    running: bool,
}

impl Worker for ExtractorWorker {
    type Init = Init;
    type Input = Input;
    type Output = Output;

    fn init(init: Self::Init, _sender: relm4::ComponentSender<Self>) -> Self {
        Self {
            worker_channel: init.worker_channel,
            running: false,
        }
    }

    fn update(&mut self, message: Self::Input, sender: relm4::ComponentSender<Self>) {
        match message {
            Input::Start(_) if self.running => {
                util::send_output_or_log(
                    Output::Failure(anyhow!(
                        "Cannot start requested extraction. Work already in progress."
                    )),
                    "failure to start message",
                    &sender,
                );
            }
            Input::Start(request) => {
                let work = Work {
                    request,
                    sender: sender.clone(),
                };
                self.running = true;
                if let Err(err) = self.worker_channel.sender.send(work) {
                    self.running = false;
                    util::send_output_or_log(
                        Output::Failure(anyhow!(
                            "Could not request extraction - has the worker died? {:?}",
                            err
                        )),
                        "failure to start message",
                        &sender,
                    );
                }
            }
            Input::Ended if !self.running => {
                log::warn!("Received extraction completed message, but was not running.");
            }
            Input::Ended => {
                self.running = false;
            }
        }
    }
}

/// Runs extractions on the thread that owns the [TableExtractor].
pub struct MainThreadWorker<'a> {
    extractor: &'a dyn TableExtractor,

    request_sender: mpsc::SyncSender<Work>,
    request_receiver: mpsc::Receiver<Work>,
}

impl<'a> MainThreadWorker<'a> {
    pub fn new(extractor: &'a dyn TableExtractor) -> Self {
        let (request_sender, request_receiver) = mpsc::sync_channel(0);
        Self {
            extractor,
            request_sender,
            request_receiver,
        }
    }

    pub fn worker_channel(&self) -> WorkChannel {
        WorkChannel {
            sender: self.request_sender.clone(),
        }
    }

    /// Should be called from the main thread once the GUI thread has been started.
    /// Blocks until its [WorkChannel] is dropped. Consumes `self`.
    pub fn run(self) {
        // Ensure that that we terminate the loop below when the [WorkChannel] is dropped
        // externally.
        drop(self.request_sender);

        let adapter = ExtractionAdapter::new(self.extractor);

        loop {
            let work = match self.request_receiver.recv() {
                Ok(work) => work,
                Err(_) => {
                    log::info!("Worker request channel closed; terminating worker loop.");
                    return;
                }
            };

            work.run(&adapter);
        }
    }
}

pub struct WorkChannel {
    sender: mpsc::SyncSender<Work>,
}

struct Work {
    request: Request,
    sender: relm4::ComponentSender<ExtractorWorker>,
}

impl Work {
    fn run(self, adapter: &ExtractionAdapter<'_>) {
        let output = match self.run_inner(adapter) {
            Ok((report, suggested_name)) => Output::Finished {
                report,
                suggested_name,
            },
            Err(err) => Output::Failure(err),
        };
        self.sender.input(Input::Ended);
        util::send_output_or_log(output, "extraction result", &self.sender);
    }

    fn run_inner(&self, adapter: &ExtractionAdapter<'_>) -> Result<(Report, String)> {
        let input_name = self
            .request
            .input_pdf
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .ok_or_else(|| anyhow!("Input PDF path {:?} has no filename.", self.request.input_pdf))?;
        let suggested_name = naming::output_filename(input_name, self.request.strategy);

        let source_bytes = std::fs::read(&self.request.input_pdf)
            .with_context(|| format!("Reading input PDF {:?}.", self.request.input_pdf))?;
        let request = ExtractionRequest::new(
            source_bytes,
            self.request.strategy,
            self.request.page_selector.as_str(),
        );

        Ok((pipeline::run(adapter, &request), suggested_name))
    }
}
