use std::path::PathBuf;

use extraction::{
    SpreadsheetDocument, Strategy, naming,
    pipeline::Outcome,
    request::ALL_PAGES,
    status::{Level, StatusMessage},
};
use gtk::prelude::{BoxExt, ButtonExt, OrientableExt, WidgetExt};
use relm4::{
    Component, ComponentController, ComponentParts, ComponentSender, Controller, SimpleComponent,
    WorkerController, gtk,
};
use relm4_components::save_dialog::{
    SaveDialog, SaveDialogMsg, SaveDialogResponse, SaveDialogSettings,
};

use crate::gui::workers::extractor;

/// Input messages for [Extractor].
#[derive(Debug)]
pub enum Input {
    #[expect(clippy::enum_variant_names)]
    InputPdf(Option<PathBuf>),
    Strategy(Strategy),
    Pages(String),
    // Internal:
    Extract,
    Save,
    SaveTo(PathBuf),
    Ignore,
    Worker(extractor::Output),
}

/// A spreadsheet waiting to be saved.
struct Pending {
    document: SpreadsheetDocument,
    suggested_name: String,
}

/// Relm4 component that runs extractions and offers the resulting spreadsheet for saving.
pub struct Extractor {
    worker: WorkerController<extractor::ExtractorWorker>,
    save_dialog: Controller<SaveDialog>,

    input_pdf: Option<PathBuf>,
    strategy: Strategy,
    page_selector: String,

    running: bool,
    messages: Vec<StatusMessage>,
    pending: Option<Pending>,
}

impl Extractor {
    fn is_extraction_ready(&self) -> bool {
        self.input_pdf.is_some() && !self.running
    }

    fn status_text(&self) -> String {
        self.messages
            .iter()
            .map(StatusMessage::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn start_extraction(&mut self) {
        let Some(input_pdf) = self.input_pdf.clone() else {
            log::warn!("Extraction requested without an input PDF.");
            return;
        };
        self.running = true;
        self.pending = None;
        self.messages = vec![StatusMessage::new(Level::Info, "Extracting tables...")];
        self.worker.emit(extractor::Input::Start(extractor::Request {
            input_pdf,
            strategy: self.strategy,
            page_selector: self.page_selector.clone(),
        }));
    }

    fn handle_worker_output(&mut self, output: extractor::Output) {
        match output {
            extractor::Output::Finished {
                report,
                suggested_name,
            } => {
                self.running = false;
                self.messages = report.messages;
                if let Ok(Outcome::Spreadsheet { document, .. }) = report.result {
                    self.pending = Some(Pending {
                        document,
                        suggested_name,
                    });
                }
            }
            extractor::Output::Failure(err) => {
                log::error!("Extraction failed: {err:?}");
                self.running = false;
                self.messages
                    .push(StatusMessage::new(Level::Error, format!("{err:#}")));
            }
        }
    }

    fn save_to(&mut self, path: PathBuf) {
        let Some(pending) = &self.pending else {
            log::warn!("Save requested with no spreadsheet to save.");
            return;
        };
        let message = match utils::outfile::write_atomic(&path, pending.document.as_bytes()) {
            Ok(()) => StatusMessage::new(Level::Success, format!("Saved spreadsheet to {path:?}.")),
            Err(err) => {
                log::error!("Saving spreadsheet failed: {err:?}");
                StatusMessage::new(Level::Error, format!("Could not save spreadsheet: {err:#}"))
            }
        };
        self.messages.push(message);
    }
}

#[relm4::component(pub)]
impl SimpleComponent for Extractor {
    type Init = extractor::Init;

    type Input = Input;
    type Output = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 5,

            gtk::Button::with_label("Extract") {
                #[watch]
                set_sensitive: model.is_extraction_ready(),
                connect_clicked => Input::Extract,
            },

            gtk::Label {
                #[watch]
                set_label: &model.status_text(),
                set_halign: gtk::Align::Start,
                set_wrap: true,
                set_selectable: true,
            },

            gtk::Button::with_label("Save spreadsheet") {
                #[watch]
                set_visible: model.pending.is_some(),
                connect_clicked => Input::Save,
            },
        }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>) {
        match message {
            Input::InputPdf(input_pdf) => {
                self.input_pdf = input_pdf;
            }
            Input::Strategy(strategy) => {
                self.strategy = strategy;
            }
            Input::Pages(page_selector) => {
                self.page_selector = page_selector;
            }
            Input::Extract => self.start_extraction(),
            Input::Save => {
                if let Some(pending) = &self.pending {
                    self.save_dialog
                        .emit(SaveDialogMsg::SaveAs(pending.suggested_name.clone()));
                }
            }
            Input::SaveTo(path) => self.save_to(path),
            Input::Ignore => {}
            Input::Worker(output) => self.handle_worker_output(output),
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let xlsx_filter = gtk::FileFilter::new();
        xlsx_filter.set_name(Some("XLSX spreadsheet"));
        xlsx_filter.add_pattern("*.xlsx");
        xlsx_filter.add_mime_type(naming::XLSX_MIME_TYPE);

        let model = Self {
            worker: extractor::ExtractorWorker::builder()
                .detach_worker(init)
                .forward(sender.input_sender(), Input::Worker),
            save_dialog: SaveDialog::builder()
                .transient_for_native(&root)
                .launch(SaveDialogSettings {
                    cancel_label: "Cancel".to_string(),
                    accept_label: "Save".to_string(),
                    create_folders: true,
                    is_modal: true,
                    filters: vec![xlsx_filter],
                })
                .forward(sender.input_sender(), |response| match response {
                    SaveDialogResponse::Accept(path) => Input::SaveTo(path),
                    SaveDialogResponse::Cancel => Input::Ignore,
                }),

            input_pdf: None,
            strategy: Strategy::default(),
            page_selector: ALL_PAGES.to_string(),

            running: false,
            messages: Vec::new(),
            pending: None,
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }
}
