use std::sync::Arc;

use gtk::prelude::*;
use relm4::prelude::*;

use crate::gui::{extract, inputpdf, settings, workers};

/// Input messages for [MainWindow].
#[derive(Debug)]
pub enum Input {
    #[expect(clippy::enum_variant_names)]
    ExtractorInput(extract::Input),
}

/// Initialisation parameters for [MainWindow].
pub struct Init {
    pub xdg_dirs: Arc<xdg::BaseDirectories>,
    pub worker_channel: workers::extractor::WorkChannel,
}

/// Relm4 window component that acts as the main window for the GUI interface to pdf2xlsx.
pub struct MainWindow {
    input_pdf_selector: Controller<inputpdf::InputPdfSelector>,
    settings: Controller<settings::Settings>,
    extractor: Controller<extract::Extractor>,
}

#[relm4::component(pub)]
impl SimpleComponent for MainWindow {
    type Init = Init;

    type Input = Input;
    type Output = ();

    view! {
        gtk::Window {
            set_title: Some("PDF Table Extractor"),
            set_default_width: 400,
            set_default_height: 500,

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 5,
                set_margin_all: 5,

                gtk::Label {
                    set_label: "Extract the tables in a PDF file into an XLSX spreadsheet.",
                    set_halign: gtk::Align::Start,
                    set_hexpand: true,
                },

                model.input_pdf_selector.widget(),
                model.settings.widget(),

                model.extractor.widget(),
            }
        }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>) {
        match message {
            Input::ExtractorInput(extractor_input) => {
                self.extractor.emit(extractor_input);
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Self {
            input_pdf_selector: inputpdf::InputPdfSelector::builder()
                .launch(inputpdf::Init {
                    xdg_dirs: init.xdg_dirs.clone(),
                })
                .forward(sender.input_sender(), |msg| match msg {
                    inputpdf::Output::SelectedInputPdf(input_pdf) => {
                        Input::ExtractorInput(extract::Input::InputPdf(input_pdf))
                    }
                }),
            settings: settings::Settings::builder().launch(()).forward(
                sender.input_sender(),
                |msg| match msg {
                    settings::Output::Strategy(strategy) => {
                        Input::ExtractorInput(extract::Input::Strategy(strategy))
                    }
                    settings::Output::Pages(page_selector) => {
                        Input::ExtractorInput(extract::Input::Pages(page_selector))
                    }
                },
            ),
            extractor: extract::Extractor::builder()
                .launch(workers::extractor::Init {
                    worker_channel: init.worker_channel,
                })
                .detach(),
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }
}
