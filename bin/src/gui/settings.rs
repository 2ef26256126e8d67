use extraction::{Strategy, request::ALL_PAGES};
use gtk::prelude::{EditableExt, FrameExt, GridExt, WidgetExt};
use relm4::{
    Component, ComponentController, ComponentParts, ComponentSender, Controller, SimpleComponent,
    gtk,
};
use relm4_components::simple_combo_box::SimpleComboBox;
use strum::VariantArray;

use crate::gui::util;

/// Input messages for [Settings].
#[derive(Debug)]
pub enum Input {
    StrategyIndex(usize),
    Pages(String),
}

/// Output messages for [Settings].
#[derive(Debug)]
pub enum Output {
    Strategy(Strategy),
    Pages(String),
}

/// Relm4 component to choose the table detection strategy and the pages to scan.
pub struct Settings {
    strategy_selector: Controller<SimpleComboBox<Strategy>>,
}

#[relm4::component(pub)]
impl SimpleComponent for Settings {
    type Init = ();

    type Input = Input;
    type Output = Output;

    view! {
        gtk::Frame {
            set_label: Some("Extraction settings"),

            gtk::Grid {
                set_margin_start: 5,
                set_margin_end: 5,
                set_margin_top: 5,
                set_margin_bottom: 5,
                set_column_spacing: 5,
                set_row_spacing: 5,

                attach[0, 0, 1, 1] = &gtk::Label {
                    set_label: "Strategy:",
                    set_halign: gtk::Align::Start,
                },
                attach[1, 0, 1, 1] = model.strategy_selector.widget(),

                attach[0, 1, 1, 1] = &gtk::Label {
                    set_label: "Pages:",
                    set_halign: gtk::Align::Start,
                },
                attach[1, 1, 1, 1] = &gtk::Entry {
                    set_text: ALL_PAGES,
                    set_hexpand: true,
                    set_tooltip_text: Some("e.g. \"1,2,5\", \"1,3-5\" or \"all\""),
                    connect_changed[sender] => move |entry| {
                        sender.input(Input::Pages(entry.text().to_string()));
                    },
                },
            },
        }
    }

    fn update(&mut self, message: Self::Input, sender: ComponentSender<Self>) {
        match message {
            Input::StrategyIndex(index) => match Strategy::VARIANTS.get(index) {
                Some(&strategy) => {
                    util::send_output_or_log(Output::Strategy(strategy), "strategy", &sender);
                }
                None => log::warn!("Strategy index {index} out of range."),
            },
            Input::Pages(page_selector) => {
                util::send_output_or_log(Output::Pages(page_selector), "page selector", &sender);
            }
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Self {
            strategy_selector: SimpleComboBox::builder()
                .launch(SimpleComboBox {
                    variants: Strategy::VARIANTS.to_vec(),
                    active_index: Some(0),
                })
                .forward(sender.input_sender(), Input::StrategyIndex),
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }
}
