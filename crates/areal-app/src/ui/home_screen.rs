use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};

pub(crate) fn show(ui: &mut Ui) {
    let content_height = 60.0;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(content_height))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Area Calculator").size(20.0));
                    ui.add_space(4.0);
                    ui.label("Choose a shape from the Calculate Area menu to begin.");
                });
            });
            strip.empty();
        });
}
