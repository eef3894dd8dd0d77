use areal_core::Shape;
use eframe::egui::{MenuBar, Ui};

use crate::action::{Action, ActionRequestQueue};

pub(crate) fn show(ui: &mut Ui, action_queue: &mut ActionRequestQueue) {
    MenuBar::new().ui(ui, |ui| {
        ui.menu_button("Calculate Area", |ui| {
            for shape in Shape::ALL {
                if ui.button(shape.label()).clicked() {
                    action_queue.request(Action::StartCalculation(shape));
                    ui.close();
                }
            }
        });
    });
}
