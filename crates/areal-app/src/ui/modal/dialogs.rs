use areal_core::AreaResult;
use eframe::egui::{Context, Id, Key, Modal, Response, RichText, Sides, TextEdit, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::icon,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn primary_button(ui: &mut Ui, label: String) -> Response {
    let response = ui.button(label);
    request_focus_if_none(ui, &response);
    response
}

/// Numeric-input prompt for the measurement currently being collected.
///
/// Enter or the OK button submits the buffer; Cancel or dismissing the
/// modal aborts the whole calculation.
pub(crate) fn show_measurement_prompt(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    prompt: &str,
    input: &mut String,
) {
    let mut enter_pressed = false;
    let mut ok_clicked = false;
    let mut cancelled = false;

    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("measurement_prompt"),
        "Data Entry",
        |ui: &mut Ui| {
            ui.label(prompt);
            let edit = ui.add(TextEdit::singleline(input).desired_width(160.0));
            request_focus_if_none(ui, &edit);
            if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                enter_pressed = true;
            }
        },
        |ui: &mut Ui| {
            if ui.button(format!("{} OK", icon::CHECK)).clicked() {
                ok_clicked = true;
            }
            if ui.button(format!("{} Cancel", icon::CANCEL)).clicked() {
                cancelled = true;
            }
        },
    );

    if enter_pressed || ok_clicked {
        action_queue.request(Action::ConfirmInput);
    } else if cancelled || should_close {
        action_queue.request(Action::CancelCalculation);
    }
}

/// Warning shown for non-positive (or unparseable) input. Dismissing it
/// returns to the prompt; it never cancels the calculation.
pub(crate) fn show_invalid_value_warning(ctx: &Context, action_queue: &mut ActionRequestQueue) {
    let mut dismissed = false;

    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("invalid_value_warning"),
        "Invalid value",
        |ui: &mut Ui| {
            ui.label("Please enter a positive number greater than zero.");
        },
        |ui: &mut Ui| {
            if primary_button(ui, format!("{} OK", icon::CHECK)).clicked() {
                dismissed = true;
            }
        },
    );

    if dismissed || should_close {
        action_queue.request(Action::DismissWarning);
    }
}

/// Informational dialog with the formatted area.
pub(crate) fn show_result(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    result: &AreaResult,
) {
    let mut acknowledged = false;

    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("area_result"),
        "Result",
        |ui: &mut Ui| {
            ui.label(result.to_string());
        },
        |ui: &mut Ui| {
            if primary_button(ui, format!("{} OK", icon::CHECK)).clicked() {
                acknowledged = true;
            }
        },
    );

    if acknowledged || should_close {
        action_queue.request(Action::AcknowledgeResult);
    }
}
