use eframe::egui::Context;

use crate::{
    action::ActionRequestQueue,
    flow::{CalculationFlow, FlowStage},
};

mod dialogs;

pub(crate) fn show(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    flow: &mut CalculationFlow,
) {
    match &flow.stage {
        FlowStage::Prompting => {
            let prompt = flow.prompt();
            dialogs::show_measurement_prompt(ctx, action_queue, prompt, &mut flow.input);
        }
        FlowStage::Warning => {
            dialogs::show_invalid_value_warning(ctx, action_queue);
        }
        FlowStage::Result(result) => {
            dialogs::show_result(ctx, action_queue, result);
        }
    }
}
