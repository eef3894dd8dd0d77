use crate::{
    action::{Action, ActionRequestQueue},
    flow::{CalculationFlow, FlowStage},
    state::UiState,
};

pub(crate) fn handle_all(ui_state: &mut UiState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(ui_state, action);
    }
}

pub(crate) fn handle(ui_state: &mut UiState, action: Action) {
    match action {
        Action::StartCalculation(shape) => {
            log::debug!("starting {} calculation", shape.display_name());
            ui_state.active_flow = Some(CalculationFlow::new(shape));
        }
        Action::ConfirmInput => {
            if let Some(flow) = &mut ui_state.active_flow
                && flow.stage.is_prompting()
            {
                flow.submit();
                if let FlowStage::Result(result) = &flow.stage {
                    log::info!("{result}");
                }
            }
        }
        Action::CancelCalculation => {
            if let Some(flow) = ui_state.active_flow.take() {
                log::debug!("cancelled {} calculation", flow.shape().display_name());
            }
        }
        Action::DismissWarning => {
            if let Some(flow) = &mut ui_state.active_flow
                && flow.stage.is_warning()
            {
                flow.dismiss_warning();
            }
        }
        Action::AcknowledgeResult => {
            ui_state.active_flow = None;
        }
    }
}
