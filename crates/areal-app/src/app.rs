//! Areal desktop application UI.
//!
//! # Design Notes
//! - One menu, four shape entries, each driving a modal prompt sequence.
//! - Modal dialogs replace the original's blocking input/message boxes;
//!   while a dialog is up it captures all interaction, so handlers run
//!   strictly one user action at a time.
//! - All state is per-calculation and ephemeral; closing the window exits.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, TopBottomPanel},
};

use crate::{action::ActionRequestQueue, action_handler, state::UiState, ui};

#[derive(Debug)]
pub struct ArealApp {
    ui_state: UiState,
}

impl ArealApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            ui_state: UiState::new(),
        }
    }
}

impl App for ArealApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui::menu::show(ui, &mut action_queue);
        });

        CentralPanel::default().show(ctx, |ui| {
            ui::home_screen::show(ui);
        });

        if let Some(flow) = &mut self.ui_state.active_flow {
            ui::modal::show(ctx, &mut action_queue, flow);
        }

        action_handler::handle_all(&mut self.ui_state, &mut action_queue);
    }
}
