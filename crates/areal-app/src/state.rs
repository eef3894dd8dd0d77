use crate::flow::CalculationFlow;

/// Ephemeral UI-only state. Nothing here is persisted: each calculation
/// exists only until its result dialog is acknowledged.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_flow: Option<CalculationFlow>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self { active_flow: None }
    }
}
