use areal_core::{AreaResult, Measurement, Shape, ShapeRequest};

/// One in-progress area calculation.
///
/// The original nested modal dialogs are rendered here as a small state
/// machine: measurements are collected one prompt at a time, an invalid
/// entry detours through [`FlowStage::Warning`] and back, and once every
/// required measurement is recorded the flow settles in
/// [`FlowStage::Result`] until the user acknowledges it.
#[derive(Debug)]
pub(crate) struct CalculationFlow {
    shape: Shape,
    measurements: Vec<Measurement>,
    pub(crate) input: String,
    pub(crate) stage: FlowStage,
}

#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub(crate) enum FlowStage {
    Prompting,
    Warning,
    Result(AreaResult),
}

impl CalculationFlow {
    #[must_use]
    pub(crate) fn new(shape: Shape) -> Self {
        Self {
            shape,
            measurements: Vec::with_capacity(shape.measurement_count()),
            input: String::new(),
            stage: FlowStage::Prompting,
        }
    }

    #[must_use]
    pub(crate) fn shape(&self) -> Shape {
        self.shape
    }

    /// Prompt text for the measurement currently being collected.
    #[must_use]
    pub(crate) fn prompt(&self) -> &'static str {
        self.shape.measurement_prompts()[self.measurements.len()]
    }

    /// Parses the input buffer and advances the flow.
    ///
    /// Invalid input (non-numeric, non-finite, or not greater than zero)
    /// moves to the warning stage; the measurement is not recorded and the
    /// prompt repeats after [`Self::dismiss_warning`]. Once the last
    /// required measurement is recorded the area is computed.
    pub(crate) fn submit(&mut self) {
        debug_assert!(self.stage.is_prompting());
        match self.input.parse::<Measurement>() {
            Ok(measurement) => {
                self.measurements.push(measurement);
                self.input.clear();
                if self.measurements.len() == self.shape.measurement_count() {
                    let request = ShapeRequest::new(self.shape, &self.measurements);
                    self.stage = FlowStage::Result(AreaResult::new(&request));
                }
            }
            Err(err) => {
                log::debug!("rejected measurement input {:?}: {err}", self.input);
                self.stage = FlowStage::Warning;
            }
        }
    }

    /// Returns from the warning to a fresh prompt.
    pub(crate) fn dismiss_warning(&mut self) {
        debug_assert!(self.stage.is_warning());
        self.input.clear();
        self.stage = FlowStage::Prompting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(flow: &mut CalculationFlow, text: &str) {
        flow.input = text.to_owned();
        flow.submit();
    }

    #[test]
    fn single_measurement_shape_completes_after_one_entry() {
        let mut flow = CalculationFlow::new(Shape::Circle);
        assert_eq!(flow.prompt(), "Enter the radius of the circle:");

        submit(&mut flow, "2");
        match &flow.stage {
            FlowStage::Result(result) => {
                assert_eq!(result.to_string(), "The area of the circle is: 12.57");
            }
            stage => panic!("expected result stage, got {stage:?}"),
        }
    }

    #[test]
    fn two_measurement_shape_prompts_base_then_height() {
        let mut flow = CalculationFlow::new(Shape::Triangle);
        assert_eq!(flow.prompt(), "Enter the base of the triangle:");

        submit(&mut flow, "4");
        assert!(flow.stage.is_prompting());
        assert_eq!(flow.prompt(), "Enter the height of the triangle:");
        assert!(flow.input.is_empty());

        submit(&mut flow, "5");
        match &flow.stage {
            FlowStage::Result(result) => {
                assert_eq!(result.to_string(), "The area of the triangle is: 10.00");
            }
            stage => panic!("expected result stage, got {stage:?}"),
        }
    }

    #[test]
    fn non_positive_input_detours_through_warning() {
        let mut flow = CalculationFlow::new(Shape::Square);

        submit(&mut flow, "-1");
        assert!(flow.stage.is_warning());

        flow.dismiss_warning();
        assert!(flow.stage.is_prompting());
        assert!(flow.input.is_empty());
        assert_eq!(flow.prompt(), "Enter the side of the square:");

        submit(&mut flow, "7");
        match &flow.stage {
            FlowStage::Result(result) => {
                assert_eq!(result.to_string(), "The area of the square is: 49.00");
            }
            stage => panic!("expected result stage, got {stage:?}"),
        }
    }

    #[test]
    fn non_numeric_input_detours_through_warning() {
        let mut flow = CalculationFlow::new(Shape::Rectangle);

        submit(&mut flow, "wide");
        assert!(flow.stage.is_warning());

        flow.dismiss_warning();
        submit(&mut flow, "3");
        submit(&mut flow, "6");
        match &flow.stage {
            FlowStage::Result(result) => {
                assert_eq!(result.to_string(), "The area of the rectangle is: 18.00");
            }
            stage => panic!("expected result stage, got {stage:?}"),
        }
    }

    #[test]
    fn warning_does_not_lose_recorded_measurements() {
        let mut flow = CalculationFlow::new(Shape::Rectangle);

        submit(&mut flow, "3");
        submit(&mut flow, "0");
        assert!(flow.stage.is_warning());

        flow.dismiss_warning();
        assert_eq!(flow.prompt(), "Enter the height of the rectangle:");

        submit(&mut flow, "6");
        assert!(flow.stage.is_result());
    }
}
