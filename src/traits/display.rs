//! Display abstraction for calculator results.
//!
//! This module defines the [`EquivalencyDisplay`] trait for rendering a
//! computed [`CalculatorView`] or a validation failure to some output
//! (terminal text, a log, a test buffer).

use crate::{CalculatorView, ValidationReport};

/// Display trait for rendering calculator results.
///
/// Implementors decide the output medium. A display must never show
/// computed values for inputs that failed validation: callers route a
/// failed recompute to [`show_problems`](Self::show_problems) instead of
/// [`render`](Self::render).
///
/// # Example
///
/// ```ignore
/// use pitch_equiv::traits::EquivalencyDisplay;
/// use pitch_equiv::CalculatorView;
///
/// struct LogDisplay;
///
/// impl EquivalencyDisplay for LogDisplay {
///     type Error = ();
///
///     fn init(&mut self) -> Result<(), ()> { Ok(()) }
///     fn clear(&mut self) -> Result<(), ()> { Ok(()) }
///     fn render(&mut self, view: &CalculatorView) -> Result<(), ()> {
///         tracing::info!(reaction_time = view.reaction_time_sec, "rendered");
///         Ok(())
///     }
///     fn show_message(&mut self, line1: &str, line2: Option<&str>) -> Result<(), ()> {
///         Ok(())
///     }
/// }
/// ```
pub trait EquivalencyDisplay {
    /// Error type for display operations.
    type Error;

    /// Prepares the output (headers, title).
    ///
    /// Called once before the first render.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Clears previous output.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Renders a computed view.
    ///
    /// Implementations should display:
    /// - The reference speed and distance
    /// - Reaction time
    /// - Equivalent speeds at the reference distances
    fn render(&mut self, view: &CalculatorView) -> Result<(), Self::Error>;

    /// Shows a simple message (e.g., for errors).
    ///
    /// # Arguments
    ///
    /// * `line1` - First line of text
    /// * `line2` - Optional second line of text
    fn show_message(&mut self, line1: &str, line2: Option<&str>) -> Result<(), Self::Error>;

    /// Shows every validation problem, one message each.
    fn show_problems(&mut self, report: &ValidationReport) -> Result<(), Self::Error> {
        for reason in report.problems() {
            self.show_message(reason.message(), None)?;
        }
        Ok(())
    }

    /// Renders the outcome of [`CalculatorInputs::recompute`](crate::CalculatorInputs::recompute).
    fn present(
        &mut self,
        outcome: &Result<CalculatorView, ValidationReport>,
    ) -> Result<(), Self::Error> {
        match outcome {
            Ok(view) => self.render(view),
            Err(report) => self.show_problems(report),
        }
    }
}
