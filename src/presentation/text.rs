//! Plain-text renderer used by the command line front end.

use core::fmt::Write;

use crate::constants::MAX_SPEED_DECIMALS;
use crate::presentation::chart::ChartSpec;
use crate::session::CalculatorView;
use crate::traits::EquivalencyDisplay;

/// Default width of the table's speed bars, in characters.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Renders calculator output as text into any [`core::fmt::Write`] sink.
///
/// # Example
///
/// ```rust
/// use pitch_equiv::presentation::TextDisplay;
/// use pitch_equiv::traits::EquivalencyDisplay;
/// use pitch_equiv::CalculatorInputs;
///
/// let mut display = TextDisplay::new(String::new());
/// let view = CalculatorInputs::default().recompute().unwrap();
/// display.render(&view).unwrap();
///
/// assert!(display.output().contains("Reaction Time: 0.458 seconds"));
/// ```
pub struct TextDisplay<W: Write> {
    out: W,
    show_table: bool,
    bar_width: usize,
    speed_decimals: usize,
}

impl<W: Write> TextDisplay<W> {
    /// Create a display writing to `out`, markers only.
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_table: false,
            bar_width: DEFAULT_BAR_WIDTH,
            speed_decimals: 1,
        }
    }

    /// Also print the full 15–60.5 ft table
    pub fn with_table(mut self, show: bool) -> Self {
        self.show_table = show;
        self
    }

    /// Set the bar width for table rows
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Set how many decimals speeds are printed with (capped at
    /// [`MAX_SPEED_DECIMALS`])
    pub fn with_speed_decimals(mut self, decimals: usize) -> Self {
        self.speed_decimals = decimals.min(MAX_SPEED_DECIMALS as usize);
        self
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Take back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_table(&mut self, view: &CalculatorView) -> core::fmt::Result {
        let max_speed = view.table.max_speed_mph();
        let input_row = view
            .table
            .at_distance(view.inputs.distance_ft)
            .map(|point| point.distance_ft);
        writeln!(self.out)?;
        writeln!(self.out, "Distance (ft)  Speed (mph)")?;
        for point in view.table.iter() {
            let filled = if max_speed > 0.0 {
                ((point.speed_mph / max_speed) * self.bar_width as f64) as usize
            } else {
                0
            };
            write!(
                self.out,
                "{:>13.1}  {:>11.*}  ",
                point.distance_ft, self.speed_decimals, point.speed_mph
            )?;
            for _ in 0..filled.min(self.bar_width) {
                self.out.write_char('#')?;
            }
            let here = input_row == Some(point.distance_ft);
            writeln!(self.out, "{}", if here { "  <- input" } else { "" })?;
        }
        Ok(())
    }
}

impl<W: Write> EquivalencyDisplay for TextDisplay<W> {
    type Error = core::fmt::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        writeln!(self.out, "Pitch Speed Equivalency Calculator")
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        writeln!(self.out)
    }

    fn render(&mut self, view: &CalculatorView) -> Result<(), Self::Error> {
        let chart = ChartSpec::from_view(view, self.speed_decimals);

        writeln!(self.out, "{}", chart.title)?;
        writeln!(
            self.out,
            "Reaction Time: {:.3} seconds",
            view.reaction_time_sec
        )?;

        if !chart.markers.is_empty() {
            writeln!(self.out)?;
            for marker in chart.markers.iter() {
                writeln!(self.out, "  {:<14}{:>12}", marker.label, marker.annotation)?;
            }
        }

        if self.show_table {
            self.write_table(view)?;
        }
        Ok(())
    }

    fn show_message(&mut self, line1: &str, line2: Option<&str>) -> Result<(), Self::Error> {
        writeln!(self.out, "error: {line1}")?;
        if let Some(line2) = line2 {
            writeln!(self.out, "       {line2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalculatorInputs;
    use alloc::string::String;

    fn render(inputs: CalculatorInputs, table: bool) -> String {
        let mut display = TextDisplay::new(String::new()).with_table(table);
        display.present(&inputs.recompute()).unwrap();
        display.into_inner()
    }

    #[test]
    fn renders_header_and_reaction_time() {
        let out = render(CalculatorInputs::default(), false);
        assert!(out.contains("Equivalent Speeds for 90 mph at 60.5 ft"));
        assert!(out.contains("Reaction Time: 0.458 seconds"));
    }

    #[test]
    fn renders_markers() {
        let out = render(CalculatorInputs::default(), false);
        assert!(out.contains("46ft (10U)"));
        assert!(out.contains("68.4 mph"));
        assert!(!out.contains("Distance (ft)"));
    }

    #[test]
    fn renders_table_with_input_row() {
        let out = render(CalculatorInputs::new(70.0, 46.0), true);
        assert!(out.contains("Distance (ft)  Speed (mph)"));
        assert_eq!(out.matches("<- input").count(), 1);
        // Header, reaction time, blank, 5 markers, blank, column header, 92 rows.
        assert_eq!(out.lines().count(), 2 + 1 + 5 + 1 + 1 + 92);
    }

    #[test]
    fn bars_never_exceed_width() {
        let mut display = TextDisplay::new(String::new())
            .with_table(true)
            .with_bar_width(10);
        let view = CalculatorInputs::default().recompute().unwrap();
        display.render(&view).unwrap();
        let out = display.into_inner();
        assert!(out.lines().all(|line| line.matches('#').count() <= 10));
        assert!(out.contains("##########"));
    }

    #[test]
    fn invalid_inputs_show_every_problem_and_no_values() {
        let out = render(CalculatorInputs::new(0.0, 70.0), true);
        assert!(out.contains("error: Speed must be a positive number"));
        assert!(out.contains("error: Distance must be between 15 and 60.5 feet"));
        assert!(!out.contains("Reaction Time"));
    }

    #[test]
    fn show_message_two_lines() {
        let mut display = TextDisplay::new(String::new());
        display.show_message("first", Some("second")).unwrap();
        assert_eq!(display.output().as_str(), "error: first\n       second\n");
    }

    #[test]
    fn speed_decimals_capped() {
        let mut display = TextDisplay::new(String::new()).with_speed_decimals(30);
        display
            .render(&CalculatorInputs::default().recompute().unwrap())
            .unwrap();
        assert!(display.output().contains("68.4298 mph"));
    }

    #[test]
    fn huge_speed_keeps_units() {
        let out = render(CalculatorInputs::new(1e18, 15.0), false);
        assert!(out.contains(" mph at 15 ft"));
        assert_eq!(out.matches(" mph\n").count(), 5);
    }
}
