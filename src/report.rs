use std::fmt::Write;

use machine_learning::training::SolverConfig;
use serde::Serialize;

use crate::{Result, config::ReportFormat, impact::ImpactWeights};

/// The outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub solver: SolverConfig,
    pub weights: ImpactWeights,
    pub mse: f32,
    pub r2: f32,
}

impl Report {
    /// Renders the report in the given format.
    ///
    /// # Arguments
    /// * `format` - Whether to render the deployment text or a json document.
    ///
    /// # Returns
    /// The rendered report, without a trailing newline.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn text(&self) -> String {
        let w = &self.weights;
        let mut out = String::new();

        // Writing into a `String` never fails.
        let _ = writeln!(out, "--- Model Trained Successfully ---");
        let _ = writeln!(out, "Batting Weight: {:.2}", w.batting);
        let _ = writeln!(out, "Bowling Weight: {:.2}", w.bowling);
        let _ = writeln!(out, "Strike Rate Bonus: {:.2}", w.strike_rate);
        let _ = writeln!(out, "Economy Penalty: {:.2}", w.economy);
        let _ = writeln!(out, "Bias: {:.2}", w.bias);
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Ready for Deployment ---");
        let _ = write!(out, "Copy these weights into MISService.java");

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            solver: SolverConfig::default(),
            weights: ImpactWeights {
                batting: 1.115,
                strike_rate: -0.192,
                bowling: 20.818,
                economy: 1.512,
                bias: 14.231,
            },
            mse: 0.0,
            r2: 1.0,
        }
    }

    #[test]
    fn test_text_report() {
        let text = report().render(ReportFormat::Text).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines,
            [
                "--- Model Trained Successfully ---",
                "Batting Weight: 1.12",
                "Bowling Weight: 20.82",
                "Strike Rate Bonus: -0.19",
                "Economy Penalty: 1.51",
                "Bias: 14.23",
                "",
                "--- Ready for Deployment ---",
                "Copy these weights into MISService.java",
            ]
        );
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_json_report() {
        let json = report().render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["solver"]["kind"], "least_squares");
        assert_eq!(value["solver"]["fit_intercept"], true);
        assert_eq!(value["r2"], 1.0);

        let bowling = value["weights"]["bowling"].as_f64().unwrap();
        assert!((bowling - 20.818).abs() < 1e-4);
        for key in ["batting", "strike_rate", "economy", "bias"] {
            assert!(value["weights"][key].is_number(), "{key}");
        }
    }
}
