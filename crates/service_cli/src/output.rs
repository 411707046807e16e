//! Datasheet output composition.
//!
//! Wraps the rendered datasheet with the reproducibility preamble (seed
//! and generation timestamp) and provides the JSON document alternative.

use chrono::Local;
use serde::Serialize;

use triang_core::types::Draw;
use triang_report::{Datasheet, Flight};

/// Machine-readable datasheet document for `--format json`.
///
/// Carries the same reproducibility metadata as the text preamble
/// alongside the enumerated flights.
#[derive(Debug, Serialize)]
pub struct DatasheetDocument {
    /// Seed the draws were generated from.
    pub seed: u64,
    /// Local generation timestamp.
    pub generated_on: String,
    /// Enumerated flights with global pour serials.
    pub flights: Vec<Flight>,
}

/// Formats the local generation timestamp for both output formats.
fn generated_on() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string()
}

/// Composes the text datasheet: preamble, blank line, then both views.
pub fn render_text(seed: u64, draws: &[Draw]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Seed: {}\n", seed));
    out.push_str(&format!("Generated On: {}\n", generated_on()));
    out.push('\n');
    out.push_str(&Datasheet::build(draws));
    out
}

/// Composes the JSON datasheet document.
pub fn render_json(seed: u64, draws: &[Draw]) -> serde_json::Result<String> {
    let document = DatasheetDocument {
        seed,
        generated_on: generated_on(),
        flights: Datasheet::from_draws(draws).flights().to_vec(),
    };
    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws() -> Vec<Draw> {
        vec![Draw::new(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ])]
    }

    #[test]
    fn test_text_preamble_echoes_seed() {
        let text = render_text(42, &draws());
        assert!(text.starts_with("Seed: 42\nGenerated On: "));

        // Blank line separates the preamble from the datasheet body.
        assert!(text.contains("\n\n1.\t1:A\t2:B\t3:C\t\n"));
    }

    #[test]
    fn test_json_document_shape() {
        let json = render_json(7, &draws()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 7);
        assert_eq!(value["flights"][0]["id"], 1);
        assert_eq!(value["flights"][0]["samples"][2]["serial"], 3);
        assert_eq!(value["flights"][0]["samples"][2]["name"], "C");
        assert!(value["generated_on"].is_string());
    }
}
