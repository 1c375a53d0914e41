//! Core data types: the High/Low outcome class, the published round record
//! and the forecast produced by the ensemble predictor.

use serde::{Deserialize, Serialize};

/// Binary class of a resolved round: High ("Tài") when the 3-die total is
/// strictly greater than 10, Low ("Xỉu") otherwise.
///
/// Serialized with the upstream feed's labels so persisted history and the
/// REST API stay wire-compatible with existing consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Tài")]
    High,
    #[serde(rename = "Xỉu")]
    Low,
}

impl Outcome {
    /// Compact single-character symbol used in pattern strings.
    pub fn symbol(self) -> char {
        match self {
            Outcome::High => 't',
            Outcome::Low => 'x',
        }
    }

    /// Human-readable label, as published on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::High => "Tài",
            Outcome::Low => "Xỉu",
        }
    }
}

/// Next-outcome forecast from the ensemble predictor.
///
/// `confidence` is the winning side's percentage in [50, 100]; it is
/// rendered to one decimal place on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub outcome: Outcome,
    pub confidence: f64,
}

impl Forecast {
    /// Wire rendering of the confidence, e.g. `"57.4%"`.
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence)
    }
}

/// One fully resolved round, created exactly once per unique session id and
/// never mutated afterwards.
///
/// Field names are renamed to the legacy JSON shape (`Phien` = session,
/// `Xuc_xac` = die, `Tong` = total, `Ket_qua` = result, `Du_doan` =
/// prediction, `Do_tin_cay` = confidence).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub id: String,
    #[serde(rename = "Phien")]
    pub session: u64,
    #[serde(rename = "Xuc_xac_1")]
    pub die_1: u32,
    #[serde(rename = "Xuc_xac_2")]
    pub die_2: u32,
    #[serde(rename = "Xuc_xac_3")]
    pub die_3: u32,
    #[serde(rename = "Tong")]
    pub total: u32,
    #[serde(rename = "Ket_qua")]
    pub outcome: Outcome,
    #[serde(rename = "Pattern")]
    pub pattern: String,
    #[serde(rename = "Du_doan")]
    pub predicted: Outcome,
    #[serde(rename = "Do_tin_cay")]
    pub confidence: String,
    #[serde(rename = "Streak")]
    pub streak: String,
}
