// ─────────────────────────────────────────────────────────────────────
// Rankine — Chip Description
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Raw and resolved chip descriptions.
//!
//! A `RawChipSpec` is what the user supplies (CLI flags or a JSON file):
//! node, frequency and TDP are mandatory, and at least one of die area /
//! transistor count must be present. Validation collapses the size fields
//! into a `ChipSize`, which the scaling model later resolves into a fully
//! populated `ChipParameters`.

use crate::error::{RankineError, RankineResult};
use serde::{Deserialize, Serialize};

/// User-provided chip description, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawChipSpec {
    /// CMOS technology node [nm].
    pub node_nm: f64,
    /// Chip transistor count [millions]. Mandatory if die area is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transistor_count_millions: Option<f64>,
    /// Chip die area [mm^2]. Mandatory if transistor count is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub die_area_mm2: Option<f64>,
    /// Chip clock frequency [MHz].
    pub frequency_mhz: f64,
    /// Thermal design power [W].
    pub tdp_watts: f64,
}

/// How the chip's size was specified.
///
/// When both area and count are given, both are taken verbatim for their
/// direct uses; they are not cross-checked against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChipSize {
    ByArea(f64),
    ByCount(f64),
    Both { area_mm2: f64, count_millions: f64 },
}

/// Fully resolved physical parameters; immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChipParameters {
    pub node_nm: f64,
    pub transistor_count_millions: f64,
    pub die_area_mm2: f64,
    pub frequency_mhz: f64,
    pub tdp_watts: f64,
}

impl ChipParameters {
    /// Absolute transistor count.
    pub fn transistor_count(&self) -> f64 {
        self.transistor_count_millions * 1.0e6
    }
}

fn require_positive(value: f64, name: &str) -> RankineResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(RankineError::InvalidInput(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

impl RawChipSpec {
    /// Load a chip description from a JSON file.
    pub fn from_file(path: &str) -> RankineResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let spec: Self = serde_json::from_str(&contents)?;
        Ok(spec)
    }

    /// Validate mandatory fields and collapse the size fields.
    ///
    /// Rejects non-positive node / frequency / TDP, non-positive size
    /// values, and the case where neither area nor count was supplied.
    pub fn validate(&self) -> RankineResult<ChipSize> {
        require_positive(self.node_nm, "CMOS node [nm]")?;
        require_positive(self.frequency_mhz, "chip frequency [MHz]")?;
        require_positive(self.tdp_watts, "thermal design power [W]")?;

        match (self.die_area_mm2, self.transistor_count_millions) {
            (None, None) => Err(RankineError::InvalidInput(
                "either chip transistor count or chip die area must be provided".into(),
            )),
            (Some(area), None) => {
                Ok(ChipSize::ByArea(require_positive(area, "die area [mm^2]")?))
            }
            (None, Some(count)) => Ok(ChipSize::ByCount(require_positive(
                count,
                "transistor count [millions]",
            )?)),
            (Some(area), Some(count)) => Ok(ChipSize::Both {
                area_mm2: require_positive(area, "die area [mm^2]")?,
                count_millions: require_positive(count, "transistor count [millions]")?,
            }),
        }
    }
}
