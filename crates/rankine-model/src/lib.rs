// ─────────────────────────────────────────────────────────────────────
// Rankine — CMOS Potential Model
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Closed-form CMOS potential metrics for a monolithic silicon chip.
//!
//! Given a chip's physical characteristics (technology node, transistor
//! count or die area, clock frequency, TDP) the model derives a fixed set
//! of potential factors: throughput, throughput per power / area / cost,
//! energy, EDP and ED^2P. The absolute numbers are only meaningful when
//! comparing chips against each other; the point of the model is to expose
//! physical scaling trends, not to predict benchmark scores.

pub mod potential;
pub mod report;
pub mod scaling;
mod tables;

pub use potential::{compute_factors, derive_parameters, PotentialFactors};
pub use scaling::ScalingModel;
