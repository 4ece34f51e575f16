// ─────────────────────────────────────────────────────────────────────
// Rankine — Device Scaling Model
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Node-dependent device scaling, cost scaling and datasheet regressions.
//!
//! All per-node quantities are linearly interpolated between tabulated
//! nodes and clamped at the table ends, so any positive node is accepted.
//! Inputs far outside the fitted ranges are flagged separately as
//! extrapolation (see `report::extrapolation_warnings`).

use crate::tables;

/// Immutable calibration bundle injected into the calculator.
///
/// Holding the tables behind a value (rather than reading module constants
/// at the use sites) keeps the calibration swappable for recalibration
/// studies and testable in isolation.
#[derive(Debug, Clone)]
pub struct ScalingModel {
    switching_energy_fj: &'static [(f64, f64)],
    dynamic_power_uw: &'static [(f64, f64)],
    leakage_power_uw: &'static [(f64, f64)],
    gate_latency_ps: &'static [(f64, f64)],
    vdd_v: &'static [(f64, f64)],
    cost_per_transistor: &'static [(f64, f64)],
    count_curve: [f64; 2],
    tdp_count_curves: &'static [(f64, [f64; 2])],
}

impl Default for ScalingModel {
    fn default() -> Self {
        ScalingModel {
            switching_energy_fj: tables::SWITCHING_ENERGY_FJ,
            dynamic_power_uw: tables::DYNAMIC_POWER_UW,
            leakage_power_uw: tables::LEAKAGE_POWER_UW,
            gate_latency_ps: tables::GATE_LATENCY_PS,
            vdd_v: tables::VDD_V,
            cost_per_transistor: tables::COST_PER_TRANSISTOR,
            count_curve: tables::COUNT_CURVE,
            tdp_count_curves: tables::TDP_COUNT_CURVES,
        }
    }
}

/// Linear interpolation over an ascending node-keyed table, clamped to the
/// first/last entries outside the tabulated range.
fn lookup(table: &[(f64, f64)], node_nm: f64) -> f64 {
    let (first_node, first_val) = table[0];
    if node_nm <= first_node {
        return first_val;
    }
    let (last_node, last_val) = table[table.len() - 1];
    if node_nm >= last_node {
        return last_val;
    }
    for pair in table.windows(2) {
        let (n0, v0) = pair[0];
        let (n1, v1) = pair[1];
        if node_nm <= n1 {
            let t = (node_nm - n0) / (n1 - n0);
            return v0 + t * (v1 - v0);
        }
    }
    last_val
}

impl ScalingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-device switching energy [fJ].
    pub fn switching_energy_fj(&self, node_nm: f64) -> f64 {
        lookup(self.switching_energy_fj, node_nm)
    }

    /// Per-device dynamic power at the device-intrinsic frequency [uW].
    pub fn dynamic_power_uw(&self, node_nm: f64) -> f64 {
        lookup(self.dynamic_power_uw, node_nm)
    }

    /// Per-device leakage power [uW].
    pub fn leakage_power_uw(&self, node_nm: f64) -> f64 {
        lookup(self.leakage_power_uw, node_nm)
    }

    /// Intrinsic gate latency [ps].
    pub fn gate_latency_ps(&self, node_nm: f64) -> f64 {
        lookup(self.gate_latency_ps, node_nm)
    }

    /// Supply voltage [V].
    pub fn vdd_v(&self, node_nm: f64) -> f64 {
        lookup(self.vdd_v, node_nm)
    }

    /// Fabrication cost proxy per transistor.
    pub fn cost_per_transistor(&self, node_nm: f64) -> f64 {
        lookup(self.cost_per_transistor, node_nm)
    }

    /// Device-intrinsic switching frequency [MHz], `1e6 / latency_ps`.
    pub fn device_frequency_mhz(&self, node_nm: f64) -> f64 {
        1.0e6 / self.gate_latency_ps(node_nm)
    }

    /// Absolute transistor count that fits on `die_area_mm2` at `node_nm`,
    /// from the commercial-datasheet regression
    /// `count = exp(B) * (area / node^2)^A`.
    pub fn transistor_count_from_area(&self, die_area_mm2: f64, node_nm: f64) -> f64 {
        let [a, b] = self.count_curve;
        let density_factor = die_area_mm2 / (node_nm * node_nm);
        b.exp() * density_factor.powf(a)
    }

    /// Inverse of `transistor_count_from_area`: the die area [mm^2] a chip
    /// with `count` absolute transistors occupies at `node_nm`.
    pub fn die_area_from_count(&self, count: f64, node_nm: f64) -> f64 {
        let [a, b] = self.count_curve;
        node_nm * node_nm * (count / b.exp()).powf(1.0 / a)
    }

    /// Absolute transistor count sustainable under the given thermal
    /// budget, from the power-restriction regression
    /// `count = exp(b) * tdp^a / f_ghz`. The coefficient row is the one
    /// fitted for the largest tabulated node range at or below `node_nm`;
    /// nodes below the finest range reuse its coefficients.
    pub fn power_limited_transistor_count(
        &self,
        node_nm: f64,
        frequency_mhz: f64,
        tdp_watts: f64,
    ) -> f64 {
        let mut coef = self.tdp_count_curves[0].1;
        for &(range_start, c) in self.tdp_count_curves {
            if node_nm >= range_start {
                coef = c;
            }
        }
        let frequency_ghz = frequency_mhz / 1.0e3;
        coef[1].exp() * tdp_watts.powf(coef[0]) / frequency_ghz
    }

    /// Datasheet-regression estimate of full-activity dissipation [W] for
    /// `count` absolute transistors clocked at `frequency_mhz`. Dynamic
    /// power is scaled down from the device-intrinsic frequency to the
    /// chip frequency; leakage is frequency-independent.
    pub fn modeled_power_w(&self, count: f64, node_nm: f64, frequency_mhz: f64) -> f64 {
        let dynamic_uw =
            self.dynamic_power_uw(node_nm) * frequency_mhz / self.device_frequency_mhz(node_nm);
        let leakage_uw = self.leakage_power_uw(node_nm);
        count * (dynamic_uw + leakage_uw) * 1.0e-6
    }
}
