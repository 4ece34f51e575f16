// ─────────────────────────────────────────────────────────────────────
// Rankine — Potential Factors
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Potential factor computation.
//!
//! The pipeline is a single pass: a validated `RawChipSpec` resolves into
//! `ChipParameters` (deriving whichever of area / transistor count was
//! omitted), and the parameters map to the fixed set of potential factors.
//! Every factor is an independent closed-form function of the parameters.

use crate::scaling::ScalingModel;
use rankine_types::chip::{ChipParameters, ChipSize, RawChipSpec};
use rankine_types::error::{RankineError, RankineResult};

/// The fixed set of potential factors, in report order.
///
/// `energy`, `edp` and `ed2p` form a definitional chain:
/// `energy = tdp / throughput`, `edp = energy / throughput`,
/// `ed2p = edp / throughput`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialFactors {
    pub throughput: f64,
    pub throughput_per_power: f64,
    pub throughput_per_area: f64,
    pub throughput_per_power_per_area: f64,
    pub throughput_per_cost: f64,
    pub energy: f64,
    pub edp: f64,
    pub ed2p: f64,
}

/// Validate a raw chip description and resolve it into full parameters.
///
/// When only one of die area / transistor count is present, the other is
/// derived through the model's count regression. When both are present
/// each is taken verbatim for its direct uses; they are deliberately not
/// reconciled against the regression.
pub fn derive_parameters(
    raw: &RawChipSpec,
    model: &ScalingModel,
) -> RankineResult<ChipParameters> {
    let (die_area_mm2, transistor_count_millions) = match raw.validate()? {
        ChipSize::ByArea(area) => {
            let count = model.transistor_count_from_area(area, raw.node_nm);
            (area, count / 1.0e6)
        }
        ChipSize::ByCount(count_millions) => {
            let area = model.die_area_from_count(count_millions * 1.0e6, raw.node_nm);
            (area, count_millions)
        }
        ChipSize::Both {
            area_mm2,
            count_millions,
        } => (area_mm2, count_millions),
    };

    Ok(ChipParameters {
        node_nm: raw.node_nm,
        transistor_count_millions,
        die_area_mm2,
        frequency_mhz: raw.frequency_mhz,
        tdp_watts: raw.tdp_watts,
    })
}

fn nonzero(value: f64, name: &str) -> RankineResult<f64> {
    if value != 0.0 {
        Ok(value)
    } else {
        Err(RankineError::Domain(format!("{name} is zero")))
    }
}

/// Compute the eight potential factors for a resolved parameter set.
///
/// The zero-denominator checks are defensive only: parameters built
/// through `derive_parameters` cannot reach them.
pub fn compute_factors(
    params: &ChipParameters,
    model: &ScalingModel,
) -> RankineResult<PotentialFactors> {
    let transistors = params.transistor_count();
    let throughput = transistors * params.frequency_mhz;
    let cost = transistors * model.cost_per_transistor(params.node_nm);

    let tdp = nonzero(params.tdp_watts, "thermal design power")?;
    let area = nonzero(params.die_area_mm2, "die area")?;
    let throughput_nz = nonzero(throughput, "throughput")?;
    let cost_nz = nonzero(cost, "fabrication cost")?;

    let throughput_per_power = throughput / tdp;
    let energy = tdp / throughput_nz;
    let edp = energy / throughput_nz;

    Ok(PotentialFactors {
        throughput,
        throughput_per_power,
        throughput_per_area: throughput / area,
        throughput_per_power_per_area: throughput_per_power / area,
        throughput_per_cost: throughput / cost_nz,
        energy,
        edp,
        ed2p: edp / throughput_nz,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(area: Option<f64>, count: Option<f64>) -> RawChipSpec {
        RawChipSpec {
            node_nm: 45.0,
            transistor_count_millions: count,
            die_area_mm2: area,
            frequency_mhz: 1000.0,
            tdp_watts: 300.0,
        }
    }

    #[test]
    fn test_reference_chip() {
        // Documented usage: 40mm^2, 45nm, 1000MHz, 300W.
        let model = ScalingModel::new();
        let params = derive_parameters(&raw(Some(40.0), None), &model).unwrap();
        assert!(
            ((params.transistor_count_millions - 159.973732344) / 159.973732344).abs() < 1e-3,
            "count = {} M",
            params.transistor_count_millions
        );
        let factors = compute_factors(&params, &model).unwrap();
        let expected = 1.59973732344e11;
        assert!(
            ((factors.throughput - expected) / expected).abs() < 1e-3,
            "throughput = {:e}",
            factors.throughput
        );
    }

    #[test]
    fn test_count_only_derives_area() {
        let model = ScalingModel::new();
        let by_area = derive_parameters(&raw(Some(40.0), None), &model).unwrap();
        let by_count =
            derive_parameters(&raw(None, Some(by_area.transistor_count_millions)), &model)
                .unwrap();
        assert!(
            ((by_count.die_area_mm2 - 40.0) / 40.0).abs() < 1e-9,
            "derived area = {}",
            by_count.die_area_mm2
        );
        let f_area = compute_factors(&by_area, &model).unwrap();
        let f_count = compute_factors(&by_count, &model).unwrap();
        assert!(
            ((f_area.throughput - f_count.throughput) / f_area.throughput).abs() < 1e-9,
            "area-first {:e} vs count-first {:e}",
            f_area.throughput,
            f_count.throughput
        );
    }

    #[test]
    fn test_both_sizes_taken_verbatim() {
        // A count wildly inconsistent with the area regression is accepted;
        // each value feeds its own factors.
        let model = ScalingModel::new();
        let params = derive_parameters(&raw(Some(40.0), Some(5000.0)), &model).unwrap();
        assert!((params.die_area_mm2 - 40.0).abs() < 1e-12);
        assert!((params.transistor_count_millions - 5000.0).abs() < 1e-12);
        let factors = compute_factors(&params, &model).unwrap();
        assert!((factors.throughput - 5.0e12).abs() / 5.0e12 < 1e-12);
    }

    #[test]
    fn test_definitional_identities() {
        let model = ScalingModel::new();
        let params = derive_parameters(&raw(Some(40.0), None), &model).unwrap();
        let f = compute_factors(&params, &model).unwrap();

        let rel = |x: f64, y: f64| ((x - y) / y).abs();
        assert!(rel(f.ed2p, f.edp / f.throughput) < 1e-12);
        assert!(rel(f.edp, f.energy / f.throughput) < 1e-12);
        assert!(rel(f.energy, params.tdp_watts / f.throughput) < 1e-12);
        assert!(
            rel(
                f.throughput_per_power_per_area,
                f.throughput_per_power / params.die_area_mm2
            ) < 1e-12
        );
        assert!(rel(f.throughput_per_area, f.throughput / params.die_area_mm2) < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let model = ScalingModel::new();
        let params = derive_parameters(&raw(Some(40.0), None), &model).unwrap();
        let a = compute_factors(&params, &model).unwrap();
        let b = compute_factors(&params, &model).unwrap();
        // Bitwise equality, not tolerance: the computation is closed-form.
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let model = ScalingModel::new();
        let mut bad = raw(Some(40.0), None);
        bad.node_nm = 0.0;
        assert!(matches!(
            derive_parameters(&bad, &model),
            Err(RankineError::InvalidInput(_))
        ));
        assert!(matches!(
            derive_parameters(&raw(None, None), &model),
            Err(RankineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_denominator_is_domain_error() {
        // Only reachable by bypassing derive_parameters.
        let model = ScalingModel::new();
        let params = ChipParameters {
            node_nm: 45.0,
            transistor_count_millions: 160.0,
            die_area_mm2: 40.0,
            frequency_mhz: 1000.0,
            tdp_watts: 0.0,
        };
        assert!(matches!(
            compute_factors(&params, &model),
            Err(RankineError::Domain(_))
        ));

        let params = ChipParameters {
            frequency_mhz: 0.0,
            tdp_watts: 300.0,
            ..params
        };
        assert!(matches!(
            compute_factors(&params, &model),
            Err(RankineError::Domain(_))
        ));
    }
}
