//! Calibration data for the device-scaling model.
//!
//! Device scaling combines the circuit-level characterization of
//! Stillmaker & Baas, "Scaling equations for the accurate prediction of
//! CMOS device performance from 180 nm to 7 nm" (Integration, 2017) with
//! projections from the IRDS 2017 roadmap. Cost scaling follows published
//! wafer-cost studies. The transistor-count and power-restriction
//! regressions were fitted on datapoints extracted from datasheets of
//! thousands of commercial processors (CPU DB, TechPowerUp CPU/GPU
//! databases, July 2018).
//!
//! All node-keyed tables are sorted by ascending node [nm].

/// Per-device switching energy [fJ] by node.
pub(crate) const SWITCHING_ENERGY_FJ: &[(f64, f64)] = &[
    (5.0, 0.1),
    (7.0, 0.11),
    (10.0, 0.12),
    (12.0, 0.13),
    (14.0, 0.14),
    (16.0, 0.18),
    (20.0, 0.2),
    (22.0, 0.3),
    (28.0, 0.45),
    (32.0, 0.51),
    (40.0, 1.0),
    (45.0, 1.05),
    (55.0, 1.34),
    (65.0, 1.72),
    (80.0, 2.12),
    (90.0, 2.62),
    (110.0, 3.69),
    (130.0, 5.2),
    (150.0, 11.96),
    (180.0, 27.5),
];

/// Per-device dynamic power at the device-intrinsic frequency [uW] by node.
pub(crate) const DYNAMIC_POWER_UW: &[(f64, f64)] = &[
    (5.0, 46.83),
    (7.0, 44.94),
    (10.0, 37.65),
    (12.0, 36.73),
    (14.0, 35.82),
    (16.0, 29.25),
    (20.0, 20.5),
    (22.0, 30.84),
    (28.0, 46.39),
    (32.0, 52.04),
    (40.0, 94.34),
    (45.0, 96.33),
    (55.0, 91.48),
    (65.0, 86.87),
    (80.0, 92.67),
    (90.0, 98.87),
    (110.0, 121.72),
    (130.0, 149.86),
    (150.0, 231.04),
    (180.0, 356.22),
];

/// Per-device leakage power [uW] by node.
pub(crate) const LEAKAGE_POWER_UW: &[(f64, f64)] = &[
    (5.0, 0.72),
    (7.0, 0.79),
    (10.0, 0.87),
    (12.0, 0.93),
    (14.0, 0.99),
    (16.0, 1.28),
    (20.0, 1.51),
    (22.0, 1.79),
    (28.0, 2.13),
    (32.0, 2.47),
    (40.0, 5.0),
    (45.0, 5.19),
    (55.0, 6.67),
    (65.0, 8.58),
    (80.0, 10.56),
    (90.0, 13.0),
    (110.0, 18.42),
    (130.0, 26.1),
    (150.0, 50.0),
    (180.0, 105.0),
];

/// Intrinsic gate latency [ps] by node.
pub(crate) const GATE_LATENCY_PS: &[(f64, f64)] = &[
    (5.0, 2.16),
    (7.0, 2.47),
    (10.0, 3.24),
    (12.0, 3.61),
    (14.0, 4.02),
    (16.0, 6.12),
    (20.0, 9.66),
    (22.0, 9.68),
    (28.0, 9.7),
    (32.0, 9.8),
    (40.0, 10.6),
    (45.0, 10.9),
    (55.0, 14.69),
    (65.0, 19.8),
    (80.0, 22.91),
    (90.0, 26.5),
    (110.0, 30.32),
    (130.0, 34.7),
    (150.0, 51.76),
    (180.0, 77.2),
];

/// Supply voltage [V] by node.
pub(crate) const VDD_V: &[(f64, f64)] = &[
    (5.0, 0.65),
    (7.0, 0.7),
    (10.0, 0.75),
    (12.0, 0.8),
    (14.0, 0.86),
    (16.0, 0.88),
    (20.0, 0.9),
    (22.0, 0.92),
    (28.0, 0.93),
    (32.0, 0.97),
    (45.0, 0.97),
    (55.0, 1.01),
    (65.0, 1.05),
    (80.0, 1.1),
    (90.0, 1.1),
    (110.0, 1.15),
    (130.0, 1.2),
    (150.0, 1.47),
    (180.0, 1.8),
];

/// Fabrication cost proxy per transistor by node.
pub(crate) const COST_PER_TRANSISTOR: &[(f64, f64)] = &[
    (5.0, 1.65),
    (7.0, 1.52),
    (10.0, 1.45),
    (14.0, 1.43),
    (16.0, 1.43),
    (20.0, 1.54),
    (22.0, 1.67),
    (28.0, 1.3),
    (32.0, 1.94),
    (40.0, 1.94),
    (45.0, 1.94),
    (55.0, 2.34),
    (65.0, 2.82),
    (90.0, 4.01),
    (110.0, 4.75),
    (130.0, 5.63),
    (150.0, 7.91),
];

/// Transistor-count regression `count = exp(B) * (area / node^2)^A`,
/// stored as `[A, B]`. The theoretical number of devices that fit on a die
/// is proportional to `die_area / feature_size^2`; the exponent absorbs
/// wiring and overhead effects observed in commercial designs.
pub(crate) const COUNT_CURVE: [f64; 2] = [0.87650569, 22.33031902];

/// Power-restricted transistor-count regressions, piecewise by node range,
/// stored as `(lowest node of the range, [a, b])` with
/// `count = exp(b) * tdp_w^a / frequency_ghz`.
pub(crate) const TDP_COUNT_CURVES: &[(f64, [f64; 2])] = &[
    (5.0, [0.401658287972, 21.4891760308]),   // 10nm-5nm
    (12.0, [0.557376653843, 20.0141471218]),  // 22nm-12nm
    (28.0, [0.728781502506, 18.4867193491]),  // 32nm-28nm
    (40.0, [0.869396475567, 16.8439598602]),  // 55nm-40nm
    (65.0, [1.0858064719, 15.4524644369]),    // 130nm-65nm
    (150.0, [1.35608520112, 14.175921764]),   // 180nm-150nm
];
