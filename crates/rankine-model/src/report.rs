//! Plaintext report rendering and advisory messages.

use crate::potential::PotentialFactors;
use crate::scaling::ScalingModel;
use rankine_types::chip::{ChipParameters, RawChipSpec};

const RULE: &str =
    "**************************************************************************";

/// Fitted ranges of the datasheet regressions, as (min, max, name, units).
/// Inputs outside these ranges still compute, but the factors are
/// extrapolated rather than interpolated.
const FITTED_RANGES: [(f64, f64, &str, &str); 4] = [
    (1.0, 300.0, "TDP", "W"),
    (10.0, 180.0, "CMOS node", "nm"),
    (50.0, 3000.0, "frequency", "MHz"),
    (10.0, 600.0, "die area", "mm^2"),
];

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Humanize a transistor count: `1.6 Billion`, `159.97 Million`, `512K`.
pub fn count_string(count: f64) -> String {
    if count >= 1.0e9 {
        format!("{} Billion", round2(count / 1.0e9))
    } else if count >= 1.0e6 {
        format!("{} Million", round2(count / 1.0e6))
    } else if count >= 1.0e3 {
        format!("{}K", round2(count / 1.0e3))
    } else {
        format!("{count:.0}")
    }
}

/// Render the fixed-layout report: banner, chip description, then the
/// eight potential factors in their fixed order. Pure formatting.
pub fn format_report(params: &ChipParameters, factors: &PotentialFactors) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(RULE.into());
    line(format!(
        "              RANKINE v{}: A CMOS Potential Modeling Tool",
        env!("CARGO_PKG_VERSION")
    ));
    line(RULE.into());
    line("                                 REPORT".into());
    line(RULE.into());
    line(format!(
        "{}mm^2 {}nm chip with {} transistors clocked at: {}MHz.",
        params.die_area_mm2,
        params.node_nm,
        count_string(params.transistor_count()),
        params.frequency_mhz
    ));
    line(format!(
        "The thermal design power is: {}W.",
        params.tdp_watts
    ));
    line(RULE.into());
    line("                            Potential Factors".into());
    line(RULE.into());
    line(format!("Throughput: {:e}", factors.throughput));
    line(format!(
        "Throughput per Power: {:e}",
        factors.throughput_per_power
    ));
    line(format!(
        "Throughput per Area: {:e}",
        factors.throughput_per_area
    ));
    line(format!(
        "Throughput per Power per Area: {:e}",
        factors.throughput_per_power_per_area
    ));
    line(format!(
        "Throughput per Cost: {:e}",
        factors.throughput_per_cost
    ));
    line(format!("Energy: {:e}", factors.energy));
    line(format!("EDP: {:e}", factors.edp));
    line(format!("ED^2P: {:e}", factors.ed2p));

    out
}

/// One warning per user-supplied input outside the fitted regression
/// ranges. Warnings never abort a run.
pub fn extrapolation_warnings(raw: &RawChipSpec) -> Vec<String> {
    let inputs = [
        Some(raw.tdp_watts),
        Some(raw.node_nm),
        Some(raw.frequency_mhz),
        raw.die_area_mm2,
    ];
    let mut warnings = Vec::new();
    for (value, (min, max, name, units)) in inputs.into_iter().zip(FITTED_RANGES) {
        let Some(value) = value else { continue };
        if value < min || value > max {
            warnings.push(format!(
                "WARNING: out of the evaluated processor datasheets, only few (or none) \
                 had a {name} of {value}{units}. The generated factors are the result of \
                 extrapolation (hence accuracy might be affected)."
            ));
        }
    }
    warnings
}

/// Advisory emitted when the thermal budget cannot keep the whole die
/// switching at the requested frequency.
pub fn power_limit_advisory(params: &ChipParameters, model: &ScalingModel) -> Option<String> {
    let limit = model.power_limited_transistor_count(
        params.node_nm,
        params.frequency_mhz,
        params.tdp_watts,
    );
    let count = params.transistor_count();
    if limit >= count {
        return None;
    }
    let full_activity_w = model.modeled_power_w(count, params.node_nm, params.frequency_mhz);
    Some(format!(
        "NOTE: at {}W and {}MHz the datasheet power regression sustains ~{} active \
         transistors, below the chip's {}; full-activity dissipation would be ~{}W.",
        params.tdp_watts,
        params.frequency_mhz,
        count_string(limit),
        count_string(count),
        round2(full_activity_w)
    ))
}
