// ─────────────────────────────────────────────────────────────────────
// Rankine — CLI
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Rankine CLI
//!
//! Computes a chip's CMOS potential factors from its physical
//! characteristics and prints the report to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Size the chip by die area
//! rankine -n 45 -a 40 -f 1000 -t 300
//!
//! # Size the chip by transistor count (millions)
//! rankine -n 14 -c 1750 -f 3500 -t 91
//! ```

use clap::Parser;
use rankine_model::report::{extrapolation_warnings, format_report, power_limit_advisory};
use rankine_model::{compute_factors, derive_parameters, ScalingModel};
use rankine_types::chip::RawChipSpec;
use rankine_types::error::RankineResult;
use std::process::ExitCode;

/// A CMOS potential modeling tool.
#[derive(Parser, Debug)]
#[command(name = "rankine", version, about)]
struct Cli {
    /// CMOS technology node [nm]
    #[arg(short = 'n', long = "cmos-node-nm", value_name = "NODE")]
    cmos_node_nm: f64,

    /// Chip transistor count [millions] (mandatory if die area is not provided)
    #[arg(short = 'c', long = "transistor-count", value_name = "COUNT")]
    transistor_count: Option<f64>,

    /// Chip die area [mm^2] (mandatory if transistor count is not provided)
    #[arg(short = 'a', long = "die-area", value_name = "AREA")]
    die_area: Option<f64>,

    /// Chip thermal design power (TDP) [W]
    #[arg(short = 't', long = "thermal-design-power", value_name = "POWER")]
    thermal_design_power: f64,

    /// Chip frequency [MHz]
    #[arg(short = 'f', long = "chip-frequency", value_name = "FREQ")]
    chip_frequency: f64,
}

impl Cli {
    fn into_spec(self) -> RawChipSpec {
        RawChipSpec {
            node_nm: self.cmos_node_nm,
            transistor_count_millions: self.transistor_count,
            die_area_mm2: self.die_area,
            frequency_mhz: self.chip_frequency,
            tdp_watts: self.thermal_design_power,
        }
    }
}

fn run(cli: Cli) -> RankineResult<()> {
    let raw = cli.into_spec();
    let model = ScalingModel::new();

    for warning in extrapolation_warnings(&raw) {
        eprintln!("{warning}");
    }

    let params = derive_parameters(&raw, &model)?;
    let factors = compute_factors(&params, &model)?;

    if let Some(advisory) = power_limit_advisory(&params, &model) {
        eprintln!("{advisory}");
    }

    print!("{}", format_report(&params, &factors));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
