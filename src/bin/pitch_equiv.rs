//! Command line pitch speed equivalency calculator.
//!
//! ```bash
//! # 90 mph from the MLB rubber
//! pitch-equiv --speed 90 --distance 60.5
//!
//! # What does that look like from 46 ft?
//! pitch-equiv --speed 90 --distance 60.5 --target 46
//!
//! # Start from a named level and print every 0.5 ft step
//! pitch-equiv --preset college --table
//! ```

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use pitch_equiv::presentation::TextDisplay;
use pitch_equiv::validation::check_distance;
use pitch_equiv::{
    speed_preset, CalculatorConfig, CalculatorInputs, EquivalencyDisplay,
    EquivalencyQuery, SPEED_PRESETS,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pitch-equiv",
    about = "Pitch speed equivalency calculator",
    long_about = "Find the pitch speeds at other distances that give a batter the same reaction time."
)]
struct Args {
    /// Pitch speed in mph
    #[arg(long, short = 's')]
    speed: Option<f64>,

    /// Distance the speed is thrown from, in feet (15 to 60.5)
    #[arg(long, short = 'd')]
    distance: Option<f64>,

    /// Also print the equivalent speed at this distance (ft)
    #[arg(long, short = 't')]
    target: Option<f64>,

    /// Start from a named speed preset (10u, 12u, high-school, college, mlb-average, mlb-elite)
    #[arg(long, short = 'p', conflicts_with = "speed")]
    preset: Option<String>,

    /// Print the full 15 to 60.5 ft table
    #[arg(long)]
    table: bool,

    /// Width of the table's speed bars, in characters
    #[arg(long, default_value_t = pitch_equiv::presentation::text::DEFAULT_BAR_WIDTH)]
    bar_width: usize,

    /// Digits after the decimal point for speeds
    #[arg(long, default_value = "1")]
    decimals: u8,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    /// Resolve the preset and defaults into calculator inputs.
    fn inputs(&self, defaults: &CalculatorConfig) -> Result<CalculatorInputs> {
        let mut inputs = defaults.initial_inputs();

        if let Some(name) = &self.preset {
            let preset = speed_preset(name).ok_or_else(|| {
                let known: Vec<&str> = SPEED_PRESETS.iter().map(|p| p.name).collect();
                anyhow!("unknown preset '{name}' (expected one of: {})", known.join(", "))
            })?;
            debug!(preset = preset.name, "using speed preset");
            inputs = CalculatorInputs::new(preset.speed_mph, preset.distance_ft);
        }
        if let Some(speed) = self.speed {
            inputs = inputs.with_speed(speed);
        }
        if let Some(distance) = self.distance {
            inputs = inputs.with_distance(distance);
        }
        Ok(inputs)
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let calculator = CalculatorConfig::default().with_speed_decimals(args.decimals);
    let inputs = args.inputs(&calculator)?;
    info!(
        speed_mph = inputs.speed_mph,
        distance_ft = inputs.distance_ft,
        "calculating"
    );

    let decimals = calculator.speed_decimals as usize;
    let mut display = TextDisplay::new(String::new())
        .with_table(args.table)
        .with_bar_width(args.bar_width)
        .with_speed_decimals(decimals);
    let outcome = inputs.recompute();
    display
        .init()
        .and_then(|()| display.present(&outcome))
        .map_err(|_| anyhow!("failed to format output"))?;

    if outcome.is_err() {
        eprint!("{}", display.into_inner());
        return Ok(ExitCode::FAILURE);
    }

    let mut output = display.into_inner();
    if let Some(target) = args.target {
        match target_line(inputs, target, decimals) {
            Ok(line) => output.push_str(&line),
            Err(err) => {
                print!("{output}");
                eprintln!("error: {err:#}");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// One extra line with the equivalent speed at `target_ft`.
fn target_line(inputs: CalculatorInputs, target_ft: f64, decimals: usize) -> Result<String> {
    // The reference pair already passed recompute; only the target is new.
    check_distance(target_ft).context("invalid --target")?;
    let result = EquivalencyQuery::new(inputs.speed_mph, inputs.distance_ft, target_ft)
        .evaluate()
        .with_context(|| format!("no equivalent speed at {target_ft} ft"))?;
    Ok(format!(
        "\nEquivalent speed at {target_ft} ft: {:.*} mph\n",
        decimals, result.speed_mph
    ))
}
