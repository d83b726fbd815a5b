//! pedalmap - pedal-to-torque controller demo
//!
//! Runs one control cycle of the pedal-to-torque controller against mock
//! peripherals and exits with the requested torque as process status.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod demo;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pedalmap_controller::CycleReport;
use pedalmap_curves::ControlPointSet;
use pedalmap_sensors::AdcChannel;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::demo::DemoInputs;
use crate::error::CliError;

/// Largest count of the 10-bit pedal ADC.
const ADC_MAX_COUNT: i64 = 1023;

#[derive(Parser, Debug)]
#[command(name = "pedalmap")]
#[command(about = "Map a redundant pedal reading and vehicle speed to a torque request")]
#[command(version)]
#[command(long_about = "
pedalmap runs one control cycle on mock peripherals: it samples both pedal
ADC channels, checks their plausibility, reads the vehicle speed and looks up
the torque on the speed-dependent curve. Any sensor fault lights the error
LED and forces the torque to zero.

The process exits with the torque truncated to an integer and wrapped to
8 bits, so -29 Nm exits with 227.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(long, help = "Output in JSON format for machine parsing")]
    json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Raw count returned by pedal ADC channel 0
    #[arg(long, default_value_t = 103, value_parser = clap::value_parser!(u16).range(0..=ADC_MAX_COUNT))]
    adc0: u16,

    /// Raw count returned by pedal ADC channel 1
    #[arg(long, default_value_t = 205, value_parser = clap::value_parser!(u16).range(0..=ADC_MAX_COUNT))]
    adc1: u16,

    /// Vehicle speed reported by the speedometer, in km/h
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    speed: f32,

    /// JSON file with `breakpoints`, `low` and `high` control points
    #[arg(long, env = "PEDALMAP_CALIBRATION", value_name = "PATH")]
    calibration: Option<PathBuf>,

    /// Make initialization of an ADC channel fail
    #[arg(long, value_name = "CHANNEL", value_parser = parse_channel)]
    fail_init: Option<AdcChannel>,

    /// Make reads of an ADC channel fail
    #[arg(long, value_name = "CHANNEL", value_parser = parse_channel)]
    fail_read: Option<AdcChannel>,
}

impl Cli {
    fn inputs(&self) -> DemoInputs {
        DemoInputs {
            adc0: self.adc0,
            adc1: self.adc1,
            speed_kmh: self.speed,
            fail_init: self.fail_init,
            fail_read: self.fail_read,
        }
    }
}

fn parse_channel(value: &str) -> Result<AdcChannel, String> {
    value
        .parse::<u8>()
        .ok()
        .and_then(AdcChannel::from_index)
        .ok_or_else(|| format!("`{value}` is not an ADC channel (expected 0 or 1)"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(&cli) {
        Ok(report) => {
            output::print_report(&report, cli.json);
            ExitCode::from(report.exit_status())
        }
        Err(e) => {
            error!("{}", e);
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute(cli: &Cli) -> Result<CycleReport> {
    let points = match &cli.calibration {
        Some(path) => demo::load_calibration(path)?,
        None => ControlPointSet::reference(),
    };
    Ok(demo::run_cycle(&points, &cli.inputs())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_defaults_reproduce_demo() -> TestResult {
        let cli = Cli::try_parse_from(["pedalmap"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert_eq!((cli.adc0, cli.adc1), (103, 205));
        assert!((cli.speed - 100.0).abs() < f32::EPSILON);
        assert!(cli.calibration.is_none());
        assert_eq!(cli.fail_init, None);
        assert_eq!(cli.fail_read, None);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        assert_eq!(Cli::try_parse_from(["pedalmap", "-v"])?.verbose, 1);
        assert_eq!(Cli::try_parse_from(["pedalmap", "-vvv"])?.verbose, 3);
        Ok(())
    }

    #[test]
    fn parse_negative_speed() -> TestResult {
        let cli = Cli::try_parse_from(["pedalmap", "--speed", "-5"])?;
        assert!((cli.speed + 5.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn parse_rejects_counts_above_ten_bits() {
        assert!(Cli::try_parse_from(["pedalmap", "--adc0", "1024"]).is_err());
    }

    #[test]
    fn parse_fault_injection_channels() -> TestResult {
        let cli = Cli::try_parse_from(["pedalmap", "--fail-init", "1", "--fail-read", "0"])?;
        assert_eq!(cli.fail_init, Some(AdcChannel::Channel1));
        assert_eq!(cli.fail_read, Some(AdcChannel::Channel0));
        assert!(Cli::try_parse_from(["pedalmap", "--fail-read", "2"]).is_err());
        Ok(())
    }

    #[test]
    fn inputs_follow_flags() -> TestResult {
        let cli = Cli::try_parse_from(["pedalmap", "--adc0", "409", "--adc1", "450", "--speed", "0"])?;
        let inputs = cli.inputs();
        assert_eq!((inputs.adc0, inputs.adc1), (409, 450));
        assert!(inputs.speed_kmh.abs() < f32::EPSILON);
        Ok(())
    }
}
