//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use pedalmap_controller::CycleReport;
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error
                .downcast_ref::<CliError>()
                .map_or("internal", CliError::kind)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print a cycle report in the specified format
pub fn print_report(report: &CycleReport, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "exit_status": report.exit_status(),
            "report": report
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format report as JSON: {}", e),
        }
    } else {
        print_report_human(report);
    }
}

fn print_report_human(report: &CycleReport) {
    let pedal = &report.pedal;

    println!("{}", "Pedal".bold());
    println!(
        "  ADC0: {:>4} counts  {:.6} V  {:.6} deg",
        pedal.adc0_counts, pedal.adc0_voltage, pedal.angle0_deg
    );
    println!(
        "  ADC1: {:>4} counts  {:.6} V  {:.6} deg",
        pedal.adc1_counts, pedal.adc1_voltage, pedal.angle1_deg
    );
    println!("  Angle: {:.6} deg", pedal.angle_deg);
    println!("  Angle percentage: {:.6} %", report.pedal_percent);

    println!("{}", "Vehicle".bold());
    println!("  Speed: {:.6} km/h", report.speed_kmh);
    match report.regime {
        Some(regime) => println!("  Torque curve: {}", regime),
        None => println!("  Torque curve: {}", "not evaluated".dimmed()),
    }

    match &report.fault {
        Some(fault) => println!(
            "{} [{} {}] {}",
            "Fault:".red().bold(),
            fault.code,
            fault.severity,
            fault.message.red()
        ),
        None => println!("{} {}", "Fault:".bold(), "none".green()),
    }
    println!(
        "{} {}",
        "Error LED:".bold(),
        if report.indicator_on {
            "ON".red()
        } else {
            "off".green()
        }
    );

    println!(
        "{} {:.6} Nm (exit status {})",
        "Required Torque:".bold(),
        report.torque_nm,
        report.exit_status()
    );
}
