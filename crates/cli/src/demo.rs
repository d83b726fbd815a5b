//! Mock peripheral setup for a single control cycle

use std::path::Path;

use pedalmap_controller::{CycleReport, TorqueController};
use pedalmap_curves::{ControlPointSet, TorqueMap};
use pedalmap_sensors::{AdcChannel, MockAdc, MockErrorLed, MockSpeedometer};
use tracing::{debug, info};

use crate::error::CliError;

/// Inputs programmed into the mock peripherals.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoInputs {
    pub adc0: u16,
    pub adc1: u16,
    pub speed_kmh: f32,
    pub fail_init: Option<AdcChannel>,
    pub fail_read: Option<AdcChannel>,
}

/// Load control points from a JSON file.
///
/// The file holds `breakpoints`, `low` and `high` integer arrays and is
/// validated while it is parsed.
pub fn load_calibration(path: &Path) -> Result<ControlPointSet, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::CalibrationRead {
        path: path.to_path_buf(),
        source,
    })?;
    let points: ControlPointSet =
        serde_json::from_str(&text).map_err(|source| CliError::CalibrationParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "loaded {} control points from {}",
        points.len(),
        path.display()
    );
    Ok(points)
}

/// Program the mocks, initialize the controller and run one cycle.
pub fn run_cycle(points: &ControlPointSet, inputs: &DemoInputs) -> Result<CycleReport, CliError> {
    let map = TorqueMap::from_control_points(points)?;

    let mut adc = MockAdc::new();
    adc.set_output(AdcChannel::Channel0, inputs.adc0, true);
    adc.set_output(AdcChannel::Channel1, inputs.adc1, true);
    if let Some(channel) = inputs.fail_init {
        adc.fail_init(channel);
    }
    if let Some(channel) = inputs.fail_read {
        let value = match channel {
            AdcChannel::Channel0 => inputs.adc0,
            AdcChannel::Channel1 => inputs.adc1,
        };
        adc.set_output(channel, value, false);
    }
    debug!("mock inputs: {:?}", inputs);

    let mut controller = TorqueController::new(
        map,
        adc,
        MockSpeedometer::new(inputs.speed_kmh),
        MockErrorLed::new(),
    );
    controller.init();
    Ok(controller.run_cycle()?)
}
