//! End-to-end control cycles on mock peripherals.

use pedalmap_controller::prelude::*;
use pedalmap_sensors::{AdcChannel, PedalAngleReader, PedalSensorConfig, SpeedReader};
use pedalmap_test_helpers::prelude::*;

type MockController = TorqueController<MockAdc, MockSpeedometer, MockErrorLed>;

fn controller(adc0: u16, adc1: u16, speed_kmh: f32) -> MockController {
    let mut adc = MockAdc::new();
    adc.set_output(AdcChannel::Channel0, adc0, true);
    adc.set_output(AdcChannel::Channel1, adc1, true);
    TorqueController::new(
        must(TorqueMap::reference()),
        adc,
        MockSpeedometer::new(speed_kmh),
        MockErrorLed::new(),
    )
}

#[test]
fn demo_cycle() -> TestResult {
    let (adc0, adc1) = DEMO_ADC_COUNTS;
    let mut controller = controller(adc0, adc1, DEMO_SPEED_KMH);
    assert_eq!(controller.init(), None);

    let report = controller.run_cycle()?;
    assert_approx_eq!(report.pedal_percent, 0.097_752, 1e-3);
    assert_approx_eq!(report.speed_kmh, 100.0, 0.0);
    assert_eq!(report.regime, Some(Regime::High));
    assert_torque_eq!(report.torque_nm, -29.804_497);
    assert_eq!(report.exit_status(), 227);
    assert!(!controller.indicator().is_on());
    Ok(())
}

#[test]
fn half_pedal_at_standstill() -> TestResult {
    let mut controller = controller(409, 450, 0.0);
    controller.init();
    let report = controller.run_cycle()?;
    assert_approx_eq!(report.torque_nm, 71.97, 0.01);
    assert_eq!(report.exit_status(), 71);
    Ok(())
}

#[test]
fn divergence_lights_led_and_zeroes_torque() -> TestResult {
    let mut controller = controller(409, 548, 0.0);
    controller.init();
    let report = controller.run_cycle()?;
    assert_eq!(report.fault.as_ref().map(|f| f.code), Some(4));
    assert_approx_eq!(report.torque_nm, 0.0, 0.0);
    assert!(controller.indicator().is_on());
    Ok(())
}

#[test]
fn failed_read_between_cycles() -> TestResult {
    let mut controller = controller(409, 450, 0.0);
    controller.init();
    assert!(!controller.run_cycle()?.is_faulted());

    controller
        .adc_mut()
        .set_output(AdcChannel::Channel0, 409, false);
    let report = controller.run_cycle()?;
    assert_eq!(
        report.fault.map(|f| f.message),
        Some("ADC channel 0 read failed".to_string())
    );
    assert_eq!(controller.indicator().history(), &[true]);
    Ok(())
}

#[test]
fn mismatched_travel_is_an_evaluation_error() {
    // 20 deg of travel makes 30 deg read as 150 %
    let config = PedalSensorConfig {
        full_travel_deg: 20.0,
        ..PedalSensorConfig::default()
    };
    let mut controller = controller(
        config.counts_for_angle(AdcChannel::Channel0, 28.0),
        config.counts_for_angle(AdcChannel::Channel1, 28.0),
        0.0,
    )
    .with_readers(PedalAngleReader::new(config), SpeedReader::default());
    controller.init();

    let result = controller.run_cycle();
    assert!(matches!(result, Err(EvaluationError::AngleOutOfRange { .. })));
    assert!(controller.indicator().is_on());
}

#[test]
fn init_failure_report_json() -> TestResult {
    let mut controller = controller(409, 450, 0.0);
    controller.adc_mut().fail_init(AdcChannel::Channel0);
    controller.init();
    let report = controller.run_cycle()?;

    insta::assert_snapshot!(serde_json::to_string_pretty(&report)?, @r#"
    {
      "pedal": {
        "adc0_counts": 0,
        "adc1_counts": 0,
        "adc0_voltage": 0.0,
        "adc1_voltage": 0.0,
        "angle0_deg": 0.0,
        "angle1_deg": 0.0,
        "angle_deg": 0.0,
        "percent": 0.0
      },
      "pedal_percent": 0.0,
      "speed_kmh": 0.0,
      "torque_nm": 0.0,
      "indicator_on": true,
      "fault": {
        "code": 1,
        "severity": "CRITICAL",
        "message": "ADC channel 0 failed to initialize"
      }
    }
    "#);
    Ok(())
}
