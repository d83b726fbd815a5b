//! Acquisition scenarios across the mock drivers.

use pedalmap_errors::SensorFault;
use pedalmap_sensors::prelude::*;
use pedalmap_test_helpers::prelude::*;

#[test]
fn demo_counts_are_plausible() {
    let (adc0, adc1) = DEMO_ADC_COUNTS;
    let sample = PedalAngleReader::default().read(&mut MockAdc::with_counts(adc0, adc1));
    assert_eq!(sample.reading.fault, None);
    assert_approx_eq!(sample.diagnostics.angle0_deg, 0.034_213, 1e-3);
    assert_approx_eq!(sample.diagnostics.angle1_deg, 0.024_437, 1e-3);
    assert_approx_eq!(sample.reading.value, 0.097_752, 1e-3);
}

#[test]
fn six_degree_divergence_is_a_fault() -> TestResult {
    let config = PedalSensorConfig::default();
    let mut adc = MockAdc::new();
    adc.set_output(AdcChannel::Channel0, config.counts_for_angle(AdcChannel::Channel0, 10.0), true);
    adc.set_output(AdcChannel::Channel1, config.counts_for_angle(AdcChannel::Channel1, 16.0), true);
    init_channels(&mut adc)?;

    let sample = PedalAngleReader::new(config).read(&mut adc);
    match sample.reading.fault {
        Some(SensorFault::ChannelDivergence { difference_deg }) => {
            assert_approx_eq!(difference_deg, 6.0, 0.05);
        }
        other => return Err(format!("expected divergence fault, got {other:?}").into()),
    }
    assert_approx_eq!(sample.reading.value, 0.0, 0.0);
    Ok(())
}

#[test]
fn uninitialized_adc_reports_read_failure() {
    let mut adc = MockAdc::new();
    adc.set_output(AdcChannel::Channel0, 409, true);
    adc.set_output(AdcChannel::Channel1, 450, true);
    let sample = PedalAngleReader::default().read(&mut adc);
    assert_eq!(
        sample.reading.fault,
        Some(SensorFault::AdcReadFailed { channel: 0 })
    );
}

#[test]
fn failed_init_is_reported_per_channel() {
    let mut adc = MockAdc::new();
    adc.fail_init(AdcChannel::Channel1);
    assert_eq!(
        init_channels(&mut adc),
        Err(SensorFault::AdcInitFailed { channel: 1 })
    );
}

#[test]
fn demo_speed_is_valid() {
    let reading = SpeedReader::default().read(&mut MockSpeedometer::new(DEMO_SPEED_KMH));
    assert_eq!(reading.into_result(), Ok(DEMO_SPEED_KMH));
}

#[test]
fn error_led_follows_caller() {
    let mut led = MockErrorLed::new();
    led.init();
    let sample = PedalAngleReader::default().read(&mut MockAdc::with_counts(409, 548));
    led.set(sample.reading.is_faulted());
    assert!(led.is_on());
    assert_eq!(led.history(), &[true]);
}
