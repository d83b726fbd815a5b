//! Torque controller owning the peripherals and the torque map.

use pedalmap_curves::{Regime, TorqueMap};
use pedalmap_errors::{EvaluationError, SensorFault};
use pedalmap_sensors::{
    AdcDriver, FaultIndicator, PedalAngleReader, PedalDiagnostics, SpeedReader, Speedometer,
    init_channels,
};
use tracing::{error, info, warn};

use crate::report::CycleReport;

/// Runs control cycles against injected drivers.
///
/// The controller is the only component that drives the fault indicator.
/// Readers report faults; the controller lights the indicator and forces
/// torque to zero. The indicator is never switched off again once lit.
#[derive(Debug)]
pub struct TorqueController<A, S, L> {
    map: TorqueMap,
    pedal: PedalAngleReader,
    speed: SpeedReader,
    adc: A,
    speedometer: S,
    indicator: L,
    init_fault: Option<SensorFault>,
}

impl<A, S, L> TorqueController<A, S, L>
where
    A: AdcDriver,
    S: Speedometer,
    L: FaultIndicator,
{
    /// Create a controller with default sensor parameters.
    pub fn new(map: TorqueMap, adc: A, speedometer: S, indicator: L) -> Self {
        Self {
            map,
            pedal: PedalAngleReader::default(),
            speed: SpeedReader::default(),
            adc,
            speedometer,
            indicator,
            init_fault: None,
        }
    }

    /// Replace the pedal and speed readers.
    #[must_use]
    pub fn with_readers(mut self, pedal: PedalAngleReader, speed: SpeedReader) -> Self {
        self.pedal = pedal;
        self.speed = speed;
        self
    }

    /// Initialize the fault indicator and both ADC channels.
    ///
    /// A channel failure lights the indicator and is remembered: every later
    /// cycle reports it and yields zero torque.
    pub fn init(&mut self) -> Option<SensorFault> {
        self.indicator.init();
        self.init_fault = init_channels(&mut self.adc).err();
        if let Some(fault) = self.init_fault {
            error!("ADC initialization failed: {}", fault);
            self.indicator.set(true);
        }
        self.init_fault
    }

    /// Run one acquisition and evaluation cycle.
    ///
    /// Sensor faults do not produce an `Err`; they are part of the report,
    /// with the torque forced to zero.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] if validated sensor values fall outside the
    /// torque map, which only happens when the pedal parameters and the
    /// calibration disagree about full travel. The indicator is lit first.
    pub fn run_cycle(&mut self) -> Result<CycleReport, EvaluationError> {
        if let Some(fault) = self.init_fault {
            return Ok(self.abort(fault, PedalDiagnostics::default(), 0.0));
        }

        let pedal = self.pedal.read(&mut self.adc);
        let speed = self.speed.read(&mut self.speedometer);

        if let Some(fault) = pedal.reading.fault.or(speed.fault) {
            return Ok(self.abort(fault, pedal.diagnostics, speed.value));
        }

        let regime = Regime::for_speed(speed.value);
        let torque_nm = match self.map.evaluate_in(regime, pedal.reading.value) {
            Ok(torque) => torque,
            Err(e) => {
                error!("torque evaluation failed: {}", e);
                self.indicator.set(true);
                return Err(e);
            }
        };

        info!(
            "pedal {:.3}%, speed {:.1} km/h, {} curve -> torque {:.3} Nm",
            pedal.reading.value,
            speed.value,
            regime.name(),
            torque_nm
        );

        Ok(CycleReport {
            pedal: pedal.diagnostics,
            pedal_percent: pedal.reading.value,
            speed_kmh: speed.value,
            regime: Some(regime),
            torque_nm,
            indicator_on: self.indicator.is_on(),
            fault: None,
        })
    }

    fn abort(
        &mut self,
        fault: SensorFault,
        pedal: PedalDiagnostics,
        speed_kmh: f32,
    ) -> CycleReport {
        warn!(
            "fault {} ({}): {}; torque forced to 0",
            fault.code(),
            fault.severity(),
            fault
        );
        self.indicator.set(true);
        CycleReport::faulted(fault, pedal, speed_kmh)
    }

    /// Fault recorded during [`init`](Self::init), if any.
    pub fn init_fault(&self) -> Option<SensorFault> {
        self.init_fault
    }

    /// The torque map in use.
    pub fn map(&self) -> &TorqueMap {
        &self.map
    }

    /// The fault indicator.
    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// Mutable access to the ADC, for reprogramming mocks between cycles.
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Mutable access to the speedometer.
    pub fn speedometer_mut(&mut self) -> &mut S {
        &mut self.speedometer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedalmap_sensors::{AdcChannel, MockAdc, MockErrorLed, MockSpeedometer};

    type MockController = TorqueController<MockAdc, MockSpeedometer, MockErrorLed>;

    fn controller(adc0: u16, adc1: u16, speed: f32) -> MockController {
        let map = match TorqueMap::reference() {
            Ok(map) => map,
            Err(e) => panic!("reference calibration rejected: {e}"),
        };
        let mut adc = MockAdc::new();
        adc.set_output(AdcChannel::Channel0, adc0, true);
        adc.set_output(AdcChannel::Channel1, adc1, true);
        TorqueController::new(map, adc, MockSpeedometer::new(speed), MockErrorLed::new())
    }

    fn cycle(controller: &mut MockController) -> CycleReport {
        match controller.run_cycle() {
            Ok(report) => report,
            Err(e) => panic!("cycle failed: {e}"),
        }
    }

    #[test]
    fn test_demo_cycle_uses_high_curve() {
        let mut controller = controller(103, 205, 100.0);
        assert_eq!(controller.init(), None);
        let report = cycle(&mut controller);
        assert_eq!(report.regime, Some(Regime::High));
        assert!((report.torque_nm + 29.804_497).abs() < 1e-3);
        assert!(!controller.indicator().is_on());
    }

    #[test]
    fn test_init_failure_lights_led_and_forces_zero() {
        let mut controller = controller(409, 450, 0.0);
        controller.adc_mut().fail_init(AdcChannel::Channel1);
        assert_eq!(
            controller.init(),
            Some(SensorFault::AdcInitFailed { channel: 1 })
        );
        assert!(controller.indicator().is_on());

        let report = cycle(&mut controller);
        assert_eq!(report.exit_status(), 0);
        assert_eq!(report.fault.map(|f| f.code), Some(1));
        // no read was attempted after the failed init
        assert_eq!(controller.adc_mut().read_count(AdcChannel::Channel0), 0);
    }

    #[test]
    fn test_speed_fault_forces_zero_torque() {
        let mut controller = controller(409, 450, 130.0);
        controller.init();
        let report = cycle(&mut controller);
        assert!(report.is_faulted());
        assert_eq!(report.exit_status(), 0);
        assert_eq!(report.regime, None);
        assert!(controller.indicator().is_on());
    }

    #[test]
    fn test_pedal_fault_takes_precedence_over_speed_fault() {
        let mut controller = controller(409, 548, 130.0);
        controller.init();
        let report = cycle(&mut controller);
        assert_eq!(report.fault.map(|f| f.code), Some(4));
    }

    #[test]
    fn test_pedal_fault_keeps_valid_speed() {
        let mut controller = controller(409, 548, 60.0);
        controller.init();
        let report = cycle(&mut controller);
        assert_eq!(report.fault.as_ref().map(|f| f.code), Some(4));
        assert_eq!(report.speed_kmh.to_bits(), 60.0_f32.to_bits());
        assert_eq!(report.exit_status(), 0);
    }

    #[test]
    fn test_speed_fault_reports_zero_speed() {
        let mut controller = controller(409, 450, 130.0);
        controller.init();
        let report = cycle(&mut controller);
        assert_eq!(report.speed_kmh.to_bits(), 0.0_f32.to_bits());
    }

    #[test]
    fn test_indicator_stays_lit_after_recovery() {
        let mut controller = controller(409, 450, 130.0);
        controller.init();
        cycle(&mut controller);
        controller.speedometer_mut().set_speed(10.0);
        let report = cycle(&mut controller);
        assert!(!report.is_faulted());
        assert!(report.indicator_on);
        assert!(controller.indicator().is_on());
    }

    #[test]
    fn test_cycle_without_init_reports_read_failure() {
        let mut controller = controller(409, 450, 0.0);
        let report = cycle(&mut controller);
        assert_eq!(report.fault.map(|f| f.code), Some(2));
    }
}
