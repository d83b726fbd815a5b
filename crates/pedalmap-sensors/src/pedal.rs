//! Dual-channel pedal angle acquisition and plausibility checking.
//!
//! Each pedal track is sampled by its own ADC channel and has its own
//! linear voltage-to-angle transfer function. A sample is accepted only if
//! both channel angles lie within the mechanical travel and the channels
//! agree to within [`PedalSensorConfig::max_divergence_deg`]. The accepted
//! angle is the mean of both channels, expressed in percent of full travel.

use pedalmap_errors::SensorFault;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::adc::{AdcChannel, AdcDriver};
use crate::reading::SensorReading;

/// Linear transfer function `angle = (V - offset_v) / volts_per_degree`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelTransfer {
    /// Output voltage at 0 degrees
    pub offset_v: f32,
    /// Voltage change per degree of pedal travel
    pub volts_per_degree: f32,
}

impl ChannelTransfer {
    /// Create a transfer function.
    pub const fn new(offset_v: f32, volts_per_degree: f32) -> Self {
        Self {
            offset_v,
            volts_per_degree,
        }
    }

    /// Pedal angle in degrees for a channel voltage.
    #[inline]
    pub fn angle_for_voltage(&self, volts: f32) -> f32 {
        (volts - self.offset_v) / self.volts_per_degree
    }

    /// Channel voltage produced at a pedal angle.
    #[inline]
    pub fn voltage_for_angle(&self, angle_deg: f32) -> f32 {
        angle_deg * self.volts_per_degree + self.offset_v
    }
}

/// Electrical and mechanical parameters of the pedal sensor pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PedalSensorConfig {
    /// Full-scale ADC count
    pub adc_max_count: u16,
    /// ADC reference voltage
    pub reference_voltage: f32,
    /// Transfer function of channel 0
    pub channel0: ChannelTransfer,
    /// Transfer function of channel 1
    pub channel1: ChannelTransfer,
    /// Lowest plausible channel angle
    pub min_angle_deg: f32,
    /// Highest plausible channel angle
    pub max_angle_deg: f32,
    /// Largest tolerated difference between the two channel angles
    pub max_divergence_deg: f32,
    /// Angle that corresponds to 100 % pedal travel
    pub full_travel_deg: f32,
}

impl Default for PedalSensorConfig {
    fn default() -> Self {
        Self {
            adc_max_count: 1023,
            reference_voltage: 5.0,
            channel0: ChannelTransfer::new(0.5, 0.1),
            channel1: ChannelTransfer::new(1.0, 0.08),
            min_angle_deg: 0.0,
            max_angle_deg: 30.0,
            max_divergence_deg: 5.0,
            full_travel_deg: 30.0,
        }
    }
}

impl PedalSensorConfig {
    /// Transfer function of a channel.
    pub fn transfer(&self, channel: AdcChannel) -> ChannelTransfer {
        match channel {
            AdcChannel::Channel0 => self.channel0,
            AdcChannel::Channel1 => self.channel1,
        }
    }

    /// Voltage represented by a raw ADC count.
    ///
    /// ```
    /// use pedalmap_sensors::PedalSensorConfig;
    ///
    /// let config = PedalSensorConfig::default();
    /// assert!((config.voltage(1023) - 5.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn voltage(&self, counts: u16) -> f32 {
        f32::from(counts) * self.reference_voltage / f32::from(self.adc_max_count)
    }

    /// Pedal angle in degrees computed from a raw count on `channel`.
    #[inline]
    pub fn channel_angle(&self, channel: AdcChannel, counts: u16) -> f32 {
        self.transfer(channel).angle_for_voltage(self.voltage(counts))
    }

    /// Raw count nearest to the one `channel` produces at `angle_deg`.
    ///
    /// Clamped to the ADC range. Used to program mock ADCs.
    pub fn counts_for_angle(&self, channel: AdcChannel, angle_deg: f32) -> u16 {
        let volts = self.transfer(channel).voltage_for_angle(angle_deg);
        let max = f32::from(self.adc_max_count);
        let counts = (volts * max / self.reference_voltage).round().clamp(0.0, max);
        u16::try_from(counts as i32).unwrap_or(self.adc_max_count)
    }

    /// Percentage of full travel for an averaged angle.
    #[inline]
    pub fn percent_of_travel(&self, angle_deg: f32) -> f32 {
        angle_deg * 100.0 / self.full_travel_deg
    }
}

/// Check both channel angles and return their mean in degrees.
///
/// Channel 0 is range-checked first, then channel 1, then the divergence.
///
/// # Errors
///
/// Returns [`SensorFault::AngleOutOfRange`] for the first channel outside
/// `[min_angle_deg, max_angle_deg]` (NaN included), or
/// [`SensorFault::ChannelDivergence`] if the channels differ by more than
/// `max_divergence_deg`.
///
/// # Example
///
/// ```
/// use pedalmap_errors::SensorFault;
/// use pedalmap_sensors::{PedalSensorConfig, check_plausibility};
///
/// let config = PedalSensorConfig::default();
/// assert_eq!(check_plausibility(10.0, 12.0, &config), Ok(11.0));
/// assert!(matches!(
///     check_plausibility(10.0, 16.0, &config),
///     Err(SensorFault::ChannelDivergence { .. })
/// ));
/// ```
pub fn check_plausibility(
    angle0_deg: f32,
    angle1_deg: f32,
    config: &PedalSensorConfig,
) -> Result<f32, SensorFault> {
    let travel = config.min_angle_deg..=config.max_angle_deg;
    for (channel, angle_deg) in [(AdcChannel::Channel0, angle0_deg), (AdcChannel::Channel1, angle1_deg)] {
        if !travel.contains(&angle_deg) {
            return Err(SensorFault::AngleOutOfRange {
                channel: channel.index(),
                angle_deg,
                min_deg: config.min_angle_deg,
                max_deg: config.max_angle_deg,
            });
        }
    }

    let difference_deg = (angle0_deg - angle1_deg).abs();
    if difference_deg > config.max_divergence_deg {
        return Err(SensorFault::ChannelDivergence { difference_deg });
    }

    Ok((angle0_deg + angle1_deg) / 2.0)
}

/// Intermediate values of one pedal acquisition.
///
/// Fields that were not reached before a fault stay at `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PedalDiagnostics {
    /// Raw count of channel 0
    pub adc0_counts: u16,
    /// Raw count of channel 1
    pub adc1_counts: u16,
    /// Channel 0 voltage
    pub adc0_voltage: f32,
    /// Channel 1 voltage
    pub adc1_voltage: f32,
    /// Angle derived from channel 0
    pub angle0_deg: f32,
    /// Angle derived from channel 1
    pub angle1_deg: f32,
    /// Mean of both channel angles
    pub angle_deg: f32,
    /// Pedal position in percent of full travel
    pub percent: f32,
}

/// A pedal reading together with its diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PedalSample {
    /// Pedal angle in percent, or `0.0` with a fault
    pub reading: SensorReading,
    /// Intermediate conversion values
    pub diagnostics: PedalDiagnostics,
}

/// Reads the pedal position from two redundant ADC channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PedalAngleReader {
    config: PedalSensorConfig,
}

impl PedalAngleReader {
    /// Create a reader for the given sensor parameters.
    pub fn new(config: PedalSensorConfig) -> Self {
        Self { config }
    }

    /// Sensor parameters in use.
    pub fn config(&self) -> &PedalSensorConfig {
        &self.config
    }

    /// Sample both channels and convert them into a pedal percentage.
    ///
    /// Both channels are always sampled. A failed read yields
    /// [`SensorFault::AdcReadFailed`] for the first failing channel and
    /// leaves the conversions unset.
    pub fn read<A: AdcDriver + ?Sized>(&self, adc: &mut A) -> PedalSample {
        let mut diagnostics = PedalDiagnostics::default();
        let counts0 = adc.read(AdcChannel::Channel0);
        let counts1 = adc.read(AdcChannel::Channel1);

        let reading = match (counts0, counts1) {
            (Ok(adc0), Ok(adc1)) => {
                self.convert(adc0, adc1, &mut diagnostics);
                check_plausibility(diagnostics.angle0_deg, diagnostics.angle1_deg, &self.config)
                    .map(|angle_deg| {
                        diagnostics.angle_deg = angle_deg;
                        diagnostics.percent = self.config.percent_of_travel(angle_deg);
                        diagnostics.percent
                    })
            }
            (Err(fault), _) | (Ok(_), Err(fault)) => Err(fault),
        };

        debug!(
            "pedal: adc0 {:.4} V ({:.4} deg), adc1 {:.4} V ({:.4} deg), angle {:.4} deg = {:.4}%",
            diagnostics.adc0_voltage,
            diagnostics.angle0_deg,
            diagnostics.adc1_voltage,
            diagnostics.angle1_deg,
            diagnostics.angle_deg,
            diagnostics.percent
        );
        if let Err(fault) = reading {
            warn!("pedal fault (code {}): {}", fault.code(), fault);
        }

        PedalSample {
            reading: SensorReading::from(reading),
            diagnostics,
        }
    }

    fn convert(&self, adc0: u16, adc1: u16, diagnostics: &mut PedalDiagnostics) {
        diagnostics.adc0_counts = adc0;
        diagnostics.adc1_counts = adc1;
        diagnostics.adc0_voltage = self.config.voltage(adc0);
        diagnostics.adc1_voltage = self.config.voltage(adc1);
        diagnostics.angle0_deg = self
            .config
            .transfer(AdcChannel::Channel0)
            .angle_for_voltage(diagnostics.adc0_voltage);
        diagnostics.angle1_deg = self
            .config
            .transfer(AdcChannel::Channel1)
            .angle_for_voltage(diagnostics.adc1_voltage);
    }
}
