//! ADC driver trait and mock implementation.

use core::fmt;

use pedalmap_errors::SensorFault;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The two redundant pedal position channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdcChannel {
    /// Primary pedal track
    Channel0,
    /// Secondary pedal track with a different transfer function
    Channel1,
}

impl AdcChannel {
    /// Both channels in acquisition order.
    pub const ALL: [AdcChannel; 2] = [AdcChannel::Channel0, AdcChannel::Channel1];

    /// Channel for a numeric index, `None` past the last channel.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(AdcChannel::Channel0),
            1 => Some(AdcChannel::Channel1),
            _ => None,
        }
    }

    /// Numeric channel index as reported in faults.
    pub fn index(self) -> u8 {
        match self {
            AdcChannel::Channel0 => 0,
            AdcChannel::Channel1 => 1,
        }
    }
}

impl fmt::Display for AdcChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ADC{}", self.index())
    }
}

/// Analog-to-digital converter used to sample the pedal tracks.
///
/// Implementations report failures as [`SensorFault::AdcInitFailed`] and
/// [`SensorFault::AdcReadFailed`] carrying the channel index.
pub trait AdcDriver {
    /// Bring up one channel.
    ///
    /// # Errors
    ///
    /// Returns [`SensorFault::AdcInitFailed`] if the channel cannot be used.
    fn init(&mut self, channel: AdcChannel) -> Result<(), SensorFault>;

    /// Sample one channel and return the raw count.
    ///
    /// # Errors
    ///
    /// Returns [`SensorFault::AdcReadFailed`] if the conversion fails.
    fn read(&mut self, channel: AdcChannel) -> Result<u16, SensorFault>;
}

/// Initialize both pedal channels.
///
/// Every channel is attempted even if an earlier one fails; the first failure
/// is returned.
///
/// # Errors
///
/// Returns the first [`SensorFault::AdcInitFailed`] encountered.
pub fn init_channels<A: AdcDriver + ?Sized>(adc: &mut A) -> Result<(), SensorFault> {
    let mut first_failure = None;
    for channel in AdcChannel::ALL {
        if let Err(fault) = adc.init(channel) {
            warn!("{} initialization failed: {}", channel, fault);
            first_failure.get_or_insert(fault);
        }
    }
    first_failure.map_or(Ok(()), Err)
}

/// Programmable state of one mocked channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MockChannel {
    value: u16,
    read_ok: bool,
    init_ok: bool,
    initialized: bool,
    reads: u32,
}

impl Default for MockChannel {
    fn default() -> Self {
        Self {
            value: 0,
            read_ok: true,
            init_ok: true,
            initialized: false,
            reads: 0,
        }
    }
}

/// In-memory ADC for tests and hardware-free runs.
///
/// Each channel returns whatever was programmed with
/// [`set_output`](MockAdc::set_output). Reading a channel that was never
/// initialized fails the same way a real peripheral would.
///
/// # Example
///
/// ```rust
/// use pedalmap_sensors::{AdcChannel, AdcDriver, MockAdc};
///
/// let mut adc = MockAdc::new();
/// adc.set_output(AdcChannel::Channel0, 103, true);
/// adc.init(AdcChannel::Channel0)?;
/// assert_eq!(adc.read(AdcChannel::Channel0)?, 103);
/// # Ok::<(), pedalmap_errors::SensorFault>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockAdc {
    channel0: MockChannel,
    channel1: MockChannel,
}

impl MockAdc {
    /// Create a mock with both channels reading 0 and healthy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an initialized mock returning the given counts.
    #[must_use]
    pub fn with_counts(adc0: u16, adc1: u16) -> Self {
        let mut adc = Self::new();
        adc.set_output(AdcChannel::Channel0, adc0, true);
        adc.set_output(AdcChannel::Channel1, adc1, true);
        adc.channel0.initialized = true;
        adc.channel1.initialized = true;
        adc
    }

    /// Program the next reads of `channel`: the raw count and whether the
    /// conversion succeeds.
    pub fn set_output(&mut self, channel: AdcChannel, value: u16, ok: bool) {
        let state = self.channel_mut(channel);
        state.value = value;
        state.read_ok = ok;
    }

    /// Make the next [`init`](AdcDriver::init) of `channel` fail.
    pub fn fail_init(&mut self, channel: AdcChannel) {
        self.channel_mut(channel).init_ok = false;
    }

    /// True once `channel` has been initialized successfully.
    pub fn is_initialized(&self, channel: AdcChannel) -> bool {
        self.channel(channel).initialized
    }

    /// Number of read attempts on `channel`.
    pub fn read_count(&self, channel: AdcChannel) -> u32 {
        self.channel(channel).reads
    }

    fn channel(&self, channel: AdcChannel) -> &MockChannel {
        match channel {
            AdcChannel::Channel0 => &self.channel0,
            AdcChannel::Channel1 => &self.channel1,
        }
    }

    fn channel_mut(&mut self, channel: AdcChannel) -> &mut MockChannel {
        match channel {
            AdcChannel::Channel0 => &mut self.channel0,
            AdcChannel::Channel1 => &mut self.channel1,
        }
    }
}

impl AdcDriver for MockAdc {
    fn init(&mut self, channel: AdcChannel) -> Result<(), SensorFault> {
        let state = self.channel_mut(channel);
        if !state.init_ok {
            return Err(SensorFault::AdcInitFailed {
                channel: channel.index(),
            });
        }
        state.initialized = true;
        Ok(())
    }

    fn read(&mut self, channel: AdcChannel) -> Result<u16, SensorFault> {
        let state = self.channel_mut(channel);
        state.reads = state.reads.saturating_add(1);
        if !state.initialized || !state.read_ok {
            return Err(SensorFault::AdcReadFailed {
                channel: channel.index(),
            });
        }
        Ok(state.value)
    }
}
