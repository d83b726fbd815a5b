//! Fault indicator (error LED) abstraction.

/// Output that signals a detected fault to the driver.
pub trait FaultIndicator {
    /// Configure the output and switch it off.
    fn init(&mut self);

    /// Switch the indicator on (`true`) or off (`false`).
    fn set(&mut self, on: bool);

    /// Current state of the indicator.
    fn is_on(&self) -> bool;
}

/// Error LED that records every state it was driven to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockErrorLed {
    initialized: bool,
    on: bool,
    history: Vec<bool>,
}

impl MockErrorLed {
    /// Create an uninitialized, switched-off LED.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once [`init`](FaultIndicator::init) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Every value passed to [`set`](FaultIndicator::set), oldest first.
    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl FaultIndicator for MockErrorLed {
    fn init(&mut self) {
        self.initialized = true;
        self.on = false;
    }

    fn set(&mut self, on: bool) {
        self.on = on;
        self.history.push(on);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
