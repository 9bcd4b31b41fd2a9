#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelStatus {
    Sufficient,
    LowFuel,
}

impl FuelStatus {
    pub fn label(self) -> &'static str {
        match self {
            FuelStatus::Sufficient => "Sufficient",
            FuelStatus::LowFuel => "Low Fuel",
        }
    }
}

/// Percentage fuel level that only ever goes down, bottoming out at zero.
#[derive(Debug, Clone)]
pub struct FuelGauge {
    level: u8,
    step: u8,
    low_threshold: u8,
}

impl FuelGauge {
    pub const FULL: u8 = 100;

    pub fn new(initial: u8, step: u8, low_threshold: u8) -> Self {
        Self {
            level: initial.min(Self::FULL),
            step,
            low_threshold,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Burns one step of fuel and returns the remaining level.
    pub fn consume(&mut self) -> u8 {
        self.level = self.level.saturating_sub(self.step);
        self.level
    }

    pub fn status(&self) -> FuelStatus {
        if self.level > self.low_threshold {
            FuelStatus::Sufficient
        } else {
            FuelStatus::LowFuel
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level == 0
    }
}

impl Default for FuelGauge {
    fn default() -> Self {
        Self::new(75, 10, 20)
    }
}
