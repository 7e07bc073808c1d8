use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Blind placement attempts during bootstrap, constrained to [1, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct BootstrapAttempts(u32);

impl BootstrapAttempts {
    const MIN: u32 = 1;
    const MAX: u32 = 100;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BootstrapAttempts {
    fn default() -> Self {
        Self::new(5)
    }
}

impl From<u32> for BootstrapAttempts {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<BootstrapAttempts> for u32 {
    fn from(value: BootstrapAttempts) -> Self {
        value.0
    }
}

/// Candidate points drawn per ring sample, constrained to [1, 1000]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct RingTries(u32);

impl RingTries {
    const MIN: u32 = 1;
    const MAX: u32 = 1000;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RingTries {
    fn default() -> Self {
        Self::new(20)
    }
}

impl From<u32> for RingTries {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<RingTries> for u32 {
    fn from(value: RingTries) -> Self {
        value.0
    }
}

/// Stars a single ring sample may accept, constrained to [1, 64]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct RingAcceptCap(u32);

impl RingAcceptCap {
    const MIN: u32 = 1;
    const MAX: u32 = 64;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RingAcceptCap {
    fn default() -> Self {
        Self::new(7)
    }
}

impl From<u32> for RingAcceptCap {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<RingAcceptCap> for u32 {
    fn from(value: RingAcceptCap) -> Self {
        value.0
    }
}

/// Offset added to the minimum star distance for ring inner radii, constrained to [0.000001, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RingEpsilon(f64);

impl RingEpsilon {
    const MIN: f64 = 0.000_001;
    const MAX: f64 = 1.0;

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for RingEpsilon {
    fn default() -> Self {
        Self::new(0.01)
    }
}

impl From<f64> for RingEpsilon {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<RingEpsilon> for f64 {
    fn from(value: RingEpsilon) -> Self {
        value.0
    }
}
