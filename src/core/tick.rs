//! Simulation tick values.

use serde::{Deserialize, Serialize};

/// One discrete simulation step.
///
/// Ticks start at 0 and increase by exactly 1 per clock advance. Observers
/// only compare them by value ("has this changed since I last looked?").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    /// The initial tick.
    pub const ZERO: Tick = Tick(0);

    /// Create a tick from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw tick value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The tick after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_basics() {
        assert_eq!(Tick::default(), Tick::ZERO);
        assert_eq!(Tick::ZERO.next(), Tick::new(1));
        assert_eq!(Tick::new(7).raw(), 7);
        assert!(Tick::new(2) > Tick::new(1));
        assert_eq!(format!("{}", Tick::new(3)), "Tick(3)");
    }

    #[test]
    fn test_tick_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Tick::new(12)).unwrap(), "12");
        let tick: Tick = serde_json::from_str("4").unwrap();
        assert_eq!(tick, Tick::new(4));
    }
}
