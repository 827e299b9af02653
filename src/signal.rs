//! The fixed catalog of selectable signals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four selectable pads.
///
/// Catalog order is `Green, Red, Yellow, Blue`; [`Signal::ALL`] and
/// [`Signal::index`] follow it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Signal {
    /// Every signal, in catalog order.
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Yellow, Signal::Blue];

    /// Size of the catalog.
    pub const COUNT: usize = Self::ALL.len();

    /// Tone played while the signal is active, in hertz.
    pub fn tone_hz(self) -> f32 {
        match self {
            Signal::Green => 523.25,
            Signal::Red => 659.25,
            Signal::Yellow => 783.99,
            Signal::Blue => 880.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Yellow => "yellow",
            Signal::Blue => "blue",
        }
    }

    /// Position in catalog order.
    pub fn index(self) -> usize {
        match self {
            Signal::Green => 0,
            Signal::Red => 1,
            Signal::Yellow => 2,
            Signal::Blue => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Signal> {
        Self::ALL.get(index).copied()
    }

    /// Look a signal up by name, ignoring ASCII case and surrounding
    /// whitespace. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Signal> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned by [`Signal::from_str`] for names outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown signal '{0}'")]
pub struct UnknownSignal(pub String);

impl FromStr for Signal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signal::from_name(s).ok_or_else(|| UnknownSignal(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_four_distinct_signals() {
        let unique: HashSet<Signal> = Signal::ALL.into_iter().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(Signal::COUNT, 4);
    }

    #[test]
    fn index_round_trips_through_catalog() {
        for (i, signal) in Signal::ALL.into_iter().enumerate() {
            assert_eq!(signal.index(), i);
            assert_eq!(Signal::from_index(i), Some(signal));
        }
        assert_eq!(Signal::from_index(4), None);
    }

    #[test]
    fn tones_rise_in_catalog_order() {
        let tones: Vec<f32> = Signal::ALL.iter().map(|s| s.tone_hz()).collect();
        assert!(tones.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Signal::Blue.tone_hz(), 880.0);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Signal::from_name("Yellow"), Some(Signal::Yellow));
        assert_eq!(Signal::from_name(" blue "), Some(Signal::Blue));
        assert_eq!("red".parse::<Signal>(), Ok(Signal::Red));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Signal::from_name("purple"), None);
        assert_eq!(
            "purple".parse::<Signal>(),
            Err(UnknownSignal("purple".to_string()))
        );
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&Signal::Green).unwrap(), "\"green\"");
        let parsed: Signal = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(parsed, Signal::Blue);
    }
}
