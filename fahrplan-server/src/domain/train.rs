//! Train category types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown train type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown train type: {code}")]
pub struct UnknownTrainType {
    code: String,
}

/// Train category short code.
///
/// The five categories the mock timetable draws from, in descending order
/// of fare class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainType {
    /// InterCity Express
    #[serde(rename = "ICE")]
    Ice,
    /// InterCity
    #[serde(rename = "IC")]
    Ic,
    /// EuroCity
    #[serde(rename = "EC")]
    Ec,
    /// Regional-Express
    #[serde(rename = "RE")]
    Re,
    /// Regionalbahn
    #[serde(rename = "RB")]
    Rb,
}

impl TrainType {
    /// All train types, in the order the generator draws from.
    pub const ALL: [TrainType; 5] = [
        TrainType::Ice,
        TrainType::Ic,
        TrainType::Ec,
        TrainType::Re,
        TrainType::Rb,
    ];

    /// Parse a short code like "ICE" or "RB".
    pub fn parse(code: &str) -> Result<Self, UnknownTrainType> {
        match code {
            "ICE" => Ok(TrainType::Ice),
            "IC" => Ok(TrainType::Ic),
            "EC" => Ok(TrainType::Ec),
            "RE" => Ok(TrainType::Re),
            "RB" => Ok(TrainType::Rb),
            _ => Err(UnknownTrainType {
                code: code.to_string(),
            }),
        }
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainType::Ice => "ICE",
            TrainType::Ic => "IC",
            TrainType::Ec => "EC",
            TrainType::Re => "RE",
            TrainType::Rb => "RB",
        }
    }

    /// Base fare in euros for this category.
    ///
    /// ICE services are the most expensive, IC/EC share a fare class,
    /// and regional services are the cheapest.
    pub fn base_fare(&self) -> f64 {
        match self {
            TrainType::Ice => 59.90,
            TrainType::Ic | TrainType::Ec => 49.90,
            TrainType::Re | TrainType::Rb => 29.90,
        }
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for tt in TrainType::ALL {
            assert_eq!(TrainType::parse(tt.as_str()).unwrap(), tt);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(TrainType::parse("TGV").is_err());
        assert!(TrainType::parse("ice").is_err());
        assert!(TrainType::parse("").is_err());
    }

    #[test]
    fn fare_classes() {
        assert_eq!(TrainType::Ice.base_fare(), 59.90);
        assert_eq!(TrainType::Ic.base_fare(), 49.90);
        assert_eq!(TrainType::Ec.base_fare(), 49.90);
        assert_eq!(TrainType::Re.base_fare(), 29.90);
        assert_eq!(TrainType::Rb.base_fare(), 29.90);
    }

    #[test]
    fn serde_uses_short_codes() {
        let json = serde_json::to_string(&TrainType::Ice).unwrap();
        assert_eq!(json, "\"ICE\"");
        let back: TrainType = serde_json::from_str("\"RB\"").unwrap();
        assert_eq!(back, TrainType::Rb);
    }
}
