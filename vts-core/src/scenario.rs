//! Driving scenarios

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named driving-behavior profile
///
/// Controls how target speeds are sampled and whether anomaly overrides
/// (wrong gear, lugging) are injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioTag {
    City,
    Highway,
    Mixed,
    Aggressive,
    Inefficient,
    Idle,
}

impl ScenarioTag {
    pub const ALL: [ScenarioTag; 6] = [
        ScenarioTag::City,
        ScenarioTag::Highway,
        ScenarioTag::Mixed,
        ScenarioTag::Aggressive,
        ScenarioTag::Inefficient,
        ScenarioTag::Idle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioTag::City => "city",
            ScenarioTag::Highway => "highway",
            ScenarioTag::Mixed => "mixed",
            ScenarioTag::Aggressive => "aggressive",
            ScenarioTag::Inefficient => "inefficient",
            ScenarioTag::Idle => "idle",
        }
    }
}

impl fmt::Display for ScenarioTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioTag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ScenarioTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| ConfigError::UnknownScenario(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for tag in ScenarioTag::ALL {
            assert_eq!(tag.as_str().parse::<ScenarioTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Highway ".parse::<ScenarioTag>().unwrap(), ScenarioTag::Highway);
    }

    #[test]
    fn test_parse_unknown_is_config_error() {
        let err = "offroad".parse::<ScenarioTag>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownScenario("offroad".to_string()));
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ScenarioTag::Inefficient).unwrap();
        assert_eq!(json, "\"inefficient\"");
    }
}
