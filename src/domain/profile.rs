//! Named screening presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reference parameter set for a screening run.
///
/// Each profile fixes the universe thresholds, the scoring weights and
/// normalizers, the number of ranked candidates kept and the brief given to
/// the decision-maker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Liquid pairs with a moderate move, held for minutes.
    #[default]
    Scalping,
    /// Large movers in a 5-100% band, held for hours.
    Discovery,
}

impl Profile {
    pub const ALL: [Self; 2] = [Self::Scalping, Self::Discovery];

    /// Candidates kept after ranking unless configured otherwise.
    #[must_use]
    pub const fn default_top_k(self) -> usize {
        match self {
            Self::Scalping => 10,
            Self::Discovery => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalping => "scalping",
            Self::Discovery => "discovery",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("unknown profile {s:?} (expected scalping or discovery)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Discovery".parse::<Profile>(), Ok(Profile::Discovery));
        assert_eq!(" scalping ".parse::<Profile>(), Ok(Profile::Scalping));
        assert!("swing".parse::<Profile>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for profile in Profile::ALL {
            assert_eq!(profile.to_string().parse::<Profile>(), Ok(profile));
        }
    }

    #[test]
    fn deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            profile: Profile,
        }
        let parsed: Wrapper = serde_json::from_str(r#"{"profile":"discovery"}"#).unwrap();
        assert_eq!(parsed.profile, Profile::Discovery);
    }
}
