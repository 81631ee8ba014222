use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Origin tag for a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Saavn,
    Youtube,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Saavn => write!(f, "saavn"),
            ProviderId::Youtube => write!(f, "youtube"),
        }
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saavn" => Ok(ProviderId::Saavn),
            "youtube" => Ok(ProviderId::Youtube),
            _ => Err(format!("Invalid provider: '{}'. Valid: saavn, youtube", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("saavn".parse::<ProviderId>(), Ok(ProviderId::Saavn));
        assert_eq!("YouTube".parse::<ProviderId>(), Ok(ProviderId::Youtube));
        assert!("spotify".parse::<ProviderId>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for id in [ProviderId::Saavn, ProviderId::Youtube] {
            assert_eq!(id.to_string().parse::<ProviderId>(), Ok(id));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProviderId::Saavn).unwrap(),
            "\"saavn\""
        );
        assert_eq!(
            serde_json::from_str::<ProviderId>("\"youtube\"").unwrap(),
            ProviderId::Youtube
        );
    }
}
