//! ID types for API-Football entities.

use crate::error::{Result, SportyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a numeric newtype with the accessors, `Display` and `FromStr`
/// that every provider id shares.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            pub fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = SportyError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

numeric_id!(
    /// Type-safe wrapper for fixture (match) ids.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sporty::FixtureId;
    ///
    /// let id: FixtureId = "1035037".parse().unwrap();
    /// assert_eq!(id.as_u32(), 1035037);
    /// assert_eq!(id.to_string(), "1035037");
    /// ```
    FixtureId
);

numeric_id!(
    /// Type-safe wrapper for team ids.
    TeamId
);

numeric_id!(
    /// Type-safe wrapper for league ids (39 is the English Premier League).
    LeagueId
);

numeric_id!(
    /// Type-safe wrapper for player ids.
    PlayerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert_eq!("39".parse::<LeagueId>().unwrap(), LeagueId::new(39));
        assert_eq!(" 42 ".parse::<TeamId>().unwrap().as_u32(), 42);
        assert_eq!(PlayerId::new(7).to_string(), "7");
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = "arsenal".parse::<TeamId>().unwrap_err();
        assert!(matches!(err, SportyError::InvalidNumber(_)));
        assert!("-1".parse::<FixtureId>().is_err());
    }

    #[test]
    fn test_serde_transparent_number() {
        let id: FixtureId = serde_json::from_str("1035037").unwrap();
        assert_eq!(id, FixtureId(1035037));
        assert_eq!(serde_json::to_string(&id).unwrap(), "1035037");
    }
}
