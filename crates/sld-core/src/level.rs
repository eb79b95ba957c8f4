//! Three-tier rating shared by finding severity and feeder criticality.

use core::fmt;
use core::str::FromStr;

/// HIGH / MEDIUM / LOW.
///
/// Variants are declared in ascending order so `Ord` ranks `High` above `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Severity of a finding.
pub type Severity = Level;
/// Resilience rating of a feeder.
pub type Criticality = Level;

impl Level {
    pub const ALL: [Level; 3] = [Level::High, Level::Medium, Level::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::High => "HIGH",
            Level::Medium => "MEDIUM",
            Level::Low => "LOW",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level: {0} (expected HIGH, MEDIUM or LOW)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Level::High),
            "MEDIUM" => Ok(Level::Medium),
            "LOW" => Ok(Level::Low),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_ranks_high_first() {
        assert!(Level::High > Level::Medium);
        assert!(Level::Medium > Level::Low);
        let mut levels = vec![Level::Low, Level::High, Level::Medium];
        levels.sort_by(|a, b| b.cmp(a));
        assert_eq!(levels, Level::ALL.to_vec());
    }

    #[test]
    fn parse_and_display_agree() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
        assert!("high".parse::<Level>().is_err());
    }
}
