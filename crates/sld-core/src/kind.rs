//! Power-system component kinds.

use core::fmt;
use core::str::FromStr;

/// Kind of a component on a single-line diagram.
///
/// The five named kinds are the ones the rule engine understands. Anything
/// else is kept verbatim in `Other` so it still takes part in connectivity
/// checks while every kind-specific rule ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ComponentKind {
    Source,
    Feeder,
    Breaker,
    Transformer,
    Load,
    Other(String),
}

impl ComponentKind {
    /// Canonical upper-case name (`FEEDER`, `LOAD`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::Source => "SOURCE",
            ComponentKind::Feeder => "FEEDER",
            ComponentKind::Breaker => "BREAKER",
            ComponentKind::Transformer => "TRANSFORMER",
            ComponentKind::Load => "LOAD",
            ComponentKind::Other(name) => name,
        }
    }

    /// One-line description of what the equipment does, for explain views.
    pub fn meaning(&self) -> &'static str {
        match self {
            ComponentKind::Source => "Primary power input to the system",
            ComponentKind::Feeder => "Distributes power to downstream network",
            ComponentKind::Breaker => "Protects and isolates equipment during faults",
            ComponentKind::Transformer => "Steps voltage up or down",
            ComponentKind::Load => "Consumes electrical power",
            ComponentKind::Other(_) => "Unrecognized equipment",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Other(_))
    }
}

impl FromStr for ComponentKind {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for ComponentKind {
    fn from(s: &str) -> Self {
        match s {
            "SOURCE" => ComponentKind::Source,
            "FEEDER" => ComponentKind::Feeder,
            "BREAKER" => ComponentKind::Breaker,
            "TRANSFORMER" => ComponentKind::Transformer,
            "LOAD" => ComponentKind::Load,
            other => ComponentKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ComponentKind {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            ComponentKind::Other(_) => ComponentKind::Other(s),
            known => known,
        }
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_name_survives_string_round_trip(name in ".*") {
            let kind = ComponentKind::from(name.as_str());
            prop_assert_eq!(kind.as_str(), name.as_str());
            let back: String = kind.clone().into();
            prop_assert_eq!(&back, &name);
            prop_assert_eq!(ComponentKind::from(back), kind);
        }

        #[test]
        fn lower_case_names_are_never_known(name in "[a-z]{1,12}") {
            prop_assert!(!ComponentKind::from(name.as_str()).is_known());
        }
    }
}
