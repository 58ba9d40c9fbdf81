//! Rule variants

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rule variant, fixed at session creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Standard,
    /// Standard play after the Swap2 opening
    Swap2,
    Renju,
    Freestyle,
    /// Double-three and double-four are forbidden for black
    Pro,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Standard,
        Variant::Swap2,
        Variant::Renju,
        Variant::Freestyle,
        Variant::Pro,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Swap2 => "swap2",
            Variant::Renju => "renju",
            Variant::Freestyle => "freestyle",
            Variant::Pro => "pro",
        }
    }

    /// Only Pro checks black's moves for double-three/double-four
    #[inline]
    pub fn enforces_forbidden_moves(self) -> bool {
        self == Variant::Pro
    }

    #[inline]
    pub fn uses_swap2_opening(self) -> bool {
        self == Variant::Swap2
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>().ok(), Some(variant));
        }
        assert_eq!("PRO".parse::<Variant>().ok(), Some(Variant::Pro));
        assert!(matches!(
            "renju-plus".parse::<Variant>(),
            Err(ConfigError::UnknownVariant(name)) if name == "renju-plus"
        ));
    }

    #[test]
    fn test_rule_flags() {
        let forbidding: Vec<_> = Variant::ALL
            .into_iter()
            .filter(|v| v.enforces_forbidden_moves())
            .collect();
        assert_eq!(forbidding, vec![Variant::Pro]);
        assert!(Variant::Swap2.uses_swap2_opening());
        assert!(!Variant::Renju.uses_swap2_opening());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Variant::Swap2).unwrap(), "\"swap2\"");
        assert_eq!(
            serde_json::from_str::<Variant>("\"freestyle\"").unwrap(),
            Variant::Freestyle
        );
    }
}
