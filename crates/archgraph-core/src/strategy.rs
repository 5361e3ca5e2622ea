//! Layout strategy selection.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Available layout strategies for positioning graph nodes.
///
/// Both strategies are deterministic functions of a node's index and the
/// node count. The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Circular` - Nodes evenly spaced on a circle around the canvas center (default)
/// - `Grid` - Nodes placed row by row in a fixed number of columns
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Radial placement around the canvas center (default)
    #[default]
    Circular,
    /// Row-major placement with constant spacing
    Grid,
}

impl FromStr for LayoutStrategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circular" => Ok(Self::Circular),
            "grid" => Ok(Self::Grid),
            _ => Err("Unsupported layout strategy"),
        }
    }
}

impl From<LayoutStrategy> for &'static str {
    fn from(val: LayoutStrategy) -> Self {
        match val {
            LayoutStrategy::Circular => "circular",
            LayoutStrategy::Grid => "grid",
        }
    }
}

impl Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("circular".parse(), Ok(LayoutStrategy::Circular));
        assert_eq!("grid".parse(), Ok(LayoutStrategy::Grid));
        assert!("force".parse::<LayoutStrategy>().is_err());
        assert!("Grid".parse::<LayoutStrategy>().is_err());
    }

    #[test]
    fn test_display_matches_from_str() {
        for strategy in [LayoutStrategy::Circular, LayoutStrategy::Grid] {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }

    #[test]
    fn test_default_is_circular() {
        assert_eq!(LayoutStrategy::default(), LayoutStrategy::Circular);
    }

    #[test]
    fn test_serde_names() {
        let value = serde_json::to_value(LayoutStrategy::Grid).unwrap();
        assert_eq!(value, "grid");

        let parsed: LayoutStrategy = serde_json::from_str("\"circular\"").unwrap();
        assert_eq!(parsed, LayoutStrategy::Circular);
    }
}
