//! Closed icon set for content collections.
//!
//! The admin UI stores icon choices as strings. Rather than dispatching on
//! arbitrary names, the set is a closed enum with a defined default: any
//! unknown name maps to [`IconKind::Target`].

use serde::{Deserialize, Serialize};

/// Icons available to company values, homepage statistics, and solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Target,
    Lightbulb,
    Users,
    Award,
    Globe,
    TrendingUp,
    Shield,
    Zap,
}

impl IconKind {
    /// Return the icon as its stored snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Lightbulb => "lightbulb",
            Self::Users => "users",
            Self::Award => "award",
            Self::Globe => "globe",
            Self::TrendingUp => "trending_up",
            Self::Shield => "shield",
            Self::Zap => "zap",
        }
    }

    /// Look up an icon by name. Unknown names fall back to `Target`, so the
    /// lookup is total and stored data can never break rendering.
    pub fn from_name(name: &str) -> Self {
        match name {
            "target" => Self::Target,
            "lightbulb" => Self::Lightbulb,
            "users" => Self::Users,
            "award" => Self::Award,
            "globe" => Self::Globe,
            "trending_up" => Self::TrendingUp,
            "shield" => Self::Shield,
            "zap" => Self::Zap,
            _ => Self::Target,
        }
    }
}
