//! Fixed section keys for singleton content blocks.
//!
//! A section key identifies exactly one record per collection (upsert
//! semantics, never insert-duplicate). Keys arrive as path segments and are
//! parsed strictly — an unknown key is a validation error, not a new record.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sections of the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AboutSection {
    About,
    Mission,
    Vision,
    Values,
}

const VALID_ABOUT_SECTIONS: &[&str] = &["about", "mission", "vision", "values"];

impl AboutSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Mission => "mission",
            Self::Vision => "vision",
            Self::Values => "values",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "about" => Ok(Self::About),
            "mission" => Ok(Self::Mission),
            "vision" => Ok(Self::Vision),
            "values" => Ok(Self::Values),
            _ => Err(CoreError::Validation(format!(
                "Invalid about section '{s}'. Must be one of: {}",
                VALID_ABOUT_SECTIONS.join(", ")
            ))),
        }
    }
}

/// Sections of the references page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencesSection {
    Hero,
    TrustedPartner,
    Cta,
}

const VALID_REFERENCES_SECTIONS: &[&str] = &["hero", "trusted_partner", "cta"];

impl ReferencesSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::TrustedPartner => "trusted_partner",
            Self::Cta => "cta",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "hero" => Ok(Self::Hero),
            "trusted_partner" => Ok(Self::TrustedPartner),
            "cta" => Ok(Self::Cta),
            _ => Err(CoreError::Validation(format!(
                "Invalid references section '{s}'. Must be one of: {}",
                VALID_REFERENCES_SECTIONS.join(", ")
            ))),
        }
    }
}
