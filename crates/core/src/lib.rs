//! Domain types shared across the Nexora CMS backend.
//!
//! Holds the language/localization model, the closed icon set, fixed content
//! section keys, field validation helpers, and the domain error taxonomy.
//! Everything here is pure — no I/O, no database access.

pub mod error;
pub mod icon;
pub mod localized;
pub mod section;
pub mod types;
pub mod validation;
