//! HTTP handlers, one module per content resource.
//!
//! Every handler follows the same shape: validate the input, call the
//! repository, log the mutation, and wrap the result in
//! [`DataResponse`](crate::response::DataResponse). Admin handlers take the
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin) extractor so an
//! unauthorized request is rejected before any store access.

pub mod about_content;
pub mod auth;
pub mod blog;
pub mod company_stats;
pub mod company_values;
pub mod homepage;
pub mod references_content;
pub mod submissions;
pub mod team;
