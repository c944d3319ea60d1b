//! Lead source for leadscout.
//!
//! Builds a boolean site/title query from a [`RoleProfile`], runs it against
//! the Serper Google-search API, and normalizes the organic results into
//! [`RawLead`]s. Source failures never propagate: [`fetch_leads`] logs them
//! and returns an empty list.
//!
//! [`RoleProfile`]: leadscout_core::RoleProfile
//! [`RawLead`]: leadscout_core::RawLead

pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod source;
pub mod types;

pub use client::SerperClient;
pub use error::SearchError;
pub use query::build_query;
pub use source::{fetch_leads, SearchProvider};
