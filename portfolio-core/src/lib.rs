//! Core types and fixed content for the portfolio site widgets.
//!
//! Nothing in this crate touches the browser. The `portfolio-ui` crate and
//! the native CLI both build on it:
//! - `api`: endpoint paths and URL building (query values are URL-encoded)
//! - `fact`: the fixed fun-fact list and index selection
//! - `list`: the clear-then-append list rendering contract
//! - `vote`: dogs, vote tallies, pie chart rows and the per-session vote state
//! - `landmark`: the fixed map center and the four landmarks
//! - `popup`: the single-open info window slot
//! - `question`: submit button visibility and question count parsing
//! - `config`: site configuration with defaults

pub mod api;
pub mod config;
pub mod error;
pub mod fact;
pub mod landmark;
pub mod list;
pub mod popup;
pub mod question;
pub mod vote;

pub use error::{PortfolioError, Result};
