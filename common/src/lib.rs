//! Shared model of the MartEV activation page.
//!
//! Everything here is plain Rust so it runs in the browser build, in the
//! development server and in native tests alike.

pub mod api;
pub mod challenge;
pub mod config;
pub mod error;
pub mod i18n;
pub mod intake;
pub mod model;
pub mod requests;
pub mod validation;
