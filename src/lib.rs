#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal registration form for the French course enrollment service.
//!
//! One registration screen collects name, email, phone, gender and current
//! city, validates each field locally, and POSTs the result as JSON to the
//! enrollment endpoint. A confirmation modal is shown on success.

pub mod model;
pub mod submit;
pub mod tui;
