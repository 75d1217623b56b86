//! # ghday-core
//!
//! Core types and error types for ghday.
//!
//! This crate provides the foundational types shared across all ghday crates:
//! - [`Activity`] and [`ActivityList`], the unit of reported GitHub activity
//! - [`Facet`], the five independent activity categories
//! - [`DateWindow`], the half-open UTC day being reported on
//! - [`Report`], the assembled per-day result
//! - Cross-cutting error types

pub mod activity;
pub mod errors;
pub mod report;
pub mod window;

pub use activity::{Activity, ActivityList, Facet};
pub use errors::CoreError;
pub use report::Report;
pub use window::DateWindow;
