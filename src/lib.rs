//! Daily-fact voting service library
//!
//! The designed behavior lives in two places: [`selector`] (deterministic
//! day-of-year fact selection) and [`db`] (append-only vote log with
//! read-time aggregation). Everything else is HTTP plumbing around them.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod seed;
pub mod selector;
pub mod vote;
