//! Scores a fixed catalog of podcasts, talks and interviews against a
//! weighted preference model, then filters and ranks the results.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod services;
pub mod store;
