//! Client core for the fictional resume service.
//!
//! Three pieces: [`fetch::RetryingFetcher`] performs one logical "get the
//! resume" operation with exponential-backoff retries,
//! [`controller::ResumeController`] drives the Idle/Loading/Loaded/Failed
//! lifecycle, and [`render`] turns the current state into terminal output.

pub mod config;
pub mod controller;
pub mod fetch;
pub mod models;
pub mod render;
