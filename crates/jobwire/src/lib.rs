// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client SDK for submitting HTTP jobs to a remote scheduler.
//!
//! A [`JobClient`] is bound to one scheduler endpoint. It posts a
//! [`JobItem`] as JSON and classifies the outcome: the scheduler signals
//! acceptance with `204 No Content`, anything else is a failure. One
//! submission is one network round trip; retry is the scheduler's business
//! (via the descriptor's `enable_retry`), never this client's.
//!
//! # Example
//!
//! ```ignore
//! use jobwire::{JobClient, JobItem};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JobClient::builder()
//!         .server_url("https://scheduler.internal/httpjob")
//!         .basic_auth("admin", "secret")
//!         .build()?;
//!
//!     let mut job = JobItem::new("https://api.internal/reports/run", "nightly-report");
//!     job.cron = Some("0 3 * * *".to_string());
//!
//!     let result = client.submit(&job).await?;
//!     if !result.is_success {
//!         eprintln!("submission failed: {:?}", result.err_message);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod options;
mod request;

pub use client::{JobClient, JobClientBuilder};
pub use error::{JobClientError, Result};
pub use options::PostOptions;

// Re-export wire types for convenience
pub use jobwire_core::{JobItem, SubmitResult};
