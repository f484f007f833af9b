// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the job submission client.

use thiserror::Error;

/// Job submission client errors.
///
/// A non-success status from the scheduler is not an error; it resolves
/// into a failed [`jobwire_core::SubmitResult`]. These variants cover
/// builder-time validation and transport faults.
#[derive(Debug, Error)]
pub enum JobClientError {
	/// Server URL is missing or not a valid absolute URL.
	#[error("invalid scheduler URL")]
	InvalidServerUrl,

	/// Transport-level fault: connect, DNS, TLS, or protocol error.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The submission did not complete within the configured bound.
	#[error("submission timed out after {ms} ms")]
	Timeout { ms: u64 },

	/// The blocking runtime for `submit_blocking` could not be started.
	#[error("failed to start blocking runtime: {0}")]
	Runtime(#[from] std::io::Error),
}

/// Result type alias for job submission operations.
pub type Result<T> = std::result::Result<T, JobClientError>;
