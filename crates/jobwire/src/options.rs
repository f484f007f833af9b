// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Destination-level submission options.

use std::time::Duration;

/// Options governing submissions to one scheduler destination.
///
/// Supplied once when the [`crate::JobClient`] is built and reused for every
/// call to that destination. Distinct from the credentials and timeout
/// carried *inside* a [`jobwire_core::JobItem`], which describe the job's
/// eventual call and ride along as payload.
#[derive(Debug, Clone)]
pub struct PostOptions {
	/// Overall bound on one submission, enforced as a cancellation of the
	/// network wait.
	pub timeout: Duration,
	/// Propagate transport faults to the caller instead of folding them
	/// into the result. Opt-in; off by default.
	pub throw_on_failure: bool,
	/// Proxy for the destination. `None` disables proxying entirely.
	pub proxy: Option<String>,
	/// Basic-auth username for the scheduler endpoint.
	pub basic_user_name: Option<String>,
	/// Basic-auth password for the scheduler endpoint.
	pub basic_password: Option<String>,
}

impl Default for PostOptions {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(15),
			throw_on_failure: false,
			proxy: None,
			basic_user_name: None,
			basic_password: None,
		}
	}
}
