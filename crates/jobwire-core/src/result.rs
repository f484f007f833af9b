// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outcome of one submission attempt.

use serde::{Deserialize, Serialize};

/// Result of one attempt to post a job descriptor to the scheduler.
///
/// Produced exactly once per attempt and never mutated after return. A
/// submission is binary: it either succeeded (scheduler answered
/// `204 No Content`) or failed with a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitResult {
	pub is_success: bool,
	/// Present only on failure: the stringified status code, or the
	/// transport fault description.
	pub err_message: Option<String>,
}

impl SubmitResult {
	/// A successful submission; carries no message.
	pub fn success() -> Self {
		Self {
			is_success: true,
			err_message: None,
		}
	}

	/// A failed submission with the given message.
	pub fn failure(message: impl Into<String>) -> Self {
		Self {
			is_success: false,
			err_message: Some(message.into()),
		}
	}
}
