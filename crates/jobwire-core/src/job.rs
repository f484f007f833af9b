// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The job descriptor posted to the remote scheduler.

use serde::{Deserialize, Serialize};

/// A deferred or recurring HTTP call to be scheduled remotely.
///
/// The descriptor's `url`/`method` describe the call the *scheduler* will
/// eventually make, not the submission itself; they ride along as payload.
/// Serialized field names are PascalCase on the wire (`Url`, `SendSucMail`,
/// ...) and form the contract with the scheduler.
///
/// A descriptor is built per submission and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobItem {
	/// URL the scheduler will call when the job fires.
	pub url: String,
	/// HTTP method for the job's eventual call.
	pub method: String,
	/// Serialized request body for the job's eventual call.
	pub data: String,
	/// Content type for the job's eventual call.
	pub content_type: String,
	/// Timeout for the job's eventual call, in milliseconds.
	pub timeout: u32,
	/// Delay before a one-shot job fires, in minutes.
	pub delay_from_minutes: u32,
	/// Cron expression for recurring jobs; `None` for one-shot jobs.
	pub cron: Option<String>,
	pub job_name: String,
	pub queue_name: String,
	/// Notify `mail` when the job succeeds.
	pub send_suc_mail: bool,
	/// Notify `mail` when the job fails.
	pub send_fai_mail: bool,
	pub mail: String,
	/// Let the scheduler retry the job when it fails.
	pub enable_retry: bool,
	/// Basic-auth credentials the scheduler uses for the job's call.
	pub basic_user_name: Option<String>,
	pub basic_password: Option<String>,
}

impl JobItem {
	/// Creates a descriptor for `url` with the standard defaults applied.
	///
	/// Defaults are applied here and never overridden except by explicit
	/// caller assignment.
	pub fn new(url: impl Into<String>, job_name: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			job_name: job_name.into(),
			..Self::default()
		}
	}
}

impl Default for JobItem {
	fn default() -> Self {
		Self {
			url: String::new(),
			method: "Post".to_string(),
			data: String::new(),
			content_type: "application/json".to_string(),
			timeout: 20_000,
			delay_from_minutes: 15,
			cron: None,
			job_name: String::new(),
			queue_name: String::new(),
			send_suc_mail: false,
			send_fai_mail: false,
			mail: String::new(),
			enable_retry: false,
			basic_user_name: None,
			basic_password: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn defaults_match_scheduler_contract() {
		let job = JobItem::default();
		assert_eq!(job.method, "Post");
		assert_eq!(job.content_type, "application/json");
		assert_eq!(job.timeout, 20_000);
		assert_eq!(job.delay_from_minutes, 15);
		assert!(job.cron.is_none());
		assert!(!job.enable_retry);
	}

	#[test]
	fn new_applies_defaults() {
		let job = JobItem::new("https://example.com/task", "nightly-report");
		assert_eq!(job.url, "https://example.com/task");
		assert_eq!(job.job_name, "nightly-report");
		assert_eq!(job.method, "Post");
		assert_eq!(job.timeout, 20_000);
	}

	#[test]
	fn serializes_with_wire_field_names() {
		let job = JobItem::new("https://example.com/task", "nightly-report");
		let value = serde_json::to_value(&job).unwrap();
		let object = value.as_object().unwrap();

		let expected = [
			"Url",
			"Method",
			"Data",
			"ContentType",
			"Timeout",
			"DelayFromMinutes",
			"Cron",
			"JobName",
			"QueueName",
			"SendSucMail",
			"SendFaiMail",
			"Mail",
			"EnableRetry",
			"BasicUserName",
			"BasicPassword",
		];
		for field in expected {
			assert!(object.contains_key(field), "missing wire field {field}");
		}
		assert_eq!(object.len(), expected.len());
	}

	fn arb_job() -> impl Strategy<Value = JobItem> {
		(
			"[a-zA-Z0-9:/._-]{0,40}",
			prop_oneof![Just("Post".to_string()), Just("Get".to_string())],
			"[ -~]{0,40}",
			0u32..600_000,
			0u32..1_440,
			proptest::option::of("[0-9*/ ]{1,20}"),
			"[a-zA-Z0-9_-]{0,20}",
			any::<(bool, bool, bool)>(),
			proptest::option::of("[a-zA-Z0-9]{1,16}"),
		)
			.prop_map(
				|(url, method, data, timeout, delay, cron, name, flags, user)| JobItem {
					url,
					method,
					data,
					timeout,
					delay_from_minutes: delay,
					cron,
					job_name: name.clone(),
					queue_name: name,
					send_suc_mail: flags.0,
					send_fai_mail: flags.1,
					enable_retry: flags.2,
					basic_password: user.clone(),
					basic_user_name: user,
					..JobItem::default()
				},
			)
	}

	proptest! {
		#[test]
		fn wire_round_trip_preserves_all_fields(job in arb_job()) {
			let body = serde_json::to_string(&job).unwrap();
			let decoded: JobItem = serde_json::from_str(&body).unwrap();
			prop_assert_eq!(decoded, job);
		}
	}
}
