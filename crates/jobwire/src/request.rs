// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request construction for job submissions.

use jobwire_core::JobItem;
use reqwest::header;
use reqwest::{Client, RequestBuilder};

use crate::options::PostOptions;

/// Builds the submission request for `job`.
///
/// The transport call is always a POST to the scheduler URL with the UTF-8
/// JSON serialization of the descriptor as body; the descriptor's own
/// `url`/`method` are payload, not the transport call. When both basic-auth
/// credentials are present in the options, an
/// `Authorization: Basic base64(user:pass)` header is attached. Building a
/// request from a valid descriptor cannot fail.
pub(crate) fn build(
	client: &Client,
	server_url: &str,
	options: &PostOptions,
	job: &JobItem,
) -> RequestBuilder {
	let mut request = client
		.post(server_url)
		.header(header::ACCEPT, "application/json")
		.json(job);

	if let (Some(user), Some(pass)) = (&options.basic_user_name, &options.basic_password) {
		if !user.is_empty() && !pass.is_empty() {
			request = request.basic_auth(user, Some(pass));
		}
	}

	request
}

#[cfg(test)]
mod tests {
	use super::*;
	use base64::Engine as _;

	fn build_parts(options: &PostOptions) -> reqwest::Request {
		let client = Client::new();
		let job = JobItem::new("https://api.internal/task", "job-1");
		build(&client, "https://scheduler.internal/httpjob", options, &job)
			.build()
			.unwrap()
	}

	#[test]
	fn posts_to_scheduler_url_with_accept_header() {
		let request = build_parts(&PostOptions::default());

		assert_eq!(request.method(), reqwest::Method::POST);
		assert_eq!(request.url().as_str(), "https://scheduler.internal/httpjob");
		assert_eq!(
			request.headers().get(header::ACCEPT).unwrap(),
			"application/json"
		);
	}

	#[test]
	fn body_is_descriptor_json() {
		let request = build_parts(&PostOptions::default());

		let body = request.body().unwrap().as_bytes().unwrap();
		let decoded: JobItem = serde_json::from_slice(body).unwrap();
		assert_eq!(decoded.url, "https://api.internal/task");
		assert_eq!(decoded.job_name, "job-1");
	}

	#[test]
	fn attaches_basic_auth_when_both_credentials_present() {
		let options = PostOptions {
			basic_user_name: Some("admin".to_string()),
			basic_password: Some("secret".to_string()),
			..PostOptions::default()
		};
		let request = build_parts(&options);

		let expected = format!(
			"Basic {}",
			base64::engine::general_purpose::STANDARD.encode("admin:secret")
		);
		assert_eq!(
			request.headers().get(header::AUTHORIZATION).unwrap(),
			expected.as_str()
		);
	}

	#[test]
	fn skips_basic_auth_when_credentials_incomplete() {
		for (user, pass) in [
			(None, None),
			(Some("admin".to_string()), None),
			(None, Some("secret".to_string())),
			(Some(String::new()), Some("secret".to_string())),
		] {
			let options = PostOptions {
				basic_user_name: user,
				basic_password: pass,
				..PostOptions::default()
			};
			let request = build_parts(&options);
			assert!(request.headers().get(header::AUTHORIZATION).is_none());
		}
	}
}
