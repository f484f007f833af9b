// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Job submission client.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use jobwire_common_http::{ClientRegistry, TransportPolicy};
use jobwire_core::{JobItem, SubmitResult};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, error, info, warn};

use crate::error::{JobClientError, Result};
use crate::options::PostOptions;
use crate::request;

/// Process-wide destination client cache.
///
/// Keyed by `host` / `host:port` so repeated submissions to the same
/// scheduler reuse one connection pool, also across separately built
/// `JobClient`s.
fn registry() -> &'static ClientRegistry {
	static REGISTRY: OnceLock<ClientRegistry> = OnceLock::new();
	REGISTRY.get_or_init(ClientRegistry::new)
}

/// Builder for constructing a [`JobClient`].
pub struct JobClientBuilder {
	server_url: Option<String>,
	options: PostOptions,
}

impl JobClientBuilder {
	/// Creates a new builder with default options.
	pub fn new() -> Self {
		Self {
			server_url: None,
			options: PostOptions::default(),
		}
	}

	/// Sets the scheduler endpoint URL.
	///
	/// Example: `https://scheduler.internal/httpjob`
	pub fn server_url(mut self, url: impl Into<String>) -> Self {
		self.server_url = Some(url.into());
		self
	}

	/// Sets the overall submission timeout.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.options.timeout = timeout;
		self
	}

	/// Propagate transport faults to the caller instead of folding them
	/// into the result.
	pub fn throw_on_failure(mut self, throw: bool) -> Self {
		self.options.throw_on_failure = throw;
		self
	}

	/// Sets a proxy for the destination. Without one, proxying is disabled
	/// entirely; the environment proxy is never consulted.
	pub fn proxy(mut self, url: impl Into<String>) -> Self {
		self.options.proxy = Some(url.into());
		self
	}

	/// Sets basic-auth credentials for the scheduler endpoint.
	///
	/// These authenticate the submission itself, not the job's eventual
	/// call (which carries its own credentials in the payload).
	pub fn basic_auth(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
		self.options.basic_user_name = Some(user.into());
		self.options.basic_password = Some(pass.into());
		self
	}

	/// Replaces the options wholesale.
	pub fn options(mut self, options: PostOptions) -> Self {
		self.options = options;
		self
	}

	/// Builds the JobClient.
	pub fn build(self) -> Result<JobClient> {
		let server_url = self.server_url.ok_or(JobClientError::InvalidServerUrl)?;
		let parsed = Url::parse(&server_url).map_err(|_| JobClientError::InvalidServerUrl)?;
		let host = parsed
			.host_str()
			.ok_or(JobClientError::InvalidServerUrl)?;
		let destination = match parsed.port() {
			Some(port) => format!("{host}:{port}"),
			None => host.to_string(),
		};

		let policy = TransportPolicy {
			proxy: self.options.proxy.clone(),
		};
		let http_client = registry().get_or_create(&destination, &policy)?;

		info!(server_url = %server_url, destination = %destination, "Job client initialized");

		Ok(JobClient {
			inner: Arc::new(JobClientInner {
				server_url,
				destination,
				options: self.options,
				http_client,
			}),
		})
	}
}

impl Default for JobClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Internal client state.
struct JobClientInner {
	server_url: String,
	destination: String,
	options: PostOptions,
	http_client: Client,
}

/// Client bound to one scheduler destination.
///
/// Cheap to clone; clones share the destination's connection pool and are
/// safe to use from concurrent tasks. Each submission is one independent
/// request over the shared pool.
#[derive(Clone)]
pub struct JobClient {
	inner: Arc<JobClientInner>,
}

impl JobClient {
	/// Creates a new builder for constructing a JobClient.
	pub fn builder() -> JobClientBuilder {
		JobClientBuilder::new()
	}

	/// Submits one job descriptor to the scheduler.
	///
	/// Exactly one network round trip, no retries. The scheduler signals
	/// acceptance with `204 No Content` and nothing else; any other status
	/// is a failure whose message is the stringified status code. Transport
	/// faults (connect, DNS, TLS, timeout) fold into a failed
	/// [`SubmitResult`] unless `throw_on_failure` is set, in which case they
	/// propagate as `Err` after being logged. The `Err` arm is unreachable
	/// without that option.
	pub async fn submit(&self, job: &JobItem) -> Result<SubmitResult> {
		match self.send(job).await {
			Ok(StatusCode::NO_CONTENT) => {
				info!(
					job_name = %job.job_name,
					destination = %self.inner.destination,
					"Job submitted"
				);
				Ok(SubmitResult::success())
			}
			Ok(status) => {
				warn!(
					job_name = %job.job_name,
					status = status.as_u16(),
					"Scheduler rejected job"
				);
				Ok(SubmitResult::failure(status.as_u16().to_string()))
			}
			Err(e) => {
				error!(job_name = %job.job_name, error = %e, "Job submission failed");
				if self.inner.options.throw_on_failure {
					Err(e)
				} else {
					Ok(SubmitResult::failure(e.to_string()))
				}
			}
		}
	}

	/// Blocking form of [`JobClient::submit`]: performs the submission and
	/// waits for it on the calling thread, preserving the same result.
	///
	/// Must not be called from within an async runtime.
	pub fn submit_blocking(&self, job: &JobItem) -> Result<SubmitResult> {
		let runtime = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()?;
		runtime.block_on(self.submit(job))
	}

	/// Sends the request and returns the response status.
	///
	/// The configured timeout is a cancellation bound scoped to this one
	/// submission: elapsing aborts this network wait and nothing else on
	/// the shared pool. No lock is held across the wait.
	async fn send(&self, job: &JobItem) -> Result<StatusCode> {
		let request = request::build(
			&self.inner.http_client,
			&self.inner.server_url,
			&self.inner.options,
			job,
		);
		let timeout = self.inner.options.timeout;

		debug!(
			destination = %self.inner.destination,
			timeout_ms = timeout.as_millis() as u64,
			"Posting job"
		);

		let response = tokio::time::timeout(timeout, request.send())
			.await
			.map_err(|_| JobClientError::Timeout {
				ms: timeout.as_millis() as u64,
			})??;

		Ok(response.status())
	}
}
