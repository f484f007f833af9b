// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fixed transport policy for destination clients.

use std::time::Duration;

use reqwest::{redirect, Client, ClientBuilder, Proxy};

/// Name reported in the User-Agent header.
const UA_NAME: &str = "jobwire";
/// Version reported in the User-Agent header.
const UA_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transport policy applied to every destination client.
///
/// Everything except the proxy is fixed:
/// - redirects are never followed; the raw status code is the success
///   contract (204 sentinel) and a redirect would hide it
/// - responses are never auto-decompressed
/// - no cookie store; the client is stateless across requests
/// - connections are kept alive and pooled per destination
/// - when `proxy` is `None`, proxying is disabled outright; the system or
///   environment proxy is never consulted
#[derive(Debug, Clone, Default)]
pub struct TransportPolicy {
	/// Proxy URL for the destination, e.g. `http://proxy.internal:3128`.
	pub proxy: Option<String>,
}

impl TransportPolicy {
	/// Policy with a proxy configured.
	pub fn with_proxy(proxy: impl Into<String>) -> Self {
		Self {
			proxy: Some(proxy.into()),
		}
	}
}

/// Returns a `ClientBuilder` with the fixed policy applied.
///
/// Fails only when the policy's proxy URL cannot be parsed.
pub fn builder(policy: &TransportPolicy) -> reqwest::Result<ClientBuilder> {
	let mut builder = Client::builder()
		.user_agent(user_agent())
		.redirect(redirect::Policy::none())
		.no_gzip()
		.no_brotli()
		.no_deflate()
		.tcp_keepalive(Duration::from_secs(60));

	builder = match &policy.proxy {
		Some(url) => builder.proxy(Proxy::all(url.as_str())?),
		None => builder.no_proxy(),
	};

	Ok(builder)
}

/// Builds a destination client with the fixed policy applied.
pub fn build_client(policy: &TransportPolicy) -> reqwest::Result<Client> {
	builder(policy)?.build()
}

/// Returns the standard jobwire User-Agent string.
///
/// Format: `jobwire/{version}`
pub fn user_agent() -> String {
	format!("{UA_NAME}/{UA_VERSION}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 2);
		assert_eq!(parts[0], "jobwire");
		assert!(!parts[1].is_empty());
	}

	#[test]
	fn builds_client_without_proxy() {
		let client = build_client(&TransportPolicy::default());
		assert!(client.is_ok());
	}

	#[test]
	fn builds_client_with_proxy() {
		let policy = TransportPolicy::with_proxy("http://proxy.internal:3128");
		assert!(build_client(&policy).is_ok());
	}

	#[test]
	fn rejects_unparseable_proxy() {
		let policy = TransportPolicy::with_proxy("::not a url::");
		assert!(build_client(&policy).is_err());
	}
}
