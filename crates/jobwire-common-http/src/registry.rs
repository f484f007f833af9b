// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-destination client cache.

use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::Client;
use tracing::debug;

use crate::policy::{build_client, TransportPolicy};

/// Lazily populated cache of destination clients, keyed by destination
/// identity (`host` or `host:port`).
///
/// Each cached `Client` owns its own connection pool; reusing it for every
/// submission to the same destination avoids paying connection and TLS setup
/// per call. `Client` is cheaply clonable and safe for concurrent use, so
/// simultaneous submissions share the pool without coordination here. The
/// lock guards only the map and is never held across network I/O.
#[derive(Debug, Default)]
pub struct ClientRegistry {
	clients: Mutex<HashMap<String, Client>>,
}

impl ClientRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the client for `key`, creating it on first use.
	///
	/// Concurrent first use of the same key creates exactly one pool:
	/// whichever caller takes the lock first builds the client, the rest
	/// reuse it. A different key always gets a fresh, independently
	/// configured client.
	pub fn get_or_create(&self, key: &str, policy: &TransportPolicy) -> reqwest::Result<Client> {
		let mut clients = self
			.clients
			.lock()
			.expect("client registry lock poisoned");
		if let Some(client) = clients.get(key) {
			return Ok(client.clone());
		}

		debug!(destination = %key, "Creating destination client");
		let client = build_client(policy)?;
		clients.insert(key.to_string(), client.clone());
		Ok(client)
	}

	/// Number of cached destination clients.
	pub fn len(&self) -> usize {
		self.clients
			.lock()
			.expect("client registry lock poisoned")
			.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
