// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP transport for jobwire.
//!
//! This crate provides:
//! - A fixed transport policy applied to every destination client
//! - A per-destination client cache with lazy creation
//! - The standard jobwire User-Agent header

mod policy;
mod registry;

pub use policy::{build_client, builder, user_agent, TransportPolicy};
pub use registry::ClientRegistry;
