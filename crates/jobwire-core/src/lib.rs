// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core wire types for the jobwire HTTP job scheduler client.
//!
//! The serialized field names of these types are the wire contract with the
//! remote scheduler and must not be changed.

mod job;
mod result;

pub use job::JobItem;
pub use result::SubmitResult;
