// Copyright 2025 the Stillwater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the Stillwater demo binaries.
//!
//! The binaries are headless stand-ins for a paginated list screen and a
//! search screen. They print to stdout instead of rendering.

pub mod config;
pub mod corpus;
pub mod nav;
pub mod render;
pub mod search;
