// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for singleswap.
//!
//! Provides scripted collaborators for fast, deterministic registry tests.
//!
//! # Components
//!
//! - [`MockContext`] - Context with a scripted applicability answer and a call counter
//! - [`MockProbe`] - Capability probe backed by a fixed set of enabled ids
//! - [`RecordingSink`] - Diagnostic sink that captures construction failures
//! - [`failing_factory`] / [`panicking_factory`] - Factories that never produce a context

pub mod mock_context;
pub mod mock_probe;
pub mod recording_sink;

pub use mock_context::{context_factory, failing_factory, panicking_factory, MockContext};
pub use mock_probe::MockProbe;
pub use recording_sink::{RecordedFailure, RecordingSink};
