// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Snapshot factories (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_ids, assert_statuses};
#[allow(unused_imports)]
pub use fixtures::{
    SAMPLE_SNAPSHOT, SnapshotBuilder, at, sample_snapshot, test_application, test_posting,
};
