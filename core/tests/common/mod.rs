// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Course factories (fixtures)
//! - Invariant assertions

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::assert_course_invariants;
#[allow(unused_imports)]
pub use fixtures::{CourseBuilder, january_course, sample_edits};
