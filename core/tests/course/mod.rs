// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Course date model integration tests.
//!
//! Tests the public edit, constraint and step APIs the presentation layer
//! drives. Parsing details are unit tested next to the code.

mod constraints;
mod edit;
mod invariants;
mod step;
