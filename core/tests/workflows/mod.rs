// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the eventorg-core crate.
//!
//! These tests run validated drafts through the calendar the way the
//! organizer does, and check the listings that result.

mod event_lifecycle;
mod listings;
