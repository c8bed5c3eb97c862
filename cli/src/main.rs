// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! eventorg - an interactive organizer for department events

use std::process::ExitCode;

fn main() -> ExitCode {
    eventorg_cli::run()
}
