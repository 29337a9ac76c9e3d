// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for coach-cli
// ABOUTME: Writes pretty JSON to stdout so results can be piped into other tools

use pierre_coach::coach_core::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Print a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
