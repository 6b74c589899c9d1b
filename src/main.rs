// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezier Editor: replays gesture scripts against the curve editor

fn main() -> anyhow::Result<()> {
    bezier_editor::run()
}
