// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezier Editor: interactive editing core for a single Bézier curve
//!
//! The editor keeps an ordered list of control points, turns pointer
//! gestures into point edits, and after every edit re-samples the whole curve
//! into a vertex buffer for an external renderer. Windowing and GPU work stay
//! outside this crate; the bundled binary replays recorded gesture scripts
//! headlessly.

pub mod config;
pub mod curve;
pub mod editing;
pub mod error;
pub mod model;
pub mod render;
pub mod script;
pub mod settings;

pub use config::EditorConfig;
pub use curve::{SampledCurve, binomial, evaluate};
pub use editing::{DragState, EditSession, MouseButton, MouseEvent, ViewPort, to_scene_coords};
pub use error::EditError;
pub use model::{CurveModel, ScenePoint};
pub use render::{DrawStyle, FrameLog, FrameRecorder, RenderFrame, Renderer};
pub use script::{GestureScript, ScriptEvent};

use anyhow::Result;
use std::path::PathBuf;

const USAGE: &str = "Usage: bezier-editor [--config editor.toml] <script.toml>";

/// Entry point for the headless editor
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bezier_editor=info".parse()?),
        )
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let script = GestureScript::load(&args.script)?;

    let mut session = EditSession::new(&config, FrameLog::new())?;
    script.replay(&mut session)?;

    print_summary(&session);
    Ok(())
}

/// Final control points and buffer layout, one line each
fn print_summary(session: &EditSession<FrameLog>) {
    for (index, pt) in session.points().iter().enumerate() {
        println!("point {index}: ({}, {}, {})", pt.x, pt.y, pt.z);
    }
    let frame = session.frame();
    println!(
        "vertices: {} (curve {}, markers {})",
        frame.len(),
        frame.split(),
        frame.control_point_count()
    );
    println!("frames presented: {}", session.renderer().frames());
}

/// Parsed command-line arguments
#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    script: PathBuf,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config = None;
        let mut script = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--config needs a path\n{USAGE}"))?;
                    config = Some(PathBuf::from(path));
                }
                _ if script.is_none() => script = Some(PathBuf::from(&arg)),
                _ => anyhow::bail!("Unexpected argument: {arg}\n{USAGE}"),
            }
        }

        let script = script.ok_or_else(|| anyhow::anyhow!("Missing script path\n{USAGE}"))?;
        Ok(Self { config, script })
    }
}
