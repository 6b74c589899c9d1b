// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod mouse;
pub mod session;
pub mod viewport;

pub use hit_test::nearest_point;
pub use mouse::{DragState, MouseButton, MouseEvent};
pub use session::EditSession;
pub use viewport::{ViewPort, to_scene_coords};
