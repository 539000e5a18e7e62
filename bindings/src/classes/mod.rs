/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! One module per bound engine class, all following the same template:
//! interned name tables, per-call-site method-bind caches keyed by
//! (class, method, compatibility hash), property accessors as sugar
//! over their getter/setter pairs, and signal accessors.

pub mod accept_dialog;
pub mod canvas_layer;
pub mod curve;
pub mod engine;
pub mod navigation_mesh;
pub mod navigation_region_3d;
pub mod node;
pub mod node3d;
pub mod object;
pub mod ref_counted;
pub mod resource;
pub mod viewport;
pub mod window;

pub use accept_dialog::AcceptDialog;
pub use canvas_layer::CanvasLayer;
pub use curve::{Curve, TangentMode};
pub use engine::Engine;
pub use navigation_mesh::NavigationMesh;
pub use navigation_region_3d::NavigationRegion3D;
pub use node::{InternalMode, Node};
pub use node3d::Node3D;
pub use object::{ConnectFlags, Object};
pub use ref_counted::RefCounted;
pub use resource::Resource;
pub use viewport::Viewport;
pub use window::{Window, WindowFlags, WindowMode};
