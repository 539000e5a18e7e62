/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// Abstract classes have no constructor:
/// ```compile_fail
/// use godot_rust_bindings::obj::NewAlloc;
/// use godot_rust_bindings::classes::Viewport;
///
/// let viewport = Viewport::new_alloc();
/// ```
///
/// Reference-counted classes cannot be freed manually:
/// ```compile_fail
/// use godot_rust_bindings::obj::NewGd;
/// use godot_rust_bindings::classes::Curve;
///
/// let curve = Curve::new_gd();
/// curve.free();
/// ```
///
/// Upcasts only follow the declared hierarchy:
/// ```compile_fail
/// use godot_rust_bindings::obj::NewAlloc;
/// use godot_rust_bindings::classes::{CanvasLayer, Window};
///
/// let layer = CanvasLayer::new_alloc();
/// let window = layer.upcast::<Window>();
/// ```
#[allow(dead_code)]
pub struct InternalDocTests;
