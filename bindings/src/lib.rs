/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Bindings exposing the engine's native class hierarchy to Rust.
//!
//! Every class in [`classes`] is a thin wrapper following one
//! mechanical template: constructors and method binds are resolved
//! through the host's class database once and cached, arguments are
//! marshaled across the native boundary, and signals are proxied onto
//! the generic native connect machinery.

pub mod builtin;
pub mod classes;
pub mod global;
#[doc(hidden)]
pub mod log;
pub mod meta;
pub mod obj;
pub mod registry;
pub mod signals;
pub mod sys;

pub mod prelude {
    pub use crate::builtin::{
        Callable, Color, GString, InternedName, Rect2, StringName, Variant, VariantArray,
        VariantKind, Vector2, Vector2i, Vector3,
    };
    pub use crate::classes::*;
    pub use crate::global::Error;
    pub use crate::meta::{EngineEnum, FromVariant, ToVariant};
    pub use crate::obj::{EngineClass, Gd, Inherits, NewAlloc, NewGd};
    pub use crate::signals::{EngineSignal, SignalArguments};
    pub use crate::{godot_error, godot_print, godot_warn};
}
