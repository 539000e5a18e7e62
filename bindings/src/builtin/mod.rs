/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub(crate) mod array;
pub(crate) mod callable;
pub(crate) mod math;
pub(crate) mod string;
pub(crate) mod string_name;
pub(crate) mod variant;

pub use array::VariantArray;
pub use callable::Callable;
pub use math::{Color, Rect2, Vector2, Vector2i, Vector3};
pub use string::GString;
pub use string_name::{InternedName, StringName};
pub use variant::{Variant, VariantKind};
