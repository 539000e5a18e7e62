/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::mem::MaybeUninit;

use crate::meta::{ConvertError, FromVariant, ToVariant};
use crate::sys;

/// Kind tag of a variant. Ordinals are part of the host interface and
/// must never be reordered.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Vector2 = 5,
    Vector2i = 6,
    Vector3 = 7,
    Rect2 = 8,
    Color = 9,
    StringName = 10,
    Object = 11,
    Callable = 12,
    Array = 13,
}

pub(crate) const VARIANT_KIND_COUNT: usize = 14;

impl VariantKind {
    pub fn ord(self) -> i32 {
        self as i32
    }

    pub fn try_from_ord(ord: i32) -> Option<Self> {
        use VariantKind::*;

        let all = [
            Nil, Bool, Int, Float, String, Vector2, Vector2i, Vector3, Rect2, Color, StringName,
            Object, Callable, Array,
        ];

        all.into_iter().find(|kind| kind.ord() == ord)
    }
}

/// The engine's universal value. Contents are host-owned; the wrapper
/// moves opaque bytes around and converts through host-provided
/// per-kind functions.
#[repr(transparent)]
pub struct Variant {
    opaque: sys::OpaqueVariant,
}

impl Variant {
    pub fn nil() -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().variant_new_nil)(dest)) }
    }

    pub fn from_value<T: ToVariant>(value: &T) -> Self {
        value.to_variant()
    }

    pub fn to<T: FromVariant>(&self) -> Result<T, ConvertError> {
        T::try_from_variant(self)
    }

    pub fn kind(&self) -> VariantKind {
        let ord = unsafe { (sys::host().variant_get_kind)(self.ptr()) };

        VariantKind::try_from_ord(ord).unwrap_or(VariantKind::Nil)
    }

    pub fn is_nil(&self) -> bool {
        self.kind() == VariantKind::Nil
    }

    pub(crate) fn ptr(&self) -> sys::ConstVariantPtr {
        self.opaque.as_ptr() as sys::ConstVariantPtr
    }

    pub(crate) unsafe fn from_sys_init(init: impl FnOnce(sys::UninitVariantPtr)) -> Self {
        let mut opaque = MaybeUninit::<sys::OpaqueVariant>::uninit();
        init(opaque.as_mut_ptr() as sys::UninitVariantPtr);

        Self {
            opaque: unsafe { opaque.assume_init() },
        }
    }

    /// Reinterprets a host-provided variant pointer as a borrowed
    /// variant. The host retains ownership.
    pub(crate) unsafe fn borrow_ptr<'a>(ptr: sys::ConstVariantPtr) -> &'a Variant {
        unsafe { &*(ptr as *const Variant) }
    }

    /// Builds a variant from a value in its native layout.
    pub(crate) unsafe fn from_kind_raw(kind: VariantKind, src: sys::ConstTypePtr) -> Self {
        let from_fn = converters::from_fn(kind);

        unsafe { Self::from_sys_init(|dest| from_fn(dest, src)) }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::nil()
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().variant_new_copy)(dest, self.ptr())) }
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        unsafe { (sys::host().variant_free)(self.opaque.as_mut_ptr() as sys::VariantPtr) }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variant({:?})", self.kind())
    }
}

/// Per-kind conversion functions, fetched from the host once and reused
/// for every subsequent conversion.
pub(crate) mod converters {
    use std::sync::OnceLock;

    use super::{VARIANT_KIND_COUNT, VariantKind};
    use crate::sys;

    static FROM_FNS: [OnceLock<sys::VariantFromKindFn>; VARIANT_KIND_COUNT] =
        [const { OnceLock::new() }; VARIANT_KIND_COUNT];
    static TO_FNS: [OnceLock<sys::VariantToKindFn>; VARIANT_KIND_COUNT] =
        [const { OnceLock::new() }; VARIANT_KIND_COUNT];

    pub(crate) fn from_fn(kind: VariantKind) -> sys::VariantFromKindFn {
        *FROM_FNS[kind.ord() as usize]
            .get_or_init(|| unsafe { (sys::host().variant_from_kind_fn)(kind.ord()) })
    }

    pub(crate) fn to_fn(kind: VariantKind) -> sys::VariantToKindFn {
        *TO_FNS[kind.ord() as usize]
            .get_or_init(|| unsafe { (sys::host().variant_to_kind_fn)(kind.ord()) })
    }
}
