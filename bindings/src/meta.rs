/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Marshaling between Rust values and the native calling conventions.
//!
//! Two conventions exist: the typed pointer call used by fixed-arity
//! methods (every argument is a pointer to a value in its native
//! layout) and the variant call used by variadic methods. Both are
//! mechanical; nothing here interprets values.

use crate::builtin::variant::converters;
use crate::builtin::{
    Callable, Color, GString, Rect2, StringName, Variant, VariantArray, VariantKind, Vector2,
    Vector2i, Vector3,
};
use crate::sys;

/// Engine-declared enums cross the boundary as their ordinal.
pub trait EngineEnum: Copy {
    fn ord(self) -> i32;
    fn try_from_ord(ord: i32) -> Option<Self>;
}

/// Declares an engine enum together with its [`EngineEnum`] impl.
macro_rules! engine_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = $ord:literal),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[repr(i32)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        $vis enum $name {
            $($variant = $ord),+
        }

        impl $crate::meta::EngineEnum for $name {
            fn ord(self) -> i32 {
                self as i32
            }

            fn try_from_ord(ord: i32) -> Option<Self> {
                match ord {
                    $($ord => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use engine_enum;

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("variant of kind {actual:?} cannot be read as {expected:?}")]
    KindMismatch {
        expected: VariantKind,
        actual: VariantKind,
    },

    #[error("variant holds a null object")]
    NullObject,

    #[error("object is not an instance of `{expected}`")]
    ClassMismatch { expected: &'static str },

    #[error("integer value {value} is out of range for the target type")]
    IntOutOfRange { value: i64 },
}

/// Types that can be passed through the typed pointer-call convention.
///
/// # Safety
///
/// `type_ptr` must point to the value in exactly the layout the host
/// expects for this type, and `from_return` must hand the host a slot
/// it can fill with that same layout.
pub unsafe trait NativeFfi: Sized {
    fn type_ptr(&self) -> sys::ConstTypePtr;

    unsafe fn from_return(init: impl FnOnce(sys::TypePtr)) -> Self;
}

macro_rules! ffi_by_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            unsafe impl NativeFfi for $ty {
                fn type_ptr(&self) -> sys::ConstTypePtr {
                    self as *const $ty as sys::ConstTypePtr
                }

                unsafe fn from_return(init: impl FnOnce(sys::TypePtr)) -> Self {
                    let mut slot = ::std::mem::MaybeUninit::<$ty>::uninit();
                    init(slot.as_mut_ptr() as sys::TypePtr);

                    unsafe { slot.assume_init() }
                }
            }
        )+
    };
}

ffi_by_value!(
    bool,
    i32,
    i64,
    u32,
    u64,
    f32,
    f64,
    Vector2,
    Vector2i,
    Vector3,
    Rect2,
    Color,
    sys::ObjectPtr,
);

macro_rules! ffi_by_opaque {
    ($($ty:ident),+ $(,)?) => {
        $(
            unsafe impl NativeFfi for $ty {
                fn type_ptr(&self) -> sys::ConstTypePtr {
                    self.sys_ptr()
                }

                unsafe fn from_return(init: impl FnOnce(sys::TypePtr)) -> Self {
                    unsafe { $ty::from_sys_init(init) }
                }
            }
        )+
    };
}

ffi_by_opaque!(GString, StringName, Callable, VariantArray);

unsafe impl NativeFfi for Variant {
    fn type_ptr(&self) -> sys::ConstTypePtr {
        self.ptr()
    }

    unsafe fn from_return(init: impl FnOnce(sys::TypePtr)) -> Self {
        unsafe { Variant::from_sys_init(init) }
    }
}

pub trait ToVariant {
    fn to_variant(&self) -> Variant;
}

pub trait FromVariant: Sized {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError>;
}

pub(crate) fn variant_from<T: NativeFfi>(value: &T, kind: VariantKind) -> Variant {
    unsafe { Variant::from_kind_raw(kind, value.type_ptr()) }
}

pub(crate) fn variant_to<T: NativeFfi>(
    variant: &Variant,
    kind: VariantKind,
) -> Result<T, ConvertError> {
    let actual = variant.kind();

    if actual != kind {
        return Err(ConvertError::KindMismatch {
            expected: kind,
            actual,
        });
    }

    let to_fn = converters::to_fn(kind);

    Ok(unsafe { T::from_return(|dest| to_fn(dest, variant.ptr())) })
}

macro_rules! impl_variant_by_kind {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl ToVariant for $ty {
                fn to_variant(&self) -> Variant {
                    variant_from(self, VariantKind::$kind)
                }
            }

            impl FromVariant for $ty {
                fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
                    variant_to(variant, VariantKind::$kind)
                }
            }
        )+
    };
}

impl_variant_by_kind!(
    bool => Bool,
    i64 => Int,
    f64 => Float,
    GString => String,
    StringName => StringName,
    Vector2 => Vector2,
    Vector2i => Vector2i,
    Vector3 => Vector3,
    Rect2 => Rect2,
    Color => Color,
    Callable => Callable,
    VariantArray => Array,
);

impl ToVariant for () {
    fn to_variant(&self) -> Variant {
        Variant::nil()
    }
}

impl FromVariant for () {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        match variant.kind() {
            VariantKind::Nil => Ok(()),
            actual => Err(ConvertError::KindMismatch {
                expected: VariantKind::Nil,
                actual,
            }),
        }
    }
}

impl ToVariant for Variant {
    fn to_variant(&self) -> Variant {
        self.clone()
    }
}

impl FromVariant for Variant {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        Ok(variant.clone())
    }
}

impl ToVariant for i32 {
    fn to_variant(&self) -> Variant {
        (*self as i64).to_variant()
    }
}

impl FromVariant for i32 {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let wide = i64::try_from_variant(variant)?;

        i32::try_from(wide).map_err(|_| ConvertError::IntOutOfRange { value: wide })
    }
}

impl ToVariant for u32 {
    fn to_variant(&self) -> Variant {
        (*self as i64).to_variant()
    }
}

impl FromVariant for u32 {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let wide = i64::try_from_variant(variant)?;

        u32::try_from(wide).map_err(|_| ConvertError::IntOutOfRange { value: wide })
    }
}

impl ToVariant for u64 {
    fn to_variant(&self) -> Variant {
        (*self as i64).to_variant()
    }
}

impl FromVariant for u64 {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        i64::try_from_variant(variant).map(|wide| wide as u64)
    }
}

impl ToVariant for f32 {
    fn to_variant(&self) -> Variant {
        (*self as f64).to_variant()
    }
}

impl FromVariant for f32 {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        f64::try_from_variant(variant).map(|wide| wide as f32)
    }
}

impl ToVariant for String {
    fn to_variant(&self) -> Variant {
        GString::from(self).to_variant()
    }
}

impl FromVariant for String {
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        GString::try_from_variant(variant).map(|string| string.to_string())
    }
}

impl ToVariant for &str {
    fn to_variant(&self) -> Variant {
        GString::from(*self).to_variant()
    }
}
