/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Resolution of class constructors and method binds against the
//! host's class database. Every lookup is keyed by interned names plus
//! the method's compatibility hash and happens at most once per call
//! site; the resolved pointer is reused for the remaining process
//! lifetime.

use std::sync::OnceLock;

use crate::builtin::{InternedName, Variant};
use crate::meta::NativeFfi;
use crate::sys;

/// A resolved native method, immutable once cached.
#[derive(Clone, Copy)]
pub struct MethodBind {
    ptr: sys::MethodBindPtr,
}

// The underlying pointer is a process-wide immutable handle.
unsafe impl Send for MethodBind {}
unsafe impl Sync for MethodBind {}

impl MethodBind {
    /// Typed pointer call without a return value.
    ///
    /// # Safety
    ///
    /// `args` must match the bound method's signature in count, order
    /// and native layout, and `object` must be an instance of the
    /// declaring class.
    pub(crate) unsafe fn ptrcall_void(self, object: sys::ObjectPtr, args: &[sys::ConstTypePtr]) {
        unsafe {
            (sys::host().object_method_bind_ptrcall)(
                self.ptr,
                object,
                args.as_ptr(),
                std::ptr::null_mut(),
            )
        };
    }

    /// Typed pointer call returning `R`.
    ///
    /// # Safety
    ///
    /// Same as [`Self::ptrcall_void`]; additionally `R` must match the
    /// bound method's declared return type.
    pub(crate) unsafe fn ptrcall_return<R: NativeFfi>(
        self,
        object: sys::ObjectPtr,
        args: &[sys::ConstTypePtr],
    ) -> R {
        unsafe {
            R::from_return(|ret| {
                (sys::host().object_method_bind_ptrcall)(self.ptr, object, args.as_ptr(), ret)
            })
        }
    }

    /// Variant call for variadic methods. The host always writes the
    /// return slot, NIL on failure.
    pub(crate) fn varcall(
        self,
        object: sys::ObjectPtr,
        args: &[Variant],
    ) -> Result<Variant, CallFailure> {
        let arg_ptrs: Vec<sys::ConstVariantPtr> = args.iter().map(Variant::ptr).collect();
        let mut error = sys::CallError::default();

        let ret = unsafe {
            Variant::from_sys_init(|dest| {
                (sys::host().object_method_bind_call)(
                    self.ptr,
                    object,
                    arg_ptrs.as_ptr(),
                    arg_ptrs.len() as i64,
                    dest,
                    &mut error,
                )
            })
        };

        if error.ok() {
            Ok(ret)
        } else {
            Err(CallFailure::from(error))
        }
    }
}

/// Per-call-site cache for a method bind. Resolution runs once; every
/// later call reuses the stored pointer.
pub struct MethodBindCache {
    cell: OnceLock<MethodBind>,
}

impl MethodBindCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self, class: &InternedName, method: &InternedName, hash: i64) -> MethodBind {
        *self.cell.get_or_init(|| resolve(class, method, hash))
    }
}

fn resolve(class: &InternedName, method: &InternedName, hash: i64) -> MethodBind {
    let ptr = unsafe {
        (sys::host().classdb_get_method_bind)(
            class.get().sys_ptr(),
            method.get().sys_ptr(),
            hash,
        )
    };

    if ptr.is_null() {
        panic!(
            "method bind `{}::{}` (hash {hash}) was not found in the class database; \
             the bindings do not match the host",
            class.as_str(),
            method.as_str(),
        );
    }

    MethodBind { ptr }
}

/// Constructs a fresh instance of `class`. Only called from generated
/// constructors of concrete classes, so an unknown class is an ABI
/// mismatch.
pub(crate) fn construct_object(class: &InternedName) -> sys::ObjectPtr {
    let ptr = unsafe { (sys::host().classdb_construct_object)(class.get().sys_ptr()) };

    if ptr.is_null() {
        panic!(
            "class `{}` cannot be constructed by the host",
            class.as_str()
        );
    }

    ptr
}

pub(crate) fn get_singleton(name: &InternedName) -> sys::ObjectPtr {
    let ptr = unsafe { (sys::host().global_get_singleton)(name.get().sys_ptr()) };

    if ptr.is_null() {
        panic!("singleton `{}` is not registered with the host", name.as_str());
    }

    ptr
}

/// Failure modes of a variant call, mapped from the host's call-error
/// codes.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CallFailure {
    #[error("no method matches the call")]
    InvalidMethod,

    #[error("argument {argument} has the wrong type (expected kind ordinal {expected})")]
    InvalidArgument { argument: i32, expected: i32 },

    #[error("too many arguments, expected {expected}")]
    TooManyArguments { expected: i32 },

    #[error("too few arguments, expected {expected}")]
    TooFewArguments { expected: i32 },

    #[error("call target is null")]
    InstanceIsNull,

    #[error("call failed with unrecognized error code {code}")]
    Unknown { code: i32 },
}

impl From<sys::CallError> for CallFailure {
    fn from(error: sys::CallError) -> Self {
        match error.error {
            sys::CALL_ERROR_INVALID_METHOD => Self::InvalidMethod,
            sys::CALL_ERROR_INVALID_ARGUMENT => Self::InvalidArgument {
                argument: error.argument,
                expected: error.expected,
            },
            sys::CALL_ERROR_TOO_MANY_ARGUMENTS => Self::TooManyArguments {
                expected: error.expected,
            },
            sys::CALL_ERROR_TOO_FEW_ARGUMENTS => Self::TooFewArguments {
                expected: error.expected,
            },
            sys::CALL_ERROR_INSTANCE_IS_NULL => Self::InstanceIsNull,
            code => Self::Unknown { code },
        }
    }
}
