/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Raw boundary to the native engine host.
//!
//! The host hands the library a single versioned table of C function
//! pointers at startup. Everything else in this crate funnels through
//! that table; nothing here interprets engine data beyond moving opaque
//! values across the boundary.

use std::ffi::{c_char, c_void};
use std::sync::OnceLock;

use cfg_if::cfg_if;

/// Bumped whenever the layout of [`HostInterface`] changes.
pub const INTERFACE_VERSION: u32 = 1;

pub type ObjectPtr = *mut c_void;
pub type ConstObjectPtr = *const c_void;

/// Pointer to a value in its native layout (opaque storage or plain data).
pub type TypePtr = *mut c_void;
pub type ConstTypePtr = *const c_void;

pub type VariantPtr = *mut c_void;
pub type ConstVariantPtr = *const c_void;
/// Destination slot the host writes a freshly constructed variant into.
pub type UninitVariantPtr = *mut c_void;

pub type MethodBindPtr = *const c_void;
pub type CallableUserData = *mut c_void;

pub type OpaqueVariant = [u8; 24];
pub type OpaqueCallable = [u8; 16];

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        pub type OpaqueString = [u8; 8];
        pub type OpaqueStringName = [u8; 8];
        pub type OpaqueArray = [u8; 8];
    } else {
        pub type OpaqueString = [u8; 4];
        pub type OpaqueStringName = [u8; 4];
        pub type OpaqueArray = [u8; 4];
    }
}

pub type VariantFromKindFn = unsafe extern "C" fn(dest: UninitVariantPtr, src: ConstTypePtr);
pub type VariantToKindFn = unsafe extern "C" fn(dest: TypePtr, src: ConstVariantPtr);

pub type CallableCallFn = unsafe extern "C" fn(
    userdata: CallableUserData,
    args: *const ConstVariantPtr,
    arg_count: i64,
    ret: UninitVariantPtr,
);
pub type CallableFreeFn = unsafe extern "C" fn(userdata: CallableUserData);

pub const CALL_OK: i32 = 0;
pub const CALL_ERROR_INVALID_METHOD: i32 = 1;
pub const CALL_ERROR_INVALID_ARGUMENT: i32 = 2;
pub const CALL_ERROR_TOO_MANY_ARGUMENTS: i32 = 3;
pub const CALL_ERROR_TOO_FEW_ARGUMENTS: i32 = 4;
pub const CALL_ERROR_INSTANCE_IS_NULL: i32 = 5;

pub const SEVERITY_INFO: i32 = 0;
pub const SEVERITY_WARNING: i32 = 1;
pub const SEVERITY_ERROR: i32 = 2;

/// Out-parameter of [`HostInterface::object_method_bind_call`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallError {
    pub error: i32,
    pub argument: i32,
    pub expected: i32,
}

impl CallError {
    pub fn ok(&self) -> bool {
        self.error == CALL_OK
    }
}

/// The function table the host installs at startup.
///
/// Interface invariants the host must uphold:
/// - string names are canonical: two names compare equal iff their opaque
///   representations are byte-identical,
/// - methods returning reference-counted objects return them with a
///   reference already taken for the caller,
/// - every function pointer stays valid for the lifetime of the process.
#[repr(C)]
pub struct HostInterface {
    pub version: u32,

    // String names (interned).
    pub string_name_new: unsafe extern "C" fn(dest: TypePtr, utf8: *const c_char),
    pub string_name_copy: unsafe extern "C" fn(dest: TypePtr, src: ConstTypePtr),
    pub string_name_free: unsafe extern "C" fn(name: TypePtr),

    // Strings.
    pub string_new: unsafe extern "C" fn(dest: TypePtr, utf8: *const c_char, len: i64),
    pub string_copy: unsafe extern "C" fn(dest: TypePtr, src: ConstTypePtr),
    pub string_utf8_len: unsafe extern "C" fn(src: ConstTypePtr) -> i64,
    pub string_to_utf8: unsafe extern "C" fn(src: ConstTypePtr, buf: *mut c_char, cap: i64) -> i64,
    pub string_free: unsafe extern "C" fn(string: TypePtr),

    // Variants.
    pub variant_new_nil: unsafe extern "C" fn(dest: UninitVariantPtr),
    pub variant_new_copy: unsafe extern "C" fn(dest: UninitVariantPtr, src: ConstVariantPtr),
    pub variant_free: unsafe extern "C" fn(variant: VariantPtr),
    pub variant_get_kind: unsafe extern "C" fn(variant: ConstVariantPtr) -> i32,
    pub variant_from_kind_fn: unsafe extern "C" fn(kind: i32) -> VariantFromKindFn,
    pub variant_to_kind_fn: unsafe extern "C" fn(kind: i32) -> VariantToKindFn,

    // Class database.
    pub classdb_construct_object: unsafe extern "C" fn(class_name: ConstTypePtr) -> ObjectPtr,
    pub classdb_get_method_bind: unsafe extern "C" fn(
        class_name: ConstTypePtr,
        method_name: ConstTypePtr,
        hash: i64,
    ) -> MethodBindPtr,
    pub classdb_is_parent_class:
        unsafe extern "C" fn(class_name: ConstTypePtr, parent_name: ConstTypePtr) -> bool,

    // Method invocation.
    pub object_method_bind_ptrcall: unsafe extern "C" fn(
        bind: MethodBindPtr,
        object: ObjectPtr,
        args: *const ConstTypePtr,
        ret: TypePtr,
    ),
    pub object_method_bind_call: unsafe extern "C" fn(
        bind: MethodBindPtr,
        object: ObjectPtr,
        args: *const ConstVariantPtr,
        arg_count: i64,
        ret: UninitVariantPtr,
        error: *mut CallError,
    ),

    // Object lifetime and identity.
    pub object_destroy: unsafe extern "C" fn(object: ObjectPtr),
    pub object_get_class_name: unsafe extern "C" fn(object: ConstObjectPtr, dest: TypePtr),
    pub object_get_instance_id: unsafe extern "C" fn(object: ConstObjectPtr) -> u64,

    // Custom callables.
    pub callable_create: unsafe extern "C" fn(
        userdata: CallableUserData,
        call: CallableCallFn,
        free: CallableFreeFn,
        dest: TypePtr,
    ),
    pub callable_copy: unsafe extern "C" fn(dest: TypePtr, src: ConstTypePtr),
    pub callable_free: unsafe extern "C" fn(callable: TypePtr),

    // Arrays.
    pub array_new: unsafe extern "C" fn(dest: TypePtr),
    pub array_copy: unsafe extern "C" fn(dest: TypePtr, src: ConstTypePtr),
    pub array_free: unsafe extern "C" fn(array: TypePtr),
    pub array_len: unsafe extern "C" fn(array: ConstTypePtr) -> i64,
    pub array_get:
        unsafe extern "C" fn(array: ConstTypePtr, index: i64, dest: UninitVariantPtr) -> bool,
    pub array_push: unsafe extern "C" fn(array: TypePtr, value: ConstVariantPtr),

    // Singletons.
    pub global_get_singleton: unsafe extern "C" fn(name: ConstTypePtr) -> ObjectPtr,

    // Message output.
    pub print: unsafe extern "C" fn(severity: i32, utf8: *const c_char),
}

#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("host passed a null interface table")]
    NullInterface,

    #[error("host interface version {found} does not match expected version {expected}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("host interface was already installed")]
    AlreadyInitialized,
}

static HOST: OnceLock<&'static HostInterface> = OnceLock::new();

/// Installs the host table. Must be called exactly once before any other
/// binding API is used.
///
/// # Safety
///
/// `interface` must point to a [`HostInterface`] that stays valid and
/// unchanged for the remaining lifetime of the process.
pub unsafe fn initialize(interface: *const HostInterface) -> Result<(), InitError> {
    if interface.is_null() {
        return Err(InitError::NullInterface);
    }

    let interface: &'static HostInterface = unsafe { &*interface };

    if interface.version != INTERFACE_VERSION {
        return Err(InitError::VersionMismatch {
            expected: INTERFACE_VERSION,
            found: interface.version,
        });
    }

    HOST.set(interface)
        .map_err(|_| InitError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    HOST.get().is_some()
}

pub fn host() -> &'static HostInterface {
    HOST.get()
        .copied()
        .expect("host interface is not installed; the engine entry point did not run")
}

/// Emits the C entry point a host resolves by name to hand over its
/// interface table.
#[macro_export]
macro_rules! entry_point {
    ($fn_name:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $fn_name(interface: *const $crate::sys::HostInterface) -> bool {
            unsafe { $crate::sys::initialize(interface) }.is_ok()
        }
    };
}
