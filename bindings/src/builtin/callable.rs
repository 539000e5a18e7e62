/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::mem::MaybeUninit;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::Variant;
use crate::godot_error;
use crate::sys;

type BoxedFn = Box<dyn Fn(&[&Variant]) -> Variant>;

struct CallableData {
    func: BoxedFn,
}

/// The host invokes this with a positional list of variant pointers;
/// arguments are decoded by position on the Rust side.
unsafe extern "C" fn trampoline_call(
    userdata: sys::CallableUserData,
    args: *const sys::ConstVariantPtr,
    arg_count: i64,
    ret: sys::UninitVariantPtr,
) {
    let data = unsafe { &*(userdata as *const CallableData) };

    let borrowed: Vec<&Variant> = (0..arg_count as usize)
        .map(|index| unsafe { Variant::borrow_ptr(*args.add(index)) })
        .collect();

    let result = catch_unwind(AssertUnwindSafe(|| (data.func)(&borrowed)));

    let result = result.unwrap_or_else(|_| {
        godot_error!("a Rust callable panicked; returning NIL to the engine");

        Variant::nil()
    });

    unsafe { (sys::host().variant_new_copy)(ret, result.ptr()) };
}

unsafe extern "C" fn trampoline_free(userdata: sys::CallableUserData) {
    drop(unsafe { Box::from_raw(userdata as *mut CallableData) });
}

/// An engine-invokable value wrapping a Rust closure. The closure is
/// freed by the host once the last engine-side copy is released.
#[repr(transparent)]
pub struct Callable {
    opaque: sys::OpaqueCallable,
}

impl Callable {
    pub fn from_fn(func: impl Fn(&[&Variant]) -> Variant + 'static) -> Self {
        let data = Box::new(CallableData {
            func: Box::new(func),
        });
        let userdata = Box::into_raw(data) as sys::CallableUserData;

        unsafe {
            Self::from_sys_init(|dest| {
                (sys::host().callable_create)(userdata, trampoline_call, trampoline_free, dest)
            })
        }
    }

    pub(crate) fn sys_ptr(&self) -> sys::ConstTypePtr {
        self.opaque.as_ptr() as sys::ConstTypePtr
    }

    pub(crate) unsafe fn from_sys_init(init: impl FnOnce(sys::TypePtr)) -> Self {
        let mut opaque = MaybeUninit::<sys::OpaqueCallable>::uninit();
        init(opaque.as_mut_ptr() as sys::TypePtr);

        Self {
            opaque: unsafe { opaque.assume_init() },
        }
    }
}

impl Clone for Callable {
    fn clone(&self) -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().callable_copy)(dest, self.sys_ptr())) }
    }
}

impl Drop for Callable {
    fn drop(&mut self) {
        unsafe { (sys::host().callable_free)(self.opaque.as_mut_ptr() as sys::TypePtr) }
    }
}

impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callable")
    }
}
