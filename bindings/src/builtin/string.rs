/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_char;
use std::fmt;
use std::mem::MaybeUninit;

use crate::sys;

/// Engine-owned string. The payload lives host-side; this wrapper only
/// carries the opaque handle and frees it on drop.
#[repr(transparent)]
pub struct GString {
    opaque: sys::OpaqueString,
}

impl GString {
    pub fn new() -> Self {
        Self::from_utf8("")
    }

    fn from_utf8(value: &str) -> Self {
        unsafe {
            Self::from_sys_init(|dest| {
                (sys::host().string_new)(dest, value.as_ptr() as *const c_char, value.len() as i64)
            })
        }
    }

    /// Length of the UTF-8 encoding in bytes.
    pub fn len(&self) -> usize {
        unsafe { (sys::host().string_utf8_len)(self.sys_ptr()) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn sys_ptr(&self) -> sys::ConstTypePtr {
        self.opaque.as_ptr() as sys::ConstTypePtr
    }

    pub(crate) unsafe fn from_sys_init(init: impl FnOnce(sys::TypePtr)) -> Self {
        let mut opaque = MaybeUninit::<sys::OpaqueString>::uninit();
        init(opaque.as_mut_ptr() as sys::TypePtr);

        Self {
            opaque: unsafe { opaque.assume_init() },
        }
    }
}

impl Default for GString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GString {
    fn clone(&self) -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().string_copy)(dest, self.sys_ptr())) }
    }
}

impl Drop for GString {
    fn drop(&mut self) {
        unsafe { (sys::host().string_free)(self.opaque.as_mut_ptr() as sys::TypePtr) }
    }
}

impl From<&str> for GString {
    fn from(value: &str) -> Self {
        Self::from_utf8(value)
    }
}

impl From<&String> for GString {
    fn from(value: &String) -> Self {
        Self::from_utf8(value)
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len();
        let mut buf = vec![0_u8; len];

        unsafe {
            (sys::host().string_to_utf8)(self.sys_ptr(), buf.as_mut_ptr() as *mut c_char, len as i64)
        };

        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

impl PartialEq for GString {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for GString {}
