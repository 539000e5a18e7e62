/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ffi::{CStr, CString};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::sync::OnceLock;

use crate::sys;

/// Interned engine name. Canonical: equal names have byte-identical
/// opaque representations, so comparison never calls into the host.
#[repr(transparent)]
pub struct StringName {
    opaque: sys::OpaqueStringName,
}

impl StringName {
    pub fn from_cstr(value: &CStr) -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().string_name_new)(dest, value.as_ptr())) }
    }

    pub(crate) fn sys_ptr(&self) -> sys::ConstTypePtr {
        self.opaque.as_ptr() as sys::ConstTypePtr
    }

    pub(crate) unsafe fn from_sys_init(init: impl FnOnce(sys::TypePtr)) -> Self {
        let mut opaque = MaybeUninit::<sys::OpaqueStringName>::uninit();
        init(opaque.as_mut_ptr() as sys::TypePtr);

        Self {
            opaque: unsafe { opaque.assume_init() },
        }
    }
}

impl From<&str> for StringName {
    fn from(value: &str) -> Self {
        let cstring = CString::new(value).expect("string names must not contain NUL bytes");

        Self::from_cstr(&cstring)
    }
}

impl Clone for StringName {
    fn clone(&self) -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().string_name_copy)(dest, self.sys_ptr())) }
    }
}

impl Drop for StringName {
    fn drop(&mut self) {
        unsafe { (sys::host().string_name_free)(self.opaque.as_mut_ptr() as sys::TypePtr) }
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        self.opaque == other.opaque
    }
}

impl Eq for StringName {}

impl Hash for StringName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.opaque.hash(state);
    }
}

impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringName(#{})", usize::from_ne_bytes(self.opaque))
    }
}

/// A name that is interned on first use and reused for the remaining
/// process lifetime. All reflection name tables are built from these so
/// repeated lookups never allocate.
pub struct InternedName {
    cstr: &'static CStr,
    cell: OnceLock<StringName>,
}

impl InternedName {
    pub const fn new(cstr: &'static CStr) -> Self {
        Self {
            cstr,
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &StringName {
        self.cell.get_or_init(|| StringName::from_cstr(self.cstr))
    }

    pub fn as_str(&self) -> &'static str {
        self.cstr
            .to_str()
            .expect("engine names are always valid UTF-8")
    }
}

impl fmt::Debug for InternedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternedName({:?})", self.as_str())
    }
}
