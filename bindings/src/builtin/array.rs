/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::mem::MaybeUninit;

use super::Variant;
use crate::sys;

/// Engine array of variants. Storage is host-side and shared between
/// copies, matching the engine's own reference semantics.
#[repr(transparent)]
pub struct VariantArray {
    opaque: sys::OpaqueArray,
}

impl VariantArray {
    pub fn new() -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().array_new)(dest)) }
    }

    pub fn len(&self) -> usize {
        unsafe { (sys::host().array_len)(self.sys_ptr()) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The host writes NIL into the slot when `index` is out of bounds,
    /// so the temporary is always safe to drop.
    pub fn get(&self, index: usize) -> Option<Variant> {
        let mut in_bounds = false;

        let value = unsafe {
            Variant::from_sys_init(|dest| {
                in_bounds = (sys::host().array_get)(self.sys_ptr(), index as i64, dest);
            })
        };

        in_bounds.then_some(value)
    }

    pub fn push(&mut self, value: &Variant) {
        unsafe {
            (sys::host().array_push)(self.opaque.as_mut_ptr() as sys::TypePtr, value.ptr())
        };
    }

    pub fn iter(&self) -> impl Iterator<Item = Variant> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }

    pub(crate) fn sys_ptr(&self) -> sys::ConstTypePtr {
        self.opaque.as_ptr() as sys::ConstTypePtr
    }

    pub(crate) unsafe fn from_sys_init(init: impl FnOnce(sys::TypePtr)) -> Self {
        let mut opaque = MaybeUninit::<sys::OpaqueArray>::uninit();
        init(opaque.as_mut_ptr() as sys::TypePtr);

        Self {
            opaque: unsafe { opaque.assume_init() },
        }
    }
}

impl Default for VariantArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for VariantArray {
    fn clone(&self) -> Self {
        unsafe { Self::from_sys_init(|dest| (sys::host().array_copy)(dest, self.sys_ptr())) }
    }
}

impl Drop for VariantArray {
    fn drop(&mut self) {
        unsafe { (sys::host().array_free)(self.opaque.as_mut_ptr() as sys::TypePtr) }
    }
}

impl FromIterator<Variant> for VariantArray {
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        let mut array = VariantArray::new();

        for value in iter {
            array.push(&value);
        }

        array
    }
}

impl std::fmt::Debug for VariantArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VariantArray(len = {})", self.len())
    }
}
