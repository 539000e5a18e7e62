/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::object::Object;
use crate::builtin::InternedName;
use crate::obj::{
    Constructible, EngineClass, Inherits, RawObject, RefCountedMemory, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::sys;

/// Base of every class whose lifetime is shared through engine-side
/// reference counting.
#[repr(transparent)]
pub struct RefCounted {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("RefCounted"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static INIT_REF: InternedName = InternedName::new(const_str::cstr!("init_ref"));
    pub static REFERENCE: InternedName = InternedName::new(const_str::cstr!("reference"));
    pub static UNREFERENCE: InternedName = InternedName::new(const_str::cstr!("unreference"));
    pub static GET_REFERENCE_COUNT: InternedName =
        InternedName::new(const_str::cstr!("get_reference_count"));
}

impl RefCounted {
    pub fn init_ref(&mut self) -> bool {
        raw_init_ref(self.object.ptr())
    }

    pub fn reference(&mut self) -> bool {
        raw_reference(self.object.ptr())
    }

    /// Returns true when the count dropped to zero and the caller must
    /// destroy the object.
    pub fn unreference(&mut self) -> bool {
        raw_unreference(self.object.ptr())
    }

    pub fn get_reference_count(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_REFERENCE_COUNT, 3905245786);

        let count: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        count as i32
    }
}

// Raw entry points shared with the handle memory policy, which has no
// class reference to go through.

pub(crate) fn raw_init_ref(object: sys::ObjectPtr) -> bool {
    static BIND: MethodBindCache = MethodBindCache::new();
    let bind = BIND.get(&CLASS_NAME, &method_name::INIT_REF, 2240911060);

    unsafe { bind.ptrcall_return(object, &[]) }
}

pub(crate) fn raw_reference(object: sys::ObjectPtr) -> bool {
    static BIND: MethodBindCache = MethodBindCache::new();
    let bind = BIND.get(&CLASS_NAME, &method_name::REFERENCE, 2240911061);

    unsafe { bind.ptrcall_return(object, &[]) }
}

pub(crate) fn raw_unreference(object: sys::ObjectPtr) -> bool {
    static BIND: MethodBindCache = MethodBindCache::new();
    let bind = BIND.get(&CLASS_NAME, &method_name::UNREFERENCE, 2240911062);

    unsafe { bind.ptrcall_return(object, &[]) }
}

unsafe impl EngineClass for RefCounted {
    type Memory = RefCountedMemory;

    const CLASS: &'static str = "RefCounted";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for RefCounted {}

unsafe impl Inherits<Object> for RefCounted {}

impl Deref for RefCounted {
    type Target = Object;

    fn deref(&self) -> &Object {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for RefCounted {
    fn deref_mut(&mut self) -> &mut Object {
        unsafe { class_mut(self) }
    }
}
