/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::object::Object;
use super::ref_counted::RefCounted;
use crate::builtin::{GString, InternedName};
use crate::meta::NativeFfi;
use crate::obj::{
    Constructible, EngineClass, Gd, Inherits, RawObject, RefCountedMemory, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;
use crate::sys;

/// Base class for all engine resources.
#[repr(transparent)]
pub struct Resource {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Resource"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_NAME: InternedName = InternedName::new(const_str::cstr!("set_name"));
    pub static GET_NAME: InternedName = InternedName::new(const_str::cstr!("get_name"));
    pub static SET_PATH: InternedName = InternedName::new(const_str::cstr!("set_path"));
    pub static GET_PATH: InternedName = InternedName::new(const_str::cstr!("get_path"));
    pub static EMIT_CHANGED: InternedName = InternedName::new(const_str::cstr!("emit_changed"));
    pub static DUPLICATE: InternedName = InternedName::new(const_str::cstr!("duplicate"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static RESOURCE_NAME: InternedName =
        InternedName::new(const_str::cstr!("resource_name"));
    pub static RESOURCE_PATH: InternedName =
        InternedName::new(const_str::cstr!("resource_path"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static CHANGED: InternedName = InternedName::new(const_str::cstr!("changed"));
}

impl Resource {
    pub fn set_name(&mut self, name: &GString) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_NAME, 3089850668);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[name.type_ptr()]) };
    }

    pub fn get_name(&self) -> GString {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_NAME, 201670096);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_path(&mut self, path: &GString) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_PATH, 3089850669);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[path.type_ptr()]) };
    }

    pub fn get_path(&self) -> GString {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_PATH, 201670097);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    /// Fires the `changed` signal on the engine side.
    pub fn emit_changed(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::EMIT_CHANGED, 3218959716);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn duplicate(&self) -> Option<Gd<Resource>> {
        self.duplicate_full(false)
    }

    pub fn duplicate_full(&self, subresources: bool) -> Option<Gd<Resource>> {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::DUPLICATE, 482882304);

        let ptr: sys::ObjectPtr =
            unsafe { bind.ptrcall_return(self.object.ptr(), &[subresources.type_ptr()]) };

        (!ptr.is_null()).then(|| unsafe { Gd::from_object_ptr(ptr, true) })
    }

    // resource_name / resource_path property sugar.

    pub fn resource_name(&self) -> GString {
        self.get_name()
    }

    pub fn set_resource_name(&mut self, name: &GString) {
        self.set_name(name);
    }

    pub fn resource_path(&self) -> GString {
        self.get_path()
    }

    pub fn set_resource_path(&mut self, path: &GString) {
        self.set_path(path);
    }

    pub fn changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::CHANGED)
    }
}

unsafe impl EngineClass for Resource {
    type Memory = RefCountedMemory;

    const CLASS: &'static str = "Resource";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for Resource {}

unsafe impl Inherits<RefCounted> for Resource {}
unsafe impl Inherits<Object> for Resource {}

impl Deref for Resource {
    type Target = RefCounted;

    fn deref(&self) -> &RefCounted {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for Resource {
    fn deref_mut(&mut self) -> &mut RefCounted {
        unsafe { class_mut(self) }
    }
}
