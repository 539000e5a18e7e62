/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::object::Object;
use super::ref_counted::RefCounted;
use super::resource::Resource;
use crate::builtin::InternedName;
use crate::meta::NativeFfi;
use crate::obj::{
    Constructible, EngineClass, Inherits, RawObject, RefCountedMemory, class_mut, class_ref,
};
use crate::registry::MethodBindCache;

/// Baked navigation data consumed by navigation regions.
#[repr(transparent)]
pub struct NavigationMesh {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("NavigationMesh"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_CELL_SIZE: InternedName =
        InternedName::new(const_str::cstr!("set_cell_size"));
    pub static GET_CELL_SIZE: InternedName =
        InternedName::new(const_str::cstr!("get_cell_size"));
    pub static SET_CELL_HEIGHT: InternedName =
        InternedName::new(const_str::cstr!("set_cell_height"));
    pub static GET_CELL_HEIGHT: InternedName =
        InternedName::new(const_str::cstr!("get_cell_height"));
    pub static GET_POLYGON_COUNT: InternedName =
        InternedName::new(const_str::cstr!("get_polygon_count"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static CELL_SIZE: InternedName = InternedName::new(const_str::cstr!("cell_size"));
    pub static CELL_HEIGHT: InternedName = InternedName::new(const_str::cstr!("cell_height"));
}

impl NavigationMesh {
    pub fn set_cell_size(&mut self, size: f32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_CELL_SIZE, 373806692);

        let size = size as f64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[size.type_ptr()]) };
    }

    pub fn get_cell_size(&self) -> f32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_CELL_SIZE, 1740695153);

        let size: f64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        size as f32
    }

    pub fn set_cell_height(&mut self, height: f32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_CELL_HEIGHT, 373806693);

        let height = height as f64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[height.type_ptr()]) };
    }

    pub fn get_cell_height(&self) -> f32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_CELL_HEIGHT, 1740695154);

        let height: f64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        height as f32
    }

    pub fn get_polygon_count(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_POLYGON_COUNT, 3905245791);

        let count: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        count as i32
    }

    // cell_size / cell_height property sugar.

    pub fn cell_size(&self) -> f32 {
        self.get_cell_size()
    }

    pub fn cell_height(&self) -> f32 {
        self.get_cell_height()
    }
}

unsafe impl EngineClass for NavigationMesh {
    type Memory = RefCountedMemory;

    const CLASS: &'static str = "NavigationMesh";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for NavigationMesh {}

unsafe impl Inherits<Resource> for NavigationMesh {}
unsafe impl Inherits<RefCounted> for NavigationMesh {}
unsafe impl Inherits<Object> for NavigationMesh {}

impl Deref for NavigationMesh {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for NavigationMesh {
    fn deref_mut(&mut self) -> &mut Resource {
        unsafe { class_mut(self) }
    }
}
