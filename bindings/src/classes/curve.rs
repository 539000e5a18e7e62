/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::object::Object;
use super::ref_counted::RefCounted;
use super::resource::Resource;
use crate::builtin::{InternedName, Vector2};
use crate::meta::{EngineEnum, NativeFfi, engine_enum};
use crate::obj::{
    Constructible, EngineClass, Inherits, RawObject, RefCountedMemory, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;

/// A mathematical curve: an ordered set of points with per-side tangents,
/// sampled either directly or through a baked cache. All evaluation
/// happens engine-side.
#[repr(transparent)]
pub struct Curve {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Curve"));

engine_enum! {
    pub enum TangentMode {
        TANGENT_FREE = 0,
        TANGENT_LINEAR = 1,
    }
}

pub mod method_name {
    use crate::builtin::InternedName;

    pub static GET_POINT_COUNT: InternedName =
        InternedName::new(const_str::cstr!("get_point_count"));
    pub static ADD_POINT: InternedName = InternedName::new(const_str::cstr!("add_point"));
    pub static REMOVE_POINT: InternedName = InternedName::new(const_str::cstr!("remove_point"));
    pub static CLEAR_POINTS: InternedName = InternedName::new(const_str::cstr!("clear_points"));
    pub static GET_POINT_POSITION: InternedName =
        InternedName::new(const_str::cstr!("get_point_position"));
    pub static SAMPLE: InternedName = InternedName::new(const_str::cstr!("sample"));
    pub static SAMPLE_BAKED: InternedName = InternedName::new(const_str::cstr!("sample_baked"));
    pub static SET_MIN_VALUE: InternedName = InternedName::new(const_str::cstr!("set_min_value"));
    pub static GET_MIN_VALUE: InternedName = InternedName::new(const_str::cstr!("get_min_value"));
    pub static SET_MAX_VALUE: InternedName = InternedName::new(const_str::cstr!("set_max_value"));
    pub static GET_MAX_VALUE: InternedName = InternedName::new(const_str::cstr!("get_max_value"));
    pub static BAKE: InternedName = InternedName::new(const_str::cstr!("bake"));
    pub static SET_BAKE_RESOLUTION: InternedName =
        InternedName::new(const_str::cstr!("set_bake_resolution"));
    pub static GET_BAKE_RESOLUTION: InternedName =
        InternedName::new(const_str::cstr!("get_bake_resolution"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static MIN_VALUE: InternedName = InternedName::new(const_str::cstr!("min_value"));
    pub static MAX_VALUE: InternedName = InternedName::new(const_str::cstr!("max_value"));
    pub static BAKE_RESOLUTION: InternedName =
        InternedName::new(const_str::cstr!("bake_resolution"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static RANGE_CHANGED: InternedName = InternedName::new(const_str::cstr!("range_changed"));
}

impl Curve {
    pub fn get_point_count(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_POINT_COUNT, 3905245787);

        let count: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        count as i32
    }

    /// Returns the index the new point landed on after sorting by
    /// offset.
    pub fn add_point(&mut self, position: Vector2) -> i32 {
        self.add_point_full(
            position,
            0.0,
            0.0,
            TangentMode::TANGENT_FREE,
            TangentMode::TANGENT_FREE,
        )
    }

    pub fn add_point_full(
        &mut self,
        position: Vector2,
        left_tangent: f32,
        right_tangent: f32,
        left_mode: TangentMode,
        right_mode: TangentMode,
    ) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::ADD_POINT, 2882143029);

        let left_tangent = left_tangent as f64;
        let right_tangent = right_tangent as f64;
        let left_mode = left_mode.ord() as i64;
        let right_mode = right_mode.ord() as i64;

        let index: i64 = unsafe {
            bind.ptrcall_return(
                self.object.ptr(),
                &[
                    position.type_ptr(),
                    left_tangent.type_ptr(),
                    right_tangent.type_ptr(),
                    left_mode.type_ptr(),
                    right_mode.type_ptr(),
                ],
            )
        };

        index as i32
    }

    pub fn remove_point(&mut self, index: i32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::REMOVE_POINT, 1286410249);

        let index = index as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[index.type_ptr()]) };
    }

    pub fn clear_points(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::CLEAR_POINTS, 3218959717);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn get_point_position(&self, index: i32) -> Vector2 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_POINT_POSITION, 2299179447);

        let index = index as i64;

        unsafe { bind.ptrcall_return(self.object.ptr(), &[index.type_ptr()]) }
    }

    pub fn sample(&self, offset: f32) -> f32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SAMPLE, 3919130443);

        let offset = offset as f64;
        let value: f64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[offset.type_ptr()]) };

        value as f32
    }

    /// Like [`Self::sample`] but reads the baked cache.
    pub fn sample_baked(&self, offset: f32) -> f32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SAMPLE_BAKED, 3919130444);

        let offset = offset as f64;
        let value: f64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[offset.type_ptr()]) };

        value as f32
    }

    pub fn set_min_value(&mut self, value: f32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_MIN_VALUE, 373806689);

        let value = value as f64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[value.type_ptr()]) };
    }

    pub fn get_min_value(&self) -> f32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_MIN_VALUE, 1740695150);

        let value: f64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        value as f32
    }

    pub fn set_max_value(&mut self, value: f32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_MAX_VALUE, 373806690);

        let value = value as f64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[value.type_ptr()]) };
    }

    pub fn get_max_value(&self) -> f32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_MAX_VALUE, 1740695151);

        let value: f64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        value as f32
    }

    pub fn bake(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::BAKE, 3218959718);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn set_bake_resolution(&mut self, resolution: i32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_BAKE_RESOLUTION, 1286410250);

        let resolution = resolution as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[resolution.type_ptr()]) };
    }

    pub fn get_bake_resolution(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_BAKE_RESOLUTION, 3905245788);

        let resolution: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        resolution as i32
    }

    // min_value / max_value / bake_resolution property sugar.

    pub fn min_value(&self) -> f32 {
        self.get_min_value()
    }

    pub fn max_value(&self) -> f32 {
        self.get_max_value()
    }

    pub fn bake_resolution(&self) -> i32 {
        self.get_bake_resolution()
    }

    /// Emitted when `min_value` or `max_value` changes.
    pub fn range_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::RANGE_CHANGED)
    }
}

unsafe impl EngineClass for Curve {
    type Memory = RefCountedMemory;

    const CLASS: &'static str = "Curve";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for Curve {}

unsafe impl Inherits<Resource> for Curve {}
unsafe impl Inherits<RefCounted> for Curve {}
unsafe impl Inherits<Object> for Curve {}

impl Deref for Curve {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for Curve {
    fn deref_mut(&mut self) -> &mut Resource {
        unsafe { class_mut(self) }
    }
}
