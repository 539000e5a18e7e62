/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::node::Node;
use super::object::Object;
use crate::builtin::{InternedName, Vector3};
use crate::meta::NativeFfi;
use crate::obj::{
    Constructible, EngineClass, Inherits, ManualMemory, RawObject, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;

/// A node positioned in 3D space.
#[repr(transparent)]
pub struct Node3D {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Node3D"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_POSITION: InternedName = InternedName::new(const_str::cstr!("set_position"));
    pub static GET_POSITION: InternedName = InternedName::new(const_str::cstr!("get_position"));
    pub static SET_ROTATION: InternedName = InternedName::new(const_str::cstr!("set_rotation"));
    pub static GET_ROTATION: InternedName = InternedName::new(const_str::cstr!("get_rotation"));
    pub static SET_SCALE: InternedName = InternedName::new(const_str::cstr!("set_scale"));
    pub static GET_SCALE: InternedName = InternedName::new(const_str::cstr!("get_scale"));
    pub static TRANSLATE: InternedName = InternedName::new(const_str::cstr!("translate"));
    pub static SET_VISIBLE: InternedName = InternedName::new(const_str::cstr!("set_visible"));
    pub static IS_VISIBLE: InternedName = InternedName::new(const_str::cstr!("is_visible"));
    pub static SHOW: InternedName = InternedName::new(const_str::cstr!("show"));
    pub static HIDE: InternedName = InternedName::new(const_str::cstr!("hide"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static POSITION: InternedName = InternedName::new(const_str::cstr!("position"));
    pub static ROTATION: InternedName = InternedName::new(const_str::cstr!("rotation"));
    pub static SCALE: InternedName = InternedName::new(const_str::cstr!("scale"));
    pub static VISIBLE: InternedName = InternedName::new(const_str::cstr!("visible"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static VISIBILITY_CHANGED: InternedName =
        InternedName::new(const_str::cstr!("visibility_changed"));
}

impl Node3D {
    pub fn set_position(&mut self, position: Vector3) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_POSITION, 2906477875);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[position.type_ptr()]) };
    }

    pub fn get_position(&self) -> Vector3 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_POSITION, 2916281908);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    /// Rotation as Euler angles in radians.
    pub fn set_rotation(&mut self, radians: Vector3) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_ROTATION, 2906477876);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[radians.type_ptr()]) };
    }

    pub fn get_rotation(&self) -> Vector3 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_ROTATION, 2916281909);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_scale(&mut self, scale: Vector3) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_SCALE, 2906477877);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[scale.type_ptr()]) };
    }

    pub fn get_scale(&self) -> Vector3 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_SCALE, 2916281910);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    /// Moves the node by `offset` in local space.
    pub fn translate(&mut self, offset: Vector3) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::TRANSLATE, 2906477878);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[offset.type_ptr()]) };
    }

    pub fn set_visible(&mut self, visible: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_VISIBLE, 2586408648);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[visible.type_ptr()]) };
    }

    pub fn is_visible(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_VISIBLE, 36873704);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn show(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SHOW, 3218959724);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn hide(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::HIDE, 3218959725);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    // position / rotation / scale / visible property sugar.

    pub fn position(&self) -> Vector3 {
        self.get_position()
    }

    pub fn rotation(&self) -> Vector3 {
        self.get_rotation()
    }

    pub fn scale(&self) -> Vector3 {
        self.get_scale()
    }

    pub fn visible(&self) -> bool {
        self.is_visible()
    }

    pub fn visibility_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::VISIBILITY_CHANGED)
    }
}

unsafe impl EngineClass for Node3D {
    type Memory = ManualMemory;

    const CLASS: &'static str = "Node3D";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for Node3D {}

unsafe impl Inherits<Node> for Node3D {}
unsafe impl Inherits<Object> for Node3D {}

impl Deref for Node3D {
    type Target = Node;

    fn deref(&self) -> &Node {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for Node3D {
    fn deref_mut(&mut self) -> &mut Node {
        unsafe { class_mut(self) }
    }
}
