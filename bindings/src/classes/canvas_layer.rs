/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::node::Node;
use super::object::Object;
use crate::builtin::{InternedName, Vector2};
use crate::meta::NativeFfi;
use crate::obj::{
    Constructible, EngineClass, Inherits, ManualMemory, RawObject, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;

/// A rendering layer drawn independently of the scene's cameras.
#[repr(transparent)]
pub struct CanvasLayer {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("CanvasLayer"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_LAYER: InternedName = InternedName::new(const_str::cstr!("set_layer"));
    pub static GET_LAYER: InternedName = InternedName::new(const_str::cstr!("get_layer"));
    pub static SET_OFFSET: InternedName = InternedName::new(const_str::cstr!("set_offset"));
    pub static GET_OFFSET: InternedName = InternedName::new(const_str::cstr!("get_offset"));
    pub static SET_ROTATION: InternedName = InternedName::new(const_str::cstr!("set_rotation"));
    pub static GET_ROTATION: InternedName = InternedName::new(const_str::cstr!("get_rotation"));
    pub static SET_SCALE: InternedName = InternedName::new(const_str::cstr!("set_scale"));
    pub static GET_SCALE: InternedName = InternedName::new(const_str::cstr!("get_scale"));
    pub static SET_VISIBLE: InternedName = InternedName::new(const_str::cstr!("set_visible"));
    pub static IS_VISIBLE: InternedName = InternedName::new(const_str::cstr!("is_visible"));
    pub static SHOW: InternedName = InternedName::new(const_str::cstr!("show"));
    pub static HIDE: InternedName = InternedName::new(const_str::cstr!("hide"));
    pub static SET_FOLLOW_VIEWPORT: InternedName =
        InternedName::new(const_str::cstr!("set_follow_viewport"));
    pub static IS_FOLLOWING_VIEWPORT: InternedName =
        InternedName::new(const_str::cstr!("is_following_viewport"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static LAYER: InternedName = InternedName::new(const_str::cstr!("layer"));
    pub static OFFSET: InternedName = InternedName::new(const_str::cstr!("offset"));
    pub static ROTATION: InternedName = InternedName::new(const_str::cstr!("rotation"));
    pub static SCALE: InternedName = InternedName::new(const_str::cstr!("scale"));
    pub static VISIBLE: InternedName = InternedName::new(const_str::cstr!("visible"));
    pub static FOLLOW_VIEWPORT_ENABLED: InternedName =
        InternedName::new(const_str::cstr!("follow_viewport_enabled"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static VISIBILITY_CHANGED: InternedName =
        InternedName::new(const_str::cstr!("visibility_changed"));
}

impl CanvasLayer {
    pub fn set_layer(&mut self, layer: i32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_LAYER, 1286410252);

        let layer = layer as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[layer.type_ptr()]) };
    }

    pub fn get_layer(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_LAYER, 3905245790);

        let layer: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        layer as i32
    }

    pub fn set_offset(&mut self, offset: Vector2) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_OFFSET, 743155724);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[offset.type_ptr()]) };
    }

    pub fn get_offset(&self) -> Vector2 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_OFFSET, 3341600327);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_rotation(&mut self, radians: f32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_ROTATION, 373806691);

        let radians = radians as f64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[radians.type_ptr()]) };
    }

    pub fn get_rotation(&self) -> f32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_ROTATION, 1740695152);

        let radians: f64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        radians as f32
    }

    pub fn set_scale(&mut self, scale: Vector2) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_SCALE, 743155725);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[scale.type_ptr()]) };
    }

    pub fn get_scale(&self) -> Vector2 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_SCALE, 3341600328);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_visible(&mut self, visible: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_VISIBLE, 2586408646);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[visible.type_ptr()]) };
    }

    pub fn is_visible(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_VISIBLE, 36873702);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn show(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SHOW, 3218959722);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn hide(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::HIDE, 3218959723);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn set_follow_viewport(&mut self, enabled: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_FOLLOW_VIEWPORT, 2586408647);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[enabled.type_ptr()]) };
    }

    pub fn is_following_viewport(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_FOLLOWING_VIEWPORT, 36873703);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    // layer / offset / rotation / scale / visible /
    // follow_viewport_enabled property sugar.

    pub fn layer(&self) -> i32 {
        self.get_layer()
    }

    pub fn offset(&self) -> Vector2 {
        self.get_offset()
    }

    pub fn rotation(&self) -> f32 {
        self.get_rotation()
    }

    pub fn scale(&self) -> Vector2 {
        self.get_scale()
    }

    pub fn visible(&self) -> bool {
        self.is_visible()
    }

    pub fn follow_viewport_enabled(&self) -> bool {
        self.is_following_viewport()
    }

    pub fn set_follow_viewport_enabled(&mut self, enabled: bool) {
        self.set_follow_viewport(enabled);
    }

    pub fn visibility_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::VISIBILITY_CHANGED)
    }
}

unsafe impl EngineClass for CanvasLayer {
    type Memory = ManualMemory;

    const CLASS: &'static str = "CanvasLayer";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for CanvasLayer {}

unsafe impl Inherits<Node> for CanvasLayer {}
unsafe impl Inherits<Object> for CanvasLayer {}

impl Deref for CanvasLayer {
    type Target = Node;

    fn deref(&self) -> &Node {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for CanvasLayer {
    fn deref_mut(&mut self) -> &mut Node {
        unsafe { class_mut(self) }
    }
}
