/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::object::Object;
use crate::builtin::InternedName;
use crate::meta::NativeFfi;
use crate::obj::{EngineClass, Gd, Inherits, ManualMemory, RawObject, class_mut, class_ref};
use crate::registry::{self, MethodBindCache};

/// Singleton exposing engine-global state. Obtained through
/// [`Engine::singleton`], never constructed.
#[repr(transparent)]
pub struct Engine {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Engine"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_EDITOR_HINT: InternedName =
        InternedName::new(const_str::cstr!("set_editor_hint"));
    pub static IS_EDITOR_HINT: InternedName =
        InternedName::new(const_str::cstr!("is_editor_hint"));
    pub static GET_FRAMES_DRAWN: InternedName =
        InternedName::new(const_str::cstr!("get_frames_drawn"));
    pub static SET_MAX_FPS: InternedName = InternedName::new(const_str::cstr!("set_max_fps"));
    pub static GET_MAX_FPS: InternedName = InternedName::new(const_str::cstr!("get_max_fps"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static EDITOR_HINT: InternedName = InternedName::new(const_str::cstr!("editor_hint"));
    pub static MAX_FPS: InternedName = InternedName::new(const_str::cstr!("max_fps"));
}

impl Engine {
    /// The singleton is owned by the host; the returned handle is a
    /// borrowed view and never freed.
    pub fn singleton() -> Gd<Engine> {
        let ptr = registry::get_singleton(&CLASS_NAME);

        unsafe { Gd::from_object_ptr(ptr, false) }
    }

    pub fn set_editor_hint(&mut self, enabled: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_EDITOR_HINT, 2586408651);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[enabled.type_ptr()]) };
    }

    pub fn is_editor_hint(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_EDITOR_HINT, 36873707);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn get_frames_drawn(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_FRAMES_DRAWN, 3905245793);

        let frames: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        frames as i32
    }

    pub fn set_max_fps(&mut self, fps: i32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_MAX_FPS, 1286410254);

        let fps = fps as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[fps.type_ptr()]) };
    }

    pub fn get_max_fps(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_MAX_FPS, 3905245794);

        let fps: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        fps as i32
    }

    // editor_hint / max_fps property sugar.

    pub fn editor_hint(&self) -> bool {
        self.is_editor_hint()
    }

    pub fn max_fps(&self) -> i32 {
        self.get_max_fps()
    }
}

unsafe impl EngineClass for Engine {
    type Memory = ManualMemory;

    const CLASS: &'static str = "Engine";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

unsafe impl Inherits<Object> for Engine {}

impl Deref for Engine {
    type Target = Object;

    fn deref(&self) -> &Object {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for Engine {
    fn deref_mut(&mut self) -> &mut Object {
        unsafe { class_mut(self) }
    }
}
