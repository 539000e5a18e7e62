/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::node::Node;
use super::object::Object;
use super::viewport::Viewport;
use crate::builtin::{GString, InternedName, Vector2i};
use crate::meta::{EngineEnum, NativeFfi, engine_enum};
use crate::obj::{
    Constructible, EngineClass, Inherits, ManualMemory, RawObject, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;

/// An OS-level window inside the scene tree.
#[repr(transparent)]
pub struct Window {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Window"));

engine_enum! {
    pub enum WindowMode {
        MODE_WINDOWED = 0,
        MODE_MINIMIZED = 1,
        MODE_MAXIMIZED = 2,
        MODE_FULLSCREEN = 3,
        MODE_EXCLUSIVE_FULLSCREEN = 4,
    }
}

engine_enum! {
    /// Index of a togglable window flag, set and queried one at a time.
    pub enum WindowFlags {
        FLAG_RESIZE_DISABLED = 0,
        FLAG_BORDERLESS = 1,
        FLAG_ALWAYS_ON_TOP = 2,
        FLAG_TRANSPARENT = 3,
        FLAG_NO_FOCUS = 4,
        FLAG_POPUP = 5,
    }
}

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_TITLE: InternedName = InternedName::new(const_str::cstr!("set_title"));
    pub static GET_TITLE: InternedName = InternedName::new(const_str::cstr!("get_title"));
    pub static SET_SIZE: InternedName = InternedName::new(const_str::cstr!("set_size"));
    pub static GET_SIZE: InternedName = InternedName::new(const_str::cstr!("get_size"));
    pub static SET_MODE: InternedName = InternedName::new(const_str::cstr!("set_mode"));
    pub static GET_MODE: InternedName = InternedName::new(const_str::cstr!("get_mode"));
    pub static SET_FLAG: InternedName = InternedName::new(const_str::cstr!("set_flag"));
    pub static GET_FLAG: InternedName = InternedName::new(const_str::cstr!("get_flag"));
    pub static SET_VISIBLE: InternedName = InternedName::new(const_str::cstr!("set_visible"));
    pub static IS_VISIBLE: InternedName = InternedName::new(const_str::cstr!("is_visible"));
    pub static SHOW: InternedName = InternedName::new(const_str::cstr!("show"));
    pub static HIDE: InternedName = InternedName::new(const_str::cstr!("hide"));
    pub static POPUP_CENTERED: InternedName =
        InternedName::new(const_str::cstr!("popup_centered"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static TITLE: InternedName = InternedName::new(const_str::cstr!("title"));
    pub static SIZE: InternedName = InternedName::new(const_str::cstr!("size"));
    pub static MODE: InternedName = InternedName::new(const_str::cstr!("mode"));
    pub static VISIBLE: InternedName = InternedName::new(const_str::cstr!("visible"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static CLOSE_REQUESTED: InternedName =
        InternedName::new(const_str::cstr!("close_requested"));
    pub static VISIBILITY_CHANGED: InternedName =
        InternedName::new(const_str::cstr!("visibility_changed"));
}

impl Window {
    pub fn set_title(&mut self, title: &GString) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_TITLE, 3089850671);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[title.type_ptr()]) };
    }

    pub fn get_title(&self) -> GString {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_TITLE, 201670098);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_size(&mut self, size: Vector2i) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_SIZE, 1130785943);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[size.type_ptr()]) };
    }

    pub fn get_size(&self) -> Vector2i {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_SIZE, 3690982128);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_mode(&mut self, mode: WindowMode) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_MODE, 2447296106);

        let mode = mode.ord() as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[mode.type_ptr()]) };
    }

    pub fn get_mode(&self) -> WindowMode {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_MODE, 2566346114);

        let ord: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        WindowMode::try_from_ord(ord as i32).unwrap_or(WindowMode::MODE_WINDOWED)
    }

    pub fn set_flag(&mut self, flag: WindowFlags, enabled: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_FLAG, 3246673086);

        let flag = flag.ord() as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[flag.type_ptr(), enabled.type_ptr()]) };
    }

    pub fn get_flag(&self, flag: WindowFlags) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_FLAG, 3062752289);

        let flag = flag.ord() as i64;

        unsafe { bind.ptrcall_return(self.object.ptr(), &[flag.type_ptr()]) }
    }

    pub fn set_visible(&mut self, visible: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_VISIBLE, 2586408643);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[visible.type_ptr()]) };
    }

    pub fn is_visible(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_VISIBLE, 36873699);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn show(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SHOW, 3218959720);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn hide(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::HIDE, 3218959721);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn popup_centered(&mut self) {
        self.popup_centered_full(Vector2i::ZERO);
    }

    pub fn popup_centered_full(&mut self, minsize: Vector2i) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::POPUP_CENTERED, 1130785944);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[minsize.type_ptr()]) };
    }

    // title / size / mode / visible property sugar.

    pub fn title(&self) -> GString {
        self.get_title()
    }

    pub fn size(&self) -> Vector2i {
        self.get_size()
    }

    pub fn mode(&self) -> WindowMode {
        self.get_mode()
    }

    pub fn visible(&self) -> bool {
        self.is_visible()
    }

    pub fn close_requested(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::CLOSE_REQUESTED)
    }

    pub fn visibility_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::VISIBILITY_CHANGED)
    }
}

unsafe impl EngineClass for Window {
    type Memory = ManualMemory;

    const CLASS: &'static str = "Window";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for Window {}

unsafe impl Inherits<Viewport> for Window {}
unsafe impl Inherits<Node> for Window {}
unsafe impl Inherits<Object> for Window {}

impl Deref for Window {
    type Target = Viewport;

    fn deref(&self) -> &Viewport {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for Window {
    fn deref_mut(&mut self) -> &mut Viewport {
        unsafe { class_mut(self) }
    }
}
