/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::node::Node;
use super::object::Object;
use crate::builtin::{InternedName, Rect2};
use crate::meta::NativeFfi;
use crate::obj::{EngineClass, Inherits, ManualMemory, RawObject, class_mut, class_ref};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;

/// Abstract rendering target. Never constructed directly; concrete
/// subclasses such as `Window` are.
#[repr(transparent)]
pub struct Viewport {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Viewport"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static GET_VISIBLE_RECT: InternedName =
        InternedName::new(const_str::cstr!("get_visible_rect"));
    pub static SET_DISABLE_INPUT: InternedName =
        InternedName::new(const_str::cstr!("set_disable_input"));
    pub static IS_INPUT_DISABLED: InternedName =
        InternedName::new(const_str::cstr!("is_input_disabled"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static GUI_DISABLE_INPUT: InternedName =
        InternedName::new(const_str::cstr!("gui_disable_input"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static SIZE_CHANGED: InternedName = InternedName::new(const_str::cstr!("size_changed"));
}

impl Viewport {
    pub fn get_visible_rect(&self) -> Rect2 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_VISIBLE_RECT, 1639390495);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_disable_input(&mut self, disable: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_DISABLE_INPUT, 2586408642);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[disable.type_ptr()]) };
    }

    pub fn is_input_disabled(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_INPUT_DISABLED, 36873698);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    // gui_disable_input property sugar.

    pub fn gui_disable_input(&self) -> bool {
        self.is_input_disabled()
    }

    pub fn set_gui_disable_input(&mut self, disable: bool) {
        self.set_disable_input(disable);
    }

    pub fn size_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::SIZE_CHANGED)
    }
}

unsafe impl EngineClass for Viewport {
    type Memory = ManualMemory;

    const CLASS: &'static str = "Viewport";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

unsafe impl Inherits<Node> for Viewport {}
unsafe impl Inherits<Object> for Viewport {}

impl Deref for Viewport {
    type Target = Node;

    fn deref(&self) -> &Node {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for Viewport {
    fn deref_mut(&mut self) -> &mut Node {
        unsafe { class_mut(self) }
    }
}
