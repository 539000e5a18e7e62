/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::node::Node;
use super::object::Object;
use super::viewport::Viewport;
use super::window::Window;
use crate::builtin::{GString, InternedName, StringName};
use crate::meta::NativeFfi;
use crate::obj::{
    Constructible, EngineClass, Inherits, ManualMemory, RawObject, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;

/// Modal dialog with a single OK button.
#[repr(transparent)]
pub struct AcceptDialog {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("AcceptDialog"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_TEXT: InternedName = InternedName::new(const_str::cstr!("set_text"));
    pub static GET_TEXT: InternedName = InternedName::new(const_str::cstr!("get_text"));
    pub static SET_OK_BUTTON_TEXT: InternedName =
        InternedName::new(const_str::cstr!("set_ok_button_text"));
    pub static GET_OK_BUTTON_TEXT: InternedName =
        InternedName::new(const_str::cstr!("get_ok_button_text"));
    pub static SET_HIDE_ON_OK: InternedName =
        InternedName::new(const_str::cstr!("set_hide_on_ok"));
    pub static GET_HIDE_ON_OK: InternedName =
        InternedName::new(const_str::cstr!("get_hide_on_ok"));
    pub static SET_AUTOWRAP: InternedName = InternedName::new(const_str::cstr!("set_autowrap"));
    pub static HAS_AUTOWRAP: InternedName = InternedName::new(const_str::cstr!("has_autowrap"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static DIALOG_TEXT: InternedName = InternedName::new(const_str::cstr!("dialog_text"));
    pub static OK_BUTTON_TEXT: InternedName =
        InternedName::new(const_str::cstr!("ok_button_text"));
    pub static DIALOG_HIDE_ON_OK: InternedName =
        InternedName::new(const_str::cstr!("dialog_hide_on_ok"));
    pub static DIALOG_AUTOWRAP: InternedName =
        InternedName::new(const_str::cstr!("dialog_autowrap"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static CONFIRMED: InternedName = InternedName::new(const_str::cstr!("confirmed"));
    pub static CANCELED: InternedName = InternedName::new(const_str::cstr!("canceled"));
    pub static CUSTOM_ACTION: InternedName =
        InternedName::new(const_str::cstr!("custom_action"));
}

impl AcceptDialog {
    pub fn set_text(&mut self, text: &GString) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_TEXT, 3089850672);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[text.type_ptr()]) };
    }

    pub fn get_text(&self) -> GString {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_TEXT, 201670099);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_ok_button_text(&mut self, text: &GString) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_OK_BUTTON_TEXT, 3089850673);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[text.type_ptr()]) };
    }

    pub fn get_ok_button_text(&self) -> GString {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_OK_BUTTON_TEXT, 201670100);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_hide_on_ok(&mut self, enabled: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_HIDE_ON_OK, 2586408644);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[enabled.type_ptr()]) };
    }

    pub fn get_hide_on_ok(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_HIDE_ON_OK, 36873700);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_autowrap(&mut self, autowrap: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_AUTOWRAP, 2586408645);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[autowrap.type_ptr()]) };
    }

    pub fn has_autowrap(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::HAS_AUTOWRAP, 36873701);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    // dialog_text / ok_button_text / dialog_hide_on_ok / dialog_autowrap
    // property sugar.

    pub fn dialog_text(&self) -> GString {
        self.get_text()
    }

    pub fn set_dialog_text(&mut self, text: &GString) {
        self.set_text(text);
    }

    pub fn ok_button_text(&self) -> GString {
        self.get_ok_button_text()
    }

    pub fn dialog_hide_on_ok(&self) -> bool {
        self.get_hide_on_ok()
    }

    pub fn set_dialog_hide_on_ok(&mut self, enabled: bool) {
        self.set_hide_on_ok(enabled);
    }

    pub fn dialog_autowrap(&self) -> bool {
        self.has_autowrap()
    }

    pub fn set_dialog_autowrap(&mut self, autowrap: bool) {
        self.set_autowrap(autowrap);
    }

    /// Emitted when the dialog is accepted.
    pub fn confirmed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::CONFIRMED)
    }

    pub fn canceled(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::CANCELED)
    }

    /// Emitted with the action name of a custom button.
    pub fn custom_action(&self) -> EngineSignal<'_, (StringName,)> {
        EngineSignal::new(self.object.ptr(), &signal_name::CUSTOM_ACTION)
    }
}

unsafe impl EngineClass for AcceptDialog {
    type Memory = ManualMemory;

    const CLASS: &'static str = "AcceptDialog";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for AcceptDialog {}

unsafe impl Inherits<Window> for AcceptDialog {}
unsafe impl Inherits<Viewport> for AcceptDialog {}
unsafe impl Inherits<Node> for AcceptDialog {}
unsafe impl Inherits<Object> for AcceptDialog {}

impl Deref for AcceptDialog {
    type Target = Window;

    fn deref(&self) -> &Window {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for AcceptDialog {
    fn deref_mut(&mut self) -> &mut Window {
        unsafe { class_mut(self) }
    }
}
