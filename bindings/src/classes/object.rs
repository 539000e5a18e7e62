/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::BitOr;

use crate::builtin::{Callable, GString, InternedName, StringName, Variant};
use crate::global::Error;
use crate::meta::{EngineEnum, NativeFfi, ToVariant};
use crate::obj::{Constructible, EngineClass, ManualMemory, RawObject};
use crate::registry::{CallFailure, MethodBindCache};
use crate::signals::EngineSignal;
use crate::sys;

/// Root of the engine class hierarchy.
#[repr(transparent)]
pub struct Object {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Object"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static GET_CLASS: InternedName = InternedName::new(const_str::cstr!("get_class"));
    pub static SET: InternedName = InternedName::new(const_str::cstr!("set"));
    pub static GET: InternedName = InternedName::new(const_str::cstr!("get"));
    pub static CALL: InternedName = InternedName::new(const_str::cstr!("call"));
    pub static CONNECT: InternedName = InternedName::new(const_str::cstr!("connect"));
    pub static DISCONNECT: InternedName = InternedName::new(const_str::cstr!("disconnect"));
    pub static IS_CONNECTED: InternedName = InternedName::new(const_str::cstr!("is_connected"));
    pub static EMIT_SIGNAL: InternedName = InternedName::new(const_str::cstr!("emit_signal"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static SCRIPT_CHANGED: InternedName =
        InternedName::new(const_str::cstr!("script_changed"));
    pub static PROPERTY_LIST_CHANGED: InternedName =
        InternedName::new(const_str::cstr!("property_list_changed"));
}

/// Flags accepted by the native connect machinery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectFlags(pub u32);

impl ConnectFlags {
    pub const DEFERRED: ConnectFlags = ConnectFlags(1);
    pub const PERSIST: ConnectFlags = ConnectFlags(2);
    pub const ONE_SHOT: ConnectFlags = ConnectFlags(4);
    pub const REFERENCE_COUNTED: ConnectFlags = ConnectFlags(8);
}

impl BitOr for ConnectFlags {
    type Output = ConnectFlags;

    fn bitor(self, rhs: ConnectFlags) -> ConnectFlags {
        ConnectFlags(self.0 | rhs.0)
    }
}

impl Object {
    pub fn get_class(&self) -> GString {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_CLASS, 3271411339);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn get_instance_id(&self) -> u64 {
        unsafe { (sys::host().object_get_instance_id)(self.object.ptr()) }
    }

    pub fn set(&mut self, property: &StringName, value: &Variant) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET, 3776071444);

        unsafe {
            bind.ptrcall_void(self.object.ptr(), &[property.type_ptr(), value.type_ptr()])
        };
    }

    pub fn get(&self, property: &StringName) -> Variant {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET, 2760726917);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[property.type_ptr()]) }
    }

    /// Dynamic call by method name. Arguments travel as variants and
    /// are validated host-side.
    pub fn call(&mut self, method: &StringName, args: &[Variant]) -> Result<Variant, CallFailure> {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::CALL, 3400424181);

        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(method.to_variant());
        full.extend(args.iter().cloned());

        bind.varcall(self.object.ptr(), &full)
    }

    pub fn connect(&mut self, signal: &StringName, callable: &Callable) -> Error {
        self.connect_flags(signal, callable, ConnectFlags::default())
    }

    pub fn connect_flags(
        &mut self,
        signal: &StringName,
        callable: &Callable,
        flags: ConnectFlags,
    ) -> Error {
        raw_connect(self.object.ptr(), signal, callable, flags)
    }

    pub fn disconnect(&mut self, signal: &StringName, callable: &Callable) {
        raw_disconnect(self.object.ptr(), signal, callable);
    }

    pub fn is_connected(&self, signal: &StringName, callable: &Callable) -> bool {
        raw_is_connected(self.object.ptr(), signal, callable)
    }

    pub fn emit_signal(
        &mut self,
        signal: &StringName,
        args: &[Variant],
    ) -> Result<Error, CallFailure> {
        raw_emit_signal(self.object.ptr(), signal, args)
    }

    pub fn script_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::SCRIPT_CHANGED)
    }

    pub fn property_list_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::PROPERTY_LIST_CHANGED)
    }
}

pub(crate) fn raw_connect(
    object: sys::ObjectPtr,
    signal: &StringName,
    callable: &Callable,
    flags: ConnectFlags,
) -> Error {
    static BIND: MethodBindCache = MethodBindCache::new();
    let bind = BIND.get(&CLASS_NAME, &method_name::CONNECT, 1518946055);

    let flags = flags.0 as i64;
    let ord: i64 = unsafe {
        bind.ptrcall_return(
            object,
            &[signal.type_ptr(), callable.type_ptr(), flags.type_ptr()],
        )
    };

    Error::try_from_ord(ord as i32).unwrap_or(Error::FAILED)
}

pub(crate) fn raw_disconnect(object: sys::ObjectPtr, signal: &StringName, callable: &Callable) {
    static BIND: MethodBindCache = MethodBindCache::new();
    let bind = BIND.get(&CLASS_NAME, &method_name::DISCONNECT, 1874754934);

    unsafe { bind.ptrcall_void(object, &[signal.type_ptr(), callable.type_ptr()]) };
}

pub(crate) fn raw_is_connected(
    object: sys::ObjectPtr,
    signal: &StringName,
    callable: &Callable,
) -> bool {
    static BIND: MethodBindCache = MethodBindCache::new();
    let bind = BIND.get(&CLASS_NAME, &method_name::IS_CONNECTED, 768870367);

    unsafe { bind.ptrcall_return(object, &[signal.type_ptr(), callable.type_ptr()]) }
}

pub(crate) fn raw_emit_signal(
    object: sys::ObjectPtr,
    signal: &StringName,
    args: &[Variant],
) -> Result<Error, CallFailure> {
    static BIND: MethodBindCache = MethodBindCache::new();
    let bind = BIND.get(&CLASS_NAME, &method_name::EMIT_SIGNAL, 4047867050);

    let mut full = Vec::with_capacity(args.len() + 1);
    full.push(signal.to_variant());
    full.extend(args.iter().cloned());

    let ret = bind.varcall(object, &full)?;

    Ok(ret
        .to::<i64>()
        .map(|ord| Error::try_from_ord(ord as i32).unwrap_or(Error::FAILED))
        .unwrap_or(Error::OK))
}

unsafe impl EngineClass for Object {
    type Memory = ManualMemory;

    const CLASS: &'static str = "Object";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for Object {}
