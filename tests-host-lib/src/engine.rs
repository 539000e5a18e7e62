/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The stand-in engine: an object heap, an intern table and the
//! bookkeeping the diagnostics API reads. One global instance behind a
//! mutex, like the registries the real host keeps.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use godot_rust_bindings::builtin::Vector2;
use godot_rust_bindings::sys;
use once_cell::sync::Lazy;

use crate::variant::{RawVariant, StubValue};

static ENGINE: Lazy<Mutex<EngineState>> = Lazy::new(|| Mutex::new(EngineState::new()));

pub(crate) fn state() -> MutexGuard<'static, EngineState> {
    ENGINE.lock().expect("engine state mutex is poisoned")
}

#[derive(Clone, Debug)]
pub(crate) struct Connection {
    pub signal: String,
    pub callable: u64,
    pub one_shot: bool,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct CurvePoint {
    pub position: Vector2,
    pub left_tangent: f32,
    pub right_tangent: f32,
    pub left_mode: i32,
    pub right_mode: i32,
}

#[derive(Debug)]
pub(crate) struct StubObject {
    pub class: &'static str,
    pub refcount: u32,
    pub props: HashMap<&'static str, StubValue>,
    pub children: Vec<u64>,
    pub parent: Option<u64>,
    pub connections: Vec<Connection>,
    pub curve_points: Vec<CurvePoint>,
}

impl StubObject {
    pub(crate) fn new(class: &'static str) -> Self {
        Self {
            class,
            refcount: 0,
            props: HashMap::new(),
            children: Vec::new(),
            parent: None,
            connections: Vec::new(),
            curve_points: Vec::new(),
        }
    }

    pub(crate) fn prop(&self, name: &str) -> StubValue {
        self.props.get(name).cloned().unwrap_or(StubValue::Nil)
    }
}

pub(crate) struct CallableEntry {
    pub refcount: u32,
    pub userdata: sys::CallableUserData,
    pub call: sys::CallableCallFn,
    pub free: sys::CallableFreeFn,
}

// Userdata pointers are only handed back to the trampolines that own
// them; the mutex serializes all access.
unsafe impl Send for CallableEntry {}

pub(crate) struct ArrayEntry {
    pub refcount: u32,
    pub items: Vec<StubValue>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CallRecord {
    pub object: u64,
    pub class: &'static str,
    pub method: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BindLookup {
    pub class: String,
    pub method: String,
    pub hash: i64,
}

/// Work that must run after the state lock is released, because it
/// calls back into binding-side code that will reenter the host.
pub(crate) enum Pending {
    Emit {
        targets: Vec<(sys::CallableCallFn, sys::CallableUserData)>,
        args: Vec<RawVariant>,
    },
}

pub(crate) struct EngineState {
    next_id: u64,
    pub objects: HashMap<u64, StubObject>,
    pub strings: HashMap<u64, String>,
    names: HashMap<u64, String>,
    intern_index: HashMap<String, u64>,
    pub callables: HashMap<u64, CallableEntry>,
    pub arrays: HashMap<u64, ArrayEntry>,
    pub call_log: Vec<CallRecord>,
    pub bind_lookups: Vec<BindLookup>,
    pub printed: Vec<(i32, String)>,
    pub destroyed: Vec<u64>,
    engine_singleton: Option<u64>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            next_id: 1,
            objects: HashMap::new(),
            strings: HashMap::new(),
            names: HashMap::new(),
            intern_index: HashMap::new(),
            callables: HashMap::new(),
            arrays: HashMap::new(),
            call_log: Vec::new(),
            bind_lookups: Vec::new(),
            printed: Vec::new(),
            destroyed: Vec::new(),
            engine_singleton: None,
        }
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        id
    }

    // Strings. Each handle owns one copy of its content.

    pub(crate) fn new_string(&mut self, content: String) -> u64 {
        let id = self.fresh_id();
        self.strings.insert(id, content);

        id
    }

    pub(crate) fn string_content(&self, id: u64) -> String {
        self.strings.get(&id).cloned().unwrap_or_default()
    }

    pub(crate) fn free_string(&mut self, id: u64) {
        self.strings.remove(&id);
    }

    // String names. Interned per content and kept for the process
    // lifetime, which is what makes them canonical.

    pub(crate) fn intern_name(&mut self, content: &str) -> u64 {
        if let Some(id) = self.intern_index.get(content) {
            return *id;
        }

        let id = self.fresh_id();
        self.names.insert(id, content.to_owned());
        self.intern_index.insert(content.to_owned(), id);

        id
    }

    pub(crate) fn name_content(&self, id: u64) -> String {
        self.names.get(&id).cloned().unwrap_or_default()
    }

    // Objects. Instance ids double as the opaque object pointers the
    // bindings carry around.

    pub(crate) fn new_object(&mut self, object: StubObject) -> u64 {
        let id = self.fresh_id();
        self.objects.insert(id, object);

        id
    }

    pub(crate) fn object(&self, id: u64) -> Option<&StubObject> {
        self.objects.get(&id)
    }

    pub(crate) fn object_mut(&mut self, id: u64) -> Option<&mut StubObject> {
        self.objects.get_mut(&id)
    }

    pub(crate) fn is_refcounted_class(&self, class: &str) -> bool {
        crate::classdb::is_parent_class(class, "RefCounted")
    }

    pub(crate) fn ref_object(&mut self, id: u64) {
        let Some(object) = self.objects.get(&id) else {
            return;
        };

        if self.is_refcounted_class(object.class) {
            if let Some(object) = self.objects.get_mut(&id) {
                object.refcount += 1;
            }
        }
    }

    pub(crate) fn unref_object(&mut self, id: u64) {
        let Some(object) = self.objects.get(&id) else {
            return;
        };

        if !self.is_refcounted_class(object.class) {
            return;
        }

        let Some(object) = self.objects.get_mut(&id) else {
            return;
        };

        object.refcount = object.refcount.saturating_sub(1);

        if object.refcount == 0 {
            self.destroy_object(id);
        }
    }

    /// Destroys an object and, recursively, its children. Held signal
    /// connections release their callables.
    pub(crate) fn destroy_object(&mut self, id: u64) {
        let Some(object) = self.objects.remove(&id) else {
            return;
        };

        self.destroyed.push(id);

        if let Some(parent) = object.parent.and_then(|pid| self.objects.get_mut(&pid)) {
            parent.children.retain(|child| *child != id);
        }

        for connection in &object.connections {
            self.unref_callable(connection.callable);
        }

        // Object-valued properties hold references of their own.
        for value in object.props.values() {
            if let StubValue::Object(held) = value {
                self.unref_object(*held);
            }
        }

        for child in object.children {
            if let Some(node) = self.objects.get_mut(&child) {
                node.parent = None;
            }

            self.destroy_object(child);
        }
    }

    // Callables.

    pub(crate) fn new_callable(
        &mut self,
        userdata: sys::CallableUserData,
        call: sys::CallableCallFn,
        free: sys::CallableFreeFn,
    ) -> u64 {
        let id = self.fresh_id();

        self.callables.insert(
            id,
            CallableEntry {
                refcount: 1,
                userdata,
                call,
                free,
            },
        );

        id
    }

    pub(crate) fn ref_callable(&mut self, id: u64) {
        if let Some(entry) = self.callables.get_mut(&id) {
            entry.refcount += 1;
        }
    }

    /// Dropping the last reference frees the binding-side closure
    /// through its registered free function.
    pub(crate) fn unref_callable(&mut self, id: u64) {
        let Some(entry) = self.callables.get_mut(&id) else {
            return;
        };

        entry.refcount = entry.refcount.saturating_sub(1);

        if entry.refcount == 0 {
            let entry = self
                .callables
                .remove(&id)
                .expect("callable entry disappeared while locked");

            unsafe { (entry.free)(entry.userdata) };
        }
    }

    // Arrays, shared between handles through their reference count.

    pub(crate) fn new_array(&mut self, items: Vec<StubValue>) -> u64 {
        let id = self.fresh_id();
        self.arrays.insert(id, ArrayEntry { refcount: 1, items });

        id
    }

    pub(crate) fn ref_array(&mut self, id: u64) {
        if let Some(entry) = self.arrays.get_mut(&id) {
            entry.refcount += 1;
        }
    }

    pub(crate) fn unref_array(&mut self, id: u64) {
        let Some(entry) = self.arrays.get_mut(&id) else {
            return;
        };

        entry.refcount = entry.refcount.saturating_sub(1);

        if entry.refcount == 0 {
            self.arrays.remove(&id);
        }
    }

    // Signals.

    pub(crate) fn connect(
        &mut self,
        object: u64,
        signal: &str,
        callable: u64,
        flags: u32,
    ) -> i32 {
        use godot_rust_bindings::meta::EngineEnum;
        use godot_rust_bindings::prelude::Error;

        let Some(class) = self.objects.get(&object).map(|object| object.class) else {
            return Error::FAILED.ord();
        };

        if !crate::classdb::class_has_signal(class, signal) {
            return Error::ERR_DOES_NOT_EXIST.ord();
        }

        let already = self
            .objects
            .get(&object)
            .map(|object| {
                object
                    .connections
                    .iter()
                    .any(|c| c.signal == signal && c.callable == callable)
            })
            .unwrap_or(false);

        if already {
            return Error::ERR_INVALID_PARAMETER.ord();
        }

        self.ref_callable(callable);

        let one_shot = flags & 4 != 0;

        if let Some(object) = self.objects.get_mut(&object) {
            object.connections.push(Connection {
                signal: signal.to_owned(),
                callable,
                one_shot,
            });
        }

        Error::OK.ord()
    }

    pub(crate) fn disconnect(&mut self, object: u64, signal: &str, callable: u64) {
        let Some(object) = self.objects.get_mut(&object) else {
            return;
        };

        let before = object.connections.len();
        object
            .connections
            .retain(|c| !(c.signal == signal && c.callable == callable));

        let removed = before - object.connections.len();

        for _ in 0..removed {
            self.unref_callable(callable);
        }
    }

    pub(crate) fn is_connected(&self, object: u64, signal: &str, callable: u64) -> bool {
        self.objects
            .get(&object)
            .map(|object| {
                object
                    .connections
                    .iter()
                    .any(|c| c.signal == signal && c.callable == callable)
            })
            .unwrap_or(false)
    }

    /// Collects the emission work for `signal`. One-shot connections
    /// are removed here; the actual handler invocations run after the
    /// lock is released.
    pub(crate) fn emit(&mut self, object_id: u64, signal: &str, args: &[StubValue]) -> Vec<Pending> {
        if !self.objects.contains_key(&object_id) {
            return Vec::new();
        }

        let raw_args: Vec<RawVariant> = args.iter().map(|arg| self.encode_variant(arg)).collect();

        let matching: Vec<Connection> = self
            .objects
            .get(&object_id)
            .map(|object| {
                object
                    .connections
                    .iter()
                    .filter(|c| c.signal == signal)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let targets: Vec<(sys::CallableCallFn, sys::CallableUserData)> = matching
            .iter()
            .filter_map(|c| self.callables.get(&c.callable))
            .map(|entry| (entry.call, entry.userdata))
            .collect();

        let one_shot: Vec<u64> = matching
            .iter()
            .filter(|c| c.one_shot)
            .map(|c| c.callable)
            .collect();

        if let Some(object) = self.objects.get_mut(&object_id) {
            object
                .connections
                .retain(|c| !(c.signal == signal && c.one_shot));
        }

        for callable in one_shot {
            self.unref_callable(callable);
        }

        vec![Pending::Emit {
            targets,
            args: raw_args,
        }]
    }

    // Singleton.

    pub(crate) fn engine_singleton(&mut self) -> u64 {
        if let Some(id) = self.engine_singleton {
            return id;
        }

        let id = self.new_object(crate::classdb::construct("Engine").expect("Engine class spec"));
        self.engine_singleton = Some(id);

        id
    }
}

/// Runs the deferred work produced while the lock was held. Handler
/// invocations reenter the host, so no lock may be held here.
pub(crate) fn run_pending(pending: Vec<Pending>) {
    for item in pending {
        match item {
            Pending::Emit { targets, args } => {
                let arg_ptrs: Vec<sys::ConstVariantPtr> = args
                    .iter()
                    .map(|raw| raw as *const RawVariant as sys::ConstVariantPtr)
                    .collect();

                for (call, userdata) in targets {
                    let mut ret = RawVariant::NIL;

                    unsafe {
                        call(
                            userdata,
                            arg_ptrs.as_ptr(),
                            arg_ptrs.len() as i64,
                            &mut ret as *mut RawVariant as sys::UninitVariantPtr,
                        )
                    };

                    state().free_raw_variant(&ret);
                }

                let mut guard = state();

                for raw in &args {
                    guard.free_raw_variant(raw);
                }
            }
        }
    }
}
