/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::object::Object;
use crate::builtin::{GString, InternedName, StringName, VariantArray};
use crate::meta::{EngineEnum, NativeFfi, engine_enum};
use crate::obj::{
    Constructible, EngineClass, Gd, Inherits, ManualMemory, RawObject, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;
use crate::sys;

/// Base class of everything living in a scene tree.
#[repr(transparent)]
pub struct Node {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("Node"));

engine_enum! {
    /// Where a child is placed relative to the internal children of its
    /// parent.
    pub enum InternalMode {
        INTERNAL_MODE_DISABLED = 0,
        INTERNAL_MODE_FRONT = 1,
        INTERNAL_MODE_BACK = 2,
    }
}

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_NAME: InternedName = InternedName::new(const_str::cstr!("set_name"));
    pub static GET_NAME: InternedName = InternedName::new(const_str::cstr!("get_name"));
    pub static ADD_CHILD: InternedName = InternedName::new(const_str::cstr!("add_child"));
    pub static REMOVE_CHILD: InternedName = InternedName::new(const_str::cstr!("remove_child"));
    pub static GET_CHILD_COUNT: InternedName =
        InternedName::new(const_str::cstr!("get_child_count"));
    pub static GET_CHILD: InternedName = InternedName::new(const_str::cstr!("get_child"));
    pub static GET_CHILDREN: InternedName = InternedName::new(const_str::cstr!("get_children"));
    pub static GET_PARENT: InternedName = InternedName::new(const_str::cstr!("get_parent"));
    pub static QUEUE_FREE: InternedName = InternedName::new(const_str::cstr!("queue_free"));
    pub static IS_INSIDE_TREE: InternedName =
        InternedName::new(const_str::cstr!("is_inside_tree"));
    pub static SET_PROCESS_PRIORITY: InternedName =
        InternedName::new(const_str::cstr!("set_process_priority"));
    pub static GET_PROCESS_PRIORITY: InternedName =
        InternedName::new(const_str::cstr!("get_process_priority"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static NAME: InternedName = InternedName::new(const_str::cstr!("name"));
    pub static PROCESS_PRIORITY: InternedName =
        InternedName::new(const_str::cstr!("process_priority"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static READY: InternedName = InternedName::new(const_str::cstr!("ready"));
    pub static RENAMED: InternedName = InternedName::new(const_str::cstr!("renamed"));
    pub static TREE_ENTERED: InternedName = InternedName::new(const_str::cstr!("tree_entered"));
    pub static TREE_EXITING: InternedName = InternedName::new(const_str::cstr!("tree_exiting"));
    pub static CHILD_ENTERED_TREE: InternedName =
        InternedName::new(const_str::cstr!("child_entered_tree"));
}

impl Node {
    pub fn set_name(&mut self, name: &GString) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_NAME, 3089850670);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[name.type_ptr()]) };
    }

    pub fn get_name(&self) -> StringName {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_NAME, 2002593661);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    /// Appends `node` as a child. The engine takes over the node's
    /// lifetime from this point on.
    pub fn add_child(&mut self, node: &Gd<Node>) {
        self.add_child_full(node, false, InternalMode::INTERNAL_MODE_DISABLED);
    }

    pub fn add_child_full(
        &mut self,
        node: &Gd<Node>,
        force_readable_name: bool,
        internal: InternalMode,
    ) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::ADD_CHILD, 3863233950);

        let node_ptr = node.object_ptr();
        let internal = internal.ord() as i64;

        unsafe {
            bind.ptrcall_void(
                self.object.ptr(),
                &[
                    node_ptr.type_ptr(),
                    force_readable_name.type_ptr(),
                    internal.type_ptr(),
                ],
            )
        };
    }

    pub fn remove_child(&mut self, node: &Gd<Node>) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::REMOVE_CHILD, 1078189570);

        let node_ptr = node.object_ptr();

        unsafe { bind.ptrcall_void(self.object.ptr(), &[node_ptr.type_ptr()]) };
    }

    pub fn get_child_count(&self) -> i32 {
        self.get_child_count_full(false)
    }

    pub fn get_child_count_full(&self, include_internal: bool) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_CHILD_COUNT, 894402041);

        let count: i64 = unsafe {
            bind.ptrcall_return(self.object.ptr(), &[include_internal.type_ptr()])
        };

        count as i32
    }

    pub fn get_child(&self, index: i32) -> Option<Gd<Node>> {
        self.get_child_full(index, false)
    }

    pub fn get_child_full(&self, index: i32, include_internal: bool) -> Option<Gd<Node>> {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_CHILD, 541253412);

        let index = index as i64;

        let ptr: sys::ObjectPtr = unsafe {
            bind.ptrcall_return(
                self.object.ptr(),
                &[index.type_ptr(), include_internal.type_ptr()],
            )
        };

        (!ptr.is_null()).then(|| unsafe { Gd::from_object_ptr(ptr, false) })
    }

    pub fn get_children(&self) -> VariantArray {
        self.get_children_full(false)
    }

    pub fn get_children_full(&self, include_internal: bool) -> VariantArray {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_CHILDREN, 873284517);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[include_internal.type_ptr()]) }
    }

    pub fn get_parent(&self) -> Option<Gd<Node>> {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_PARENT, 3160264692);

        let ptr: sys::ObjectPtr = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        (!ptr.is_null()).then(|| unsafe { Gd::from_object_ptr(ptr, false) })
    }

    /// Schedules destruction at the end of the current frame.
    pub fn queue_free(&mut self) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::QUEUE_FREE, 3218959719);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[]) };
    }

    pub fn is_inside_tree(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_INSIDE_TREE, 36873697);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_process_priority(&mut self, priority: i32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_PROCESS_PRIORITY, 1286410251);

        let priority = priority as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[priority.type_ptr()]) };
    }

    pub fn get_process_priority(&self) -> i32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_PROCESS_PRIORITY, 3905245789);

        let priority: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        priority as i32
    }

    // name / process_priority property sugar.

    pub fn name(&self) -> StringName {
        self.get_name()
    }

    pub fn process_priority(&self) -> i32 {
        self.get_process_priority()
    }

    pub fn ready(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::READY)
    }

    pub fn renamed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::RENAMED)
    }

    pub fn tree_entered(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::TREE_ENTERED)
    }

    pub fn tree_exiting(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::TREE_EXITING)
    }

    pub fn child_entered_tree(&self) -> EngineSignal<'_, (Gd<Node>,)> {
        EngineSignal::new(self.object.ptr(), &signal_name::CHILD_ENTERED_TREE)
    }
}

unsafe impl EngineClass for Node {
    type Memory = ManualMemory;

    const CLASS: &'static str = "Node";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for Node {}

unsafe impl Inherits<Object> for Node {}

impl Deref for Node {
    type Target = Object;

    fn deref(&self) -> &Object {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for Node {
    fn deref_mut(&mut self) -> &mut Object {
        unsafe { class_mut(self) }
    }
}
