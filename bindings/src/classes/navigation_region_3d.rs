/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};

use super::navigation_mesh::NavigationMesh;
use super::node::Node;
use super::node3d::Node3D;
use super::object::Object;
use crate::builtin::InternedName;
use crate::meta::NativeFfi;
use crate::obj::{
    Constructible, EngineClass, Gd, Inherits, ManualMemory, RawObject, class_mut, class_ref,
};
use crate::registry::MethodBindCache;
use crate::signals::EngineSignal;
use crate::sys;

/// A region contributing a navigation mesh to the navigation server.
/// Baking itself happens inside the engine, optionally on a thread.
#[repr(transparent)]
pub struct NavigationRegion3D {
    object: RawObject,
}

static CLASS_NAME: InternedName = InternedName::new(const_str::cstr!("NavigationRegion3D"));

pub mod method_name {
    use crate::builtin::InternedName;

    pub static SET_ENABLED: InternedName = InternedName::new(const_str::cstr!("set_enabled"));
    pub static IS_ENABLED: InternedName = InternedName::new(const_str::cstr!("is_enabled"));
    pub static SET_NAVIGATION_LAYERS: InternedName =
        InternedName::new(const_str::cstr!("set_navigation_layers"));
    pub static GET_NAVIGATION_LAYERS: InternedName =
        InternedName::new(const_str::cstr!("get_navigation_layers"));
    pub static SET_NAVIGATION_MESH: InternedName =
        InternedName::new(const_str::cstr!("set_navigation_mesh"));
    pub static GET_NAVIGATION_MESH: InternedName =
        InternedName::new(const_str::cstr!("get_navigation_mesh"));
    pub static BAKE_NAVIGATION_MESH: InternedName =
        InternedName::new(const_str::cstr!("bake_navigation_mesh"));
    pub static IS_BAKING: InternedName = InternedName::new(const_str::cstr!("is_baking"));
}

pub mod property_name {
    use crate::builtin::InternedName;

    pub static ENABLED: InternedName = InternedName::new(const_str::cstr!("enabled"));
    pub static NAVIGATION_LAYERS: InternedName =
        InternedName::new(const_str::cstr!("navigation_layers"));
    pub static NAVIGATION_MESH: InternedName =
        InternedName::new(const_str::cstr!("navigation_mesh"));
}

pub mod signal_name {
    use crate::builtin::InternedName;

    pub static NAVIGATION_MESH_CHANGED: InternedName =
        InternedName::new(const_str::cstr!("navigation_mesh_changed"));
    pub static BAKE_FINISHED: InternedName =
        InternedName::new(const_str::cstr!("bake_finished"));
}

impl NavigationRegion3D {
    pub fn set_enabled(&mut self, enabled: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_ENABLED, 2586408649);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[enabled.type_ptr()]) };
    }

    pub fn is_enabled(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_ENABLED, 36873705);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    pub fn set_navigation_layers(&mut self, layers: u32) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_NAVIGATION_LAYERS, 1286410253);

        let layers = layers as i64;

        unsafe { bind.ptrcall_void(self.object.ptr(), &[layers.type_ptr()]) };
    }

    pub fn get_navigation_layers(&self) -> u32 {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_NAVIGATION_LAYERS, 3905245792);

        let layers: i64 = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        layers as u32
    }

    pub fn set_navigation_mesh(&mut self, mesh: Option<&Gd<NavigationMesh>>) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::SET_NAVIGATION_MESH, 2923361153);

        let mesh_ptr: sys::ObjectPtr = mesh
            .map(|mesh| mesh.object_ptr())
            .unwrap_or(std::ptr::null_mut());

        unsafe { bind.ptrcall_void(self.object.ptr(), &[mesh_ptr.type_ptr()]) };
    }

    pub fn get_navigation_mesh(&self) -> Option<Gd<NavigationMesh>> {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::GET_NAVIGATION_MESH, 1205799224);

        let ptr: sys::ObjectPtr = unsafe { bind.ptrcall_return(self.object.ptr(), &[]) };

        (!ptr.is_null()).then(|| unsafe { Gd::from_object_ptr(ptr, true) })
    }

    /// Rebuilds the navigation mesh from the region's geometry.
    pub fn bake_navigation_mesh(&mut self) {
        self.bake_navigation_mesh_full(true);
    }

    pub fn bake_navigation_mesh_full(&mut self, on_thread: bool) {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::BAKE_NAVIGATION_MESH, 2586408650);

        unsafe { bind.ptrcall_void(self.object.ptr(), &[on_thread.type_ptr()]) };
    }

    pub fn is_baking(&self) -> bool {
        static BIND: MethodBindCache = MethodBindCache::new();
        let bind = BIND.get(&CLASS_NAME, &method_name::IS_BAKING, 36873706);

        unsafe { bind.ptrcall_return(self.object.ptr(), &[]) }
    }

    // enabled / navigation_layers / navigation_mesh property sugar.

    pub fn enabled(&self) -> bool {
        self.is_enabled()
    }

    pub fn navigation_layers(&self) -> u32 {
        self.get_navigation_layers()
    }

    pub fn navigation_mesh(&self) -> Option<Gd<NavigationMesh>> {
        self.get_navigation_mesh()
    }

    pub fn navigation_mesh_changed(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::NAVIGATION_MESH_CHANGED)
    }

    pub fn bake_finished(&self) -> EngineSignal<'_, ()> {
        EngineSignal::new(self.object.ptr(), &signal_name::BAKE_FINISHED)
    }
}

unsafe impl EngineClass for NavigationRegion3D {
    type Memory = ManualMemory;

    const CLASS: &'static str = "NavigationRegion3D";

    fn class_name() -> &'static InternedName {
        &CLASS_NAME
    }
}

impl Constructible for NavigationRegion3D {}

unsafe impl Inherits<Node3D> for NavigationRegion3D {}
unsafe impl Inherits<Node> for NavigationRegion3D {}
unsafe impl Inherits<Object> for NavigationRegion3D {}

impl Deref for NavigationRegion3D {
    type Target = Node3D;

    fn deref(&self) -> &Node3D {
        unsafe { class_ref(self) }
    }
}

impl DerefMut for NavigationRegion3D {
    fn deref_mut(&mut self) -> &mut Node3D {
        unsafe { class_mut(self) }
    }
}
