/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The stand-in class database: class hierarchy, per-method (name,
//! hash) entries, and the behavior behind every bound method. The
//! (name, hash) pairs here are written against the engine's API, not
//! read from the bindings, so a mismatched binding fails to resolve
//! exactly like it would against the real host.

use godot_rust_bindings::builtin::{Vector2, Vector2i, Vector3};
use godot_rust_bindings::sys;

use crate::engine::{CallRecord, CurvePoint, EngineState, Pending, StubObject};
use crate::variant::{
    KIND_STRING, RawVariant, StubValue,
};

pub(crate) struct ClassSpec {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub constructible: bool,
    pub signals: &'static [&'static str],
}

static CLASS_DB: &[ClassSpec] = &[
    ClassSpec {
        name: "Object",
        parent: None,
        constructible: true,
        signals: &["script_changed", "property_list_changed"],
    },
    ClassSpec {
        name: "RefCounted",
        parent: Some("Object"),
        constructible: true,
        signals: &[],
    },
    ClassSpec {
        name: "Resource",
        parent: Some("RefCounted"),
        constructible: true,
        signals: &["changed"],
    },
    ClassSpec {
        name: "Curve",
        parent: Some("Resource"),
        constructible: true,
        signals: &["range_changed"],
    },
    ClassSpec {
        name: "NavigationMesh",
        parent: Some("Resource"),
        constructible: true,
        signals: &[],
    },
    ClassSpec {
        name: "Node",
        parent: Some("Object"),
        constructible: true,
        signals: &[
            "ready",
            "renamed",
            "tree_entered",
            "tree_exiting",
            "child_entered_tree",
        ],
    },
    ClassSpec {
        name: "Viewport",
        parent: Some("Node"),
        constructible: false,
        signals: &["size_changed"],
    },
    ClassSpec {
        name: "Window",
        parent: Some("Viewport"),
        constructible: true,
        signals: &["close_requested", "visibility_changed"],
    },
    ClassSpec {
        name: "AcceptDialog",
        parent: Some("Window"),
        constructible: true,
        signals: &["confirmed", "canceled", "custom_action"],
    },
    ClassSpec {
        name: "CanvasLayer",
        parent: Some("Node"),
        constructible: true,
        signals: &["visibility_changed"],
    },
    ClassSpec {
        name: "Node3D",
        parent: Some("Node"),
        constructible: true,
        signals: &["visibility_changed"],
    },
    ClassSpec {
        name: "NavigationRegion3D",
        parent: Some("Node3D"),
        constructible: true,
        signals: &["navigation_mesh_changed", "bake_finished"],
    },
    ClassSpec {
        name: "Engine",
        parent: Some("Object"),
        constructible: false,
        signals: &[],
    },
];

pub(crate) fn spec(class: &str) -> Option<&'static ClassSpec> {
    CLASS_DB.iter().find(|spec| spec.name == class)
}

pub(crate) fn is_parent_class(class: &str, ancestor: &str) -> bool {
    let mut current = Some(class);

    while let Some(name) = current {
        if name == ancestor {
            return true;
        }

        current = spec(name).and_then(|spec| spec.parent);
    }

    false
}

pub(crate) fn class_has_signal(class: &str, signal: &str) -> bool {
    let mut current = Some(class);

    while let Some(name) = current {
        let Some(spec) = spec(name) else {
            return false;
        };

        if spec.signals.contains(&signal) {
            return true;
        }

        current = spec.parent;
    }

    false
}

/// Builds a fresh object with the defaults every class in the chain
/// contributes.
pub(crate) fn construct(class: &str) -> Option<StubObject> {
    let spec = spec(class)?;

    let mut chain = Vec::new();
    let mut current = Some(spec.name);

    while let Some(name) = current {
        chain.push(name);
        current = self::spec(name).and_then(|spec| spec.parent);
    }

    let mut object = StubObject::new(spec.name);

    for name in chain.into_iter().rev() {
        for (key, value) in class_defaults(name) {
            object.props.insert(key, value);
        }
    }

    Some(object)
}

fn class_defaults(class: &str) -> Vec<(&'static str, StubValue)> {
    match class {
        "Node" => vec![
            ("name", StubValue::Str(String::new())),
            ("process_priority", StubValue::Int(0)),
        ],
        "Viewport" => vec![("gui_disable_input", StubValue::Bool(false))],
        "Window" => vec![
            ("title", StubValue::Str(String::new())),
            ("size", StubValue::Vector2i(Vector2i::new(800, 600))),
            ("mode", StubValue::Int(0)),
            ("visible", StubValue::Bool(true)),
        ],
        "AcceptDialog" => vec![
            ("dialog_text", StubValue::Str(String::new())),
            ("ok_button_text", StubValue::Str("OK".to_owned())),
            ("dialog_hide_on_ok", StubValue::Bool(true)),
            ("dialog_autowrap", StubValue::Bool(false)),
        ],
        "CanvasLayer" => vec![
            ("layer", StubValue::Int(1)),
            ("offset", StubValue::Vector2(Vector2::ZERO)),
            ("rotation", StubValue::Float(0.0)),
            ("scale", StubValue::Vector2(Vector2::ONE)),
            ("visible", StubValue::Bool(true)),
            ("follow_viewport_enabled", StubValue::Bool(false)),
        ],
        "Node3D" => vec![
            ("position", StubValue::Vector3(Vector3::ZERO)),
            ("rotation", StubValue::Vector3(Vector3::ZERO)),
            ("scale", StubValue::Vector3(Vector3::ONE)),
            ("visible", StubValue::Bool(true)),
        ],
        "Resource" => vec![
            ("resource_name", StubValue::Str(String::new())),
            ("resource_path", StubValue::Str(String::new())),
        ],
        "Curve" => vec![
            ("min_value", StubValue::Float(0.0)),
            ("max_value", StubValue::Float(1.0)),
            ("bake_resolution", StubValue::Int(100)),
        ],
        "NavigationMesh" => vec![
            ("cell_size", StubValue::Float(0.25)),
            ("cell_height", StubValue::Float(0.25)),
            ("polygon_count", StubValue::Int(0)),
        ],
        "NavigationRegion3D" => vec![
            ("enabled", StubValue::Bool(true)),
            ("navigation_layers", StubValue::Int(1)),
            ("navigation_mesh", StubValue::Nil),
            ("baking", StubValue::Bool(false)),
        ],
        "Engine" => vec![
            ("editor_hint", StubValue::Bool(false)),
            ("max_fps", StubValue::Int(0)),
            ("frames_drawn", StubValue::Int(0)),
        ],
        _ => Vec::new(),
    }
}

pub(crate) struct MethodEntry {
    pub class: &'static str,
    pub method: &'static str,
    pub hash: i64,
}

macro_rules! methods {
    ($($class:literal . $method:literal = $hash:literal),+ $(,)?) => {
        &[$(MethodEntry { class: $class, method: $method, hash: $hash }),+]
    };
}

static METHODS: &[MethodEntry] = methods![
    "Object"."get_class" = 3271411339,
    "Object"."set" = 3776071444,
    "Object"."get" = 2760726917,
    "Object"."call" = 3400424181,
    "Object"."connect" = 1518946055,
    "Object"."disconnect" = 1874754934,
    "Object"."is_connected" = 768870367,
    "Object"."emit_signal" = 4047867050,
    "RefCounted"."init_ref" = 2240911060,
    "RefCounted"."reference" = 2240911061,
    "RefCounted"."unreference" = 2240911062,
    "RefCounted"."get_reference_count" = 3905245786,
    "Resource"."set_name" = 3089850668,
    "Resource"."get_name" = 201670096,
    "Resource"."set_path" = 3089850669,
    "Resource"."get_path" = 201670097,
    "Resource"."emit_changed" = 3218959716,
    "Resource"."duplicate" = 482882304,
    "Curve"."get_point_count" = 3905245787,
    "Curve"."add_point" = 2882143029,
    "Curve"."remove_point" = 1286410249,
    "Curve"."clear_points" = 3218959717,
    "Curve"."get_point_position" = 2299179447,
    "Curve"."sample" = 3919130443,
    "Curve"."sample_baked" = 3919130444,
    "Curve"."set_min_value" = 373806689,
    "Curve"."get_min_value" = 1740695150,
    "Curve"."set_max_value" = 373806690,
    "Curve"."get_max_value" = 1740695151,
    "Curve"."bake" = 3218959718,
    "Curve"."set_bake_resolution" = 1286410250,
    "Curve"."get_bake_resolution" = 3905245788,
    "Node"."set_name" = 3089850670,
    "Node"."get_name" = 2002593661,
    "Node"."add_child" = 3863233950,
    "Node"."remove_child" = 1078189570,
    "Node"."get_child_count" = 894402041,
    "Node"."get_child" = 541253412,
    "Node"."get_children" = 873284517,
    "Node"."get_parent" = 3160264692,
    "Node"."queue_free" = 3218959719,
    "Node"."is_inside_tree" = 36873697,
    "Node"."set_process_priority" = 1286410251,
    "Node"."get_process_priority" = 3905245789,
    "Viewport"."get_visible_rect" = 1639390495,
    "Viewport"."set_disable_input" = 2586408642,
    "Viewport"."is_input_disabled" = 36873698,
    "Window"."set_title" = 3089850671,
    "Window"."get_title" = 201670098,
    "Window"."set_size" = 1130785943,
    "Window"."get_size" = 3690982128,
    "Window"."set_mode" = 2447296106,
    "Window"."get_mode" = 2566346114,
    "Window"."set_flag" = 3246673086,
    "Window"."get_flag" = 3062752289,
    "Window"."set_visible" = 2586408643,
    "Window"."is_visible" = 36873699,
    "Window"."show" = 3218959720,
    "Window"."hide" = 3218959721,
    "Window"."popup_centered" = 1130785944,
    "AcceptDialog"."set_text" = 3089850672,
    "AcceptDialog"."get_text" = 201670099,
    "AcceptDialog"."set_ok_button_text" = 3089850673,
    "AcceptDialog"."get_ok_button_text" = 201670100,
    "AcceptDialog"."set_hide_on_ok" = 2586408644,
    "AcceptDialog"."get_hide_on_ok" = 36873700,
    "AcceptDialog"."set_autowrap" = 2586408645,
    "AcceptDialog"."has_autowrap" = 36873701,
    "CanvasLayer"."set_layer" = 1286410252,
    "CanvasLayer"."get_layer" = 3905245790,
    "CanvasLayer"."set_offset" = 743155724,
    "CanvasLayer"."get_offset" = 3341600327,
    "CanvasLayer"."set_rotation" = 373806691,
    "CanvasLayer"."get_rotation" = 1740695152,
    "CanvasLayer"."set_scale" = 743155725,
    "CanvasLayer"."get_scale" = 3341600328,
    "CanvasLayer"."set_visible" = 2586408646,
    "CanvasLayer"."is_visible" = 36873702,
    "CanvasLayer"."show" = 3218959722,
    "CanvasLayer"."hide" = 3218959723,
    "CanvasLayer"."set_follow_viewport" = 2586408647,
    "CanvasLayer"."is_following_viewport" = 36873703,
    "Node3D"."set_position" = 2906477875,
    "Node3D"."get_position" = 2916281908,
    "Node3D"."set_rotation" = 2906477876,
    "Node3D"."get_rotation" = 2916281909,
    "Node3D"."set_scale" = 2906477877,
    "Node3D"."get_scale" = 2916281910,
    "Node3D"."translate" = 2906477878,
    "Node3D"."set_visible" = 2586408648,
    "Node3D"."is_visible" = 36873704,
    "Node3D"."show" = 3218959724,
    "Node3D"."hide" = 3218959725,
    "NavigationMesh"."set_cell_size" = 373806692,
    "NavigationMesh"."get_cell_size" = 1740695153,
    "NavigationMesh"."set_cell_height" = 373806693,
    "NavigationMesh"."get_cell_height" = 1740695154,
    "NavigationMesh"."get_polygon_count" = 3905245791,
    "NavigationRegion3D"."set_enabled" = 2586408649,
    "NavigationRegion3D"."is_enabled" = 36873705,
    "NavigationRegion3D"."set_navigation_layers" = 1286410253,
    "NavigationRegion3D"."get_navigation_layers" = 3905245792,
    "NavigationRegion3D"."set_navigation_mesh" = 2923361153,
    "NavigationRegion3D"."get_navigation_mesh" = 1205799224,
    "NavigationRegion3D"."bake_navigation_mesh" = 2586408650,
    "NavigationRegion3D"."is_baking" = 36873706,
    "Engine"."set_editor_hint" = 2586408651,
    "Engine"."is_editor_hint" = 36873707,
    "Engine"."get_frames_drawn" = 3905245793,
    "Engine"."set_max_fps" = 1286410254,
    "Engine"."get_max_fps" = 3905245794,
];

/// Exact-class lookup: the bindings always resolve against the
/// declaring class.
pub(crate) fn find_method(class: &str, method: &str) -> Option<&'static MethodEntry> {
    METHODS
        .iter()
        .find(|entry| entry.class == class && entry.method == method)
}

// Typed readout of pointer-call arguments.

unsafe fn arg<T: Copy>(args: *const sys::ConstTypePtr, index: usize) -> T {
    unsafe { (*args.add(index) as *const T).read_unaligned() }
}

unsafe fn string_arg(state: &EngineState, args: *const sys::ConstTypePtr, index: usize) -> String {
    let id = unsafe { arg::<usize>(args, index) } as u64;

    state.string_content(id)
}

unsafe fn name_arg(state: &EngineState, args: *const sys::ConstTypePtr, index: usize) -> String {
    let id = unsafe { arg::<usize>(args, index) } as u64;

    state.name_content(id)
}

unsafe fn callable_arg(args: *const sys::ConstTypePtr, index: usize) -> u64 {
    unsafe { arg::<u64>(args, index) }
}

unsafe fn object_arg(args: *const sys::ConstTypePtr, index: usize) -> u64 {
    (unsafe { arg::<sys::ObjectPtr>(args, index) }) as usize as u64
}

unsafe fn variant_arg(
    state: &EngineState,
    args: *const sys::ConstTypePtr,
    index: usize,
) -> StubValue {
    let raw = unsafe { RawVariant::read(*args.add(index)) };

    state.decode_variant(&raw)
}

// Typed writes into the return slot.

unsafe fn write_ret<T>(ret: sys::TypePtr, value: T) {
    unsafe { (ret as *mut T).write_unaligned(value) };
}

unsafe fn write_string_ret(state: &mut EngineState, ret: sys::TypePtr, content: String) {
    let id = state.new_string(content) as usize;

    unsafe { write_ret(ret, id) };
}

unsafe fn write_name_ret(state: &mut EngineState, ret: sys::TypePtr, content: &str) {
    let id = state.intern_name(content) as usize;

    unsafe { write_ret(ret, id) };
}

unsafe fn write_object_ret(ret: sys::TypePtr, id: Option<u64>) {
    let ptr = id.map(|id| id as usize as sys::ObjectPtr);

    unsafe { write_ret(ret, ptr.unwrap_or(std::ptr::null_mut())) };
}

fn prop_f32(object: &StubObject, key: &str) -> f64 {
    match object.prop(key) {
        StubValue::Float(value) => value,
        _ => 0.0,
    }
}

fn prop_bool(object: &StubObject, key: &str) -> bool {
    matches!(object.prop(key), StubValue::Bool(true))
}

fn prop_int(object: &StubObject, key: &str) -> i64 {
    match object.prop(key) {
        StubValue::Int(value) => value,
        _ => 0,
    }
}

fn prop_str(object: &StubObject, key: &str) -> String {
    match object.prop(key) {
        StubValue::Str(value) => value,
        _ => String::new(),
    }
}

/// Stores a bool property and emits `signal` when the value changed.
fn set_flag_prop(
    state: &mut EngineState,
    id: u64,
    key: &'static str,
    value: bool,
    signal: &str,
) -> Vec<Pending> {
    let changed = state
        .object(id)
        .map(|object| prop_bool(object, key) != value)
        .unwrap_or(false);

    if let Some(object) = state.object_mut(id) {
        object.props.insert(key, StubValue::Bool(value));
    }

    if changed {
        state.emit(id, signal, &[])
    } else {
        Vec::new()
    }
}

/// Executes a typed pointer call against the stand-in engine.
///
/// # Safety
///
/// `args` and `ret` must follow the bound method's signature, which is
/// exactly the contract the bindings promise the real host.
pub(crate) unsafe fn ptrcall(
    entry: &MethodEntry,
    object: sys::ObjectPtr,
    args: *const sys::ConstTypePtr,
    ret: sys::TypePtr,
) {
    let id = object as usize as u64;

    let pending = {
        let mut state = crate::engine::state();

        state.call_log.push(CallRecord {
            object: id,
            class: entry.class,
            method: entry.method,
        });

        unsafe { dispatch(&mut state, entry, id, args, ret) }
    };

    crate::engine::run_pending(pending);
}

unsafe fn dispatch(
    state: &mut EngineState,
    entry: &MethodEntry,
    id: u64,
    args: *const sys::ConstTypePtr,
    ret: sys::TypePtr,
) -> Vec<Pending> {
    unsafe {
        match (entry.class, entry.method) {
            // Object
            ("Object", "get_class") => {
                let class = state.object(id).map(|object| object.class).unwrap_or("");

                write_string_ret(state, ret, class.to_owned());
                Vec::new()
            }
            ("Object", "set") => {
                let key = name_arg(state, args, 0);
                let value = variant_arg(state, args, 1);

                set_named_property(state, id, &key, value)
            }
            ("Object", "get") => {
                let key = name_arg(state, args, 0);
                let value = state
                    .object(id)
                    .map(|object| object.prop(&key))
                    .unwrap_or(StubValue::Nil);

                let raw = state.encode_variant(&value);
                raw.write(ret);
                Vec::new()
            }
            ("Object", "connect") => {
                let signal = name_arg(state, args, 0);
                let callable = callable_arg(args, 1);
                let flags = arg::<i64>(args, 2) as u32;

                let code = state.connect(id, &signal, callable, flags);

                write_ret(ret, code as i64);
                Vec::new()
            }
            ("Object", "disconnect") => {
                let signal = name_arg(state, args, 0);
                let callable = callable_arg(args, 1);

                state.disconnect(id, &signal, callable);
                Vec::new()
            }
            ("Object", "is_connected") => {
                let signal = name_arg(state, args, 0);
                let callable = callable_arg(args, 1);

                write_ret(ret, state.is_connected(id, &signal, callable));
                Vec::new()
            }

            // RefCounted
            ("RefCounted", "init_ref") => {
                if let Some(object) = state.object_mut(id) {
                    object.refcount += 1;
                }

                write_ret(ret, true);
                Vec::new()
            }
            ("RefCounted", "reference") => {
                if let Some(object) = state.object_mut(id) {
                    object.refcount += 1;
                }

                write_ret(ret, true);
                Vec::new()
            }
            ("RefCounted", "unreference") => {
                let dying = state
                    .object_mut(id)
                    .map(|object| {
                        object.refcount = object.refcount.saturating_sub(1);
                        object.refcount == 0
                    })
                    .unwrap_or(false);

                write_ret(ret, dying);
                Vec::new()
            }
            ("RefCounted", "get_reference_count") => {
                let count = state
                    .object(id)
                    .map(|object| object.refcount as i64)
                    .unwrap_or(0);

                write_ret(ret, count);
                Vec::new()
            }

            // Resource
            ("Resource", "set_name") => {
                let name = string_arg(state, args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("resource_name", StubValue::Str(name));
                }

                Vec::new()
            }
            ("Resource", "get_name") => {
                let name = state
                    .object(id)
                    .map(|object| prop_str(object, "resource_name"))
                    .unwrap_or_default();

                write_string_ret(state, ret, name);
                Vec::new()
            }
            ("Resource", "set_path") => {
                let path = string_arg(state, args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("resource_path", StubValue::Str(path));
                }

                Vec::new()
            }
            ("Resource", "get_path") => {
                let path = state
                    .object(id)
                    .map(|object| prop_str(object, "resource_path"))
                    .unwrap_or_default();

                write_string_ret(state, ret, path);
                Vec::new()
            }
            ("Resource", "emit_changed") => state.emit(id, "changed", &[]),
            ("Resource", "duplicate") => {
                let _subresources = arg::<bool>(args, 0);

                let copy = state.object(id).map(|object| {
                    let mut copy = StubObject::new(object.class);
                    copy.props = object.props.clone();
                    copy.curve_points = object.curve_points.clone();
                    // The returned reference belongs to the caller.
                    copy.refcount = 1;
                    copy
                });

                let copy_id = copy.map(|copy| state.new_object(copy));

                write_object_ret(ret, copy_id);
                Vec::new()
            }

            // Curve
            ("Curve", "get_point_count") => {
                let count = state
                    .object(id)
                    .map(|object| object.curve_points.len() as i64)
                    .unwrap_or(0);

                write_ret(ret, count);
                Vec::new()
            }
            ("Curve", "add_point") => {
                let point = CurvePoint {
                    position: arg::<Vector2>(args, 0),
                    left_tangent: arg::<f64>(args, 1) as f32,
                    right_tangent: arg::<f64>(args, 2) as f32,
                    left_mode: arg::<i64>(args, 3) as i32,
                    right_mode: arg::<i64>(args, 4) as i32,
                };

                let index = state
                    .object_mut(id)
                    .map(|object| {
                        let index = object
                            .curve_points
                            .iter()
                            .position(|p| p.position.x > point.position.x)
                            .unwrap_or(object.curve_points.len());

                        object.curve_points.insert(index, point);
                        index as i64
                    })
                    .unwrap_or(-1);

                write_ret(ret, index);
                Vec::new()
            }
            ("Curve", "remove_point") => {
                let index = arg::<i64>(args, 0) as usize;

                if let Some(object) = state.object_mut(id) {
                    if index < object.curve_points.len() {
                        object.curve_points.remove(index);
                    }
                }

                Vec::new()
            }
            ("Curve", "clear_points") => {
                if let Some(object) = state.object_mut(id) {
                    object.curve_points.clear();
                }

                Vec::new()
            }
            ("Curve", "get_point_position") => {
                let index = arg::<i64>(args, 0) as usize;

                let position = state
                    .object(id)
                    .and_then(|object| object.curve_points.get(index))
                    .map(|point| point.position)
                    .unwrap_or(Vector2::ZERO);

                write_ret(ret, position);
                Vec::new()
            }
            ("Curve", "sample") | ("Curve", "sample_baked") => {
                let offset = arg::<f64>(args, 0) as f32;

                let value = state
                    .object(id)
                    .map(|object| sample_curve(&object.curve_points, offset))
                    .unwrap_or(0.0);

                write_ret(ret, value as f64);
                Vec::new()
            }
            ("Curve", "set_min_value") => {
                let value = arg::<f64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("min_value", StubValue::Float(value));
                }

                state.emit(id, "range_changed", &[])
            }
            ("Curve", "get_min_value") => {
                let value = state
                    .object(id)
                    .map(|object| prop_f32(object, "min_value"))
                    .unwrap_or(0.0);

                write_ret(ret, value);
                Vec::new()
            }
            ("Curve", "set_max_value") => {
                let value = arg::<f64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("max_value", StubValue::Float(value));
                }

                state.emit(id, "range_changed", &[])
            }
            ("Curve", "get_max_value") => {
                let value = state
                    .object(id)
                    .map(|object| prop_f32(object, "max_value"))
                    .unwrap_or(0.0);

                write_ret(ret, value);
                Vec::new()
            }
            ("Curve", "bake") => Vec::new(),
            ("Curve", "set_bake_resolution") => {
                let value = arg::<i64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("bake_resolution", StubValue::Int(value));
                }

                Vec::new()
            }
            ("Curve", "get_bake_resolution") => {
                let value = state
                    .object(id)
                    .map(|object| prop_int(object, "bake_resolution"))
                    .unwrap_or(0);

                write_ret(ret, value);
                Vec::new()
            }

            // Node
            ("Node", "set_name") => {
                let name = string_arg(state, args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("name", StubValue::Str(name));
                }

                state.emit(id, "renamed", &[])
            }
            ("Node", "get_name") => {
                let name = state
                    .object(id)
                    .map(|object| prop_str(object, "name"))
                    .unwrap_or_default();

                write_name_ret(state, ret, &name);
                Vec::new()
            }
            ("Node", "add_child") => {
                let child = object_arg(args, 0);
                let _force_readable_name = arg::<bool>(args, 1);
                let _internal = arg::<i64>(args, 2);

                if let Some(node) = state.object_mut(child) {
                    node.parent = Some(id);
                }

                if let Some(parent) = state.object_mut(id) {
                    parent.children.push(child);
                }

                let mut pending = state.emit(id, "child_entered_tree", &[StubValue::Object(child)]);
                pending.extend(state.emit(child, "tree_entered", &[]));

                pending
            }
            ("Node", "remove_child") => {
                let child = object_arg(args, 0);

                let pending = state.emit(child, "tree_exiting", &[]);

                if let Some(node) = state.object_mut(child) {
                    node.parent = None;
                }

                if let Some(parent) = state.object_mut(id) {
                    parent.children.retain(|candidate| *candidate != child);
                }

                pending
            }
            ("Node", "get_child_count") => {
                let _include_internal = arg::<bool>(args, 0);

                let count = state
                    .object(id)
                    .map(|object| object.children.len() as i64)
                    .unwrap_or(0);

                write_ret(ret, count);
                Vec::new()
            }
            ("Node", "get_child") => {
                let index = arg::<i64>(args, 0);
                let _include_internal = arg::<bool>(args, 1);

                let child = state
                    .object(id)
                    .and_then(|object| object.children.get(index as usize).copied());

                write_object_ret(ret, child);
                Vec::new()
            }
            ("Node", "get_children") => {
                let _include_internal = arg::<bool>(args, 0);

                let children: Vec<StubValue> = state
                    .object(id)
                    .map(|object| object.children.iter().map(|c| StubValue::Object(*c)).collect())
                    .unwrap_or_default();

                let array = state.new_array(children) as usize;

                write_ret(ret, array);
                Vec::new()
            }
            ("Node", "get_parent") => {
                let parent = state.object(id).and_then(|object| object.parent);

                write_object_ret(ret, parent);
                Vec::new()
            }
            ("Node", "queue_free") => {
                state.destroy_object(id);
                Vec::new()
            }
            ("Node", "is_inside_tree") => {
                let inside = state
                    .object(id)
                    .map(|object| object.parent.is_some())
                    .unwrap_or(false);

                write_ret(ret, inside);
                Vec::new()
            }
            ("Node", "set_process_priority") => {
                let priority = arg::<i64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert("process_priority", StubValue::Int(priority));
                }

                Vec::new()
            }
            ("Node", "get_process_priority") => {
                let priority = state
                    .object(id)
                    .map(|object| prop_int(object, "process_priority"))
                    .unwrap_or(0);

                write_ret(ret, priority);
                Vec::new()
            }

            // Viewport
            ("Viewport", "get_visible_rect") => {
                let size = state
                    .object(id)
                    .map(|object| match object.prop("size") {
                        StubValue::Vector2i(size) => Vector2::new(size.x as f32, size.y as f32),
                        _ => Vector2::ZERO,
                    })
                    .unwrap_or(Vector2::ZERO);

                write_ret(
                    ret,
                    godot_rust_bindings::builtin::Rect2::new(Vector2::ZERO, size),
                );
                Vec::new()
            }
            ("Viewport", "set_disable_input") => {
                let disable = arg::<bool>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert("gui_disable_input", StubValue::Bool(disable));
                }

                Vec::new()
            }
            ("Viewport", "is_input_disabled") => {
                let disabled = state
                    .object(id)
                    .map(|object| prop_bool(object, "gui_disable_input"))
                    .unwrap_or(false);

                write_ret(ret, disabled);
                Vec::new()
            }

            // Window
            ("Window", "set_title") => {
                let title = string_arg(state, args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("title", StubValue::Str(title));
                }

                Vec::new()
            }
            ("Window", "get_title") => {
                let title = state
                    .object(id)
                    .map(|object| prop_str(object, "title"))
                    .unwrap_or_default();

                write_string_ret(state, ret, title);
                Vec::new()
            }
            ("Window", "set_size") => {
                let size = arg::<Vector2i>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("size", StubValue::Vector2i(size));
                }

                state.emit(id, "size_changed", &[])
            }
            ("Window", "get_size") => {
                let size = state
                    .object(id)
                    .map(|object| match object.prop("size") {
                        StubValue::Vector2i(size) => size,
                        _ => Vector2i::ZERO,
                    })
                    .unwrap_or(Vector2i::ZERO);

                write_ret(ret, size);
                Vec::new()
            }
            ("Window", "set_mode") => {
                let mode = arg::<i64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("mode", StubValue::Int(mode));
                }

                Vec::new()
            }
            ("Window", "get_mode") => {
                let mode = state
                    .object(id)
                    .map(|object| prop_int(object, "mode"))
                    .unwrap_or(0);

                write_ret(ret, mode);
                Vec::new()
            }
            ("Window", "set_flag") => {
                let flag = arg::<i64>(args, 0);
                let enabled = arg::<bool>(args, 1);

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert(window_flag_key(flag), StubValue::Bool(enabled));
                }

                Vec::new()
            }
            ("Window", "get_flag") => {
                let flag = arg::<i64>(args, 0);

                let enabled = state
                    .object(id)
                    .map(|object| prop_bool(object, window_flag_key(flag)))
                    .unwrap_or(false);

                write_ret(ret, enabled);
                Vec::new()
            }
            ("Window", "set_visible") => {
                let visible = arg::<bool>(args, 0);

                set_flag_prop(state, id, "visible", visible, "visibility_changed")
            }
            ("Window", "is_visible") => {
                let visible = state
                    .object(id)
                    .map(|object| prop_bool(object, "visible"))
                    .unwrap_or(false);

                write_ret(ret, visible);
                Vec::new()
            }
            ("Window", "show") => set_flag_prop(state, id, "visible", true, "visibility_changed"),
            ("Window", "hide") => set_flag_prop(state, id, "visible", false, "visibility_changed"),
            ("Window", "popup_centered") => {
                let _minsize = arg::<Vector2i>(args, 0);

                set_flag_prop(state, id, "visible", true, "visibility_changed")
            }

            // AcceptDialog
            ("AcceptDialog", "set_text") => {
                let text = string_arg(state, args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("dialog_text", StubValue::Str(text));
                }

                Vec::new()
            }
            ("AcceptDialog", "get_text") => {
                let text = state
                    .object(id)
                    .map(|object| prop_str(object, "dialog_text"))
                    .unwrap_or_default();

                write_string_ret(state, ret, text);
                Vec::new()
            }
            ("AcceptDialog", "set_ok_button_text") => {
                let text = string_arg(state, args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("ok_button_text", StubValue::Str(text));
                }

                Vec::new()
            }
            ("AcceptDialog", "get_ok_button_text") => {
                let text = state
                    .object(id)
                    .map(|object| prop_str(object, "ok_button_text"))
                    .unwrap_or_default();

                write_string_ret(state, ret, text);
                Vec::new()
            }
            ("AcceptDialog", "set_hide_on_ok") => {
                let enabled = arg::<bool>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert("dialog_hide_on_ok", StubValue::Bool(enabled));
                }

                Vec::new()
            }
            ("AcceptDialog", "get_hide_on_ok") => {
                let enabled = state
                    .object(id)
                    .map(|object| prop_bool(object, "dialog_hide_on_ok"))
                    .unwrap_or(false);

                write_ret(ret, enabled);
                Vec::new()
            }
            ("AcceptDialog", "set_autowrap") => {
                let autowrap = arg::<bool>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert("dialog_autowrap", StubValue::Bool(autowrap));
                }

                Vec::new()
            }
            ("AcceptDialog", "has_autowrap") => {
                let autowrap = state
                    .object(id)
                    .map(|object| prop_bool(object, "dialog_autowrap"))
                    .unwrap_or(false);

                write_ret(ret, autowrap);
                Vec::new()
            }

            // CanvasLayer
            ("CanvasLayer", "set_layer") => {
                let layer = arg::<i64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("layer", StubValue::Int(layer));
                }

                Vec::new()
            }
            ("CanvasLayer", "get_layer") => {
                let layer = state
                    .object(id)
                    .map(|object| prop_int(object, "layer"))
                    .unwrap_or(0);

                write_ret(ret, layer);
                Vec::new()
            }
            ("CanvasLayer", "set_offset") => {
                let offset = arg::<Vector2>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("offset", StubValue::Vector2(offset));
                }

                Vec::new()
            }
            ("CanvasLayer", "get_offset") => {
                let offset = state
                    .object(id)
                    .map(|object| match object.prop("offset") {
                        StubValue::Vector2(offset) => offset,
                        _ => Vector2::ZERO,
                    })
                    .unwrap_or(Vector2::ZERO);

                write_ret(ret, offset);
                Vec::new()
            }
            ("CanvasLayer", "set_rotation") => {
                let radians = arg::<f64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("rotation", StubValue::Float(radians));
                }

                Vec::new()
            }
            ("CanvasLayer", "get_rotation") => {
                let radians = state
                    .object(id)
                    .map(|object| prop_f32(object, "rotation"))
                    .unwrap_or(0.0);

                write_ret(ret, radians);
                Vec::new()
            }
            ("CanvasLayer", "set_scale") => {
                let scale = arg::<Vector2>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("scale", StubValue::Vector2(scale));
                }

                Vec::new()
            }
            ("CanvasLayer", "get_scale") => {
                let scale = state
                    .object(id)
                    .map(|object| match object.prop("scale") {
                        StubValue::Vector2(scale) => scale,
                        _ => Vector2::ONE,
                    })
                    .unwrap_or(Vector2::ONE);

                write_ret(ret, scale);
                Vec::new()
            }
            ("CanvasLayer", "set_visible") => {
                let visible = arg::<bool>(args, 0);

                set_flag_prop(state, id, "visible", visible, "visibility_changed")
            }
            ("CanvasLayer", "is_visible") => {
                let visible = state
                    .object(id)
                    .map(|object| prop_bool(object, "visible"))
                    .unwrap_or(false);

                write_ret(ret, visible);
                Vec::new()
            }
            ("CanvasLayer", "show") => {
                set_flag_prop(state, id, "visible", true, "visibility_changed")
            }
            ("CanvasLayer", "hide") => {
                set_flag_prop(state, id, "visible", false, "visibility_changed")
            }
            ("CanvasLayer", "set_follow_viewport") => {
                let enabled = arg::<bool>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert("follow_viewport_enabled", StubValue::Bool(enabled));
                }

                Vec::new()
            }
            ("CanvasLayer", "is_following_viewport") => {
                let enabled = state
                    .object(id)
                    .map(|object| prop_bool(object, "follow_viewport_enabled"))
                    .unwrap_or(false);

                write_ret(ret, enabled);
                Vec::new()
            }

            // Node3D
            ("Node3D", "set_position") => {
                let position = arg::<Vector3>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("position", StubValue::Vector3(position));
                }

                Vec::new()
            }
            ("Node3D", "get_position") => {
                let position = prop_vector3(state, id, "position");

                write_ret(ret, position);
                Vec::new()
            }
            ("Node3D", "set_rotation") => {
                let rotation = arg::<Vector3>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("rotation", StubValue::Vector3(rotation));
                }

                Vec::new()
            }
            ("Node3D", "get_rotation") => {
                let rotation = prop_vector3(state, id, "rotation");

                write_ret(ret, rotation);
                Vec::new()
            }
            ("Node3D", "set_scale") => {
                let scale = arg::<Vector3>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("scale", StubValue::Vector3(scale));
                }

                Vec::new()
            }
            ("Node3D", "get_scale") => {
                let scale = prop_vector3(state, id, "scale");

                write_ret(ret, scale);
                Vec::new()
            }
            ("Node3D", "translate") => {
                let offset = arg::<Vector3>(args, 0);
                let position = prop_vector3(state, id, "position");

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert("position", StubValue::Vector3(position + offset));
                }

                Vec::new()
            }
            ("Node3D", "set_visible") => {
                let visible = arg::<bool>(args, 0);

                set_flag_prop(state, id, "visible", visible, "visibility_changed")
            }
            ("Node3D", "is_visible") => {
                let visible = state
                    .object(id)
                    .map(|object| prop_bool(object, "visible"))
                    .unwrap_or(false);

                write_ret(ret, visible);
                Vec::new()
            }
            ("Node3D", "show") => set_flag_prop(state, id, "visible", true, "visibility_changed"),
            ("Node3D", "hide") => set_flag_prop(state, id, "visible", false, "visibility_changed"),

            // NavigationMesh
            ("NavigationMesh", "set_cell_size") => {
                let size = arg::<f64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("cell_size", StubValue::Float(size));
                }

                Vec::new()
            }
            ("NavigationMesh", "get_cell_size") => {
                let size = state
                    .object(id)
                    .map(|object| prop_f32(object, "cell_size"))
                    .unwrap_or(0.0);

                write_ret(ret, size);
                Vec::new()
            }
            ("NavigationMesh", "set_cell_height") => {
                let height = arg::<f64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("cell_height", StubValue::Float(height));
                }

                Vec::new()
            }
            ("NavigationMesh", "get_cell_height") => {
                let height = state
                    .object(id)
                    .map(|object| prop_f32(object, "cell_height"))
                    .unwrap_or(0.0);

                write_ret(ret, height);
                Vec::new()
            }
            ("NavigationMesh", "get_polygon_count") => {
                let count = state
                    .object(id)
                    .map(|object| prop_int(object, "polygon_count"))
                    .unwrap_or(0);

                write_ret(ret, count);
                Vec::new()
            }

            // NavigationRegion3D
            ("NavigationRegion3D", "set_enabled") => {
                let enabled = arg::<bool>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("enabled", StubValue::Bool(enabled));
                }

                Vec::new()
            }
            ("NavigationRegion3D", "is_enabled") => {
                let enabled = state
                    .object(id)
                    .map(|object| prop_bool(object, "enabled"))
                    .unwrap_or(false);

                write_ret(ret, enabled);
                Vec::new()
            }
            ("NavigationRegion3D", "set_navigation_layers") => {
                let layers = arg::<i64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object
                        .props
                        .insert("navigation_layers", StubValue::Int(layers));
                }

                Vec::new()
            }
            ("NavigationRegion3D", "get_navigation_layers") => {
                let layers = state
                    .object(id)
                    .map(|object| prop_int(object, "navigation_layers"))
                    .unwrap_or(0);

                write_ret(ret, layers);
                Vec::new()
            }
            ("NavigationRegion3D", "set_navigation_mesh") => {
                let mesh = object_arg(args, 0);

                let previous = state
                    .object(id)
                    .map(|object| object.prop("navigation_mesh"))
                    .unwrap_or(StubValue::Nil);

                // The stored property holds a reference of its own.
                let value = if mesh == 0 {
                    StubValue::Nil
                } else {
                    state.ref_object(mesh);
                    StubValue::Object(mesh)
                };

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("navigation_mesh", value);
                }

                if let StubValue::Object(previous) = previous {
                    state.unref_object(previous);
                }

                state.emit(id, "navigation_mesh_changed", &[])
            }
            ("NavigationRegion3D", "get_navigation_mesh") => {
                let mesh = state
                    .object(id)
                    .map(|object| object.prop("navigation_mesh"))
                    .unwrap_or(StubValue::Nil);

                let mesh = match mesh {
                    StubValue::Object(mesh) => {
                        // Returned references belong to the caller.
                        state.ref_object(mesh);
                        Some(mesh)
                    }
                    _ => None,
                };

                write_object_ret(ret, mesh);
                Vec::new()
            }
            ("NavigationRegion3D", "bake_navigation_mesh") => {
                let _on_thread = arg::<bool>(args, 0);

                state.emit(id, "bake_finished", &[])
            }
            ("NavigationRegion3D", "is_baking") => {
                let baking = state
                    .object(id)
                    .map(|object| prop_bool(object, "baking"))
                    .unwrap_or(false);

                write_ret(ret, baking);
                Vec::new()
            }

            // Engine
            ("Engine", "set_editor_hint") => {
                let enabled = arg::<bool>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("editor_hint", StubValue::Bool(enabled));
                }

                Vec::new()
            }
            ("Engine", "is_editor_hint") => {
                let enabled = state
                    .object(id)
                    .map(|object| prop_bool(object, "editor_hint"))
                    .unwrap_or(false);

                write_ret(ret, enabled);
                Vec::new()
            }
            ("Engine", "get_frames_drawn") => {
                let frames = state
                    .object(id)
                    .map(|object| prop_int(object, "frames_drawn"))
                    .unwrap_or(0);

                write_ret(ret, frames);
                Vec::new()
            }
            ("Engine", "set_max_fps") => {
                let fps = arg::<i64>(args, 0);

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("max_fps", StubValue::Int(fps));
                }

                Vec::new()
            }
            ("Engine", "get_max_fps") => {
                let fps = state
                    .object(id)
                    .map(|object| prop_int(object, "max_fps"))
                    .unwrap_or(0);

                write_ret(ret, fps);
                Vec::new()
            }

            (class, method) => {
                unreachable!("no behavior registered for {class}::{method}")
            }
        }
    }
}

fn prop_vector3(state: &EngineState, id: u64, key: &str) -> Vector3 {
    state
        .object(id)
        .map(|object| match object.prop(key) {
            StubValue::Vector3(value) => value,
            _ => Vector3::ZERO,
        })
        .unwrap_or(Vector3::ZERO)
}

fn window_flag_key(flag: i64) -> &'static str {
    match flag {
        0 => "flag_resize_disabled",
        1 => "flag_borderless",
        2 => "flag_always_on_top",
        3 => "flag_transparent",
        4 => "flag_no_focus",
        _ => "flag_popup",
    }
}

/// Writing through `Object::set` lands on the same property storage the
/// named setters use.
fn set_named_property(
    state: &mut EngineState,
    id: u64,
    key: &str,
    value: StubValue,
) -> Vec<Pending> {
    let known_keys: &[&'static str] = &[
        "name",
        "process_priority",
        "gui_disable_input",
        "title",
        "size",
        "mode",
        "visible",
        "dialog_text",
        "ok_button_text",
        "dialog_hide_on_ok",
        "dialog_autowrap",
        "layer",
        "offset",
        "rotation",
        "scale",
        "follow_viewport_enabled",
        "position",
        "resource_name",
        "resource_path",
        "min_value",
        "max_value",
        "bake_resolution",
        "enabled",
        "navigation_layers",
        "cell_size",
        "cell_height",
        "editor_hint",
        "max_fps",
    ];

    let Some(key) = known_keys.iter().copied().find(|candidate| *candidate == key) else {
        return Vec::new();
    };

    if let Some(object) = state.object_mut(id) {
        object.props.insert(key, value);
    }

    Vec::new()
}

fn sample_curve(points: &[CurvePoint], offset: f32) -> f32 {
    let Some(first) = points.first() else {
        return 0.0;
    };

    let last = points.last().expect("non-empty point list has a last point");

    if offset <= first.position.x {
        return first.position.y;
    }

    if offset >= last.position.x {
        return last.position.y;
    }

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);

        if offset >= a.position.x && offset <= b.position.x {
            let span = b.position.x - a.position.x;

            if span <= f32::EPSILON {
                return b.position.y;
            }

            let t = (offset - a.position.x) / span;

            return a.position.y + (b.position.y - a.position.y) * t;
        }
    }

    last.position.y
}

/// Executes a variant call. Only the engine's variadic entry points go
/// through here.
///
/// # Safety
///
/// `args` must point to `arg_count` valid variants and `ret`/`error`
/// must be writable.
pub(crate) unsafe fn varcall(
    entry: &MethodEntry,
    object: sys::ObjectPtr,
    args: *const sys::ConstVariantPtr,
    arg_count: i64,
    ret: sys::UninitVariantPtr,
    error: *mut sys::CallError,
) {
    let id = object as usize as u64;

    let pending = {
        let mut state = crate::engine::state();

        state.call_log.push(CallRecord {
            object: id,
            class: entry.class,
            method: entry.method,
        });

        let decoded: Vec<StubValue> = (0..arg_count as usize)
            .map(|index| {
                let raw = unsafe { RawVariant::read(*args.add(index)) };
                state.decode_variant(&raw)
            })
            .collect();

        unsafe { dispatch_varcall(&mut state, entry, id, decoded, ret, error) }
    };

    crate::engine::run_pending(pending);
}

unsafe fn dispatch_varcall(
    state: &mut EngineState,
    entry: &MethodEntry,
    id: u64,
    args: Vec<StubValue>,
    ret: sys::UninitVariantPtr,
    error: *mut sys::CallError,
) -> Vec<Pending> {
    unsafe {
        (*error) = sys::CallError::default();
        RawVariant::NIL.write(ret);

        match (entry.class, entry.method) {
            ("Object", "emit_signal") => {
                let Some(StubValue::StringName(signal)) = args.first() else {
                    (*error).error = sys::CALL_ERROR_TOO_FEW_ARGUMENTS;
                    (*error).expected = 1;
                    return Vec::new();
                };

                let signal = state.name_content(*signal);
                let class = state.object(id).map(|object| object.class).unwrap_or("");

                use godot_rust_bindings::meta::EngineEnum;
                use godot_rust_bindings::prelude::Error;

                let code = if class_has_signal(class, &signal) {
                    Error::OK
                } else {
                    Error::ERR_DOES_NOT_EXIST
                };

                let raw = state.encode_variant(&StubValue::Int(code.ord() as i64));
                raw.write(ret);

                if code != Error::OK {
                    return Vec::new();
                }

                state.emit(id, &signal, &args[1..])
            }
            ("Object", "call") => {
                let Some(StubValue::StringName(method)) = args.first() else {
                    (*error).error = sys::CALL_ERROR_TOO_FEW_ARGUMENTS;
                    (*error).expected = 1;
                    return Vec::new();
                };

                let method = state.name_content(*method);
                let payload = &args[1..];

                dispatch_dynamic_call(state, id, &method, payload, ret, error)
            }
            (class, method) => {
                unreachable!("no variant-call behavior registered for {class}::{method}")
            }
        }
    }
}

/// The by-name call surface. A real host reflects over its whole class
/// database; the stand-in covers the entry points the tests exercise
/// and reports everything else as an invalid method.
unsafe fn dispatch_dynamic_call(
    state: &mut EngineState,
    id: u64,
    method: &str,
    args: &[StubValue],
    ret: sys::UninitVariantPtr,
    error: *mut sys::CallError,
) -> Vec<Pending> {
    unsafe {
        match method {
            "get_name" => {
                if !args.is_empty() {
                    (*error).error = sys::CALL_ERROR_TOO_MANY_ARGUMENTS;
                    (*error).expected = 0;
                    return Vec::new();
                }

                let name = state
                    .object(id)
                    .map(|object| prop_str(object, "name"))
                    .unwrap_or_default();

                let interned = state.intern_name(&name);
                let raw = state.encode_variant(&StubValue::StringName(interned));
                raw.write(ret);

                Vec::new()
            }
            "set_name" => {
                let Some(value) = args.first() else {
                    (*error).error = sys::CALL_ERROR_TOO_FEW_ARGUMENTS;
                    (*error).expected = 1;
                    return Vec::new();
                };

                let StubValue::Str(name) = value else {
                    (*error).error = sys::CALL_ERROR_INVALID_ARGUMENT;
                    (*error).argument = 0;
                    (*error).expected = KIND_STRING;
                    return Vec::new();
                };

                let name = name.clone();

                if let Some(object) = state.object_mut(id) {
                    object.props.insert("name", StubValue::Str(name));
                }

                state.emit(id, "renamed", &[])
            }
            "is_visible" => {
                let visible = state
                    .object(id)
                    .map(|object| prop_bool(object, "visible"))
                    .unwrap_or(false);

                let raw = state.encode_variant(&StubValue::Bool(visible));
                raw.write(ret);

                Vec::new()
            }
            _ => {
                (*error).error = sys::CALL_ERROR_INVALID_METHOD;

                Vec::new()
            }
        }
    }
}
