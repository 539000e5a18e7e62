/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The function table handed to the bindings, implemented over the
//! stand-in engine state.

use std::ffi::{CStr, c_char};

use godot_rust_bindings::builtin::{Color, Rect2, Vector2, Vector2i, Vector3};
use godot_rust_bindings::sys;

use crate::engine::{BindLookup, state};
use crate::variant::{
    KIND_ARRAY, KIND_BOOL, KIND_CALLABLE, KIND_COLOR, KIND_FLOAT, KIND_INT, KIND_OBJECT,
    KIND_RECT2, KIND_STRING, KIND_STRING_NAME, KIND_VECTOR2, KIND_VECTOR2I, KIND_VECTOR3,
    RawVariant, StubValue,
};

/// Host-side layout of the 16 opaque callable bytes.
#[repr(C)]
#[derive(Clone, Copy)]
struct RawCallable {
    id: u64,
    pad: u64,
}

const _: () = assert!(size_of::<RawCallable>() == size_of::<sys::OpaqueCallable>());

unsafe fn read_handle(ptr: sys::ConstTypePtr) -> u64 {
    unsafe { (ptr as *const usize).read_unaligned() as u64 }
}

unsafe fn write_handle(dest: sys::TypePtr, id: u64) {
    unsafe { (dest as *mut usize).write_unaligned(id as usize) };
}

unsafe fn cstr_to_string(utf8: *const c_char) -> String {
    unsafe { CStr::from_ptr(utf8) }
        .to_string_lossy()
        .into_owned()
}

// String names.

unsafe extern "C" fn string_name_new(dest: sys::TypePtr, utf8: *const c_char) {
    let content = unsafe { cstr_to_string(utf8) };
    let id = state().intern_name(&content);

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn string_name_copy(dest: sys::TypePtr, src: sys::ConstTypePtr) {
    let id = unsafe { read_handle(src) };

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn string_name_free(_name: sys::TypePtr) {
    // Interned names are canonical and live for the process lifetime.
}

// Strings.

unsafe extern "C" fn string_new(dest: sys::TypePtr, utf8: *const c_char, len: i64) {
    let bytes = unsafe { std::slice::from_raw_parts(utf8 as *const u8, len as usize) };
    let content = String::from_utf8_lossy(bytes).into_owned();
    let id = state().new_string(content);

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn string_copy(dest: sys::TypePtr, src: sys::ConstTypePtr) {
    let src_id = unsafe { read_handle(src) };

    let mut guard = state();
    let content = guard.string_content(src_id);
    let id = guard.new_string(content);
    drop(guard);

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn string_utf8_len(src: sys::ConstTypePtr) -> i64 {
    let id = unsafe { read_handle(src) };

    state().string_content(id).len() as i64
}

unsafe extern "C" fn string_to_utf8(src: sys::ConstTypePtr, buf: *mut c_char, cap: i64) -> i64 {
    let id = unsafe { read_handle(src) };
    let content = state().string_content(id);

    let bytes = content.as_bytes();
    let count = bytes.len().min(cap as usize);

    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, count);
    }

    count as i64
}

unsafe extern "C" fn string_free(string: sys::TypePtr) {
    let id = unsafe { read_handle(string) };

    state().free_string(id);
}

// Variants.

unsafe extern "C" fn variant_new_nil(dest: sys::UninitVariantPtr) {
    unsafe { RawVariant::NIL.write(dest) };
}

unsafe extern "C" fn variant_new_copy(dest: sys::UninitVariantPtr, src: sys::ConstVariantPtr) {
    let raw = unsafe { RawVariant::read(src) };
    let copy = state().copy_raw_variant(&raw);

    unsafe { copy.write(dest) };
}

unsafe extern "C" fn variant_free(variant: sys::VariantPtr) {
    let raw = unsafe { RawVariant::read(variant) };

    state().free_raw_variant(&raw);
}

unsafe extern "C" fn variant_get_kind(variant: sys::ConstVariantPtr) -> i32 {
    unsafe { RawVariant::read(variant) }.kind
}

// Per-kind conversion functions. The bindings fetch each one once and
// cache it.

macro_rules! from_pod_fn {
    ($name:ident, $ty:ty, $value:ident => $stub:expr) => {
        unsafe extern "C" fn $name(dest: sys::UninitVariantPtr, src: sys::ConstTypePtr) {
            let $value = unsafe { (src as *const $ty).read_unaligned() };
            let raw = state().encode_variant(&$stub);

            unsafe { raw.write(dest) };
        }
    };
}

unsafe extern "C" fn from_nil(dest: sys::UninitVariantPtr, _src: sys::ConstTypePtr) {
    unsafe { RawVariant::NIL.write(dest) };
}

from_pod_fn!(from_bool, bool, value => StubValue::Bool(value));
from_pod_fn!(from_int, i64, value => StubValue::Int(value));
from_pod_fn!(from_float, f64, value => StubValue::Float(value));
from_pod_fn!(from_vector2, Vector2, value => StubValue::Vector2(value));
from_pod_fn!(from_vector2i, Vector2i, value => StubValue::Vector2i(value));
from_pod_fn!(from_vector3, Vector3, value => StubValue::Vector3(value));
from_pod_fn!(from_rect2, Rect2, value => StubValue::Rect2(value));
from_pod_fn!(from_color, Color, value => StubValue::Color(value));

unsafe extern "C" fn from_string(dest: sys::UninitVariantPtr, src: sys::ConstTypePtr) {
    let id = unsafe { read_handle(src) };

    let mut guard = state();
    let content = guard.string_content(id);
    let raw = guard.encode_variant(&StubValue::Str(content));
    drop(guard);

    unsafe { raw.write(dest) };
}

unsafe extern "C" fn from_string_name(dest: sys::UninitVariantPtr, src: sys::ConstTypePtr) {
    let id = unsafe { read_handle(src) };
    let raw = state().encode_variant(&StubValue::StringName(id));

    unsafe { raw.write(dest) };
}

unsafe extern "C" fn from_object(dest: sys::UninitVariantPtr, src: sys::ConstTypePtr) {
    let ptr = unsafe { (src as *const sys::ObjectPtr).read_unaligned() };
    let id = ptr as usize as u64;
    let raw = state().encode_variant(&StubValue::Object(id));

    unsafe { raw.write(dest) };
}

unsafe extern "C" fn from_callable(dest: sys::UninitVariantPtr, src: sys::ConstTypePtr) {
    let callable = unsafe { (src as *const RawCallable).read_unaligned() };
    let raw = state().encode_variant(&StubValue::Callable(callable.id));

    unsafe { raw.write(dest) };
}

unsafe extern "C" fn from_array(dest: sys::UninitVariantPtr, src: sys::ConstTypePtr) {
    let id = unsafe { read_handle(src) };
    let raw = state().encode_variant(&StubValue::Array(id));

    unsafe { raw.write(dest) };
}

unsafe extern "C" fn variant_from_kind_fn(kind: i32) -> sys::VariantFromKindFn {
    match kind {
        KIND_BOOL => from_bool,
        KIND_INT => from_int,
        KIND_FLOAT => from_float,
        KIND_STRING => from_string,
        KIND_VECTOR2 => from_vector2,
        KIND_VECTOR2I => from_vector2i,
        KIND_VECTOR3 => from_vector3,
        KIND_RECT2 => from_rect2,
        KIND_COLOR => from_color,
        KIND_STRING_NAME => from_string_name,
        KIND_OBJECT => from_object,
        KIND_CALLABLE => from_callable,
        KIND_ARRAY => from_array,
        _ => from_nil,
    }
}

macro_rules! to_pod_fn {
    ($name:ident, $ty:ty, $pattern:pat => $value:expr, $default:expr) => {
        unsafe extern "C" fn $name(dest: sys::TypePtr, src: sys::ConstVariantPtr) {
            let raw = unsafe { RawVariant::read(src) };
            let decoded = state().decode_variant(&raw);

            let value: $ty = match decoded {
                $pattern => $value,
                _ => $default,
            };

            unsafe { (dest as *mut $ty).write_unaligned(value) };
        }
    };
}

unsafe extern "C" fn to_nil(_dest: sys::TypePtr, _src: sys::ConstVariantPtr) {}

to_pod_fn!(to_bool, bool, StubValue::Bool(value) => value, false);
to_pod_fn!(to_int, i64, StubValue::Int(value) => value, 0);
to_pod_fn!(to_float, f64, StubValue::Float(value) => value, 0.0);
to_pod_fn!(to_vector2, Vector2, StubValue::Vector2(value) => value, Vector2::ZERO);
to_pod_fn!(to_vector2i, Vector2i, StubValue::Vector2i(value) => value, Vector2i::ZERO);
to_pod_fn!(to_vector3, Vector3, StubValue::Vector3(value) => value, Vector3::ZERO);
to_pod_fn!(to_rect2, Rect2, StubValue::Rect2(value) => value, Rect2::default());
to_pod_fn!(to_color, Color, StubValue::Color(value) => value, Color::default());

unsafe extern "C" fn to_string(dest: sys::TypePtr, src: sys::ConstVariantPtr) {
    let raw = unsafe { RawVariant::read(src) };

    let mut guard = state();
    let content = match guard.decode_variant(&raw) {
        StubValue::Str(content) => content,
        _ => String::new(),
    };
    let id = guard.new_string(content);
    drop(guard);

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn to_string_name(dest: sys::TypePtr, src: sys::ConstVariantPtr) {
    let raw = unsafe { RawVariant::read(src) };

    let id = match state().decode_variant(&raw) {
        StubValue::StringName(id) => id,
        _ => 0,
    };

    unsafe { write_handle(dest, id) };
}

/// Reading an object out of a variant hands the caller a reference of
/// its own (reference-counted classes only).
unsafe extern "C" fn to_object(dest: sys::TypePtr, src: sys::ConstVariantPtr) {
    let raw = unsafe { RawVariant::read(src) };

    let mut guard = state();
    let id = match guard.decode_variant(&raw) {
        StubValue::Object(id) => {
            guard.ref_object(id);
            id
        }
        _ => 0,
    };
    drop(guard);

    let ptr = id as usize as sys::ObjectPtr;

    unsafe { (dest as *mut sys::ObjectPtr).write_unaligned(ptr) };
}

unsafe extern "C" fn to_callable(dest: sys::TypePtr, src: sys::ConstVariantPtr) {
    let raw = unsafe { RawVariant::read(src) };

    let mut guard = state();
    let id = match guard.decode_variant(&raw) {
        StubValue::Callable(id) => {
            guard.ref_callable(id);
            id
        }
        _ => 0,
    };
    drop(guard);

    unsafe { (dest as *mut RawCallable).write_unaligned(RawCallable { id, pad: 0 }) };
}

unsafe extern "C" fn to_array(dest: sys::TypePtr, src: sys::ConstVariantPtr) {
    let raw = unsafe { RawVariant::read(src) };

    let mut guard = state();
    let id = match guard.decode_variant(&raw) {
        StubValue::Array(id) => {
            guard.ref_array(id);
            id
        }
        _ => 0,
    };
    drop(guard);

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn variant_to_kind_fn(kind: i32) -> sys::VariantToKindFn {
    match kind {
        KIND_BOOL => to_bool,
        KIND_INT => to_int,
        KIND_FLOAT => to_float,
        KIND_STRING => to_string,
        KIND_VECTOR2 => to_vector2,
        KIND_VECTOR2I => to_vector2i,
        KIND_VECTOR3 => to_vector3,
        KIND_RECT2 => to_rect2,
        KIND_COLOR => to_color,
        KIND_STRING_NAME => to_string_name,
        KIND_OBJECT => to_object,
        KIND_CALLABLE => to_callable,
        KIND_ARRAY => to_array,
        _ => to_nil,
    }
}

// Class database.

unsafe extern "C" fn classdb_construct_object(class_name: sys::ConstTypePtr) -> sys::ObjectPtr {
    let name_id = unsafe { read_handle(class_name) };

    let mut guard = state();
    let class = guard.name_content(name_id);

    let constructible = crate::classdb::spec(&class)
        .map(|spec| spec.constructible)
        .unwrap_or(false);

    if !constructible {
        return std::ptr::null_mut();
    }

    let Some(object) = crate::classdb::construct(&class) else {
        return std::ptr::null_mut();
    };

    let id = guard.new_object(object);

    id as usize as sys::ObjectPtr
}

unsafe extern "C" fn classdb_get_method_bind(
    class_name: sys::ConstTypePtr,
    method_name: sys::ConstTypePtr,
    hash: i64,
) -> sys::MethodBindPtr {
    let class_id = unsafe { read_handle(class_name) };
    let method_id = unsafe { read_handle(method_name) };

    let mut guard = state();
    let class = guard.name_content(class_id);
    let method = guard.name_content(method_id);

    guard.bind_lookups.push(BindLookup {
        class: class.clone(),
        method: method.clone(),
        hash,
    });

    let Some(entry) = crate::classdb::find_method(&class, &method) else {
        return std::ptr::null();
    };

    // A stale compatibility hash means the bindings were generated
    // against a different API revision.
    if entry.hash != hash {
        return std::ptr::null();
    }

    entry as *const crate::classdb::MethodEntry as sys::MethodBindPtr
}

unsafe extern "C" fn classdb_is_parent_class(
    class_name: sys::ConstTypePtr,
    parent_name: sys::ConstTypePtr,
) -> bool {
    let class_id = unsafe { read_handle(class_name) };
    let parent_id = unsafe { read_handle(parent_name) };

    let guard = state();
    let class = guard.name_content(class_id);
    let parent = guard.name_content(parent_id);
    drop(guard);

    crate::classdb::is_parent_class(&class, &parent)
}

// Method invocation.

unsafe extern "C" fn object_method_bind_ptrcall(
    bind: sys::MethodBindPtr,
    object: sys::ObjectPtr,
    args: *const sys::ConstTypePtr,
    ret: sys::TypePtr,
) {
    let entry = unsafe { &*(bind as *const crate::classdb::MethodEntry) };

    unsafe { crate::classdb::ptrcall(entry, object, args, ret) };
}

unsafe extern "C" fn object_method_bind_call(
    bind: sys::MethodBindPtr,
    object: sys::ObjectPtr,
    args: *const sys::ConstVariantPtr,
    arg_count: i64,
    ret: sys::UninitVariantPtr,
    error: *mut sys::CallError,
) {
    let entry = unsafe { &*(bind as *const crate::classdb::MethodEntry) };

    unsafe { crate::classdb::varcall(entry, object, args, arg_count, ret, error) };
}

// Object lifetime and identity.

unsafe extern "C" fn object_destroy(object: sys::ObjectPtr) {
    let id = object as usize as u64;

    state().destroy_object(id);
}

unsafe extern "C" fn object_get_class_name(object: sys::ConstObjectPtr, dest: sys::TypePtr) {
    let id = object as usize as u64;

    let mut guard = state();
    let class = guard.object(id).map(|object| object.class).unwrap_or("");
    let name_id = guard.intern_name(class);
    drop(guard);

    unsafe { write_handle(dest, name_id) };
}

unsafe extern "C" fn object_get_instance_id(object: sys::ConstObjectPtr) -> u64 {
    object as usize as u64
}

// Custom callables.

unsafe extern "C" fn callable_create(
    userdata: sys::CallableUserData,
    call: sys::CallableCallFn,
    free: sys::CallableFreeFn,
    dest: sys::TypePtr,
) {
    let id = state().new_callable(userdata, call, free);

    unsafe { (dest as *mut RawCallable).write_unaligned(RawCallable { id, pad: 0 }) };
}

unsafe extern "C" fn callable_copy(dest: sys::TypePtr, src: sys::ConstTypePtr) {
    let callable = unsafe { (src as *const RawCallable).read_unaligned() };

    state().ref_callable(callable.id);

    unsafe { (dest as *mut RawCallable).write_unaligned(callable) };
}

unsafe extern "C" fn callable_free(callable: sys::TypePtr) {
    let callable = unsafe { (callable as *const RawCallable).read_unaligned() };

    state().unref_callable(callable.id);
}

// Arrays.

unsafe extern "C" fn array_new(dest: sys::TypePtr) {
    let id = state().new_array(Vec::new());

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn array_copy(dest: sys::TypePtr, src: sys::ConstTypePtr) {
    let id = unsafe { read_handle(src) };

    // Engine arrays are shared: a copy is another reference.
    state().ref_array(id);

    unsafe { write_handle(dest, id) };
}

unsafe extern "C" fn array_free(array: sys::TypePtr) {
    let id = unsafe { read_handle(array) };

    state().unref_array(id);
}

unsafe extern "C" fn array_len(array: sys::ConstTypePtr) -> i64 {
    let id = unsafe { read_handle(array) };

    state()
        .arrays
        .get(&id)
        .map(|entry| entry.items.len() as i64)
        .unwrap_or(0)
}

unsafe extern "C" fn array_get(
    array: sys::ConstTypePtr,
    index: i64,
    dest: sys::UninitVariantPtr,
) -> bool {
    let id = unsafe { read_handle(array) };

    let mut guard = state();
    let item = guard
        .arrays
        .get(&id)
        .and_then(|entry| entry.items.get(index as usize).cloned());

    let raw = match &item {
        Some(value) => guard.encode_variant(value),
        None => RawVariant::NIL,
    };
    drop(guard);

    unsafe { raw.write(dest) };

    item.is_some()
}

unsafe extern "C" fn array_push(array: sys::TypePtr, value: sys::ConstVariantPtr) {
    let id = unsafe { read_handle(array) };
    let raw = unsafe { RawVariant::read(value) };

    let mut guard = state();
    let item = guard.decode_variant(&raw);

    if let Some(entry) = guard.arrays.get_mut(&id) {
        entry.items.push(item);
    }
}

// Singletons.

unsafe extern "C" fn global_get_singleton(name: sys::ConstTypePtr) -> sys::ObjectPtr {
    let name_id = unsafe { read_handle(name) };

    let mut guard = state();
    let name = guard.name_content(name_id);

    if name != "Engine" {
        return std::ptr::null_mut();
    }

    let id = guard.engine_singleton();

    id as usize as sys::ObjectPtr
}

// Message output.

unsafe extern "C" fn print(severity: i32, utf8: *const c_char) {
    let message = unsafe { cstr_to_string(utf8) };

    state().printed.push((severity, message));
}

pub(crate) static INTERFACE: sys::HostInterface = sys::HostInterface {
    version: sys::INTERFACE_VERSION,

    string_name_new,
    string_name_copy,
    string_name_free,

    string_new,
    string_copy,
    string_utf8_len,
    string_to_utf8,
    string_free,

    variant_new_nil,
    variant_new_copy,
    variant_free,
    variant_get_kind,
    variant_from_kind_fn,
    variant_to_kind_fn,

    classdb_construct_object,
    classdb_get_method_bind,
    classdb_is_parent_class,

    object_method_bind_ptrcall,
    object_method_bind_call,

    object_destroy,
    object_get_class_name,
    object_get_instance_id,

    callable_create,
    callable_copy,
    callable_free,

    array_new,
    array_copy,
    array_free,
    array_len,
    array_get,
    array_push,

    global_get_singleton,

    print,
};
