/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::builtin::{GString, StringName, Variant, VariantArray, VariantKind};
use godot_rust_bindings::meta::ToVariant;
use godot_rust_bindings::sys;

#[test]
fn host_initialization_rejects_a_null_table() {
    tests_host_lib::install();

    assert!(sys::is_initialized());

    let result = unsafe { sys::initialize(std::ptr::null()) };
    assert!(matches!(result, Err(sys::InitError::NullInterface)));
}

#[test]
fn strings_are_engine_owned_and_copy_independently() {
    tests_host_lib::install();

    let original = GString::from("first draft");
    let copy = original.clone();

    assert_eq!(original.len(), "first draft".len());
    assert!(!original.is_empty());
    assert_eq!(copy.to_string(), "first draft");
    assert_eq!(original, copy);

    assert!(GString::new().is_empty());
}

#[test]
fn string_names_compare_by_interned_identity() {
    tests_host_lib::install();

    let first = StringName::from("set_text");
    let second = StringName::from("set_text");
    let other = StringName::from("get_text");

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(first.clone(), second);
}

#[test]
fn arrays_share_their_storage_between_copies() {
    tests_host_lib::install();

    let mut array = VariantArray::new();
    assert!(array.is_empty());

    array.push(&1_i64.to_variant());
    array.push(&"two".to_variant());

    let shared = array.clone();
    array.push(&3_i64.to_variant());

    // Engine arrays are references, not deep copies.
    assert_eq!(shared.len(), 3);

    assert_eq!(array.get(0).and_then(|v| v.to::<i64>().ok()), Some(1));
    assert_eq!(
        array.get(1).and_then(|v| v.to::<String>().ok()),
        Some("two".to_owned()),
    );
    assert!(array.get(9).is_none());

    let kinds: Vec<VariantKind> = array.iter().map(|value| value.kind()).collect();
    assert_eq!(
        kinds,
        vec![VariantKind::Int, VariantKind::String, VariantKind::Int],
    );
}

#[test]
fn variants_default_to_nil_and_clone_deeply() {
    tests_host_lib::install();

    let nil = Variant::default();
    assert!(nil.is_nil());

    let value = 7.5_f64.to_variant();
    let copy = value.clone();
    drop(value);

    assert_eq!(copy.to::<f64>().expect("clone outlives the original"), 7.5);
}
