/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::prelude::*;
use godot_rust_bindings::registry::CallFailure;

#[test]
fn dynamic_calls_pass_variants_positionally() {
    integration_test::setup();

    let mut node = Node::new_alloc();

    let result = node
        .call(&StringName::from("set_name"), &["scout".to_variant()])
        .expect("set_name accepts one string");

    assert!(result.is_nil());
    assert_eq!(node.get_name(), StringName::from("scout"));

    let name = node
        .call(&StringName::from("get_name"), &[])
        .expect("get_name takes no arguments");

    assert_eq!(
        name.to::<StringName>().expect("get_name returns a name"),
        StringName::from("scout"),
    );

    node.free();
}

#[test]
fn call_errors_surface_with_their_native_codes() {
    integration_test::setup();

    let mut node = Node::new_alloc();

    let unknown = node.call(&StringName::from("does_not_exist"), &[]);
    assert_eq!(unknown.unwrap_err(), CallFailure::InvalidMethod);

    let wrong_type = node.call(&StringName::from("set_name"), &[7_i64.to_variant()]);
    assert_eq!(
        wrong_type.unwrap_err(),
        CallFailure::InvalidArgument {
            argument: 0,
            expected: VariantKind::String as i32,
        },
    );

    let missing = node.call(&StringName::from("set_name"), &[]);
    assert_eq!(
        missing.unwrap_err(),
        CallFailure::TooFewArguments { expected: 1 },
    );

    let extra = node.call(&StringName::from("get_name"), &[Variant::nil()]);
    assert_eq!(
        extra.unwrap_err(),
        CallFailure::TooManyArguments { expected: 0 },
    );

    node.free();
}

#[test]
fn emitting_by_name_reports_unknown_signals() {
    integration_test::setup();

    let mut window = Window::new_alloc();

    let known = window
        .emit_signal(&StringName::from("close_requested"), &[])
        .expect("emitting a declared signal succeeds");
    assert_eq!(known, Error::OK);

    let unknown = window
        .emit_signal(&StringName::from("no_such_signal"), &[])
        .expect("unknown signals report through the error enum");
    assert_eq!(unknown, Error::ERR_DOES_NOT_EXIST);

    window.free();
}
