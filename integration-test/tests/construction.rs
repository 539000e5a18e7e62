/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::prelude::*;

#[test]
fn construction_yields_a_live_native_object() {
    integration_test::setup();

    let window = Window::new_alloc();
    let id = window.instance_id();

    assert!(tests_host_lib::object_exists(id));
    assert_eq!(window.get_class().to_string(), "Window");

    window.free();

    assert!(!tests_host_lib::object_exists(id));
    assert!(tests_host_lib::was_destroyed(id));
}

#[test]
fn refcounted_construction_holds_the_initial_reference() {
    integration_test::setup();

    let curve = Curve::new_gd();
    let id = curve.instance_id();

    assert_eq!(tests_host_lib::refcount_of(id), Some(1));

    let second = curve.clone();
    assert_eq!(tests_host_lib::refcount_of(id), Some(2));

    drop(second);
    assert_eq!(tests_host_lib::refcount_of(id), Some(1));

    drop(curve);
    assert!(tests_host_lib::was_destroyed(id));
}

#[test]
fn upcast_and_checked_downcast_preserve_the_instance() {
    integration_test::setup();

    let dialog = AcceptDialog::new_alloc();
    let id = dialog.instance_id();

    let window: Gd<Window> = dialog.upcast();
    assert_eq!(window.instance_id(), id);

    let node: Gd<Node> = window.upcast();
    let dialog: Gd<AcceptDialog> = node.try_cast().expect("instance is an AcceptDialog");
    assert_eq!(dialog.instance_id(), id);

    let node: Gd<Node> = dialog.upcast();
    assert!(node.try_cast::<CanvasLayer>().is_err());
}

#[test]
fn singleton_lookup_returns_the_same_instance() {
    integration_test::setup();

    let first = Engine::singleton();
    let second = Engine::singleton();

    assert_eq!(first.instance_id(), second.instance_id());

    let mut engine = Engine::singleton();
    engine.set_max_fps(144);

    assert_eq!(Engine::singleton().get_max_fps(), 144);
    assert_eq!(Engine::singleton().max_fps(), 144);
}
