/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::builtin::StringName;
use godot_rust_bindings::classes::window::method_name;
use godot_rust_bindings::prelude::*;

#[test]
fn method_binds_resolve_once_per_call_site() {
    integration_test::setup();

    let mut window = Window::new_alloc();

    window.set_title(&GString::from("alpha"));
    window.set_title(&GString::from("beta"));
    window.set_title(&GString::from("gamma"));

    assert_eq!(window.get_title().to_string(), "gamma");
    assert_eq!(window.get_title().to_string(), "gamma");

    // Three calls, one class-database lookup.
    assert_eq!(tests_host_lib::call_count("Window", "set_title"), 3);
    assert_eq!(tests_host_lib::bind_lookup_count("Window", "set_title"), 1);

    assert_eq!(tests_host_lib::call_count("Window", "get_title"), 2);
    assert_eq!(tests_host_lib::bind_lookup_count("Window", "get_title"), 1);

    window.free();
}

#[test]
fn interned_names_are_created_once_and_reused() {
    integration_test::setup();

    let first: *const StringName = method_name::SET_TITLE.get();
    let second: *const StringName = method_name::SET_TITLE.get();

    assert_eq!(first, second);
    assert_eq!(method_name::SET_TITLE.as_str(), "set_title");
}

#[test]
fn calls_are_dispatched_against_the_declaring_class() {
    integration_test::setup();

    // An inherited method called through a subclass handle still
    // resolves against the class that declares it.
    let mut dialog = AcceptDialog::new_alloc();
    let id = dialog.instance_id();

    dialog.set_size(Vector2i::new(320, 200));
    dialog.set_text(&GString::from("hello"));

    let log = tests_host_lib::calls_for(id);

    assert!(log.contains(&"Window::set_size".to_owned()));
    assert!(log.contains(&"AcceptDialog::set_text".to_owned()));

    dialog.free();
}
