/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::prelude::*;

#[test]
fn property_sugar_forwards_to_the_accessor_pair() {
    integration_test::setup();

    let mut dialog = AcceptDialog::new_alloc();
    let id = dialog.instance_id();

    dialog.set_dialog_text(&GString::from("proceed?"));

    assert_eq!(dialog.dialog_text().to_string(), "proceed?");
    assert_eq!(dialog.get_text().to_string(), "proceed?");

    dialog.set_dialog_hide_on_ok(false);
    assert!(!dialog.dialog_hide_on_ok());

    // The sugar goes through the same native entry points as the
    // explicit accessors; there is no separate property channel.
    let log = tests_host_lib::calls_for(id);
    let set_calls = log.iter().filter(|call| *call == "AcceptDialog::set_text").count();
    let get_calls = log.iter().filter(|call| *call == "AcceptDialog::get_text").count();

    assert_eq!(set_calls, 1);
    assert_eq!(get_calls, 2);

    dialog.free();
}

#[test]
fn generic_property_access_reaches_the_same_storage() {
    integration_test::setup();

    let mut dialog = AcceptDialog::new_alloc();

    dialog.set(
        &StringName::from("dialog_text"),
        &GString::from("via reflection").to_variant(),
    );

    assert_eq!(dialog.get_text().to_string(), "via reflection");

    dialog.set_text(&GString::from("via accessor"));

    let value = dialog.get(&StringName::from("dialog_text"));
    assert_eq!(value.to::<String>().expect("text property is a string"), "via accessor");

    dialog.free();
}

#[test]
fn defaults_declared_by_the_class_database_are_visible() {
    integration_test::setup();

    let dialog = AcceptDialog::new_alloc();

    assert_eq!(dialog.ok_button_text().to_string(), "OK");
    assert!(dialog.dialog_hide_on_ok());
    assert!(!dialog.dialog_autowrap());

    dialog.free();

    let layer = CanvasLayer::new_alloc();

    assert_eq!(layer.layer(), 1);
    assert_eq!(layer.scale(), Vector2::ONE);
    assert!(layer.visible());
    assert!(!layer.follow_viewport_enabled());

    layer.free();

    let curve = Curve::new_gd();

    assert_eq!(curve.min_value(), 0.0);
    assert_eq!(curve.max_value(), 1.0);
    assert_eq!(curve.bake_resolution(), 100);
}

#[test]
fn resource_name_and_path_are_plain_accessor_pairs() {
    integration_test::setup();

    let mut mesh = NavigationMesh::new_gd();

    mesh.set_resource_name(&GString::from("level-1-navmesh"));
    mesh.set_resource_path(&GString::from("res://nav/level_1.tres"));

    assert_eq!(mesh.resource_name().to_string(), "level-1-navmesh");
    assert_eq!(mesh.resource_path().to_string(), "res://nav/level_1.tres");

    mesh.set_cell_size(0.5);
    assert_eq!(mesh.cell_size(), 0.5);
}
