/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::prelude::*;

#[test]
fn manually_managed_objects_live_until_freed() {
    integration_test::setup();

    let node = Node::new_alloc();
    let id = node.instance_id();

    // Handles to manually managed objects are views; dropping a clone
    // must not touch the native object.
    let clone = node.clone();
    drop(clone);

    assert!(tests_host_lib::object_exists(id));

    node.free();
    assert!(tests_host_lib::was_destroyed(id));
}

#[test]
fn queue_free_destroys_through_the_engine() {
    integration_test::setup();

    let mut node = Node::new_alloc();
    let id = node.instance_id();

    node.queue_free();

    assert!(tests_host_lib::was_destroyed(id));
}

#[test]
fn duplicated_resources_belong_to_the_caller() {
    integration_test::setup();

    let mut curve = Curve::new_gd();
    curve.add_point(Vector2::new(0.0, 0.25));

    let copy = curve
        .duplicate()
        .expect("duplicate returns a resource")
        .cast::<Curve>();
    let copy_id = copy.instance_id();

    assert_ne!(copy_id, curve.instance_id());
    assert_eq!(tests_host_lib::refcount_of(copy_id), Some(1));
    assert_eq!(copy.get_point_count(), 1);

    drop(copy);
    assert!(tests_host_lib::was_destroyed(copy_id));
}

#[test]
fn object_typed_properties_share_engine_side_ownership() {
    integration_test::setup();

    let mut region = NavigationRegion3D::new_alloc();

    let mesh = NavigationMesh::new_gd();
    let mesh_id = mesh.instance_id();

    region.set_navigation_mesh(Some(&mesh));
    assert_eq!(tests_host_lib::refcount_of(mesh_id), Some(2));

    // The region's stored reference keeps the mesh alive.
    drop(mesh);
    assert!(tests_host_lib::object_exists(mesh_id));
    assert_eq!(tests_host_lib::refcount_of(mesh_id), Some(1));

    let fetched = region
        .get_navigation_mesh()
        .expect("the property holds a mesh");
    assert_eq!(fetched.instance_id(), mesh_id);
    assert_eq!(tests_host_lib::refcount_of(mesh_id), Some(2));
    drop(fetched);

    region.set_navigation_mesh(None);
    assert!(tests_host_lib::was_destroyed(mesh_id));

    region.free();
}

#[test]
fn variants_hold_references_of_their_own() {
    integration_test::setup();

    let mesh = NavigationMesh::new_gd();
    let id = mesh.instance_id();

    let variant = mesh.to_variant();
    assert_eq!(tests_host_lib::refcount_of(id), Some(2));

    drop(mesh);
    assert!(tests_host_lib::object_exists(id));

    let back: Gd<NavigationMesh> = variant.to().expect("mesh round trip");
    assert_eq!(tests_host_lib::refcount_of(id), Some(2));

    drop(variant);
    drop(back);
    assert!(tests_host_lib::was_destroyed(id));
}

#[test]
fn callables_are_freed_with_their_last_engine_reference() {
    integration_test::setup();

    let window = Window::new_alloc();

    let callable = Callable::from_fn(|_args| Variant::nil());

    window
        .visibility_changed()
        .connect(&callable)
        .expect("connection succeeds");

    // Dropping the Rust handle leaves the connection's reference.
    drop(callable);
    assert_eq!(
        tests_host_lib::connection_count(window.instance_id(), "visibility_changed"),
        1,
    );

    // Destroying the object releases the connection.
    window.free();
}
