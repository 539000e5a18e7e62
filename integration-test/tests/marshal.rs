/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::meta::ConvertError;
use godot_rust_bindings::prelude::*;

#[test]
fn strings_cross_the_boundary_intact() {
    integration_test::setup();

    let mut dialog = AcceptDialog::new_alloc();

    dialog.set_text(&GString::from("sure about that?"));
    assert_eq!(dialog.get_text().to_string(), "sure about that?");

    dialog.set_ok_button_text(&GString::from("très bien"));
    assert_eq!(dialog.get_ok_button_text().to_string(), "très bien");

    dialog.free();
}

#[test]
fn pods_pass_by_pointer_in_their_declared_layout() {
    integration_test::setup();

    let mut window = Window::new_alloc();

    window.set_size(Vector2i::new(1280, 720));
    assert_eq!(window.get_size(), Vector2i::new(1280, 720));

    // Rect2 returns come back as a struct written into the return slot.
    let rect = window.get_visible_rect();
    assert_eq!(rect.position, Vector2::ZERO);
    assert_eq!(rect.size, Vector2::new(1280.0, 720.0));

    window.free();

    let mut layer = CanvasLayer::new_alloc();

    layer.set_offset(Vector2::new(4.5, -2.0));
    assert_eq!(layer.get_offset(), Vector2::new(4.5, -2.0));

    layer.set_rotation(1.5);
    assert!((layer.get_rotation() - 1.5).abs() < f32::EPSILON);

    layer.free();

    let mut node = Node3D::new_alloc();

    node.set_position(Vector3::new(1.0, 2.0, 3.0));
    node.translate(Vector3::new(0.5, 0.5, 0.5));
    assert_eq!(node.get_position(), Vector3::new(1.5, 2.5, 3.5));

    node.free();
}

#[test]
fn curve_points_round_trip_with_default_tangents() {
    integration_test::setup();

    let mut curve = Curve::new_gd();

    assert_eq!(curve.add_point(Vector2::new(0.0, 0.0)), 0);
    assert_eq!(curve.add_point(Vector2::new(1.0, 1.0)), 1);

    // Points keep their offset order; a middle insert lands between.
    assert_eq!(curve.add_point(Vector2::new(0.5, 1.0)), 1);
    assert_eq!(curve.get_point_count(), 3);
    assert_eq!(curve.get_point_position(1), Vector2::new(0.5, 1.0));

    assert!((curve.sample(0.25) - 0.5).abs() < 1e-6);
    assert!((curve.sample_baked(0.75) - 1.0).abs() < 1e-6);

    curve.remove_point(1);
    assert_eq!(curve.get_point_count(), 2);

    curve.clear_points();
    assert_eq!(curve.get_point_count(), 0);
}

#[test]
fn enums_travel_as_ordinals() {
    integration_test::setup();

    let mut window = Window::new_alloc();

    window.set_mode(WindowMode::MODE_MAXIMIZED);
    assert_eq!(window.get_mode(), WindowMode::MODE_MAXIMIZED);

    window.set_flag(WindowFlags::FLAG_BORDERLESS, true);
    assert!(window.get_flag(WindowFlags::FLAG_BORDERLESS));
    assert!(!window.get_flag(WindowFlags::FLAG_NO_FOCUS));

    window.free();
}

#[test]
fn variants_convert_both_ways_and_reject_kind_mismatches() {
    integration_test::setup();

    let int = Variant::from_value(&42_i64);
    assert_eq!(int.kind(), VariantKind::Int);
    assert_eq!(int.to::<i64>().expect("int round trip"), 42);

    let float = Variant::from_value(&1.25_f64);
    assert_eq!(float.to::<f64>().expect("float round trip"), 1.25);

    let text = Variant::from_value(&GString::from("vary"));
    assert_eq!(text.to::<String>().expect("string round trip"), "vary");

    let nil = Variant::nil();
    assert!(nil.is_nil());

    match text.to::<i64>() {
        Err(ConvertError::KindMismatch { expected, actual }) => {
            assert_eq!(expected, VariantKind::Int);
            assert_eq!(actual, VariantKind::String);
        }
        other => panic!("expected a kind mismatch, got {other:?}"),
    }

    let narrow = Variant::from_value(&(i64::from(i32::MAX) + 1));
    assert!(matches!(
        narrow.to::<i32>(),
        Err(ConvertError::IntOutOfRange { .. })
    ));
}

#[test]
fn object_variants_carry_the_instance_and_check_the_class() {
    integration_test::setup();

    let node = Node::new_alloc();
    let id = node.instance_id();

    let variant = node.to_variant();
    assert_eq!(variant.kind(), VariantKind::Object);

    let back: Gd<Node> = variant.to().expect("object round trip");
    assert_eq!(back.instance_id(), id);

    assert!(matches!(
        variant.to::<Gd<Window>>(),
        Err(ConvertError::ClassMismatch { expected: "Window" })
    ));

    node.free();
}

#[test]
fn children_come_back_through_an_engine_array() {
    integration_test::setup();

    let mut parent = Node::new_alloc();
    let alpha = Node::new_alloc();
    let beta = Node::new_alloc();

    parent.add_child(&alpha);
    parent.add_child(&beta);

    assert_eq!(parent.get_child_count(), 2);

    let children = parent.get_children();
    assert_eq!(children.len(), 2);

    let ids: Vec<u64> = children
        .iter()
        .map(|child| child.to::<Gd<Node>>().expect("child is a node").instance_id())
        .collect();

    assert_eq!(ids, vec![alpha.instance_id(), beta.instance_id()]);

    let first = parent.get_child(0).expect("child 0 exists");
    assert_eq!(first.instance_id(), alpha.instance_id());
    assert!(parent.get_child(7).is_none());

    assert_eq!(
        alpha.get_parent().expect("alpha has a parent").instance_id(),
        parent.instance_id(),
    );

    // Freeing the parent takes the children with it.
    let ids = (parent.instance_id(), alpha.instance_id(), beta.instance_id());
    parent.free();

    assert!(tests_host_lib::was_destroyed(ids.0));
    assert!(tests_host_lib::was_destroyed(ids.1));
    assert!(tests_host_lib::was_destroyed(ids.2));
}
