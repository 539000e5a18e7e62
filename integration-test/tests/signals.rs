/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use godot_rust_bindings::classes::ConnectFlags;
use godot_rust_bindings::prelude::*;
use godot_rust_bindings::signals::ConnectError;

#[test]
fn connected_handlers_observe_emissions() {
    integration_test::setup();

    let dialog = AcceptDialog::new_alloc();
    let hits = Rc::new(Cell::new(0));

    let handler_hits = hits.clone();
    let callable = dialog
        .confirmed()
        .connect_fn(move |()| handler_hits.set(handler_hits.get() + 1))
        .expect("connecting to `confirmed` succeeds");

    assert!(dialog.confirmed().is_connected(&callable));

    dialog.confirmed().emit(());
    dialog.confirmed().emit(());

    assert_eq!(hits.get(), 2);

    dialog.confirmed().disconnect(&callable);
    assert!(!dialog.confirmed().is_connected(&callable));

    dialog.confirmed().emit(());
    assert_eq!(hits.get(), 2);

    dialog.free();
}

#[test]
fn signal_arguments_are_decoded_by_position() {
    integration_test::setup();

    let dialog = AcceptDialog::new_alloc();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let handler_seen = seen.clone();
    let _callable = dialog
        .custom_action()
        .connect_fn(move |(action,): (StringName,)| {
            handler_seen.borrow_mut().push(action);
        })
        .expect("connecting to `custom_action` succeeds");

    dialog
        .custom_action()
        .emit((StringName::from("apply"),));

    let expected = StringName::from("apply");
    assert_eq!(seen.borrow().as_slice(), std::slice::from_ref(&expected));

    dialog.free();
}

#[test]
fn object_payloads_arrive_as_typed_handles() {
    integration_test::setup();

    let mut parent = Node::new_alloc();
    let entered = Rc::new(RefCell::new(Vec::new()));

    let handler_entered = entered.clone();
    let _callable = parent
        .child_entered_tree()
        .connect_fn(move |(child,): (Gd<Node>,)| {
            handler_entered.borrow_mut().push(child.instance_id());
        })
        .expect("connecting to `child_entered_tree` succeeds");

    let child = Node::new_alloc();
    parent.add_child(&child);

    assert_eq!(entered.borrow().as_slice(), &[child.instance_id()]);

    parent.free();
}

#[test]
fn double_connections_are_rejected() {
    integration_test::setup();

    let window = Window::new_alloc();
    let callable = Callable::from_fn(|_args| Variant::nil());

    window
        .close_requested()
        .connect(&callable)
        .expect("first connection succeeds");

    let result = window.close_requested().connect(&callable);

    assert!(matches!(
        result,
        Err(ConnectError::Rejected {
            signal: "close_requested",
            code: Error::ERR_INVALID_PARAMETER,
        })
    ));

    window.free();
}

#[test]
fn one_shot_connections_disconnect_after_the_first_emission() {
    integration_test::setup();

    let mut curve = Curve::new_gd();
    let hits = Rc::new(Cell::new(0));

    let handler_hits = hits.clone();
    let callable = Callable::from_fn(move |_args| {
        handler_hits.set(handler_hits.get() + 1);

        Variant::nil()
    });

    curve
        .range_changed()
        .connect_flags(&callable, ConnectFlags::ONE_SHOT)
        .expect("one-shot connection succeeds");

    // The setter emits `range_changed` host-side.
    curve.set_min_value(-1.0);
    curve.set_max_value(2.0);

    assert_eq!(hits.get(), 1);
    assert!(!curve.range_changed().is_connected(&callable));
}

#[test]
fn engine_side_property_changes_reach_rust_handlers() {
    integration_test::setup();

    let mut region = NavigationRegion3D::new_alloc();
    let baked = Rc::new(Cell::new(false));

    let handler_baked = baked.clone();
    let _callable = region
        .bake_finished()
        .connect_fn(move |()| handler_baked.set(true))
        .expect("connecting to `bake_finished` succeeds");

    region.bake_navigation_mesh();

    assert!(baked.get());
    assert!(!region.is_baking());

    region.free();
}
