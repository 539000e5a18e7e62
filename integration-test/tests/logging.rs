/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use godot_rust_bindings::sys::{SEVERITY_ERROR, SEVERITY_INFO, SEVERITY_WARNING};
use godot_rust_bindings::{godot_error, godot_print, godot_warn};

#[test]
fn messages_route_through_the_host_with_their_severity() {
    integration_test::setup();

    godot_print!("loading {} scripts", 3);
    godot_warn!("script {} is deprecated", "old.rs");
    godot_error!("script {} failed to load", "broken.rs");

    let printed = tests_host_lib::printed_lines();

    assert!(printed.contains(&(SEVERITY_INFO, "loading 3 scripts".to_owned())));
    assert!(printed.contains(&(SEVERITY_WARNING, "script old.rs is deprecated".to_owned())));
    assert!(printed.contains(&(SEVERITY_ERROR, "script broken.rs failed to load".to_owned())));
}
