/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub mod negative_tests;

// The entry point a real host would resolve by name. The test suites
// install the stand-in host directly instead.
godot_rust_bindings::entry_point!(bindings_library_init);

/// Installs the stand-in host. Every test starts with this; repeated
/// calls are no-ops.
pub fn setup() {
    tests_host_lib::install();
}
