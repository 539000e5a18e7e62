/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! In-process stand-in for the engine host. Implements the full native
//! interface over a small object heap plus a class database carrying
//! the same (name, hash) pairs the bindings were generated against,
//! and records every lookup and call so tests can assert on the glue's
//! behavior rather than trusting it.

mod classdb;
mod engine;
mod ffi;
mod variant;

use std::sync::Once;

use itertools::Itertools;

/// Installs the stand-in host interface into the bindings. Safe to
/// call from every test; only the first call does anything.
pub fn install() {
    static INSTALL: Once = Once::new();

    INSTALL.call_once(|| {
        unsafe { godot_rust_bindings::sys::initialize(&ffi::INTERFACE) }
            .expect("installing the stand-in host interface failed");
    });
}

// Diagnostics read by the test suites.

/// Number of times a (class, method) pair was looked up in the class
/// database, across all hashes.
pub fn bind_lookup_count(class: &str, method: &str) -> usize {
    engine::state()
        .bind_lookups
        .iter()
        .filter(|lookup| lookup.class == class && lookup.method == method)
        .count()
}

/// Number of native calls that went through a given method bind.
pub fn call_count(class: &str, method: &str) -> usize {
    engine::state()
        .call_log
        .iter()
        .filter(|record| record.class == class && record.method == method)
        .count()
}

/// Calls received by one object, as `Class::method` strings in order.
pub fn calls_for(instance_id: u64) -> Vec<String> {
    engine::state()
        .call_log
        .iter()
        .filter(|record| record.object == instance_id)
        .map(|record| format!("{}::{}", record.class, record.method))
        .collect()
}

/// The whole call log, formatted one call per line.
pub fn call_log() -> String {
    engine::state()
        .call_log
        .iter()
        .map(|record| format!("#{} {}::{}", record.object, record.class, record.method))
        .join("\n")
}

pub fn object_exists(instance_id: u64) -> bool {
    engine::state().objects.contains_key(&instance_id)
}

pub fn was_destroyed(instance_id: u64) -> bool {
    engine::state().destroyed.contains(&instance_id)
}

pub fn refcount_of(instance_id: u64) -> Option<u32> {
    engine::state()
        .objects
        .get(&instance_id)
        .map(|object| object.refcount)
}

pub fn live_object_count() -> usize {
    engine::state().objects.len()
}

pub fn live_callable_count() -> usize {
    engine::state().callables.len()
}

pub fn live_string_count() -> usize {
    engine::state().strings.len()
}

/// Messages routed through the host `print` entry, most recent last.
pub fn printed_lines() -> Vec<(i32, String)> {
    engine::state().printed.clone()
}

pub fn connection_count(instance_id: u64, signal: &str) -> usize {
    engine::state()
        .objects
        .get(&instance_id)
        .map(|object| {
            object
                .connections
                .iter()
                .filter(|connection| connection.signal == signal)
                .count()
        })
        .unwrap_or(0)
}
