/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Message output routed through the host, so binding diagnostics land
//! wherever the engine sends its own.

use std::ffi::CString;
use std::fmt;

use crate::sys;

#[doc(hidden)]
pub fn print_line(severity: i32, args: fmt::Arguments<'_>) {
    let message = fmt::format(args);

    let message = CString::new(message)
        .unwrap_or_else(|_| CString::from(c"<message contained an interior NUL byte>"));

    unsafe { (sys::host().print)(severity, message.as_ptr()) };
}

#[macro_export]
macro_rules! godot_print {
    ($($arg:tt)*) => {
        $crate::log::print_line($crate::sys::SEVERITY_INFO, ::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! godot_warn {
    ($($arg:tt)*) => {
        $crate::log::print_line($crate::sys::SEVERITY_WARNING, ::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! godot_error {
    ($($arg:tt)*) => {
        $crate::log::print_line($crate::sys::SEVERITY_ERROR, ::std::format_args!($($arg)*))
    };
}
