/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The host-side variant layout. The bindings treat variants as opaque
//! bytes; this module is the other side of that contract.

use godot_rust_bindings::builtin::{Color, Rect2, Vector2, Vector2i, Vector3};
use godot_rust_bindings::sys;

use crate::engine::EngineState;

pub(crate) const KIND_NIL: i32 = 0;
pub(crate) const KIND_BOOL: i32 = 1;
pub(crate) const KIND_INT: i32 = 2;
pub(crate) const KIND_FLOAT: i32 = 3;
pub(crate) const KIND_STRING: i32 = 4;
pub(crate) const KIND_VECTOR2: i32 = 5;
pub(crate) const KIND_VECTOR2I: i32 = 6;
pub(crate) const KIND_VECTOR3: i32 = 7;
pub(crate) const KIND_RECT2: i32 = 8;
pub(crate) const KIND_COLOR: i32 = 9;
pub(crate) const KIND_STRING_NAME: i32 = 10;
pub(crate) const KIND_OBJECT: i32 = 11;
pub(crate) const KIND_CALLABLE: i32 = 12;
pub(crate) const KIND_ARRAY: i32 = 13;

/// Fills the 24 opaque bytes the bindings reserve per variant.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawVariant {
    pub kind: i32,
    pub pad: u32,
    pub a: u64,
    pub b: u64,
}

const _: () = assert!(size_of::<RawVariant>() == size_of::<sys::OpaqueVariant>());

impl RawVariant {
    pub(crate) const NIL: RawVariant = RawVariant {
        kind: KIND_NIL,
        pad: 0,
        a: 0,
        b: 0,
    };

    pub(crate) unsafe fn read(ptr: sys::ConstVariantPtr) -> RawVariant {
        unsafe { (ptr as *const RawVariant).read_unaligned() }
    }

    pub(crate) unsafe fn write(self, dest: sys::UninitVariantPtr) {
        unsafe { (dest as *mut RawVariant).write_unaligned(self) };
    }
}

/// A decoded variant payload, used by the method dispatch and the
/// signal machinery.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum StubValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Vector2(Vector2),
    Vector2i(Vector2i),
    Vector3(Vector3),
    Rect2(Rect2),
    Color(Color),
    StringName(u64),
    Object(u64),
    Callable(u64),
    Array(u64),
}

fn pack_f32_pair(x: f32, y: f32) -> u64 {
    ((y.to_bits() as u64) << 32) | x.to_bits() as u64
}

fn unpack_f32_pair(packed: u64) -> (f32, f32) {
    (
        f32::from_bits(packed as u32),
        f32::from_bits((packed >> 32) as u32),
    )
}

fn pack_i32_pair(x: i32, y: i32) -> u64 {
    ((y as u32 as u64) << 32) | x as u32 as u64
}

fn unpack_i32_pair(packed: u64) -> (i32, i32) {
    (packed as u32 as i32, (packed >> 32) as u32 as i32)
}

impl EngineState {
    /// Encodes a value into a raw variant, taking the ownership shares
    /// a live variant holds (string copies, array/callable/refcounted
    /// references).
    pub(crate) fn encode_variant(&mut self, value: &StubValue) -> RawVariant {
        match value {
            StubValue::Nil => RawVariant::NIL,
            StubValue::Bool(b) => RawVariant {
                kind: KIND_BOOL,
                pad: 0,
                a: *b as u64,
                b: 0,
            },
            StubValue::Int(i) => RawVariant {
                kind: KIND_INT,
                pad: 0,
                a: *i as u64,
                b: 0,
            },
            StubValue::Float(f) => RawVariant {
                kind: KIND_FLOAT,
                pad: 0,
                a: f.to_bits(),
                b: 0,
            },
            StubValue::Str(s) => {
                let id = self.new_string(s.clone());

                RawVariant {
                    kind: KIND_STRING,
                    pad: 0,
                    a: id,
                    b: 0,
                }
            }
            StubValue::Vector2(v) => RawVariant {
                kind: KIND_VECTOR2,
                pad: 0,
                a: pack_f32_pair(v.x, v.y),
                b: 0,
            },
            StubValue::Vector2i(v) => RawVariant {
                kind: KIND_VECTOR2I,
                pad: 0,
                a: pack_i32_pair(v.x, v.y),
                b: 0,
            },
            StubValue::Vector3(v) => RawVariant {
                kind: KIND_VECTOR3,
                pad: 0,
                a: pack_f32_pair(v.x, v.y),
                b: v.z.to_bits() as u64,
            },
            StubValue::Rect2(r) => RawVariant {
                kind: KIND_RECT2,
                pad: 0,
                a: pack_f32_pair(r.position.x, r.position.y),
                b: pack_f32_pair(r.size.x, r.size.y),
            },
            StubValue::Color(c) => RawVariant {
                kind: KIND_COLOR,
                pad: 0,
                a: pack_f32_pair(c.r, c.g),
                b: pack_f32_pair(c.b, c.a),
            },
            StubValue::StringName(id) => RawVariant {
                kind: KIND_STRING_NAME,
                pad: 0,
                a: *id,
                b: 0,
            },
            StubValue::Object(id) => {
                self.ref_object(*id);

                RawVariant {
                    kind: KIND_OBJECT,
                    pad: 0,
                    a: *id,
                    b: 0,
                }
            }
            StubValue::Callable(id) => {
                self.ref_callable(*id);

                RawVariant {
                    kind: KIND_CALLABLE,
                    pad: 0,
                    a: *id,
                    b: 0,
                }
            }
            StubValue::Array(id) => {
                self.ref_array(*id);

                RawVariant {
                    kind: KIND_ARRAY,
                    pad: 0,
                    a: *id,
                    b: 0,
                }
            }
        }
    }

    /// Decodes a raw variant without touching any reference counts.
    pub(crate) fn decode_variant(&self, raw: &RawVariant) -> StubValue {
        match raw.kind {
            KIND_BOOL => StubValue::Bool(raw.a != 0),
            KIND_INT => StubValue::Int(raw.a as i64),
            KIND_FLOAT => StubValue::Float(f64::from_bits(raw.a)),
            KIND_STRING => StubValue::Str(self.string_content(raw.a)),
            KIND_VECTOR2 => {
                let (x, y) = unpack_f32_pair(raw.a);

                StubValue::Vector2(Vector2::new(x, y))
            }
            KIND_VECTOR2I => {
                let (x, y) = unpack_i32_pair(raw.a);

                StubValue::Vector2i(Vector2i::new(x, y))
            }
            KIND_VECTOR3 => {
                let (x, y) = unpack_f32_pair(raw.a);

                StubValue::Vector3(Vector3::new(x, y, f32::from_bits(raw.b as u32)))
            }
            KIND_RECT2 => {
                let (px, py) = unpack_f32_pair(raw.a);
                let (sx, sy) = unpack_f32_pair(raw.b);

                StubValue::Rect2(Rect2::new(Vector2::new(px, py), Vector2::new(sx, sy)))
            }
            KIND_COLOR => {
                let (r, g) = unpack_f32_pair(raw.a);
                let (b, a) = unpack_f32_pair(raw.b);

                StubValue::Color(Color::new(r, g, b, a))
            }
            KIND_STRING_NAME => StubValue::StringName(raw.a),
            KIND_OBJECT => StubValue::Object(raw.a),
            KIND_CALLABLE => StubValue::Callable(raw.a),
            KIND_ARRAY => StubValue::Array(raw.a),
            _ => StubValue::Nil,
        }
    }

    /// Releases the ownership shares a raw variant holds.
    pub(crate) fn free_raw_variant(&mut self, raw: &RawVariant) {
        match raw.kind {
            KIND_STRING => self.free_string(raw.a),
            KIND_OBJECT => self.unref_object(raw.a),
            KIND_CALLABLE => self.unref_callable(raw.a),
            KIND_ARRAY => self.unref_array(raw.a),
            _ => {}
        }
    }

    /// Duplicates a raw variant, taking fresh ownership shares.
    pub(crate) fn copy_raw_variant(&mut self, raw: &RawVariant) -> RawVariant {
        match raw.kind {
            KIND_STRING => {
                let content = self.string_content(raw.a);
                let id = self.new_string(content);

                RawVariant { a: id, ..*raw }
            }
            KIND_OBJECT => {
                self.ref_object(raw.a);

                *raw
            }
            KIND_CALLABLE => {
                self.ref_callable(raw.a);

                *raw
            }
            KIND_ARRAY => {
                self.ref_array(raw.a);

                *raw
            }
            _ => *raw,
        }
    }
}
