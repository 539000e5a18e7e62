/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Typed proxies over the engine's signal mechanism. A signal accessor
//! on a bound class hands out an [`EngineSignal`]; connect/disconnect
//! forward to the generic native connect machinery with a callable
//! wrapper, and incoming arguments are decoded by position.

use std::marker::PhantomData;

use crate::builtin::{Callable, InternedName, Variant};
use crate::classes::object;
use crate::global::Error;
use crate::godot_error;
use crate::meta::{ConvertError, FromVariant, ToVariant};
use crate::obj::RawObject;
use crate::sys;

/// Fixed-arity signal payload, encoded to and decoded from positional
/// variant lists.
pub trait SignalArguments: Sized {
    const COUNT: usize;

    fn to_variants(&self) -> Vec<Variant>;

    fn from_variants(args: &[&Variant]) -> Result<Self, ArgumentError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ArgumentError {
    #[error("signal emitted {found} arguments, handler expects {expected}")]
    CountMismatch { expected: usize, found: usize },

    #[error("signal argument {index} could not be decoded: {source}")]
    Convert {
        index: usize,
        source: ConvertError,
    },
}

impl SignalArguments for () {
    const COUNT: usize = 0;

    fn to_variants(&self) -> Vec<Variant> {
        vec![]
    }

    fn from_variants(args: &[&Variant]) -> Result<Self, ArgumentError> {
        if args.is_empty() {
            Ok(())
        } else {
            Err(ArgumentError::CountMismatch {
                expected: 0,
                found: args.len(),
            })
        }
    }
}

macro_rules! impl_signal_args {
    ($count:literal => $($ty:ident @ $idx:tt),+) => {
        impl<$($ty: ToVariant + FromVariant),+> SignalArguments for ($($ty,)+) {
            const COUNT: usize = $count;

            fn to_variants(&self) -> Vec<Variant> {
                vec![$(self.$idx.to_variant()),+]
            }

            fn from_variants(args: &[&Variant]) -> Result<Self, ArgumentError> {
                if args.len() != $count {
                    return Err(ArgumentError::CountMismatch {
                        expected: $count,
                        found: args.len(),
                    });
                }

                Ok((
                    $(
                        $ty::try_from_variant(args[$idx])
                            .map_err(|source| ArgumentError::Convert { index: $idx, source })?,
                    )+
                ))
            }
        }
    };
}

impl_signal_args!(1 => A1 @ 0);
impl_signal_args!(2 => A1 @ 0, A2 @ 1);
impl_signal_args!(3 => A1 @ 0, A2 @ 1, A3 @ 2);
impl_signal_args!(4 => A1 @ 0, A2 @ 1, A3 @ 2, A4 @ 3);

#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("failed to connect signal `{signal}`: {code:?}")]
    Rejected { signal: &'static str, code: Error },
}

/// Proxy for one signal of one live object. Borrowed from the host
/// object, so it cannot outlive the handle it came from.
pub struct EngineSignal<'a, A: SignalArguments> {
    object: sys::ObjectPtr,
    name: &'static InternedName,
    args: PhantomData<A>,
    host: PhantomData<&'a RawObject>,
}

impl<'a, A: SignalArguments> EngineSignal<'a, A> {
    pub const ARG_COUNT: usize = A::COUNT;

    pub(crate) fn new(object: sys::ObjectPtr, name: &'static InternedName) -> Self {
        Self {
            object,
            name,
            args: PhantomData,
            host: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name.as_str()
    }

    pub fn emit(&self, args: A) {
        let result = object::raw_emit_signal(self.object, self.name.get(), &args.to_variants());

        if let Err(failure) = result {
            godot_error!("emitting signal `{}` failed: {failure}", self.name.as_str());
        }
    }

    pub fn connect(&self, callable: &Callable) -> Result<(), ConnectError> {
        self.connect_flags(callable, object::ConnectFlags::default())
    }

    pub fn connect_flags(
        &self,
        callable: &Callable,
        flags: object::ConnectFlags,
    ) -> Result<(), ConnectError> {
        match object::raw_connect(self.object, self.name.get(), callable, flags) {
            Error::OK => Ok(()),
            code => Err(ConnectError::Rejected {
                signal: self.name.as_str(),
                code,
            }),
        }
    }

    /// Wraps `handler` in a callable that decodes the payload by
    /// position, connects it, and returns the callable so the caller
    /// can disconnect later.
    pub fn connect_fn(
        &self,
        handler: impl Fn(A) + 'static,
    ) -> Result<Callable, ConnectError> {
        let signal = self.name.as_str();

        let callable = Callable::from_fn(move |args| {
            match A::from_variants(args) {
                Ok(decoded) => handler(decoded),
                Err(error) => {
                    godot_error!("dropping emission of signal `{signal}`: {error}");
                }
            }

            Variant::nil()
        });

        self.connect(&callable)?;

        Ok(callable)
    }

    pub fn disconnect(&self, callable: &Callable) {
        object::raw_disconnect(self.object, self.name.get(), callable);
    }

    pub fn is_connected(&self, callable: &Callable) -> bool {
        object::raw_is_connected(self.object, self.name.get(), callable)
    }
}

impl<'a, A: SignalArguments> std::fmt::Debug for EngineSignal<'a, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EngineSignal({:?})", self.name.as_str())
    }
}
