/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use super::{EngineClass, Inherits, ManualMemory, MemoryPolicy, RawObject, class_mut, class_ref};
use crate::builtin::{InternedName, StringName, Variant, VariantKind};
use crate::meta::{ConvertError, FromVariant, ToVariant, variant_from, variant_to};
use crate::sys;

/// Managed handle to a native engine object: the opaque pointer plus
/// the flag stating whether this handle participates in ownership.
/// Borrowed views (`owned == false`) never touch the reference count.
pub struct Gd<T: EngineClass> {
    raw: RawObject,
    owned: bool,
    class: PhantomData<T>,
}

impl<T: EngineClass> Gd<T> {
    /// # Safety
    ///
    /// `ptr` must point to a live native object that is an instance of
    /// `T`. With `owned == true` the handle takes part in the class's
    /// memory policy and must hold a reference that is the caller's to
    /// give away.
    pub(crate) unsafe fn from_object_ptr(ptr: sys::ObjectPtr, owned: bool) -> Self {
        debug_assert!(!ptr.is_null(), "object handles cannot be null");

        Self {
            raw: RawObject::new(ptr),
            owned,
            class: PhantomData,
        }
    }

    pub(crate) fn object_ptr(&self) -> sys::ObjectPtr {
        self.raw.ptr()
    }

    pub fn instance_id(&self) -> u64 {
        unsafe { (sys::host().object_get_instance_id)(self.raw.ptr()) }
    }

    /// Class name of the live instance, which may be a subclass of `T`.
    pub fn instance_class_name(&self) -> StringName {
        unsafe {
            StringName::from_sys_init(|dest| {
                (sys::host().object_get_class_name)(self.raw.ptr(), dest)
            })
        }
    }

    pub fn upcast<Base: EngineClass>(self) -> Gd<Base>
    where
        T: Inherits<Base>,
    {
        let (ptr, owned) = self.into_parts();

        unsafe { Gd::from_object_ptr(ptr, owned) }
    }

    pub fn upcast_ref<Base: EngineClass>(&self) -> &Base
    where
        T: Inherits<Base>,
    {
        unsafe { class_ref(&self.raw) }
    }

    /// Downcast checked against the host's class database.
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Gd<T>>
    where
        Derived: Inherits<T>,
    {
        if self.is_instance_of(Derived::class_name()) {
            let (ptr, owned) = self.into_parts();

            Ok(unsafe { Gd::from_object_ptr(ptr, owned) })
        } else {
            Err(self)
        }
    }

    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: Inherits<T>,
    {
        self.try_cast().unwrap_or_else(|gd| {
            panic!(
                "object of class {:?} cannot be cast to `{}`",
                gd.instance_class_name(),
                Derived::CLASS,
            )
        })
    }

    pub(crate) fn is_instance_of(&self, class: &InternedName) -> bool {
        let actual = self.instance_class_name();

        unsafe { (sys::host().classdb_is_parent_class)(actual.sys_ptr(), class.get().sys_ptr()) }
    }

    /// Disassembles the handle without running its drop logic.
    fn into_parts(self) -> (sys::ObjectPtr, bool) {
        let ptr = self.raw.ptr();
        let owned = self.owned;

        std::mem::forget(self);

        (ptr, owned)
    }
}

impl<T: EngineClass<Memory = ManualMemory>> Gd<T> {
    /// Destroys the native object. Only manually managed classes expose
    /// this; reference-counted objects die with their last reference.
    pub fn free(self) {
        let (ptr, _owned) = self.into_parts();

        unsafe { (sys::host().object_destroy)(ptr) };
    }
}

impl<T: EngineClass> Deref for Gd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        unsafe { class_ref(&self.raw) }
    }
}

impl<T: EngineClass> DerefMut for Gd<T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe { class_mut(&mut self.raw) }
    }
}

impl<T: EngineClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        T::Memory::on_clone(self.raw.ptr(), self.owned);

        Self {
            raw: RawObject::new(self.raw.ptr()),
            owned: self.owned,
            class: PhantomData,
        }
    }
}

impl<T: EngineClass> Drop for Gd<T> {
    fn drop(&mut self) {
        if T::Memory::on_drop(self.raw.ptr(), self.owned) {
            unsafe { (sys::host().object_destroy)(self.raw.ptr()) };
        }
    }
}

impl<T: EngineClass> PartialEq for Gd<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw.ptr() == other.raw.ptr()
    }
}

impl<T: EngineClass> Eq for Gd<T> {}

impl<T: EngineClass> fmt::Debug for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gd<{}>(#{})", T::CLASS, self.instance_id())
    }
}

impl<T: EngineClass> ToVariant for Gd<T> {
    fn to_variant(&self) -> Variant {
        let ptr = self.raw.ptr();

        variant_from(&ptr, VariantKind::Object)
    }
}

impl<T: EngineClass> FromVariant for Gd<T> {
    /// Reading an object out of a variant takes a reference for the
    /// caller (reference-counted classes), so the resulting handle is
    /// owning.
    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let ptr: sys::ObjectPtr = variant_to(variant, VariantKind::Object)?;

        if ptr.is_null() {
            return Err(ConvertError::NullObject);
        }

        let gd = unsafe { Gd::<T>::from_object_ptr(ptr, true) };

        if gd.is_instance_of(T::class_name()) {
            Ok(gd)
        } else {
            Err(ConvertError::ClassMismatch { expected: T::CLASS })
        }
    }
}
