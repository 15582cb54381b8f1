//! The owning handle wrapper.

use crate::counted::RefCounted;
use std::fmt;
use std::mem;
use std::ptr;

/// Owning wrapper for a handle from an external reference-counting system.
///
/// An `ObjRef<T>` holds at most one handle (a `*mut T`, null allowed) and
/// guarantees that the handle's count obligation is released exactly once:
/// on drop, on reassignment, or on an explicit [`reset`]. Null is a valid,
/// fully functional state; an empty wrapper releases nothing.
///
/// Handles enter the wrapper under one of two conventions:
///
/// - [`adopt`]: the caller already holds a count obligation (the result of a
///   `create`/`copy` style call) and transfers it to the wrapper.
/// - [`retain`]: the caller holds no obligation (the result of a `get` style
///   accessor); the wrapper takes one of its own first.
///
/// Cloning takes an independent obligation on the same handle; moving
/// transfers the existing obligation without touching the external count.
///
/// # Thread Safety
///
/// `ObjRef<T>` is neither `Send` nor `Sync`. It is a plain value type: even
/// where the external count primitives are themselves thread-safe, a single
/// wrapper instance must not be mutated from multiple threads without
/// external synchronization.
///
/// [`adopt`]: ObjRef::adopt
/// [`retain`]: ObjRef::retain
/// [`reset`]: ObjRef::reset
pub struct ObjRef<T: RefCounted> {
    object: *mut T,
}

impl<T: RefCounted> ObjRef<T> {
    /// Constructs an empty wrapper holding no object.
    pub const fn null() -> Self {
        Self {
            object: ptr::null_mut(),
        }
    }

    /// Constructs a wrapper for an owned object.
    ///
    /// # Ownership
    ///
    /// The wrapper assumes the caller's count obligation for `object`; no
    /// retain is performed. Null yields an empty wrapper.
    ///
    /// # Safety
    ///
    /// `object` must be null, or a live handle for which the caller holds
    /// one count obligation. That obligation transfers to the wrapper and
    /// must not be released by the caller.
    pub const unsafe fn adopt(object: *mut T) -> Self {
        Self { object }
    }

    /// Constructs a wrapper for an unowned object.
    ///
    /// # Ownership
    ///
    /// The wrapper retains `object` and assumes responsibility for the
    /// obligation that retain creates. Null yields an empty wrapper and
    /// nothing is retained.
    ///
    /// # Safety
    ///
    /// `object` must be null or a live handle of the external system.
    pub unsafe fn retain(object: *mut T) -> Self {
        if !object.is_null() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?object, "retain");
            unsafe { T::incref(object) };
        }
        Self { object }
    }

    /// Returns true if no object is held.
    pub const fn is_null(&self) -> bool {
        self.object.is_null()
    }

    /// Returns the held handle without transferring ownership.
    ///
    /// The returned pointer is borrowed: it is valid no longer than the
    /// wrapper (or until the wrapper is reset), and the caller must not
    /// release it.
    pub const fn as_ptr(&self) -> *mut T {
        self.object
    }

    /// Releases the held object, leaving the wrapper empty.
    pub fn reset(&mut self) {
        self.replace_raw(ptr::null_mut());
    }

    /// Replaces the held object with another owned object.
    ///
    /// The superseded object, if any, is released *after* the new value is
    /// stored, so passing a handle equal to the current one (with its own
    /// obligation) is well defined.
    ///
    /// # Safety
    ///
    /// Same contract as [`adopt`]: `object` must be null or a live handle
    /// carrying one count obligation, which transfers to the wrapper.
    ///
    /// [`adopt`]: ObjRef::adopt
    pub unsafe fn reset_to(&mut self, object: *mut T) {
        self.replace_raw(object);
    }

    /// Exchanges held objects with `other`.
    ///
    /// No count traffic occurs; the obligations move with the handles.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.object, &mut other.object);
    }

    /// Releases ownership of the held object and returns it.
    ///
    /// # Ownership
    ///
    /// The wrapper is empty afterward. The caller assumes the count
    /// obligation for the returned handle, if non-null, and must eventually
    /// release it.
    #[must_use]
    pub fn take(&mut self) -> *mut T {
        let object = mem::replace(&mut self.object, ptr::null_mut());
        #[cfg(feature = "tracing")]
        if !object.is_null() {
            tracing::trace!(?object, "ownership transferred out");
        }
        object
    }

    /// Resets the wrapper and exposes its internal slot to an out-pointer
    /// API.
    ///
    /// The held object is released *before* `fill` runs, so a handle the
    /// external call is about to overwrite is never leaked. `fill` receives
    /// the address of the wrapper's storage, suitable for C functions with a
    /// `T**` result parameter; whatever it writes there is owned by the
    /// wrapper afterward.
    ///
    /// # Safety
    ///
    /// Anything `fill` writes through the slot must be null or a live handle
    /// carrying one count obligation (the owning convention). The slot
    /// pointer must not be used after `fill` returns.
    pub unsafe fn put<R>(&mut self, fill: impl FnOnce(*mut *mut T) -> R) -> R {
        self.reset();
        fill(&mut self.object)
    }

    /// Stores `object`, then releases whatever was held before.
    fn replace_raw(&mut self, object: *mut T) {
        let old = mem::replace(&mut self.object, object);
        if !old.is_null() {
            #[cfg(feature = "tracing")]
            tracing::trace!(object = ?old, "release");
            unsafe { T::decref(old) };
        }
    }
}

impl<T: RefCounted> Default for ObjRef<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: RefCounted> Clone for ObjRef<T> {
    fn clone(&self) -> Self {
        unsafe { Self::retain(self.object) }
    }
}

impl<T: RefCounted> Drop for ObjRef<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

/// Null compares equal only to null; live handles compare by value.
fn raw_eq<T: RefCounted>(a: *mut T, b: *mut T) -> bool {
    match (a.is_null(), b.is_null()) {
        (true, true) => true,
        (false, false) => unsafe { T::equals(a, b) },
        _ => false,
    }
}

impl<T: RefCounted> PartialEq for ObjRef<T> {
    fn eq(&self, other: &Self) -> bool {
        raw_eq(self.object, other.object)
    }
}

/// Comparison against a raw handle, which must be null or live.
impl<T: RefCounted> PartialEq<*mut T> for ObjRef<T> {
    fn eq(&self, other: &*mut T) -> bool {
        raw_eq(self.object, *other)
    }
}

impl<T: RefCounted> fmt::Debug for ObjRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjRef").field(&self.object).finish()
    }
}
