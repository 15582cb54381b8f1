//! Contract with the external reference-counting object system.

/// Binding to an external, manually reference-counted object system.
///
/// Implementing this trait for an opaque handle type tells [`ObjRef`] how to
/// drive the external count for that type. The three functions correspond to
/// the retain, release, and value-equality primitives such systems expose
/// (`CFRetain`/`CFRelease`/`CFEqual` and their many relatives).
///
/// Most implementations should be declared with the [`ref_counted!`] macro
/// rather than written by hand.
///
/// # Safety
///
/// Implementors assert all of the following:
///
/// - `Self` is an opaque C object type, only ever handled through `*mut Self`,
///   whose storage is managed solely by the external system.
/// - The type is *manually* counted. Types owned by an automatic system
///   (ARC-managed Objective-C objects, GC-backed handles) must not implement
///   this trait; double management is undefined behavior.
/// - `incref` records exactly one count obligation and `decref` releases
///   exactly one, destroying the object when the last obligation goes away.
/// - `equals` reports value equality of the underlying objects and produces
///   no count traffic.
///
/// Callers of the three functions (normally only [`ObjRef`]) must pass
/// pointers to live objects; none of them accept null.
///
/// [`ObjRef`]: crate::ObjRef
/// [`ref_counted!`]: crate::ref_counted
pub unsafe trait RefCounted {
    /// Records one additional count obligation for `object`.
    unsafe fn incref(object: *mut Self);

    /// Releases one count obligation for `object`, destroying it if this was
    /// the last one.
    unsafe fn decref(object: *mut Self);

    /// Reports whether the objects behind `a` and `b` are value-equal.
    unsafe fn equals(a: *mut Self, b: *mut Self) -> bool;
}
