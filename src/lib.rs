//! Owning wrappers for externally reference-counted C object handles.
//!
//! Many C libraries manage object lifetime through manual reference
//! counting: a retain call, a release call, and handles compared for
//! equality by value rather than identity. [`ObjRef`] makes ownership of
//! such a handle a static property of Rust code: every handle that enters a
//! wrapper is released exactly once, however many clones, moves, or early
//! returns happen along the way.
//!
//! # Ownership Conventions
//!
//! External APIs hand out handles under two conventions, and the wrapper has
//! a distinct entry point for each:
//!
//! - [`ObjRef::adopt`] for *owning* (+1) results: `create`/`copy` style
//!   calls whose caller already holds a count obligation.
//! - [`ObjRef::retain`] for *borrowing* (+0) results: `get` style accessors
//!   whose caller holds no obligation.
//!
//! Binding a concrete handle type takes one [`ref_counted!`] declaration
//! naming the external system's three primitives.
//!
//! # Thread Safety
//!
//! `ObjRef<T>` is neither `Send` nor `Sync`. Whether handles of a given
//! system may cross threads is that system's business; the wrapper itself is
//! a plain value type and adds no synchronization.
//!
//! # Features
//!
//! - `tracing`: emit `trace!` events for every operation that generates
//!   external count traffic (retain, release, ownership transfer), for
//!   diagnosing count imbalances with a subscriber.
//!
//! # Example
//!
//! Wrapping a (here simulated) C object system:
//!
//! ```
//! use objref::{ObjRef, ref_counted};
//! use std::ffi::c_int;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[repr(C)]
//! struct Widget {
//!     count: AtomicUsize,
//!     id: u32,
//! }
//!
//! unsafe extern "C" fn widget_ref(w: *mut Widget) {
//!     unsafe { &*w }.count.fetch_add(1, Ordering::Relaxed);
//! }
//!
//! unsafe extern "C" fn widget_unref(w: *mut Widget) {
//!     if unsafe { &*w }.count.fetch_sub(1, Ordering::AcqRel) == 1 {
//!         drop(unsafe { Box::from_raw(w) });
//!     }
//! }
//!
//! unsafe extern "C" fn widget_equal(a: *mut Widget, b: *mut Widget) -> c_int {
//!     (unsafe { &*a }.id == unsafe { &*b }.id) as c_int
//! }
//!
//! ref_counted!(Widget {
//!     incref: widget_ref,
//!     decref: widget_unref,
//!     equals: widget_equal,
//! });
//!
//! // A create-style call hands back a +1 handle; adopt takes it as-is.
//! let raw = Box::into_raw(Box::new(Widget { count: AtomicUsize::new(1), id: 7 }));
//! let first = unsafe { ObjRef::adopt(raw) };
//!
//! // Clones hold independent obligations on the same object.
//! let second = first.clone();
//! assert_eq!(first, second);
//!
//! drop(first);
//! assert!(!second.is_null());
//! ```

mod counted;
mod handle;
mod macros;
#[cfg(test)]
mod testutil;

pub use counted::RefCounted;
pub use handle::ObjRef;
