//! Instrumented fake object system for lifecycle tests.
//!
//! Simulates an external manually reference-counted C API: heap objects with
//! an intrusive count, plus per-object traffic counters reported into
//! caller-owned [`Stats`] so parallel tests never share state.

use crate::ref_counted;
use libc::c_int;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Count traffic observed for the objects created against one `Stats`.
#[derive(Debug, Default)]
pub struct Stats {
    increfs: AtomicUsize,
    decrefs: AtomicUsize,
    frees: AtomicUsize,
}

impl Stats {
    pub fn increfs(&self) -> usize {
        self.increfs.load(Ordering::Relaxed)
    }

    pub fn decrefs(&self) -> usize {
        self.decrefs.load(Ordering::Relaxed)
    }

    pub fn frees(&self) -> usize {
        self.frees.load(Ordering::Relaxed)
    }

    /// (increfs, decrefs) observed so far.
    pub fn traffic(&self) -> (usize, usize) {
        (self.increfs(), self.decrefs())
    }
}

/// Fake external object: an intrusive count plus a comparable value.
pub struct FakeObj {
    count: AtomicUsize,
    stats: *const Stats,
    value: u64,
}

/// Creates an object under the owning (+1) convention.
///
/// The returned handle carries one count obligation; the initial count is
/// not recorded as an incref. `stats` must outlive the object.
pub fn create(stats: &Stats, value: u64) -> *mut FakeObj {
    Box::into_raw(Box::new(FakeObj {
        count: AtomicUsize::new(1),
        stats,
        value,
    }))
}

pub unsafe extern "C" fn fake_incref(object: *mut FakeObj) {
    let obj = unsafe { &*object };
    obj.count.fetch_add(1, Ordering::Relaxed);
    unsafe { &*obj.stats }.increfs.fetch_add(1, Ordering::Relaxed);
}

pub unsafe extern "C" fn fake_decref(object: *mut FakeObj) {
    let stats = unsafe { &*(*object).stats };
    stats.decrefs.fetch_add(1, Ordering::Relaxed);
    if unsafe { &*object }.count.fetch_sub(1, Ordering::AcqRel) == 1 {
        stats.frees.fetch_add(1, Ordering::Relaxed);
        drop(unsafe { Box::from_raw(object) });
    }
}

pub unsafe extern "C" fn fake_equal(a: *mut FakeObj, b: *mut FakeObj) -> c_int {
    (unsafe { (*a).value } == unsafe { (*b).value }) as c_int
}

ref_counted!(FakeObj {
    incref: fake_incref,
    decref: fake_decref,
    equals: fake_equal,
});
