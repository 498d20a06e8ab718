//! Heap cells for field payloads and the process-wide allocator policy.
//!
//! Every heap-backed payload (number, string, array, object) lives in its own
//! [`HeapCell`]. Cells are allocated through whatever [`GlobalAlloc`] was installed
//! with [`install_allocator`], defaulting to [`System`]. A cell remembers the
//! allocator that produced it and hands its memory back to the same one.

use core::alloc::{GlobalAlloc, Layout};
use core::fmt::{self, Debug, Formatter};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::alloc::{System, handle_alloc_error};
use std::sync::OnceLock;

use crate::{FieldError, Result};

static POLICY: OnceLock<&'static (dyn GlobalAlloc + Sync)> = OnceLock::new();

/// Installs the allocator used for every payload cell created from now on.
///
/// Must run before the first payload allocation: once a cell has been allocated
/// the policy is fixed to whatever was active (the system allocator by default),
/// and later calls fail with [`FieldError::AllocatorAlreadyInstalled`].
pub fn install_allocator(allocator: &'static (dyn GlobalAlloc + Sync)) -> Result<()> {
    POLICY
        .set(allocator)
        .map_err(|_| FieldError::AllocatorAlreadyInstalled)?;
    debug!("installed payload allocator");
    Ok(())
}

fn policy() -> &'static (dyn GlobalAlloc + Sync) {
    *POLICY.get_or_init(|| &System)
}

/// An owned, heap-allocated payload.
///
/// Behaves like a `Box<T>` whose memory comes from the installed allocator policy.
pub struct HeapCell<T> {
    ptr: NonNull<T>,
    allocator: &'static (dyn GlobalAlloc + Sync),
}

// Safety: a HeapCell uniquely owns its T, exactly like Box<T>.
unsafe impl<T: Send> Send for HeapCell<T> {}
// Safety: shared access only hands out &T.
unsafe impl<T: Sync> Sync for HeapCell<T> {}

impl<T> HeapCell<T> {
    pub(crate) fn new(value: T) -> Self {
        let layout = Layout::new::<T>();
        debug_assert!(layout.size() != 0, "payload cells are never zero-sized");
        let allocator = policy();
        // Safety: layout has non-zero size.
        let raw = unsafe { allocator.alloc(layout) }.cast::<T>();
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(layout)
        };
        // Safety: freshly allocated with T's layout, nothing to overwrite.
        unsafe { ptr.as_ptr().write(value) };
        Self { ptr, allocator }
    }
}

impl<T> Deref for HeapCell<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Safety: ptr is valid and initialized for the lifetime of the cell.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> DerefMut for HeapCell<T> {
    fn deref_mut(&mut self) -> &mut T {
        // Safety: we own the cell exclusively.
        unsafe { self.ptr.as_mut() }
    }
}

impl<T> Drop for HeapCell<T> {
    fn drop(&mut self) {
        // Safety: ptr was produced by `self.allocator` with T's layout and still
        // holds an initialized T that nobody else references.
        unsafe {
            ptr::drop_in_place(self.ptr.as_ptr());
            self.allocator
                .dealloc(self.ptr.as_ptr().cast::<u8>(), Layout::new::<T>());
        }
    }
}

impl<T: Debug> Debug for HeapCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}

/// Allocator wrapper that counts allocations passing through it.
///
/// Useful to check that dropping a field tree releases every payload cell:
///
/// ```no_run
/// use std::alloc::System;
/// use friedrichdb_core::{CountingAllocator, install_allocator};
///
/// static COUNTER: CountingAllocator = CountingAllocator::new(System);
/// install_allocator(&COUNTER).unwrap();
/// ```
pub struct CountingAllocator<A = System> {
    inner: A,
    live: AtomicUsize,
    total: AtomicUsize,
}

impl<A> CountingAllocator<A> {
    /// Wraps `inner`.
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            live: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
        }
    }

    /// Allocations not yet released.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }

    /// Allocations made since creation.
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Acquire)
    }
}

impl<A: Debug> Debug for CountingAllocator<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingAllocator")
            .field("inner", &self.inner)
            .field("live", &self.live())
            .field("total", &self.total())
            .finish()
    }
}

// Safety: every call forwards to `inner`; the counters do not touch memory.
unsafe impl<A: GlobalAlloc> GlobalAlloc for CountingAllocator<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // Safety: caller upholds GlobalAlloc::alloc's contract.
        let ptr = unsafe { self.inner.alloc(layout) };
        if !ptr.is_null() {
            self.live.fetch_add(1, Ordering::AcqRel);
            self.total.fetch_add(1, Ordering::AcqRel);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // Safety: caller upholds GlobalAlloc::dealloc's contract.
        unsafe { self.inner.dealloc(ptr, layout) };
        self.live.fetch_sub(1, Ordering::AcqRel);
    }
}
