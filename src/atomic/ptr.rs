//! The atomic pointer cell.

use core::fmt;
use core::mem::{align_of, size_of};
use core::ptr;
use core::sync::atomic as sys;

use const_panic::concat_assert;

use crate::atomic::{sealed, AtomicValue};
use crate::order::{LoadOrder, MemoryOrder, StoreOrder};

/// An atomic cell holding one nullable raw pointer.
///
/// The pointer is an opaque reference as far as the cell is concerned:
/// there are no arithmetic or bitwise operations, only
/// load/store/swap/compare-and-swap. The cell never touches the pointee;
/// whoever owns the pointed-to storage remains responsible for it. A host
/// embedding the cell maps its own notion of "no value" onto the null
/// pointer.
#[repr(transparent)]
pub struct AtomicPtr<T> {
    inner: sys::AtomicPtr<T>,
}

const _: () = {
    concat_assert!(
        size_of::<AtomicPtr<()>>() == size_of::<*mut ()>()
            && align_of::<AtomicPtr<()>>() == align_of::<*mut ()>(),
        "atomic cell AtomicPtr (size=",
        size_of::<AtomicPtr<()>>(),
        ", align=",
        align_of::<AtomicPtr<()>>(),
        ") must have the layout of a raw pointer",
    );
};

impl<T> AtomicPtr<T> {
    /// Creates a cell holding `v`.
    ///
    /// Creation is not itself an atomic operation; it completes before the
    /// cell can be shared because the cell is held by value until then.
    #[inline(always)]
    pub const fn new(v: *mut T) -> Self {
        Self {
            inner: sys::AtomicPtr::new(v),
        }
    }

    /// Creates a cell holding the null pointer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_atomics::{AtomicPtr, LoadOrder};
    ///
    /// let p = AtomicPtr::<u32>::null();
    /// assert!(p.load(LoadOrder::SeqCst).is_null());
    /// ```
    #[inline(always)]
    pub const fn null() -> Self {
        Self::new(ptr::null_mut())
    }

    /// Consumes the cell and returns the contained pointer.
    ///
    /// Passing `self` by value guarantees that no other thread is
    /// concurrently accessing the cell.
    #[inline(always)]
    pub fn into_inner(self) -> *mut T {
        self.inner.into_inner()
    }

    /// Returns a mutable reference to the contained pointer.
    ///
    /// The mutable borrow guarantees that no other thread is concurrently
    /// accessing the cell, so no atomic instruction is involved.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut *mut T {
        self.inner.get_mut()
    }

    /// Atomically loads the contained pointer.
    #[inline(always)]
    pub fn load(&self, order: LoadOrder) -> *mut T {
        self.inner.load(order.as_ordering())
    }

    /// Atomically replaces the contained pointer with `v`.
    #[inline(always)]
    pub fn store(&self, v: *mut T, order: StoreOrder) {
        self.inner.store(v, order.as_ordering())
    }

    /// Atomically replaces the contained pointer with `v`, returning the
    /// previous pointer.
    ///
    /// All orderings are possible. `Acquire` makes the store half of the
    /// swap relaxed, and `Release` makes the load half relaxed.
    #[inline(always)]
    pub fn swap(&self, v: *mut T, order: MemoryOrder) -> *mut T {
        self.inner.swap(v, order.as_ordering())
    }

    /// If the contained pointer equals `*expected`, replaces it with
    /// `desired` and returns `true`, ordered per `success`. Otherwise
    /// writes the pointer actually observed into `*expected` and returns
    /// `false`, ordered per `failure`. Never fails spuriously.
    ///
    /// `failure` may not be stronger than `success`, and a `Release`
    /// exchange pairs only with a `Relaxed` failure; violations are caught
    /// by debug assertions only.
    #[inline(always)]
    pub fn compare_and_swap_strong(
        &self,
        expected: &mut *mut T,
        desired: *mut T,
        success: MemoryOrder,
        failure: LoadOrder,
    ) -> bool {
        debug_assert!(
            failure.admissible_failure(success),
            "compare-and-swap failure ordering exceeds the success ordering"
        );
        match self.inner.compare_exchange(
            *expected,
            desired,
            success.as_ordering(),
            failure.as_ordering(),
        ) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            }
        }
    }

    /// Like [`compare_and_swap_strong`], but permitted to return `false`
    /// even when the contained pointer equals `*expected`. Callers must
    /// retry until it succeeds or the observed pointer says to stop.
    ///
    /// [`compare_and_swap_strong`]: AtomicPtr::compare_and_swap_strong
    #[inline(always)]
    pub fn compare_and_swap_weak(
        &self,
        expected: &mut *mut T,
        desired: *mut T,
        success: MemoryOrder,
        failure: LoadOrder,
    ) -> bool {
        debug_assert!(
            failure.admissible_failure(success),
            "compare-and-swap failure ordering exceeds the success ordering"
        );
        match self.inner.compare_exchange_weak(
            *expected,
            desired,
            success.as_ordering(),
            failure.as_ordering(),
        ) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            }
        }
    }

    /// Value-based compare-and-swap: strong comparison against `current`
    /// with a relaxed failure load. Returns whether the exchange happened.
    #[inline(always)]
    pub fn compare_and_swap(
        &self,
        current: *mut T,
        desired: *mut T,
        order: MemoryOrder,
    ) -> bool {
        let mut expected = current;
        self.compare_and_swap_strong(&mut expected, desired, order, LoadOrder::Relaxed)
    }

    /// Loads the pointer and keeps trying to exchange it for
    /// `f(observed)` until the exchange succeeds or `f` returns `None`.
    /// Returns the exchanged-out pointer on success and the last observed
    /// pointer on abort.
    ///
    /// `f` may run several times under contention, but its result is
    /// stored at most once.
    #[inline]
    pub fn fetch_update<F>(
        &self,
        set_order: MemoryOrder,
        fetch_order: LoadOrder,
        mut f: F,
    ) -> Result<*mut T, *mut T>
    where
        F: FnMut(*mut T) -> Option<*mut T>,
    {
        let mut prev = self.load(fetch_order);
        loop {
            let next = match f(prev) {
                Some(next) => next,
                None => return Err(prev),
            };
            match self.inner.compare_exchange_weak(
                prev,
                next,
                set_order.as_ordering(),
                fetch_order.as_ordering(),
            ) {
                Ok(prev) => return Ok(prev),
                Err(actual) => prev = actual,
            }
        }
    }
}

impl<T> sealed::Sealed for AtomicPtr<T> {}

impl<T> AtomicValue for AtomicPtr<T> {
    type Value = *mut T;

    const ZERO: *mut T = ptr::null_mut();

    #[inline(always)]
    fn new(v: *mut T) -> Self {
        AtomicPtr::new(v)
    }

    #[inline(always)]
    fn into_inner(self) -> *mut T {
        AtomicPtr::into_inner(self)
    }

    #[inline(always)]
    fn get_mut(&mut self) -> &mut *mut T {
        AtomicPtr::get_mut(self)
    }

    #[inline(always)]
    fn load(&self, order: LoadOrder) -> *mut T {
        AtomicPtr::load(self, order)
    }

    #[inline(always)]
    fn store(&self, v: *mut T, order: StoreOrder) {
        AtomicPtr::store(self, v, order)
    }

    #[inline(always)]
    fn swap(&self, v: *mut T, order: MemoryOrder) -> *mut T {
        AtomicPtr::swap(self, v, order)
    }

    #[inline(always)]
    fn compare_and_swap_strong(
        &self,
        expected: &mut *mut T,
        desired: *mut T,
        success: MemoryOrder,
        failure: LoadOrder,
    ) -> bool {
        AtomicPtr::compare_and_swap_strong(self, expected, desired, success, failure)
    }

    #[inline(always)]
    fn compare_and_swap_weak(
        &self,
        expected: &mut *mut T,
        desired: *mut T,
        success: MemoryOrder,
        failure: LoadOrder,
    ) -> bool {
        AtomicPtr::compare_and_swap_weak(self, expected, desired, success, failure)
    }
}

impl<T> Default for AtomicPtr<T> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<*mut T> for AtomicPtr<T> {
    #[inline]
    fn from(v: *mut T) -> Self {
        Self::new(v)
    }
}

impl<T> fmt::Debug for AtomicPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.load(LoadOrder::Relaxed), f)
    }
}
