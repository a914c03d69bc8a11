//! The atomic cell types and the capability traits that classify them.
//!
//! Every cell implements [`AtomicValue`]. The integer and boolean cells add
//! the bitwise fetch set via [`AtomicBits`]; only the integer cells add
//! arithmetic via [`AtomicArith`]. The split records at the type level which
//! operations are legal for each cell kind: a pointer is an opaque
//! reference, a boolean has no meaningful addition.
//!
//! The traits are sealed. Each implementation is a `#[repr(transparent)]`
//! wrapper over the matching [`core::sync::atomic`] type, so every operation
//! is a single hardware atomic access and a cell can stand in anywhere its
//! value type fits.

use crate::order::{LoadOrder, MemoryOrder, StoreOrder};

#[macro_use]
mod macros;
mod cells;
mod ptr;

pub use cells::{
    AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicIsize, AtomicU16, AtomicU32,
    AtomicU64, AtomicU8, AtomicUsize,
};
pub use ptr::AtomicPtr;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Operations shared by every atomic cell kind.
///
/// A cell wraps exactly one naturally aligned value. The value is observed
/// and mutated only through this operation set, each call independently
/// specifying the memory ordering it requires, and no call can observe a
/// torn value. The cell owns no storage beyond itself: it lives wherever
/// its owner embeds it and is destroyed with the enclosing storage.
pub trait AtomicValue: Sized + Send + Sync + sealed::Sealed {
    /// The plain value this cell stores.
    type Value: Copy + PartialEq;

    /// The value a defaulted cell starts from: zero, `false`, or null.
    const ZERO: Self::Value;

    /// Creates a cell holding `v`.
    ///
    /// Creation is not itself an atomic operation; it completes before the
    /// cell can be shared because the cell is held by value until then.
    fn new(v: Self::Value) -> Self;

    /// Consumes the cell and returns the contained value.
    ///
    /// Passing `self` by value guarantees that no other thread is
    /// concurrently accessing the cell.
    fn into_inner(self) -> Self::Value;

    /// Returns a mutable reference to the contained value.
    ///
    /// The mutable borrow guarantees that no other thread is concurrently
    /// accessing the cell, so no atomic instruction is involved.
    fn get_mut(&mut self) -> &mut Self::Value;

    /// Atomically loads the contained value.
    fn load(&self, order: LoadOrder) -> Self::Value;

    /// Atomically replaces the contained value with `v`.
    fn store(&self, v: Self::Value, order: StoreOrder);

    /// Atomically replaces the contained value with `v`, returning the
    /// previous value.
    ///
    /// All orderings are possible. [`Acquire`] makes the store half of the
    /// swap [`Relaxed`], and [`Release`] makes the load half [`Relaxed`].
    ///
    /// [`Acquire`]: MemoryOrder::Acquire
    /// [`Release`]: MemoryOrder::Release
    /// [`Relaxed`]: MemoryOrder::Relaxed
    fn swap(&self, v: Self::Value, order: MemoryOrder) -> Self::Value;

    /// If the contained value equals `*expected`, replaces it with
    /// `desired` and returns `true`, ordered per `success`. Otherwise
    /// writes the value actually observed into `*expected` and returns
    /// `false`, ordered per `failure`. Never fails spuriously.
    ///
    /// `failure` may not be stronger than `success`, and a
    /// [`Release`](MemoryOrder::Release) exchange pairs only with a
    /// [`Relaxed`](LoadOrder::Relaxed) failure; violations are caught by
    /// debug assertions only.
    fn compare_and_swap_strong(
        &self,
        expected: &mut Self::Value,
        desired: Self::Value,
        success: MemoryOrder,
        failure: LoadOrder,
    ) -> bool;

    /// Like [`compare_and_swap_strong`], but permitted to return `false`
    /// even when the contained value equals `*expected`.
    ///
    /// Spurious failure lets platforms whose native primitive is
    /// load-linked/store-conditional skip the enclosing guarantee loop, so
    /// this form can compile to tighter code inside a retry loop. Callers
    /// must retry until it succeeds or the observed value says to stop.
    ///
    /// [`compare_and_swap_strong`]: AtomicValue::compare_and_swap_strong
    fn compare_and_swap_weak(
        &self,
        expected: &mut Self::Value,
        desired: Self::Value,
        success: MemoryOrder,
        failure: LoadOrder,
    ) -> bool;

    /// Value-based compare-and-swap: strong comparison against `current`
    /// with a relaxed failure load. Returns whether the exchange happened.
    #[inline(always)]
    fn compare_and_swap(
        &self,
        current: Self::Value,
        desired: Self::Value,
        order: MemoryOrder,
    ) -> bool {
        let mut expected = current;
        self.compare_and_swap_strong(&mut expected, desired, order, LoadOrder::Relaxed)
    }
}

/// The bitwise fetch operations, for cells whose value has a bit (or truth)
/// algebra: the integer and boolean cells.
///
/// Each operation combines the contained value with the operand, stores the
/// result, and returns the value immediately prior to modification, all in
/// one atomic step. All orderings are possible; the operations both read
/// and write.
pub trait AtomicBits: AtomicValue {
    /// Combines the contained value with `v` by OR, returning the previous
    /// value.
    fn fetch_or(&self, v: Self::Value, order: MemoryOrder) -> Self::Value;

    /// Combines the contained value with `v` by XOR, returning the previous
    /// value.
    fn fetch_xor(&self, v: Self::Value, order: MemoryOrder) -> Self::Value;

    /// Combines the contained value with `v` by AND, returning the previous
    /// value.
    fn fetch_and(&self, v: Self::Value, order: MemoryOrder) -> Self::Value;
}

/// The arithmetic fetch operations, for the integer cells only.
pub trait AtomicArith: AtomicBits {
    /// Adds `delta` to the contained value, wrapping on overflow, and
    /// returns the value immediately prior to the addition.
    fn fetch_add(&self, delta: Self::Value, order: MemoryOrder) -> Self::Value;

    /// Subtracts `delta` from the contained value, wrapping on overflow,
    /// and returns the value immediately prior to the subtraction.
    fn fetch_sub(&self, delta: Self::Value, order: MemoryOrder) -> Self::Value;
}
