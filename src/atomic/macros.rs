//! Generator macros for the fixed-width cells.
//!
//! `atomic_base!` emits a cell type with the operation set every kind
//! shares; `atomic_bits!` and `atomic_arith!` layer the bitwise and
//! arithmetic fetch sets on top. The integer cells use all three, the
//! boolean cell stops after `atomic_bits!`, and the pointer cell is written
//! out by hand in `ptr.rs`.

macro_rules! atomic_base {
    ($name:ident, $storage:ty, $value:ty, $zero:expr, $doc:expr) => {
        #[doc = concat!("An atomic cell holding one ", $doc, ".")]
        ///
        /// The cell wraps exactly one naturally aligned value, observed and
        /// mutated only through its operation set; no operation can see a
        /// torn value. It allocates nothing of its own and lives wherever
        /// its owner embeds it.
        #[repr(transparent)]
        pub struct $name {
            inner: $storage,
        }

        const _: () = {
            use const_panic::concat_assert;
            use core::mem::{align_of, size_of};
            concat_assert!(
                size_of::<$name>() == size_of::<$value>()
                    && align_of::<$name>() == align_of::<$value>(),
                "atomic cell ",
                stringify!($name),
                " (size=",
                size_of::<$name>(),
                ", align=",
                align_of::<$name>(),
                ") must have the layout of ",
                stringify!($value),
            );
        };

        impl $name {
            /// Creates a cell holding `v`.
            ///
            /// Creation is not itself an atomic operation; it completes
            /// before the cell can be shared because the cell is held by
            /// value until then.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_atomics::{AtomicUsize, LoadOrder};
            ///
            /// static COUNT: AtomicUsize = AtomicUsize::new(0);
            ///
            /// assert_eq!(COUNT.load(LoadOrder::SeqCst), 0);
            /// ```
            #[inline(always)]
            pub const fn new(v: $value) -> Self {
                Self {
                    inner: <$storage>::new(v),
                }
            }

            /// Consumes the cell and returns the contained value.
            ///
            /// Passing `self` by value guarantees that no other thread is
            /// concurrently accessing the cell.
            #[inline(always)]
            pub fn into_inner(self) -> $value {
                self.inner.into_inner()
            }

            /// Returns a mutable reference to the contained value.
            ///
            /// The mutable borrow guarantees that no other thread is
            /// concurrently accessing the cell, so no atomic instruction is
            /// involved.
            #[inline(always)]
            pub fn get_mut(&mut self) -> &mut $value {
                self.inner.get_mut()
            }

            /// Atomically loads the contained value.
            #[inline(always)]
            pub fn load(&self, order: LoadOrder) -> $value {
                self.inner.load(order.as_ordering())
            }

            /// Atomically replaces the contained value with `v`.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_atomics::{AtomicUsize, LoadOrder, StoreOrder};
            ///
            /// let a = AtomicUsize::new(7);
            /// a.store(8, StoreOrder::Release);
            /// assert_eq!(a.load(LoadOrder::Acquire), 8);
            /// ```
            #[inline(always)]
            pub fn store(&self, v: $value, order: StoreOrder) {
                self.inner.store(v, order.as_ordering())
            }

            /// Atomically replaces the contained value with `v`, returning
            /// the previous value.
            ///
            /// All orderings are possible. `Acquire` makes the store half
            /// of the swap relaxed, and `Release` makes the load half
            /// relaxed.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_atomics::{AtomicUsize, LoadOrder, MemoryOrder};
            ///
            /// let a = AtomicUsize::new(7);
            /// assert_eq!(a.swap(8, MemoryOrder::AcqRel), 7);
            /// assert_eq!(a.load(LoadOrder::SeqCst), 8);
            /// ```
            #[inline(always)]
            pub fn swap(&self, v: $value, order: MemoryOrder) -> $value {
                self.inner.swap(v, order.as_ordering())
            }

            /// If the contained value equals `*expected`, replaces it with
            /// `desired` and returns `true`, ordered per `success`.
            /// Otherwise writes the value actually observed into
            /// `*expected` and returns `false`, ordered per `failure`.
            /// Never fails spuriously.
            ///
            /// `failure` may not be stronger than `success`, and a
            /// `Release` exchange pairs only with a `Relaxed` failure;
            /// violations are caught by debug assertions only.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_atomics::{AtomicUsize, LoadOrder, MemoryOrder};
            ///
            /// let a = AtomicUsize::new(1);
            ///
            /// let mut expected = 2;
            /// let swapped =
            ///     a.compare_and_swap_strong(&mut expected, 3, MemoryOrder::AcqRel, LoadOrder::Acquire);
            /// assert!(!swapped);
            /// assert_eq!(expected, 1); // the observed value was written back
            ///
            /// let swapped =
            ///     a.compare_and_swap_strong(&mut expected, 3, MemoryOrder::AcqRel, LoadOrder::Acquire);
            /// assert!(swapped);
            /// assert_eq!(a.load(LoadOrder::SeqCst), 3);
            /// ```
            #[inline(always)]
            pub fn compare_and_swap_strong(
                &self,
                expected: &mut $value,
                desired: $value,
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

            /// Like [`compare_and_swap_strong`], but permitted to return
            /// `false` even when the contained value equals `*expected`.
            ///
            /// Spurious failure lets platforms whose native primitive is
            /// load-linked/store-conditional skip the enclosing guarantee
            /// loop, so this form can compile to tighter code inside a
            /// retry loop. Callers must retry until it succeeds or the
            /// observed value says to stop.
            ///
            #[doc = concat!(
                "[`compare_and_swap_strong`]: ", stringify!($name), "::compare_and_swap_strong"
            )]
            #[inline(always)]
            pub fn compare_and_swap_weak(
                &self,
                expected: &mut $value,
                desired: $value,
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

            /// Value-based compare-and-swap: strong comparison against
            /// `current` with a relaxed failure load. Returns whether the
            /// exchange happened.
            #[inline(always)]
            pub fn compare_and_swap(
                &self,
                current: $value,
                desired: $value,
                order: MemoryOrder,
            ) -> bool {
                let mut expected = current;
                self.compare_and_swap_strong(&mut expected, desired, order, LoadOrder::Relaxed)
            }

            /// Loads the value and keeps trying to exchange it for
            /// `f(observed)` until the exchange succeeds or `f` returns
            /// `None`. Returns the exchanged-out value on success and the
            /// last observed value on abort.
            ///
            /// `f` may run several times under contention, but its result
            /// is stored at most once.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_atomics::{AtomicUsize, LoadOrder, MemoryOrder};
            ///
            /// let a = AtomicUsize::new(7);
            ///
            /// let f = |v: usize| v.checked_mul(2);
            /// assert_eq!(a.fetch_update(MemoryOrder::AcqRel, LoadOrder::Acquire, f), Ok(7));
            /// assert_eq!(a.load(LoadOrder::SeqCst), 14);
            /// assert_eq!(a.fetch_update(MemoryOrder::AcqRel, LoadOrder::Acquire, |_| None), Err(14));
            /// ```
            #[inline]
            pub fn fetch_update<F>(
                &self,
                set_order: MemoryOrder,
                fetch_order: LoadOrder,
                mut f: F,
            ) -> Result<$value, $value>
            where
                F: FnMut($value) -> Option<$value>,
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

        impl crate::atomic::sealed::Sealed for $name {}

        impl AtomicValue for $name {
            type Value = $value;

            const ZERO: $value = $zero;

            #[inline(always)]
            fn new(v: $value) -> Self {
                <$name>::new(v)
            }

            #[inline(always)]
            fn into_inner(self) -> $value {
                <$name>::into_inner(self)
            }

            #[inline(always)]
            fn get_mut(&mut self) -> &mut $value {
                <$name>::get_mut(self)
            }

            #[inline(always)]
            fn load(&self, order: LoadOrder) -> $value {
                <$name>::load(self, order)
            }

            #[inline(always)]
            fn store(&self, v: $value, order: StoreOrder) {
                <$name>::store(self, v, order)
            }

            #[inline(always)]
            fn swap(&self, v: $value, order: MemoryOrder) -> $value {
                <$name>::swap(self, v, order)
            }

            #[inline(always)]
            fn compare_and_swap_strong(
                &self,
                expected: &mut $value,
                desired: $value,
                success: MemoryOrder,
                failure: LoadOrder,
            ) -> bool {
                <$name>::compare_and_swap_strong(self, expected, desired, success, failure)
            }

            #[inline(always)]
            fn compare_and_swap_weak(
                &self,
                expected: &mut $value,
                desired: $value,
                success: MemoryOrder,
                failure: LoadOrder,
            ) -> bool {
                <$name>::compare_and_swap_weak(self, expected, desired, success, failure)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new($zero)
            }
        }

        impl From<$value> for $name {
            #[inline]
            fn from(v: $value) -> Self {
                Self::new(v)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(&self.load(LoadOrder::Relaxed), f)
            }
        }
    };
}

macro_rules! atomic_bits {
    ($name:ident, $value:ty) => {
        impl $name {
            /// Combines the contained value with `v` by OR, returning the
            /// value immediately prior to the operation.
            #[inline(always)]
            pub fn fetch_or(&self, v: $value, order: MemoryOrder) -> $value {
                self.inner.fetch_or(v, order.as_ordering())
            }

            /// Combines the contained value with `v` by XOR, returning the
            /// value immediately prior to the operation.
            #[inline(always)]
            pub fn fetch_xor(&self, v: $value, order: MemoryOrder) -> $value {
                self.inner.fetch_xor(v, order.as_ordering())
            }

            /// Combines the contained value with `v` by AND, returning the
            /// value immediately prior to the operation.
            #[inline(always)]
            pub fn fetch_and(&self, v: $value, order: MemoryOrder) -> $value {
                self.inner.fetch_and(v, order.as_ordering())
            }
        }

        impl AtomicBits for $name {
            #[inline(always)]
            fn fetch_or(&self, v: $value, order: MemoryOrder) -> $value {
                <$name>::fetch_or(self, v, order)
            }

            #[inline(always)]
            fn fetch_xor(&self, v: $value, order: MemoryOrder) -> $value {
                <$name>::fetch_xor(self, v, order)
            }

            #[inline(always)]
            fn fetch_and(&self, v: $value, order: MemoryOrder) -> $value {
                <$name>::fetch_and(self, v, order)
            }
        }
    };
}

macro_rules! atomic_arith {
    ($name:ident, $value:ty) => {
        impl $name {
            /// Adds `delta` to the contained value, wrapping on overflow,
            /// and returns the value immediately prior to the addition.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordered_atomics::{AtomicUsize, LoadOrder, MemoryOrder};
            ///
            /// let a = AtomicUsize::new(7);
            /// assert_eq!(a.fetch_add(1, MemoryOrder::SeqCst), 7);
            /// assert_eq!(a.load(LoadOrder::SeqCst), 8);
            /// ```
            #[inline(always)]
            pub fn fetch_add(&self, delta: $value, order: MemoryOrder) -> $value {
                self.inner.fetch_add(delta, order.as_ordering())
            }

            /// Subtracts `delta` from the contained value, wrapping on
            /// overflow, and returns the value immediately prior to the
            /// subtraction.
            #[inline(always)]
            pub fn fetch_sub(&self, delta: $value, order: MemoryOrder) -> $value {
                self.inner.fetch_sub(delta, order.as_ordering())
            }
        }

        impl AtomicArith for $name {
            #[inline(always)]
            fn fetch_add(&self, delta: $value, order: MemoryOrder) -> $value {
                <$name>::fetch_add(self, delta, order)
            }

            #[inline(always)]
            fn fetch_sub(&self, delta: $value, order: MemoryOrder) -> $value {
                <$name>::fetch_sub(self, delta, order)
            }
        }
    };
}

macro_rules! atomic_int {
    ($name:ident, $storage:ty, $value:ty, $doc:expr) => {
        atomic_base! {$name, $storage, $value, 0, $doc}
        atomic_bits! {$name, $value}
        atomic_arith! {$name, $value}
    };
}
