//! The memory-ordering constraints shared by every atomic operation.
//!
//! Three closed enumerations cover the C11 ordering set. [`MemoryOrder`] is
//! the full set and is accepted by every read-modify-write operation.
//! [`LoadOrder`] and [`StoreOrder`] are the subsets legal for loads and
//! stores; an ordering that is illegal for an operation is unrepresentable
//! rather than a silent contract violation.

use core::sync::atomic::Ordering;

/// Memory-ordering constraint for a read-modify-write operation.
///
/// All six orderings are legal for operations that both read and write
/// (swap, the fetch family, and the success side of compare-and-swap).
/// Note that [`Acquire`] makes the store half of such an operation
/// [`Relaxed`], and [`Release`] makes the load half [`Relaxed`].
///
/// The discriminants are the conventional strength ranks; they are used to
/// check the compare-and-swap failure-ordering precondition in debug builds.
///
/// [`Acquire`]: MemoryOrder::Acquire
/// [`Release`]: MemoryOrder::Release
/// [`Relaxed`]: MemoryOrder::Relaxed
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOrder {
    /// No ordering constraints, only atomicity.
    Relaxed = 0,
    /// Orders reads that carry a data dependency on the loaded value.
    ///
    /// Strengthened to [`Acquire`](MemoryOrder::Acquire) at the hardware
    /// boundary, as every production compiler does.
    Consume = 1,
    /// Later memory operations on this thread stay after the load, and all
    /// writes released by the thread that stored the loaded value become
    /// visible.
    Acquire = 2,
    /// Earlier memory operations on this thread stay before the store, and
    /// become visible to any thread that acquires the stored value.
    Release = 3,
    /// Both [`Acquire`](MemoryOrder::Acquire) on the load half and
    /// [`Release`](MemoryOrder::Release) on the store half.
    AcqRel = 4,
    /// Like [`AcqRel`](MemoryOrder::AcqRel), plus participation in the
    /// single total order over all sequentially consistent operations.
    SeqCst = 5,
}

/// Memory-ordering constraint for a load.
///
/// A load has no store half, so `Release` and `AcqRel` do not appear here.
/// This is also the ordering set for the failure side of compare-and-swap,
/// which is a plain load of the observed value.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOrder {
    /// No ordering constraints, only atomicity.
    Relaxed = 0,
    /// Orders reads that carry a data dependency on the loaded value;
    /// strengthened to acquire at the hardware boundary.
    Consume = 1,
    /// Later memory operations on this thread stay after the load, and all
    /// writes released by the storing thread become visible.
    Acquire = 2,
    /// Acquire, plus participation in the sequentially consistent total
    /// order.
    SeqCst = 5,
}

/// Memory-ordering constraint for a store.
///
/// A store has no load half, so `Acquire`, `Consume` and `AcqRel` do not
/// appear here.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOrder {
    /// No ordering constraints, only atomicity.
    Relaxed = 0,
    /// Earlier memory operations on this thread stay before the store, and
    /// become visible to any thread that acquires the stored value.
    Release = 3,
    /// Release, plus participation in the sequentially consistent total
    /// order.
    SeqCst = 5,
}

impl MemoryOrder {
    #[inline(always)]
    pub(crate) const fn as_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Consume | Self::Acquire => Ordering::Acquire,
            Self::Release => Ordering::Release,
            Self::AcqRel => Ordering::AcqRel,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

impl LoadOrder {
    #[inline(always)]
    pub(crate) const fn as_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Consume | Self::Acquire => Ordering::Acquire,
            Self::SeqCst => Ordering::SeqCst,
        }
    }

    /// Whether `self` is legal as the failure ordering of a
    /// compare-and-swap whose success ordering is `success`: the failure
    /// side may not be stronger, and a `Release` exchange has no load half
    /// to pair a non-relaxed failure load with.
    pub(crate) const fn admissible_failure(self, success: MemoryOrder) -> bool {
        self as u32 <= success as u32
            && (!matches!(success, MemoryOrder::Release) || matches!(self, Self::Relaxed))
    }
}

impl StoreOrder {
    #[inline(always)]
    pub(crate) const fn as_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Release => Ordering::Release,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

impl From<LoadOrder> for MemoryOrder {
    #[inline]
    fn from(order: LoadOrder) -> Self {
        match order {
            LoadOrder::Relaxed => Self::Relaxed,
            LoadOrder::Consume => Self::Consume,
            LoadOrder::Acquire => Self::Acquire,
            LoadOrder::SeqCst => Self::SeqCst,
        }
    }
}

impl From<StoreOrder> for MemoryOrder {
    #[inline]
    fn from(order: StoreOrder) -> Self {
        match order {
            StoreOrder::Relaxed => Self::Relaxed,
            StoreOrder::Release => Self::Release,
            StoreOrder::SeqCst => Self::SeqCst,
        }
    }
}
