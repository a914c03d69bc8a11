//! The standalone ordering barrier.

use core::sync::atomic;

use crate::order::MemoryOrder;

/// A memory barrier attached to no particular cell or access.
///
/// Establishes the ordering `order` implies between memory operations
/// before and after the fence in program order on the calling thread,
/// relative to other threads performing matching synchronization: a release
/// fence followed by a relaxed store pairs with a relaxed load followed by
/// an acquire fence, the same way a release store pairs with an acquire
/// load. Use it when a protocol needs to order plain memory operations
/// without attaching them to a specific atomic access.
///
/// A [`Relaxed`](MemoryOrder::Relaxed) fence constrains nothing and
/// compiles to nothing.
///
/// # Examples
///
/// ```
/// use ordered_atomics::{thread_fence, AtomicBool, MemoryOrder, StoreOrder};
///
/// static READY: AtomicBool = AtomicBool::new(false);
///
/// thread_fence(MemoryOrder::Release);
/// READY.store(true, StoreOrder::Relaxed);
/// ```
#[inline(always)]
pub fn thread_fence(order: MemoryOrder) {
    match order {
        MemoryOrder::Relaxed => {}
        order => atomic::fence(order.as_ordering()),
    }
}
