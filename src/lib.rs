//! Atomic memory cells with explicit, per-call memory ordering.
//!
//! This crate provides a family of fixed-width atomic cells (the integer
//! widths, a boolean, and a nullable raw pointer) for building lock-free
//! structures such as queues, stacks and reference-counted cells. Unlike
//! [`core::sync::atomic`]'s single [`Ordering`] type, each operation here
//! takes exactly the ordering set that is legal for it: loads take a
//! [`LoadOrder`], stores a [`StoreOrder`], and read-modify-write operations
//! the full [`MemoryOrder`], so an ordering that is illegal for an
//! operation is unrepresentable rather than a runtime error.
//!
//! # How it Works
//!
//! Every cell is a `#[repr(transparent)]` wrapper around the matching
//! [`core::sync::atomic`] type, and every operation is an always-inlined
//! delegation to a single hardware atomic access. Nothing here locks,
//! blocks or allocates: a cell is embedded in caller-owned storage, is
//! initialized exactly once before it is shared, and synchronizes exactly
//! what each call's ordering argument says, no more.
//!
//! The per-kind operation sets are recorded in capability traits: every
//! cell implements [`AtomicValue`]; the integer and boolean cells add the
//! bitwise fetch set via [`AtomicBits`]; only the integer cells add
//! arithmetic via [`AtomicArith`]. [`thread_fence`] provides ordering not
//! tied to any cell.
//!
//! [`Ordering`]: core::sync::atomic::Ordering
#![no_std]

pub mod atomic;
pub mod fence;
pub mod order;

pub use atomic::{
    AtomicArith, AtomicBits, AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicIsize,
    AtomicPtr, AtomicU16, AtomicU32, AtomicU64, AtomicU8, AtomicUsize, AtomicValue,
};
pub use fence::thread_fence;
pub use order::{LoadOrder, MemoryOrder, StoreOrder};
