//! The concrete integer and boolean cells, one macro invocation per width.
//!
//! `AtomicIsize` and `AtomicUsize` are the native-machine-word cells. The
//! boolean cell reuses the same generators but stops before the arithmetic
//! set: addition has no meaning on a two-valued domain.

use core::sync::atomic as sys;

use crate::atomic::{AtomicArith, AtomicBits, AtomicValue};
use crate::order::{LoadOrder, MemoryOrder, StoreOrder};

atomic_int! {AtomicI8, sys::AtomicI8, i8, "8-bit signed integer"}
atomic_int! {AtomicI16, sys::AtomicI16, i16, "16-bit signed integer"}
atomic_int! {AtomicI32, sys::AtomicI32, i32, "32-bit signed integer"}
atomic_int! {AtomicI64, sys::AtomicI64, i64, "64-bit signed integer"}
atomic_int! {AtomicIsize, sys::AtomicIsize, isize, "word-sized signed integer"}
atomic_int! {AtomicU8, sys::AtomicU8, u8, "8-bit unsigned integer"}
atomic_int! {AtomicU16, sys::AtomicU16, u16, "16-bit unsigned integer"}
atomic_int! {AtomicU32, sys::AtomicU32, u32, "32-bit unsigned integer"}
atomic_int! {AtomicU64, sys::AtomicU64, u64, "64-bit unsigned integer"}
atomic_int! {AtomicUsize, sys::AtomicUsize, usize, "word-sized unsigned integer"}

atomic_base! {AtomicBool, sys::AtomicBool, bool, false, "boolean value"}
atomic_bits! {AtomicBool, bool}
