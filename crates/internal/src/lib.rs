//! Internal utilities for cipherkit
//!
//! Nothing in here is part of the public contract. The helpers exist so that
//! every engine performs integrity comparisons the same way.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
