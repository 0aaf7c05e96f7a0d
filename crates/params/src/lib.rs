//! Constant values for cipherkit
//!
//! This crate collects the fixed sizes, round counts and magic values shared by
//! the cipherkit engines. It has no dependencies and is always `no_std`.

#![no_std]

pub mod utils;
