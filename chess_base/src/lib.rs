//! # Base types for gridchess
//!
//! This is an auxiliary crate for `gridchess`, which contains the plain value types: squares,
//! colors, pieces and square sets. No movement rules live here.
//!
//! Normally you don't want to use this crate directly. Use `gridchess` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
