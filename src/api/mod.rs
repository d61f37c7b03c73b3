//! # API Layer
//!
//! Network-facing surfaces. Only REST for now.

pub mod rest;
