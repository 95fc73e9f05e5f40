//! Test suite for the adoption center client
//!
//! This module organizes all tests

pub mod common;
pub mod property;
