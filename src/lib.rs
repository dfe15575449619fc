//! Income Tax Calculator
//!
//! This crate computes income tax payable and monthly in-hand salary from an
//! annual cost-to-company figure, using a fixed progressive slab table and a
//! fixed sequence of payroll deductions, and exposes the computation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
