//! Core business logic for the financial service.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//!
//! # Modules
//!
//! - `currency` - Exchange rate table and conversion to US dollars

pub mod currency;
