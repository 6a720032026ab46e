//! Schedule source interface for imsakiyah
//!
//! This crate defines the contract between the app and whatever supplies
//! provinces, cities and Ramadhan schedules. It contains no network code;
//! see `imsakiyah-http` for the real implementation.

mod mock;
mod traits;

pub use mock::*;
pub use traits::*;
