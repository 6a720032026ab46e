//! HTTP schedule source for imsakiyah
//!
//! Talks to the equran.id imsakiyah API:
//! - `GET  {base}/provinsi` for provinces
//! - `POST {base}/kabkota` for the cities of a province
//! - `POST {base}` for a city's Ramadhan schedule

mod client;

pub use client::*;
