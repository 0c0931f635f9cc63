//! One module per Alpha Vantage endpoint family.
//!
//! Method signatures mirror the argument order the dispatch layer passes;
//! families that share a wire shape delegate to private helpers in
//! `indicators`, `commodities`, and `economy`.

mod commodities;
mod core_stock;
mod crypto;
mod economy;
mod forex;
mod fundamentals;
mod indicators;
mod intelligence;
mod options;
