//! API Routes
//!
//! Route handlers organized by endpoint.

pub mod health;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;
