//! HTTP surface for the energy bill insight service.
//!
//! One upload route drives the whole dashboard assembly; weather and
//! illustration routes serve the panels that can refresh independently.

pub mod config;
pub mod server;

pub use config::Config;
