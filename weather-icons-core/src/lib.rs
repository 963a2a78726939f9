//! Core library for the `weather-icons` CLI.
//!
//! This crate defines:
//! - The known provider weather codes and their icons
//! - The icon resolver, which warns about codes it does not know
//! - Reading the icon code out of an OpenWeather payload
//! - Persistent CLI preferences
//!
//! It is used by `weather-icons-cli`, but can also be reused by other binaries or services.

pub mod code;
pub mod config;
pub mod payload;
pub mod resolver;
pub mod table;

pub use code::{Condition, Period, WeatherCode};
pub use config::{Config, OutputFormat};
pub use payload::Payload;
pub use resolver::{IconError, resolve_icon, try_resolve};
pub use table::{IconId, TableEntry};
