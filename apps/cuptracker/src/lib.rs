//! # cuptracker
//!
//! Terminal companion for the World Cup prediction game.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/cuptracker (THE BINARY)             │
//! │                                                          │
//! │  ┌──────────┐   ┌──────────────┐   ┌────────────────┐    │
//! │  │   CLI    │──▶│ BackendClient│──▶│  backend JSON  │    │
//! │  │  (clap)  │   │  (reqwest)   │   │      API       │    │
//! │  └────┬─────┘   └──────────────┘   └────────────────┘    │
//! │       │                                                  │
//! │       ▼                                                  │
//! │  ┌──────────┐   ┌─────────────────┐                      │
//! │  │  render  │◀──│ cuptracker-core │                      │
//! │  └──────────┘   │  (THE LOGIC)    │                      │
//! │                 └─────────────────┘                      │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod types;

pub use client::BackendClient;
pub use config::Config;
pub use error::AppError;
