//! Configuration for the income tax calculator service.
//!
//! The service reads its listening address from environment variables.
//! The tax slab table and deduction constants are fixed at build time and
//! live in [`crate::models`] and [`crate::calculation`].
//!
//! # Example
//!
//! ```no_run
//! use income_tax_calculator::config::ServerConfig;
//!
//! let config = ServerConfig::from_env().unwrap();
//! println!("Listening on {}", config.socket_addr());
//! ```

mod settings;

pub use settings::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
