//! Linkstack database layer.
//!
//! Provides SQLite connection management and schema migrations for the
//! persistent local storage backend.
//!
//! # Usage
//!
//! ```no_run
//! use linkstack::database::Database;
//!
//! let db = Database::open("linkstack.db").expect("failed to open database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
