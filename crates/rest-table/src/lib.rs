//! REST Table Client
//!
//! Typed access to a PostgREST-style table endpoint (`<url>/rest/v1/<table>`):
//! ordered select, insert returning the row, and update/delete filtered by
//! column equality.

mod client;
mod error;
mod table;

pub use client::{ClientConfig, RestClient};
pub use error::{Error, Result};
pub use table::{Order, Table};
