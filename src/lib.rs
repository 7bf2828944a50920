//! Statement segmentation and parameter binding for SQL drivers that talk to a remote
//! service one statement at a time.
//!
//! A call submits a string that may hold several `;`-separated statements plus one flat set
//! of positional or named parameters. This crate splits the string with a SQLite-aware
//! lexer, works out which parameters each statement needs, and hands the resulting
//! `(sql, params)` pairs to a [`Transport`](transport::Transport).
//!
//! ```rust
//! use sql_batch_binder::prelude::*;
//!
//! let params = ParameterSet::from_args(&[
//!     NamedArg::positional(1, 10),
//!     NamedArg::positional(2, "ten"),
//! ])?;
//! let batch = plan_batch(
//!     "INSERT INTO t (id) VALUES (?); UPDATE t SET note = ? WHERE note = ';'",
//!     &params,
//!     &BatchOptions::default(),
//! )?;
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch[1].params.len(), 1);
//! # Ok::<(), SqlBatchError>(())
//! ```

pub mod batch;
pub mod binder;
pub mod config;
pub mod error;
pub mod lexer;
pub mod markers;
pub mod params;
pub mod prelude;
pub mod results;
pub mod segment;
pub mod transport;
pub mod types;

pub use batch::{BoundStatement, plan_batch, plan_batch_with};
pub use binder::{StatementParams, bind_markers, bind_statement};
pub use config::{BatchOptions, BatchOptionsBuilder, NamedBindingMode};
pub use error::SqlBatchError;
pub use markers::{
    BindMarker, StatementMarkers, classify_marker, extract_markers, extract_markers_with,
};
pub use params::{NamedArg, ParamKind, ParameterSet};
pub use results::{ResultRows, StatementResult};
pub use segment::{split_statements, split_statements_with};
pub use transport::{Connection, Transport};
pub use types::SqlValue;
