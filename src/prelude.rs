//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::batch::{BoundStatement, plan_batch, plan_batch_with};
pub use crate::binder::{StatementParams, bind_markers, bind_statement};
pub use crate::config::{BatchOptions, BatchOptionsBuilder, NamedBindingMode};
pub use crate::error::SqlBatchError;
pub use crate::lexer::{SqliteLexer, Token, TokenKind, Tokenize, tokenize};
pub use crate::markers::{BindMarker, StatementMarkers, extract_markers, extract_markers_with};
pub use crate::params::{NamedArg, ParamKind, ParameterSet};
pub use crate::results::{ResultRows, StatementResult};
pub use crate::segment::{split_statements, split_statements_with};
pub use crate::transport::{Connection, Transport};
pub use crate::types::SqlValue;
