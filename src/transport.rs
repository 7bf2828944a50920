//! The boundary between batch planning and the remote service.
//!
//! A [`Transport`] sends already-bound statements; [`Connection`] plans a call into a
//! batch and validates what comes back. Planning errors never reach the transport.

use async_trait::async_trait;
use tracing::debug;

use crate::batch::{BoundStatement, plan_batch};
use crate::config::BatchOptions;
use crate::error::SqlBatchError;
use crate::params::{NamedArg, ParameterSet};
use crate::results::StatementResult;

/// Sends a batch of bound statements to the remote service.
///
/// Implementations return one `StatementResult` per statement, in order. Per-statement
/// failures reported by the service belong in `StatementResult::error`; an `Err` means the
/// batch could not be delivered at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute_statements(
        &self,
        statements: &[BoundStatement<'_>],
    ) -> Result<Vec<StatementResult>, SqlBatchError>;
}

/// A driver connection over a [`Transport`].
#[derive(Debug)]
pub struct Connection<T> {
    transport: T,
    options: BatchOptions,
}

impl<T: Transport> Connection<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, BatchOptions::default())
    }

    #[must_use]
    pub fn with_options(transport: T, options: BatchOptions) -> Self {
        Self { transport, options }
    }

    #[must_use]
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run every statement in `sql` and return the result of each.
    ///
    /// # Errors
    ///
    /// Returns planning errors (mixed parameter kinds, bad markers, missing parameters)
    /// without contacting the service, or `SqlBatchError::ExecutionError` if the transport
    /// fails.
    pub async fn query(
        &self,
        sql: &str,
        args: &[NamedArg],
    ) -> Result<Vec<StatementResult>, SqlBatchError> {
        let params = ParameterSet::from_args(args)?;
        self.query_params(sql, &params).await
    }

    /// Like [`Connection::query`] with an already-built `ParameterSet`.
    ///
    /// # Errors
    ///
    /// See [`Connection::query`].
    pub async fn query_params(
        &self,
        sql: &str,
        params: &ParameterSet,
    ) -> Result<Vec<StatementResult>, SqlBatchError> {
        let batch = plan_batch(sql, params, &self.options)?;
        let results = self
            .transport
            .execute_statements(&batch)
            .await
            .map_err(|e| {
                SqlBatchError::ExecutionError(format!("failed to execute SQL: {sql}\n{e}"))
            })?;
        debug!(
            statements = batch.len(),
            results = results.len(),
            "statement batch returned"
        );
        Ok(results)
    }

    /// Run every statement in `sql`, requiring each one to succeed.
    ///
    /// Returns the number of statements executed.
    ///
    /// # Errors
    ///
    /// As [`Connection::query`], plus `SqlBatchError::ExecutionError` when any statement
    /// reports an error or returns no result.
    pub async fn exec(&self, sql: &str, args: &[NamedArg]) -> Result<usize, SqlBatchError> {
        let results = self.query(sql, args).await?;
        assert_no_result_with_error(&results, sql)?;
        Ok(results.len())
    }

    /// Prepared statements are not supported by this driver.
    ///
    /// # Errors
    ///
    /// Always returns `SqlBatchError::Unimplemented`.
    pub fn prepare(&self, _sql: &str) -> Result<(), SqlBatchError> {
        Err(SqlBatchError::Unimplemented(
            "prepare method not implemented".into(),
        ))
    }

    /// Transactions are not supported by this driver.
    ///
    /// # Errors
    ///
    /// Always returns `SqlBatchError::Unimplemented`.
    pub fn begin(&self) -> Result<(), SqlBatchError> {
        Err(SqlBatchError::Unimplemented("begin method not implemented".into()))
    }

    /// Close the connection. Holds no resources beyond the transport itself.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn close(self) -> Result<(), SqlBatchError> {
        Ok(())
    }
}

fn assert_no_result_with_error(
    results: &[StatementResult],
    sql: &str,
) -> Result<(), SqlBatchError> {
    for result in results {
        if let Some(message) = &result.error {
            return Err(SqlBatchError::ExecutionError(format!(
                "failed to execute SQL: {sql}\n{message}"
            )));
        }
        if !result.has_result() {
            return Err(SqlBatchError::ExecutionError(
                "no results for statement".into(),
            ));
        }
    }
    Ok(())
}
