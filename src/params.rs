use std::collections::BTreeMap;

use crate::error::SqlBatchError;
use crate::types::SqlValue;

/// Which kind of parameters a call supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Positional,
    Named,
}

/// One caller-supplied parameter.
///
/// `ordinal` only orders the entries; it is never used as a placeholder index.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArg {
    pub name: Option<String>,
    pub ordinal: usize,
    pub value: SqlValue,
}

impl NamedArg {
    pub fn positional(ordinal: usize, value: impl Into<SqlValue>) -> Self {
        Self {
            name: None,
            ordinal,
            value: value.into(),
        }
    }

    pub fn named(name: impl Into<String>, ordinal: usize, value: impl Into<SqlValue>) -> Self {
        Self {
            name: Some(name.into()),
            ordinal,
            value: value.into(),
        }
    }

    /// An entry is named only when it carries a non-empty name.
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => ParamKind::Named,
            _ => ParamKind::Positional,
        }
    }
}

/// All parameters of one call, either positional or named.
///
/// Names are stored without their sigil (`"id"`, not `":id"`).
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSet {
    Positional(Vec<SqlValue>),
    Named(BTreeMap<String, SqlValue>),
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet::Positional(Vec::new())
    }
}

impl ParameterSet {
    /// Build the parameter set of a call from its caller-supplied entries.
    ///
    /// Entries are stable-sorted by ordinal and the first one decides the kind of the
    /// whole call. No entries gives an empty positional set.
    ///
    /// ```rust
    /// use sql_batch_binder::prelude::*;
    ///
    /// let params = ParameterSet::from_args(&[
    ///     NamedArg::positional(2, "second"),
    ///     NamedArg::positional(1, "first"),
    /// ])?;
    /// assert_eq!(
    ///     params,
    ///     ParameterSet::Positional(vec!["first".into(), "second".into()])
    /// );
    /// # Ok::<(), SqlBatchError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SqlBatchError::MixedParameterKinds` if named and positional entries are mixed.
    pub fn from_args(args: &[NamedArg]) -> Result<Self, SqlBatchError> {
        let mut sorted: Vec<&NamedArg> = args.iter().collect();
        sorted.sort_by_key(|arg| arg.ordinal);

        let Some(first) = sorted.first() else {
            return Ok(Self::default());
        };
        let kind = first.kind();
        if sorted.iter().any(|arg| arg.kind() != kind) {
            return Err(SqlBatchError::MixedParameterKinds);
        }

        Ok(match kind {
            ParamKind::Positional => {
                ParameterSet::Positional(sorted.into_iter().map(|arg| arg.value.clone()).collect())
            }
            ParamKind::Named => ParameterSet::Named(
                sorted
                    .into_iter()
                    .filter_map(|arg| Some((arg.name.clone()?, arg.value.clone())))
                    .collect(),
            ),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            ParameterSet::Positional(_) => ParamKind::Positional,
            ParameterSet::Named(_) => ParamKind::Named,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ParameterSet::Positional(values) => values.len(),
            ParameterSet::Named(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<SqlValue>> for ParameterSet {
    fn from(values: Vec<SqlValue>) -> Self {
        ParameterSet::Positional(values)
    }
}

impl From<BTreeMap<String, SqlValue>> for ParameterSet {
    fn from(values: BTreeMap<String, SqlValue>) -> Self {
        ParameterSet::Named(values)
    }
}

impl<K: Into<String>> FromIterator<(K, SqlValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, SqlValue)>>(iter: I) -> Self {
        ParameterSet::Named(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
