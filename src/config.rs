/// How the binder treats a named marker the caller did not supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamedBindingMode {
    /// Leave the name unbound; the remote service reports it when the statement runs.
    #[default]
    Lazy,
    /// Fail with `SqlBatchError::MissingNamedParameter` before anything is sent.
    Strict,
}

/// Options for planning a statement batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOptions {
    pub named_binding: NamedBindingMode,
}

impl BatchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> BatchOptionsBuilder {
        BatchOptionsBuilder::new()
    }

    #[must_use]
    pub fn with_named_binding(mut self, named_binding: NamedBindingMode) -> Self {
        self.named_binding = named_binding;
        self
    }
}

/// Fluent builder for `BatchOptions`.
///
/// ```rust
/// use sql_batch_binder::prelude::*;
///
/// let options = BatchOptions::builder().strict_named(true).finish();
/// assert_eq!(options.named_binding, NamedBindingMode::Strict);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchOptionsBuilder {
    opts: BatchOptions,
}

impl BatchOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named_binding(mut self, named_binding: NamedBindingMode) -> Self {
        self.opts.named_binding = named_binding;
        self
    }

    #[must_use]
    pub fn strict_named(self, strict: bool) -> Self {
        self.named_binding(if strict {
            NamedBindingMode::Strict
        } else {
            NamedBindingMode::Lazy
        })
    }

    #[must_use]
    pub fn finish(self) -> BatchOptions {
        self.opts
    }
}
