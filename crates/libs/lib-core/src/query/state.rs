use crate::error::{AppError, Result};

/// Lifecycle of one query as seen by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Pending,
    Ready(T),
    Failed(AppError),
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> QueryState<&T> {
        match self {
            QueryState::Pending => QueryState::Pending,
            QueryState::Ready(data) => QueryState::Ready(data),
            QueryState::Failed(err) => QueryState::Failed(err.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Pending => QueryState::Pending,
            QueryState::Ready(data) => QueryState::Ready(f(data)),
            QueryState::Failed(err) => QueryState::Failed(err),
        }
    }

    /// Combine two independent queries.
    ///
    /// A failure on either side wins (left first), then pending, and only two
    /// ready queries yield `Ready`. The result does not depend on which query
    /// finished first.
    pub fn zip<U>(self, other: QueryState<U>) -> QueryState<(T, U)> {
        match (self, other) {
            (QueryState::Failed(err), _) | (_, QueryState::Failed(err)) => QueryState::Failed(err),
            (QueryState::Ready(a), QueryState::Ready(b)) => QueryState::Ready((a, b)),
            _ => QueryState::Pending,
        }
    }
}

impl<T> From<Result<T>> for QueryState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(err) => QueryState::Failed(err),
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Pending
    }
}
