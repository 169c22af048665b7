//! Three-state result of a backend fetch, shared by every page.

use std::fmt::Display;

/// `Pending` until the fetch settles, then `Failed` or `Loaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    Pending,
    Failed(String),
    Loaded(T),
}

impl<T> Remote<T> {
    /// Settle with the error's own display text as the failure message.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        Self::settle(result, |e| e.to_string())
    }

    /// Settle, rendering any error through `message`.
    pub fn settle<E>(result: Result<T, E>, message: impl FnOnce(&E) -> String) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(message(&e)),
        }
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
