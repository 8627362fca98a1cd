//! Response envelopes shared by all query endpoints.

use serde::Serialize;

/// `{ "items": [...] }` wrapper for list results.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// `{ "result": {...} }` wrapper for single aggregate results.
#[derive(Debug, Serialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

impl<T> ResultResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}
