use thiserror::Error;

/// Returned by [`Either::get`](crate::Either::get) when there is no right
/// value to return.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("absent value accessed")]
pub struct AbsentValueError;
