//! Either and Optional value types.
//!
//! [`Either`] holds one of two values, right being the primary outcome.
//! [`Optional`] is an `Either` whose left side is the [`Absent`] marker.
//! [`either`] runs a block that can bail out with a left value from any depth.

pub mod capture;
pub mod either;
pub mod error;
pub mod optional;

pub use capture::{catch_unwind_transparent, either, LeftCapture};
pub use either::{Either, IntoEither};
pub use error::AbsentValueError;
pub use optional::{optional, some, Absent, Optional};
