use std::fmt;

use crate::either::Either;

/// Marker on the left side of an [`Optional`]. Carries no data, so every
/// `Left(Absent)` is the same empty value.
#[derive(Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Absent;

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[NONE]")
    }
}

/// Either with a fixed absent marker on the left.
///
/// Presence is decided by the variant only: `some(None::<u8>)` holds a
/// value and is not empty.
pub type Optional<T> = Either<Absent, T>;

/// The empty optional
pub const fn optional<T>() -> Optional<T> {
    Either::Left(Absent)
}

pub const fn some<T>(value: T) -> Optional<T> {
    Either::Right(value)
}

impl<T> Either<Absent, T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Either::Left(Absent))
    }

    /// Turn absence into a left value. `none_as_left` is only called when
    /// empty.
    pub fn to_either<L, F: FnOnce() -> L>(self, none_as_left: F) -> Either<L, T> {
        self.map_left(|_| none_as_left())
    }

    pub fn into_option(self) -> Option<T> {
        self.get_or_null()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => some(value),
            None => optional(),
        }
    }
}
