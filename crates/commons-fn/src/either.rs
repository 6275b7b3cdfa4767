use crate::error::AbsentValueError;
use crate::optional::{optional, Absent, Optional};

/// One of two values. Right is the primary outcome, left the alternative.
///
/// Every operation takes `self` by value and produces a new `Either`, an
/// instance is never changed in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Run `right` if `condition` holds, otherwise `left`. Only the selected
    /// supplier is called.
    pub fn cond<FL, FR>(condition: bool, left: FL, right: FR) -> Either<L, R>
    where
        FL: FnOnce() -> L,
        FR: FnOnce() -> R,
    {
        if condition {
            Either::Right(right())
        } else {
            Either::Left(left())
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Right value or [`AbsentValueError`] if this is a left
    pub fn get(self) -> Result<R, AbsentValueError> {
        match self {
            Either::Left(_) => Err(AbsentValueError),
            Either::Right(r) => Ok(r),
        }
    }

    pub fn get_or_null(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    pub fn get_left_or_null(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Right value, or the result of `fallback` if this is a left.
    /// `fallback` is only called on the left path.
    pub fn get_or<F: FnOnce() -> R>(self, fallback: F) -> R {
        match self {
            Either::Left(_) => fallback(),
            Either::Right(r) => r,
        }
    }

    pub fn map<T, F: FnOnce(R) -> T>(self, f: F) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn map_left<T, F: FnOnce(L) -> T>(self, f: F) -> Either<T, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn flat_map<T, F: FnOnce(R) -> Either<L, T>>(self, f: F) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Apply exactly one of the functions depending on the variant.
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Keep the right value only if `predicate` accepts it. Lefts are
    /// always collapsed to the empty optional.
    pub fn filter<P: FnOnce(&R) -> bool>(self, predicate: P) -> Optional<R> {
        match self {
            Either::Left(_) => optional(),
            Either::Right(r) => {
                if predicate(&r) {
                    Either::Right(r)
                } else {
                    optional()
                }
            }
        }
    }

    /// Drop the left payload. An optional cannot tell why a value is absent.
    pub fn to_optional(self) -> Optional<R> {
        self.map_left(|_| Absent)
    }

    pub fn consume_right<F: FnOnce(R)>(self, f: F) {
        if let Either::Right(r) = self {
            f(r);
        }
    }

    pub fn consume_left<F: FnOnce(L)>(self, f: F) {
        if let Either::Left(l) = self {
            f(l);
        }
    }

    pub fn consume<FL, FR>(self, on_left: FL, on_right: FR)
    where
        FL: FnOnce(L),
        FR: FnOnce(R),
    {
        self.fold(on_left, on_right)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

/// Wrap any value into either side, `"err".left()` or `12.right()`.
pub trait IntoEither: Sized {
    fn left<R>(self) -> Either<Self, R> {
        Either::Left(self)
    }

    fn right<L>(self) -> Either<L, Self> {
        Either::Right(self)
    }
}

impl<T> IntoEither for T {}
