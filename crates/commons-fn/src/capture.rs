use std::{
    cell::Cell,
    panic::{self, AssertUnwindSafe, UnwindSafe},
    sync::atomic::{AtomicU64, Ordering},
    thread,
};

use crate::either::Either;

#[cfg(panic = "abort")]
compile_error!("commons-fn either blocks require panic = \"unwind\"");

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Unwind payload thrown by [`LeftCapture::left`]. Private so nothing
/// outside this module can downcast to it.
struct Escape {
    token: u64,
}

/// Handle given to the closure of an [`either`] block.
///
/// The handle belongs to exactly one block invocation. It is neither `Send`
/// nor `Sync`, so an escape can never start on another thread:
///
/// ```compile_fail
/// use commons_fn::{either, Either};
///
/// let _: Either<&str, i32> = either(|cx| {
///     std::thread::scope(|s| {
///         s.spawn(|| cx.left("from another thread"));
///     });
///     0
/// });
/// ```
pub struct LeftCapture<L> {
    token: u64,
    value: Cell<Option<L>>,
}

impl<L> LeftCapture<L> {
    fn new() -> LeftCapture<L> {
        LeftCapture {
            token: NEXT_TOKEN.fetch_add(1, Ordering::Relaxed),
            value: Cell::new(None),
        }
    }

    /// Abandon the rest of the block, which then evaluates to `Left(value)`.
    pub fn left(&self, value: L) -> ! {
        self.value.set(Some(value));
        panic::resume_unwind(Box::new(Escape { token: self.token }))
    }

    /// Escape with `left()` unless `condition` holds
    pub fn ensure<F: FnOnce() -> L>(&self, condition: bool, left: F) {
        if !condition {
            self.left(left())
        }
    }

    /// Unwrap a right value or escape with the left one.
    pub fn bind<T>(&self, either: Either<L, T>) -> T {
        match either {
            Either::Left(l) => self.left(l),
            Either::Right(r) => r,
        }
    }
}

/// Run `action` as a short-circuiting block.
///
/// Calling `cx.left(value)` anywhere below `action`, at any depth, skips the
/// rest of it and the block returns `Left(value)`. Returning normally with `t`
/// gives `Right(t)`. Panics that are not escapes of this block are resumed
/// untouched, which also routes escapes of enclosing blocks to their owner.
///
/// Escapes travel as unwinds, so the final binary must be built with
/// `panic = "unwind"`. The crate refuses to compile under `panic = "abort"`.
///
/// An escape payload caught with plain [`std::panic::catch_unwind`] must not
/// be kept or resumed outside its block. No other block will take it and it
/// unwinds past all of them. Use [`catch_unwind_transparent`] inside blocks.
///
/// ```
/// use commons_fn::{either, Either};
///
/// let parsed: Either<String, i32> = either(|cx| {
///     let n: i32 = "12".parse().unwrap_or_else(|_| cx.left("not a number".into()));
///     cx.ensure(n > 0, || "not positive".into());
///     n * 2
/// });
/// assert_eq!(Either::Right(24), parsed);
/// ```
pub fn either<L, T, F>(action: F) -> Either<L, T>
where
    F: FnOnce(&LeftCapture<L>) -> T,
{
    let capture = LeftCapture::new();

    let payload = match panic::catch_unwind(AssertUnwindSafe(|| action(&capture))) {
        Ok(value) => return Either::Right(value),
        Err(payload) => payload,
    };

    let escaped = payload.downcast_ref::<Escape>().map(|escape| escape.token);
    match escaped {
        Some(token) if token == capture.token => {}
        Some(token) => {
            log::debug!(
                "either block {} forwarding escape of block {}",
                capture.token,
                token
            );
            panic::resume_unwind(payload)
        }
        None => panic::resume_unwind(payload),
    }

    // left() sets the value before unwinding with this token
    let left = capture
        .value
        .take()
        .expect("either block escaped without a left value");
    log::trace!("either block {} short-circuited", capture.token);
    Either::Left(left)
}

/// [`std::panic::catch_unwind`] that lets escapes of [`either`] blocks
/// through. Use it instead of `catch_unwind` inside a block so that
/// `cx.left(..)` still reaches the block.
pub fn catch_unwind_transparent<F, R>(f: F) -> thread::Result<R>
where
    F: FnOnce() -> R + UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| {
        if payload.is::<Escape>() {
            panic::resume_unwind(payload)
        }
        payload
    })
}
