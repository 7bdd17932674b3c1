/// The explicit stack used by the traversal algorithms and the pretty-printer instead of recursion.
#[cfg(feature = "alloc")]
pub(crate) type Stack<T> = Vec<T>;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(not(feature = "alloc"))]
pub(crate) type Stack<T> = arrayvec::ArrayVec<[T; crate::storage::FIXED_CAPACITY]>;

#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub(crate) unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        unreachable!("{}", msg)
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
        core::hint::unreachable_unchecked()
    }
}

/// Emits a `log::trace!` record if the `log` feature is enabled, otherwise expands to nothing.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)+);
        }
    };
}
pub(crate) use trace;
