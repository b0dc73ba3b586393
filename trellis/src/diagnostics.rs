//! Misuse diagnostics.
//!
//! Layout and query never fail. A malformed request (fill against an unbounded
//! axis, a NaN from a measurement callback, a duplicate key) is reported here
//! and the caller continues with the nearest valid value.
//!
//! Reports go to `tracing` at warn level under the `trellis::diagnostics`
//! target. Building with the `strict` feature turns them into panics in debug
//! builds so tests and development catch them at the call site.

use thiserror::Error;

use crate::axis::Axis;
use crate::identity::Key;

/// A recoverable contract violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Misuse {
    #[error("percentage or fill sizing against an unbounded {0:?} axis")]
    UnboundedFill(Axis),

    #[error("negative explicit size {0}")]
    NegativeSize(f32),

    #[error("flexible children in a stack with an unbounded {0:?} main axis")]
    FlexInUnboundedAxis(Axis),

    #[error("intrinsic content measured a degenerate size ({width}, {height})")]
    NonFiniteSize { width: f32, height: f32 },

    #[error("duplicate key {0} in one pass, last item wins")]
    DuplicateKey(Key),

    #[error("no transition registered under {0:?}, using the surface default")]
    UnknownTransition(String),

    #[error("waterfall with zero columns")]
    ZeroColumns,

    #[error("unbounded waterfall column axis, using widest child")]
    UnboundedColumns,

    #[error("page layout along an unbounded {0:?} axis")]
    UnboundedPage(Axis),
}

/// Report a misuse.
///
/// Never returns an error: the caller has already picked the fallback value.
#[track_caller]
pub fn report(misuse: Misuse) {
    #[cfg(all(debug_assertions, feature = "strict"))]
    {
        panic!("trellis misuse: {misuse}");
    }

    #[cfg(not(all(debug_assertions, feature = "strict")))]
    {
        let caller = std::panic::Location::caller();
        tracing::warn!(
            target: "trellis::diagnostics",
            at = %caller,
            "{misuse}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let m = Misuse::UnboundedFill(Axis::Horizontal);
        assert!(m.to_string().contains("unbounded Horizontal"));
        let m = Misuse::DuplicateKey(Key::named("row-3"));
        assert!(m.to_string().contains("row-3"));
    }

    #[cfg(not(feature = "strict"))]
    #[test]
    fn report_does_not_panic() {
        report(Misuse::ZeroColumns);
        report(Misuse::NonFiniteSize { width: f32::NAN, height: 1.0 });
    }
}
