//! Status codes for integrators

/// How an integration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// x_end was reached (or passed by at most one step).
    Success,
    /// The stopping criterion returned `false`.
    Stopped,
    /// Cancellation was requested through the [`crate::CancellationToken`].
    Interrupted,
    /// The accepted-step budget `nmax` was exhausted before x_end.
    NeedLargerNmax,
}
