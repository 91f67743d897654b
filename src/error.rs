//! Error types for flow operations.

use std::io;

use thiserror::Error;

/// Errors that can occur while steering or seeking a flow.
///
/// End-of-sequence is not an error: the next-item protocol reports it as
/// `None` / `Ok(None)` and the flow stays terminally exhausted afterwards.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Step-seek target lies before the current position or beyond the
    /// known length of the source.
    #[error("step {step} is out of range (next source position {counter}, total {total})")]
    OutOfRange {
        /// The requested source position.
        step: usize,
        /// The next source position at the time of the request.
        counter: usize,
        /// The known length of the source.
        total: usize,
    },

    /// Default-message generation was asked for a label outside the
    /// recognized action set. Indicates a programming error in the
    /// caller; the typed action operations cannot reach this.
    #[error("`{0}` is not a recognized flow action")]
    UnknownAction(String),

    /// Step-seek was requested on a source that cannot produce a fresh
    /// pass.
    #[error("step seek requires a reiterable source")]
    SeekUnsupported,

    /// The interaction channel failed while resolving a pause.
    #[error("interaction channel error: {0}")]
    Channel(#[from] io::Error),
}
