//! Flowstep - interactive steering for long-running iteration loops.
//!
//! A [`Flow`] wraps a sequence and yields `(index, item)` pairs while
//! letting the consuming code pause, resume, skip the current element,
//! or stop early, without restructuring the loop body. An optional skip
//! predicate silently drops matching items, and a pluggable interaction
//! channel decides how a paused flow continues (console prompt by
//! default, scripted replies for tests and unattended runs).
//!
//! ```
//! use flowstep::Flow;
//!
//! let mut flow = Flow::over(0..5).with_skip_condition(|x: &i32| *x == 2);
//! let controller = flow.controller();
//!
//! for (index, value) in flow.by_ref() {
//!     if value >= 3 {
//!         controller.stop(None);
//!     }
//!     // 2 is never delivered; indices stay consecutive.
//!     assert!(index <= 2);
//! }
//! ```

pub mod action;
pub mod channel;
pub mod error;
pub mod flow;
pub mod logging;
pub mod settings;
pub mod source;

pub use action::{action_default_message, Action};
pub use channel::{Command, ConsoleChannel, InteractionChannel, ScriptedChannel, PROMPT_MESSAGE};
pub use error::FlowError;
pub use flow::{Flow, FlowController, FlowOptions, FlowState};
pub use source::Source;
