//! Clonable handle over a flow's control state.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::action::{Action, ActionMessages};

use super::state::FlowState;

#[derive(Debug, Default)]
struct ControlState {
    state: FlowState,
    pending_skip: bool,
    counter: usize,
    verbose: bool,
    messages: ActionMessages,
}

/// Handle sharing a flow's control state.
///
/// Clones share state, so a loop body can steer the very flow it is
/// consumed from: keep a clone outside the loop and call
/// [`pause`](FlowController::pause) / [`skip`](FlowController::skip) /
/// [`stop`](FlowController::stop) on it while iterating.
///
/// Handles are single-threaded by design; a flow and its handles must
/// stay with one logical caller.
#[derive(Debug, Clone)]
pub struct FlowController {
    inner: Rc<RefCell<ControlState>>,
}

impl FlowController {
    pub(crate) fn new(verbose: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ControlState {
                verbose,
                ..Default::default()
            })),
        }
    }

    /// Holds the flow before the next item. Stores `message`, or a
    /// generated `"Paused at item count N"` default; emits it to the log
    /// sink when the flow is verbose.
    pub fn pause(&self, message: Option<&str>) {
        self.apply(Action::Pause, message);
    }

    /// Lets a paused flow produce items again.
    pub fn resume(&self, message: Option<&str>) {
        self.apply(Action::Resume, message);
    }

    /// Marks the next source item to be silently consumed. Takes effect
    /// on the next advance; calling it twice before then still skips
    /// only one item.
    pub fn skip(&self, message: Option<&str>) {
        self.apply(Action::Skip, message);
    }

    /// Ends the flow permanently.
    pub fn stop(&self, message: Option<&str>) {
        self.apply(Action::Stop, message);
    }

    fn apply(&self, action: Action, message: Option<&str>) {
        let mut inner = self.inner.borrow_mut();
        inner.state = inner.state.apply(action);
        if action == Action::Skip {
            inner.pending_skip = true;
        }
        let text = match message {
            Some(message) => message.to_string(),
            None => action.default_message(inner.counter),
        };
        if inner.verbose {
            info!("{text}");
        }
        inner.messages.set(action, text);
    }

    /// Current disposition.
    pub fn state(&self) -> FlowState {
        self.inner.borrow().state
    }

    /// Whether the next advance will consult the interaction channel.
    pub fn is_paused(&self) -> bool {
        self.state().is_paused()
    }

    /// Whether the flow has ended permanently.
    pub fn is_stopped(&self) -> bool {
        self.state().is_stopped()
    }

    /// Items pulled from the source so far, skipped ones included.
    pub fn counter(&self) -> usize {
        self.inner.borrow().counter
    }

    /// The stored message for an action, if it has not been consumed.
    pub fn message(&self, action: Action) -> Option<String> {
        self.inner.borrow().messages.get(action).map(str::to_string)
    }

    pub(crate) fn bump_counter(&self) {
        self.inner.borrow_mut().counter += 1;
    }

    pub(crate) fn reset_counter(&self) {
        self.inner.borrow_mut().counter = 0;
    }

    pub(crate) fn pending_skip(&self) -> bool {
        self.inner.borrow().pending_skip
    }

    pub(crate) fn clear_pending_skip(&self) {
        self.inner.borrow_mut().pending_skip = false;
    }

    /// Takes the stored message for an action, clearing its slot.
    pub fn take_message(&self, action: Action) -> Option<String> {
        self.inner.borrow_mut().messages.take(action)
    }

    pub(crate) fn clear_messages(&self) {
        self.inner.borrow_mut().messages.clear_all();
    }
}
