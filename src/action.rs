//! The four imperative controls and their generated messages.

use crate::error::FlowError;

/// Imperative control a flow responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Hold the flow before the next item is produced.
    Pause,
    /// Let a paused flow produce items again.
    Resume,
    /// Silently consume the next source item.
    Skip,
    /// End the flow permanently.
    Stop,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 4] = [Action::Pause, Action::Resume, Action::Skip, Action::Stop];

    /// Imperative name, matching the public operation.
    pub fn imperative(self) -> &'static str {
        match self {
            Action::Pause => "pause",
            Action::Resume => "resume",
            Action::Skip => "skip",
            Action::Stop => "stop",
        }
    }

    /// Past-tense label used in generated messages.
    pub fn past_label(self) -> &'static str {
        match self {
            Action::Pause => "Paused",
            Action::Resume => "Resumed",
            Action::Skip => "Skipped",
            Action::Stop => "Stopped",
        }
    }

    /// Looks an action up by its past-tense label.
    pub fn from_past_label(label: &str) -> Result<Self, FlowError> {
        Action::ALL
            .into_iter()
            .find(|action| action.past_label() == label)
            .ok_or_else(|| FlowError::UnknownAction(label.to_string()))
    }

    /// Default message for this action at the given source position.
    pub fn default_message(self, counter: usize) -> String {
        format!("{} at item count {}", self.past_label(), counter + 1)
    }

    fn index(self) -> usize {
        match self {
            Action::Pause => 0,
            Action::Resume => 1,
            Action::Skip => 2,
            Action::Stop => 3,
        }
    }
}

/// Generates the default message for a past-tense action label.
///
/// Fails with [`FlowError::UnknownAction`] for labels outside
/// {`Paused`, `Resumed`, `Skipped`, `Stopped`}. The typed [`Action`]
/// operations cannot hit this path; it guards string-keyed callers.
pub fn action_default_message(label: &str, counter: usize) -> Result<String, FlowError> {
    Ok(Action::from_past_label(label)?.default_message(counter))
}

/// One message slot per action, cleared once consumed.
#[derive(Debug, Clone, Default)]
pub(crate) struct ActionMessages {
    slots: [Option<String>; 4],
}

impl ActionMessages {
    pub(crate) fn set(&mut self, action: Action, message: String) {
        self.slots[action.index()] = Some(message);
    }

    pub(crate) fn get(&self, action: Action) -> Option<&str> {
        self.slots[action.index()].as_deref()
    }

    pub(crate) fn take(&mut self, action: Action) -> Option<String> {
        self.slots[action.index()].take()
    }

    pub(crate) fn clear_all(&mut self) {
        self.slots = Default::default();
    }
}
