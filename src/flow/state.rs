//! The flow disposition state machine.

use crate::action::Action;

/// Disposition of a flow. Exactly one variant holds at any time;
/// `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Items are produced normally.
    #[default]
    Flowing,
    /// The next-item protocol consults the interaction channel before
    /// producing anything.
    Paused,
    /// No further items are ever produced.
    Stopped,
}

impl FlowState {
    /// Total transition function over the four actions.
    ///
    /// `Stopped` absorbs every action, `Stop` reaches it from anywhere,
    /// and `Skip` never changes disposition (skipping is tracked by a
    /// separate pending flag, and skipping while paused deliberately
    /// stays paused).
    #[must_use]
    pub fn apply(self, action: Action) -> FlowState {
        match (self, action) {
            (FlowState::Stopped, _) => FlowState::Stopped,
            (_, Action::Stop) => FlowState::Stopped,
            (state, Action::Skip) => state,
            (_, Action::Pause) => FlowState::Paused,
            (_, Action::Resume) => FlowState::Flowing,
        }
    }

    /// Whether the flow is producing items normally.
    pub fn is_flowing(self) -> bool {
        self == FlowState::Flowing
    }

    /// Whether the next-item protocol will consult the channel.
    pub fn is_paused(self) -> bool {
        self == FlowState::Paused
    }

    /// Whether the flow has ended permanently.
    pub fn is_stopped(self) -> bool {
        self == FlowState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_flowing() {
        assert_eq!(FlowState::default(), FlowState::Flowing);
    }

    #[test]
    fn test_pause_from_flowing() {
        assert_eq!(FlowState::Flowing.apply(Action::Pause), FlowState::Paused);
    }

    #[test]
    fn test_pause_from_paused() {
        assert_eq!(FlowState::Paused.apply(Action::Pause), FlowState::Paused);
    }

    #[test]
    fn test_pause_from_stopped() {
        assert_eq!(FlowState::Stopped.apply(Action::Pause), FlowState::Stopped);
    }

    #[test]
    fn test_resume_from_flowing() {
        assert_eq!(FlowState::Flowing.apply(Action::Resume), FlowState::Flowing);
    }

    #[test]
    fn test_resume_from_paused() {
        assert_eq!(FlowState::Paused.apply(Action::Resume), FlowState::Flowing);
    }

    #[test]
    fn test_resume_from_stopped() {
        assert_eq!(FlowState::Stopped.apply(Action::Resume), FlowState::Stopped);
    }

    #[test]
    fn test_skip_keeps_flowing() {
        assert_eq!(FlowState::Flowing.apply(Action::Skip), FlowState::Flowing);
    }

    #[test]
    fn test_skip_keeps_paused() {
        assert_eq!(FlowState::Paused.apply(Action::Skip), FlowState::Paused);
    }

    #[test]
    fn test_skip_keeps_stopped() {
        assert_eq!(FlowState::Stopped.apply(Action::Skip), FlowState::Stopped);
    }

    #[test]
    fn test_stop_from_flowing() {
        assert_eq!(FlowState::Flowing.apply(Action::Stop), FlowState::Stopped);
    }

    #[test]
    fn test_stop_from_paused() {
        assert_eq!(FlowState::Paused.apply(Action::Stop), FlowState::Stopped);
    }

    #[test]
    fn test_stop_from_stopped() {
        assert_eq!(FlowState::Stopped.apply(Action::Stop), FlowState::Stopped);
    }

    #[test]
    fn test_predicates() {
        assert!(FlowState::Flowing.is_flowing());
        assert!(!FlowState::Flowing.is_paused());
        assert!(!FlowState::Flowing.is_stopped());
        assert!(FlowState::Paused.is_paused());
        assert!(FlowState::Stopped.is_stopped());
    }
}
