use crate::pathway::NodeAction;

/// Performs the side effect of an action-typed option.
///
/// The runner never navigates on an action; it hands the action to a handler
/// and keeps the current node.
pub trait ActionHandler {
    fn perform(&mut self, action: &NodeAction);
}

/// Collects actions instead of performing them. Useful for tests and for
/// front ends that process actions after the runner call returns.
#[derive(Debug, Default, Clone)]
pub struct RecordedActions {
    pub actions: Vec<NodeAction>,
}

impl ActionHandler for RecordedActions {
    fn perform(&mut self, action: &NodeAction) {
        self.actions.push(action.clone());
    }
}

impl<F: FnMut(&NodeAction)> ActionHandler for F {
    fn perform(&mut self, action: &NodeAction) {
        self(action)
    }
}
