//! Interactive traversal of graph-form pathways.
//!
//! The [`GraphRunner`] is a small state machine: it is either `Idle` or at a
//! node of a pathway with a history stack of previously visited node ids. It
//! never renders anything; callers read [`GraphRunner::view`] after each
//! operation and present whatever it reports.

mod action;

pub use action::*;

use crate::pathway::{NodeAction, NodeKind, OptionTarget, Pathway, PathwayNode, PathwayRegistry};

/// Runner state for one active session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunnerState {
    #[default]
    Idle,
    AtNode {
        pathway_id: String,
        node_id: String,
        history: Vec<String>,
    },
}

/// What the presentation layer should show.
#[derive(Debug, Clone, Copy)]
pub enum RunnerView<'a> {
    Idle,
    UnknownPathway,
    Node {
        pathway: &'a Pathway,
        node: &'a PathwayNode,
        can_go_back: bool,
    },
}

/// How to leave the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<'c> {
    /// Follow a step node's `next`.
    Continue,
    /// Pick the option at this index on a decision node.
    Option(usize),
    /// Jump straight to a node id of the current pathway.
    Target(&'c str),
}

/// The result of [`GraphRunner::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved,
    ActionPerformed(NodeAction),
    /// Nothing changed: the runner is idle, at a terminal node, or the choice
    /// did not resolve to a target.
    NoOp,
}

/// The result of [`GraphRunner::back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    Moved,
    NothingToGoBack,
}

pub struct GraphRunner<'a> {
    registry: &'a PathwayRegistry,
    state: RunnerState,
    unknown_pathway: bool,
}

impl<'a> GraphRunner<'a> {
    pub fn new(registry: &'a PathwayRegistry) -> Self {
        Self {
            registry,
            state: RunnerState::Idle,
            unknown_pathway: false,
        }
    }

    pub fn state(&self) -> &RunnerState {
        &self.state
    }

    /// Starts `pathway_id` at its declared start, or at `override_node` when
    /// that node exists. History is cleared. An unknown pathway leaves the
    /// runner idle and is reported through the view.
    pub fn start(&mut self, pathway_id: &str, override_node: Option<&str>) -> RunnerView<'a> {
        let Some(pathway) = self.registry.get(pathway_id) else {
            tracing::warn!(pathway = pathway_id, "Unknown pathway requested");
            self.state = RunnerState::Idle;
            self.unknown_pathway = true;
            return self.view();
        };

        let node_id = match override_node {
            Some(id) if pathway.contains(id) => id,
            Some(id) => {
                tracing::warn!(
                    pathway = pathway_id,
                    node = id,
                    "Unknown start override, using declared start"
                );
                pathway.start_id()
            }
            None => pathway.start_id(),
        };

        tracing::debug!(pathway = pathway_id, node = node_id, "Pathway started");
        self.unknown_pathway = false;
        self.state = RunnerState::AtNode {
            pathway_id: pathway.id().to_string(),
            node_id: node_id.to_string(),
            history: Vec::new(),
        };
        self.view()
    }

    /// Leaves the current node according to `choice`.
    pub fn advance(&mut self, choice: Choice<'_>, actions: &mut impl ActionHandler) -> Advance {
        let Some((pathway, node)) = self.current() else {
            return Advance::NoOp;
        };

        let target = match (&node.kind, choice) {
            (NodeKind::Step { next, .. }, Choice::Continue) => next.as_str(),
            (NodeKind::Decision { options }, Choice::Option(index)) => {
                match options.get(index).map(|o| &o.target) {
                    Some(OptionTarget::Next(next)) => next.as_str(),
                    Some(OptionTarget::Action(action)) => {
                        tracing::debug!(node = %node.id, ?action, "Performing option action");
                        actions.perform(action);
                        return Advance::ActionPerformed(action.clone());
                    }
                    None => return Advance::NoOp,
                }
            }
            (NodeKind::Terminal { .. }, _) => return Advance::NoOp,
            (_, Choice::Target(id)) => id,
            _ => return Advance::NoOp,
        };

        if !pathway.contains(target) {
            tracing::warn!(pathway = pathway.id(), to = target, "Ignoring undefined target");
            return Advance::NoOp;
        }

        let target = target.to_string();
        if let RunnerState::AtNode {
            node_id, history, ..
        } = &mut self.state
        {
            tracing::debug!(from = %node_id, to = %target, "Advancing");
            history.push(std::mem::replace(node_id, target));
        }
        Advance::Moved
    }

    /// Returns to the previously visited node.
    pub fn back(&mut self) -> Back {
        match &mut self.state {
            RunnerState::AtNode {
                node_id, history, ..
            } => match history.pop() {
                Some(previous) => {
                    tracing::debug!(from = %node_id, to = %previous, "Going back");
                    *node_id = previous;
                    Back::Moved
                }
                None => Back::NothingToGoBack,
            },
            RunnerState::Idle => Back::NothingToGoBack,
        }
    }

    pub fn reset(&mut self) {
        self.state = RunnerState::Idle;
        self.unknown_pathway = false;
    }

    pub fn can_go_back(&self) -> bool {
        matches!(&self.state, RunnerState::AtNode { history, .. } if !history.is_empty())
    }

    pub fn history(&self) -> &[String] {
        match &self.state {
            RunnerState::AtNode { history, .. } => history,
            RunnerState::Idle => &[],
        }
    }

    pub fn current_node(&self) -> Option<&'a PathwayNode> {
        self.current().map(|(_, node)| node)
    }

    pub fn view(&self) -> RunnerView<'a> {
        match self.current() {
            Some((pathway, node)) => RunnerView::Node {
                pathway,
                node,
                can_go_back: self.can_go_back(),
            },
            None if self.unknown_pathway => RunnerView::UnknownPathway,
            None => RunnerView::Idle,
        }
    }

    fn current(&self) -> Option<(&'a Pathway, &'a PathwayNode)> {
        match &self.state {
            RunnerState::AtNode {
                pathway_id,
                node_id,
                ..
            } => {
                let pathway = self.registry.get(pathway_id)?;
                let node = pathway.node(node_id)?;
                Some((pathway, node))
            }
            RunnerState::Idle => None,
        }
    }
}
