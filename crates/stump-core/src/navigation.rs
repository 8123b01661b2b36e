use crate::types::{FollowUp, Source, TalkingPoint};
use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Topic,
    FollowUp,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Topic => "topic",
            NodeKind::FollowUp => "followUp",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NavigationNode
// ---------------------------------------------------------------------------

/// One entry on the navigation stack: either the root topic or a follow-up
/// opened beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "node", rename_all = "camelCase")]
pub enum NavigationNode<'a> {
    Topic(&'a TalkingPoint),
    FollowUp(&'a FollowUp),
}

impl<'a> NavigationNode<'a> {
    pub fn kind(&self) -> NodeKind {
        match *self {
            NavigationNode::Topic(_) => NodeKind::Topic,
            NavigationNode::FollowUp(_) => NodeKind::FollowUp,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            NavigationNode::Topic(tp) => &tp.id,
            NavigationNode::FollowUp(f) => &f.id,
        }
    }

    /// Topics display their title, follow-ups their prompt.
    pub fn title(&self) -> &'a str {
        match *self {
            NavigationNode::Topic(tp) => &tp.title,
            NavigationNode::FollowUp(f) => &f.prompt,
        }
    }

    pub fn summary(&self) -> &'a str {
        match *self {
            NavigationNode::Topic(tp) => &tp.summary,
            NavigationNode::FollowUp(f) => &f.summary,
        }
    }

    pub fn details(&self) -> Option<&'a str> {
        match *self {
            NavigationNode::Topic(tp) => tp.details.as_deref(),
            NavigationNode::FollowUp(f) => f.details.as_deref(),
        }
    }

    pub fn sources(&self) -> &'a [Source] {
        match *self {
            NavigationNode::Topic(tp) => &tp.sources,
            NavigationNode::FollowUp(f) => &f.sources,
        }
    }

    pub fn follow_ups(&self) -> &'a [FollowUp] {
        match *self {
            NavigationNode::Topic(tp) => &tp.follow_ups,
            NavigationNode::FollowUp(f) => &f.follow_ups,
        }
    }
}

// ---------------------------------------------------------------------------
// NavigationStack
// ---------------------------------------------------------------------------

/// Path from a root topic down through the follow-ups the reader opened.
///
/// Index 0 is always a [`NavigationNode::Topic`] when the stack is non-empty;
/// later entries are follow-ups. An empty stack is the idle state.
#[derive(Debug, Clone, Default)]
pub struct NavigationStack<'a> {
    stack: Vec<NavigationNode<'a>>,
}

impl<'a> NavigationStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Discard the current path and start a new one at `topic`.
    pub fn open_topic(&mut self, topic: &'a TalkingPoint) {
        self.stack.clear();
        self.stack.push(NavigationNode::Topic(topic));
    }

    /// Push a follow-up beneath the current node. Ignored (with a warning)
    /// when no topic is open. Returns whether the push happened.
    pub fn open_follow_up(&mut self, follow_up: &'a FollowUp) -> bool {
        if self.stack.is_empty() {
            tracing::warn!(
                follow_up = %follow_up.id,
                "cannot open follow-up without an active topic"
            );
            return false;
        }
        self.stack.push(NavigationNode::FollowUp(follow_up));
        true
    }

    /// Pop one level. The root topic is the floor: returns false and leaves
    /// the stack unchanged when only the root (or nothing) is open.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    pub fn stack(&self) -> &[NavigationNode<'a>] {
        &self.stack
    }

    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// 0 at the root topic, 1+ inside follow-ups, `None` when idle.
    pub fn depth(&self) -> Option<usize> {
        self.stack.len().checked_sub(1)
    }

    pub fn current_node(&self) -> Option<&NavigationNode<'a>> {
        self.stack.last()
    }

    pub fn root_topic(&self) -> Option<&'a TalkingPoint> {
        match self.stack.first() {
            Some(NavigationNode::Topic(tp)) => Some(*tp),
            _ => None,
        }
    }

    /// The node one level up, used to label the back action.
    pub fn previous_node(&self) -> Option<&NavigationNode<'a>> {
        let len = self.stack.len();
        if len > 1 {
            self.stack.get(len - 2)
        } else {
            None
        }
    }

    pub fn node_title(node: Option<&NavigationNode<'a>>) -> &'a str {
        node.map(|n| n.title()).unwrap_or("")
    }

    pub fn current_title(&self) -> &'a str {
        Self::node_title(self.current_node())
    }

    pub fn current_summary(&self) -> &'a str {
        self.current_node().map(|n| n.summary()).unwrap_or("")
    }

    pub fn current_details(&self) -> Option<&'a str> {
        self.current_node().and_then(|n| n.details())
    }

    pub fn current_sources(&self) -> Option<&'a [Source]> {
        self.current_node().map(|n| n.sources())
    }

    pub fn current_follow_ups(&self) -> Option<&'a [FollowUp]> {
        self.current_node().map(|n| n.follow_ups())
    }

    /// Titles from the root topic to the current node.
    pub fn breadcrumbs(&self) -> Vec<&'a str> {
        self.stack.iter().map(|n| n.title()).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
