//! Explicit game trees for unit tests

use std::rc::Rc;

use super::game::{AgentIndex, GameState, Move};

#[derive(Debug)]
pub(crate) enum Node {
    Leaf(f64),
    Branch(Vec<Rc<Node>>),
}

pub(crate) fn leaf(value: f64) -> Rc<Node> {
    Rc::new(Node::Leaf(value))
}

pub(crate) fn branch(children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Branch(children))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Pick(pub usize);

impl Move for Pick {}

/// A game whose moves walk down a fixed tree; leaves score their value.
#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    node: Rc<Node>,
    agents: usize,
}

impl TreeGame {
    pub(crate) fn new(root: Rc<Node>, agents: usize) -> Self {
        Self { node: root, agents }
    }
}

impl GameState for TreeGame {
    type Action = Pick;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Pick> {
        match self.node.as_ref() {
            Node::Leaf(_) => Vec::new(),
            Node::Branch(children) => (0..children.len()).map(Pick).collect(),
        }
    }

    fn generate_successor(&self, _agent: AgentIndex, action: Pick) -> Self {
        let Node::Branch(children) = self.node.as_ref() else {
            panic!("leaf has no successors");
        };
        Self::new(Rc::clone(&children[action.0]), self.agents)
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn score(&self) -> f64 {
        match self.node.as_ref() {
            Node::Leaf(value) => *value,
            Node::Branch(_) => 0.0,
        }
    }
}
