// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Arena-backed search nodes.
//!
//! This module stores search nodes in a flat arena indexed by `NodeId`
//! instead of linking nodes through owned pointers. Each node records its
//! parent's index, so the node graph is a tree rooted at the initial state
//! with back-references only; parents are never mutated after creation.
//! Path reconstruction is a cheap index walk from a terminal node to the
//! root followed by one reversal.
//!
//! The cost fields `g`, `h`, and `f` serve informed graph search. Local
//! search leaves them at zero; A* maintains `f = g + h`, greedy best-first
//! sets `f = h`. The arena does not interpret them.

use crate::{num::ProblemValue, problem::Problem};
use num_traits::Zero;
use smallvec::SmallVec;

/// Index of a node inside a `NodeArena`.
///
/// Wraps a `usize` transparently; ids are only meaningful for the arena
/// that issued them.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A search node: a state, a parent back-reference, and path-cost scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S, C> {
    state: S,
    parent: Option<NodeId>,
    g: C,
    h: C,
    f: C,
}

impl<S, C> Node<S, C>
where
    C: Copy,
{
    /// Returns the state held by this node.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the parent id, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the accumulated path cost from the root.
    #[inline]
    pub fn g(&self) -> C {
        self.g
    }

    /// Returns the heuristic estimate to the goal.
    #[inline]
    pub fn h(&self) -> C {
        self.h
    }

    /// Returns the priority used to order this node in a frontier.
    #[inline]
    pub fn f(&self) -> C {
        self.f
    }
}

/// A flat arena owning every node created during one search run.
///
/// The arena only grows; nodes are dropped together when the search ends
/// and the arena goes out of scope. Each search invocation owns its arena
/// exclusively.
#[derive(Debug, Clone)]
pub struct NodeArena<S, C> {
    nodes: Vec<Node<S, C>>,
}

impl<S, C> Default for NodeArena<S, C>
where
    C: Copy + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> NodeArena<S, C>
where
    C: Copy + Zero,
{
    /// Creates a new, empty arena.
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an arena with pre-allocated capacity for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<S, C> {
        assert!(
            id.get() < self.nodes.len(),
            "called `NodeArena::node` with out-of-bounds id {} (arena holds {} nodes)",
            id,
            self.nodes.len()
        );
        &self.nodes[id.get()]
    }

    /// Returns the node with the given id, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<S, C>> {
        self.nodes.get(id.get())
    }

    /// Pushes a root node with zero costs and returns its id.
    #[inline]
    pub fn push_root(&mut self, state: S) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            state,
            parent: None,
            g: C::zero(),
            h: C::zero(),
            f: C::zero(),
        });
        id
    }

    /// Pushes a child of `parent` with explicit cost fields and returns its
    /// id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    #[inline]
    pub fn push_child(&mut self, parent: NodeId, state: S, g: C, h: C, f: C) -> NodeId {
        assert!(
            parent.get() < self.nodes.len(),
            "called `NodeArena::push_child` with out-of-bounds parent {} (arena holds {} nodes)",
            parent,
            self.nodes.len()
        );
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            g,
            h,
            f,
        });
        id
    }

    /// Expands the node `id` through `problem`, creating one child per
    /// applicable action.
    ///
    /// Children carry zero costs; informed search sets costs itself via
    /// `push_child`. The number of children always equals the number of
    /// actions; zero actions yield an empty sequence, which callers must
    /// treat as "no further moves".
    pub fn expand<T, P>(&mut self, problem: &P, id: NodeId) -> SmallVec<[NodeId; 8]>
    where
        T: ProblemValue,
        P: Problem<T, State = S>,
        S: Clone,
    {
        let state = self.node(id).state.clone();
        let actions = problem.actions(&state);
        let mut children = SmallVec::with_capacity(actions.len());
        for action in &actions {
            let next = problem.result(&state, action);
            children.push(self.push_child(id, next, C::zero(), C::zero(), C::zero()));
        }
        children
    }

    /// Reconstructs the root-to-`id` sequence of states by walking parent
    /// links and reversing.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    pub fn path(&self, id: NodeId) -> Vec<S>
    where
        S: Clone,
    {
        let mut states = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            states.push(node.state.clone());
            current = node.parent;
        }
        states.reverse();
        states
    }
}
