//! Traversal of the envelope DAG, generalizing `dcbor::walk`'s
//! `WalkElement`/`EdgeType`/visitor-closure shape from CBOR trees to
//! envelope DAGs: subject first, then assertions in digest order; for an
//! assertion, predicate then object.

use crate::envelope::{Case, Envelope};

/// How an envelope reached the visitor, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeEdge {
    /// Root of the walk.
    None,
    /// The subject of a `Node`.
    Subject,
    /// One of a `Node`'s assertions, in digest order.
    Assertion(usize),
    /// The predicate half of an `Assertion`.
    Predicate,
    /// The object half of an `Assertion`.
    Object,
    /// The content of a `Wrapped` envelope.
    WrappedContent,
}

/// A visitor called for each envelope in the DAG. Returns the state to pass
/// to children and a `bool` that, if `true`, skips descent into this
/// envelope's children.
pub type Visitor<'a, State> = dyn Fn(&Envelope, usize, EnvelopeEdge, State) -> (State, bool) + 'a;

impl Envelope {
    /// Walks this envelope and every envelope reachable from it, calling
    /// `visit` for each one encountered.
    pub fn walk<State: Clone>(&self, state: State, visit: &Visitor<'_, State>) {
        self.walk_at(0, EnvelopeEdge::None, state, visit);
    }

    fn walk_at<State: Clone>(
        &self,
        level: usize,
        incoming_edge: EnvelopeEdge,
        state: State,
        visit: &Visitor<'_, State>,
    ) {
        let (state, stop) = visit(self, level, incoming_edge, state);
        if stop {
            return;
        }
        let next_level = level + 1;
        match self.case() {
            Case::Node(subject, assertions) => {
                subject.walk_at(next_level, EnvelopeEdge::Subject, state.clone(), visit);
                for (index, assertion) in assertions.iter().enumerate() {
                    assertion.walk_at(next_level, EnvelopeEdge::Assertion(index), state.clone(), visit);
                }
            }
            Case::Assertion(predicate, object) => {
                predicate.walk_at(next_level, EnvelopeEdge::Predicate, state.clone(), visit);
                object.walk_at(next_level, EnvelopeEdge::Object, state, visit);
            }
            Case::Wrapped(inner) => {
                inner.walk_at(next_level, EnvelopeEdge::WrappedContent, state, visit);
            }
            Case::Leaf(_)
            | Case::KnownValue(_)
            | Case::Elided(_)
            | Case::Encrypted(_)
            | Case::Compressed(_) => {
                // No children to traverse.
            }
        }
    }

    /// Collects the digests of every subtree reachable from this envelope
    /// (including itself), used by the elision/compression selection walk
    /// to test membership in a target digest set.
    pub(crate) fn collect_digests(&self) -> std::collections::HashSet<bc_components::Digest> {
        use std::cell::RefCell;
        let found = RefCell::new(std::collections::HashSet::new());
        let visitor = |envelope: &Envelope, _level: usize, _edge: EnvelopeEdge, ()| {
            found.borrow_mut().insert(envelope.digest());
            ((), false)
        };
        self.walk((), &visitor);
        found.into_inner()
    }
}
