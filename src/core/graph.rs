//! Resolved dependency tree.
//!
//! The tree comes from the surrounding build system fully resolved; the
//! core only reads it. Traversal is plain recursive descent with
//! enter/leave callbacks and no shared mutable state: a visitor owns its
//! accumulators for exactly one walk, and the first error short-circuits
//! the whole traversal instead of being parked in a field.

use crate::core::artifact::{Artifact, Scope};

/// One node of the resolved dependency tree.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    artifact: Artifact,
    scope: Scope,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Create a leaf node.
    pub fn new(artifact: Artifact, scope: Scope) -> Self {
        DependencyNode {
            artifact,
            scope,
            children: Vec::new(),
        }
    }

    /// Attach children, replacing any existing ones.
    pub fn with_children(mut self, children: Vec<DependencyNode>) -> Self {
        self.children = children;
        self
    }

    /// Append one child.
    pub fn add_child(&mut self, child: DependencyNode) {
        self.children.push(child);
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }
}

/// Enter/leave callbacks over a dependency tree.
///
/// `enter` decides whether the walk descends into the node's children;
/// `leave` always runs afterwards, pruned subtree or not, mirroring the
/// visitor contract the partitioning logic was written against.
pub trait DependencyVisitor {
    type Error;

    /// Called before a node's children. Return `Ok(true)` to descend.
    fn enter(&mut self, node: &DependencyNode) -> Result<bool, Self::Error>;

    /// Called after a node's children (or directly after `enter` when the
    /// subtree was pruned).
    fn leave(&mut self, node: &DependencyNode) -> Result<(), Self::Error>;
}

/// Depth-first walk, children before siblings, failing fast on the first
/// visitor error.
pub fn walk<V: DependencyVisitor>(node: &DependencyNode, visitor: &mut V) -> Result<(), V::Error> {
    if visitor.enter(node)? {
        for child in &node.children {
            walk(child, visitor)?;
        }
    }
    visitor.leave(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artifact::ArtifactKind;

    struct Recorder {
        events: Vec<String>,
        prune: Vec<&'static str>,
        fail_on: Option<&'static str>,
    }

    impl DependencyVisitor for Recorder {
        type Error = String;

        fn enter(&mut self, node: &DependencyNode) -> Result<bool, String> {
            let name = node.artifact().artifact().to_string();
            if self.fail_on == Some(name.as_str()) {
                return Err(name);
            }
            self.events.push(format!("enter {name}"));
            Ok(!self.prune.contains(&name.as_str()))
        }

        fn leave(&mut self, node: &DependencyNode) -> Result<(), String> {
            self.events
                .push(format!("leave {}", node.artifact().artifact()));
            Ok(())
        }
    }

    fn node(name: &str, children: Vec<DependencyNode>) -> DependencyNode {
        DependencyNode::new(
            Artifact::new("g", name, "1.0", ArtifactKind::Jar),
            Scope::Compile,
        )
        .with_children(children)
    }

    #[test]
    fn walk_is_depth_first() {
        let tree = node("root", vec![node("a", vec![node("a1", vec![])]), node("b", vec![])]);

        let mut recorder = Recorder {
            events: vec![],
            prune: vec![],
            fail_on: None,
        };
        walk(&tree, &mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            vec![
                "enter root", "enter a", "enter a1", "leave a1", "leave a", "enter b", "leave b",
                "leave root",
            ]
        );
    }

    #[test]
    fn pruned_subtree_still_gets_leave() {
        let tree = node("root", vec![node("a", vec![node("a1", vec![])])]);

        let mut recorder = Recorder {
            events: vec![],
            prune: vec!["a"],
            fail_on: None,
        };
        walk(&tree, &mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            vec!["enter root", "enter a", "leave a", "leave root"]
        );
    }

    #[test]
    fn error_short_circuits() {
        let tree = node("root", vec![node("a", vec![]), node("b", vec![])]);

        let mut recorder = Recorder {
            events: vec![],
            prune: vec![],
            fail_on: Some("a"),
        };
        let err = walk(&tree, &mut recorder).unwrap_err();
        assert_eq!(err, "a");
        // b was never visited
        assert_eq!(recorder.events, vec!["enter root"]);
    }
}
