// Join Order AST
//
// This module defines the binary tree produced by the join order parser.

use std::collections::HashSet;
use std::fmt;

/// A node in a binary join order tree
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOrderNode {
    /// A single base table or alias
    Leaf(String),
    /// An inner join of two subtrees, left built before right
    Internal(Box<JoinOrderNode>, Box<JoinOrderNode>),
}

impl JoinOrderNode {
    /// Collect the set of table names at the leaves of this tree
    pub fn leaf_names(&self) -> HashSet<String> {
        let mut names = HashSet::new();
        self.collect_leaf_names(&mut names);
        names
    }

    fn collect_leaf_names(&self, names: &mut HashSet<String>) {
        match self {
            JoinOrderNode::Leaf(name) => {
                names.insert(name.clone());
            }
            JoinOrderNode::Internal(left, right) => {
                left.collect_leaf_names(names);
                right.collect_leaf_names(names);
            }
        }
    }
}

impl fmt::Display for JoinOrderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinOrderNode::Leaf(name) => write!(f, "{}", name),
            JoinOrderNode::Internal(left, right) => write!(f, "({},{})", left, right),
        }
    }
}
