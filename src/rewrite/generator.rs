// Join Tree Code Generation
//
// This module walks a join order tree bottom-up, attaching every
// connecting join predicate to the first node where both of its tables
// are available, and assembles the final rewritten query.

use std::collections::HashSet;

use crate::rewrite::error::{RewriteError, RewriteResult};
use crate::rewrite::join_order::ast::JoinOrderNode;
use crate::rewrite::sql::classifier::JoinPredicate;

/// Result of generating SQL for one subtree
#[derive(Debug, Clone)]
pub struct JoinSql {
    /// Rendered FROM fragment for this subtree
    pub sql: String,
    /// Table names covered by this subtree
    pub tables: HashSet<String>,
    /// Indices of join predicates consumed so far
    pub used: HashSet<usize>,
}

/// Recursively render the nested JOIN tree for a join order node.
///
/// Predicate indices already claimed by a subtree are never reconsidered,
/// so each join predicate lands in exactly one ON clause. Ties among
/// multiple predicates connecting the same pair of subtrees are broken by
/// original WHERE-clause order; all of them are conjoined into that
/// node's ON clause.
pub fn build_join_sql(
    node: &JoinOrderNode,
    predicates: &[JoinPredicate],
) -> RewriteResult<JoinSql> {
    match node {
        JoinOrderNode::Leaf(name) => Ok(JoinSql {
            sql: name.clone(),
            tables: HashSet::from([name.clone()]),
            used: HashSet::new(),
        }),
        JoinOrderNode::Internal(left, right) => {
            let left_result = build_join_sql(left, predicates)?;
            let right_result = build_join_sql(right, predicates)?;

            let mut used: HashSet<usize> = left_result
                .used
                .union(&right_result.used)
                .copied()
                .collect();

            // Every unconsumed predicate bridging the two subtrees joins here
            let mut connectors: Vec<(usize, &JoinPredicate)> = Vec::new();
            for (idx, predicate) in predicates.iter().enumerate() {
                if used.contains(&idx) {
                    continue;
                }
                if predicate.connects(&left_result.tables, &right_result.tables) {
                    connectors.push((idx, predicate));
                }
            }

            if connectors.is_empty() {
                return Err(RewriteError::NoConnectingPredicate {
                    left: sorted_names(&left_result.tables),
                    right: sorted_names(&right_result.tables),
                });
            }

            let on_clause = connectors
                .iter()
                .map(|(_, predicate)| predicate.text.as_str())
                .collect::<Vec<_>>()
                .join(" AND ");
            used.extend(connectors.iter().map(|(idx, _)| *idx));

            let mut tables = left_result.tables;
            tables.extend(right_result.tables);

            Ok(JoinSql {
                sql: format!(
                    "({} JOIN {} ON {})",
                    left_result.sql, right_result.sql, on_clause
                ),
                tables,
                used,
            })
        }
    }
}

/// Reattach the SELECT list, the filters and any join predicate that was
/// never consumed to the rendered join tree. A well-formed tree leaves no
/// join predicate behind, but leftovers are kept in WHERE rather than
/// dropped.
pub fn assemble_query(
    select_list: &str,
    root: &JoinSql,
    predicates: &[JoinPredicate],
    filters: &[String],
) -> String {
    let mut clauses: Vec<String> = filters.to_vec();
    for (idx, predicate) in predicates.iter().enumerate() {
        if !root.used.contains(&idx) {
            clauses.push(predicate.text.clone());
        }
    }

    if clauses.is_empty() {
        format!("SELECT {} FROM {};", select_list, root.sql)
    } else {
        format!(
            "SELECT {} FROM {} WHERE {};",
            select_list,
            root.sql,
            clauses.join(" AND ")
        )
    }
}

fn sorted_names(tables: &HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = tables.iter().cloned().collect();
    names.sort();
    names
}
