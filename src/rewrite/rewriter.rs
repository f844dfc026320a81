// Fixed Join Order Rewriter
//
// Top-level entry point tying the pipeline together: parse the join
// order, pull the query apart, classify its conjuncts, and regenerate
// the query around the requested join tree.

use crate::rewrite::error::RewriteResult;
use crate::rewrite::generator::{assemble_query, build_join_sql};
use crate::rewrite::join_order::parser::JoinOrderParser;
use crate::rewrite::sql::classifier::classify_conditions;
use crate::rewrite::sql::extractor::extract_select_and_where;
use crate::rewrite::sql::splitter::split_conditions;

/// Rewrite a flat SQL query so that its FROM clause is an explicit
/// nested JOIN tree following `join_order`, with every connecting
/// equality predicate moved from WHERE into the matching ON clause.
///
/// The rewrite is pure and per-row: it performs no I/O, never logs, and
/// returns a typed error when the join order is malformed, the query has
/// no SELECT ... FROM shape, or two subtrees cannot be connected.
pub fn rewrite_with_fixed_join_order(
    join_order: &str,
    original_query: &str,
) -> RewriteResult<String> {
    let tree = JoinOrderParser::new(join_order).parse()?;
    let (select_list, where_body) = extract_select_and_where(original_query)?;
    let conditions = split_conditions(&where_body)?;
    let (join_predicates, filters) = classify_conditions(&conditions);
    let root = build_join_sql(&tree, &join_predicates)?;
    Ok(assemble_query(&select_list, &root, &join_predicates, &filters))
}
