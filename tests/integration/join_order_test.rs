use anyhow::{Result, anyhow};
use joinfix::rewrite::error::RewriteError;
use joinfix::rewrite::join_order::ast::JoinOrderNode;
use joinfix::rewrite::join_order::parser::JoinOrderParser;

#[test]
fn test_parse_reference_join_order() -> Result<()> {
    // The shape used throughout the benchmark tables
    let tree = JoinOrderParser::new("(a,((b,c),d))")
        .parse()
        .map_err(|e| anyhow!("Parse error: {}", e))?;

    if let JoinOrderNode::Internal(left, right) = &tree {
        assert_eq!(**left, JoinOrderNode::Leaf("a".to_string()));
        assert!(matches!(**right, JoinOrderNode::Internal(_, _)));
    } else {
        panic!("Expected internal node at the root");
    }

    let names = tree.leaf_names();
    assert_eq!(names.len(), 4);
    for name in ["a", "b", "c", "d"] {
        assert!(names.contains(name), "missing leaf {}", name);
    }

    Ok(())
}

#[test]
fn test_parse_single_table() -> Result<()> {
    let tree = JoinOrderParser::new("title")
        .parse()
        .map_err(|e| anyhow!("Parse error: {}", e))?;
    assert_eq!(tree, JoinOrderNode::Leaf("title".to_string()));
    Ok(())
}

#[test]
fn test_parse_tolerates_whitespace() -> Result<()> {
    let tree = JoinOrderParser::new("  (\n  movie_info ,\t( cast_info , title )\n)  ")
        .parse()
        .map_err(|e| anyhow!("Parse error: {}", e))?;
    assert_eq!(tree.to_string(), "(movie_info,(cast_info,title))");
    Ok(())
}

#[test]
fn test_error_reports_position_of_bad_token() {
    let result = JoinOrderParser::new("(a,%b)").parse();
    match result {
        Err(RewriteError::JoinOrderSyntax { position, message }) => {
            assert_eq!(position, 3);
            assert!(message.contains('%'), "message should name the token: {}", message);
        }
        other => panic!("Expected JoinOrderSyntax error, got {:?}", other),
    }
}

#[test]
fn test_error_on_trailing_garbage() {
    let result = JoinOrderParser::new("(a,b))").parse();
    assert!(matches!(result, Err(RewriteError::JoinOrderSyntax { .. })));
}

#[test]
fn test_error_on_truncated_input() {
    for input in ["(", "(a", "(a,", "(a,b", ""] {
        let result = JoinOrderParser::new(input).parse();
        assert!(
            matches!(result, Err(RewriteError::JoinOrderSyntax { .. })),
            "expected syntax error for {:?}",
            input
        );
    }
}
