use std::io::Cursor;

use anyhow::Result;
use joinfix::host::table::{TableError, TableOptions, process_table};

fn run_table(input: &str, options: &TableOptions) -> Result<(String, usize, usize), TableError> {
    let mut output = Vec::new();
    let summary = process_table(Cursor::new(input), &mut output, options)?;
    let text = String::from_utf8(output).expect("output is valid UTF-8");
    Ok((text, summary.rewritten, summary.skipped))
}

#[test]
fn test_appends_fixed_query_column() -> Result<()> {
    let input = "join_order|latency|query\n\
                 (a,b)|12.5|SELECT a.x FROM a, b WHERE a.id = b.id;\n";

    let (output, rewritten, skipped) = run_table(input, &TableOptions::default())?;

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("join_order|latency|query|fixed_query"));

    let row = lines.next().expect("one data row");
    assert!(row.starts_with("(a,b)|12.5|"));
    assert!(row.ends_with("SELECT a.x FROM (a JOIN b ON a.id = b.id);"));
    assert_eq!(lines.next(), None);

    assert_eq!(rewritten, 1);
    assert_eq!(skipped, 0);
    Ok(())
}

#[test]
fn test_extra_columns_preserved_in_order() -> Result<()> {
    let input = "run|join_order|cardinality|query\n\
                 7|(a,b)|990|SELECT * FROM a, b WHERE a.id = b.id\n\
                 8|(b,a)|991|SELECT * FROM a, b WHERE a.id = b.id\n";

    let (output, rewritten, _) = run_table(input, &TableOptions::default())?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "run|join_order|cardinality|query|fixed_query");
    assert!(lines[1].starts_with("7|(a,b)|990|SELECT * FROM a, b WHERE a.id = b.id|"));
    assert!(lines[2].starts_with("8|(b,a)|991|"));
    assert!(lines[2].contains("(b JOIN a ON a.id = b.id)"));
    assert_eq!(rewritten, 2);
    Ok(())
}

#[test]
fn test_failed_row_is_skipped_not_written() -> Result<()> {
    let input = "join_order|query\n\
                 (a,b)|SELECT a.x FROM a, b WHERE a.id = b.id\n\
                 (a,c)|SELECT a.x FROM a, b WHERE a.id = b.id\n\
                 (a,b)|SELECT a.y FROM a, b WHERE a.id = b.id\n";

    let (output, rewritten, skipped) = run_table(input, &TableOptions::default())?;

    // Row 2 cannot connect a with c and is dropped whole
    assert_eq!(output.lines().count(), 3);
    assert!(!output.contains("(a,c)"));
    assert_eq!(rewritten, 2);
    assert_eq!(skipped, 1);
    Ok(())
}

#[test]
fn test_fail_fast_aborts_with_row_context() {
    let input = "join_order|query\n\
                 (a,c)|SELECT a.x FROM a, b WHERE a.id = b.id\n";

    let options = TableOptions {
        fail_fast: true,
        ..TableOptions::default()
    };
    let result = run_table(input, &options);

    match result {
        Err(TableError::Row { line, join_order, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(join_order, "(a,c)");
        }
        other => panic!("Expected row error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_required_column() {
    let input = "join_order|latency\n(a,b)|3\n";
    let result = run_table(input, &TableOptions::default());
    match result {
        Err(TableError::MissingColumn(name)) => assert_eq!(name, "query"),
        other => panic!("Expected missing column error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_empty_input_is_an_error() {
    let result = run_table("", &TableOptions::default());
    assert!(matches!(result, Err(TableError::EmptyTable)));
}

#[test]
fn test_ragged_row_skipped() -> Result<()> {
    let input = "join_order|query\n\
                 (a,b)\n\
                 (a,b)|SELECT a.x FROM a, b WHERE a.id = b.id\n";

    let (output, rewritten, skipped) = run_table(input, &TableOptions::default())?;
    assert_eq!(output.lines().count(), 2);
    assert_eq!(rewritten, 1);
    assert_eq!(skipped, 1);
    Ok(())
}

#[test]
fn test_blank_lines_ignored() -> Result<()> {
    let input = "join_order|query\n\n(a,b)|SELECT a.x FROM a, b WHERE a.id = b.id\n\n";
    let (_, rewritten, skipped) = run_table(input, &TableOptions::default())?;
    assert_eq!(rewritten, 1);
    assert_eq!(skipped, 0);
    Ok(())
}

#[test]
fn test_custom_delimiter() -> Result<()> {
    let input = "join_order;query\n(a,b);SELECT a.x FROM a, b WHERE a.id = b.id\n";
    let options = TableOptions {
        delimiter: ';',
        ..TableOptions::default()
    };

    let (output, rewritten, _) = run_table(input, &options)?;
    assert_eq!(rewritten, 1);
    // The rewritten query ends in a semicolon and must be quoted
    let row = output.lines().nth(1).expect("one data row");
    assert!(row.ends_with("\"SELECT a.x FROM (a JOIN b ON a.id = b.id);\""));
    Ok(())
}

#[test]
fn test_quoted_query_field_with_delimiter() -> Result<()> {
    let input = "join_order|query\n\
                 (a,b)|\"SELECT a.x FROM a, b WHERE a.id = b.id AND a.tag = 'x|y'\"\n";

    let (output, rewritten, _) = run_table(input, &TableOptions::default())?;
    assert_eq!(rewritten, 1);
    assert!(output.contains("a.tag = 'x|y'"));
    Ok(())
}
