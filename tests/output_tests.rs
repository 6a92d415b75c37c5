use apidiff::{classify_all, compute_diff, format_summary, parse_yaml, render_csv, write_csv};

const LEFT: &str = "paths:\n  getUser:\n    summary: \"Fetch \\\"one\\\"\"\n  listUsers:\n    limit: 10\n";
const RIGHT: &str = "paths:\n  getUser:\n    summary: Fetch\n";

#[test]
fn test_csv_from_documents() {
    let left = parse_yaml(LEFT).unwrap();
    let right = parse_yaml(RIGHT).unwrap();
    let diff = compute_diff(&left, &right).unwrap();
    let rows = classify_all(&diff, &left).unwrap();

    let csv = render_csv(&rows);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "TYPE,API,SECTION,PATH,OLD VALUE,NEW VALUE,REMARKS");
    assert_eq!(lines[1], "Missing Key,listUsers,paths,paths.listUsers,,,");
    assert_eq!(
        lines[2],
        "Value Difference,getUser,paths,paths.getUser.summary,\"Fetch \"\"one\"\"\",Fetch,"
    );
}

#[test]
fn test_write_csv_to_buffer() {
    let left = parse_yaml("a: 1").unwrap();
    let right = parse_yaml("a: 1\nb: 2").unwrap();
    let diff = compute_diff(&left, &right).unwrap();
    let rows = classify_all(&diff, &left).unwrap();

    let mut buffer = Vec::new();
    write_csv(&rows, &mut buffer).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "TYPE,API,SECTION,PATH,OLD VALUE,NEW VALUE,REMARKS\nNew Key,,b,b,,,\n"
    );
}

#[test]
fn test_summary_counts() {
    let left = parse_yaml(LEFT).unwrap();
    let right = parse_yaml(RIGHT).unwrap();
    let diff = compute_diff(&left, &right).unwrap();
    let rows = classify_all(&diff, &left).unwrap();

    let summary = format_summary(&rows, &diff.stats, false);
    assert!(summary.contains("- [paths / listUsers] paths.listUsers"));
    assert!(summary.ends_with("Summary: 1 missing, 1 changed"));
}
