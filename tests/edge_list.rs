use maxflow_algorithms::maximum_flow::cross_check::cross_check;
use maxflow_algorithms::maximum_flow::edge_list::{parse_edge_list, ParseError};
use maxflow_algorithms::maximum_flow::preflow_push::PreflowPush;
use maxflow_algorithms::maximum_flow::status::Status;
use rstest::rstest;

const DIAMOND: &str = "\
s a 3
s b 2
a t 2
b t 3
";

#[test]
fn parses_space_delimited_edge_list() {
    let parsed = parse_edge_list::<i64>(DIAMOND, ' ').unwrap();

    assert_eq!(parsed.graph.num_nodes(), 4);
    assert_eq!(parsed.graph.num_edges(), 4);
    // ids follow first appearance order: s, a, b, t
    assert_eq!(parsed.source, 0);
    assert_eq!(parsed.sink, 3);
    assert_eq!(parsed.graph.capacity(parsed.source, 1), 3);
}

#[test]
fn parsed_graph_solves_end_to_end() {
    let mut parsed = parse_edge_list::<i64>(DIAMOND, ' ').unwrap();

    let status = PreflowPush::default().solve(parsed.source, parsed.sink, &mut parsed.graph);

    assert_eq!(status, Status::Optimal);
    assert_eq!(parsed.graph.audit(parsed.source, parsed.sink), Ok(4));
    assert_eq!(cross_check(&parsed.graph, parsed.source, parsed.sink), Ok(4));
}

#[test]
fn parses_tab_delimited_edge_list() {
    let parsed = parse_edge_list::<i64>("s\ta\t4\na\tt\t2\n", '\t').unwrap();

    assert_eq!(parsed.graph.num_nodes(), 3);
    assert_eq!(parsed.graph.capacity(0, 1), 4);
    assert_eq!(parsed.graph.capacity(1, 2), 2);
}

#[test]
fn collapses_repeated_delimiters() {
    let parsed = parse_edge_list::<i64>("s   a  3\na t   1\n", ' ').unwrap();

    assert_eq!(parsed.graph.capacity(0, 1), 3);
    assert_eq!(parsed.graph.capacity(1, 2), 1);
}

#[test]
fn ignores_end_marker_and_blank_lines() {
    let parsed = parse_edge_list::<i64>("s a 3\n\na t 1\nDone Mesh\n", ' ').unwrap();

    assert_eq!(parsed.graph.num_nodes(), 3);
    assert_eq!(parsed.graph.num_edges(), 2);
}

#[test]
fn zero_capacity_lines_add_nodes_but_no_edge() {
    let parsed = parse_edge_list::<i64>("s a 0\na t 1\n", ' ').unwrap();

    assert_eq!(parsed.graph.num_nodes(), 3);
    assert_eq!(parsed.graph.num_edges(), 1);
    assert_eq!(parsed.graph.capacity(0, 1), 0);
}

#[rstest]
#[case::missing_source("x t 3\n", ParseError::MissingSource)]
#[case::missing_sink("s x 3\n", ParseError::MissingSink)]
#[case::missing_field("s t\n", ParseError::MissingField { line: 1 })]
#[case::invalid_capacity("s t abc\n", ParseError::InvalidCapacity { line: 1 })]
#[case::negative_capacity("s t -2\n", ParseError::NegativeCapacity { line: 1 })]
#[case::duplicate_edge("s t 3\ns t 4\n", ParseError::DuplicateEdge { line: 2 })]
fn rejects_malformed_input(#[case] input: &str, #[case] expected: ParseError) {
    assert_eq!(parse_edge_list::<i64>(input, ' ').unwrap_err(), expected);
}

#[test]
fn reports_error_line_after_skipped_lines() {
    let err = parse_edge_list::<i64>("s a 3\nDone Mesh\na t oops\n", ' ').unwrap_err();

    assert_eq!(err, ParseError::InvalidCapacity { line: 3 });
}
