//! End-to-end metrics tests over complete ESTree documents.
//!
//! The main fixture models this source shape, as an esprima-style document:
//!
//! ```text
//!  1  var fs = require("fs");
//!  2  var path = require("path");
//!  4  function checkAccess(user, limit) {
//!         if (a && b || c) {
//!             if (x < limit) {
//!                 while (busy) {
//!                     if (flag) { return true; }
//!                 }
//!             }
//!         }
//!         return false;
//!     }
//! 15  function greet() {
//!         var msg = obj.data.info.text;
//!         return "hello";
//!     }
//! ```

use std::io::Write;

use tempfile::NamedTempFile;

use treemetrics::{analyze_file, analyze_path, parse_source_tree, analyze_tree, RiskLevel};

const DOCUMENT: &str = r#"{"type": "Program", "body": [
    {"type": "VariableDeclaration", "kind": "var", "declarations": [
        {"type": "VariableDeclarator",
         "id": {"type": "Identifier", "name": "fs"},
         "init": {"type": "CallExpression",
            "callee": {"type": "Identifier", "name": "require"},
            "arguments": [{"type": "Literal", "value": "fs", "raw": "\"fs\""}]}}
    ]},
    {"type": "VariableDeclaration", "kind": "var", "declarations": [
        {"type": "VariableDeclarator",
         "id": {"type": "Identifier", "name": "path"},
         "init": {"type": "CallExpression",
            "callee": {"type": "Identifier", "name": "require"},
            "arguments": [{"type": "Literal", "value": "path", "raw": "\"path\""}]}}
    ]},
    {"type": "FunctionDeclaration",
     "id": {"type": "Identifier", "name": "checkAccess"},
     "params": [{"type": "Identifier", "name": "user"}, {"type": "Identifier", "name": "limit"}],
     "body": {"type": "BlockStatement", "body": [
        {"type": "IfStatement",
         "test": {"type": "LogicalExpression", "operator": "||",
            "left": {"type": "LogicalExpression", "operator": "&&",
                "left": {"type": "Identifier", "name": "a"},
                "right": {"type": "Identifier", "name": "b"}},
            "right": {"type": "Identifier", "name": "c"}},
         "consequent": {"type": "BlockStatement", "body": [
            {"type": "IfStatement",
             "test": {"type": "BinaryExpression", "operator": "<",
                "left": {"type": "Identifier", "name": "x"},
                "right": {"type": "Identifier", "name": "limit"}},
             "consequent": {"type": "BlockStatement", "body": [
                {"type": "WhileStatement",
                 "test": {"type": "Identifier", "name": "busy"},
                 "body": {"type": "BlockStatement", "body": [
                    {"type": "IfStatement",
                     "test": {"type": "Identifier", "name": "flag"},
                     "consequent": {"type": "BlockStatement", "body": [
                        {"type": "ReturnStatement",
                         "argument": {"type": "Literal", "value": true, "raw": "true"}}
                     ]},
                     "alternate": null}
                 ]}}
             ]},
             "alternate": null}
         ]},
         "alternate": null},
        {"type": "ReturnStatement",
         "argument": {"type": "Literal", "value": false, "raw": "false"}}
     ]},
     "loc": {"start": {"line": 4, "column": 0}}},
    {"type": "FunctionDeclaration",
     "id": {"type": "Identifier", "name": "greet"},
     "params": [],
     "body": {"type": "BlockStatement", "body": [
        {"type": "VariableDeclaration", "kind": "var", "declarations": [
            {"type": "VariableDeclarator",
             "id": {"type": "Identifier", "name": "msg"},
             "init": {"type": "MemberExpression",
                "object": {"type": "MemberExpression",
                    "object": {"type": "MemberExpression",
                        "object": {"type": "Identifier", "name": "obj"},
                        "property": {"type": "Identifier", "name": "data"}},
                    "property": {"type": "Identifier", "name": "info"}},
                "property": {"type": "Identifier", "name": "text"}}}
        ]},
        {"type": "ReturnStatement",
         "argument": {"type": "Literal", "value": "hello", "raw": "\"hello\""}}
     ]},
     "loc": {"start": {"line": 15, "column": 0}}}
]}"#;

fn write_document(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Function-Level Properties
// =============================================================================

#[test]
fn test_function_metrics_end_to_end() {
    let file = write_document(DOCUMENT);
    let analysis = analyze_file(file.path()).expect("analysis should succeed");

    assert_eq!(analysis.functions.len(), 2);

    let check = analysis.function("checkAccess").expect("checkAccess");
    assert_eq!(check.line, 4);
    assert_eq!(check.parameter_count, 2);
    // Base 1 + three ifs + one while.
    assert_eq!(check.cyclomatic_complexity, 5);
    // if -> if -> while (transparent) -> if.
    assert_eq!(check.max_nesting_depth, 3);
    // a && b || c: two connectives, three conditions.
    assert_eq!(check.max_conditions, 3);
    assert_eq!(check.return_count, 2);
    assert_eq!(check.max_chain_length, 0);
    assert_eq!(check.risk_level, RiskLevel::Low);

    let greet = analysis.function("greet").expect("greet");
    assert_eq!(greet.line, 15);
    assert_eq!(greet.parameter_count, 0);
    assert_eq!(greet.cyclomatic_complexity, 1);
    assert_eq!(greet.max_nesting_depth, 0);
    assert_eq!(greet.max_conditions, 0);
    assert_eq!(greet.return_count, 1);
    // obj.data.info.text: three member accesses before the base identifier.
    assert_eq!(greet.max_chain_length, 3);
}

#[test]
fn test_decision_free_function_baseline() {
    let file = write_document(DOCUMENT);
    let analysis = analyze_file(file.path()).expect("analysis should succeed");
    let greet = analysis.function("greet").expect("greet");

    // No decision nodes: every counter sits at its baseline.
    assert_eq!(greet.cyclomatic_complexity, 1);
    assert_eq!(greet.max_nesting_depth, 0);
    assert_eq!(greet.max_conditions, 0);
}

#[test]
fn test_anonymous_functions_never_collide_across_lines() {
    let document = r#"{"type": "Program", "body": [
        {"type": "FunctionDeclaration", "id": null, "params": [],
         "body": {"type": "BlockStatement", "body": []},
         "loc": {"start": {"line": 3, "column": 0}}},
        {"type": "FunctionDeclaration", "id": null, "params": [],
         "body": {"type": "BlockStatement", "body": []},
         "loc": {"start": {"line": 8, "column": 0}}}
    ]}"#;
    let file = write_document(document);
    let analysis = analyze_file(file.path()).expect("analysis should succeed");

    assert_eq!(analysis.functions.len(), 2);
    assert!(analysis.function("anon function @3").is_some());
    assert!(analysis.function("anon function @8").is_some());
}

// =============================================================================
// File-Level Properties
// =============================================================================

#[test]
fn test_file_totals_ignore_function_boundaries() {
    let file = write_document(DOCUMENT);
    let analysis = analyze_file(file.path()).expect("analysis should succeed");

    // Two require() references, three string literals ("fs", "path",
    // "hello"), one relational comparison (x < limit).
    assert_eq!(analysis.file.import_count, 2);
    assert_eq!(analysis.file.package_complexity, 2);
    assert_eq!(analysis.file.string_literal_count, 3);
    assert_eq!(analysis.file.comparison_count, 1);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_fresh_engine_instances_agree() {
    let first = analyze_tree(&parse_source_tree(DOCUMENT).unwrap(), "main.json");
    let second = analyze_tree(&parse_source_tree(DOCUMENT).unwrap(), "main.json");
    assert_eq!(first, second);
}

// =============================================================================
// Directory Runs
// =============================================================================

#[test]
fn test_directory_analysis_and_summary() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("a.json"), DOCUMENT).expect("write");
    std::fs::write(dir.path().join("b.json"), DOCUMENT).expect("write");

    let project = analyze_path(dir.path()).expect("directory analysis");

    assert_eq!(project.files.len(), 2);
    assert!(project.errors.is_empty());
    assert_eq!(project.stats.total_files, 2);
    assert_eq!(project.stats.total_functions, 4);
    assert_eq!(project.stats.max_complexity, 5);
    assert_eq!(project.stats.risk_distribution.get("low"), Some(&4));

    // Deterministic path order.
    assert!(project.files[0].file.path.ends_with("a.json"));
    assert!(project.files[1].file.path.ends_with("b.json"));

    let rendered = treemetrics::report::render_project_text(&project);
    assert!(rendered.contains("checkAccess (line 4)"));
    assert!(rendered.contains("2 file(s), 4 function(s)"));
}

#[test]
fn test_records_survive_json_round_trip() {
    let file = write_document(DOCUMENT);
    let analysis = analyze_file(file.path()).expect("analysis should succeed");

    let serialized = serde_json::to_string(&analysis).expect("serialize");
    let restored: treemetrics::FileAnalysis =
        serde_json::from_str(&serialized).expect("deserialize");
    assert_eq!(restored, analysis);
}
