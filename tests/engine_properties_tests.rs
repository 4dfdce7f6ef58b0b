//! Behavioural properties of the rule engine over whole documents
use command_doc_validator::validation::{evaluate, validate_file, Mode, Rule, Severity};
use command_doc_validator::Document;
use std::io::Write;

const VALID_DOC: &str = r#"# Deploy Service

## Overview
Deploys the service to the staging cluster and verifies the rollout.

## Instructions
Run the deploy script with the target environment and wait for health checks.

## Details
The script uses the current branch and tags the image before pushing it.
Rollback is manual.
"#;

fn count(doc: &str, mode: Mode, rule: Rule) -> usize {
    evaluate(&Document::from_text(doc), mode)
        .findings
        .iter()
        .filter(|f| f.rule == rule)
        .count()
}

#[test]
fn test_missing_title_is_one_blocking_finding() {
    let docs = [
        "",
        "plain text only",
        "#hashtag\nno title here",
        "  # indented heading\nbody",
    ];

    for text in docs {
        let result = evaluate(&Document::from_text(text), Mode::lenient());
        let titles: Vec<_> = result
            .findings
            .iter()
            .filter(|f| f.rule == Rule::MissingTitle)
            .collect();
        assert_eq!(titles.len(), 1, "document {:?}", text);
        assert_eq!(titles[0].severity, Severity::Blocking);
        assert!(!result.is_valid());
    }
}

#[test]
fn test_minimum_length_boundary() {
    for len in [0, 1, 50, 99] {
        let text = "a".repeat(len);
        assert_eq!(count(&text, Mode::lenient(), Rule::TooShort), 1, "len {}", len);
    }
    for len in [100, 101, 500] {
        let text = format!("\n\n{}\n\n", "a".repeat(len));
        assert_eq!(count(&text, Mode::lenient(), Rule::TooShort), 0, "len {}", len);
    }
}

#[test]
fn test_strict_mode_is_monotonic() {
    let docs = [
        VALID_DOC,
        "# Tiny",
        "# Title\n## Empty\n",
        "Steps to follow: step 1, step 2",
        "# Integration\n## Prerequisites\nAn API token\n## Steps\nCall it",
        "# Release workflow\n\n## Purpose\nShip.\n\n## Steps\n- build\n- tag\n\n```sh\nmake\n```\n",
    ];

    for text in docs {
        let doc = Document::from_text(text);
        if evaluate(&doc, Mode::strict()).is_valid() {
            assert!(evaluate(&doc, Mode::lenient()).is_valid(), "document {:?}", text);
        }
    }
}

#[test]
fn test_well_formed_document_lenient_valid_strict_style_advisories() {
    let doc = Document::from_text(VALID_DOC);

    let lenient = evaluate(&doc, Mode::lenient());
    assert!(lenient.is_valid(), "{:?}", lenient.findings);
    assert_eq!(lenient.blocking().count(), 0);

    // Strict mode adds the two style advisories, which fail the strict verdict
    let strict = evaluate(&doc, Mode::strict());
    let rules: Vec<Rule> = strict.findings.iter().map(|f| f.rule).collect();
    assert_eq!(rules, vec![Rule::NoBullets, Rule::NoCodeExample]);
    assert_eq!(strict.blocking().count(), 0);
    assert!(!strict.is_valid());
}

#[test]
fn test_fully_compliant_document_passes_strict() {
    let text = format!(
        "{}\n## Usage\n- `deploy staging`\n- `deploy prod`\n\n```sh\n./deploy.sh staging\n```\n",
        VALID_DOC
    );
    let result = evaluate(&Document::from_text(&text), Mode::strict());
    assert!(result.is_valid(), "{:?}", result.findings);
    assert!(result.findings.is_empty());
}

#[test]
fn test_empty_section_fails_both_modes() {
    let text = format!("{}## Details\n\n## Next\n", VALID_DOC);

    for mode in [Mode::lenient(), Mode::strict()] {
        let result = evaluate(&Document::from_text(&text), mode);
        let empty: Vec<_> = result
            .findings
            .iter()
            .filter(|f| f.rule == Rule::EmptySection)
            .collect();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].severity, Severity::Blocking);
        assert!(!result.is_valid());
    }
}

#[test]
fn test_section_with_whitespace_body_before_text_is_populated() {
    let text = "# Title here\n## Notes\n   \n\nreal content\n";
    assert_eq!(count(text, Mode::lenient(), Rule::EmptySection), 0);
}

#[test]
fn test_workflow_without_success_criteria_is_advisory() {
    let text = "# Setup Tool\n\n## Overview\nInstalls and runs the tool.\n\n\
                ## Instructions\nStep 1: install\nStep 2: run\n";

    for mode in [Mode::lenient(), Mode::strict()] {
        let result = evaluate(&Document::from_text(text), mode);
        assert!(result.classification.is_some_and(|c| c.workflow));

        let criteria: Vec<_> = result
            .findings
            .iter()
            .filter(|f| f.rule == Rule::MissingSuccessCriteria)
            .collect();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].severity, Severity::Advisory);
    }
}

#[test]
fn test_crlf_line_endings_match_lf() {
    let short_title = "# Tool\n\n## Overview\nx\n";
    let ninety_nine = "123456789\n".repeat(10);

    for text in [short_title, ninety_nine.as_str(), VALID_DOC] {
        let lf = evaluate(&Document::from_text(text), Mode::strict());
        let crlf = evaluate(&Document::from_text(text.replace('\n', "\r\n")), Mode::strict());
        assert_eq!(lf.findings, crlf.findings, "document {:?}", text);
    }

    assert_eq!(count(short_title, Mode::lenient(), Rule::ShortTitle), 1);
    assert_eq!(count(&short_title.replace('\n', "\r\n"), Mode::lenient(), Rule::ShortTitle), 1);
    assert_eq!(count(&ninety_nine.replace('\n', "\r\n"), Mode::lenient(), Rule::TooShort), 1);
}

#[test]
fn test_bare_dash_line_is_not_a_bullet() {
    let text = format!("-\n{}", "line\n".repeat(11));
    assert_eq!(count(&text, Mode::strict(), Rule::NoBullets), 1);
}

#[test]
fn test_nonexistent_path_yields_single_finding() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = validate_file(dir.path().join("missing.md"), Mode::lenient());

    assert!(!result.is_valid());
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].rule, Rule::NotFound);
    assert!(result.findings[0].message.contains("missing.md"));
    assert!(result.classification.is_none());
}

#[test]
fn test_validate_file_runs_checks() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(VALID_DOC.as_bytes()).expect("write doc");

    let result = validate_file(file.path(), Mode::lenient());
    assert!(result.checks_ran());
    assert!(result.is_valid());
}
