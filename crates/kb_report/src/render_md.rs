// crates/kb_report/src/render_md.rs
//
// Deterministic Markdown renderer.
// Section order: Control → Node Type → Sections (counts, results) → rule,
// repeated per control, then Summary. Pure: no I/O, no clock, no locale.
//
// The output is a list of lines joined with '\n'. The per-control rule is a
// single element "\n---\n", so it reads as blank / --- / blank once joined,
// which gives one more blank line before the rule than the other separators.
// Consumers diff against this layout; keep it.

use log::debug;

use kb_core::text::{collapse_newlines, truncate_with_ellipsis, REASON_MAX_CHARS};
use kb_core::{CheckResult, Control, Document, Test, Totals};

use crate::ReportError;

/// Element emitted after every control.
pub const RULE_BLOCK: &str = "\n---\n";

/// Rendered report text and the totals accumulated while rendering it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub totals: Totals,
}

/// Render every line of the report, threading the totals through the pass.
pub fn render_lines(doc: &Document) -> Result<(Vec<String>, Totals), ReportError> {
    let mut lines = Vec::with_capacity(estimate_lines(doc));
    let mut totals = Totals::zero();

    for control in &doc.controls {
        debug!("rendering control {} ({} tests)", control.id, control.tests.len());
        push_control(&mut lines, &mut totals, control)?;
    }
    push_summary(&mut lines, &totals);

    Ok((lines, totals))
}

/// Render the whole report as one string (lines joined with '\n').
pub fn render_markdown(doc: &Document) -> Result<Rendered, ReportError> {
    let (lines, totals) = render_lines(doc)?;
    Ok(Rendered { text: lines.join("\n"), totals })
}

fn push_control(lines: &mut Vec<String>, totals: &mut Totals, c: &Control) -> Result<(), ReportError> {
    lines.push(format!("# Control: {} ({})", c.text, c.id));
    lines.push(format!("**Node Type:** {}", c.node_type));
    lines.push(String::new());

    for test in &c.tests {
        push_test(lines, test);
        totals.add(&test.counts)?;
        for r in &test.results {
            push_result(lines, r);
        }
    }

    lines.push(RULE_BLOCK.to_string());
    Ok(())
}

fn push_test(lines: &mut Vec<String>, t: &Test) {
    lines.push(format!("## Section {}: {}", t.section, t.desc));
    lines.push(format!("- **Pass:** {}", t.counts.pass));
    lines.push(format!("- **Fail:** {}", t.counts.fail));
    lines.push(format!("- **Warn:** {}", t.counts.warn));
    lines.push(format!("- **Info:** {}", t.counts.info));
    lines.push(String::new());
}

fn push_result(lines: &mut Vec<String>, r: &CheckResult) {
    lines.push(format!("### {} - {}", r.test_number, r.test_desc));
    lines.push(format!("- **Status:** {}", r.status));
    if let Some(reason) = r.reason.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("- **Reason:** {}", truncate_with_ellipsis(reason, REASON_MAX_CHARS)));
    }
    if let Some(rem) = r.remediation.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("- **Remediation:** {}", collapse_newlines(rem)));
    }
    lines.push(String::new());
}

fn push_summary(lines: &mut Vec<String>, totals: &Totals) {
    lines.push("# Summary".to_string());
    lines.push(format!("- **Total Passed:** {}", totals.pass));
    lines.push(format!("- **Total Failed:** {}", totals.fail));
    lines.push(format!("- **Total Warnings:** {}", totals.warn));
    lines.push(format!("- **Total Info:** {}", totals.info));
    lines.push(String::new());
}

fn estimate_lines(doc: &Document) -> usize {
    4 * doc.controls.len() + 6 * doc.test_count() + 5 * doc.result_count() + 6
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_core::Counts;

    fn check(n: &str, reason: Option<&str>, remediation: Option<&str>) -> CheckResult {
        CheckResult {
            test_number: n.into(),
            test_desc: format!("desc {n}"),
            status: "FAIL".into(),
            reason: reason.map(Into::into),
            remediation: remediation.map(Into::into),
        }
    }

    fn doc_with(results: Vec<CheckResult>) -> Document {
        Document {
            controls: vec![Control {
                id: "1".into(),
                text: "Master Node".into(),
                node_type: "master".into(),
                tests: vec![Test {
                    section: "1.1".into(),
                    desc: "API Server".into(),
                    counts: Counts { pass: 2, fail: 1, warn: 0, info: 0 },
                    results,
                }],
            }],
        }
    }

    #[test]
    fn empty_document_is_summary_only() {
        let out = render_markdown(&Document::default()).unwrap();
        assert_eq!(
            out.text,
            "# Summary\n- **Total Passed:** 0\n- **Total Failed:** 0\n- **Total Warnings:** 0\n- **Total Info:** 0\n"
        );
        assert_eq!(out.totals, Totals::zero());
    }

    #[test]
    fn full_layout_for_one_control() {
        let out = render_markdown(&doc_with(vec![check("1.1.1", Some("short reason"), Some("a\nb"))])).unwrap();
        let expected = "\
# Control: Master Node (1)
**Node Type:** master

## Section 1.1: API Server
- **Pass:** 2
- **Fail:** 1
- **Warn:** 0
- **Info:** 0

### 1.1.1 - desc 1.1.1
- **Status:** FAIL
- **Reason:** short reason
- **Remediation:** a b


---

# Summary
- **Total Passed:** 2
- **Total Failed:** 1
- **Total Warnings:** 0
- **Total Info:** 0
";
        assert_eq!(out.text, expected);
    }

    #[test]
    fn absent_or_empty_optionals_emit_no_line() {
        let (lines, _) = render_lines(&doc_with(vec![
            check("1.1.1", None, None),
            check("1.1.2", Some(""), Some("")),
        ]))
        .unwrap();
        assert!(!lines.iter().any(|l| l.starts_with("- **Reason:**")));
        assert!(!lines.iter().any(|l| l.starts_with("- **Remediation:**")));
        assert_eq!(lines.iter().filter(|l| l.starts_with("- **Status:**")).count(), 2);
    }

    #[test]
    fn long_reason_is_cut_at_500_chars() {
        let long = "x".repeat(501);
        let (lines, _) = render_lines(&doc_with(vec![check("1.1.1", Some(&long), None)])).unwrap();
        let line = lines.iter().find(|l| l.starts_with("- **Reason:** ")).unwrap();
        let body = line.strip_prefix("- **Reason:** ").unwrap();
        assert_eq!(body, format!("{}...", "x".repeat(500)));
    }

    #[test]
    fn rule_block_is_a_single_element() {
        let (lines, _) = render_lines(&doc_with(vec![])).unwrap();
        assert_eq!(lines.iter().filter(|l| l.as_str() == RULE_BLOCK).count(), 1);
        assert_eq!(lines[lines.len() - 7], RULE_BLOCK);
    }

    #[test]
    fn overflowing_totals_fail() {
        let mut doc = doc_with(vec![]);
        let mut second = doc.controls[0].clone();
        second.tests[0].counts.pass = u64::MAX;
        doc.controls.push(second);
        assert!(matches!(render_lines(&doc), Err(ReportError::Core(_))));
    }
}
