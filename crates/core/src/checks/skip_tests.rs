use crate::checks::skip::has_skip_marker;

#[test]
fn test_all_marker_forms_are_recognized() {
    let marked = vec![
        "[skip issue-warden] hotfix",
        "[issue-warden skip] hotfix",
        "[skip-issue-warden] hotfix",
        "[issue-warden-skip] hotfix",
        "fix: patch prod [skip issue-warden]",
        "middle [issue-warden skip] of text",
    ];

    for text in marked {
        assert!(has_skip_marker(text), "'{}' should carry a marker", text);
    }
}

#[test]
fn test_markers_are_case_insensitive() {
    assert!(has_skip_marker("[SKIP ISSUE-WARDEN] emergency"));
    assert!(has_skip_marker("[Issue-Warden Skip] emergency"));
    assert!(has_skip_marker("[Skip-Issue-Warden]"));
}

#[test]
fn test_unmarked_text_is_not_skipped() {
    let unmarked = vec![
        "",
        "feature/123-login",
        "skip issue-warden",           // no brackets
        "[skip]",                      // no tool name
        "[skip other-tool]",           // different tool
        "[issue-warden]",              // no skip keyword
        "[skip  issue-warden]",        // double space breaks the literal
    ];

    for text in unmarked {
        assert!(!has_skip_marker(text), "'{}' should not carry a marker", text);
    }
}
