use crate::errors::Error;

#[test]
fn test_invalid_repository_message_names_the_expected_form() {
    let error = Error::InvalidRepository("just-a-name".to_string());

    let message = error.to_string();
    assert!(message.contains("owner/repo"), "message was: {}", message);
    assert!(message.contains("just-a-name"), "message was: {}", message);
}

#[test]
fn test_unsupported_remote_url_message_lists_supported_forms() {
    let error = Error::UnsupportedRemoteUrl("ftp://example.com/x".to_string());

    let message = error.to_string();
    assert!(message.contains("ftp://example.com/x"));
    assert!(message.contains("https://github.com/owner/repo[.git]"));
    assert!(message.contains("git@github.com:owner/repo[.git]"));
    assert!(message.contains("ssh://git@github.com/owner/repo[.git]"));
}

#[test]
fn test_git_remote_message_carries_detail() {
    let error = Error::GitRemote("No origin remote found".to_string());

    assert_eq!(
        error.to_string(),
        "Failed to read the git remote: No origin remote found"
    );
}
