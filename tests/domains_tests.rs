use intentscope::domains::{
    matches_target_domain, normalize_domain, normalize_hostname, DomainError,
};

fn targets(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn strips_scheme_path_and_port() {
    assert_eq!(
        normalize_domain("https://WWW.YouTube.com/watch?v=abc").unwrap(),
        "www.youtube.com"
    );
    assert_eq!(normalize_domain("http://reddit.com/r/rust").unwrap(), "reddit.com");
    assert_eq!(normalize_domain("localhost:3000").unwrap(), "localhost");
    assert_eq!(normalize_domain("  gmail.com  ").unwrap(), "gmail.com");
}

#[test]
fn rejects_empty_and_invalid_input() {
    assert_eq!(normalize_domain(""), Err(DomainError::Empty));
    assert_eq!(normalize_domain("   "), Err(DomainError::Empty));
    assert_eq!(normalize_domain("not a domain!"), Err(DomainError::Invalid));
    // bare single-label hosts other than localhost are rejected
    assert_eq!(normalize_domain("intranet"), Err(DomainError::Invalid));
    assert!(normalize_hostname("bad host").is_none());
}

#[test]
fn matches_exact_and_subdomains_only() {
    let list = targets(&["google.com"]);
    assert!(matches_target_domain("google.com", &list));
    assert!(matches_target_domain("mail.google.com", &list));
    assert!(matches_target_domain("https://mail.google.com/inbox", &list));
    assert!(!matches_target_domain("evilgoogle.com", &list));
    assert!(!matches_target_domain("google.com.evil.net", &list));
}

#[test]
fn target_entries_are_normalized_before_matching() {
    let list = targets(&["https://YouTube.com/"]);
    assert!(matches_target_domain("www.youtube.com", &list));
}

#[test]
fn unparseable_sides_never_match() {
    assert!(!matches_target_domain("", &targets(&["google.com"])));
    assert!(!matches_target_domain("google.com", &targets(&["!!"])));
}
