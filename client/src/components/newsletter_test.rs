use super::*;

#[test]
fn subscribe_href_addresses_owner_with_encoded_subject() {
    let href = subscribe_href("kassem@example.com");
    assert!(href.starts_with("mailto:kassem@example.com?"));
    assert!(href.contains("subject=Newsletter%20subscription"));
    assert!(!href.contains(' '));
}
