use super::*;

#[test]
fn delete_post_endpoint_formats_expected_path() {
    assert_eq!(delete_post_endpoint("p-123"), "/api/posts/delete/p-123");
}

#[test]
fn search_posts_endpoint_passes_plain_queries_through() {
    assert_eq!(search_posts_endpoint("rust"), "/api/posts/search/rust");
}

#[test]
fn search_posts_endpoint_escapes_spaces_and_punctuation() {
    assert_eq!(
        search_posts_endpoint("machine learning"),
        "/api/posts/search/machine%20learning"
    );
    assert_eq!(search_posts_endpoint("a/b?c"), "/api/posts/search/a%2Fb%3Fc");
}

#[test]
fn search_posts_endpoint_escapes_non_ascii() {
    assert_eq!(search_posts_endpoint("café"), "/api/posts/search/caf%C3%A9");
}

#[test]
fn request_failed_message_formats_operation_and_status() {
    assert_eq!(
        request_failed_message("post list", 500),
        "post list request failed: 500"
    );
    assert_eq!(
        request_failed_message("draft generation", 503),
        "draft generation request failed: 503"
    );
}
