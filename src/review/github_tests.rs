use super::*;

fn reviewer() -> GithubReviewer {
    GithubReviewer::new("https://github.example.com/api/v3/", "acme/shop", 42, "secret").unwrap()
}

#[test]
fn endpoints() {
    let reviewer = reviewer();
    assert_eq!(
        reviewer.reviews_url(),
        "https://github.example.com/api/v3/repos/acme/shop/pulls/42/reviews"
    );
    assert_eq!(
        reviewer.comments_url(),
        "https://github.example.com/api/v3/repos/acme/shop/issues/42/comments"
    );
}

#[test]
fn review_payload_anchors_comments_on_new_side() {
    let comments = vec![ReviewComment {
        path: "src/cart.ts".to_string(),
        line: 6,
        body: "Remove console output".to_string(),
    }];

    let body = GithubReviewer::review_body(&comments, "1 violation").unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["event"], "COMMENT");
    assert_eq!(json["body"], "1 violation");
    assert_eq!(json["comments"][0]["path"], "src/cart.ts");
    assert_eq!(json["comments"][0]["line"], 6);
    assert_eq!(json["comments"][0]["side"], "RIGHT");
}

#[test]
fn request_carries_bearer_token() {
    let reviewer = reviewer();
    let request = reviewer
        .request(&reviewer.comments_url(), GithubReviewer::comment_body("hi").unwrap())
        .build()
        .unwrap();

    assert_eq!(request.headers()[AUTHORIZATION], "Bearer secret");
    assert_eq!(request.headers()[USER_AGENT], "doc-guard");
    assert_eq!(
        request.body().and_then(|b| b.as_bytes()),
        Some(br#"{"body":"hi"}"#.as_slice())
    );
}
