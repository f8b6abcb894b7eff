use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use opresult::StatusCode;

fn hash_of(status: &StatusCode) -> u64 {
    let mut hasher = DefaultHasher::new();
    status.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn classification_follows_http_range_without_override() {
    for code in [-1, 0, 100, 199, 300, 404, 500, 1000] {
        assert!(
            !StatusCode::custom(code, "X").is_success_code(),
            "code {code} should not classify as success"
        );
    }

    for code in [200, 201, 250, 299] {
        assert!(
            StatusCode::custom(code, "X").is_success_code(),
            "code {code} should classify as success"
        );
    }
}

#[test]
fn override_wins_over_the_range_rule() {
    let accepted = StatusCode::custom(700, "Accepted").with_success_override(true);
    assert!(accepted.is_success_code());

    let rejected = StatusCode::custom(204, "Rejected").with_success_override(false);
    assert!(!rejected.is_success_code());
}

#[test]
fn well_known_constants_match_the_table() {
    let expected = [
        (&StatusCode::SUCCESS, 200, "Success", true),
        (&StatusCode::WARNING, 202, "Warning", true),
        (&StatusCode::INVALID, 400, "Invalid", false),
        (&StatusCode::UNAUTHORIZED, 401, "Unauthorized", false),
        (&StatusCode::FORBIDDEN, 403, "Forbidden", false),
        (&StatusCode::NOT_FOUND, 404, "NotFound", false),
        (&StatusCode::FAILED, 500, "Failed", false),
    ];

    for (status, code, name, is_success) in expected {
        assert_eq!(status.code(), code);
        assert_eq!(status.name(), name);
        assert_eq!(status.is_success_code(), is_success);
    }
}

#[test]
fn equality_ignores_name_and_override() {
    let a = StatusCode::custom(5, "A");
    let b = StatusCode::custom(5, "B").with_success_override(true);

    assert_eq!(a, b);
    assert_ne!(a, StatusCode::custom(6, "A"));
    assert_eq!(StatusCode::SUCCESS, StatusCode::custom(200, "whatever"));
}

#[test]
fn hash_depends_only_on_code() {
    let a = StatusCode::custom(5, "A");
    let b = StatusCode::custom(5, "B").with_success_override(true);

    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn hash_set_membership_uses_code_identity() {
    let mut seen = HashSet::new();
    seen.insert(StatusCode::custom(5, "A"));

    assert!(seen.contains(&StatusCode::custom(5, "B")));
    assert!(!seen.contains(&StatusCode::custom(6, "A")));
}

#[test]
fn custom_round_trips_code_and_name() {
    let status = StatusCode::custom(418, "Teapot");

    assert_eq!(status.code(), 418);
    assert_eq!(status.name(), "Teapot");
    assert_eq!(status.to_string(), "Teapot");
}

#[test]
fn garbage_codes_are_accepted_silently() {
    let status = StatusCode::custom(i32::MIN, "");

    assert_eq!(status.code(), i32::MIN);
    assert_eq!(status.name(), "");
    assert!(!status.is_success_code());
}
