use super::*;
use crate::state::test_helpers::sample_profile_json;

fn sample_profile() -> Profile {
    serde_json::from_value(sample_profile_json()).unwrap()
}

#[test]
fn pending_renders_loading() {
    let html = profile_fragment(&Remote::Pending).into_string();
    assert_eq!(html, "<p>Loading...</p>");
}

#[test]
fn failed_renders_message_in_red() {
    let html = profile_fragment(&Remote::Failed(PROFILE_ERROR.into())).into_string();
    assert!(html.contains("color: red"));
    assert!(html.contains("Failed to fetch profile"));
}

#[test]
fn loaded_renders_every_field() {
    let html = profile_fragment(&Remote::Loaded(sample_profile())).into_string();
    assert!(html.contains("<h1>Account Profile</h1>"));
    assert!(html.contains("<strong>Name:</strong> Ada Lovelace"));
    assert!(html.contains("<strong>Email:</strong> ada@example.test"));
    assert!(html.contains("<strong>Date of Birth:</strong> 1990-12-10"));
    assert!(html.contains("<strong>Country:</strong> UK"));
    assert!(html.contains("<strong>Gender:</strong> Female"));
    assert!(html.contains("<strong>Account ID:</strong> 42"));
    assert!(html.contains("<strong>Start Date:</strong> 2024-01-15"));
}

#[test]
fn gender_zero_renders_male() {
    let profile = Profile { gender: 0, ..sample_profile() };
    let html = profile_fragment(&Remote::Loaded(profile)).into_string();
    assert!(html.contains("<strong>Gender:</strong> Male"));
}

#[test]
fn out_of_range_gender_renders_female() {
    for code in [-1, 2, 99] {
        let profile = Profile { gender: code, ..sample_profile() };
        let html = profile_fragment(&Remote::Loaded(profile)).into_string();
        assert!(html.contains("<strong>Gender:</strong> Female"), "code {code}");
    }
}

#[test]
fn profile_text_is_escaped() {
    let profile = Profile { first_name: "<script>".into(), ..sample_profile() };
    let html = profile_fragment(&Remote::Loaded(profile)).into_string();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn page_shell_starts_loading_and_points_at_fragment() {
    let html = account_page("/account/42/profile").into_string();
    assert!(html.contains("<p>Loading...</p>"));
    assert!(html.contains(r#"data-src="/account/42/profile""#));
    assert!(html.contains("<title>Account Profile</title>"));
}
