use adflow_wallet::{
    mock::{self, MOCK_PUBLIC_KEY},
    types::{DashboardSnapshot, UserProfile, Wallet},
};

// ── mock_user ──────────────────────────────────────────────────────────────────

#[test]
fn mock_user_derives_display_name() {
    let user = mock::mock_user("jane.doe@example.com");
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "jane.doe@example.com");
    assert_eq!(user.public_key, MOCK_PUBLIC_KEY);
}

#[test]
fn mock_user_handles_underscores() {
    assert_eq!(mock::mock_user("a.b_c@x.com").name, "A B C");
}

// ── Shape parity with backend payloads ─────────────────────────────────────────

#[test]
fn mock_wallet_uses_backend_field_names() {
    let v = serde_json::to_value(mock::mock_wallet()).unwrap();
    assert_eq!(v["publicKey"], MOCK_PUBLIC_KEY);
    assert_eq!(v["account"]["balances"][0]["asset_type"], "native");
    assert_eq!(v["account"]["balances"][0]["balance"], "1000.0000000");
    let back: Wallet = serde_json::from_value(v).unwrap();
    assert_eq!(back, mock::mock_wallet());
}

#[test]
fn mock_dashboard_uses_backend_field_names() {
    let v = serde_json::to_value(mock::mock_dashboard()).unwrap();
    assert_eq!(v["user"]["userType"], "advertiser");
    assert_eq!(v["summary"]["totalCampaigns"], 1);
    assert_eq!(v["summary"]["totalImpressions"], 1500);
    assert_eq!(v["campaigns"][0]["budget_xlm"], 100.0);
    assert_eq!(v["campaigns"][0]["total_revenue"], 0.05);
    assert!(v["sites"].as_array().unwrap().is_empty());
    let back: DashboardSnapshot = serde_json::from_value(v).unwrap();
    assert_eq!(back.summary.total_spent, 25.0);
}

#[test]
fn mock_profile_carries_stats() {
    let v = serde_json::to_value(mock::mock_profile()).unwrap();
    assert_eq!(v["user"]["name"], "John Doe");
    assert_eq!(v["stats"]["totalCampaigns"], 12);
    assert_eq!(v["stats"]["successRate"], 87.0);
    assert_eq!(v["stats"]["memberSince"], "Jan 2024");
    let back: UserProfile = serde_json::from_value(v).unwrap();
    assert_eq!(back.user.email, "john.doe@example.com");
}

// ── Connectivity predicate ─────────────────────────────────────────────────────

#[test]
fn predicate_matches_each_marker() {
    for msg in [
        "TypeError: Failed to fetch",
        "NetworkError when attempting to fetch resource.",
        "failed to fetch http://localhost:3000/wallet/a@x.com: connection refused",
    ] {
        assert!(mock::looks_like_connectivity_failure(msg), "{msg}");
    }
}

#[test]
fn predicate_is_case_sensitive_on_network_error() {
    assert!(!mock::looks_like_connectivity_failure("networkerror"));
    assert!(!mock::looks_like_connectivity_failure("connection reset"));
}
