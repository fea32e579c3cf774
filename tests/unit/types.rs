use adflow_wallet::types::{DashboardSnapshot, LoginResponse, SessionUser, UserProfile};

#[test]
fn session_user_round_trips_public_key_name() {
    let user: SessionUser = serde_json::from_str(
        r#"{"id":"1","email":"a@x.com","name":"A","publicKey":"GKEY"}"#,
    )
    .unwrap();
    assert_eq!(user.public_key, "GKEY");
    let v = serde_json::to_value(&user).unwrap();
    assert_eq!(v["publicKey"], "GKEY");
}

#[test]
fn login_response_with_user() {
    let r: LoginResponse = serde_json::from_str(
        r#"{"message":"ok","token":"t","user":{"id":5,"email":"a@x.com","name":"A","publicKey":"G"}}"#,
    )
    .unwrap();
    assert_eq!(r.user.unwrap().id, "5");
    assert!(r.extra.is_empty());
}

#[test]
fn dashboard_tolerates_missing_summary_and_sites() {
    let d: DashboardSnapshot = serde_json::from_str(
        r#"{"user":{"id":"1","email":"a@x.com","publicKey":"G"},"campaigns":[]}"#,
    )
    .unwrap();
    assert_eq!(d.summary.total_campaigns, 0);
    assert!(d.sites.is_empty());
}

#[test]
fn profile_from_dashboard_payload_has_no_stats() {
    let p: UserProfile = serde_json::from_str(
        r#"{"user":{"id":"1","email":"a@x.com","publicKey":"G"},"campaigns":[],"summary":{}}"#,
    )
    .unwrap();
    assert!(p.stats.is_none());
    assert!(p.user.bio.is_none());
}

#[test]
fn campaign_rejects_non_numeric_budget() {
    let res: Result<adflow_wallet::Campaign, _> = serde_json::from_str(
        r#"{"id":"1","title":"T","budget_xlm":"lots","active":true,"created_at":""}"#,
    );
    assert!(res.is_err());
}
