//! Profile settings over the real storefront router.

use overland_integration_tests::{TestClient, storefront_app};

async fn signed_in_client() -> TestClient {
    let mut client = TestClient::new(storefront_app());
    let resp = client
        .post_form(
            "/account/login",
            &[
                ("email", "customer@example.com"),
                ("password", "password123"),
            ],
        )
        .await;
    resp.assert_redirect("/account");
    client
}

#[tokio::test]
async fn test_profile_update_merges_into_the_account() {
    let mut client = signed_in_client().await;

    let resp = client
        .post_form(
            "/account/settings/profile",
            &[("first_name", "Seán"), ("phone", "+353 87 111 2222")],
        )
        .await;
    resp.assert_redirect("/account/settings?success=profile");

    // Untouched fields keep their old values; the session copy refreshed.
    let page = client.get("/account").await;
    assert!(page.body.contains("Seán"));

    let settings = client.get("/account/settings?success=profile").await;
    assert!(settings.body.contains("Smith"));
    assert!(settings.body.contains("+353 87 111 2222"));
}

#[tokio::test]
async fn test_empty_fields_leave_the_profile_alone() {
    let mut client = signed_in_client().await;

    let resp = client
        .post_form(
            "/account/settings/profile",
            &[("first_name", ""), ("last_name", "   ")],
        )
        .await;
    resp.assert_redirect("/account/settings?success=profile");

    let page = client.get("/account").await;
    assert!(page.body.contains("John"));
}

#[tokio::test]
async fn test_bad_date_of_birth_is_rejected() {
    let mut client = signed_in_client().await;

    let resp = client
        .post_form(
            "/account/settings/profile",
            &[("date_of_birth", "15/06/1985")],
        )
        .await;
    resp.assert_redirect("/account/settings?error=invalid_date");

    let resp = client
        .post_form(
            "/account/settings/profile",
            &[("date_of_birth", "1985-06-15")],
        )
        .await;
    resp.assert_redirect("/account/settings?success=profile");
}

#[tokio::test]
async fn test_account_sections_render_for_a_signed_in_customer() {
    let mut client = signed_in_client().await;

    for path in [
        "/account/orders",
        "/account/addresses",
        "/account/wishlist",
        "/account/payment-methods",
        "/account/rewards",
        "/account/notifications",
        "/account/settings",
    ] {
        let page = client.get(path).await;
        assert!(page.status.is_success(), "{path} failed: {}", page.status);
    }
}
