//! Customer login and logout over the real storefront router.

use overland_integration_tests::{TestClient, storefront_app};

const DEMO_EMAIL: &str = "customer@example.com";
const DEMO_PASSWORD: &str = "password123";
const SESSION_COOKIE: &str = "op_session";

async fn sign_in(client: &mut TestClient) {
    let resp = client
        .post_form(
            "/account/login",
            &[("email", DEMO_EMAIL), ("password", DEMO_PASSWORD)],
        )
        .await;
    resp.assert_redirect("/account");
}

#[tokio::test]
async fn test_account_pages_require_login() {
    let mut client = TestClient::new(storefront_app());

    for path in ["/account", "/account/orders", "/account/settings"] {
        let resp = client.get(path).await;
        resp.assert_redirect("/account/login");
    }
}

#[tokio::test]
async fn test_demo_login_reaches_the_overview() {
    let mut client = TestClient::new(storefront_app());

    sign_in(&mut client).await;
    assert!(client.has_cookie(SESSION_COOKIE));

    let page = client.get("/account").await;
    assert!(page.status.is_success());
    assert!(page.body.contains("John"));
}

#[tokio::test]
async fn test_wrong_password_is_one_generic_error() {
    let mut client = TestClient::new(storefront_app());

    let resp = client
        .post_form(
            "/account/login",
            &[("email", DEMO_EMAIL), ("password", "wrong-password")],
        )
        .await;
    resp.assert_redirect("/account/login?error=credentials");

    // Unknown address collapses into the same code.
    let resp = client
        .post_form(
            "/account/login",
            &[("email", "nobody@example.com"), ("password", DEMO_PASSWORD)],
        )
        .await;
    resp.assert_redirect("/account/login?error=credentials");

    let page = client.get("/account/login?error=credentials").await;
    assert!(page.body.contains("Invalid email or password."));
}

#[tokio::test]
async fn test_logout_returns_to_login_and_keeps_cart() {
    let mut client = TestClient::new(storefront_app());

    sign_in(&mut client).await;
    client.post_form_htmx("/cart/add", &[("part_id", "1")]).await;

    let resp = client.post_form("/account/logout", &[]).await;
    resp.assert_redirect("/account/login");

    let resp = client.get("/account").await;
    resp.assert_redirect("/account/login");

    // Only the login state is gone. The cart belongs to the browser
    // session, not the account, and survives signing out.
    let count = client.get("/cart/count").await;
    assert_eq!(count.body.trim(), "1");
}

#[tokio::test]
async fn test_tampered_session_cookie_reads_as_signed_out() {
    let mut client = TestClient::new(storefront_app());

    sign_in(&mut client).await;
    client.tamper_cookie(SESSION_COOKIE);

    let resp = client.get("/account").await;
    resp.assert_redirect("/account/login");
}

#[tokio::test]
async fn test_registration_signs_the_customer_in() {
    let mut client = TestClient::new(storefront_app());

    let resp = client
        .post_form(
            "/account/register",
            &[
                ("first_name", "Aoife"),
                ("last_name", "Byrne"),
                ("email", "aoife@example.com"),
                ("password", "rover-defender-90"),
                ("password_confirm", "rover-defender-90"),
            ],
        )
        .await;
    resp.assert_redirect("/account");

    let page = client.get("/account").await;
    assert!(page.body.contains("Aoife"));
}

#[tokio::test]
async fn test_registration_rejects_taken_email_and_mismatch() {
    let mut client = TestClient::new(storefront_app());

    let resp = client
        .post_form(
            "/account/register",
            &[
                ("first_name", "John"),
                ("last_name", "Smith"),
                ("email", DEMO_EMAIL),
                ("password", "rover-defender-90"),
                ("password_confirm", "rover-defender-90"),
            ],
        )
        .await;
    resp.assert_redirect("/account/register?error=email_taken");

    let resp = client
        .post_form(
            "/account/register",
            &[
                ("first_name", "John"),
                ("last_name", "Smith"),
                ("email", "new@example.com"),
                ("password", "rover-defender-90"),
                ("password_confirm", "different"),
            ],
        )
        .await;
    resp.assert_redirect("/account/register?error=password_mismatch");
}
