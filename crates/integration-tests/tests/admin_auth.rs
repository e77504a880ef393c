//! Admin sign-in and route guarding over the real admin router.

use overland_integration_tests::{TestClient, admin_app};

const DEMO_EMAIL: &str = "admin@overlandparts.ie";
const DEMO_PASSWORD: &str = "admin123";

async fn sign_in(client: &mut TestClient) {
    let resp = client
        .post_form(
            "/login",
            &[("email", DEMO_EMAIL), ("password", DEMO_PASSWORD)],
        )
        .await;
    resp.assert_redirect("/");
}

#[tokio::test]
async fn test_every_admin_page_requires_login() {
    let mut client = TestClient::new(admin_app());

    for path in [
        "/",
        "/products",
        "/products/new",
        "/categories",
        "/customers",
        "/orders",
        "/analytics",
        "/content/pages",
        "/settings",
    ] {
        let resp = client.get(path).await;
        resp.assert_redirect("/login");
    }
}

#[tokio::test]
async fn test_health_needs_no_login() {
    let mut client = TestClient::new(admin_app());

    let resp = client.get("/health").await;
    assert!(resp.status.is_success());
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_demo_login_reaches_the_dashboard() {
    let mut client = TestClient::new(admin_app());

    sign_in(&mut client).await;

    let page = client.get("/").await;
    assert!(page.status.is_success());
    assert!(page.body.contains("Admin User"));
    assert!(page.body.contains("Recent orders"));
}

#[tokio::test]
async fn test_wrong_credentials_bounce_back_with_one_code() {
    let mut client = TestClient::new(admin_app());

    let resp = client
        .post_form(
            "/login",
            &[("email", DEMO_EMAIL), ("password", "letmein")],
        )
        .await;
    resp.assert_redirect("/login?error=credentials");

    let resp = client
        .post_form(
            "/login",
            &[("email", "nobody@overlandparts.ie"), ("password", DEMO_PASSWORD)],
        )
        .await;
    resp.assert_redirect("/login?error=credentials");

    let page = client.get("/login?error=credentials").await;
    assert!(page.body.contains("Invalid email or password."));
}

#[tokio::test]
async fn test_signed_in_admin_skips_the_login_page() {
    let mut client = TestClient::new(admin_app());

    sign_in(&mut client).await;

    let resp = client.get("/login").await;
    resp.assert_redirect("/");
}

#[tokio::test]
async fn test_logout_ends_the_session() {
    let mut client = TestClient::new(admin_app());

    sign_in(&mut client).await;

    let resp = client.post_form("/logout", &[]).await;
    resp.assert_redirect("/login");

    let resp = client.get("/").await;
    resp.assert_redirect("/login");
}

#[tokio::test]
async fn test_table_pages_render_once_signed_in() {
    let mut client = TestClient::new(admin_app());

    sign_in(&mut client).await;

    let products = client.get("/products?search=brake").await;
    assert!(products.status.is_success());
    assert!(products.body.contains("Front Brake Pads Set"));

    let orders = client.get("/orders?status=shipped").await;
    assert!(orders.status.is_success());

    let customers = client.get("/customers?search=cork").await;
    assert!(customers.status.is_success());
    assert!(customers.body.contains("Sarah Connor"));

    let analytics = client.get("/analytics").await;
    assert!(analytics.status.is_success());

    let content = client.get("/content/pages").await;
    assert!(content.status.is_success());
}
