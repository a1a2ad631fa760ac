mod common;

use common::{StubRepository, project};
use folio_portal::models::{Project, ProjectCategory};
use tokio::net::TcpListener;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
}

/// Spawns the real HTTP server on an ephemeral port, backed by the stub
/// repository and mocks, and returns its base address. Exercises the full
/// stack (listener, middleware layers, routing) over real sockets.
async fn spawn_app(repo: StubRepository) -> TestApp {
    let router = folio_portal::create_router(common::state(repo));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address }
}

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app(StubRepository::default()).await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_anonymous_admin_is_redirected() {
    let app = spawn_app(StubRepository::default()).await;
    let client = no_redirect_client();

    let response = client
        .get(format!("{}/admin/projects", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 303);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/admin/login"
    );
}

#[tokio::test]
async fn test_login_then_browse_admin() {
    let app = spawn_app(StubRepository::default()).await;
    let client = reqwest::Client::new();

    // 1. Exchange credentials for the session cookie.
    let response = client
        .post(format!("{}/admin/login", app.address))
        .json(&serde_json::json!({
            "email": "owner@example.com",
            "password": "local-test-password"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("login should set the session cookie")
        .to_str()
        .unwrap();
    // "admin_session=...; HttpOnly; ..." -> carry just the pair back.
    let cookie_pair = set_cookie.split(';').next().unwrap().to_string();
    assert!(cookie_pair.starts_with("admin_session="));

    // 2. The cookie opens the admin area.
    let response = client
        .get(format!("{}/admin/projects", app.address))
        .header("cookie", cookie_pair)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_public_catalog_flow() {
    let repo = StubRepository {
        projects: vec![
            project("rebrand", ProjectCategory::BrandIdentity, 0),
            project("launch-film", ProjectCategory::Motion, 1),
            project("poster-set", ProjectCategory::Illustrations, 2),
        ],
        ..Default::default()
    };
    let app = spawn_app(repo).await;
    let client = reqwest::Client::new();

    // Full listing preserves order.
    let all: Vec<Project> = client
        .get(format!("{}/projects", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["rebrand", "launch-film", "poster-set"]);

    // The merged tab picks up the illustration.
    let merged: Vec<Project> = client
        .get(format!(
            "{}/projects?category=illustrations_decks_flyers",
            app.address
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].slug, "poster-set");

    // Badges come back capped (default cap 4, counts below it).
    let counts: serde_json::Value = client
        .get(format!("{}/projects/counts", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(counts["all"], 3);
    assert_eq!(counts["brand_identity"], 1);
    assert_eq!(counts["motion"], 1);
    assert_eq!(counts["illustrations_decks_flyers"], 1);
}
