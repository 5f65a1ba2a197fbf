use crate::common::{TestApp, routes};

#[tokio::test]
async fn home_page_lists_every_park() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HOME).await;

    assert_eq!(res.status, 200);
    assert!(res.text.contains("Leprechaun Park"));
    assert!(res.text.contains("Paddy Park"));
    assert!(res.text.contains(&format!("href=\"/parks/{}\"", app.park_ids[0])));
}

#[tokio::test]
async fn park_detail_shows_name_and_location() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::park(app.park_ids[0])).await;

    assert_eq!(res.status, 200);
    assert!(res.text.contains("Leprechaun Park"));
    assert!(res.text.contains("Dublin"));
}

#[tokio::test]
async fn missing_park_is_404() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::park(9999)).await;

    assert_eq!(res.status, 404);
    assert!(res.text.contains("Park not found"));
}

#[tokio::test]
async fn non_numeric_park_id_is_404() {
    let app = TestApp::spawn().await;

    let res = app.get("/parks/leprechaun").await;

    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = TestApp::spawn().await;

    let res = app.get("/no/such/page").await;

    assert_eq!(res.status, 404);
    assert!(res.text.contains("Page not found"));
}

#[tokio::test]
async fn health_check_answers_ok() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HEALTH).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.text, "ok");
}

#[tokio::test]
async fn anonymous_nav_offers_login() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HOME).await;

    assert!(res.text.contains("href=\"/login\""));
    assert!(!res.text.contains("href=\"/logout\""));
}
