use sea_orm::{EntityTrait, PaginatorTrait};

use park_booking::entity::message;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn contact_form_is_public() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::CONTACT).await;

    assert_eq!(res.status, 200);
    assert!(res.text.contains("name=\"message\""));
}

#[tokio::test]
async fn message_is_stored_and_acknowledged() {
    let app = TestApp::spawn().await;

    let res = app
        .post_form(
            routes::CONTACT,
            &[
                ("name", "Finn"),
                ("email", "finn@example.com"),
                ("message", "Is the giant's causeway open on Sundays?"),
            ],
        )
        .await;
    res.assert_redirect(routes::CONTACT);

    let page = app.get(routes::CONTACT).await;
    assert!(page.text.contains("Thanks for your message!"));

    let stored = message::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "finn@example.com");
}

#[tokio::test]
async fn incomplete_message_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_form(
            routes::CONTACT,
            &[("name", "Finn"), ("email", "not-an-email"), ("message", "hi")],
        )
        .await;
    res.assert_redirect(routes::CONTACT);

    assert_eq!(message::Entity::find().count(&app.db).await.unwrap(), 0);
}
