use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use park_booking::entity::user;
use park_booking::utils::hash::verify_password;

use crate::common::{CUSTOMER_EMAIL, CUSTOMER_PASSWORD, TestApp, routes};

mod registration {
    use super::*;

    #[tokio::test]
    async fn new_user_is_sent_to_login_with_a_confirmation() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::REGISTER,
                &[
                    ("email", "new@example.com"),
                    ("name", "Grace"),
                    ("last_name", "O'Malley"),
                    ("password", "pirate-queen"),
                ],
            )
            .await;
        res.assert_redirect(routes::LOGIN);

        let page = app.get(routes::LOGIN).await;
        assert!(page.text.contains("Account created. Please log in."));

        let stored = user::Entity::find()
            .filter(user::Column::Email.eq("new@example.com"))
            .one(&app.db)
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(stored.name, "Grace");
        assert_ne!(stored.password, "pirate-queen");
        assert!(verify_password("pirate-queen", &stored.password).unwrap());
    }

    #[tokio::test]
    async fn registration_does_not_log_the_user_in() {
        let app = TestApp::spawn().await;

        app.post_form(
            routes::REGISTER,
            &[
                ("email", "new@example.com"),
                ("name", "Grace"),
                ("last_name", "O'Malley"),
                ("password", "pirate-queen"),
            ],
        )
        .await;

        app.get(routes::PROFILE).await.assert_redirect(routes::LOGIN);
    }

    #[tokio::test]
    async fn duplicate_email_keeps_the_original_account() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::REGISTER,
                &[
                    ("email", CUSTOMER_EMAIL),
                    ("name", "Impostor"),
                    ("last_name", "Person"),
                    ("password", "different-password"),
                ],
            )
            .await;
        res.assert_redirect(routes::REGISTER);

        let page = app.get(routes::REGISTER).await;
        assert!(
            page.text
                .contains("This email address already exists! Please try again!")
        );

        let matching = user::Entity::find()
            .filter(user::Column::Email.eq(CUSTOMER_EMAIL))
            .count(&app.db)
            .await
            .unwrap();
        assert_eq!(matching, 1);

        let original = user::Entity::find()
            .filter(user::Column::Email.eq(CUSTOMER_EMAIL))
            .one(&app.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(original.name, "Test");
        assert!(verify_password(CUSTOMER_PASSWORD, &original.password).unwrap());
    }

    #[tokio::test]
    async fn missing_fields_are_flashed_back_to_the_form() {
        let app = TestApp::spawn().await;
        let before = user::Entity::find().count(&app.db).await.unwrap();

        let res = app
            .post_form(
                routes::REGISTER,
                &[("email", "half@example.com"), ("password", "secret")],
            )
            .await;
        res.assert_redirect(routes::REGISTER);

        let after = user::Entity::find().count(&app.db).await.unwrap();
        assert_eq!(before, after);
    }
}

mod login {
    use super::*;

    #[tokio::test]
    async fn valid_credentials_open_the_profile() {
        let app = TestApp::spawn().await;

        app.login_customer().await;

        let res = app.get(routes::PROFILE).await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("Welcome, Test User!"));
    }

    #[tokio::test]
    async fn wrong_password_gets_the_generic_message() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::LOGIN,
                &[("email", CUSTOMER_EMAIL), ("password", "not-it")],
            )
            .await;
        res.assert_redirect(routes::LOGIN);

        let page = app.get(routes::LOGIN).await;
        assert!(
            page.text
                .contains("Please check your login details and try again.")
        );
        app.get(routes::PROFILE).await.assert_redirect(routes::LOGIN);
    }

    #[tokio::test]
    async fn unknown_email_gets_the_same_message() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::LOGIN,
                &[("email", "nobody@example.com"), ("password", "whatever")],
            )
            .await;
        res.assert_redirect(routes::LOGIN);

        let page = app.get(routes::LOGIN).await;
        assert!(
            page.text
                .contains("Please check your login details and try again.")
        );
    }

    #[tokio::test]
    async fn flash_message_is_shown_only_once() {
        let app = TestApp::spawn().await;

        app.post_form(
            routes::LOGIN,
            &[("email", CUSTOMER_EMAIL), ("password", "not-it")],
        )
        .await;

        let first = app.get(routes::LOGIN).await;
        assert!(first.text.contains("Please check your login details"));
        let second = app.get(routes::LOGIN).await;
        assert!(!second.text.contains("Please check your login details"));
    }

    #[tokio::test]
    async fn logout_ends_the_session() {
        let app = TestApp::spawn().await;
        app.login_customer().await;

        app.get(routes::LOGOUT).await.assert_redirect(routes::HOME);

        app.get(routes::PROFILE).await.assert_redirect(routes::LOGIN);
    }

    #[tokio::test]
    async fn logout_requires_a_session() {
        let app = TestApp::spawn().await;

        app.get(routes::LOGOUT).await.assert_redirect(routes::LOGIN);
    }

    #[tokio::test]
    async fn tampered_session_cookie_is_treated_as_anonymous() {
        let app = TestApp::spawn().await;

        let res = app
            .client
            .get(format!("http://{}{}", app.addr, routes::PROFILE))
            .header(reqwest::header::COOKIE, "session=not-a-real-token")
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 303);
        assert_eq!(
            res.headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some(routes::LOGIN)
        );
    }
}

mod forgot_password {
    use super::*;

    #[tokio::test]
    async fn known_email_gets_a_new_password() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::FORGOT_PASSWORD,
                &[("email", CUSTOMER_EMAIL), ("new_password", "fresh-start")],
            )
            .await;
        res.assert_redirect(routes::LOGIN);

        let page = app.get(routes::LOGIN).await;
        assert!(
            page.text
                .contains("Password successfully updated. You can now login.")
        );

        app.login(CUSTOMER_EMAIL, "fresh-start").await;
    }

    #[tokio::test]
    async fn old_password_stops_working() {
        let app = TestApp::spawn().await;

        app.post_form(
            routes::FORGOT_PASSWORD,
            &[("email", CUSTOMER_EMAIL), ("new_password", "fresh-start")],
        )
        .await;

        let res = app
            .post_form(
                routes::LOGIN,
                &[("email", CUSTOMER_EMAIL), ("password", CUSTOMER_PASSWORD)],
            )
            .await;
        res.assert_redirect(routes::LOGIN);
    }

    #[tokio::test]
    async fn unknown_email_is_reported() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::FORGOT_PASSWORD,
                &[("email", "ghost@example.com"), ("new_password", "boo")],
            )
            .await;
        res.assert_redirect(routes::FORGOT_PASSWORD);

        let page = app.get(routes::FORGOT_PASSWORD).await;
        assert!(
            page.text
                .contains("Email not found. Please check and try again.")
        );
    }

    #[tokio::test]
    async fn unknown_email_changes_no_passwords() {
        let app = TestApp::spawn().await;
        let before: Vec<String> = user::Entity::find()
            .all(&app.db)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.password)
            .collect();

        app.post_form(
            routes::FORGOT_PASSWORD,
            &[("email", "ghost@example.com"), ("new_password", "boo")],
        )
        .await
        .assert_redirect(routes::FORGOT_PASSWORD);

        let after: Vec<String> = user::Entity::find()
            .all(&app.db)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.password)
            .collect();
        let (mut before, mut after) = (before, after);
        before.sort();
        after.sort();
        assert_eq!(before, after);
        app.login_customer().await;
    }
}
