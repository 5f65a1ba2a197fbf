use std::net::SocketAddr;

use reqwest::{Client, redirect::Policy};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tempfile::TempDir;

use park_booking::config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
use park_booking::entity::{role, user};
use park_booking::models::park::NewPark;
use park_booking::state::AppState;
use park_booking::utils::hash::hash_password;

pub const CUSTOMER_EMAIL: &str = "test@example.com";
pub const CUSTOMER_PASSWORD: &str = "password123";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const LOGOUT: &str = "/logout";
    pub const REGISTER: &str = "/register";
    pub const FORGOT_PASSWORD: &str = "/forgot_password";
    pub const PROFILE: &str = "/profile";
    pub const BOOKINGS: &str = "/bookings";
    pub const BOOKING: &str = "/booking";
    pub const NEW_BOOKING: &str = "/booking/new";
    pub const CONTACT: &str = "/contact";
    pub const HEALTH: &str = "/health";
    pub const ADMIN: &str = "/admin";
    pub const ADMIN_USERS: &str = "/admin/users";
    pub const ADMIN_PARKS: &str = "/admin/parks";
    pub const ADMIN_BOOKINGS: &str = "/admin/bookings";
    pub const ADMIN_MESSAGES: &str = "/admin/messages";

    pub fn park(id: i32) -> String {
        format!("/parks/{id}")
    }

    pub fn user_role(id: i32) -> String {
        format!("/admin/users/{id}/role")
    }

    pub fn delete_park(id: i32) -> String {
        format!("/admin/parks/{id}/delete")
    }
}

fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display())
}

/// An empty, schema-synced database with only the roles seeded.
/// The returned `TempDir` owns the file and must outlive the connection.
pub async fn fresh_db() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db = park_booking::database::init_db(&DatabaseConfig {
        url: sqlite_url(&dir),
        max_connections: 2,
    })
    .await
    .expect("Failed to initialize test database");
    park_booking::seed::seed_roles(&db)
        .await
        .expect("Failed to seed roles");
    (dir, db)
}

/// A running test server backed by its own SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    /// Ids of the two seeded parks, "Leprechaun Park" then "Paddy Park".
    pub park_ids: [i32; 2],
    pub customer_id: i32,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// `Location` header, present on redirects.
    pub location: Option<String>,
    pub text: String,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = res.text().await.unwrap_or_default();
        Self {
            status,
            location,
            text,
        }
    }

    /// Assert a 303 to `path`.
    pub fn assert_redirect(&self, path: &str) {
        assert_eq!(self.status, 303, "expected redirect, got: {}", self.text);
        assert_eq!(self.location.as_deref(), Some(path));
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = sqlite_url(&dir);

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: db_url,
                max_connections: 5,
            },
            auth: AuthConfig {
                session_secret: "test-secret-for-integration-tests".to_string(),
                session_ttl_hours: 1,
                admin_email: Some(ADMIN_EMAIL.to_string()),
                admin_password: Some(ADMIN_PASSWORD.to_string()),
                promote_existing_admin: false,
            },
        };

        let db = park_booking::database::init_db(&config.database)
            .await
            .expect("Failed to initialize test database");
        park_booking::seed::seed_roles(&db)
            .await
            .expect("Failed to seed roles");
        park_booking::seed::seed_admin(&db, &config.auth)
            .await
            .expect("Failed to seed admin");

        let leprechaun = insert_park(&db, "Leprechaun Park", "Dublin").await;
        let paddy = insert_park(&db, "Paddy Park", "Cork").await;
        let customer_id = insert_customer(&db, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;

        let app = park_booking::build_router(AppState {
            db: db.clone(),
            config,
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            addr,
            client,
            db,
            park_ids: [leprechaun, paddy],
            customer_id,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// Log in through the form, asserting success.
    pub async fn login(&self, email: &str, password: &str) {
        let res = self
            .post_form(routes::LOGIN, &[("email", email), ("password", password)])
            .await;
        res.assert_redirect(routes::PROFILE);
    }

    pub async fn login_customer(&self) {
        self.login(CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    }

    pub async fn login_admin(&self) {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    }

    /// Submit the booking form for the logged-in user.
    pub async fn book(&self, park_id: i32, date: &str, tickets: &str) -> TestResponse {
        let park_id = park_id.to_string();
        self.post_form(
            routes::BOOKING,
            &[
                ("park_id", park_id.as_str()),
                ("date", date),
                ("num_tickets", tickets),
            ],
        )
        .await
    }
}

async fn insert_park(db: &DatabaseConnection, name: &str, location: &str) -> i32 {
    NewPark {
        name: name.to_string(),
        location: location.to_string(),
        description: format!("{name} is a fine day out in {location}."),
        slug: park_booking::utils::slug::slugify(name),
        ..Default::default()
    }
    .into_active_model()
    .insert(db)
    .await
    .expect("Failed to insert park")
    .id
}

pub async fn insert_customer(db: &DatabaseConnection, email: &str, password: &str) -> i32 {
    let customer_role = role::Entity::find()
        .all(db)
        .await
        .expect("Failed to load roles")
        .into_iter()
        .find(|r| r.name == role::DEFAULT_ROLE)
        .map(|r| r.id);

    user::ActiveModel {
        name: Set("Test".to_string()),
        last_name: Set("User".to_string()),
        email: Set(email.to_string()),
        password: Set(hash_password(password).expect("Failed to hash password")),
        role_id: Set(customer_role),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert customer")
    .id
}
