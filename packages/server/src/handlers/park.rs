use axum::{
    extract::{Path, State},
    response::Html,
};
use axum_extra::extract::CookieJar;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::session::Session;
use crate::state::AppState;
use crate::utils::queries;
use crate::views::pages;

use super::{parse_id, render};

/// Home page: every park.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let parks = queries::all_parks(&state.db).await?;
    Ok(render(jar, session.identity(), |ctx| pages::index(ctx, &parks)))
}

/// A single park. Unknown and non-numeric ids are both 404.
#[instrument(skip(state, session, jar))]
pub async fn park_detail(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let id = parse_id(&id, "Park not found")?;
    let park = queries::find_park(&state.db, id).await?;
    Ok(render(jar, session.identity(), |ctx| {
        pages::park_detail(ctx, &park)
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("The page you were looking for does not exist.".into())
}
