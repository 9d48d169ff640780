use axum::{extract::State, http::StatusCode, Json};
use shared::{RegisterUserRequest, User, UserResponse};

use crate::{
    error::{ApiError, ApiResult},
    password,
    state::AppState,
    validation::ValidatedJson,
};

/// Register a new user
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let password_hash = password::hash_password(&req.password);

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (firstname, lastname, email, password_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&req.fullname.firstname)
    .bind(&req.fullname.lastname)
    .bind(&req.email)
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await
    .map_err(|err| ApiError::from_sqlx("insert user", err))?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
