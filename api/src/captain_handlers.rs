use axum::{extract::State, http::StatusCode, Json};
use shared::{Captain, CaptainResponse, RegisterCaptainRequest};

use crate::{
    error::{ApiError, ApiResult},
    password,
    state::AppState,
    validation::ValidatedJson,
};

/// Register a new captain
///
/// The rule table has already passed by the time this runs; the raw
/// password is hashed before it reaches the insert.
pub async fn register_captain(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterCaptainRequest>,
) -> ApiResult<(StatusCode, Json<CaptainResponse>)> {
    let password_hash = password::hash_password(&req.password);

    let captain = sqlx::query_as::<_, Captain>(
        "INSERT INTO captains
            (firstname, lastname, email, password_hash,
             vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(&req.fullname.firstname)
    .bind(&req.fullname.lastname)
    .bind(&req.email)
    .bind(&password_hash)
    .bind(&req.vehicle.color)
    .bind(&req.vehicle.plate)
    .bind(req.vehicle.capacity)
    .bind(req.vehicle.vehicle_type)
    .fetch_one(&state.db)
    .await
    .map_err(|err| ApiError::from_sqlx("insert captain", err))?;

    tracing::info!(captain_id = %captain.id, "captain registered");

    Ok((StatusCode::CREATED, Json(CaptainResponse::from(captain))))
}
