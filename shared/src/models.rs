// src/models.rs
// Shared data types for the ride-hailing registration backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle categories a captain may register with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Auto,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Car => write!(f, "car"),
            VehicleType::Motorcycle => write!(f, "motorcycle"),
            VehicleType::Auto => write!(f, "auto"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullName {
    pub firstname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub color: String,
    pub plate: String,
    pub capacity: i32,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,
}

/// Captain registration payload, deserialized only after the route's
/// rule set has passed against the raw body.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCaptainRequest {
    pub fullname: FullName,
    pub email: String,
    pub password: String,
    pub vehicle: Vehicle,
}

/// User registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub fullname: FullName,
    pub email: String,
    pub password: String,
}

/// Captain row as persisted (flat columns)
#[derive(Debug, Clone, FromRow)]
pub struct Captain {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub vehicle_color: String,
    pub vehicle_plate: String,
    pub vehicle_capacity: i32,
    pub vehicle_type: VehicleType,
    pub created_at: DateTime<Utc>,
}

/// User row as persisted
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public captain shape returned to clients. Never carries password
/// material; built from `Captain` by dropping `password_hash` and
/// re-nesting the flat vehicle columns.
#[derive(Debug, Clone, Serialize)]
pub struct CaptainResponse {
    pub id: Uuid,
    pub fullname: FullName,
    pub email: String,
    pub vehicle: Vehicle,
    pub created_at: DateTime<Utc>,
}

impl From<Captain> for CaptainResponse {
    fn from(captain: Captain) -> Self {
        CaptainResponse {
            id: captain.id,
            fullname: FullName {
                firstname: captain.firstname,
                lastname: captain.lastname,
            },
            email: captain.email,
            vehicle: Vehicle {
                color: captain.vehicle_color,
                plate: captain.vehicle_plate,
                capacity: captain.vehicle_capacity,
                vehicle_type: captain.vehicle_type,
            },
            created_at: captain.created_at,
        }
    }
}

/// Public user shape returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub fullname: FullName,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            fullname: FullName {
                firstname: user.firstname,
                lastname: user.lastname,
            },
            email: user.email,
            created_at: user.created_at,
        }
    }
}
