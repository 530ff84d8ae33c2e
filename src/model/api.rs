use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The currently authenticated user
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct UserDto {
    /// The user's ID
    pub id: i32,
}

/// An alliance managed by the requesting user
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct AllianceDto {
    /// The alliance's ID
    pub id: i32,
    /// The alliance's display name
    pub name: String,
}

/// A member belonging to an alliance
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct AllianceMemberDto {
    /// The member's ID
    pub id: i32,
    /// ID of the alliance the member belongs to
    pub alliance_id: i32,
    /// The member's display name
    pub name: String,
}

/// A battle event recorded for an alliance member
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct BattleEventDto {
    /// The battle event's ID
    pub id: i32,
    /// ID of the alliance member the event belongs to
    pub alliance_member_id: i32,
    /// Opaque event payload (battle outcome, losses, location, ...)
    pub details: serde_json::Value,
    /// When the event was recorded
    pub created_at: NaiveDateTime,
}

/// A stored stat record for the requesting user
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct StatsDto {
    /// Opaque stat payload
    pub stats: serde_json::Value,
    /// When the record was last written
    pub created_at: NaiveDateTime,
}

/// Request body for creating or replacing a stat record
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct UpdateStatsDto {
    /// Stat payload; must be a non-empty JSON object
    #[serde(default)]
    pub stats: Option<serde_json::Value>,
}
