use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The `{"message": ...}` body shape shared by `/hello` and the fixed error bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One row of the `labour_participation` table.
///
/// The count columns are nullable in storage. They stay `Option<i32>` all the
/// way to the wire so that a NULL is emitted as JSON `null` and never as `0`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct LabourParticipation {
    pub age: String,
    pub age_string: String,
    pub area: String,
    pub area_string: String,
    pub labour_status: String,
    pub labour_status_string: String,
    pub total: Option<i32>,
    pub person_one: Option<i32>,
    pub person_two: Option<i32>,
    pub person_three: Option<i32>,
    pub person_four: Option<i32>,
    pub person_five: Option<i32>,
}
