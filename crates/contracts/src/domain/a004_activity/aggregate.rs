use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_tour::TourId;
use crate::enums::activity_type::ActivityType;

crate::uuid_id!(ActivityId);

/// Запись ленты активности
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub message: String,
    pub tour_id: Option<TourId>,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn new_for_insert(dto: ActivityDto) -> Self {
        Self {
            id: ActivityId::new_v4(),
            activity_type: dto.activity_type,
            message: dto.message,
            tour_id: dto.tour_id,
            location: dto.location,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub message: String,
    #[serde(default)]
    pub tour_id: Option<TourId>,
    pub location: String,
}
