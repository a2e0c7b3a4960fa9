use serde::{Deserialize, Serialize};

/// Тип события в ленте активности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Booking,
    PriceUpdate,
    NewTour,
}

impl ActivityType {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityType::Booking => "booking",
            ActivityType::PriceUpdate => "price_update",
            ActivityType::NewTour => "new_tour",
        }
    }
}
