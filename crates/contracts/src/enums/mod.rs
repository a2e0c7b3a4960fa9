pub mod activity_type;
pub mod hierarchy_level_kind;
pub mod performance_status;
pub mod tour_category;
