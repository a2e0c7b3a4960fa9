pub mod a001_tour;
pub mod a002_hierarchy_level;
pub mod a003_sales_unit;
pub mod a004_activity;
pub mod a005_regional_performance;
