use serde::{Deserialize, Serialize};

use super::tour_category::TourCategory;

/// Уровень узла в иерархии туров
///
/// Внутренние туры: `geo_region` → `region` → `area` → туры.
/// Международные: `tour_category` → `continent` → `region` → `area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyLevelKind {
    TourCategory,
    GeoRegion,
    Continent,
    Region,
    Area,
}

impl HierarchyLevelKind {
    pub fn code(&self) -> &'static str {
        match self {
            HierarchyLevelKind::TourCategory => "tour_category",
            HierarchyLevelKind::GeoRegion => "geo_region",
            HierarchyLevelKind::Continent => "continent",
            HierarchyLevelKind::Region => "region",
            HierarchyLevelKind::Area => "area",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tour_category" => Some(HierarchyLevelKind::TourCategory),
            "geo_region" => Some(HierarchyLevelKind::GeoRegion),
            "continent" => Some(HierarchyLevelKind::Continent),
            "region" => Some(HierarchyLevelKind::Region),
            "area" => Some(HierarchyLevelKind::Area),
            _ => None,
        }
    }

    /// Корневой уровень категории (строка-раздел таблицы)
    pub fn root_of(category: TourCategory) -> Self {
        match category {
            TourCategory::Domestic => HierarchyLevelKind::GeoRegion,
            TourCategory::International => HierarchyLevelKind::TourCategory,
        }
    }
}

impl std::fmt::Display for HierarchyLevelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
