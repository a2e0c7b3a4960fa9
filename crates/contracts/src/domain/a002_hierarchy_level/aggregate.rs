use serde::{Deserialize, Serialize};

use crate::domain::a001_tour::NumericFigures;
use crate::enums::hierarchy_level_kind::HierarchyLevelKind;
use crate::enums::tour_category::TourCategory;

crate::uuid_id!(HierarchyLevelId);

/// Узел иерархии (категория / макрорегион / континент / регион / область)
///
/// Связь с родителем задаётся через `parent_code` → `code`.
/// Агрегированные счётчики не сверяются с суммой по дочерним узлам.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyLevel {
    pub id: HierarchyLevelId,
    pub name: String,
    pub code: String,
    pub category: TourCategory,
    pub level: HierarchyLevelKind,
    pub parent_code: Option<String>,

    pub planned: i64,
    pub sold: i64,
    pub remaining: i64,
    pub opensell: i64,
    pub recently_booked: i64,
    #[serde(rename = "recentlyBooked30min")]
    pub recently_booked_30min: i64,

    pub completion_rate: String,
    pub revenue: String,
    pub open_revenue: String,
    pub planned_revenue: String,
    pub target_percentage: String,
}

impl HierarchyLevel {
    pub fn new_for_insert(dto: HierarchyLevelDto) -> Self {
        Self {
            id: HierarchyLevelId::new_v4(),
            name: dto.name,
            code: dto.code,
            category: dto.category,
            level: dto.level,
            parent_code: dto.parent_code,
            planned: dto.planned,
            sold: dto.sold,
            remaining: dto.remaining,
            opensell: dto.opensell,
            recently_booked: dto.recently_booked,
            recently_booked_30min: dto.recently_booked_30min,
            completion_rate: dto.completion_rate.unwrap_or_else(zero),
            revenue: dto.revenue.unwrap_or_else(zero),
            open_revenue: dto.open_revenue.unwrap_or_else(zero),
            planned_revenue: dto.planned_revenue.unwrap_or_else(zero),
            target_percentage: dto.target_percentage.unwrap_or_else(zero),
        }
    }

    pub fn apply_patch(&mut self, patch: &HierarchyLevelPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(v) = patch.planned {
            self.planned = v;
        }
        if let Some(v) = patch.sold {
            self.sold = v;
        }
        if let Some(v) = patch.remaining {
            self.remaining = v;
        }
        if let Some(v) = patch.recently_booked {
            self.recently_booked = v;
        }
        if let Some(v) = &patch.completion_rate {
            self.completion_rate = v.clone();
        }
        if let Some(v) = &patch.revenue {
            self.revenue = v.clone();
        }
        if let Some(v) = &patch.target_percentage {
            self.target_percentage = v.clone();
        }
    }

    pub fn is_root(&self) -> bool {
        self.level == HierarchyLevelKind::root_of(self.category)
    }

    pub fn numeric(&self) -> NumericFigures {
        NumericFigures::of(
            self.planned,
            self.sold,
            self.remaining,
            self.recently_booked,
            &self.completion_rate,
            &self.revenue,
            &self.target_percentage,
        )
    }
}

fn zero() -> String {
    "0".to_string()
}

/// DTO для создания узла иерархии
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyLevelDto {
    pub name: String,
    pub code: String,
    pub category: TourCategory,
    pub level: HierarchyLevelKind,
    #[serde(default)]
    pub parent_code: Option<String>,
    #[serde(default)]
    pub planned: i64,
    #[serde(default)]
    pub sold: i64,
    #[serde(default)]
    pub remaining: i64,
    #[serde(default)]
    pub opensell: i64,
    #[serde(default)]
    pub recently_booked: i64,
    #[serde(default, rename = "recentlyBooked30min")]
    pub recently_booked_30min: i64,
    #[serde(default)]
    pub completion_rate: Option<String>,
    #[serde(default)]
    pub revenue: Option<String>,
    #[serde(default)]
    pub open_revenue: Option<String>,
    #[serde(default)]
    pub planned_revenue: Option<String>,
    #[serde(default)]
    pub target_percentage: Option<String>,
}

impl HierarchyLevelDto {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        category: TourCategory,
        level: HierarchyLevelKind,
        parent_code: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            category,
            level,
            parent_code: parent_code.map(str::to_string),
            planned: 0,
            sold: 0,
            remaining: 0,
            opensell: 0,
            recently_booked: 0,
            recently_booked_30min: 0,
            completion_rate: None,
            revenue: None,
            open_revenue: None,
            planned_revenue: None,
            target_percentage: None,
        }
    }
}

/// Частичное обновление узла иерархии
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyLevelPatch {
    pub name: Option<String>,
    pub planned: Option<i64>,
    pub sold: Option<i64>,
    pub remaining: Option<i64>,
    pub recently_booked: Option<i64>,
    pub completion_rate: Option<String>,
    pub revenue: Option<String>,
    pub target_percentage: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_detection_per_category() {
        let domestic = HierarchyLevel::new_for_insert(HierarchyLevelDto::new(
            "Nội địa",
            "noi_dia",
            TourCategory::Domestic,
            HierarchyLevelKind::GeoRegion,
            None,
        ));
        let continent = HierarchyLevel::new_for_insert(HierarchyLevelDto::new(
            "Châu Á",
            "chau_a",
            TourCategory::International,
            HierarchyLevelKind::Continent,
            Some("tour_quoc_te"),
        ));
        assert!(domestic.is_root());
        assert!(!continent.is_root());
    }

    #[test]
    fn test_level_serializes_as_snake_case() {
        let node = HierarchyLevel::new_for_insert(HierarchyLevelDto::new(
            "TOUR QUỐC TẾ",
            "tour_quoc_te",
            TourCategory::International,
            HierarchyLevelKind::TourCategory,
            None,
        ));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["level"], "tour_category");
        assert_eq!(json["parentCode"], serde_json::Value::Null);
    }
}
