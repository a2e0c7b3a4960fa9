use serde::{Deserialize, Serialize};

use crate::domain::common::EntityMetadata;
use crate::enums::tour_category::TourCategory;

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_id!(TourId);

/// Код подразделения продаж по умолчанию
pub const DEFAULT_SALES_UNIT: &str = "HCM";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Тур (листовой элемент иерархии)
///
/// Проценты и денежные суммы хранятся десятичными строками.
/// Числовые представления получаются через [`Tour::numeric`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: TourId,
    pub name: String,
    pub category: TourCategory,
    /// Для международных туров: `chau_a`, `chau_au`, ...
    pub continent: Option<String>,
    /// Для внутренних туров: `mien_bac`, `mien_trung`, `mien_nam`
    pub geo_region: Option<String>,
    /// Код области (ссылка на `HierarchyLevel.code`)
    pub area: String,
    pub duration: Option<String>,
    pub image_url: Option<String>,

    pub planned: i64,
    pub sold: i64,
    pub remaining: i64,
    pub opensell: i64,
    pub recently_booked: i64,
    #[serde(rename = "recentlyBooked30min")]
    pub recently_booked_30min: i64,

    pub completion_rate: String,
    pub daily_revenue: String,
    pub revenue: String,
    pub open_revenue: String,
    pub planned_revenue: String,
    pub target_percentage: String,

    pub top_sales_unit: String,
    pub is_active: bool,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Tour {
    /// Создать новый тур для вставки в хранилище
    pub fn new_for_insert(dto: TourDto) -> Self {
        Self {
            id: TourId::new_v4(),
            name: dto.name,
            category: dto.category,
            continent: dto.continent,
            geo_region: dto.geo_region,
            area: dto.area,
            duration: dto.duration,
            image_url: dto.image_url,
            planned: dto.planned,
            sold: dto.sold,
            remaining: dto.remaining,
            opensell: dto.opensell,
            recently_booked: dto.recently_booked,
            recently_booked_30min: dto.recently_booked_30min,
            completion_rate: decimal_or_zero(dto.completion_rate),
            daily_revenue: decimal_or_zero(dto.daily_revenue),
            revenue: decimal_or_zero(dto.revenue),
            open_revenue: decimal_or_zero(dto.open_revenue),
            planned_revenue: decimal_or_zero(dto.planned_revenue),
            target_percentage: decimal_or_zero(dto.target_percentage),
            top_sales_unit: dto
                .top_sales_unit
                .unwrap_or_else(|| DEFAULT_SALES_UNIT.to_string()),
            is_active: dto.is_active.unwrap_or(true),
            metadata: EntityMetadata::new(),
        }
    }

    /// Применить частичное обновление
    pub fn apply_patch(&mut self, patch: &TourPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(planned) = patch.planned {
            self.planned = planned;
        }
        if let Some(sold) = patch.sold {
            self.sold = sold;
        }
        if let Some(remaining) = patch.remaining {
            self.remaining = remaining;
        }
        if let Some(recently_booked) = patch.recently_booked {
            self.recently_booked = recently_booked;
        }
        if let Some(v) = patch.recently_booked_30min {
            self.recently_booked_30min = v;
        }
        if let Some(v) = &patch.completion_rate {
            self.completion_rate = v.clone();
        }
        if let Some(v) = &patch.daily_revenue {
            self.daily_revenue = v.clone();
        }
        if let Some(v) = &patch.revenue {
            self.revenue = v.clone();
        }
        if let Some(v) = &patch.target_percentage {
            self.target_percentage = v.clone();
        }
        if let Some(v) = &patch.top_sales_unit {
            self.top_sales_unit = v.clone();
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
        self.metadata.touch();
    }

    /// Зарегистрировать новые бронирования: `recentlyBooked` заменяется,
    /// `sold` увеличивается на ту же величину.
    pub fn record_bookings(&mut self, new_bookings: i64) {
        self.recently_booked = new_bookings;
        self.sold += new_bookings;
        self.metadata.touch();
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

/// Числовые показатели строки таблицы (общие для туров и узлов иерархии).
/// Некорректные десятичные строки превращаются в NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFigures {
    pub planned: f64,
    pub sold: f64,
    pub remaining: f64,
    pub recently_booked: f64,
    pub completion_rate: f64,
    pub revenue: f64,
    pub target_percentage: f64,
}

impl NumericFigures {
    pub fn of(
        planned: i64,
        sold: i64,
        remaining: i64,
        recently_booked: i64,
        completion_rate: &str,
        revenue: &str,
        target_percentage: &str,
    ) -> Self {
        Self {
            planned: planned as f64,
            sold: sold as f64,
            remaining: remaining as f64,
            recently_booked: recently_booked as f64,
            completion_rate: crate::shared::number_format::parse_decimal(completion_rate),
            revenue: crate::shared::number_format::parse_decimal(revenue),
            target_percentage: crate::shared::number_format::parse_decimal(target_percentage),
        }
    }
}

fn decimal_or_zero(value: Option<String>) -> String {
    value.unwrap_or_else(|| "0".to_string())
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания тура
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    pub name: String,
    pub category: TourCategory,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub geo_region: Option<String>,
    pub area: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
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
    pub daily_revenue: Option<String>,
    #[serde(default)]
    pub revenue: Option<String>,
    #[serde(default)]
    pub open_revenue: Option<String>,
    #[serde(default)]
    pub planned_revenue: Option<String>,
    #[serde(default)]
    pub target_percentage: Option<String>,
    #[serde(default)]
    pub top_sales_unit: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TourDto {
    /// Пустая форма с обязательными полями
    pub fn new(name: impl Into<String>, category: TourCategory, area: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            continent: None,
            geo_region: None,
            area: area.into(),
            duration: None,
            image_url: None,
            planned: 0,
            sold: 0,
            remaining: 0,
            opensell: 0,
            recently_booked: 0,
            recently_booked_30min: 0,
            completion_rate: None,
            daily_revenue: None,
            revenue: None,
            open_revenue: None,
            planned_revenue: None,
            target_percentage: None,
            top_sales_unit: None,
            is_active: None,
        }
    }
}

/// Частичное обновление тура
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPatch {
    pub name: Option<String>,
    pub planned: Option<i64>,
    pub sold: Option<i64>,
    pub remaining: Option<i64>,
    pub recently_booked: Option<i64>,
    #[serde(rename = "recentlyBooked30min")]
    pub recently_booked_30min: Option<i64>,
    pub completion_rate: Option<String>,
    pub daily_revenue: Option<String>,
    pub revenue: Option<String>,
    pub target_percentage: Option<String>,
    pub top_sales_unit: Option<String>,
    pub is_active: Option<bool>,
}

/// Тело запроса POST /api/tours/:id/update-bookings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingsRequest {
    pub new_bookings: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_applies_schema_defaults() {
        let tour = Tour::new_for_insert(TourDto::new("Hạ Long 2N1Đ", TourCategory::Domestic, "ha_long"));
        assert_eq!(tour.top_sales_unit, DEFAULT_SALES_UNIT);
        assert!(tour.is_active);
        assert_eq!(tour.completion_rate, "0");
        assert_eq!(tour.revenue, "0");
    }

    #[test]
    fn test_record_bookings_replaces_recent_and_adds_to_sold() {
        let mut dto = TourDto::new("Phú Quốc 3N2Đ", TourCategory::Domestic, "phu_quoc");
        dto.sold = 40;
        dto.recently_booked = 7;
        let mut tour = Tour::new_for_insert(dto);
        let before = tour.metadata.updated_at;

        tour.record_bookings(5);

        assert_eq!(tour.sold, 45);
        assert_eq!(tour.recently_booked, 5);
        assert!(tour.metadata.updated_at >= before);
    }

    #[test]
    fn test_json_uses_camel_case_field_names() {
        let tour = Tour::new_for_insert(TourDto::new("Đà Lạt", TourCategory::Domestic, "tay_nguyen"));
        let json = serde_json::to_value(&tour).unwrap();
        assert!(json.get("recentlyBooked30min").is_some());
        assert!(json.get("topSalesUnit").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["category"], "domestic");
    }

    #[test]
    fn test_numeric_figures_degrade_to_nan() {
        let mut dto = TourDto::new("Huế", TourCategory::Domestic, "hue");
        dto.completion_rate = Some("abc".into());
        let tour = Tour::new_for_insert(dto);
        assert!(tour.numeric().completion_rate.is_nan());
        assert_eq!(tour.numeric().revenue, 0.0);
    }
}
