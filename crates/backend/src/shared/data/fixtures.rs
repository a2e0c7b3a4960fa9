//! Начальные данные хранилища. Пересоздаются при каждом старте.

use chrono::{Duration, Utc};
use contracts::domain::a001_tour::{Tour, TourDto};
use contracts::domain::a002_hierarchy_level::{HierarchyLevel, HierarchyLevelDto};
use contracts::domain::a003_sales_unit::{SalesUnit, SalesUnitDto};
use contracts::domain::a004_activity::{Activity, ActivityDto};
use contracts::domain::a005_regional_performance::{RegionalPerformance, RegionalPerformanceDto};
use contracts::enums::activity_type::ActivityType;
use contracts::enums::hierarchy_level_kind::HierarchyLevelKind;
use contracts::enums::performance_status::PerformanceStatus;
use contracts::enums::tour_category::TourCategory;

/// Счётчики строки: planned, sold, remaining, recentlyBooked, recentlyBooked30min
type Counters = [i64; 5];

/// Денежные и процентные поля: completionRate, revenue, plannedRevenue, targetPercentage
type Amounts<'a> = [&'a str; 4];

pub fn sales_units() -> Vec<SalesUnit> {
    [
        ("TP. Hồ Chí Minh", "HCM", "85.2", PerformanceStatus::Good),
        ("Hà Nội", "HN", "78.9", PerformanceStatus::Good),
        ("Cần Thơ", "CT", "72.4", PerformanceStatus::Moderate),
    ]
    .into_iter()
    .map(|(name, code, rate, status)| {
        SalesUnit::new_for_insert(SalesUnitDto {
            name: name.into(),
            code: code.into(),
            performance_rate: Some(rate.into()),
            status: Some(status),
        })
    })
    .collect()
}

fn node(
    name: &str,
    code: &str,
    category: TourCategory,
    level: HierarchyLevelKind,
    parent: Option<&str>,
    counters: Counters,
    amounts: Amounts,
) -> HierarchyLevel {
    let mut dto = HierarchyLevelDto::new(name, code, category, level, parent);
    let [planned, sold, remaining, recent, recent_30min] = counters;
    dto.planned = planned;
    dto.sold = sold;
    dto.remaining = remaining;
    dto.recently_booked = recent;
    dto.recently_booked_30min = recent_30min;
    let [completion, revenue, planned_revenue, target] = amounts;
    dto.completion_rate = Some(completion.into());
    dto.revenue = Some(revenue.into());
    dto.planned_revenue = Some(planned_revenue.into());
    dto.target_percentage = Some(target.into());
    HierarchyLevel::new_for_insert(dto)
}

/// Лес иерархии: внутренние туры, затем международные
pub fn hierarchy_levels() -> Vec<HierarchyLevel> {
    use HierarchyLevelKind as K;
    use TourCategory::{Domestic, International};

    vec![
        // Domestic
        node("TOUR NỘI ĐỊA", "tour_noi_dia", Domestic, K::GeoRegion, None,
            [740, 556, 184, 72, 23], ["75.1", "3943000000", "5140000000", "76.7"]),
        node("Miền Bắc", "mien_bac", Domestic, K::Region, Some("tour_noi_dia"),
            [200, 148, 52, 18, 6], ["74.0", "844000000", "1160000000", "72.8"]),
        node("Hạ Long", "ha_long", Domestic, K::Area, Some("mien_bac"),
            [120, 96, 24, 12, 4], ["80.0", "480000000", "600000000", "80.0"]),
        node("Sa Pa", "sa_pa", Domestic, K::Area, Some("mien_bac"),
            [80, 52, 28, 6, 2], ["65.0", "364000000", "560000000", "65.0"]),
        node("Miền Trung", "mien_trung", Domestic, K::Region, Some("tour_noi_dia"),
            [240, 169, 71, 23, 7], ["70.4", "1439000000", "1980000000", "72.7"]),
        node("Đà Nẵng", "da_nang", Domestic, K::Area, Some("mien_trung"),
            [150, 128, 22, 18, 6], ["85.3", "1152000000", "1350000000", "85.3"]),
        node("Huế", "hue", Domestic, K::Area, Some("mien_trung"),
            [90, 41, 49, 5, 1], ["45.6", "287000000", "630000000", "45.6"]),
        node("Miền Nam", "mien_nam", Domestic, K::Region, Some("tour_noi_dia"),
            [300, 239, 61, 31, 10], ["79.7", "1660000000", "2000000000", "83.0"]),
        node("Phú Quốc", "phu_quoc", Domestic, K::Area, Some("mien_nam"),
            [200, 176, 24, 22, 7], ["88.0", "1408000000", "1600000000", "88.0"]),
        node("Cần Thơ", "can_tho", Domestic, K::Area, Some("mien_nam"),
            [100, 63, 37, 9, 3], ["63.0", "252000000", "400000000", "63.0"]),
        // International
        node("TOUR QUỐC TẾ", "tour_quoc_te", International, K::TourCategory, None,
            [4976, 2665, 2311, 430, 143], ["13.4", "8089550000", "60962750000", "75"]),
        node("Châu Á", "chau_a", International, K::Continent, Some("tour_quoc_te"),
            [4515, 2312, 2203, 335, 84], ["51.1", "57968250000", "40395500000", "70"]),
        node("Đông Nam Á", "dong_nam_a", International, K::Region, Some("chau_a"),
            [150, 120, 30, 15, 5], ["80.0", "2400000000", "3000000000", "80.0"]),
        node("Singapore - Malaysia", "singapore_malaysia", International, K::Area, Some("dong_nam_a"),
            [150, 120, 30, 15, 5], ["80.0", "2400000000", "3000000000", "80.0"]),
        node("Đông Bắc Á", "dong_bac_a", International, K::Region, Some("chau_a"),
            [200, 180, 20, 25, 8], ["90.0", "7200000000", "8000000000", "90.0"]),
        node("Nhật Bản", "nhat_ban", International, K::Area, Some("dong_bac_a"),
            [200, 180, 20, 25, 8], ["90.0", "7200000000", "8000000000", "90.0"]),
        node("Châu Âu", "chau_au", International, K::Continent, Some("tour_quoc_te"),
            [246, 222, 24, 28, 9], ["90.3", "13165750000", "15235250000", "116"]),
        node("Tây Âu", "tay_au", International, K::Region, Some("chau_au"),
            [246, 222, 24, 28, 9], ["90.3", "13165750000", "15235250000", "116"]),
        node("Pháp - Thụy Sĩ - Ý", "phap_thuy_si_y", International, K::Area, Some("tay_au"),
            [246, 222, 24, 28, 9], ["90.3", "13165750000", "15235250000", "116"]),
        node("Châu Đại Dương", "chau_dai_duong", International, K::Continent, Some("tour_quoc_te"),
            [117, 96, 21, 31, 10], ["82.1", "2433750000", "1716000000", "149"]),
        node("Châu Mỹ", "chau_my", International, K::Continent, Some("tour_quoc_te"),
            [98, 35, 62, 6, 1], ["36", "121300000", "521500000", "20"]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn tour(
    name: &str,
    category: TourCategory,
    region: &str,
    area: &str,
    duration: &str,
    counters: Counters,
    amounts: Amounts,
    daily_revenue: &str,
    sales_unit: &str,
) -> Tour {
    let mut dto = TourDto::new(name, category, area);
    match category {
        TourCategory::Domestic => dto.geo_region = Some(region.into()),
        TourCategory::International => dto.continent = Some(region.into()),
    }
    dto.duration = Some(duration.into());
    let [planned, sold, remaining, recent, recent_30min] = counters;
    dto.planned = planned;
    dto.sold = sold;
    dto.remaining = remaining;
    dto.recently_booked = recent;
    dto.recently_booked_30min = recent_30min;
    let [completion, revenue, planned_revenue, target] = amounts;
    dto.completion_rate = Some(completion.into());
    dto.revenue = Some(revenue.into());
    dto.planned_revenue = Some(planned_revenue.into());
    dto.target_percentage = Some(target.into());
    dto.daily_revenue = Some(daily_revenue.into());
    dto.top_sales_unit = Some(sales_unit.into());
    Tour::new_for_insert(dto)
}

pub fn tours() -> Vec<Tour> {
    use TourCategory::{Domestic, International};

    vec![
        tour("Hạ Long - Tuần Châu 2N1Đ", Domestic, "mien_bac", "ha_long", "2N1D",
            [120, 96, 24, 12, 4], ["80.0", "480000000", "600000000", "80.0"], "36000000", "HN"),
        tour("Sa Pa - Fansipan 3N2Đ", Domestic, "mien_bac", "sa_pa", "3N2D",
            [80, 52, 28, 6, 2], ["65.0", "364000000", "560000000", "65.0"], "18000000", "HN"),
        tour("Đà Nẵng - Hội An 4N3Đ", Domestic, "mien_trung", "da_nang", "4N3D",
            [150, 128, 22, 18, 6], ["85.3", "1152000000", "1350000000", "85.3"], "54000000", "HCM"),
        tour("Huế - Phong Nha 3N2Đ", Domestic, "mien_trung", "hue", "3N2D",
            [90, 41, 49, 5, 1], ["45.6", "287000000", "630000000", "45.6"], "12000000", "HCM"),
        tour("Phú Quốc 3N2Đ", Domestic, "mien_nam", "phu_quoc", "3N2D",
            [200, 176, 24, 22, 7], ["88.0", "1408000000", "1600000000", "88.0"], "66000000", "HCM"),
        tour("Miền Tây - Cần Thơ 2N1Đ", Domestic, "mien_nam", "can_tho", "2N1D",
            [100, 63, 37, 9, 3], ["63.0", "252000000", "400000000", "63.0"], "15000000", "CT"),
        tour("Du lịch Singapore - Malaysia 4N3Đ", International, "chau_a", "singapore_malaysia", "4N3D",
            [150, 120, 30, 15, 5], ["80.0", "2400000000", "3000000000", "80.0"], "45000000", "HCM"),
        tour("Tour Nhật Bản 5N4Đ", International, "chau_a", "nhat_ban", "5N4D",
            [200, 180, 20, 25, 8], ["90.0", "7200000000", "8000000000", "90.0"], "75000000", "HN"),
    ]
}

/// Лента активности; метки времени разнесены, чтобы порядок был детерминирован
pub fn activities() -> Vec<Activity> {
    let now = Utc::now();
    [
        (ActivityType::Booking, "Khách hàng vừa đặt tour Singapore - Malaysia", "TP. Hồ Chí Minh", 2),
        (ActivityType::Booking, "Đặt tour Nhật Bản 5N4Đ", "Hà Nội", 15),
        (ActivityType::PriceUpdate, "Cập nhật giá tour Châu Âu", "Cần Thơ", 60),
    ]
    .into_iter()
    .map(|(activity_type, message, location, minutes_ago)| {
        let mut activity = Activity::new_for_insert(ActivityDto {
            activity_type,
            message: message.into(),
            tour_id: None,
            location: location.into(),
        });
        activity.timestamp = now - Duration::minutes(minutes_ago);
        activity
    })
    .collect()
}

pub fn regional_performance() -> Vec<RegionalPerformance> {
    [
        ("TP. Hồ Chí Minh", "85.2", PerformanceStatus::Good),
        ("Hà Nội", "78.9", PerformanceStatus::Good),
        ("Cần Thơ", "72.4", PerformanceStatus::Moderate),
        ("Đà Nẵng", "68.1", PerformanceStatus::Moderate),
    ]
    .into_iter()
    .map(|(city, rate, status)| {
        RegionalPerformance::new_for_insert(RegionalPerformanceDto {
            city_name: city.into(),
            performance_rate: rate.into(),
            status: Some(status),
        })
    })
    .collect()
}
