use serde::{Deserialize, Serialize};

use crate::domain::a001_tour::Tour;
use crate::shared::number_format::parse_decimal_or_zero;

/// KPI-карточки дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_active_tours: usize,
    pub total_active_tours_change: f64,
    /// Сумма "Số Chỗ Bán Hôm Nay" (`recentlyBooked30min`)
    pub daily_bookings: i64,
    pub daily_bookings_change: f64,
    pub weekly_bookings_change: f64,
    pub daily_revenue: String,
    pub daily_revenue_change: f64,
    pub weekly_revenue_change: f64,
    pub tours_sold: i64,
    pub tours_sold_planned: i64,
    pub tours_sold_change: f64,
    pub tours_sold_plan_percentage: i64,
    pub revenue: String,
    pub revenue_planned: String,
    pub revenue_change: f64,
    pub revenue_plan_percentage: i64,
    pub completion_rate: i64,
}

/// Изменения к прошлому периоду. Хранилище не ведёт историю,
/// поэтому значения задаются снаружи.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBaseline {
    pub total_active_tours_change: f64,
    pub daily_bookings_change: f64,
    pub weekly_bookings_change: f64,
    pub daily_revenue_change: f64,
    pub weekly_revenue_change: f64,
    pub tours_sold_change: f64,
    pub revenue_change: f64,
}

impl Default for MetricsBaseline {
    fn default() -> Self {
        Self {
            total_active_tours_change: 5.2,
            daily_bookings_change: 12.5,
            weekly_bookings_change: 0.0,
            daily_revenue_change: 8.3,
            weekly_revenue_change: 0.0,
            tours_sold_change: -3.2,
            revenue_change: 15.7,
        }
    }
}

/// Процент выполнения плана, 0 при нулевом плане
fn plan_percentage(actual: f64, planned: f64) -> i64 {
    if planned > 0.0 {
        (actual / planned * 100.0).round() as i64
    } else {
        0
    }
}

pub fn compute_dashboard_metrics(tours: &[Tour], baseline: &MetricsBaseline) -> DashboardMetrics {
    let total_active_tours = tours.iter().filter(|t| t.is_active).count();
    let daily_bookings: i64 = tours.iter().map(|t| t.recently_booked_30min).sum();
    let tours_sold: i64 = tours.iter().map(|t| t.sold).sum();
    let tours_sold_planned: i64 = tours.iter().map(|t| t.planned).sum();

    let daily_revenue: f64 = tours.iter().map(|t| parse_decimal_or_zero(&t.daily_revenue)).sum();
    let revenue: f64 = tours.iter().map(|t| parse_decimal_or_zero(&t.revenue)).sum();
    let revenue_planned: f64 = tours
        .iter()
        .map(|t| parse_decimal_or_zero(&t.planned_revenue))
        .sum();

    let sold_percentage = plan_percentage(tours_sold as f64, tours_sold_planned as f64);

    DashboardMetrics {
        total_active_tours,
        total_active_tours_change: baseline.total_active_tours_change,
        daily_bookings,
        daily_bookings_change: baseline.daily_bookings_change,
        weekly_bookings_change: baseline.weekly_bookings_change,
        daily_revenue: format!("{:.0}", daily_revenue),
        daily_revenue_change: baseline.daily_revenue_change,
        weekly_revenue_change: baseline.weekly_revenue_change,
        tours_sold,
        tours_sold_planned,
        tours_sold_change: baseline.tours_sold_change,
        tours_sold_plan_percentage: sold_percentage,
        revenue: format!("{:.0}", revenue),
        revenue_planned: format!("{:.0}", revenue_planned),
        revenue_change: baseline.revenue_change,
        revenue_plan_percentage: plan_percentage(revenue, revenue_planned),
        completion_rate: sold_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::TourDto;
    use crate::enums::tour_category::TourCategory;

    fn tour(planned: i64, sold: i64, revenue: &str, planned_revenue: &str, active: bool) -> Tour {
        let mut dto = TourDto::new("t", TourCategory::Domestic, "a");
        dto.planned = planned;
        dto.sold = sold;
        dto.recently_booked_30min = 2;
        dto.revenue = Some(revenue.into());
        dto.daily_revenue = Some("1000000".into());
        dto.planned_revenue = Some(planned_revenue.into());
        dto.is_active = Some(active);
        Tour::new_for_insert(dto)
    }

    #[test]
    fn test_sums_and_plan_percentages() {
        let tours = vec![
            tour(100, 80, "800000000", "1000000000", true),
            tour(50, 20, "200000000", "500000000", false),
        ];
        let m = compute_dashboard_metrics(&tours, &MetricsBaseline::default());
        assert_eq!(m.total_active_tours, 1);
        assert_eq!(m.daily_bookings, 4);
        assert_eq!(m.daily_revenue, "2000000");
        assert_eq!(m.tours_sold, 100);
        assert_eq!(m.tours_sold_planned, 150);
        assert_eq!(m.tours_sold_plan_percentage, 67);
        assert_eq!(m.completion_rate, 67);
        assert_eq!(m.revenue, "1000000000");
        assert_eq!(m.revenue_planned, "1500000000");
        assert_eq!(m.revenue_plan_percentage, 67);
        assert_eq!(m.revenue_change, 15.7);
    }

    #[test]
    fn test_zero_plan_gives_zero_percentage() {
        let m = compute_dashboard_metrics(&[], &MetricsBaseline::default());
        assert_eq!(m.tours_sold_plan_percentage, 0);
        assert_eq!(m.revenue_plan_percentage, 0);
        assert_eq!(m.revenue, "0");
    }

    #[test]
    fn test_invalid_amounts_count_as_zero() {
        let tours = vec![tour(10, 5, "abc", "100", true)];
        let m = compute_dashboard_metrics(&tours, &MetricsBaseline::default());
        assert_eq!(m.revenue, "0");
        assert_eq!(m.revenue_plan_percentage, 0);
    }

    #[test]
    fn test_json_field_names() {
        let m = compute_dashboard_metrics(&[], &MetricsBaseline::default());
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("toursSoldPlanPercentage").is_some());
        assert!(json.get("weeklyRevenueChange").is_some());
    }
}
