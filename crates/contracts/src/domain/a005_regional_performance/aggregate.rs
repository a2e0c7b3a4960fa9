use serde::{Deserialize, Serialize};

use crate::enums::performance_status::PerformanceStatus;
use crate::shared::number_format::parse_decimal;

crate::uuid_id!(RegionalPerformanceId);

/// Показатель выполнения плана по городу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalPerformance {
    pub id: RegionalPerformanceId,
    pub city_name: String,
    pub performance_rate: String,
    pub status: PerformanceStatus,
}

impl RegionalPerformance {
    /// Без явного статуса он выводится из процента
    pub fn new_for_insert(dto: RegionalPerformanceDto) -> Self {
        let status = dto
            .status
            .unwrap_or_else(|| PerformanceStatus::from_rate(parse_decimal(&dto.performance_rate)));
        Self {
            id: RegionalPerformanceId::new_v4(),
            city_name: dto.city_name,
            performance_rate: dto.performance_rate,
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalPerformanceDto {
    pub city_name: String,
    pub performance_rate: String,
    #[serde(default)]
    pub status: Option<PerformanceStatus>,
}
