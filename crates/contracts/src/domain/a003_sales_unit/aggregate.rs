use serde::{Deserialize, Serialize};

use crate::enums::performance_status::PerformanceStatus;

crate::uuid_id!(SalesUnitId);

/// Подразделение продаж (HCM, HN, CT); используется для подписей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesUnit {
    pub id: SalesUnitId,
    pub name: String,
    pub code: String,
    pub performance_rate: String,
    pub status: PerformanceStatus,
}

impl SalesUnit {
    pub fn new_for_insert(dto: SalesUnitDto) -> Self {
        Self {
            id: SalesUnitId::new_v4(),
            name: dto.name,
            code: dto.code,
            performance_rate: dto.performance_rate.unwrap_or_else(|| "0".to_string()),
            status: dto.status.unwrap_or(PerformanceStatus::Good),
        }
    }

    pub fn apply_patch(&mut self, patch: &SalesUnitPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(rate) = &patch.performance_rate {
            self.performance_rate = rate.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesUnitDto {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub performance_rate: Option<String>,
    #[serde(default)]
    pub status: Option<PerformanceStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesUnitPatch {
    pub name: Option<String>,
    pub performance_rate: Option<String>,
    pub status: Option<PerformanceStatus>,
}
