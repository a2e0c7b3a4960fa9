use serde::{Deserialize, Serialize};

/// Категория тура: внутренний или международный
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourCategory {
    Domestic,
    International,
}

impl TourCategory {
    /// Код категории (как в JSON и в URL)
    pub fn code(&self) -> &'static str {
        match self {
            TourCategory::Domestic => "domestic",
            TourCategory::International => "international",
        }
    }

    /// Заголовок раздела таблицы
    pub fn display_name(&self) -> &'static str {
        match self {
            TourCategory::Domestic => "TOUR NỘI ĐỊA",
            TourCategory::International => "TOUR QUỐC TẾ",
        }
    }

    /// Все категории в порядке вывода в таблице
    pub fn all() -> Vec<TourCategory> {
        vec![TourCategory::Domestic, TourCategory::International]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "domestic" => Some(TourCategory::Domestic),
            "international" => Some(TourCategory::International),
            _ => None,
        }
    }
}

impl std::fmt::Display for TourCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
