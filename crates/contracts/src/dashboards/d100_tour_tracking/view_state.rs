use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::a001_tour::NumericFigures;
use crate::enums::tour_category::TourCategory;

/// Состояние представления таблицы туров.
///
/// Неизменяемый снимок: все `with_*` методы возвращают новое состояние.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Флаги раскрытия по имени раздела (`domestic`, `international`)
    /// или по коду узла. Отсутствующий ключ означает "раскрыт".
    #[serde(default)]
    pub expanded: HashMap<String, bool>,
    #[serde(default)]
    pub selected_sales_unit: SalesUnitFilter,
    #[serde(default)]
    pub level_filters: LevelFilters,
    #[serde(default)]
    pub sort: Option<TableSort>,
}

impl ViewState {
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(true)
    }

    /// Переключить флаг одного узла. Флаги потомков не меняются.
    pub fn with_toggled(&self, key: &str) -> Self {
        let mut next = self.clone();
        let current = next.is_expanded(key);
        next.expanded.insert(key.to_string(), !current);
        next
    }

    pub fn with_expanded(&self, key: &str, expanded: bool) -> Self {
        let mut next = self.clone();
        next.expanded.insert(key.to_string(), expanded);
        next
    }

    pub fn with_sales_unit(&self, filter: SalesUnitFilter) -> Self {
        let mut next = self.clone();
        next.selected_sales_unit = filter;
        next
    }

    pub fn with_level(&self, level: u8, category: TourCategory, enabled: bool) -> Self {
        let mut next = self.clone();
        next.level_filters.set(level, category, enabled);
        next
    }

    /// Клик по заголовку колонки: asc → desc → без сортировки.
    /// Клик по другой колонке начинает с asc.
    pub fn with_sort_clicked(&self, field: SortField) -> Self {
        let mut next = self.clone();
        next.sort = match self.sort {
            Some(TableSort {
                field: current,
                direction,
            }) if current == field => match direction {
                SortDirection::Asc => Some(TableSort {
                    field,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(TableSort {
                field,
                direction: SortDirection::Asc,
            }),
        };
        next
    }
}

// ============================================================================
// Sales unit filter
// ============================================================================

/// Фильтр по подразделению продаж: `"all"` или код подразделения
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SalesUnitFilter {
    #[default]
    All,
    Code(String),
}

impl SalesUnitFilter {
    pub const ALL: &'static str = "all";

    pub fn matches(&self, top_sales_unit: &str) -> bool {
        match self {
            SalesUnitFilter::All => true,
            SalesUnitFilter::Code(code) => code == top_sales_unit,
        }
    }
}

impl From<String> for SalesUnitFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == Self::ALL {
            SalesUnitFilter::All
        } else {
            SalesUnitFilter::Code(value)
        }
    }
}

impl From<&str> for SalesUnitFilter {
    fn from(value: &str) -> Self {
        SalesUnitFilter::from(value.to_string())
    }
}

impl From<SalesUnitFilter> for String {
    fn from(value: SalesUnitFilter) -> Self {
        match value {
            SalesUnitFilter::All => SalesUnitFilter::ALL.to_string(),
            SalesUnitFilter::Code(code) => code,
        }
    }
}

// ============================================================================
// Level filters
// ============================================================================

/// Флаги по категориям для одного уровня
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryFlags {
    pub domestic: bool,
    pub international: bool,
}

impl CategoryFlags {
    pub fn get(&self, category: TourCategory) -> bool {
        match category {
            TourCategory::Domestic => self.domestic,
            TourCategory::International => self.international,
        }
    }

    pub fn set(&mut self, category: TourCategory, value: bool) {
        match category {
            TourCategory::Domestic => self.domestic = value,
            TourCategory::International => self.international = value,
        }
    }
}

/// Выбор видимых уровней (1..=3) для каждой категории.
///
/// Уровни отсчитываются от корня раздела:
/// внутренние: 1 регион, 2 область, 3 туры;
/// международные: 1 континент, 2 регион, 3 область.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelFilters {
    pub level1: CategoryFlags,
    pub level2: CategoryFlags,
    pub level3: CategoryFlags,
}

/// Режим вывода содержимого раздела
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelMode {
    /// Фильтров нет: вся иерархия, раскрытие по флагам узлов
    Full,
    /// Только отмеченные уровни этой категории
    Selected([bool; 3]),
    /// Фильтры включены, но не для этой категории: только строка раздела
    SectionOnly,
}

impl LevelFilters {
    fn levels(&self) -> [&CategoryFlags; 3] {
        [&self.level1, &self.level2, &self.level3]
    }

    pub fn is_any_active(&self) -> bool {
        self.levels().iter().any(|l| l.domestic || l.international)
    }

    /// Количество включённых флажков (для бейджа "Lọc theo cấp (N)")
    pub fn active_count(&self) -> usize {
        self.levels()
            .iter()
            .map(|l| l.domestic as usize + l.international as usize)
            .sum()
    }

    pub fn active_levels(&self, category: TourCategory) -> [bool; 3] {
        let [l1, l2, l3] = self.levels();
        [l1.get(category), l2.get(category), l3.get(category)]
    }

    pub fn mode_for(&self, category: TourCategory) -> LevelMode {
        if !self.is_any_active() {
            return LevelMode::Full;
        }
        let levels = self.active_levels(category);
        if levels.iter().any(|on| *on) {
            LevelMode::Selected(levels)
        } else {
            LevelMode::SectionOnly
        }
    }

    /// Уровни вне 1..=3 игнорируются
    pub fn set(&mut self, level: u8, category: TourCategory, value: bool) {
        match level {
            1 => self.level1.set(category, value),
            2 => self.level2.set(category, value),
            3 => self.level3.set(category, value),
            _ => {}
        }
    }

    /// Разбор списка вида `domestic:1,international:3`
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut filters = LevelFilters::default();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (category, level) = part
                .split_once(':')
                .ok_or_else(|| format!("Invalid level filter '{}': expected category:level", part))?;
            let category = TourCategory::from_code(category.trim())
                .ok_or_else(|| format!("Unknown category '{}'", category.trim()))?;
            let level: u8 = level
                .trim()
                .parse()
                .map_err(|_| format!("Invalid level '{}'", level.trim()))?;
            if !(1..=3).contains(&level) {
                return Err(format!("Level must be 1..=3, got {}", level));
            }
            filters.set(level, category, true);
        }
        Ok(filters)
    }
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Planned,
    Sold,
    Remaining,
    RecentlyBooked,
    CompletionRate,
    Revenue,
    TargetPercentage,
}

impl SortField {
    pub fn value_of(&self, figures: &NumericFigures) -> f64 {
        match self {
            SortField::Planned => figures.planned,
            SortField::Sold => figures.sold,
            SortField::Remaining => figures.remaining,
            SortField::RecentlyBooked => figures.recently_booked,
            SortField::CompletionRate => figures.completion_rate,
            SortField::Revenue => figures.revenue,
            SortField::TargetPercentage => figures.target_percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Сортировка соседних строк таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSort {
    pub field: SortField,
    pub direction: SortDirection,
}
