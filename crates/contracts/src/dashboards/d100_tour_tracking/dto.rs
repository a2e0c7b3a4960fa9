use serde::{Deserialize, Serialize};

use super::rollup::Row;
use super::view_state::{LevelFilters, SalesUnitFilter, SortDirection, SortField, TableSort, ViewState};

/// Параметры запроса `GET /api/dashboard/tour-table`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourTableQuery {
    /// `all` или код подразделения
    pub sales_unit: Option<String>,
    /// Например `domestic:1,international:3`
    pub levels: Option<String>,
    /// Свёрнутые разделы и узлы (коды через запятую)
    pub collapsed: Option<String>,
    pub sort_field: Option<SortField>,
    pub sort_direction: Option<SortDirection>,
}

impl TourTableQuery {
    pub fn into_view_state(self) -> Result<ViewState, String> {
        let mut view = ViewState::default();

        if let Some(unit) = self.sales_unit {
            view.selected_sales_unit = SalesUnitFilter::from(unit);
        }
        if let Some(levels) = self.levels.as_deref() {
            view.level_filters = LevelFilters::parse(levels)?;
        }
        if let Some(collapsed) = self.collapsed.as_deref() {
            for key in collapsed.split(',').map(str::trim).filter(|k| !k.is_empty()) {
                view.expanded.insert(key.to_string(), false);
            }
        }
        view.sort = match (self.sort_field, self.sort_direction) {
            (Some(field), direction) => Some(TableSort {
                field,
                direction: direction.unwrap_or(SortDirection::Asc),
            }),
            (None, Some(_)) => return Err("sortDirection requires sortField".to_string()),
            (None, None) => None,
        };

        Ok(view)
    }
}

/// Ответ `GET /api/dashboard/tour-table`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourTableResponse {
    pub rows: Vec<Row>,
    /// Туров после фильтра по подразделению
    pub filtered_tour_count: usize,
    pub active_level_filters: usize,
    pub view: ViewState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_into_view_state() {
        let query = TourTableQuery {
            sales_unit: Some("HN".into()),
            levels: Some("domestic:1,international:3".into()),
            collapsed: Some("international, mien_bac".into()),
            sort_field: Some(SortField::Revenue),
            sort_direction: None,
        };
        let view = query.into_view_state().unwrap();
        assert_eq!(view.selected_sales_unit, SalesUnitFilter::Code("HN".into()));
        assert_eq!(view.level_filters.active_count(), 2);
        assert!(!view.is_expanded("international"));
        assert!(!view.is_expanded("mien_bac"));
        assert!(view.is_expanded("domestic"));
        assert_eq!(view.sort.map(|s| s.direction), Some(SortDirection::Asc));
    }

    #[test]
    fn test_query_errors() {
        let bad_level = TourTableQuery {
            levels: Some("domestic:9".into()),
            ..Default::default()
        };
        assert!(bad_level.into_view_state().is_err());

        let orphan_direction = TourTableQuery {
            sort_direction: Some(SortDirection::Desc),
            ..Default::default()
        };
        assert!(orphan_direction.into_view_state().is_err());
    }

    #[test]
    fn test_query_deserializes_camel_case() {
        let query: TourTableQuery =
            serde_json::from_str(r#"{"salesUnit":"all","sortField":"recentlyBooked","sortDirection":"desc"}"#)
                .unwrap();
        let view = query.into_view_state().unwrap();
        assert_eq!(view.selected_sales_unit, SalesUnitFilter::All);
        assert_eq!(
            view.sort,
            Some(TableSort {
                field: SortField::RecentlyBooked,
                direction: SortDirection::Desc
            })
        );
    }
}
