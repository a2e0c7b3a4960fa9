use contracts::domain::a002_hierarchy_level::HierarchyLevel;
use contracts::enums::hierarchy_level_kind::HierarchyLevelKind;
use contracts::enums::tour_category::TourCategory;

use crate::shared::data::storage::get_storage;

pub async fn list_all() -> anyhow::Result<Vec<HierarchyLevel>> {
    Ok(get_storage().list_hierarchy_levels().await)
}

pub async fn list_by_category(category: TourCategory) -> anyhow::Result<Vec<HierarchyLevel>> {
    Ok(get_storage().list_hierarchy_levels_by_category(category).await)
}

pub async fn list_by_level(level: HierarchyLevelKind) -> anyhow::Result<Vec<HierarchyLevel>> {
    Ok(get_storage().list_hierarchy_levels_by_level(level).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_level_keeps_kind() {
        let areas = list_by_level(HierarchyLevelKind::Area).await.unwrap();
        assert!(!areas.is_empty());
        assert!(areas.iter().all(|l| l.level == HierarchyLevelKind::Area));
    }

    #[tokio::test]
    async fn test_list_by_category_starts_with_root() {
        let domestic = list_by_category(TourCategory::Domestic).await.unwrap();
        assert_eq!(domestic[0].code, "tour_noi_dia");
    }
}
