use once_cell::sync::OnceCell;
use tokio::sync::RwLock;

use contracts::domain::a001_tour::{Tour, TourDto, TourId, TourPatch};
use contracts::domain::a002_hierarchy_level::{
    HierarchyLevel, HierarchyLevelDto, HierarchyLevelId, HierarchyLevelPatch,
};
use contracts::domain::a003_sales_unit::{SalesUnit, SalesUnitDto, SalesUnitId, SalesUnitPatch};
use contracts::domain::a004_activity::{Activity, ActivityDto};
use contracts::domain::a005_regional_performance::{RegionalPerformance, RegionalPerformanceDto};
use contracts::enums::hierarchy_level_kind::HierarchyLevelKind;
use contracts::enums::tour_category::TourCategory;

use super::fixtures;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Tour not found: {0}")]
    TourNotFound(String),
    #[error("Hierarchy level not found: {0}")]
    HierarchyLevelNotFound(String),
    #[error("Sales unit not found: {0}")]
    SalesUnitNotFound(String),
    #[error("Duplicate code: {0}")]
    DuplicateCode(String),
}

/// In-memory хранилище. Коллекции хранят порядок вставки.
///
/// Каждая коллекция под своим `RwLock`; изменение записи выполняется
/// целиком под блокировкой записи.
#[derive(Default)]
pub struct MemStorage {
    tours: RwLock<Vec<Tour>>,
    hierarchy_levels: RwLock<Vec<HierarchyLevel>>,
    sales_units: RwLock<Vec<SalesUnit>>,
    activities: RwLock<Vec<Activity>>,
    regional_performance: RwLock<Vec<RegionalPerformance>>,
}

static STORAGE: OnceCell<MemStorage> = OnceCell::new();

/// Создать глобальное хранилище с начальными данными
pub fn initialize_storage() {
    get_storage();
    tracing::info!("In-memory storage seeded with fixture data");
}

pub fn get_storage() -> &'static MemStorage {
    STORAGE.get_or_init(MemStorage::seeded)
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище, заполненное фикстурами
    pub fn seeded() -> Self {
        Self {
            tours: RwLock::new(fixtures::tours()),
            hierarchy_levels: RwLock::new(fixtures::hierarchy_levels()),
            sales_units: RwLock::new(fixtures::sales_units()),
            activities: RwLock::new(fixtures::activities()),
            regional_performance: RwLock::new(fixtures::regional_performance()),
        }
    }

    // ------------------------------------------------------------------
    // Tours
    // ------------------------------------------------------------------

    pub async fn list_tours(&self) -> Vec<Tour> {
        self.tours.read().await.clone()
    }

    async fn list_tours_where(&self, pred: impl Fn(&Tour) -> bool) -> Vec<Tour> {
        self.tours
            .read()
            .await
            .iter()
            .filter(|t| pred(t))
            .cloned()
            .collect()
    }

    pub async fn list_tours_by_category(&self, category: TourCategory) -> Vec<Tour> {
        self.list_tours_where(|t| t.category == category).await
    }

    pub async fn list_tours_by_area(&self, area_code: &str) -> Vec<Tour> {
        self.list_tours_where(|t| t.area == area_code).await
    }

    pub async fn list_tours_by_sales_unit(&self, code: &str) -> Vec<Tour> {
        self.list_tours_where(|t| t.top_sales_unit == code).await
    }

    pub async fn get_tour(&self, id: TourId) -> Option<Tour> {
        self.tours.read().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn create_tour(&self, dto: TourDto) -> Tour {
        let tour = Tour::new_for_insert(dto);
        self.tours.write().await.push(tour.clone());
        tour
    }

    pub async fn update_tour(&self, id: TourId, patch: &TourPatch) -> Result<Tour, StorageError> {
        let mut tours = self.tours.write().await;
        let tour = tours
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StorageError::TourNotFound(id.to_string()))?;
        tour.apply_patch(patch);
        Ok(tour.clone())
    }

    /// `recentlyBooked = new_bookings`, `sold += new_bookings`
    pub async fn update_tour_bookings(
        &self,
        id: TourId,
        new_bookings: i64,
    ) -> Result<Tour, StorageError> {
        let mut tours = self.tours.write().await;
        let tour = tours
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StorageError::TourNotFound(id.to_string()))?;
        tour.record_bookings(new_bookings);
        Ok(tour.clone())
    }

    // ------------------------------------------------------------------
    // Hierarchy levels
    // ------------------------------------------------------------------

    pub async fn list_hierarchy_levels(&self) -> Vec<HierarchyLevel> {
        self.hierarchy_levels.read().await.clone()
    }

    pub async fn list_hierarchy_levels_by_category(
        &self,
        category: TourCategory,
    ) -> Vec<HierarchyLevel> {
        self.hierarchy_levels
            .read()
            .await
            .iter()
            .filter(|l| l.category == category)
            .cloned()
            .collect()
    }

    pub async fn list_hierarchy_levels_by_level(
        &self,
        level: HierarchyLevelKind,
    ) -> Vec<HierarchyLevel> {
        self.hierarchy_levels
            .read()
            .await
            .iter()
            .filter(|l| l.level == level)
            .cloned()
            .collect()
    }

    pub async fn create_hierarchy_level(
        &self,
        dto: HierarchyLevelDto,
    ) -> Result<HierarchyLevel, StorageError> {
        let mut levels = self.hierarchy_levels.write().await;
        if levels.iter().any(|l| l.code == dto.code) {
            return Err(StorageError::DuplicateCode(dto.code));
        }
        let level = HierarchyLevel::new_for_insert(dto);
        levels.push(level.clone());
        Ok(level)
    }

    pub async fn update_hierarchy_level(
        &self,
        id: HierarchyLevelId,
        patch: &HierarchyLevelPatch,
    ) -> Result<HierarchyLevel, StorageError> {
        let mut levels = self.hierarchy_levels.write().await;
        let level = levels
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StorageError::HierarchyLevelNotFound(id.to_string()))?;
        level.apply_patch(patch);
        Ok(level.clone())
    }

    // ------------------------------------------------------------------
    // Sales units
    // ------------------------------------------------------------------

    pub async fn list_sales_units(&self) -> Vec<SalesUnit> {
        self.sales_units.read().await.clone()
    }

    pub async fn create_sales_unit(&self, dto: SalesUnitDto) -> Result<SalesUnit, StorageError> {
        let mut units = self.sales_units.write().await;
        if units.iter().any(|u| u.code == dto.code) {
            return Err(StorageError::DuplicateCode(dto.code));
        }
        let unit = SalesUnit::new_for_insert(dto);
        units.push(unit.clone());
        Ok(unit)
    }

    pub async fn update_sales_unit(
        &self,
        id: SalesUnitId,
        patch: &SalesUnitPatch,
    ) -> Result<SalesUnit, StorageError> {
        let mut units = self.sales_units.write().await;
        let unit = units
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StorageError::SalesUnitNotFound(id.to_string()))?;
        unit.apply_patch(patch);
        Ok(unit.clone())
    }

    // ------------------------------------------------------------------
    // Activities
    // ------------------------------------------------------------------

    /// Новые сверху; при равном времени позже добавленная запись идёт первой
    pub async fn list_recent_activities(&self, limit: usize) -> Vec<Activity> {
        let activities = self.activities.read().await;
        let mut recent: Vec<Activity> = activities.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(limit);
        recent
    }

    pub async fn create_activity(&self, dto: ActivityDto) -> Activity {
        let activity = Activity::new_for_insert(dto);
        self.activities.write().await.push(activity.clone());
        activity
    }

    // ------------------------------------------------------------------
    // Regional performance
    // ------------------------------------------------------------------

    pub async fn list_regional_performance(&self) -> Vec<RegionalPerformance> {
        self.regional_performance.read().await.clone()
    }

    pub async fn create_regional_performance(
        &self,
        dto: RegionalPerformanceDto,
    ) -> RegionalPerformance {
        let performance = RegionalPerformance::new_for_insert(dto);
        self.regional_performance
            .write()
            .await
            .push(performance.clone());
        performance
    }
}
