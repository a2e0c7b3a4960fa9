use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::view_state::{LevelMode, SortDirection, TableSort, ViewState};
use crate::domain::a001_tour::{NumericFigures, Tour};
use crate::domain::a002_hierarchy_level::HierarchyLevel;
use crate::domain::a003_sales_unit::SalesUnit;
use crate::enums::hierarchy_level_kind::HierarchyLevelKind;
use crate::enums::tour_category::TourCategory;

/// Снимок данных, из которого строится таблица
#[derive(Debug, Clone, Default)]
pub struct TourTableData {
    pub tours: Vec<Tour>,
    pub hierarchy_levels: Vec<HierarchyLevel>,
    pub sales_units: Vec<SalesUnit>,
}

/// Строка узла иерархии (раздел, континент, регион или область)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRow {
    pub node: HierarchyLevel,
    pub depth: usize,
    pub is_expanded: bool,
}

/// Строка тура
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRow {
    pub tour: Tour,
    pub depth: usize,
}

/// Видимая строка таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    Section(NodeRow),
    Continent(NodeRow),
    Region(NodeRow),
    Area(NodeRow),
    Tour(TourRow),
}

impl Row {
    pub fn depth(&self) -> usize {
        match self {
            Row::Section(r) | Row::Continent(r) | Row::Region(r) | Row::Area(r) => r.depth,
            Row::Tour(r) => r.depth,
        }
    }

    /// У тура нет раскрытия
    pub fn is_expanded(&self) -> bool {
        match self {
            Row::Section(r) | Row::Continent(r) | Row::Region(r) | Row::Area(r) => r.is_expanded,
            Row::Tour(_) => false,
        }
    }

    pub fn node(&self) -> Option<&HierarchyLevel> {
        match self {
            Row::Section(r) | Row::Continent(r) | Row::Region(r) | Row::Area(r) => Some(&r.node),
            Row::Tour(_) => None,
        }
    }

    pub fn tour(&self) -> Option<&Tour> {
        match self {
            Row::Tour(r) => Some(&r.tour),
            _ => None,
        }
    }

    /// Код узла или название тура
    pub fn label(&self) -> &str {
        match self {
            Row::Tour(r) => &r.tour.name,
            other => other.node().map(|n| n.code.as_str()).unwrap_or_default(),
        }
    }
}

/// Шаг цепочки уровней категории ниже корня
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Nodes(HierarchyLevelKind),
    Tours,
}

/// Уровни 1..=3 категории
fn chain(category: TourCategory) -> [Step; 3] {
    match category {
        TourCategory::Domestic => [
            Step::Nodes(HierarchyLevelKind::Region),
            Step::Nodes(HierarchyLevelKind::Area),
            Step::Tours,
        ],
        TourCategory::International => [
            Step::Nodes(HierarchyLevelKind::Continent),
            Step::Nodes(HierarchyLevelKind::Region),
            Step::Nodes(HierarchyLevelKind::Area),
        ],
    }
}

#[derive(Clone, Copy)]
enum Item<'a> {
    Node(&'a HierarchyLevel),
    Tour(&'a Tour),
}

impl Item<'_> {
    fn figures(&self) -> NumericFigures {
        match self {
            Item::Node(n) => n.numeric(),
            Item::Tour(t) => t.numeric(),
        }
    }
}

/// Плоский список видимых строк с глубиной.
///
/// Сначала внутренние туры, затем международные. Обход в глубину,
/// соседние строки в исходном порядке, если не задана `view.sort`.
/// Когда фильтр уровней пропускает верхние уровни, первый выбранный
/// уровень берётся целиком по категории в исходном порядке.
pub fn build_rows(data: &TourTableData, view: &ViewState) -> Vec<Row> {
    let builder = RowBuilder::new(data, view);
    let mut rows = Vec::new();
    for category in TourCategory::all() {
        builder.emit_category(category, &mut rows);
    }
    rows
}

/// Туры, прошедшие фильтр по подразделению, в исходном порядке
pub fn filter_tours<'a>(tours: &'a [Tour], view: &ViewState) -> Vec<&'a Tour> {
    tours
        .iter()
        .filter(|t| view.selected_sales_unit.matches(&t.top_sales_unit))
        .collect()
}

/// Группировка туров по коду области с сохранением порядка внутри группы
pub fn group_tours_by_area<'a>(tours: &[&'a Tour]) -> HashMap<&'a str, Vec<&'a Tour>> {
    let mut groups: HashMap<&str, Vec<&Tour>> = HashMap::new();
    for tour in tours {
        groups.entry(tour.area.as_str()).or_default().push(tour);
    }
    groups
}

struct RowBuilder<'a> {
    view: &'a ViewState,
    levels: &'a [HierarchyLevel],
    tours: Vec<&'a Tour>,
    children: HashMap<&'a str, Vec<&'a HierarchyLevel>>,
    tours_by_area: HashMap<&'a str, Vec<&'a Tour>>,
}

impl<'a> RowBuilder<'a> {
    fn new(data: &'a TourTableData, view: &'a ViewState) -> Self {
        let mut children: HashMap<&str, Vec<&HierarchyLevel>> = HashMap::new();
        for level in &data.hierarchy_levels {
            if let Some(parent) = level.parent_code.as_deref() {
                children.entry(parent).or_default().push(level);
            }
        }

        let filtered = filter_tours(&data.tours, view);
        let tours_by_area = group_tours_by_area(&filtered);

        Self {
            view,
            levels: &data.hierarchy_levels,
            tours: filtered,
            children,
            tours_by_area,
        }
    }

    fn nodes_of_kind(&self, category: TourCategory, kind: HierarchyLevelKind) -> Vec<&'a HierarchyLevel> {
        self.levels
            .iter()
            .filter(|l| l.category == category && l.level == kind)
            .collect()
    }

    fn emit_category(&self, category: TourCategory, rows: &mut Vec<Row>) {
        let root = self
            .nodes_of_kind(category, HierarchyLevelKind::root_of(category))
            .into_iter()
            .next();
        let mut depth = 0;

        if let Some(root) = root {
            let expanded = self.view.is_expanded(category.code());
            rows.push(Row::Section(NodeRow {
                node: root.clone(),
                depth: 0,
                is_expanded: expanded,
            }));
            if !expanded {
                return;
            }
            depth = 1;
        }

        match self.view.level_filters.mode_for(category) {
            LevelMode::Full => self.emit_full(category, None, 0, depth, rows),
            LevelMode::Selected(levels) => self.emit_selected(category, None, 0, depth, &levels, rows),
            LevelMode::SectionOnly => {}
        }
    }

    /// Элементы шага `step` под `parent`. Без родителя берётся весь уровень
    /// категории в исходном порядке, включая туры.
    fn items(&self, category: TourCategory, parent: Option<&HierarchyLevel>, step: usize) -> Vec<Item<'a>> {
        let mut items: Vec<Item<'a>> = match (chain(category)[step], parent) {
            (Step::Nodes(kind), None) => self
                .nodes_of_kind(category, kind)
                .into_iter()
                .map(Item::Node)
                .collect(),
            (Step::Nodes(kind), Some(parent)) => self
                .children
                .get(parent.code.as_str())
                .map(|nodes| {
                    nodes
                        .iter()
                        .filter(|n| n.category == category && n.level == kind)
                        .map(|n| Item::Node(*n))
                        .collect()
                })
                .unwrap_or_default(),
            (Step::Tours, Some(parent)) => self
                .tours_by_area
                .get(parent.code.as_str())
                .map(|tours| tours.iter().map(|t| Item::Tour(*t)).collect())
                .unwrap_or_default(),
            (Step::Tours, None) => self
                .tours
                .iter()
                .filter(|t| t.category == category)
                .map(|t| Item::Tour(*t))
                .collect(),
        };

        if let Some(sort) = self.view.sort {
            sort_items(&mut items, sort);
        }
        items
    }

    fn emit_full(
        &self,
        category: TourCategory,
        parent: Option<&HierarchyLevel>,
        step: usize,
        depth: usize,
        rows: &mut Vec<Row>,
    ) {
        let has_next = step + 1 < chain(category).len();
        for item in self.items(category, parent, step) {
            match item {
                Item::Tour(tour) => rows.push(tour_row(tour, depth)),
                Item::Node(node) => {
                    let expanded = has_next && self.view.is_expanded(&node.code);
                    rows.push(node_row(node, depth, expanded));
                    if expanded {
                        self.emit_full(category, Some(node), step + 1, depth + 1, rows);
                    }
                }
            }
        }
    }

    fn emit_selected(
        &self,
        category: TourCategory,
        parent: Option<&HierarchyLevel>,
        step: usize,
        depth: usize,
        levels: &[bool; 3],
        rows: &mut Vec<Row>,
    ) {
        let Some(first) = (step..levels.len()).find(|s| levels[*s]) else {
            return;
        };
        if parent.is_none() && first > step {
            // выше первого выбранного уровня строк нет
            return self.emit_selected(category, None, first, depth, levels, rows);
        }
        let selected = levels[step];
        let deeper = levels[step + 1..].iter().any(|on| *on);

        for item in self.items(category, parent, step) {
            match item {
                Item::Tour(tour) => {
                    if selected {
                        rows.push(tour_row(tour, depth));
                    }
                }
                Item::Node(node) => {
                    let child_depth = if selected {
                        rows.push(node_row(node, depth, deeper));
                        depth + 1
                    } else {
                        depth
                    };
                    if deeper {
                        self.emit_selected(category, Some(node), step + 1, child_depth, levels, rows);
                    }
                }
            }
        }
    }
}

fn node_row(node: &HierarchyLevel, depth: usize, is_expanded: bool) -> Row {
    let row = NodeRow {
        node: node.clone(),
        depth,
        is_expanded,
    };
    match node.level {
        HierarchyLevelKind::Continent => Row::Continent(row),
        HierarchyLevelKind::Region => Row::Region(row),
        HierarchyLevelKind::Area => Row::Area(row),
        HierarchyLevelKind::TourCategory | HierarchyLevelKind::GeoRegion => Row::Section(row),
    }
}

fn tour_row(tour: &Tour, depth: usize) -> Row {
    Row::Tour(TourRow {
        tour: tour.clone(),
        depth,
    })
}

/// Стабильная сортировка; NaN равен всему
fn sort_items(items: &mut [Item<'_>], sort: TableSort) {
    items.sort_by(|a, b| {
        let va = sort.field.value_of(&a.figures());
        let vb = sort.field.value_of(&b.figures());
        let ord = va.partial_cmp(&vb).unwrap_or(Ordering::Equal);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_tour_tracking::view_state::{
        LevelFilters, SalesUnitFilter, SortField,
    };
    use crate::domain::a001_tour::TourDto;
    use crate::domain::a002_hierarchy_level::HierarchyLevelDto;

    fn level(
        code: &str,
        category: TourCategory,
        kind: HierarchyLevelKind,
        parent: Option<&str>,
    ) -> HierarchyLevel {
        HierarchyLevel::new_for_insert(HierarchyLevelDto::new(code, code, category, kind, parent))
    }

    fn tour(name: &str, area: &str, sold: i64, unit: &str) -> Tour {
        let mut dto = TourDto::new(name, TourCategory::Domestic, area);
        dto.sold = sold;
        dto.planned = 100;
        dto.top_sales_unit = Some(unit.to_string());
        Tour::new_for_insert(dto)
    }

    fn labels(rows: &[Row]) -> Vec<(String, usize)> {
        rows.iter().map(|r| (r.label().to_string(), r.depth())).collect()
    }

    /// Внутренние: корень → 2 региона → области → туры. Международные: корень → континент → регион → область.
    fn sample() -> TourTableData {
        use HierarchyLevelKind as K;
        use TourCategory::{Domestic, International};
        TourTableData {
            hierarchy_levels: vec![
                level("dom_root", Domestic, K::GeoRegion, None),
                level("north", Domestic, K::Region, Some("dom_root")),
                level("south", Domestic, K::Region, Some("dom_root")),
                level("hanoi", Domestic, K::Area, Some("north")),
                level("halong", Domestic, K::Area, Some("north")),
                level("saigon", Domestic, K::Area, Some("south")),
                level("intl_root", International, K::TourCategory, None),
                level("asia", International, K::Continent, Some("intl_root")),
                level("east_asia", International, K::Region, Some("asia")),
                level("japan", International, K::Area, Some("east_asia")),
            ],
            tours: vec![
                tour("t1", "hanoi", 10, "HN"),
                tour("t2", "saigon", 50, "HCM"),
                tour("t3", "hanoi", 30, "HCM"),
                tour("t4", "halong", 20, "HN"),
            ],
            sales_units: vec![],
        }
    }

    fn s(v: &[(&str, usize)]) -> Vec<(String, usize)> {
        v.iter().map(|(l, d)| (l.to_string(), *d)).collect()
    }

    #[test]
    fn test_full_hierarchy_dfs_order() {
        let rows = build_rows(&sample(), &ViewState::default());
        assert_eq!(
            labels(&rows),
            s(&[
                ("dom_root", 0),
                ("north", 1),
                ("hanoi", 2),
                ("t1", 3),
                ("t3", 3),
                ("halong", 2),
                ("t4", 3),
                ("south", 1),
                ("saigon", 2),
                ("t2", 3),
                ("intl_root", 0),
                ("asia", 1),
                ("east_asia", 2),
                ("japan", 3),
            ])
        );
        assert!(matches!(rows[0], Row::Section(_)));
        assert!(matches!(rows[1], Row::Region(_)));
        assert!(matches!(rows[2], Row::Area(_)));
        assert!(matches!(rows[3], Row::Tour(_)));
        assert!(matches!(rows[11], Row::Continent(_)));
    }

    #[test]
    fn test_international_area_is_terminal() {
        let rows = build_rows(&sample(), &ViewState::default());
        let japan = rows.iter().find(|r| r.label() == "japan").unwrap();
        assert!(!japan.is_expanded());
        let hanoi = rows.iter().find(|r| r.label() == "hanoi").unwrap();
        assert!(hanoi.is_expanded());
    }

    #[test]
    fn test_depth_never_jumps_more_than_one() {
        let rows = build_rows(&sample(), &ViewState::default());
        for pair in rows.windows(2) {
            assert!(pair[1].depth() <= pair[0].depth() + 1);
        }
    }

    #[test]
    fn test_without_root_l1_nodes_start_at_depth_zero() {
        use HierarchyLevelKind as K;
        let data = TourTableData {
            hierarchy_levels: vec![
                level("A", TourCategory::Domestic, K::Region, None),
                level("A1", TourCategory::Domestic, K::Area, Some("A")),
            ],
            tours: vec![tour("tour5", "A1", 5, "HCM"), tour("tour3", "A1", 3, "HCM")],
            sales_units: vec![],
        };
        let rows = build_rows(&data, &ViewState::default());
        assert_eq!(
            labels(&rows),
            s(&[("A", 0), ("A1", 1), ("tour5", 2), ("tour3", 2)])
        );
    }

    #[test]
    fn test_collapsed_section_emits_only_its_row() {
        let view = ViewState::default().with_expanded("domestic", false);
        let rows = build_rows(&sample(), &view);
        assert_eq!(rows[0].label(), "dom_root");
        assert!(!rows[0].is_expanded());
        assert_eq!(rows[1].label(), "intl_root");
    }

    #[test]
    fn test_collapsed_node_hides_descendants_only() {
        let view = ViewState::default().with_expanded("north", false);
        let rows = build_rows(&sample(), &view);
        let domestic: Vec<_> = labels(&rows).into_iter().take(5).collect();
        assert_eq!(
            domestic,
            s(&[("dom_root", 0), ("north", 1), ("south", 1), ("saigon", 2), ("t2", 3)])
        );
    }

    #[test]
    fn test_sales_unit_filter() {
        let view = ViewState::default().with_sales_unit(SalesUnitFilter::from("HN"));
        let rows = build_rows(&sample(), &view);
        let tours: Vec<_> = rows.iter().filter_map(Row::tour).collect();
        assert_eq!(tours.len(), 2);
        assert!(tours.iter().all(|t| t.top_sales_unit == "HN"));
        // area without matching tours still shows
        assert!(rows.iter().any(|r| r.label() == "saigon"));
    }

    #[test]
    fn test_all_filter_is_identity_and_groups_partition() {
        let data = sample();
        let view = ViewState::default();
        let filtered = filter_tours(&data.tours, &view);
        assert_eq!(filtered.len(), data.tours.len());
        let groups = group_tours_by_area(&filtered);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, filtered.len());
        let hanoi: Vec<_> = groups["hanoi"].iter().map(|t| t.name.as_str()).collect();
        assert_eq!(hanoi, vec!["t1", "t3"]);
    }

    #[test]
    fn test_level1_domestic_only() {
        let view = ViewState {
            level_filters: LevelFilters::parse("domestic:1").unwrap(),
            ..ViewState::default()
        };
        let rows = build_rows(&sample(), &view);
        assert_eq!(
            labels(&rows),
            s(&[("dom_root", 0), ("north", 1), ("south", 1), ("intl_root", 0)])
        );
        assert!(rows.iter().filter(|r| matches!(r, Row::Region(_))).all(|r| !r.is_expanded()));
    }

    #[test]
    fn test_level_filter_reparents_skipped_levels() {
        let view = ViewState {
            level_filters: LevelFilters::parse("domestic:1,domestic:3,international:3").unwrap(),
            ..ViewState::default()
        };
        let rows = build_rows(&sample(), &view);
        assert_eq!(
            labels(&rows),
            s(&[
                ("dom_root", 0),
                ("north", 1),
                ("t1", 2),
                ("t3", 2),
                ("t4", 2),
                ("south", 1),
                ("t2", 2),
                ("intl_root", 0),
                ("japan", 1),
            ])
        );
        let north = rows.iter().find(|r| r.label() == "north").unwrap();
        assert!(north.is_expanded());
    }

    #[test]
    fn test_level_filter_ignores_node_flags() {
        let view = ViewState {
            level_filters: LevelFilters::parse("domestic:2").unwrap(),
            ..ViewState::default()
        }
        .with_expanded("north", false);
        let rows = build_rows(&sample(), &view);
        let areas: Vec<_> = rows
            .iter()
            .filter(|r| matches!(r, Row::Area(_)))
            .map(|r| r.label())
            .collect();
        assert_eq!(areas, vec!["hanoi", "halong", "saigon"]);
    }

    /// Области не сгруппированы по регионам в исходном массиве
    fn interleaved() -> TourTableData {
        use HierarchyLevelKind as K;
        use TourCategory::Domestic;
        TourTableData {
            hierarchy_levels: vec![
                level("root", Domestic, K::GeoRegion, None),
                level("north", Domestic, K::Region, Some("root")),
                level("south", Domestic, K::Region, Some("root")),
                level("hanoi", Domestic, K::Area, Some("north")),
                level("saigon", Domestic, K::Area, Some("south")),
                level("halong", Domestic, K::Area, Some("north")),
            ],
            tours: vec![
                tour("t1", "hanoi", 10, "HN"),
                tour("t2", "saigon", 30, "HCM"),
                tour("t3", "halong", 20, "HN"),
                tour("t4", "unlisted", 5, "HN"),
            ],
            sales_units: vec![],
        }
    }

    fn with_levels(levels: &str) -> ViewState {
        ViewState {
            level_filters: LevelFilters::parse(levels).unwrap(),
            ..ViewState::default()
        }
    }

    #[test]
    fn test_top_selected_level_keeps_source_order() {
        let rows = build_rows(&interleaved(), &with_levels("domestic:2"));
        assert_eq!(
            labels(&rows),
            s(&[("root", 0), ("hanoi", 1), ("saigon", 1), ("halong", 1)])
        );
        assert!(rows[1..].iter().all(|r| !r.is_expanded()));

        let rows = build_rows(&interleaved(), &with_levels("domestic:3"));
        assert_eq!(
            labels(&rows),
            s(&[("root", 0), ("t1", 1), ("t2", 1), ("t3", 1), ("t4", 1)])
        );
    }

    #[test]
    fn test_top_selected_level_sorted_as_one_group() {
        let view = with_levels("domestic:3").with_sort_clicked(SortField::Sold);
        let rows = build_rows(&interleaved(), &view);
        let tours: Vec<_> = rows.iter().filter_map(Row::tour).map(|t| t.name.as_str()).collect();
        assert_eq!(tours, vec!["t4", "t1", "t3", "t2"]);
    }

    #[test]
    fn test_levels_two_and_three_list_areas_in_source_order() {
        let rows = build_rows(&interleaved(), &with_levels("domestic:2,domestic:3"));
        assert_eq!(
            labels(&rows),
            s(&[
                ("root", 0),
                ("hanoi", 1),
                ("t1", 2),
                ("saigon", 1),
                ("t2", 2),
                ("halong", 1),
                ("t3", 2),
            ])
        );
    }

    #[test]
    fn test_unknown_references_yield_empty_groups() {
        let mut data = sample();
        data.tours.push(tour("orphan", "nowhere", 1, "HCM"));
        data.hierarchy_levels.push(level(
            "lost",
            TourCategory::Domestic,
            HierarchyLevelKind::Area,
            Some("missing_parent"),
        ));
        let rows = build_rows(&data, &ViewState::default());
        assert!(rows.iter().all(|r| r.label() != "orphan"));
        assert!(rows.iter().all(|r| r.label() != "lost"));
    }

    #[test]
    fn test_sort_applies_to_siblings() {
        let view = ViewState::default().with_sort_clicked(SortField::Sold).with_sort_clicked(SortField::Sold);
        let rows = build_rows(&sample(), &view);
        let hanoi_tours: Vec<_> = rows
            .iter()
            .skip_while(|r| r.label() != "hanoi")
            .skip(1)
            .take_while(|r| matches!(r, Row::Tour(_)))
            .map(|r| r.label())
            .collect();
        assert_eq!(hanoi_tours, vec!["t3", "t1"]);
    }

    #[test]
    fn test_row_serializes_with_kind_tag() {
        let rows = build_rows(&sample(), &ViewState::default());
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["kind"], "section");
        assert_eq!(json["depth"], 0);
        assert_eq!(json["isExpanded"], true);
        assert_eq!(json["node"]["code"], "dom_root");
    }
}
