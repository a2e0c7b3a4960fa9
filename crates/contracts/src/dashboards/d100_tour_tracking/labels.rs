use crate::domain::a001_tour::{Tour, DEFAULT_SALES_UNIT};
use crate::domain::a003_sales_unit::SalesUnit;

/// Имя подразделения по коду; неизвестный код возвращается как есть
pub fn sales_unit_label(units: &[SalesUnit], code: &str) -> String {
    units
        .iter()
        .find(|u| u.code == code)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| code.to_string())
}

/// Подразделение первого тура области, `HCM` если туров нет
pub fn area_top_sales_unit<'a>(tours: &'a [Tour], area_code: &str) -> &'a str {
    tours
        .iter()
        .find(|t| t.area == area_code)
        .map(|t| t.top_sales_unit.as_str())
        .unwrap_or(DEFAULT_SALES_UNIT)
}

/// Подпись для известных кодов регионов и континентов
pub fn region_label(code: &str) -> &str {
    match code {
        "mien_bac" => "Miền Bắc",
        "mien_trung" => "Miền Trung",
        "mien_nam" => "Miền Nam",
        "chau_a" => "Châu Á",
        "chau_au" => "Châu Âu",
        other => other,
    }
}

/// Лидеры продаж: по убыванию `sold`, при равенстве порядок источника
pub fn top_tours(tours: &[Tour], limit: usize) -> Vec<Tour> {
    let mut sorted: Vec<&Tour> = tours.iter().collect();
    sorted.sort_by(|a, b| b.sold.cmp(&a.sold));
    sorted.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::TourDto;
    use crate::domain::a003_sales_unit::SalesUnitDto;
    use crate::enums::tour_category::TourCategory;

    fn tour(name: &str, area: &str, sold: i64, unit: &str) -> Tour {
        let mut dto = TourDto::new(name, TourCategory::Domestic, area);
        dto.sold = sold;
        dto.top_sales_unit = Some(unit.into());
        Tour::new_for_insert(dto)
    }

    #[test]
    fn test_top_tours_descending_by_sold() {
        let tours = vec![tour("a", "x", 10, "HCM"), tour("b", "x", 50, "HCM"), tour("c", "x", 30, "HCM")];
        let sold: Vec<i64> = top_tours(&tours, 10).iter().map(|t| t.sold).collect();
        assert_eq!(sold, vec![50, 30, 10]);
        assert_eq!(top_tours(&tours, 1)[0].name, "b");
    }

    #[test]
    fn test_top_tours_ties_keep_source_order() {
        let tours = vec![tour("a", "x", 5, "HCM"), tour("b", "x", 5, "HCM")];
        let names: Vec<_> = top_tours(&tours, 2).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_sales_unit_label_falls_back_to_code() {
        let units = vec![SalesUnit::new_for_insert(SalesUnitDto {
            name: "Hà Nội".into(),
            code: "HN".into(),
            performance_rate: None,
            status: None,
        })];
        assert_eq!(sales_unit_label(&units, "HN"), "Hà Nội");
        assert_eq!(sales_unit_label(&units, "DN"), "DN");
    }

    #[test]
    fn test_area_top_sales_unit() {
        let tours = vec![tour("a", "ha_long", 1, "HN"), tour("b", "ha_long", 1, "CT")];
        assert_eq!(area_top_sales_unit(&tours, "ha_long"), "HN");
        assert_eq!(area_top_sales_unit(&tours, "hue"), "HCM");
    }

    #[test]
    fn test_region_label() {
        assert_eq!(region_label("mien_bac"), "Miền Bắc");
        assert_eq!(region_label("chau_au"), "Châu Âu");
        assert_eq!(region_label("nhat_ban"), "nhat_ban");
    }
}
