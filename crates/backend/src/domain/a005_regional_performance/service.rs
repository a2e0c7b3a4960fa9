use contracts::domain::a005_regional_performance::RegionalPerformance;

use crate::shared::data::storage::get_storage;

pub async fn list_all() -> anyhow::Result<Vec<RegionalPerformance>> {
    Ok(get_storage().list_regional_performance().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_cities() {
        let cities = list_all().await.unwrap();
        assert_eq!(cities.len(), 4);
        assert_eq!(cities[3].city_name, "Đà Nẵng");
    }
}
