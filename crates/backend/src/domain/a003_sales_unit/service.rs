use contracts::domain::a003_sales_unit::SalesUnit;

use crate::shared::data::storage::get_storage;

pub async fn list_all() -> anyhow::Result<Vec<SalesUnit>> {
    Ok(get_storage().list_sales_units().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_units() {
        let codes: Vec<_> = list_all().await.unwrap().into_iter().map(|u| u.code).collect();
        assert_eq!(codes, vec!["HCM", "HN", "CT"]);
    }
}
