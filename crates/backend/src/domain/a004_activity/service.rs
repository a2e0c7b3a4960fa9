use contracts::domain::a004_activity::Activity;

use crate::shared::data::storage::get_storage;

/// Последние события, новые сверху
pub async fn list_recent(limit: usize) -> anyhow::Result<Vec<Activity>> {
    Ok(get_storage().list_recent_activities(limit).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_recent_respects_limit() {
        let recent = list_recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].timestamp >= recent[1].timestamp);
    }
}
