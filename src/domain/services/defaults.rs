use tracing::info;

use crate::domain::models::event::Event;
use crate::domain::ports::EventRepository;
use crate::error::AppError;

/// The starter events every fresh installation ships with.
pub fn default_events() -> Vec<Event> {
    serde_json::from_str(include_str!("../../seeds/default_events.json"))
        .expect("default event seed data must parse")
}

/// Inserts any default event whose id is not yet present. Existing records,
/// default or not, are left untouched, so re-running is safe.
pub async fn seed_default_events(repo: &dyn EventRepository) -> Result<usize, AppError> {
    let mut seeded = 0;
    for event in default_events() {
        if repo.find_by_id(&event.id).await?.is_none() {
            repo.create(&event).await?;
            seeded += 1;
        }
    }
    if seeded > 0 {
        info!("Seeded {} default academic events", seeded);
    }
    Ok(seeded)
}
