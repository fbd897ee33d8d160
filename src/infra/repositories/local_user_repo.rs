use std::sync::Arc;

use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use crate::infra::storage::LocalStore;
use async_trait::async_trait;

const COLLECTION: &str = "currentUser";

/// The local store keeps a single signed-in user, mirroring the dashboard's
/// `currentUser` collection. Creating a user replaces whoever was there.
pub struct LocalUserRepo {
    store: Arc<LocalStore>,
}

impl LocalUserRepo {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for LocalUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        let user = user.clone();
        self.store
            .update(COLLECTION, move |records: &mut Vec<User>| {
                records.clear();
                records.push(user.clone());
                Ok(user)
            })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .store
            .load::<User>(COLLECTION)?
            .into_iter()
            .find(|user| user.id == id))
    }
}
