use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        for field in ["username", "email"] {
            let options = IndexOptions::builder()
                .unique(true)
                .name(format!("{}_unique", field))
                .build();
            let mut keys = Document::new();
            keys.insert(field, 1);
            let model = IndexModel::builder()
                .keys(keys)
                .options(options)
                .build();

            self.collection.create_index(model).await?;
            log::info!("Created unique index on users.{}", field);
        }

        Ok(())
    }
}
