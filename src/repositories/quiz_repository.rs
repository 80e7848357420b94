use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_all(&self) -> AppResult<Vec<Quiz>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let cursor = self.collection.find(doc! {}).await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let created_by_index = IndexModel::builder()
            .keys(doc! { "createdBy": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_by".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(created_by_index).await?;
        log::info!("Created index on quizzes.createdBy");

        Ok(())
    }
}
