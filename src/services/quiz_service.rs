use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use mongodb::bson::oid::ObjectId;

use crate::{
    errors::AppResult,
    models::{
        domain::Quiz,
        dto::{
            quiz_dto::{QuizDto, QuizWithCreatorDto},
            request::CreateQuizRequest,
            response::CreateQuizResponse,
        },
    },
    repositories::{QuizRepository, UserRepository},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            repository,
            user_repository,
        }
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<CreateQuizResponse> {
        let created_by = request
            .user_id
            .as_deref()
            .map(|id| ObjectId::parse_str(id))
            .transpose()?;

        let quiz = Quiz::new(&request.title, request.questions, created_by);
        let quiz = self.repository.create(quiz).await?;
        log::info!(
            "Created quiz '{}' with {} questions",
            quiz.title,
            quiz.questions.len()
        );

        Ok(CreateQuizResponse {
            message: "Quiz created successfully".to_string(),
            quiz: QuizDto::from(quiz),
        })
    }

    /// Lists every quiz with `createdBy` resolved to the creator's username.
    pub async fn list_quizzes(&self) -> AppResult<Vec<QuizWithCreatorDto>> {
        let quizzes = self.repository.find_all().await?;

        let creator_ids: Vec<ObjectId> = quizzes
            .iter()
            .filter_map(|quiz| quiz.created_by)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let usernames: HashMap<ObjectId, String> = self
            .user_repository
            .find_by_ids(&creator_ids)
            .await?
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user.username)))
            .collect();

        Ok(quizzes
            .into_iter()
            .map(|quiz| QuizWithCreatorDto::populate(quiz, &usernames))
            .collect())
    }
}
