pub mod quiz;
pub mod quiz_question;
pub mod user;
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use user::User;
