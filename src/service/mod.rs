//! Data access: one service per table, parameterized queries against a shared pool.

mod articles;
mod comments;
mod topics;
mod users;
mod validation;

pub use articles::ArticleService;
pub use comments::CommentService;
pub use topics::TopicService;
pub use users::UserService;
pub use validation::RequestValidator;
