//! Builds the parameterized article listing query. Identifiers come from a
//! fixed allow-list only; client values are bound as parameters.

use crate::error::AppError;

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: String) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Columns clients may sort the article listing by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        Ok(match s {
            "article_id" => SortColumn::ArticleId,
            "title" => SortColumn::Title,
            "topic" => SortColumn::Topic,
            "author" => SortColumn::Author,
            "created_at" => SortColumn::CreatedAt,
            "votes" => SortColumn::Votes,
            "comment_count" => SortColumn::CommentCount,
            _ => return Err(AppError::bad_request()),
        })
    }

    fn expr(self) -> &'static str {
        match self {
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Title => "articles.title",
            SortColumn::Topic => "articles.topic",
            SortColumn::Author => "articles.author",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::Votes => "articles.votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(AppError::bad_request())
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Validated listing parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl ArticleListQuery {
    /// Parse raw query-string values; absent values take the defaults
    /// (`created_at`, `desc`, no topic filter).
    pub fn parse(sort_by: Option<&str>, order: Option<&str>, topic: Option<&str>) -> Result<Self, AppError> {
        Ok(ArticleListQuery {
            sort_by: sort_by.map(SortColumn::parse).transpose()?.unwrap_or_default(),
            order: order.map(SortOrder::parse).transpose()?.unwrap_or_default(),
            topic: topic.map(str::to_string),
        })
    }
}

/// SELECT articles with comment counts, optional topic filter, ORDER BY the
/// requested column then article_id.
pub fn select_articles(query: &ArticleListQuery) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = match &query.topic {
        Some(topic) => {
            let n = q.push_param(topic.clone());
            format!(" WHERE articles.topic = ${}", n)
        }
        None => String::new(),
    };
    q.sql = format!(
        "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
         articles.created_at, articles.votes, COUNT(comments.comment_id) AS comment_count \
         FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id{} \
         GROUP BY articles.article_id ORDER BY {} {}, articles.article_id ASC",
        where_clause,
        query.sort_by.expr(),
        query.order.keyword()
    );
    q
}
