use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles.slug";

// SQLite extended result codes
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() {
                return if message.ends_with(CNT_ARTICLE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    SQLITE_CONSTRAINT_NOTNULL => {
                        return DomainError::Validation(format!("not null constraint violated: {message}"));
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
