use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_CHIRP_AUTHOR: &str = "chirps_user_id_fkey";
const CNT_REFRESH_TOKEN_USER: &str = "refresh_tokens_user_id_fkey";
const CNT_REFRESH_TOKEN_PK: &str = "refresh_tokens_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_CHIRP_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_REFRESH_TOKEN_USER => DomainError::NotFound("user not found".into()),
                    CNT_REFRESH_TOKEN_PK => {
                        DomainError::Conflict("refresh token already issued".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
