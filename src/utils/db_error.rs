/// Unique constraint that guards the original URL column.
pub const URL_UNIQUE_CONSTRAINT: &str = "shortened_url_key";

/// Unique constraint that guards the short code column.
pub const SHORT_CODE_UNIQUE_CONSTRAINT: &str = "shortened_short_code_key";

/// Returns the violated constraint name if `e` is a unique violation.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or("unknown").to_string())
}

pub fn is_short_code_violation(constraint: &str) -> bool {
    constraint == SHORT_CODE_UNIQUE_CONSTRAINT
}
