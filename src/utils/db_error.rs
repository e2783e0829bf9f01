//! Helpers for classifying database constraint errors by name.

/// True when `e` is a unique violation on the named constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && db_err.constraint() == Some(constraint)
}

/// True when `e` is a foreign-key violation on the named constraint.
pub fn is_foreign_key_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_foreign_key_violation() && db_err.constraint() == Some(constraint)
}
