use sea_orm::{DbErr, SqlErr};

/// Integrity constraint a failed statement ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
}

/// Classify `err` when the database rejected it on a UNIQUE or FOREIGN KEY
/// constraint. Repositories use this to turn store-level rejections into
/// domain conflicts instead of generic failures.
pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(_) => Some(ConstraintViolation::Unique),
        SqlErr::ForeignKeyConstraintViolation(_) => Some(ConstraintViolation::ForeignKey),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_sql_errors_are_not_constraint_violations() {
        assert_eq!(
            constraint_violation(&DbErr::Custom("boom".to_string())),
            None
        );
        assert_eq!(
            constraint_violation(&DbErr::RecordNotFound("products".to_string())),
            None
        );
    }
}
