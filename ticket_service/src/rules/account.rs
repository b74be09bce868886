//! Account id validation.
use ticket_common::ValidationError;

/// Returns the account id if it is present and greater than zero.
pub fn validate_account(account_id: Option<i64>) -> Result<i64, ValidationError> {
    match account_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::AccountInvalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(i64::MIN))]
    #[case(Some(-1))]
    #[case(Some(0))]
    fn rejects_absent_or_non_positive_ids(#[case] account_id: Option<i64>) {
        assert_eq!(
            validate_account(account_id),
            Err(ValidationError::AccountInvalid)
        );
    }

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(i64::MAX)]
    fn accepts_positive_ids(#[case] account_id: i64) {
        assert_eq!(validate_account(Some(account_id)), Ok(account_id));
    }
}
