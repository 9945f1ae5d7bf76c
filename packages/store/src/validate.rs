//! Client-side validation shared by both backends.
//!
//! These checks run before any storage or network work; a failure
//! short-circuits the operation with [`StoreError::Validation`]. The live
//! service re-validates everything server-side; this layer only catches
//! the obvious mistakes without a round trip.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::StoreError;
use crate::models::{NewUser, UserPatch};

/// Minimum accepted password length on the live path.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Required text fields plus email shape. Password rules are separate:
/// the mock store accepts any (or no) password, the live service enforces
/// [`validate_password`] on top of this.
pub fn validate_new(draft: &NewUser) -> Result<(), StoreError> {
    if draft.first_name.trim().is_empty() {
        return Err(StoreError::Validation("first name is required".into()));
    }
    if draft.last_name.trim().is_empty() {
        return Err(StoreError::Validation("last name is required".into()));
    }
    if draft.email.trim().is_empty() {
        return Err(StoreError::Validation("email is required".into()));
    }
    validate_email(&draft.email)?;
    if draft.birthday.is_none() {
        return Err(StoreError::Validation("birthday is required".into()));
    }
    Ok(())
}

/// Conditional checks on a partial update: only fields present in the
/// patch are validated. `check_password` is set on the live path, where a
/// supplied password must meet the minimum length.
pub fn validate_patch(patch: &UserPatch, check_password: bool) -> Result<(), StoreError> {
    if let Some(email) = &patch.email {
        validate_email(email)?;
    }
    if check_password {
        if let Some(password) = &patch.password {
            validate_password(password)?;
        }
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), StoreError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(StoreError::Validation("invalid email address".into()))
    }
}

pub fn validate_password(password: &str) -> Result<(), StoreError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(StoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> NewUser {
        NewUser {
            first_name: "Bo".into(),
            last_name: "Lee".into(),
            email: "bo@x.com".into(),
            password: Some("longenough".into()),
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1),
            avatar_url: None,
        }
    }

    #[test]
    fn accepts_a_complete_draft() {
        assert!(validate_new(&draft()).is_ok());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut d = draft();
        d.first_name = "  ".into();
        assert!(validate_new(&d).is_err());

        let mut d = draft();
        d.last_name = String::new();
        assert!(validate_new(&d).is_err());

        let mut d = draft();
        d.email = String::new();
        assert!(matches!(
            validate_new(&d),
            Err(StoreError::Validation(msg)) if msg == "email is required"
        ));

        let mut d = draft();
        d.birthday = None;
        assert!(validate_new(&d).is_err());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["bo", "bo@", "@x.com", "bo@x", "bo x@x.com", "bo@x .com"] {
            assert!(validate_email(bad).is_err(), "{bad:?} should be rejected");
        }
        for good in ["bo@x.com", "a.b+c@sub.domain.org"] {
            assert!(validate_email(good).is_ok(), "{good:?} should pass");
        }
    }

    #[test]
    fn password_length_is_enforced() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("longenough").is_ok());
    }

    #[test]
    fn patch_checks_only_present_fields() {
        assert!(validate_patch(&UserPatch::default(), true).is_ok());

        let bad_email = UserPatch {
            email: Some("nope".into()),
            ..Default::default()
        };
        assert!(validate_patch(&bad_email, false).is_err());

        let short_password = UserPatch {
            password: Some("abc".into()),
            ..Default::default()
        };
        // Password length is a live-path rule only.
        assert!(validate_patch(&short_password, false).is_ok());
        assert!(validate_patch(&short_password, true).is_err());
    }
}
