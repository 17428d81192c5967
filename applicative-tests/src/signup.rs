//! Form validation with `Either`: each field is checked on its own, and the checks are
//! combined with `lift_a2` rather than nested inside one another.

use applicative::{lift_a2, Either, PartiallyApplied};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum SignupError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("name must not be empty")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

pub type Validated<A> = Either<SignupError, A>;

type V = Either<SignupError, PartiallyApplied>;

pub fn check_email(email: &str) -> Validated<String> {
    if email.contains('@') {
        Either::of(email.to_string())
    } else {
        Either::left(SignupError::InvalidEmail)
    }
}

pub fn check_name(name: &str) -> Validated<String> {
    if name.trim().is_empty() {
        Either::left(SignupError::EmptyName)
    } else {
        Either::of(name.to_string())
    }
}

pub fn create_user(email: String, name: String) -> User {
    User { email, name }
}

pub fn validate_user(email: &str, name: &str) -> Validated<User> {
    lift_a2::<V, _, _, _>(create_user, check_email(email), check_name(name))
}
