pub mod token;

pub use token::{TokenClaims, EMAIL_CLAIM, EXPIRES_AT_CLAIM, NOT_BEFORE_CLAIM, ROLE_CLAIM};
