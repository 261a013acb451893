//! User domain
//!
//! Callers of the tools are identified by a [`UserId`]. The host resolves
//! that identity to a [`User`] record, which scopes embedding generation.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserRole};
pub use repository::UserRepository;
pub use validation::{validate_user_id, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
