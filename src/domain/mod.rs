//! Domain layer - business types and store contracts
//!
//! Entities, value objects, repository traits and error types. Nothing here
//! touches HTTP; the only SeaORM item is the `DbErr` conversion in `errors`.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, LoanError};
pub use repositories::*;
pub use value_objects::{Email, Isbn};
