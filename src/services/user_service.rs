//! Borrower resolution across the student and teacher tables

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{DomainError, Person, PersonLookup};

/// Tries each source in order and returns the first match.
#[derive(Clone)]
pub struct UserLookup {
    sources: Vec<Arc<dyn PersonLookup>>,
}

impl UserLookup {
    /// Students are consulted before teachers.
    pub fn new(students: Arc<dyn PersonLookup>, teachers: Arc<dyn PersonLookup>) -> Self {
        Self {
            sources: vec![students, teachers],
        }
    }
}

#[async_trait]
impl PersonLookup for UserLookup {
    async fn find_person(&self, id: i32) -> Result<Option<Person>, DomainError> {
        for source in &self.sources {
            if let Some(person) = source.find_person(id).await? {
                return Ok(Some(person));
            }
        }
        Ok(None)
    }
}
