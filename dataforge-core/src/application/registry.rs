// dataforge-core/src/application/registry.rs

use crate::domain::error::DomainError;
use crate::domain::generators::{DomainGenerator, standard_generators};

/// Ordered collection of the available domain generators. Registration
/// order is fixed, so reports and logs always list domains the same way.
pub struct DatasetRegistry {
    generators: Vec<Box<dyn DomainGenerator>>,
}

impl DatasetRegistry {
    pub fn standard() -> Self {
        Self {
            generators: standard_generators(),
        }
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.tag()).collect()
    }

    pub fn get(&self, tag: &str) -> Option<&dyn DomainGenerator> {
        self.generators
            .iter()
            .find(|g| g.tag() == tag)
            .map(|g| g.as_ref())
    }

    /// Consumes the registry and keeps only the requested domains, in
    /// registration order. A tag that matches nothing is an error, not
    /// a silent no-op.
    pub fn select(
        self,
        only: Option<&[String]>,
    ) -> Result<Vec<Box<dyn DomainGenerator>>, DomainError> {
        let Some(only) = only else {
            return Ok(self.generators);
        };

        let known = self.tags();
        for tag in only {
            if !known.contains(&tag.as_str()) {
                return Err(DomainError::UnknownDomain(tag.clone()));
            }
        }

        Ok(self
            .generators
            .into_iter()
            .filter(|g| only.iter().any(|tag| tag == g.tag()))
            .collect())
    }
}
