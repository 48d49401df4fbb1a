//! Resolution of free-text names to person ids
//!
//! Names are not unique. A name shared by several people is handed to a
//! [`Disambiguator`], which is the seam for interactive prompts (see
//! [`crate::prompt`]) and for scripted choices in tests.

use tracing::debug;

use crate::dataset::DatasetIndex;
use crate::error::{DegreesError, Result};
use crate::schema::PersonId;

/// One person sharing an ambiguous name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub id: &'a PersonId,
    pub name: &'a str,
    pub birth: Option<&'a str>,
}

/// Chooses one person among several sharing a name
pub trait Disambiguator {
    /// Return the chosen id, or `None` if nobody was chosen.
    ///
    /// The returned id is validated by the caller against `candidates`.
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Result<Option<PersonId>>;
}

impl<F> Disambiguator for F
where
    F: FnMut(&str, &[Candidate<'_>]) -> Result<Option<PersonId>>,
{
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Result<Option<PersonId>> {
        self(name, candidates)
    }
}

/// Case-insensitive exact-match lookup over the name index
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    index: &'a DatasetIndex,
}

impl<'a> NameResolver<'a> {
    pub fn new(index: &'a DatasetIndex) -> Self {
        Self { index }
    }

    /// All person ids registered under `name`, in id order. Whitespace is
    /// significant.
    pub fn candidates(&self, name: &str) -> Vec<&'a PersonId> {
        self.index
            .ids_for_name(name)
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    /// Resolve `name` to a single person id.
    ///
    /// Zero matches, a declined choice, or a choice outside the candidate set
    /// all fail with [`DegreesError::PersonNotFound`]. The disambiguator is
    /// consulted only when more than one person matches.
    pub fn resolve(&self, name: &str, chooser: &mut dyn Disambiguator) -> Result<PersonId> {
        let not_found = || DegreesError::PersonNotFound {
            name: name.to_string(),
        };

        let ids = self.candidates(name);
        match ids.as_slice() {
            [] => {
                debug!(query = name, "no person matches name");
                Err(not_found())
            }
            [only] => Ok((*only).clone()),
            many => {
                let candidates: Vec<Candidate<'a>> = many
                    .iter()
                    .filter_map(|id| self.index.person(id))
                    .map(|person| Candidate {
                        id: &person.id,
                        name: &person.name,
                        birth: person.birth.as_deref(),
                    })
                    .collect();

                debug!(query = name, count = candidates.len(), "name is ambiguous");
                let chosen = chooser.choose(name, &candidates)?.ok_or_else(not_found)?;

                if candidates.iter().any(|c| *c.id == chosen) {
                    Ok(chosen)
                } else {
                    debug!(query = name, chosen = %chosen, "chosen id is not a candidate");
                    Err(not_found())
                }
            }
        }
    }
}
