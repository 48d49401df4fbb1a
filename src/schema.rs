//! Data model for the co-star graph
//!
//! Person and movie records are built once at load time and are read-only for
//! the rest of the session. Ids are opaque strings taken verbatim from the
//! source tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque person identifier from the people table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

/// Opaque movie identifier from the movies table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

macro_rules! impl_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

impl_id!(PersonId);
impl_id!(MovieId);

/// A person and the movies they appeared in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Birth year as written in the source; `None` when the field is blank
    pub birth: Option<String>,
    pub movie_ids: BTreeSet<MovieId>,
}

/// A movie and the people who starred in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub star_ids: BTreeSet<PersonId>,
}

/// One degree of separation: the movie shared with the previous person, and
/// the person reached through it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathStep {
    pub movie_id: MovieId,
    pub person_id: PersonId,
}

impl PathStep {
    pub fn new(movie_id: MovieId, person_id: PersonId) -> Self {
        Self {
            movie_id,
            person_id,
        }
    }
}

// ============================================
// Source rows
// ============================================

/// Row of the people table: `id,name,birth`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub birth: String,
}

/// Row of the movies table: `id,title,year`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
}

/// Row of the cast-link table: `person_id,movie_id`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StarRow {
    pub person_id: String,
    pub movie_id: String,
}

impl PersonRow {
    pub fn new(id: &str, name: &str, birth: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            birth: birth.to_string(),
        }
    }
}

impl MovieRow {
    pub fn new(id: &str, title: &str, year: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
        }
    }
}

impl StarRow {
    pub fn new(person_id: &str, movie_id: &str) -> Self {
        Self {
            person_id: person_id.to_string(),
            movie_id: movie_id.to_string(),
        }
    }
}

/// Lowercase key used by the name index
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
