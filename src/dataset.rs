//! In-memory relational index over people, movies and cast links
//!
//! The index is built once from the three source tables and is read-only
//! afterwards. Person-to-person adjacency is never stored explicitly: it is
//! derived from the shared movie ids kept on both sides of each cast link
//! (see [`crate::neighbors`]).

use ahash::AHashMap;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::schema::{
    normalize_name, Movie, MovieId, MovieRow, Person, PersonId, PersonRow, StarRow,
};

/// Result of applying one cast-link row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    /// The row referenced an unknown person or movie and was dropped
    Skipped,
}

/// Size counters for a loaded dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub people: usize,
    pub movies: usize,
    pub names: usize,
    pub links: usize,
    pub skipped_links: usize,
}

/// People, movies and the lowercase name index
#[derive(Debug, Default)]
pub struct DatasetIndex {
    people: AHashMap<PersonId, Person>,
    movies: AHashMap<MovieId, Movie>,
    names: AHashMap<String, BTreeSet<PersonId>>,
    links: usize,
    skipped_links: usize,
}

impl DatasetIndex {
    /// Build an index from three row streams, loaded people → movies → stars.
    pub fn from_rows<P, M, S>(people: P, movies: M, stars: S) -> Self
    where
        P: IntoIterator<Item = PersonRow>,
        M: IntoIterator<Item = MovieRow>,
        S: IntoIterator<Item = StarRow>,
    {
        let mut builder = DatasetBuilder::new();
        for row in people {
            builder.add_person(row);
        }
        for row in movies {
            builder.add_movie(row);
        }
        for row in stars {
            builder.add_star(row);
        }
        builder.build()
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// Person ids registered under a name, matched case-insensitively.
    pub fn ids_for_name(&self, name: &str) -> Option<&BTreeSet<PersonId>> {
        self.names.get(&normalize_name(name))
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            people: self.people.len(),
            movies: self.movies.len(),
            names: self.names.len(),
            links: self.links,
            skipped_links: self.skipped_links,
        }
    }
}

/// Incremental constructor for [`DatasetIndex`]
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    index: DatasetIndex,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person and register their name.
    ///
    /// A repeated id replaces the earlier record and moves the id to the new
    /// name bucket.
    pub fn add_person(&mut self, row: PersonRow) {
        let id = PersonId(row.id);
        let birth = Some(row.birth).filter(|b| !b.trim().is_empty());

        if let Some(previous) = self.index.people.remove(&id) {
            self.unregister_name(&previous.name, &id);
        }

        self.index
            .names
            .entry(normalize_name(&row.name))
            .or_default()
            .insert(id.clone());

        self.index.people.insert(
            id.clone(),
            Person {
                id,
                name: row.name,
                birth,
                movie_ids: BTreeSet::new(),
            },
        );
    }

    pub fn add_movie(&mut self, row: MovieRow) {
        let id = MovieId(row.id);
        self.index.movies.insert(
            id.clone(),
            Movie {
                id,
                title: row.title,
                year: row.year,
                star_ids: BTreeSet::new(),
            },
        );
    }

    /// Link a person and a movie in both directions.
    ///
    /// Rows naming an unknown person or movie are dropped without touching
    /// either table.
    pub fn add_star(&mut self, row: StarRow) -> LinkOutcome {
        let person_id = PersonId(row.person_id);
        let movie_id = MovieId(row.movie_id);

        let (Some(person), Some(movie)) = (
            self.index.people.get_mut(&person_id),
            self.index.movies.get_mut(&movie_id),
        ) else {
            self.index.skipped_links += 1;
            return LinkOutcome::Skipped;
        };

        let added = person.movie_ids.insert(movie_id);
        movie.star_ids.insert(person_id);
        if added {
            self.index.links += 1;
        }
        LinkOutcome::Linked
    }

    pub fn build(self) -> DatasetIndex {
        let stats = self.index.stats();
        if stats.skipped_links > 0 {
            debug!(
                skipped = stats.skipped_links,
                "dropped cast links referencing unknown people or movies"
            );
        }
        info!(
            people = stats.people,
            movies = stats.movies,
            links = stats.links,
            "dataset indexed"
        );
        self.index
    }

    fn unregister_name(&mut self, name: &str, id: &PersonId) {
        let key = normalize_name(name);
        if let Some(ids) = self.index.names.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.index.names.remove(&key);
            }
        }
    }
}
