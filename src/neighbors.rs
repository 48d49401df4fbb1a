//! Co-star adjacency derived from shared movies

use std::collections::BTreeSet;

use crate::dataset::DatasetIndex;
use crate::schema::{PathStep, PersonId};

/// Resolves the (movie, co-star) pairs reachable from a person
#[derive(Debug, Clone, Copy)]
pub struct NeighborResolver<'a> {
    index: &'a DatasetIndex,
}

impl<'a> NeighborResolver<'a> {
    pub fn new(index: &'a DatasetIndex) -> Self {
        Self { index }
    }

    /// Every `(movie, star)` pair for the movies `person_id` appeared in.
    ///
    /// The person's own pair for each movie is included; filtering it out is
    /// the search's job. An id missing from the people table has no
    /// neighbors.
    pub fn neighbors(&self, person_id: &PersonId) -> BTreeSet<PathStep> {
        let mut pairs = BTreeSet::new();
        let Some(person) = self.index.person(person_id) else {
            return pairs;
        };

        for movie_id in &person.movie_ids {
            let Some(movie) = self.index.movie(movie_id) else {
                continue;
            };
            for star_id in &movie.star_ids {
                pairs.insert(PathStep::new(movie_id.clone(), star_id.clone()));
            }
        }

        pairs
    }
}
