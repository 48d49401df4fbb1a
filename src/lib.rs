//! degrees-engine: degrees of separation over a movie cast dataset
//!
//! Loads three tables (people, movies, cast links) into an in-memory index
//! and finds the shortest chain of co-starring relationships between two
//! people with a breadth-first search.
//!
//! # Architecture
//!
//! ```text
//! loader → DatasetIndex → NeighborResolver ─┐
//!                       → NameResolver ─────┴→ PathSearch → SearchOutcome → commands
//! ```
//!
//! Person-to-person edges are never materialized: neighbors are derived on
//! demand from the movie ids shared between two cast lists.
//!
//! # Example
//!
//! ```
//! use degrees_engine::{DatasetIndex, MovieRow, PathSearch, PersonRow, StarRow};
//!
//! let index = DatasetIndex::from_rows(
//!     vec![PersonRow::new("1", "Alice", ""), PersonRow::new("2", "Bob", "")],
//!     vec![MovieRow::new("10", "Duet", "1999")],
//!     vec![StarRow::new("1", "10"), StarRow::new("2", "10")],
//! );
//!
//! let outcome = PathSearch::new(&index)
//!     .shortest_path(&"1".into(), &"2".into())
//!     .unwrap();
//! assert_eq!(outcome.degrees(), Some(1));
//! ```

pub mod cli;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod names;
pub mod neighbors;
pub mod paths;
pub mod prompt;
pub mod schema;
pub mod search;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use dataset::{DatasetBuilder, DatasetIndex, DatasetStats, LinkOutcome};
pub use error::{DegreesError, Result};
pub use loader::load_dataset;
pub use names::{Candidate, Disambiguator, NameResolver};
pub use neighbors::NeighborResolver;
pub use schema::{Movie, MovieId, MovieRow, PathStep, Person, PersonId, PersonRow, StarRow};
pub use search::{PathSearch, SearchOutcome, SearchStats};
