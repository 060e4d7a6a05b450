//! Job instances.
//!
//! Provides the 15-job reference instance and loading of instances from
//! JSON files. A JSON instance is an array of job objects:
//!
//! ```json
//! [
//!   { "id": 1, "process_time": 4, "due_date": 6 },
//!   { "id": 2, "process_time": 4, "due_date": 8 }
//! ]
//! ```
//!
//! Loading does not validate; see [`crate::validation::validate_jobs`].

use std::fs;
use std::path::Path;

use crate::es::EsError;
use crate::models::Job;

/// (id, process_time, due_date) triples of the reference instance.
const REFERENCE: [(u32, f64, f64); 15] = [
    (1, 4.0, 6.0),
    (2, 4.0, 8.0),
    (3, 5.0, 10.0),
    (4, 2.0, 15.0),
    (5, 1.0, 4.0),
    (6, 3.0, 10.0),
    (7, 4.0, 17.0),
    (8, 7.0, 20.0),
    (9, 5.0, 30.0),
    (10, 3.0, 30.0),
    (11, 2.0, 20.0),
    (12, 4.0, 50.0),
    (13, 6.0, 40.0),
    (14, 3.0, 60.0),
    (15, 2.0, 40.0),
];

/// The 15-job reference instance, ordered by id.
pub fn reference_jobs() -> Vec<Job> {
    REFERENCE
        .iter()
        .map(|&(id, p, d)| Job::new(id, p, d))
        .collect()
}

/// Parses jobs from a JSON array.
pub fn parse_jobs(json: &str) -> Result<Vec<Job>, EsError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads jobs from a JSON file.
pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<Job>, EsError> {
    let text = fs::read_to_string(path)?;
    parse_jobs(&text)
}
