use thiserror::Error;

use crate::types::{Mood, Tense};

/// Errors reported by verb construction and conjugation. Each is
/// raised at the call that detects it; there is no retry or partial
/// result, and presenting the error is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    /// The infinitive is too short or does not end in -ar/-er/-ir.
    #[error("invalid infinitive {0:?}: expected at least two letters ending in -ar, -er, or -ir")]
    InvalidVerb(String),

    /// A mood, tense, or subject argument outside its enumerated set.
    #[error("invalid {name} {value:?}: allowed values are {allowed}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        allowed: &'static str,
    },

    /// A recognised (mood, tense) pair whose forms are not generated.
    #[error("conjugation for mood {mood} tense {tense} is not supported yet")]
    Unsupported { mood: Mood, tense: Tense },
}
