pub mod classify;
pub mod conjugate;
pub mod error;
pub mod output;
pub mod tables;
pub mod types;

pub use classify::classify;
pub use conjugate::conjugate;
pub use error::ConjugationError;
pub use types::{
    EndingClass, IrregularityClass, Mood, Paradigm, StemChange, Subject, Tense, Verb, VerbFlags,
};
