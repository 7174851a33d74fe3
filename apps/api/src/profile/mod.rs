// Profile store and Career Genome calculation.
// Answers accumulate here through copy-on-write updates; the genome is derived on submit.

pub mod genome;
pub mod models;

pub use genome::{compute_genome, CareerGenome, GenomeAxis};
pub use models::{AnswerUpdate, AnswerValue, Profile, Section};
