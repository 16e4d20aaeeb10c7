//! Unified Error Model
use crate::data_model::CandidateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("CANDIDATE/{0}")]
    Candidate(#[from] CandidateError),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("RULES/{0}")]
    Rules(String),

    #[error("HISTORY/{0}")]
    History(String),
}
