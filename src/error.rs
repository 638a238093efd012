//! Engine Error Types
//!
//! Both variants signal "regenerate on the caller's side":
//! - [`EngineError::EmptyPool`] - the sampler was handed nothing to pick from
//! - [`EngineError::DataUnavailable`] - a pool exists but holds no
//!   structurally valid target/correct answer for the requested question
//!
//! The face-recognition games use `Option::None` instead of an error for
//! their expected empty state (no photographed people yet); see
//! `question::face`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("empty item pool: {0}")]
    EmptyPool(&'static str),
    #[error("no valid question available: {0}")]
    DataUnavailable(String),
}
