//! Validation of submitted answers.
//!
//! Submissions are checked with Stillwater's `Validation` type, which keeps
//! going after the first problem so the player hears about all of them at
//! once.
//!
//! # Example
//!
//! ```rust
//! use recall::answer::{validate_answer, AnswerError};
//! use stillwater::validation::Validation;
//!
//! match validate_answer("12a4", 6) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::{parse_answer, sanitize_input, validate_answer};
pub use violations::AnswerError;
