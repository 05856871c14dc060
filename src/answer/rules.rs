//! Submission checks using Validation.

use crate::answer::violations::AnswerError;
use crate::core::Digits;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a trimmed submission against the round's digit count.
///
/// Both checks always run, so a submission that is too short *and* contains
/// letters reports both problems.
pub fn validate_answer(
    answer: &str,
    expected_len: usize,
) -> Validation<(), NonEmptyVec<AnswerError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<AnswerError>>> = Vec::new();

    let actual = answer.chars().count();
    let length = if actual != expected_len {
        Validation::fail(AnswerError::InvalidLength {
            expected: expected_len,
            actual,
        })
    } else {
        Validation::success(())
    };
    checks.push(length);

    let offending: String = answer.chars().filter(|c| !c.is_ascii_digit()).collect();
    let format = if offending.is_empty() {
        Validation::success(())
    } else {
        Validation::fail(AnswerError::InvalidFormat { offending })
    };
    checks.push(format);

    Validation::all_vec(checks).map(|_| ())
}

/// Trim `raw` and turn it into digits ready for comparison.
///
/// On failure every violation is returned, length first.
///
/// ```rust
/// use recall::answer::{parse_answer, AnswerError};
///
/// assert_eq!(parse_answer(" 482910 ", 6).unwrap().as_str(), "482910");
/// assert_eq!(
///     parse_answer("1234", 6).unwrap_err(),
///     vec![AnswerError::InvalidLength { expected: 6, actual: 4 }]
/// );
/// ```
pub fn parse_answer(raw: &str, expected_len: usize) -> Result<Digits, Vec<AnswerError>> {
    let answer = raw.trim();
    match validate_answer(answer, expected_len) {
        Validation::Success(()) => Digits::parse(answer).ok_or_else(|| {
            vec![AnswerError::InvalidFormat {
                offending: String::new(),
            }]
        }),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

/// Input-time filter: drop anything that is not an ASCII digit and stop at
/// `max_len` characters.
///
/// ```rust
/// use recall::answer::sanitize_input;
///
/// assert_eq!(sanitize_input("48-29 10x", 6), "482910");
/// assert_eq!(sanitize_input("12345678", 6), "123456");
/// ```
pub fn sanitize_input(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}
