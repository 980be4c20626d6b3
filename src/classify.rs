// the "standard" regular expression package
use regex::Regex;
// so regular expressions compile once
use lazy_static::lazy_static;

use tracing::{debug, info};

lazy_static! {
    // n-tuple: two integers joined by a semicolon
    static ref NTUPLE: Regex = Regex::new(r"^[0-9]+;[0-9]+$").unwrap();
    // general date shape: digits-digits-digits
    static ref DATE_GENERAL: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    // strict date: months 01-12, days bounded 28-31 per month,
    // February capped at 29 without leap year arithmetic
    static ref DATE_STRICT: Regex = Regex::new(
        r"^[0-9]{4}-(((([0][13-9])|([1][0-2]))-(([0-2][0-9])|([3][01])))|(([0][2]-[0-2][0-9])))$"
    ).unwrap();
    // general time shape: digits:digits:digits
    static ref TIME_GENERAL: Regex = Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap();
    // strict time: hours 00-24, minutes and seconds 00-60,
    // deliberately over-permissive at the boundary
    static ref TIME_STRICT: Regex = Regex::new(
        r"^(([01][0-9])|([2][0-4])):(([0-5][0-9])|([6][0])):(([0-5][0-9])|([6][0]))$"
    ).unwrap();
    // optional sign followed by at least one digit, nothing else
    static ref INT: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    // optional sign, optional digits, a mandatory '.' and fractional part
    static ref FLOAT: Regex = Regex::new(r"^[+-]?[0-9]*\.[0-9]+$").unwrap();
    static ref BOOL: Regex = Regex::new(r"^((true)|(false)|1|0)$").unwrap();
    static ref DATETIME_GENERAL: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap();
}

/// Shared with the coercion engine, which accepts n-tuples by this pattern.
pub fn is_n_tuple(text: &str) -> bool {
    NTUPLE.is_match(text)
}

/// The classifier's best guess for an untyped string.
///
/// `DateLike` and `TimeLike` mark strings with the right general shape that
/// fail the stricter validity pattern. They are inspection flags, not types
/// from the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    NTuple,
    Date,
    DateLike,
    Time,
    TimeLike,
    Int,
    Float,
    Boolean,
    Datetime,
    Text,
    String,
}

/// Guesses which vocabulary type a string most likely represents.
///
/// Evaluation is an ordered cascade where the first matching shape wins:
/// n-tuple, date (with a strictness sub-check and a datetime upgrade), time
/// (likewise), integer, float, boolean literal, datetime, multi-word text,
/// and finally single-word string as the default. The order matters at
/// shape boundaries: `"1"` is an integer, not a boolean, because the
/// integer pattern is checked first.
pub fn classify(text: &str) -> Guess {
    let text = text.trim();
    let mut guess = Guess::String;
    if NTUPLE.is_match(text) {
        guess = Guess::NTuple;
        debug!("classify: found 'n-tuple'");
    } else if DATE_GENERAL.is_match(text) {
        if DATE_STRICT.is_match(text) {
            guess = Guess::Date;
            debug!("classify: found 'date'");
        } else {
            guess = Guess::DateLike;
            info!(content = text, "classify: found 'date'-like thing");
        }
        if DATETIME_GENERAL.is_match(text) {
            guess = Guess::Datetime;
            debug!("classify: found 'datetime'");
        }
    } else if TIME_GENERAL.is_match(text) {
        if TIME_STRICT.is_match(text) {
            guess = Guess::Time;
            debug!("classify: found 'time'");
        } else {
            guess = Guess::TimeLike;
            info!(content = text, "classify: found 'time'-like thing");
        }
        if DATETIME_GENERAL.is_match(text) {
            guess = Guess::Datetime;
            debug!("classify: found 'datetime'");
        }
    } else if INT.is_match(text) {
        guess = Guess::Int;
        debug!("classify: found 'int'");
    } else if FLOAT.is_match(text) {
        guess = Guess::Float;
        debug!("classify: found 'float'");
    } else if BOOL.is_match(text) {
        guess = Guess::Boolean;
        debug!("classify: found 'boolean'");
    } else if DATETIME_GENERAL.is_match(text) {
        guess = Guess::Datetime;
        debug!("classify: found 'datetime'");
    } else if text.contains(' ') {
        guess = Guess::Text;
        debug!("classify: found 'text'");
    }
    guess
}
