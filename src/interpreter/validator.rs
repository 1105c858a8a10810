use crate::error::{CalcError, Result};

/// Letters accepted by the validator, compared case-insensitively.
///
/// These are exactly the letters needed to spell the supported function
/// names (`sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `log`, `log10`, `ln`,
/// `exp`) plus the `e` of scientific literals.
const FUNCTION_LETTERS: &str = "esincotalgxp";

/// Strips whitespace from `expression` and checks every remaining character
/// against the accepted set.
///
/// Accepted characters are ASCII digits, `.`, `+ - * /`, `(` `)`, `^`, `,`
/// and the letters `e s i n c o t a l g x p` in either case. `^` and `,` pass
/// validation although no grammar rule consumes them; they fail later as
/// invalid expressions.
///
/// # Parameters
/// - `expression`: The raw user input.
///
/// # Returns
/// The input with all whitespace removed.
///
/// # Errors
/// Returns [`CalcError::InvalidCharacter`] for the first character outside
/// the accepted set. Its position is the character index in `expression`.
///
/// # Example
/// ```
/// use exprcalc::{ErrorKind, interpreter::validator::validate};
///
/// assert_eq!(validate(" 2 * sin(0) ").unwrap(), "2*sin(0)");
/// assert_eq!(validate("2 % 3").unwrap_err().kind(),
///            ErrorKind::InvalidCharacter);
/// ```
pub fn validate(expression: &str) -> Result<String> {
    let mut stripped = String::with_capacity(expression.len());

    for (position, character) in expression.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        if !is_accepted(character) {
            return Err(CalcError::InvalidCharacter { character, position });
        }
        stripped.push(character);
    }

    Ok(stripped)
}

/// Tests whether a single character belongs to the accepted set.
fn is_accepted(character: char) -> bool {
    character.is_ascii_digit()
    || matches!(character, '.' | '+' | '-' | '*' | '/' | '(' | ')' | '^' | ',')
    || (character.is_ascii_alphabetic()
        && FUNCTION_LETTERS.contains(character.to_ascii_lowercase()))
}
