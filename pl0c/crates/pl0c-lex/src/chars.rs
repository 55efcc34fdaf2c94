//! Character classification for PL/0 source text.
//!
//! PL/0 is an ASCII language: identifiers, numbers and operators only ever use
//! ASCII characters. Anything else may appear inside comments and nowhere else.

/// Checks if a character can start an identifier or keyword.
///
/// # Example
///
/// ```
/// use pl0c_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use pl0c_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue(':'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is whitespace between tokens.
///
/// This is the classic C `isspace` set: space, tab, newline, carriage return,
/// vertical tab and form feed. Unicode spaces are not whitespace in PL/0.
///
/// # Example
///
/// ```
/// use pl0c_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0b'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
