//! Building `ILIKE` patterns from user input.
//!
//! Search terms are bound as statement parameters, but `%`, `_` and `\` keep
//! their pattern meaning inside the bound value. They are escaped here so a
//! term always matches as a literal substring.

/// Escapes LIKE metacharacters using PostgreSQL's default escape character `\`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Returns a pattern matching any value that contains `term`.
pub fn contains(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
