// src/utils/html.rs

/// Escapes text before it is interpolated into an HTML report.
///
/// Every character with markup meaning is turned into an entity by
/// `ammonia::clean_text`, so names such as `Algebra <Part 2>` render verbatim.
/// Only used for element text, where a literal space is safe, so the
/// `&#32;` entities are folded back for readable mail source.
pub fn escape_html(input: &str) -> String {
    ammonia::clean_text(input).replace("&#32;", " ")
}
