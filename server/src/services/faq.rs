//! Keyword FAQ matching.

use super::store::Faq;

#[cfg(test)]
#[path = "faq_test.rs"]
mod tests;

/// Answer of the first FAQ with a keyword occurring in `message`
/// (case-insensitive). Blank keywords never match.
#[must_use]
pub fn find_answer<'a>(faqs: &'a [Faq], message: &str) -> Option<&'a str> {
    let message = message.to_lowercase();
    faqs.iter()
        .find(|faq| {
            faq.keywords
                .split(',')
                .map(|k| k.trim().to_lowercase())
                .any(|k| !k.is_empty() && message.contains(&k))
        })
        .map(|faq| faq.answer.as_str())
}
