//! Token substitution engine for message templates.

use crate::contact::ContactRecord;

/// A recognized substitution token.
///
/// The set is closed: tokens are matched literally as `$` followed by the
/// exact spelling, and anything else starting with `$` passes through
/// untouched. No token is a prefix of another, so replacement order cannot
/// change the result, but it is fixed anyway: full name, then family name,
/// then given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `$name` — full display form of the contact's name.
    Name,
    /// `$familyName` — family (last) name.
    FamilyName,
    /// `$givenName` — given (first) name.
    GivenName,
}

/// All recognized tokens, in replacement order.
pub const TOKENS: [Token; 3] = [Token::Name, Token::FamilyName, Token::GivenName];

impl Token {
    /// Literal spelling as it appears in template text.
    pub fn literal(&self) -> &'static str {
        match self {
            Token::Name => "$name",
            Token::FamilyName => "$familyName",
            Token::GivenName => "$givenName",
        }
    }

    fn value<'a>(&self, contact: &'a ContactRecord) -> &'a str {
        match self {
            Token::Name => &contact.full_name,
            Token::FamilyName => &contact.family_name,
            Token::GivenName => &contact.given_name,
        }
    }
}

/// Render a template against a contact.
///
/// Replaces every occurrence of each recognized token with the matching
/// contact field. Empty fields substitute as empty strings. Total and
/// deterministic: no input can make this fail.
pub fn interpolate(template: &str, contact: &ContactRecord) -> String {
    let mut text = template.to_string();
    for token in TOKENS {
        text = text.replace(token.literal(), token.value(contact));
    }
    text
}

/// Render a preview of a template.
///
/// Uses the first contact of the bound group when one exists, otherwise a
/// fixed sample contact, so the editor always has something to show.
pub fn preview(template: &str, contacts: &[ContactRecord]) -> String {
    match contacts.first() {
        Some(contact) => interpolate(template, contact),
        None => interpolate(template, &ContactRecord::sample()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mingus() -> ContactRecord {
        ContactRecord::new("Charles Mingus", "Charles", "Mingus")
    }

    #[test]
    fn test_interpolate_all_tokens() {
        let body = interpolate("Hey $name, this is $givenName $familyName", &mingus());
        assert_eq!(body, "Hey Charles Mingus, this is Charles Mingus");
    }

    #[test]
    fn test_no_tokens_passes_through() {
        assert_eq!(interpolate("hello", &mingus()), "hello");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(interpolate("", &mingus()), "");
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let contact = ContactRecord::new("A B", "A", "B");
        assert_eq!(interpolate("$name $name", &contact), "A B A B");
    }

    #[test]
    fn test_unrecognized_token_left_verbatim() {
        let body = interpolate("pay $amount to $name", &mingus());
        assert_eq!(body, "pay $amount to Charles Mingus");
    }

    #[test]
    fn test_lone_dollar_left_verbatim() {
        assert_eq!(interpolate("costs $5, $", &mingus()), "costs $5, $");
    }

    #[test]
    fn test_empty_field_substitutes_empty() {
        let contact = ContactRecord::new("", "Charles", "");
        assert_eq!(interpolate("[$name][$familyName]!", &contact), "[][]!");
    }

    #[test]
    fn test_deterministic() {
        let t = "Hi $givenName, $name here's $thing";
        assert_eq!(interpolate(t, &mingus()), interpolate(t, &mingus()));
    }

    #[test]
    fn test_multiline_template() {
        let body = interpolate("Hey $name how is it going?\nThis is a multi-line\nText", &mingus());
        assert_eq!(body, "Hey Charles Mingus how is it going?\nThis is a multi-line\nText");
    }

    #[test]
    fn test_preview_falls_back_to_sample() {
        assert_eq!(preview("Hi $givenName", &[]), "Hi Charles");
    }

    #[test]
    fn test_preview_uses_first_contact() {
        let contacts = vec![
            ContactRecord::new("Eric Dolphy", "Eric", "Dolphy"),
            ContactRecord::new("Charles Mingus", "Charles", "Mingus"),
        ];
        assert_eq!(preview("Hi $givenName", &contacts), "Hi Eric");
    }
}
