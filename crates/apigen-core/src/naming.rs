//! Module name validation and case variants

use crate::error::ScaffoldError;
use serde::Serialize;
use std::fmt;

/// A validated module (or project resource) name split into lowercase words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    raw: String,
    words: Vec<String>,
}

impl ModuleName {
    /// Parse a user-supplied name such as `order`, `order-item`, `orderItem` or `Order Item`
    pub fn parse(raw: &str) -> Result<Self, ScaffoldError> {
        let trimmed = raw.trim();
        let invalid = |reason| ScaffoldError::InvalidName {
            name: raw.to_string(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(invalid("name is empty"));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
        {
            return Err(invalid(
                "only ASCII letters, digits, '-', '_' and spaces are allowed",
            ));
        }

        let words = split_words(trimmed);
        match words.first() {
            None => Err(invalid("name has no letters or digits")),
            Some(first) if first.starts_with(|c: char| c.is_ascii_digit()) => {
                Err(invalid("must start with a letter"))
            }
            Some(_) => Ok(Self {
                raw: trimmed.to_string(),
                words,
            }),
        }
    }

    /// The name as typed (trimmed)
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `orderItem`
    pub fn camel(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i == 0 {
                out.push_str(word);
            } else {
                out.push_str(&capitalize(word));
            }
        }
        out
    }

    /// `OrderItem`
    pub fn pascal(&self) -> String {
        self.words.iter().map(|w| capitalize(w)).collect()
    }

    /// `order-item`
    pub fn kebab(&self) -> String {
        self.words.join("-")
    }

    /// `order_item`
    pub fn snake(&self) -> String {
        self.words.join("_")
    }

    /// `ORDER_ITEM`
    pub fn upper_snake(&self) -> String {
        self.snake().to_ascii_uppercase()
    }

    /// Every case variant in one serializable record
    pub fn variants(&self) -> NameVariants {
        NameVariants {
            raw: self.raw.clone(),
            camel: self.camel(),
            pascal: self.pascal(),
            kebab: self.kebab(),
            snake: self.snake(),
            upper: self.upper_snake(),
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kebab())
    }
}

/// Case variants of a [`ModuleName`], as exposed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    pub raw: String,
    pub camel: String,
    pub pascal: String,
    pub kebab: String,
    pub snake: String,
    pub upper: String,
}

/// Split on separators and lower->upper camel boundaries, lowercasing each word
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if matches!(c, '-' | '_' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_variants() {
        let name = ModuleName::parse("user").unwrap();
        assert_eq!(name.camel(), "user");
        assert_eq!(name.pascal(), "User");
        assert_eq!(name.kebab(), "user");
        assert_eq!(name.snake(), "user");
        assert_eq!(name.upper_snake(), "USER");
    }

    #[test]
    fn test_multi_word_inputs_agree() {
        for input in ["order-item", "order_item", "orderItem", "OrderItem", "Order Item"] {
            let name = ModuleName::parse(input).unwrap();
            assert_eq!(name.camel(), "orderItem", "input {input}");
            assert_eq!(name.pascal(), "OrderItem", "input {input}");
            assert_eq!(name.kebab(), "order-item", "input {input}");
            assert_eq!(name.upper_snake(), "ORDER_ITEM", "input {input}");
        }
    }

    #[test]
    fn test_acronyms_stay_together() {
        let name = ModuleName::parse("APIKey").unwrap();
        assert_eq!(name.kebab(), "apikey");

        let name = ModuleName::parse("invoice2Line").unwrap();
        assert_eq!(name.kebab(), "invoice2-line");
    }

    #[test]
    fn test_rejects_invalid_names() {
        assert!(ModuleName::parse("").is_err());
        assert!(ModuleName::parse("   ").is_err());
        assert!(ModuleName::parse("--").is_err());
        assert!(ModuleName::parse("2fa").is_err());
        assert!(ModuleName::parse("user/admin").is_err());
        assert!(ModuleName::parse("../etc").is_err());
    }

    #[test]
    fn test_variants_record() {
        let v = ModuleName::parse(" tahun-ajaran ").unwrap().variants();
        assert_eq!(v.raw, "tahun-ajaran");
        assert_eq!(v.camel, "tahunAjaran");
        assert_eq!(v.pascal, "TahunAjaran");
        assert_eq!(v.snake, "tahun_ajaran");
        assert_eq!(v.upper, "TAHUN_AJARAN");
    }
}
