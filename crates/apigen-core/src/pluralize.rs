//! English pluralization for collection names
//!
//! Rules are checked in order and the first match wins. The irregular table is
//! consulted before any suffix rule, so e.g. `status` becomes `statuses` even
//! though words ending in `us` are otherwise left alone.

/// Words whose plural does not follow the suffix rules
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("mouse", "mice"),
    ("criterion", "criteria"),
    ("analysis", "analyses"),
    ("datum", "data"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("status", "statuses"),
    ("bus", "buses"),
];

/// Words ending in `o` that only take an `s`
const O_EXCEPTIONS: &[&str] = &["photo", "piano", "memo"];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Pluralize a single word
///
/// Matching is case-insensitive. Irregular plurals are returned verbatim from the
/// table; suffix rules keep the casing of the input stem.
pub fn pluralize(name: &str) -> String {
    let lower = name.to_lowercase();

    if let Some((_, plural)) = IRREGULARS.iter().find(|(word, _)| *word == lower) {
        return (*plural).to_string();
    }

    // Treated as already plural (or invariant)
    if lower.ends_with('s') && (lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is")) {
        return name.to_string();
    }

    if lower.ends_with('y') {
        let before_y = lower.chars().rev().nth(1);
        return if before_y.is_some_and(|c| VOWELS.contains(&c)) {
            format!("{}s", name)
        } else {
            format!("{}ies", strip_suffix_len(name, 1))
        };
    }

    if lower.ends_with('s')
        || lower.ends_with("sh")
        || lower.ends_with("ch")
        || lower.ends_with('x')
        || lower.ends_with('z')
    {
        return format!("{}es", name);
    }

    if lower.ends_with("fe") {
        return format!("{}ves", strip_suffix_len(name, 2));
    }

    if lower.ends_with('f') {
        return format!("{}ves", strip_suffix_len(name, 1));
    }

    if lower.ends_with('o') && !O_EXCEPTIONS.contains(&lower.as_str()) {
        return format!("{}es", name);
    }

    format!("{}s", name)
}

/// Pluralize a snake_case identifier by pluralizing only its last word
///
/// `order_item` -> `order_items`, `sales_person` -> `sales_people`.
pub fn pluralize_identifier(snake: &str) -> String {
    match snake.rsplit_once('_') {
        Some((head, last)) if !last.is_empty() => format!("{}_{}", head, pluralize(last)),
        _ => pluralize(snake),
    }
}

/// Drop the last `n` ASCII characters (all rule suffixes are ASCII)
fn strip_suffix_len(s: &str, n: usize) -> &str {
    &s[..s.len().saturating_sub(n)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregulars_from_table() {
        for (word, plural) in IRREGULARS {
            assert_eq!(pluralize(word), *plural);
            assert_eq!(pluralize(&word.to_uppercase()), *plural);
        }
    }

    #[test]
    fn test_y_rule_branches() {
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("boy"), "boys");
        assert_eq!(pluralize("key"), "keys");
    }

    #[test]
    fn test_irregular_precedes_already_plural_rule() {
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("analysis"), "analyses");
    }

    #[test]
    fn test_already_plural_suffixes_only() {
        assert_eq!(pluralize("class"), "class");
        assert_eq!(pluralize("campus"), "campus");
        assert_eq!(pluralize("thesis"), "thesis");
        // Other words ending in `s` still get `es`
        assert_eq!(pluralize("gas"), "gases");
        assert_eq!(pluralize("users"), "userses");
    }

    #[test]
    fn test_sibilant_endings() {
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("quiz"), "quizes");
    }

    #[test]
    fn test_f_and_fe_endings() {
        assert_eq!(pluralize("leaf"), "leaves");
        assert_eq!(pluralize("knife"), "knives");
        assert_eq!(pluralize("wife"), "wives");
    }

    #[test]
    fn test_o_endings() {
        assert_eq!(pluralize("photo"), "photos");
        assert_eq!(pluralize("piano"), "pianos");
        assert_eq!(pluralize("memo"), "memos");
        assert_eq!(pluralize("hero"), "heroes");
        assert_eq!(pluralize("potato"), "potatoes");
    }

    #[test]
    fn test_default_and_casing() {
        assert_eq!(pluralize("order"), "orders");
        assert_eq!(pluralize("City"), "Cities");
        assert_eq!(pluralize("Order"), "Orders");
        assert_eq!(pluralize("PERSON"), "people");
    }

    #[test]
    fn test_pluralize_identifier() {
        assert_eq!(pluralize_identifier("order_item"), "order_items");
        assert_eq!(pluralize_identifier("sales_person"), "sales_people");
        assert_eq!(pluralize_identifier("product_category"), "product_categories");
        assert_eq!(pluralize_identifier("user"), "users");
    }
}
