use serde::{Deserialize, Serialize};

/// Separator the upstream miner uses when joining item ids into a single column
pub const ID_SEPARATOR: &str = ", ";

/// Placeholder the upstream miner writes for a missing consequent id
pub const NONE_TOKEN: &str = "None";

/// Splits a serialized id list on [`ID_SEPARATOR`].
///
/// Tokens are returned exactly as the split produces them: no trimming and no
/// numeric parsing. An empty input yields a single empty token. Antecedent
/// matching compares these tokens against the decimal text of an item id, so
/// `"1,3"` (missing space) does not contain `"1"`.
pub fn split_id_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(ID_SEPARATOR)
}

/// An association rule mined upstream, from the `market_basket` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MarketBasketRule {
    /// Display names, informational only
    pub antecedents: String,
    pub antecedents_id: String,
    /// Display names; not guaranteed to align with `consequents_id`
    pub consequents: String,
    pub consequents_id: String,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl MarketBasketRule {
    /// True when `item_id` appears among the antecedent tokens
    pub fn has_antecedent(&self, item_id: i64) -> bool {
        let needle = item_id.to_string();
        split_id_list(&self.antecedents_id).any(|token| token == needle)
    }

    pub fn consequent_tokens(&self) -> impl Iterator<Item = &str> {
        split_id_list(&self.consequents_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(antecedents_id: &str) -> MarketBasketRule {
        MarketBasketRule {
            antecedents: String::new(),
            antecedents_id: antecedents_id.to_string(),
            consequents: String::new(),
            consequents_id: String::new(),
            support: 0.1,
            confidence: 0.5,
            lift: 1.2,
        }
    }

    #[test]
    fn test_split_id_list_keeps_tokens_verbatim() {
        let tokens: Vec<&str> = split_id_list("1, 2,3,  4").collect();
        assert_eq!(tokens, vec!["1", "2,3", " 4"]);
    }

    #[test]
    fn test_split_id_list_empty_input_yields_one_empty_token() {
        let tokens: Vec<&str> = split_id_list("").collect();
        assert_eq!(tokens, vec![""]);
    }

    #[test]
    fn test_has_antecedent_matches_whole_tokens_only() {
        let r = rule("12, 3");
        assert!(r.has_antecedent(12));
        assert!(r.has_antecedent(3));
        assert!(!r.has_antecedent(1));
        assert!(!r.has_antecedent(2));
    }

    #[test]
    fn test_has_antecedent_is_textual_not_numeric() {
        // "3.0" is what a float-typed column stringifies to; it never matches 3
        assert!(!rule("3.0").has_antecedent(3));
        assert!(!rule("1,3").has_antecedent(3));
        assert!(!rule(" 3").has_antecedent(3));
    }
}
