use crate::{
    models::{MarketBasketRule, RecommendationRecord, NONE_TOKEN},
    services::IdentifierIndex,
};

/// Explodes each rule's consequents into one record per recommended product.
///
/// Empty and `"None"` tokens are skipped. Every record carries its parent
/// rule's lift, confidence and support. Ids missing from `index` (or tokens
/// that are not integers) fall back to the rule's raw `consequents` text.
/// Output order is rule order, then token order within a rule.
pub fn expand_consequents(
    rules: &[&MarketBasketRule],
    index: &IdentifierIndex,
) -> Vec<RecommendationRecord> {
    let mut records = Vec::new();

    for rule in rules {
        for token in rule.consequent_tokens() {
            if token.is_empty() || token == NONE_TOKEN {
                continue;
            }

            let product_name = match token.trim().parse::<i64>() {
                Ok(id) => index.id_to_name(id, &rule.consequents),
                Err(_) => {
                    tracing::debug!(token, "Consequent token is not an item id");
                    rule.consequents.as_str()
                }
            };

            records.push(RecommendationRecord {
                product_name: product_name.to_string(),
                lift: rule.lift,
                confidence: rule.confidence,
                support: rule.support,
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn index() -> IdentifierIndex {
        IdentifierIndex::build(&[Product::new(1, "A"), Product::new(2, "B"), Product::new(3, "C")])
    }

    fn rule(consequents_id: &str, consequents: &str, lift: f64) -> MarketBasketRule {
        MarketBasketRule {
            antecedents: "A".to_string(),
            antecedents_id: "1, 3".to_string(),
            consequents: consequents.to_string(),
            consequents_id: consequents_id.to_string(),
            support: 0.1,
            confidence: 0.8,
            lift,
        }
    }

    #[test]
    fn test_none_token_produces_nothing() {
        let r = rule("2, None", "B", 1.5);
        let records = expand_consequents(&[&r], &index());

        assert_eq!(
            records,
            vec![RecommendationRecord {
                product_name: "B".to_string(),
                lift: 1.5,
                confidence: 0.8,
                support: 0.1,
            }]
        );
    }

    #[test]
    fn test_unknown_id_falls_back_to_raw_consequents() {
        let r = rule("99", "Mystery Item", 1.5);
        let records = expand_consequents(&[&r], &index());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name, "Mystery Item");
    }

    #[test]
    fn test_non_integer_token_falls_back_to_raw_consequents() {
        let r = rule("abc", "Raw", 1.5);
        let records = expand_consequents(&[&r], &index());
        assert_eq!(records[0].product_name, "Raw");
    }

    #[test]
    fn test_empty_and_none_only_rules_produce_nothing() {
        let empty = rule("", "", 2.0);
        let none = rule("None", "", 1.8);
        let both = rule("None, None", "", 1.7);

        assert!(expand_consequents(&[&empty, &none, &both], &index()).is_empty());
    }

    #[test]
    fn test_multi_consequent_rule_duplicates_rule_metrics() {
        let strong = rule("3, 2", "C, B", 2.5);
        let weak = rule("2", "B", 1.2);

        let records = expand_consequents(&[&strong, &weak], &index());
        let names: Vec<&str> = records.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "B"]);

        assert_eq!(records[0].lift, strong.lift);
        assert_eq!(records[1].lift, strong.lift);
        assert_eq!(records[1].confidence, strong.confidence);
        assert_eq!(records[1].support, strong.support);
        assert_eq!(records[2].lift, weak.lift);
    }
}
