use crate::models::MarketBasketRule;

/// Lift a rule must strictly exceed unless configured otherwise
pub const DEFAULT_LIFT_THRESHOLD: f64 = 1.0;

/// Rules triggered by `item_id` with `lift > threshold`, strongest first
///
/// Antecedent membership is textual; see [`MarketBasketRule::has_antecedent`].
/// Equal lifts keep table order. A NaN lift never passes the threshold.
pub fn filter_rules(
    rules: &[MarketBasketRule],
    item_id: i64,
    threshold: f64,
) -> Vec<&MarketBasketRule> {
    let mut qualifying: Vec<&MarketBasketRule> = rules
        .iter()
        .filter(|rule| rule.has_antecedent(item_id))
        .filter(|rule| rule.lift > threshold)
        .collect();

    qualifying.sort_by(|a, b| b.lift.total_cmp(&a.lift));

    tracing::debug!(
        item_id,
        threshold,
        qualifying = qualifying.len(),
        "Filtered market basket rules"
    );

    qualifying
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(antecedents_id: &str, lift: f64) -> MarketBasketRule {
        MarketBasketRule {
            antecedents: "A".to_string(),
            antecedents_id: antecedents_id.to_string(),
            consequents: "B".to_string(),
            consequents_id: "2".to_string(),
            support: 0.1,
            confidence: 0.8,
            lift,
        }
    }

    #[test]
    fn test_matching_rule_is_returned() {
        let rules = vec![rule("1, 3", 1.5)];

        assert_eq!(filter_rules(&rules, 1, DEFAULT_LIFT_THRESHOLD), vec![&rules[0]]);
        assert_eq!(filter_rules(&rules, 3, DEFAULT_LIFT_THRESHOLD), vec![&rules[0]]);
        assert!(filter_rules(&rules, 5, DEFAULT_LIFT_THRESHOLD).is_empty());
    }

    #[test]
    fn test_lift_equal_to_threshold_is_excluded() {
        let rules = vec![rule("1", 1.0), rule("1", 0.7)];
        assert!(filter_rules(&rules, 1, DEFAULT_LIFT_THRESHOLD).is_empty());
    }

    #[test]
    fn test_nan_lift_is_excluded() {
        let rules = vec![rule("1", f64::NAN)];
        assert!(filter_rules(&rules, 1, DEFAULT_LIFT_THRESHOLD).is_empty());
    }

    #[test]
    fn test_sorted_by_lift_descending_with_stable_ties() {
        let mut first_tie = rule("1", 2.0);
        first_tie.consequents = "first".to_string();
        let mut second_tie = rule("1", 2.0);
        second_tie.consequents = "second".to_string();

        let rules = vec![
            rule("1", 1.1),
            first_tie,
            rule("9, 1", 3.5),
            rule("2", 9.0),
            second_tie,
        ];

        let result = filter_rules(&rules, 1, DEFAULT_LIFT_THRESHOLD);
        let lifts: Vec<f64> = result.iter().map(|r| r.lift).collect();
        assert_eq!(lifts, vec![3.5, 2.0, 2.0, 1.1]);
        assert_eq!(result[1].consequents, "first");
        assert_eq!(result[2].consequents, "second");
        assert!(result.iter().all(|r| r.lift > DEFAULT_LIFT_THRESHOLD));
    }

    #[test]
    fn test_custom_threshold() {
        let rules = vec![rule("1", 1.2), rule("1", 1.6)];
        let result = filter_rules(&rules, 1, 1.5);
        assert_eq!(result, vec![&rules[1]]);
    }
}
