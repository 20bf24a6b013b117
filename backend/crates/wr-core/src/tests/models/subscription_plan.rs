use crate::SubscriptionPlan;

use std::str::FromStr;

#[test]
fn test_plan_from_str() {
    assert_eq!(
        SubscriptionPlan::from_str("premium").unwrap(),
        SubscriptionPlan::Premium
    );
    assert_eq!(
        SubscriptionPlan::from_str("Free").unwrap(),
        SubscriptionPlan::Free
    );
    assert!(SubscriptionPlan::from_str("gold").is_err());
}

#[test]
fn test_plan_default_is_free() {
    assert_eq!(SubscriptionPlan::default(), SubscriptionPlan::Free);
}

#[test]
fn test_only_premium_allows_ai_outfits() {
    assert!(SubscriptionPlan::Premium.allows_ai_outfits());
    assert!(!SubscriptionPlan::Free.allows_ai_outfits());
}
