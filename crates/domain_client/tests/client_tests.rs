//! Client Domain Tests
//!
//! Covers value-object invariants, equality of independently constructed
//! values, serde round trips that must re-validate, and the client
//! predicates used by the approval rules.

use core_kernel::ClientId;
use domain_client::{Client, ClientPin, CreditScore, Email, Income, Phone, Region};
use proptest::prelude::*;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn create_client(age: u32, region: &str, income: i64, score: i64) -> Client {
    Client::new(
        ClientId::new(),
        "Petr Svoboda",
        age,
        Region::new(region).unwrap(),
        Income::new(income).unwrap(),
        CreditScore::new(score).unwrap(),
        ClientPin::new("850505/0001").unwrap(),
        Email::new("petr.svoboda@example.com").unwrap(),
        Phone::new("+420 600 000 001").unwrap(),
    )
}

// ============================================================================
// VALUE OBJECTS
// ============================================================================

mod value_objects {
    use super::*;

    #[test]
    fn test_region_rejects_blank_code() {
        let err = Region::new("  ").unwrap_err();
        assert_eq!(err.field, "region");
    }

    #[test]
    fn test_region_accepts_codes_outside_allow_list() {
        // Allow-list membership is a rule concern
        assert_eq!(Region::new("XX").unwrap().code(), "XX");
    }

    #[test]
    fn test_region_stored_without_normalization() {
        let region = Region::new(" PR").unwrap();
        assert_eq!(region.code(), " PR");
        assert_ne!(region, Region::new("PR").unwrap());
    }

    #[test]
    fn test_income_zero_is_valid() {
        assert_eq!(Income::new(0).unwrap().amount(), 0);
    }

    #[test]
    fn test_income_negative_is_rejected() {
        let err = Income::new(-1).unwrap_err();
        assert_eq!(err.field, "income");
        assert_eq!(err.message, "Income cannot be negative");
    }

    #[test]
    fn test_credit_score_upper_bound_inclusive() {
        assert_eq!(CreditScore::new(1000).unwrap().value(), 1000);
    }

    #[test]
    fn test_credit_score_above_upper_bound_rejected() {
        let err = CreditScore::new(1001).unwrap_err();
        assert_eq!(err.field, "score");
    }

    #[test]
    fn test_pin_whitespace_only_rejected() {
        assert!(ClientPin::new(" \t ").is_err());
        assert_eq!(ClientPin::new("123").unwrap().value(), "123");
    }

    #[test]
    fn test_phone_whitespace_only_rejected() {
        assert!(Phone::new("   ").is_err());
    }

    #[test]
    fn test_email_format() {
        assert!(Email::new("a.b@example.cz").is_ok());
        assert!(Email::new("a.b@").is_err());
        assert!(Email::new("@example.cz").is_err());
        let err = Email::new("plainaddress").unwrap_err();
        assert_eq!(err.message, "Invalid email format");
    }

    #[test]
    fn test_same_input_yields_equal_values() {
        assert_eq!(Region::new("PR").unwrap(), Region::new("PR").unwrap());
        assert_eq!(Income::new(1500).unwrap(), Income::new(1500).unwrap());
        assert_eq!(CreditScore::new(600).unwrap(), CreditScore::new(600).unwrap());
        assert_eq!(
            Email::new("x@example.com").unwrap(),
            Email::new("x@example.com").unwrap()
        );
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

mod serialization {
    use super::*;

    #[test]
    fn test_client_json_round_trip() {
        let client = create_client(30, "PR", 1500, 600);
        let json = serde_json::to_string(&client).unwrap();
        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(client, back);
    }

    #[test]
    fn test_value_objects_serialize_as_scalars() {
        let client = create_client(30, "BR", 2000, 700);
        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["region"], "BR");
        assert_eq!(value["income"], 2000);
        assert_eq!(value["score"], 700);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_score() {
        let result: Result<CreditScore, _> = serde_json::from_str("1001");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_income() {
        let result: Result<Income, _> = serde_json::from_str("-5");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_email() {
        let result: Result<Email, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }
}

// ============================================================================
// CLIENT PREDICATES
// ============================================================================

mod predicates {
    use super::*;

    #[test]
    fn test_age_range_is_inclusive() {
        assert!(create_client(18, "PR", 1500, 600).is_age_in_range(18, 60));
        assert!(create_client(60, "PR", 1500, 600).is_age_in_range(18, 60));
        assert!(!create_client(17, "PR", 1500, 600).is_age_in_range(18, 60));
        assert!(!create_client(61, "PR", 1500, 600).is_age_in_range(18, 60));
    }

    #[test]
    fn test_minimum_income_is_inclusive() {
        assert!(create_client(30, "PR", 1000, 600).has_minimum_income(1000));
        assert!(!create_client(30, "PR", 999, 600).has_minimum_income(1000));
    }

    #[test]
    fn test_minimum_score_is_strict() {
        assert!(create_client(30, "PR", 1500, 501).has_minimum_score(500));
        assert!(!create_client(30, "PR", 1500, 500).has_minimum_score(500));
    }

    #[test]
    fn test_region_match_is_exact() {
        let client = create_client(30, "OS", 1500, 600);
        assert!(client.is_from_region("OS"));
        assert!(!client.is_from_region("os"));
        assert!(!client.is_from_region("PR"));
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_score_valid_iff_in_range(value in -2000i64..3000i64) {
        let result = CreditScore::new(value);
        prop_assert_eq!(result.is_ok(), (0..=1000).contains(&value));
    }

    #[test]
    fn prop_income_valid_iff_non_negative(value in any::<i64>()) {
        prop_assert_eq!(Income::new(value).is_ok(), value >= 0);
    }
}
