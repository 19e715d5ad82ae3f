//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, serialization
//! and display formatting.

use core_kernel::{ApplicationId, ClientId, CreditId};
use uuid::Uuid;

mod client_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ClientId::new();
        let id2 = ClientId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ClientId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = ClientId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ClientId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClientId::prefix(), "CLI");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = ClientId::new();
        let parsed: ClientId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: ClientId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<ClientId, _> = "CLI-not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = ClientId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}

mod application_id_tests {
    use super::*;

    #[test]
    fn test_prefix_and_display() {
        assert_eq!(ApplicationId::prefix(), "APP");
        assert!(ApplicationId::new().to_string().starts_with("APP-"));
    }

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = ApplicationId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }
}

mod credit_id_tests {
    use super::*;

    #[test]
    fn test_accepts_slug() {
        let id = CreditId::new("business-loan").unwrap();
        assert_eq!(id.to_string(), "business-loan");
    }

    #[test]
    fn test_rejects_blank() {
        let err = CreditId::new("   ").unwrap_err();
        assert_eq!(err.field, "credit_id");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CreditId = serde_json::from_str("\"personal-loan\"").unwrap();
        assert_eq!(ok.as_str(), "personal-loan");

        let bad: Result<CreditId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
