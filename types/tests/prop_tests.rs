use proptest::prelude::*;

use trustnet_types::{
    Confidence, DocumentId, DocumentState, DocumentType, QueueKey, Timestamp, UserId,
};

fn any_state() -> impl Strategy<Value = DocumentState> {
    prop_oneof![
        Just(DocumentState::Submitted),
        Just(DocumentState::Enriched),
        Just(DocumentState::QueuedForReview),
        Just(DocumentState::UnderReview),
        Just(DocumentState::Approved),
        Just(DocumentState::Rejected),
        Just(DocumentState::AwaitingSubmitterAction),
    ]
}

fn any_doc_type() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::NationalId),
        Just(DocumentType::Passport),
        Just(DocumentType::DriverLicense),
        Just(DocumentType::BirthCertificate),
        Just(DocumentType::Other),
    ]
}

proptest! {
    /// Confidence is always clamped into 0..=100.
    #[test]
    fn confidence_always_in_range(raw in any::<u8>()) {
        prop_assert!(Confidence::new(raw).percent() <= 100);
    }

    /// Confidence ordering follows the underlying percentage.
    #[test]
    fn confidence_ordering(a in 0u8..=100, b in 0u8..=100) {
        prop_assert_eq!(Confidence::new(a) <= Confidence::new(b), a <= b);
    }

    /// Queue derivation is deterministic: same state, same queue.
    #[test]
    fn queue_key_is_pure(state in any_state()) {
        prop_assert_eq!(QueueKey::for_state(state), QueueKey::for_state(state));
    }

    /// Every state lands in exactly one of the four queues.
    #[test]
    fn queue_key_is_total(state in any_state()) {
        let key = QueueKey::for_state(state);
        prop_assert!(QueueKey::ALL.contains(&key));
    }

    /// Terminal states always land in the completed queue.
    #[test]
    fn terminal_states_complete(state in any_state()) {
        if state.is_terminal() {
            prop_assert_eq!(QueueKey::for_state(state), QueueKey::Completed);
        } else {
            prop_assert_ne!(QueueKey::for_state(state), QueueKey::Completed);
        }
    }

    /// Every document type yields a priority, and the rank ordering is total.
    #[test]
    fn priority_rank_matches_ordering(a in any_doc_type(), b in any_doc_type()) {
        let (pa, pb) = (a.review_priority(), b.review_priority());
        prop_assert_eq!(pa < pb, pa.rank() < pb.rank());
    }

    /// Required fields are never empty: every type demands at least the
    /// holder's name, birth date, and id number.
    #[test]
    fn required_fields_nonempty(ty in any_doc_type()) {
        prop_assert!(ty.required_fields().len() >= 3);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        prop_assert_eq!(Timestamp::new(a) <= Timestamp::new(b), a <= b);
    }

    /// Id newtypes round-trip through bincode.
    #[test]
    fn ids_bincode_roundtrip(user in any::<u64>(), doc in any::<u64>()) {
        let user = UserId::new(user);
        let doc = DocumentId::new(doc);
        let user2: UserId = bincode::deserialize(&bincode::serialize(&user).unwrap()).unwrap();
        let doc2: DocumentId = bincode::deserialize(&bincode::serialize(&doc).unwrap()).unwrap();
        prop_assert_eq!(user, user2);
        prop_assert_eq!(doc, doc2);
    }

    /// DocumentState survives a serde_json round-trip (the file store and
    /// CLI both speak JSON).
    #[test]
    fn state_json_roundtrip(state in any_state()) {
        let encoded = serde_json::to_string(&state).unwrap();
        let decoded: DocumentState = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(state, decoded);
    }
}
