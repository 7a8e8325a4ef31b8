use diamond_cutgen::model::{CutAction, CutRecord};
use diamond_cutgen::processor::cut_parser::parse_cut;
use proptest::prelude::*;

fn action() -> impl Strategy<Value = CutAction> {
    prop_oneof![
        Just(CutAction::Add),
        Just(CutAction::Replace),
        Just(CutAction::Remove),
    ]
}

fn record() -> impl Strategy<Value = CutRecord> {
    (
        "0x[0-9a-fA-F]{40}",
        action(),
        prop::collection::vec("0x[0-9a-f]{8}", 0..6),
    )
        .prop_map(|(target, action, selectors)| CutRecord {
            target,
            action,
            selectors,
        })
}

/// Serialize records the way forge prints a `FacetCut[]` return value.
fn tuple_list(records: &[CutRecord]) -> String {
    let tuples: Vec<String> = records.iter().map(ToString::to_string).collect();
    format!("[{}]", tuples.join(", "))
}

proptest! {
    #[test]
    fn test_round_trip_records(records in prop::collection::vec(record(), 0..8)) {
        let parsed = parse_cut(&tuple_list(&records)).unwrap();
        prop_assert_eq!(parsed, records);
    }

    #[test]
    fn test_never_panics(src in "[\\[\\](), 0-9a-fx;\"]{0,40}") {
        let _ = parse_cut(&src);
    }
}
