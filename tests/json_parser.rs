use std::fs;

use diamond_cutgen::model::CutAction;
use diamond_cutgen::parser::load_from_json;
use diamond_cutgen::processor;

#[test]
fn parses_cut_records() {
    let json = fs::read_to_string("tests/upgrade_cut.json").unwrap();
    let raw = load_from_json(&json).expect("valid json");
    assert_eq!(
        raw.internal_type.as_deref(),
        Some("struct IDiamondCut.FacetCut[]")
    );

    let cut = processor::run(&raw).expect("valid cut");

    // sample file has three facet cuts
    assert_eq!(cut.records.len(), 3);

    let first = &cut.records[0];
    assert_eq!(first.target, "0x5FbDB2315678afecb367f032d93F642f64180aa3");
    assert_eq!(first.action, CutAction::Add);
    assert_eq!(first.selectors, vec!["0x1f931c1c", "0xcdffacc6", "0x52ef6b2c"]);

    assert_eq!(cut.records[1].action, CutAction::Replace);
    assert_eq!(cut.records[2].action, CutAction::Remove);
    assert!(cut.records[2].selectors.is_empty());
}
