//! The functional core: tuple-list string in, ordered `CutRecord`s out.
pub mod cut_parser;
pub mod lexer;

use tracing::{debug, info, warn};

use crate::error::ParseError;
use crate::model::{ProcessedCut, RawCut};

/// `internalType` the generated script asserts on at run time.
pub const EXPECTED_INTERNAL_TYPE: &str = "struct IDiamondCut.FacetCut[]";

/// Runs the cut parser and returns a read-only structure for writers.
pub fn run(raw: &RawCut) -> Result<ProcessedCut, ParseError> {
    if let Some(internal_type) = raw.internal_type.as_deref() {
        if internal_type != EXPECTED_INTERNAL_TYPE {
            warn!(
                found = internal_type,
                expected = EXPECTED_INTERNAL_TYPE,
                "cut has an unexpected internalType; the generated script will reject it"
            );
        }
    }

    let records = cut_parser::parse_cut(&raw.value)?;
    for (i, record) in records.iter().enumerate() {
        debug!(index = i, %record, "parsed facet cut");
    }
    info!(records = records.len(), "cut parsed");

    Ok(ProcessedCut { records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CutAction;

    #[test]
    fn test_run_keeps_records_in_order() {
        let raw = RawCut {
            value: "[(0x1, 1, [0x01]), (0x2, 0, [])]".into(),
            internal_type: Some(EXPECTED_INTERNAL_TYPE.into()),
        };

        let processed = run(&raw).unwrap();

        assert_eq!(processed.len(), 2);
        assert_eq!(processed.records[0].action, CutAction::Replace);
        assert_eq!(processed.records[1].target, "0x2");
    }

    #[test]
    fn test_run_tolerates_other_internal_type() {
        let raw = RawCut {
            value: "[]".into(),
            internal_type: Some("uint256".into()),
        };

        assert!(run(&raw).unwrap().is_empty());
    }

    #[test]
    fn test_run_propagates_parse_errors() {
        let raw = RawCut {
            value: "[(0xABC, 3, [])]".into(),
            internal_type: None,
        };

        let err = run(&raw).unwrap_err();
        assert_eq!(err.to_string(), "tuple 0: unknown action ordinal `3`");
    }
}
