use std::fmt;

use serde::Deserialize;

/// `returns.cut` exactly as it sits in the broadcast JSON.
///
/// The tuple list is still one opaque string at this point; the cut parser
/// turns it into `CutRecord`s.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCut {
    pub value: String,
    #[serde(rename = "internalType", default)]
    pub internal_type: Option<String>,
}

/// `IDiamondCut.FacetCutAction`, ordinal-coded in the tuple list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutAction {
    Add,
    Replace,
    Remove,
}

impl CutAction {
    /// Index == ordinal in the serialized tuple list.
    pub const VARIANT_NAMES: &'static [&'static str] = &["Add", "Replace", "Remove"];

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(CutAction::Add),
            1 => Some(CutAction::Replace),
            2 => Some(CutAction::Remove),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Member name used in `IDiamondCut.FacetCutAction.<name>`.
    pub fn name(self) -> &'static str {
        Self::VARIANT_NAMES[self.ordinal() as usize]
    }
}

impl fmt::Display for CutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One facet change: which selectors to add, replace or remove at `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutRecord {
    pub target: String,
    pub action: CutAction,
    pub selectors: Vec<String>,
}

/// Writes the record back in tuple-list form, e.g. `(0xABC, 0, [0x11111111])`.
impl fmt::Display for CutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, [{}])",
            self.target,
            self.action.ordinal(),
            self.selectors.join(", ")
        )
    }
}

/// Fully parsed cut handed to the writer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessedCut {
    pub records: Vec<CutRecord>,
}

impl ProcessedCut {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
