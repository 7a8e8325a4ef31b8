//! Emit the Solidity upgrade script that replays a diamond cut.
//!
//! Output depends only on the records and the input path, so identical
//! input always renders byte-identical text.

use std::path::Path;

use crate::model::{CutRecord, ProcessedCut};

const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// Render the complete script.
///
/// `source` is embedded as the path the script reads the cut from at run
/// time, so it should be given relative to the forge project root.
pub fn render(cut: &ProcessedCut, source: &Path) -> String {
    let mut out = preamble(&string_literal(&source.display().to_string()), cut.len());

    for (i, record) in cut.records.iter().enumerate() {
        out.push('\n');
        facet_cut(&mut out, i, record);
    }

    out.push_str(EPILOGUE);
    out
}

fn preamble(path_literal: &str, count: usize) -> String {
    format!(
        r#"// SPDX-License-Identifier: MIT
pragma solidity 0.8.17;

/// ------------------------------------------------------------------------------------------------------------
///
/// NOTE: this file is auto-generated by {GENERATOR}, please DO NOT modify it directly. Unless you want to :)
///
/// ------------------------------------------------------------------------------------------------------------

import {{ IDiamondCut }} from "src/diamonds/nayms/INayms.sol";
import "script/utils/DeploymentHelpers.sol";

contract S03UpgradeDiamond is DeploymentHelpers {{
    using stdJson for string;

    function run(address _ownerAddress) external {{
        INayms nayms = INayms(getDiamondAddressFromFile());

        if (_ownerAddress == address(0)) {{
            _ownerAddress = nayms.owner();
        }}

        string memory path = {path_literal};
        string memory json = vm.readFile(path);
        bytes memory rawTxReturn = json.parseRaw(".returns.cut");
        TxReturn memory txReturn = abi.decode(rawTxReturn, (TxReturn));
        assertEq(txReturn.internalType, "struct IDiamondCut.FacetCut[]", "not the correct cut struct type");

        IDiamondCut.FacetCut[] memory cut = new IDiamondCut.FacetCut[]({count});
"#
    )
}

const EPILOGUE: &str = r#"
        vm.startBroadcast(_ownerAddress);
        nayms.diamondCut(cut, address(0), new bytes(0));
        vm.stopBroadcast();
    }
}
"#;

/// Selector array `f{i}`, its elements, then `cut[i]` referencing it.
fn facet_cut(out: &mut String, i: usize, record: &CutRecord) {
    out.push_str(&format!(
        "        bytes4[] memory f{i} = new bytes4[]({});\n",
        record.selectors.len()
    ));
    for (j, selector) in record.selectors.iter().enumerate() {
        out.push_str(&format!("        f{i}[{j}] = {selector};\n"));
    }
    out.push_str(&format!(
        "        cut[{i}] = IDiamondCut.FacetCut({{facetAddress: {}, action: IDiamondCut.FacetCutAction.{}, functionSelectors: f{i}}});\n",
        record.target,
        record.action.name()
    ));
}

/// Quote `s` as a Solidity string literal.
fn string_literal(s: &str) -> String {
    let mut lit = String::with_capacity(s.len() + 2);
    lit.push('"');
    for c in s.chars() {
        match c {
            '"' => lit.push_str("\\\""),
            '\\' => lit.push_str("\\\\"),
            '\n' => lit.push_str("\\n"),
            '\r' => lit.push_str("\\r"),
            c => lit.push(c),
        }
    }
    lit.push('"');
    lit
}
