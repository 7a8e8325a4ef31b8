use std::path::PathBuf;

/// Where the generated script lands unless told otherwise.
pub const DEFAULT_OUTPUT: &str = "script/deployment/S03UpgradeDiamond.s.sol";

/// Explicit input/output locations for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Broadcast/return JSON holding `returns.cut`.
    pub input: PathBuf,
    /// Solidity file to (over)write.
    pub output: PathBuf,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
