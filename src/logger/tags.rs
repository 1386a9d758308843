/// Log tags identify the subsystem a message comes from
///
/// Each tag maps to a `--debug-<key>` flag that unlocks its debug output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Api,
    Fills,
    Ledger,
    Config,
}

impl LogTag {
    /// Key used in `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system",
            LogTag::Api => "api",
            LogTag::Fills => "fills",
            LogTag::Ledger => "ledger",
            LogTag::Config => "config",
        }
        .to_string()
    }

    /// Uncolored label
    pub fn to_plain_string(&self) -> String {
        self.to_debug_key().to_uppercase()
    }

    pub fn all() -> [LogTag; 5] {
        [
            LogTag::System,
            LogTag::Api,
            LogTag::Fills,
            LogTag::Ledger,
            LogTag::Config,
        ]
    }
}
