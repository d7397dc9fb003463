use vigil_core::SymbolPolicy;

/// Solver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    /// How grid symbols outside the alphabet are handled.
    pub symbols: SymbolPolicy,
}

impl SolveConfig {
    /// Configuration that rejects unknown symbols.
    pub const fn strict() -> Self {
        Self {
            symbols: SymbolPolicy::Strict,
        }
    }

    /// Set the symbol policy (builder).
    pub const fn with_symbols(mut self, symbols: SymbolPolicy) -> Self {
        self.symbols = symbols;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SolveConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SolveConfig::default());
        let cfg: SolveConfig = serde_json::from_str(r#"{"symbols":"strict"}"#).unwrap();
        assert_eq!(cfg, SolveConfig::strict());
    }
}
