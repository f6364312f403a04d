use primitives::{Address, POINT_EVALUATION_ADDRESS, POINT_EVALUATION_GAS_COST};

/// Default upper bound for the gas forwarded to the precompile.
///
/// Twice the precompile cost, so both the out-of-gas and the funded paths are hit.
pub const DEFAULT_MAX_GAS: u64 = 2 * POINT_EVALUATION_GAS_COST;

/// Generator settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GeneratorConfig {
    /// Address the generated calls target.
    pub precompile_address: Address,
    /// Inclusive upper bound of the drawn gas.
    pub max_gas: u64,
    /// Enables the sampled and single-violation strategies on the non-random branch.
    pub extended_strategies: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            precompile_address: POINT_EVALUATION_ADDRESS,
            max_gas: DEFAULT_MAX_GAS,
            extended_strategies: false,
        }
    }
}

impl GeneratorConfig {
    /// Sets the target address.
    pub fn with_precompile_address(mut self, address: Address) -> Self {
        self.precompile_address = address;
        self
    }

    /// Sets the gas bound.
    pub fn with_max_gas(mut self, max_gas: u64) -> Self {
        self.max_gas = max_gas;
        self
    }

    /// Enables or disables the extended strategies.
    pub fn with_extended_strategies(mut self, enabled: bool) -> Self {
        self.extended_strategies = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_mainnet_precompile() {
        let config = GeneratorConfig::default();
        assert_eq!(config.precompile_address, POINT_EVALUATION_ADDRESS);
        assert_eq!(config.max_gas, 100_000);
        assert!(!config.extended_strategies);
    }

    #[test]
    fn builders_set_one_field_each() {
        let address = primitives::u64_to_address(0x14);
        let config = GeneratorConfig::default().with_precompile_address(address);
        assert_eq!(
            config,
            GeneratorConfig {
                precompile_address: address,
                ..Default::default()
            }
        );

        let config = GeneratorConfig::default().with_max_gas(7);
        assert_eq!(config.max_gas, 7);
        assert_eq!(config.precompile_address, POINT_EVALUATION_ADDRESS);

        let config = GeneratorConfig::default()
            .with_extended_strategies(true)
            .with_extended_strategies(false);
        assert_eq!(config, GeneratorConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_take_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{ "maxGas": 10 }"#).unwrap();
        assert_eq!(config, GeneratorConfig::default().with_max_gas(10));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_roundtrip() {
        let config = GeneratorConfig::default()
            .with_precompile_address(primitives::u64_to_address(0x14))
            .with_extended_strategies(true);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("extendedStrategies"));
        assert_eq!(serde_json::from_str::<GeneratorConfig>(&json).unwrap(), config);
    }
}
