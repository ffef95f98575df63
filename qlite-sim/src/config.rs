//! Configuração do device (qlite.toml)
//!
//! ```toml
//! probability_rule = "squared-magnitude"   # ou "real-part-only"
//! unknown_gate = "reject"                  # ou "ignore"
//! tolerance = 1e-9
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Regra de extração de probabilidade por amplitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbabilityRule {
    /// re² + im²
    #[default]
    SquaredMagnitude,
    /// re² apenas (regra legada)
    RealPartOnly,
}

/// O que fazer com um nome de gate desconhecido no formato de circuito
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownGatePolicy {
    #[default]
    Reject,
    /// Descarta a operação com um aviso
    Ignore,
}

/// Configuração do device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Regra de probabilidade
    pub probability_rule: ProbabilityRule,
    /// Política para gates desconhecidas
    pub unknown_gate: UnknownGatePolicy,
    /// Desvio máximo de Σp em relação a 1 antes de emitir aviso
    pub tolerance: f64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            probability_rule: ProbabilityRule::SquaredMagnitude,
            unknown_gate: UnknownGatePolicy::Reject,
            tolerance: 1e-9,
        }
    }
}

impl DeviceConfig {
    /// Configuração legada: regra re² e gates desconhecidas ignoradas
    pub fn legacy() -> Self {
        Self {
            probability_rule: ProbabilityRule::RealPartOnly,
            unknown_gate: UnknownGatePolicy::Ignore,
            ..Self::default()
        }
    }

    /// Parse a partir de TOML
    pub fn from_toml(content: &str) -> SimResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Carrega de arquivo
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Serializa para TOML
    pub fn to_toml(&self) -> SimResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SimError::Config(format!("Failed to serialize config: {}", e)))
    }

    fn validate(&self) -> SimResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SimError::Config(format!(
                "tolerance must be a non-negative finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DeviceConfig::from_toml("").unwrap(), DeviceConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = DeviceConfig::from_toml(
            r#"
probability_rule = "real-part-only"
unknown_gate = "ignore"
tolerance = 1e-6
"#,
        )
        .unwrap();

        assert_eq!(config.probability_rule, ProbabilityRule::RealPartOnly);
        assert_eq!(config.unknown_gate, UnknownGatePolicy::Ignore);
        assert_eq!(config.tolerance, 1e-6);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            DeviceConfig::from_toml("probability_rule = \"imaginary\""),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            DeviceConfig::from_toml("tolerance = -1.0"),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            DeviceConfig::from_toml("shots = 100"),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DeviceConfig::legacy();
        let text = config.to_toml().unwrap();
        assert_eq!(DeviceConfig::from_toml(&text).unwrap(), config);
    }
}
