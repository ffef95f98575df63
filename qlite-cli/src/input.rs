//! Leitura de entrada da CLI: configuração e arquivo de circuito

use anyhow::{Context, Result, bail};
use qlite_sim::{CircuitFile, DeviceConfig, ProbabilityRule, UnknownGatePolicy, WireOp};
use std::fs;
use std::path::Path;

/// Arquivo de configuração procurado no diretório atual
pub const CONFIG_FILE: &str = "qlite.toml";

/// Flags da linha de comando que sobrepõem a configuração
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub real_part_only: bool,
    pub ignore_unknown: bool,
}

impl Overrides {
    pub fn apply(self, mut config: DeviceConfig) -> DeviceConfig {
        if self.real_part_only {
            config.probability_rule = ProbabilityRule::RealPartOnly;
        }
        if self.ignore_unknown {
            config.unknown_gate = UnknownGatePolicy::Ignore;
        }
        config
    }
}

/// Carrega `path`, ou `./qlite.toml` se existir, ou o padrão
pub fn load_config(path: Option<&Path>) -> Result<DeviceConfig> {
    match path {
        Some(path) => DeviceConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                tracing::debug!("using {}", CONFIG_FILE);
                Ok(DeviceConfig::from_file(default_path)?)
            } else {
                Ok(DeviceConfig::default())
            }
        }
    }
}

/// Configuração final: arquivo e depois flags
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<DeviceConfig> {
    Ok(overrides.apply(load_config(path)?))
}

/// Lê o arquivo de circuito: documento completo ou array de operações
///
/// `wires` é obrigatório para um array puro e, num documento, substitui o
/// valor do arquivo.
pub fn load_circuit(input: &Path, wires: Option<usize>) -> Result<CircuitFile> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let value: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("parsing {}", input.display()))?;

    if value.is_array() {
        let ops: Vec<WireOp> = serde_json::from_value(value)
            .with_context(|| format!("parsing ops in {}", input.display()))?;
        let Some(wires) = wires else {
            bail!("{} is a bare op array; pass --wires", input.display());
        };
        return Ok(CircuitFile {
            name: None,
            wires,
            ops,
        });
    }

    let mut file: CircuitFile = serde_json::from_value(value)
        .with_context(|| format!("parsing circuit document {}", input.display()))?;
    if let Some(wires) = wires {
        file.wires = wires;
    }
    Ok(file)
}
