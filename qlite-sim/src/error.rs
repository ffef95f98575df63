//! Tipos de erro para qlite-sim

use thiserror::Error;

use crate::state::{MAX_WIRES, MIN_WIRES};

/// Resultado customizado para operações do simulador
pub type SimResult<T> = Result<T, SimError>;

/// Erros que podem ocorrer na construção do device ou na execução de um circuito
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Unsupported wire count {0}: supports {min}-{max} qubits", min = MIN_WIRES, max = MAX_WIRES)]
    WireCount(usize),

    #[error("Invalid operation at position {position}: {reason}")]
    InvalidOperation { position: usize, reason: InvalidReason },

    #[error("Unknown gate '{name}' at position {position}")]
    UnknownGate { name: String, position: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid circuit document: {0}")]
    Parse(String),
}

/// Motivo de uma operação inválida
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidReason {
    #[error("wire {wire} out of range for {wires} wire(s)")]
    WireOutOfRange { wire: usize, wires: usize },

    #[error("negative wire index {0}")]
    NegativeWire(i64),

    #[error("gate {gate} expects {expected} wire(s), got {got}")]
    MissingWire {
        gate: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("angle {0} is not a finite number")]
    NonFiniteAngle(f64),
}

impl SimError {
    /// Atalho para `InvalidOperation`
    pub fn invalid(position: usize, reason: InvalidReason) -> Self {
        Self::InvalidOperation { position, reason }
    }

    /// Verifica se o erro vem de uma operação inválida
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for SimError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
