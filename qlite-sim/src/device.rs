//! Device: executor sequencial de circuitos

use serde::{Deserialize, Serialize};

use crate::circuit::{self, GateOp};
use crate::config::{DeviceConfig, ProbabilityRule};
use crate::error::{SimError, SimResult};
use crate::probabilities::Probabilities;
use crate::state::{StateVector, check_wire_count};
use crate::wire::{self, WireOp};

/// Nome padrão do device
pub const DEFAULT_DEVICE_NAME: &str = "default.qubit";

/// Estado do executor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceStatus {
    /// Nenhuma execução concluída
    #[default]
    Idle,
    /// Última execução concluída com sucesso
    Completed,
}

/// Simulador de 1–7 qubits
///
/// Cada chamada a [`Device::run`] aloca um vetor de estado novo; nada é
/// compartilhado entre execuções.
#[derive(Debug, Clone)]
pub struct Device {
    name: String,
    wires: usize,
    config: DeviceConfig,
    status: DeviceStatus,
    run_count: u64,
}

impl Device {
    /// Cria device `default.qubit` com `wires` qubits
    pub fn new(wires: usize) -> SimResult<Self> {
        Self::with_config(DEFAULT_DEVICE_NAME, wires, DeviceConfig::default())
    }

    /// Cria device com nome próprio
    pub fn with_name(name: impl Into<String>, wires: usize) -> SimResult<Self> {
        Self::with_config(name, wires, DeviceConfig::default())
    }

    /// Cria device com configuração customizada
    pub fn with_config(
        name: impl Into<String>,
        wires: usize,
        config: DeviceConfig,
    ) -> SimResult<Self> {
        check_wire_count(wires)?;

        Ok(Self {
            name: name.into(),
            wires,
            config,
            status: DeviceStatus::Idle,
            run_count: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Número de wires
    pub fn wires(&self) -> usize {
        self.wires
    }

    /// Dimensão do vetor de estado
    pub fn dim(&self) -> usize {
        1 << self.wires
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// Número de execuções concluídas
    pub fn run_count(&self) -> u64 {
        self.run_count
    }

    /// Executa o circuito e devolve o estado final
    ///
    /// O circuito inteiro é validado antes da primeira gate.
    pub fn evolve(&self, ops: &[GateOp]) -> SimResult<StateVector> {
        circuit::validate(ops, self.wires)?;

        let mut state = StateVector::new(self.wires)?;
        for (position, op) in ops.iter().enumerate() {
            tracing::trace!(position, op = %op, "applying gate");
            op.apply(&mut state)
                .map_err(|reason| SimError::invalid(position, reason))?;
        }
        Ok(state)
    }

    /// Executa o circuito e extrai as probabilidades
    pub fn run(&mut self, ops: impl AsRef<[GateOp]>) -> SimResult<Probabilities> {
        let ops = ops.as_ref();
        tracing::debug!(device = %self.name, wires = self.wires, gates = ops.len(), "running circuit");

        let state = self.evolve(ops)?;
        let probs = state.probabilities(self.config.probability_rule);

        if self.config.probability_rule == ProbabilityRule::SquaredMagnitude {
            let total = probs.total();
            let drift = (total - 1.0).abs();
            if drift.is_nan() || drift > self.config.tolerance {
                tracing::warn!(device = %self.name, total, "probabilities drifted from 1");
            }
        }

        self.status = DeviceStatus::Completed;
        self.run_count += 1;
        Ok(probs)
    }

    /// Executa operações no formato do app (`{gate, wires, angle}`)
    pub fn run_wire(&mut self, ops: &[WireOp]) -> SimResult<Probabilities> {
        let circuit = wire::to_circuit(ops, self.config.unknown_gate)?;
        self.run(circuit)
    }

    /// Wrapper assíncrono de [`Device::run`] para hosts orientados a eventos
    ///
    /// Não há trabalho concorrente: a simulação roda inteira no poll.
    pub async fn run_async(&mut self, ops: impl AsRef<[GateOp]>) -> SimResult<Probabilities> {
        self.run(ops)
    }
}
