//! # ⚛️ qlite-sim — State-Vector Circuit Simulator
//!
//! Simulação exata de circuitos quânticos pequenos (1–7 qubits): vetor de
//! amplitudes complexas, biblioteca de gates padrão e executor sequencial que
//! devolve as probabilidades de medição.
//!
//! ## Computational Complexity
//!
//! **Single-qubit gate — O(2^n):**
//! - visita cada par de amplitudes uma vez (2^(n-1) pares)
//! - nunca materializa o operador 2^n × 2^n
//!
//! **CNOT — O(2^n):**
//! - permutação pura de amplitudes, sem aritmética
//!
//! **Run — O(G × 2^n):**
//! - G = número de gates, n ≤ 7 (no máximo 128 amplitudes)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Device (default.qubit)                 │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Circuit: [GateOp] / [WireOp]             │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  StateVector (2^n amplitudes)             │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Probabilities                            │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qlite_sim::{Circuit, Device};
//!
//! let mut dev = Device::new(2).unwrap();
//! let mut bell = Circuit::new();
//! bell.h(0).cnot(0, 1);
//!
//! let probs = dev.run(&bell).unwrap();
//! assert!(probs.approx_eq(&[0.5, 0.0, 0.0, 0.5], 1e-12));
//! ```

pub mod circuit;
pub mod complex;
pub mod config;
pub mod device;
pub mod error;
pub mod gates;
pub mod probabilities;
pub mod state;
pub mod wire;

pub use circuit::{Circuit, GateKind, GateOp};
pub use complex::Complex;
pub use config::{DeviceConfig, ProbabilityRule, UnknownGatePolicy};
pub use device::{DEFAULT_DEVICE_NAME, Device, DeviceStatus};
pub use error::{InvalidReason, SimError, SimResult};
pub use gates::{
    Hadamard, Matrix2x2, PauliX, PauliZ, QuantumGate, RotationX, RotationY, RotationZ,
};
pub use probabilities::Probabilities;
pub use state::{MAX_WIRES, MIN_WIRES, StateVector};
pub use wire::{CircuitFile, WireOp, parse_circuit};
