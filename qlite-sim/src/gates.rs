//! # Quantum Gates — Portas Quânticas single-qubit
//!
//! Cada porta é uma matriz 2x2 complexa aplicada ao par de amplitudes que
//! diferem apenas no bit do wire alvo.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: H (Hadamard), X, Z (Pauli)
//! - **Rotation**: Rx, Ry, Rz
//!
//! CNOT não tem matriz aqui: é uma permutação de amplitudes
//! (ver [`StateVector::apply_cnot`](crate::state::StateVector::apply_cnot)).

use std::f64::consts::FRAC_1_SQRT_2;

use crate::complex::Complex;

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz a partir dos elementos
    pub const fn new(elements: [[Complex; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self {
            elements: [
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::ONE],
            ],
        }
    }

    /// Aplica gate a um par [alpha, beta]
    pub fn apply(&self, state: [Complex; 2]) -> [Complex; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [
            a.mul(alpha).add(b.mul(beta)),
            c.mul(alpha).add(d.mul(beta)),
        ]
    }

    /// Verifica se as colunas são ortonormais (M†M = I) dentro de epsilon
    pub fn is_unitary(&self, epsilon: f64) -> bool {
        let [[a, b], [c, d]] = self.elements;
        let inner = a.conj().mul(b).add(c.conj().mul(d));
        (a.norm_sq() + c.norm_sq() - 1.0).abs() < epsilon
            && (b.norm_sq() + d.norm_sq() - 1.0).abs() < epsilon
            && inner.norm_sq() < epsilon
    }
}

/// Trait para portas quânticas single-qubit
pub trait QuantumGate: Send + Sync {
    /// Nome da porta (formato do circuito)
    fn name(&self) -> &'static str;

    /// Matriz da porta
    fn matrix(&self) -> Matrix2x2;

    /// Verifica se é unitária
    fn is_unitary(&self) -> bool {
        self.matrix().is_unitary(1e-10)
    }

    /// Aplica a um par de amplitudes
    fn apply(&self, state: [Complex; 2]) -> [Complex; 2] {
        self.matrix().apply(state)
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "Hadamard"
    }

    fn matrix(&self) -> Matrix2x2 {
        let h = FRAC_1_SQRT_2;
        Matrix2x2::new([
            [Complex::real(h), Complex::real(h)],
            [Complex::real(h), Complex::real(-h)],
        ])
    }
}

/// Porta Pauli-X (NOT quântico)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "PauliX"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([[Complex::ZERO, Complex::ONE], [Complex::ONE, Complex::ZERO]])
    }
}

/// Porta Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "PauliZ"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new([
            [Complex::ONE, Complex::ZERO],
            [Complex::ZERO, Complex::real(-1.0)],
        ])
    }
}

/// Porta de rotação em X
#[derive(Clone, Copy, Debug)]
pub struct RotationX {
    pub theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationX {
    fn name(&self) -> &'static str {
        "RX"
    }

    fn matrix(&self) -> Matrix2x2 {
        let (s, c) = (self.theta / 2.0).sin_cos();
        Matrix2x2::new([
            [Complex::real(c), Complex::new(0.0, -s)],
            [Complex::new(0.0, -s), Complex::real(c)],
        ])
    }
}

/// Porta de rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "RY"
    }

    fn matrix(&self) -> Matrix2x2 {
        let (s, c) = (self.theta / 2.0).sin_cos();
        Matrix2x2::new([
            [Complex::real(c), Complex::real(-s)],
            [Complex::real(s), Complex::real(c)],
        ])
    }
}

/// Porta de rotação em Z
#[derive(Clone, Copy, Debug)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn name(&self) -> &'static str {
        "RZ"
    }

    fn matrix(&self) -> Matrix2x2 {
        let half = self.theta / 2.0;
        Matrix2x2::new([
            [Complex::phase(-half), Complex::ZERO],
            [Complex::ZERO, Complex::phase(half)],
        ])
    }
}

// =============================================================================
// Testes
// =============================================================================
