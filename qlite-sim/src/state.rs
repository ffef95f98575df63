//! Vetor de estado: 2^n amplitudes complexas
//!
//! O bit `t` do índice de base é o valor do wire `t` (wire 0 = bit menos
//! significativo). O vetor é criado no estado |0…0⟩ e mutado in-place.

use crate::complex::Complex;
use crate::config::ProbabilityRule;
use crate::error::{InvalidReason, SimError, SimResult};
use crate::gates::Matrix2x2;
use crate::probabilities::Probabilities;

/// Menor número de wires suportado
pub const MIN_WIRES: usize = 1;

/// Maior número de wires suportado (dim = 128)
pub const MAX_WIRES: usize = 7;

/// Valida o número de wires antes de qualquer alocação
pub fn check_wire_count(wires: usize) -> SimResult<()> {
    if (MIN_WIRES..=MAX_WIRES).contains(&wires) {
        Ok(())
    } else {
        Err(SimError::WireCount(wires))
    }
}

/// Amplitudes do registrador
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    wires: usize,
    amplitudes: Vec<Complex>,
}

impl StateVector {
    /// Cria estado |0…0⟩ com `wires` qubits
    pub fn new(wires: usize) -> SimResult<Self> {
        check_wire_count(wires)?;

        let mut amplitudes = vec![Complex::ZERO; 1 << wires];
        amplitudes[0] = Complex::ONE;

        Ok(Self { wires, amplitudes })
    }

    /// Número de wires
    pub fn wires(&self) -> usize {
        self.wires
    }

    /// Dimensão (2^wires)
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    /// Amplitude de um índice de base
    pub fn amplitude(&self, index: usize) -> Option<Complex> {
        self.amplitudes.get(index).copied()
    }

    fn check_wire(&self, wire: usize) -> Result<(), InvalidReason> {
        if wire < self.wires {
            Ok(())
        } else {
            Err(InvalidReason::WireOutOfRange {
                wire,
                wires: self.wires,
            })
        }
    }

    /// Aplica uma matriz 2x2 ao wire `target`
    ///
    /// Cada índice com o bit `target` em 0 é visitado uma única vez como o
    /// membro "0" do seu par, sem materializar o operador 2^n×2^n.
    pub fn apply_single_qubit_gate(
        &mut self,
        target: usize,
        matrix: &Matrix2x2,
    ) -> Result<(), InvalidReason> {
        self.check_wire(target)?;

        let mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                continue;
            }
            let j = i | mask;
            let [a, b] = matrix.apply([self.amplitudes[i], self.amplitudes[j]]);
            self.amplitudes[i] = a;
            self.amplitudes[j] = b;
        }

        Ok(())
    }

    /// Aplica CNOT como permutação de amplitudes
    ///
    /// Para todo índice com bit de controle 1 e bit alvo 0, troca com o
    /// índice de bit alvo 1. Preserva exatamente cada módulo; com
    /// `control == target` nenhum índice se qualifica e o estado não muda.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<(), InvalidReason> {
        self.check_wire(control)?;
        self.check_wire(target)?;

        let control_mask = 1 << control;
        let target_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }

        Ok(())
    }

    /// Soma das probabilidades (Σ |a|²)
    pub fn norm_sq(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sq()).sum()
    }

    /// Verifica normalização
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sq() - 1.0).abs() <= epsilon
    }

    /// Extrai o vetor de probabilidades segundo a regra escolhida
    pub fn probabilities(&self, rule: ProbabilityRule) -> Probabilities {
        self.amplitudes
            .iter()
            .map(|a| match rule {
                ProbabilityRule::SquaredMagnitude => a.norm_sq(),
                ProbabilityRule::RealPartOnly => a.re * a.re,
            })
            .collect()
    }
}
