//! Operações de gate e circuitos
//!
//! `GateOp` é um enum fechado: o despacho é um `match` exaustivo, sem ramo
//! "default" silencioso. Um circuito é uma sequência ordenada de `GateOp`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidReason, SimError, SimResult};
use crate::gates::{
    Hadamard, Matrix2x2, PauliX, PauliZ, QuantumGate, RotationX, RotationY, RotationZ,
};
use crate::state::StateVector;

/// Tipo de gate suportado, independente dos operandos
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    Hadamard,
    PauliX,
    PauliZ,
    Rx,
    Ry,
    Rz,
    Cnot,
}

impl GateKind {
    /// Todas as gates, na ordem de listagem
    pub const ALL: [GateKind; 7] = [
        Self::Hadamard,
        Self::PauliX,
        Self::PauliZ,
        Self::Rx,
        Self::Ry,
        Self::Rz,
        Self::Cnot,
    ];

    /// Resolve um nome do formato de circuito (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Hadamard" => Some(Self::Hadamard),
            "PauliX" => Some(Self::PauliX),
            "PauliZ" => Some(Self::PauliZ),
            "RX" => Some(Self::Rx),
            "RY" => Some(Self::Ry),
            "RZ" => Some(Self::Rz),
            "CNOT" | "CX" => Some(Self::Cnot),
            _ => None,
        }
    }

    /// Nome canônico
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hadamard => "Hadamard",
            Self::PauliX => "PauliX",
            Self::PauliZ => "PauliZ",
            Self::Rx => "RX",
            Self::Ry => "RY",
            Self::Rz => "RZ",
            Self::Cnot => "CNOT",
        }
    }

    /// Nomes alternativos aceitos
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Cnot => &["CX"],
            _ => &[],
        }
    }

    /// Número de wires
    pub fn arity(&self) -> usize {
        match self {
            Self::Cnot => 2,
            _ => 1,
        }
    }

    /// Usa ângulo?
    pub fn takes_angle(&self) -> bool {
        matches!(self, Self::Rx | Self::Ry | Self::Rz)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operação de gate com operandos
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate")]
pub enum GateOp {
    Hadamard { wire: usize },
    PauliX { wire: usize },
    PauliZ { wire: usize },
    #[serde(rename = "RX")]
    Rx { wire: usize, angle: f64 },
    #[serde(rename = "RY")]
    Ry { wire: usize, angle: f64 },
    #[serde(rename = "RZ")]
    Rz { wire: usize, angle: f64 },
    #[serde(rename = "CNOT", alias = "CX")]
    Cnot { control: usize, target: usize },
}

impl GateOp {
    pub fn kind(&self) -> GateKind {
        match self {
            Self::Hadamard { .. } => GateKind::Hadamard,
            Self::PauliX { .. } => GateKind::PauliX,
            Self::PauliZ { .. } => GateKind::PauliZ,
            Self::Rx { .. } => GateKind::Rx,
            Self::Ry { .. } => GateKind::Ry,
            Self::Rz { .. } => GateKind::Rz,
            Self::Cnot { .. } => GateKind::Cnot,
        }
    }

    /// Wires tocados pela operação
    pub fn wires(&self) -> Vec<usize> {
        match *self {
            Self::Hadamard { wire }
            | Self::PauliX { wire }
            | Self::PauliZ { wire }
            | Self::Rx { wire, .. }
            | Self::Ry { wire, .. }
            | Self::Rz { wire, .. } => vec![wire],
            Self::Cnot { control, target } => vec![control, target],
        }
    }

    /// Ângulo das rotações
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Self::Rx { angle, .. } | Self::Ry { angle, .. } | Self::Rz { angle, .. } => Some(angle),
            _ => None,
        }
    }

    /// Matriz 2x2 (None para CNOT)
    pub fn matrix(&self) -> Option<Matrix2x2> {
        match *self {
            Self::Hadamard { .. } => Some(Hadamard.matrix()),
            Self::PauliX { .. } => Some(PauliX.matrix()),
            Self::PauliZ { .. } => Some(PauliZ.matrix()),
            Self::Rx { angle, .. } => Some(RotationX::new(angle).matrix()),
            Self::Ry { angle, .. } => Some(RotationY::new(angle).matrix()),
            Self::Rz { angle, .. } => Some(RotationZ::new(angle).matrix()),
            Self::Cnot { .. } => None,
        }
    }

    /// Valida os wires contra o tamanho do registrador
    pub fn check(&self, wires: usize) -> Result<(), InvalidReason> {
        for wire in self.wires() {
            if wire >= wires {
                return Err(InvalidReason::WireOutOfRange { wire, wires });
            }
        }
        if let Some(angle) = self.angle()
            && !angle.is_finite()
        {
            return Err(InvalidReason::NonFiniteAngle(angle));
        }
        Ok(())
    }

    /// Aplica a operação ao vetor de estado
    pub fn apply(&self, state: &mut StateVector) -> Result<(), InvalidReason> {
        match *self {
            Self::Hadamard { wire } => apply_gate(state, wire, Hadamard),
            Self::PauliX { wire } => apply_gate(state, wire, PauliX),
            Self::PauliZ { wire } => apply_gate(state, wire, PauliZ),
            Self::Rx { wire, angle } => apply_gate(state, wire, RotationX::new(angle)),
            Self::Ry { wire, angle } => apply_gate(state, wire, RotationY::new(angle)),
            Self::Rz { wire, angle } => apply_gate(state, wire, RotationZ::new(angle)),
            Self::Cnot { control, target } => state.apply_cnot(control, target),
        }
    }
}

fn apply_gate(
    state: &mut StateVector,
    wire: usize,
    gate: impl QuantumGate,
) -> Result<(), InvalidReason> {
    state.apply_single_qubit_gate(wire, &gate.matrix())
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Hadamard { wire } | Self::PauliX { wire } | Self::PauliZ { wire } => {
                write!(f, "{}({})", self.kind(), wire)
            }
            Self::Rx { wire, angle } | Self::Ry { wire, angle } | Self::Rz { wire, angle } => {
                write!(f, "{}({}, {})", self.kind(), wire, angle)
            }
            Self::Cnot { control, target } => write!(f, "CNOT({}, {})", control, target),
        }
    }
}

/// Valida um circuito inteiro antes de qualquer mutação
pub fn validate(ops: &[GateOp], wires: usize) -> SimResult<()> {
    for (position, op) in ops.iter().enumerate() {
        op.check(wires)
            .map_err(|reason| SimError::invalid(position, reason))?;
    }
    Ok(())
}

/// Circuito quântico: sequência ordenada de operações
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circuit {
    ops: Vec<GateOp>,
}

impl Circuit {
    /// Cria circuito vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona operação ao circuito
    pub fn push(&mut self, op: GateOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn h(&mut self, wire: usize) -> &mut Self {
        self.push(GateOp::Hadamard { wire })
    }

    pub fn x(&mut self, wire: usize) -> &mut Self {
        self.push(GateOp::PauliX { wire })
    }

    pub fn z(&mut self, wire: usize) -> &mut Self {
        self.push(GateOp::PauliZ { wire })
    }

    pub fn rx(&mut self, wire: usize, angle: f64) -> &mut Self {
        self.push(GateOp::Rx { wire, angle })
    }

    pub fn ry(&mut self, wire: usize, angle: f64) -> &mut Self {
        self.push(GateOp::Ry { wire, angle })
    }

    pub fn rz(&mut self, wire: usize, angle: f64) -> &mut Self {
        self.push(GateOp::Rz { wire, angle })
    }

    pub fn cnot(&mut self, control: usize, target: usize) -> &mut Self {
        self.push(GateOp::Cnot { control, target })
    }

    /// Retorna número de operações
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Verifica se circuito está vazio
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Maior wire referenciado
    pub fn max_wire(&self) -> Option<usize> {
        self.ops.iter().flat_map(|op| op.wires()).max()
    }

    /// Valida contra um registrador de `wires` qubits
    pub fn validate(&self, wires: usize) -> SimResult<()> {
        validate(&self.ops, wires)
    }
}

impl From<Vec<GateOp>> for Circuit {
    fn from(ops: Vec<GateOp>) -> Self {
        Self { ops }
    }
}

impl FromIterator<GateOp> for Circuit {
    fn from_iter<T: IntoIterator<Item = GateOp>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[GateOp]> for Circuit {
    fn as_ref(&self) -> &[GateOp] {
        &self.ops
    }
}
