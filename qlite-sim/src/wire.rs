//! Formato de circuito consumido do app: `{ gate, wires, angle? }`
//!
//! ```json
//! [
//!   { "gate": "Hadamard", "wires": [0] },
//!   { "gate": "CNOT", "wires": [0, 1] },
//!   { "gate": "RZ", "wires": [1], "angle": 1.57 }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::circuit::{Circuit, GateKind, GateOp};
use crate::config::UnknownGatePolicy;
use crate::error::{InvalidReason, SimError, SimResult};

/// Operação no formato do app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireOp {
    /// Nome da gate (`Hadamard`, `PauliX`, `PauliZ`, `RX`, `RY`, `RZ`, `CNOT`/`CX`)
    pub gate: String,
    /// Um ou dois índices de wire
    #[serde(default)]
    pub wires: Vec<i64>,
    /// Ângulo em radianos (só RX/RY/RZ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl WireOp {
    pub fn new(gate: impl Into<String>, wires: Vec<i64>, angle: Option<f64>) -> Self {
        Self {
            gate: gate.into(),
            wires,
            angle,
        }
    }

    /// Converte para `GateOp`; `position` só entra nas mensagens de erro
    ///
    /// Wires excedentes são ignorados; ângulo ausente vale 0.
    pub fn to_gate_op(&self, position: usize) -> SimResult<GateOp> {
        let kind = GateKind::from_name(&self.gate).ok_or_else(|| SimError::UnknownGate {
            name: self.gate.clone(),
            position,
        })?;

        if self.wires.len() < kind.arity() {
            return Err(SimError::invalid(
                position,
                InvalidReason::MissingWire {
                    gate: kind.name(),
                    expected: kind.arity(),
                    got: self.wires.len(),
                },
            ));
        }

        let wire = |i: usize| -> SimResult<usize> {
            let raw = self.wires[i];
            usize::try_from(raw)
                .map_err(|_| SimError::invalid(position, InvalidReason::NegativeWire(raw)))
        };
        let angle = self.angle.unwrap_or(0.0);

        Ok(match kind {
            GateKind::Hadamard => GateOp::Hadamard { wire: wire(0)? },
            GateKind::PauliX => GateOp::PauliX { wire: wire(0)? },
            GateKind::PauliZ => GateOp::PauliZ { wire: wire(0)? },
            GateKind::Rx => GateOp::Rx { wire: wire(0)?, angle },
            GateKind::Ry => GateOp::Ry { wire: wire(0)?, angle },
            GateKind::Rz => GateOp::Rz { wire: wire(0)?, angle },
            GateKind::Cnot => GateOp::Cnot {
                control: wire(0)?,
                target: wire(1)?,
            },
        })
    }
}

impl From<&GateOp> for WireOp {
    fn from(op: &GateOp) -> Self {
        Self {
            gate: op.kind().name().to_string(),
            wires: op.wires().into_iter().map(|w| w as i64).collect(),
            angle: op.angle(),
        }
    }
}

/// Converte uma lista de `WireOp` num `Circuit`
///
/// Com `UnknownGatePolicy::Ignore`, nomes desconhecidos são descartados
/// (com aviso) em vez de falhar.
pub fn to_circuit(ops: &[WireOp], policy: UnknownGatePolicy) -> SimResult<Circuit> {
    let mut circuit = Circuit::new();
    for (position, op) in ops.iter().enumerate() {
        match op.to_gate_op(position) {
            Ok(gate) => {
                circuit.push(gate);
            }
            Err(SimError::UnknownGate { name, position })
                if policy == UnknownGatePolicy::Ignore =>
            {
                tracing::warn!(gate = %name, position, "ignoring unknown gate");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(circuit)
}

/// Parse de um array JSON de `WireOp`
pub fn parse_circuit(json: &str) -> SimResult<Vec<WireOp>> {
    Ok(serde_json::from_str(json)?)
}

/// Documento de circuito lido pela CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitFile {
    /// Nome do device (padrão `default.qubit`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Número de wires
    pub wires: usize,
    /// Operações
    #[serde(default)]
    pub ops: Vec<WireOp>,
}

impl CircuitFile {
    /// Parse a partir de JSON
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_defaults_to_zero() {
        let op = WireOp::new("RY", vec![0], None);
        assert_eq!(op.to_gate_op(0).unwrap(), GateOp::Ry { wire: 0, angle: 0.0 });
    }

    #[test]
    fn test_angle_ignored_on_fixed_gates() {
        let op = WireOp::new("PauliX", vec![1], Some(3.0));
        assert_eq!(op.to_gate_op(0).unwrap(), GateOp::PauliX { wire: 1 });
    }

    #[test]
    fn test_cx_alias_and_extra_wires() {
        let op = WireOp::new("CX", vec![1, 0, 7], None);
        assert_eq!(
            op.to_gate_op(0).unwrap(),
            GateOp::Cnot { control: 1, target: 0 }
        );
    }

    #[test]
    fn test_missing_and_negative_wires() {
        let err = WireOp::new("CNOT", vec![0], None).to_gate_op(4).unwrap_err();
        assert_eq!(
            err,
            SimError::invalid(
                4,
                InvalidReason::MissingWire { gate: "CNOT", expected: 2, got: 1 }
            )
        );

        let err = WireOp::new("Hadamard", vec![-1], None).to_gate_op(0).unwrap_err();
        assert_eq!(err, SimError::invalid(0, InvalidReason::NegativeWire(-1)));
    }

    #[test]
    fn test_unknown_gate_policy() {
        let ops = vec![
            WireOp::new("Hadamard", vec![0], None),
            WireOp::new("Toffoli", vec![0, 1, 2], None),
            WireOp::new("PauliZ", vec![0], None),
        ];

        let err = to_circuit(&ops, UnknownGatePolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            SimError::UnknownGate { name: "Toffoli".into(), position: 1 }
        );

        let circuit = to_circuit(&ops, UnknownGatePolicy::Ignore).unwrap();
        assert_eq!(
            circuit.ops(),
            &[GateOp::Hadamard { wire: 0 }, GateOp::PauliZ { wire: 0 }]
        );
    }

    #[test]
    fn test_parse_app_json() {
        let ops = parse_circuit(
            r#"[
                {"gate": "Hadamard", "wires": [0]},
                {"gate": "CNOT", "wires": [0, 1]},
                {"gate": "RZ", "wires": [1], "angle": 1.57}
            ]"#,
        )
        .unwrap();

        assert_eq!(ops.len(), 3);
        assert_eq!(ops[2].angle, Some(1.57));
        assert!(matches!(parse_circuit("{not json"), Err(SimError::Parse(_))));
    }

    #[test]
    fn test_gate_op_to_wire_op() {
        let wire = WireOp::from(&GateOp::Rx { wire: 2, angle: 0.25 });
        assert_eq!(wire, WireOp::new("RX", vec![2], Some(0.25)));
        assert_eq!(wire.to_gate_op(0).unwrap(), GateOp::Rx { wire: 2, angle: 0.25 });
    }

    #[test]
    fn test_circuit_file() {
        let file = CircuitFile::from_json(
            r#"{"wires": 2, "ops": [{"gate": "PauliX", "wires": [1]}]}"#,
        )
        .unwrap();
        assert_eq!(file.wires, 2);
        assert_eq!(file.name, None);
        assert_eq!(file.ops[0].gate, "PauliX");
    }
}
