//! Property-based tests for qlite-sim using proptest
//!
//! Invariantes que devem valer para qualquer circuito válido.

use proptest::prelude::*;
use qlite_sim::{
    Circuit, Device, GateOp, InvalidReason, MAX_WIRES, MIN_WIRES, SimError, StateVector,
};

const EPS: f64 = 1e-9;

/// Gera uma operação válida para `wires` qubits
fn gate_op(wires: usize) -> impl Strategy<Value = GateOp> {
    let wire = 0..wires;
    let angle = -10.0f64..10.0;
    let single = prop_oneof![
        wire.clone().prop_map(|wire| GateOp::Hadamard { wire }),
        wire.clone().prop_map(|wire| GateOp::PauliX { wire }),
        wire.clone().prop_map(|wire| GateOp::PauliZ { wire }),
        (wire.clone(), angle.clone()).prop_map(|(wire, angle)| GateOp::Rx { wire, angle }),
        (wire.clone(), angle.clone()).prop_map(|(wire, angle)| GateOp::Ry { wire, angle }),
        (wire.clone(), angle).prop_map(|(wire, angle)| GateOp::Rz { wire, angle }),
    ];

    if wires < 2 {
        return single.boxed();
    }

    let cnot = (0..wires, 1..wires).prop_map(move |(control, offset)| GateOp::Cnot {
        control,
        target: (control + offset) % wires,
    });
    prop_oneof![4 => single, 1 => cnot].boxed()
}

/// Gera (wires, circuito)
fn circuit() -> impl Strategy<Value = (usize, Vec<GateOp>)> {
    (MIN_WIRES..=MAX_WIRES).prop_flat_map(|wires| {
        (Just(wires), prop::collection::vec(gate_op(wires), 0..40))
    })
}

proptest! {
    /// Property: Σp = 1 após qualquer circuito
    #[test]
    fn probabilities_sum_to_one((wires, ops) in circuit()) {
        let mut dev = Device::new(wires).unwrap();
        let probs = dev.run(&ops).unwrap();

        prop_assert_eq!(probs.len(), 1 << wires);
        prop_assert!(
            (probs.total() - 1.0).abs() < EPS,
            "total probability {} != 1",
            probs.total()
        );
        prop_assert!(probs.iter().all(|p| *p >= 0.0));
    }

    /// Property: RX(θ)·RX(-θ) restaura as probabilidades
    #[test]
    fn rx_roundtrip((wires, ops) in circuit(), theta in -10.0f64..10.0, pick in 0usize..MAX_WIRES) {
        let wire = pick % wires;
        let mut dev = Device::new(wires).unwrap();
        let before = dev.run(&ops).unwrap();

        let mut circuit = Circuit::from(ops);
        circuit.rx(wire, theta).rx(wire, -theta);
        let after = dev.run(&circuit).unwrap();

        prop_assert!(after.approx_eq(before.as_slice(), EPS));
    }

    /// Property: RZ nunca altera probabilidades
    #[test]
    fn rz_preserves_probabilities((wires, ops) in circuit(), theta in -10.0f64..10.0, pick in 0usize..MAX_WIRES) {
        let wire = pick % wires;
        let mut dev = Device::new(wires).unwrap();
        let before = dev.run(&ops).unwrap();

        let mut circuit = Circuit::from(ops);
        circuit.rz(wire, theta);
        let after = dev.run(&circuit).unwrap();

        prop_assert!(after.approx_eq(before.as_slice(), EPS));
    }

    /// Property: CNOT é uma permutação (mesmo multiconjunto de módulos)
    #[test]
    fn cnot_is_permutation((wires, ops) in circuit(), control in 0usize..MAX_WIRES, offset in 1usize..MAX_WIRES) {
        prop_assume!(wires >= 2);
        let control = control % wires;
        let target = (control + 1 + offset % (wires - 1)) % wires;

        let dev = Device::new(wires).unwrap();
        let mut state = dev.evolve(&ops).unwrap();
        let mut before: Vec<f64> = state.amplitudes().iter().map(|a| a.norm_sq()).collect();

        state.apply_cnot(control, target).unwrap();
        let mut after: Vec<f64> = state.amplitudes().iter().map(|a| a.norm_sq()).collect();

        before.sort_by(f64::total_cmp);
        after.sort_by(f64::total_cmp);
        prop_assert_eq!(before, after);
    }

    /// Property: qualquer wire >= wires é rejeitado antes de mutar o estado
    #[test]
    fn out_of_range_wire_rejected(wires in MIN_WIRES..=MAX_WIRES, extra in 0usize..10, prefix in 0usize..5) {
        let bad = wires + extra;
        let mut ops: Vec<GateOp> = (0..prefix).map(|_| GateOp::Hadamard { wire: 0 }).collect();
        ops.push(GateOp::PauliX { wire: bad });

        let mut dev = Device::new(wires).unwrap();
        let err = dev.run(&ops).unwrap_err();

        prop_assert_eq!(
            err,
            SimError::invalid(prefix, InvalidReason::WireOutOfRange { wire: bad, wires })
        );
        prop_assert_eq!(dev.run_count(), 0);
    }
}

#[test]
fn fresh_state_for_every_wire_count() {
    for wires in MIN_WIRES..=MAX_WIRES {
        let state = StateVector::new(wires).unwrap();
        assert_eq!(state.dim(), 1 << wires);
        assert_eq!(state.amplitudes()[0].re, 1.0);
        assert_eq!(state.amplitudes()[0].im, 0.0);
        assert!(state.amplitudes().iter().skip(1).all(|a| a.re == 0.0 && a.im == 0.0));
    }
}
