//! # Gate Benchmarks
//!
//! Measures single-qubit gate application and CNOT permutation on the state vector.
//! Both are O(2^n) with n ≤ 7.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qlite_sim::{Hadamard, MAX_WIRES, MIN_WIRES, QuantumGate, RotationX, StateVector};

/// Benchmark construção do estado |0…0⟩
fn bench_state_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_creation");

    for wires in MIN_WIRES..=MAX_WIRES {
        group.bench_with_input(BenchmarkId::new("new", wires), &wires, |b, &w| {
            b.iter(|| black_box(StateVector::new(w)))
        });
    }

    group.finish();
}

/// Benchmark gates single-qubit no wire mais alto
fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit");
    let hadamard = Hadamard.matrix();
    let rx = RotationX::new(0.7).matrix();

    for wires in [1, 4, MAX_WIRES] {
        let mut state = StateVector::new(wires).expect("valid wire count");
        let target = wires - 1;

        group.bench_function(BenchmarkId::new("hadamard", wires), |b| {
            b.iter(|| black_box(state.apply_single_qubit_gate(target, &hadamard)))
        });

        group.bench_function(BenchmarkId::new("rx", wires), |b| {
            b.iter(|| black_box(state.apply_single_qubit_gate(target, &rx)))
        });
    }

    group.finish();
}

/// Benchmark CNOT (permutação)
fn bench_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot");

    for wires in [2, 4, MAX_WIRES] {
        let mut state = StateVector::new(wires).expect("valid wire count");
        state
            .apply_single_qubit_gate(0, &Hadamard.matrix())
            .expect("wire 0 exists");

        group.bench_function(BenchmarkId::new("control0_targetN", wires), |b| {
            b.iter(|| black_box(state.apply_cnot(0, wires - 1)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_state_creation, bench_single_qubit, bench_cnot);

criterion_main!(benches);
