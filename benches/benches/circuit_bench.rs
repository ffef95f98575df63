//! # Circuit Benchmarks
//!
//! Measures full `Device::run` executions: validation, evolution and probability extraction.
//!
//! Run: `cargo bench --bench circuit_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qlite_sim::{Circuit, Device, MAX_WIRES, WireOp};

/// Camadas de H + RY + cadeia de CNOT
fn layered(wires: usize, layers: usize) -> Circuit {
    let mut circuit = Circuit::new();
    for layer in 0..layers {
        for wire in 0..wires {
            circuit.h(wire).ry(wire, 0.1 * (layer + wire) as f64);
        }
        for wire in 1..wires {
            circuit.cnot(wire - 1, wire);
        }
    }
    circuit
}

/// Benchmark circuitos em camadas
fn bench_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_circuit");

    for wires in [2, 4, MAX_WIRES] {
        let circuit = layered(wires, 8);
        let mut device = Device::new(wires).expect("valid wire count");

        group.bench_with_input(BenchmarkId::new("run", wires), &circuit, |b, circuit| {
            b.iter(|| black_box(device.run(circuit)))
        });
    }

    group.finish();
}

/// Benchmark do formato do app (conversão + execução)
fn bench_wire_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire_format");

    let ops: Vec<WireOp> = layered(MAX_WIRES, 4).ops().iter().map(WireOp::from).collect();
    let mut device = Device::new(MAX_WIRES).expect("valid wire count");

    group.bench_function("run_wire", |b| b.iter(|| black_box(device.run_wire(&ops))));

    group.finish();
}

criterion_group!(benches, bench_layered, bench_wire_format);

criterion_main!(benches);
