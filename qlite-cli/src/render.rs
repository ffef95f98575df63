//! Formatação da saída em texto

use qlite_sim::Probabilities;

/// Rótulo do estado de base: wire mais alto à esquerda, wire 0 à direita
pub fn ket(index: usize, wires: usize) -> String {
    let bits: String = (0..wires)
        .rev()
        .map(|wire| if index >> wire & 1 == 1 { '1' } else { '0' })
        .collect();
    format!("|{}⟩", bits)
}

/// Uma linha por estado de base: `|bits⟩  probabilidade`
pub fn table(probs: &Probabilities, wires: usize) -> String {
    probs
        .iter()
        .enumerate()
        .map(|(index, p)| format!("{}  {:.6}\n", ket(index, wires), p))
        .collect()
}
