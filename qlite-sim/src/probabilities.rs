//! Vetor de probabilidades de medição (snapshot somente leitura)

use serde::{Deserialize, Serialize};

/// Probabilidade de cada índice de base, na ordem dos índices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probabilities(Vec<f64>);

impl Probabilities {
    /// Número de entradas (2^wires)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Probabilidade de um índice de base
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Soma de todas as entradas
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Índice mais provável (o primeiro vence em empate)
    pub fn most_likely(&self) -> Option<(usize, f64)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
    }

    /// Probabilidade de o wire ler 1
    pub fn marginal(&self, wire: usize) -> f64 {
        if wire >= usize::BITS as usize {
            return 0.0;
        }
        let mask = 1 << wire;
        self.0
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, p)| p)
            .sum()
    }

    /// Compara entrada a entrada dentro de epsilon
    pub fn approx_eq(&self, expected: &[f64], epsilon: f64) -> bool {
        self.0.len() == expected.len()
            && self
                .0
                .iter()
                .zip(expected)
                .all(|(p, e)| (p - e).abs() <= epsilon)
    }
}

impl FromIterator<f64> for Probabilities {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<f64>> for Probabilities {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<'a> IntoIterator for &'a Probabilities {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
