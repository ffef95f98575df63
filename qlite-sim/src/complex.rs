//! Aritmética complexa mínima para amplitudes
//!
//! Tipo valor `Copy`, sem alocação. As operações são funções puras e totais.

use serde::{Deserialize, Serialize};

/// Número complexo (re, im) em f64
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Cria número complexo
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Zero complexo
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Um complexo
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Unidade imaginária
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Real puro
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Exponencial complexa: e^(i*theta)
    pub fn phase(theta: f64) -> Self {
        Self {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    /// Adição
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Multiplicação
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Multiplicação por escalar
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// Conjugado
    pub fn conj(self) -> Self {
        Self { re: self.re, im: -self.im }
    }

    /// Módulo ao quadrado
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Verifica igualdade aproximada
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.re - other.re).abs() < epsilon && (self.im - other.im).abs() < epsilon
    }
}

/// Soma componente a componente
pub fn add(a: Complex, b: Complex) -> Complex {
    a.add(b)
}

/// Produto complexo
pub fn multiply(a: Complex, b: Complex) -> Complex {
    a.mul(b)
}

/// e^(iθ)
pub fn phase(theta: f64) -> Complex {
    Complex::phase(theta)
}

impl From<num_complex::Complex64> for Complex {
    fn from(c: num_complex::Complex64) -> Self {
        Self::new(c.re, c.im)
    }
}

impl From<Complex> for num_complex::Complex64 {
    fn from(c: Complex) -> Self {
        num_complex::Complex64::new(c.re, c.im)
    }
}
