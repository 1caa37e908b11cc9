// src/noyau/coeffs.rs

use serde::Serialize;

/// Triplet (a, b, c) de `a·v² + b·v + c`.
///
/// Valeur immuable : les champs sont lus via les accesseurs.
/// `a ≠ 0` n’est PAS garanti ici (contrôle fait par la requête).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub const fn a(&self) -> f64 {
        self.a
    }

    pub const fn b(&self) -> f64 {
        self.b
    }

    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Forme sommet `a(v - h)² + k` développée en forme standard.
    pub fn depuis_sommet(a: f64, h: f64, k: f64) -> Self {
        Self::new(a, -2.0 * a * h, a * h * h + k)
    }

    pub fn est_quadratique(&self) -> bool {
        self.a != 0.0
    }

    /// D = b² − 4ac
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Valeur du polynôme en `v`.
    pub fn evaluer(&self, v: f64) -> f64 {
        self.a * v * v + self.b * v + self.c
    }
}

/// Choix de la variable indépendante.
/// - `Y` : y = ax² + bx + c (parabole verticale)
/// - `X` : x = ay² + by + c (parabole couchée)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ModeAxe {
    #[default]
    Y,
    X,
}

impl ModeAxe {
    /// Variable libre (celle qui porte le carré).
    pub const fn libre(self) -> char {
        match self {
            ModeAxe::Y => 'x',
            ModeAxe::X => 'y',
        }
    }

    /// Variable calculée (à gauche du signe =).
    pub const fn liee(self) -> char {
        match self {
            ModeAxe::Y => 'y',
            ModeAxe::X => 'x',
        }
    }

    /// Place un couple (libre, liée) dans le plan (x, y).
    pub const fn dans_plan(self, libre: f64, liee: f64) -> (f64, f64) {
        match self {
            ModeAxe::Y => (libre, liee),
            ModeAxe::X => (liee, libre),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sommet_vers_standard() {
        // 2(x - 1)² + 3 = 2x² - 4x + 5
        let c = Coefficients::depuis_sommet(2.0, 1.0, 3.0);
        assert_eq!(c, Coefficients::new(2.0, -4.0, 5.0));
    }

    #[test]
    fn discriminant_et_evaluation() {
        let c = Coefficients::new(1.0, -2.0, -3.0);
        assert_eq!(c.discriminant(), 16.0);
        assert_eq!(c.evaluer(3.0), 0.0);
        assert_eq!(c.evaluer(0.0), -3.0);
    }

    #[test]
    fn mode_axe_echange_les_roles() {
        assert_eq!(ModeAxe::Y.dans_plan(1.0, 2.0), (1.0, 2.0));
        assert_eq!(ModeAxe::X.dans_plan(1.0, 2.0), (2.0, 1.0));
        assert_eq!(ModeAxe::X.libre(), 'y');
        assert_eq!(ModeAxe::X.liee(), 'x');
    }
}
