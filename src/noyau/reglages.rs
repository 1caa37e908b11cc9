// src/noyau/reglages.rs
//
// Réglages du tracé (échantillonnage + fenêtre).
// Bornés comme la précision de la calculatrice : anti-abus / anti-gel.

/// Nombre d’échantillons par défaut.
const POINTS_DEFAUT: usize = 500;

/// Garde-fous : au moins deux points (segment), pas plus de 5000.
const POINTS_MIN: usize = 2;
const POINTS_MAX: usize = 5000;

/// Marge autour du sommet et des racines réelles.
const MARGE_RACINES_DEFAUT: f64 = 3.0;

/// Demi-largeur autour du sommet quand il n’y a pas de racine réelle.
const DEMI_FENETRE_DEFAUT: f64 = 5.0;

const MARGE_MAX: f64 = 1.0e6;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    points: usize,
    marge_racines: f64,
    demi_fenetre: f64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            points: POINTS_DEFAUT,
            marge_racines: MARGE_RACINES_DEFAUT,
            demi_fenetre: DEMI_FENETRE_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn points(&self) -> usize {
        self.points
    }

    pub fn marge_racines(&self) -> f64 {
        self.marge_racines
    }

    pub fn demi_fenetre(&self) -> f64 {
        self.demi_fenetre
    }

    pub fn set_points(&mut self, points: usize) {
        self.points = points.clamp(POINTS_MIN, POINTS_MAX);
    }

    /// Marges strictement positives ; une valeur non finie garde l’ancienne.
    pub fn set_marges(&mut self, marge_racines: f64, demi_fenetre: f64) {
        if marge_racines.is_finite() {
            self.marge_racines = marge_racines.clamp(f64::EPSILON, MARGE_MAX);
        }
        if demi_fenetre.is_finite() {
            self.demi_fenetre = demi_fenetre.clamp(f64::EPSILON, MARGE_MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reglages;

    #[test]
    fn bornes_points() {
        let mut r = Reglages::default();
        assert_eq!(r.points(), 500);
        r.set_points(0);
        assert_eq!(r.points(), 2);
        r.set_points(1_000_000);
        assert_eq!(r.points(), 5000);
    }

    #[test]
    fn marges_non_finies_ignorees() {
        let mut r = Reglages::default();
        r.set_marges(f64::NAN, -1.0);
        assert_eq!(r.marge_racines(), 3.0);
        assert!(r.demi_fenetre() > 0.0);
    }
}
