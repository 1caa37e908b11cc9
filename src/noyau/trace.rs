// src/noyau/trace.rs
//
// Données du graphe. Le dessin est fait ailleurs : vue egui (app/graphe.rs)
// et image PNG de la charge utile (rendu.rs).

use serde::Serialize;

use super::coeffs::{Coefficients, ModeAxe};
use super::reglages::Reglages;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Couple (libre, liée) placé dans le plan selon le mode.
    pub fn dans_plan(mode: ModeAxe, libre: f64, liee: f64) -> Self {
        let (x, y) = mode.dans_plan(libre, liee);
        Self { x, y }
    }
}

/// Tout ce qu’il faut pour dessiner : courbe échantillonnée + repères.
#[derive(Clone, Debug, Serialize)]
pub struct DonneesTrace {
    pub mode: ModeAxe,
    pub courbe: Vec<Point>,
    pub sommet: Point,
    pub intercept: Point,
    pub racines: Vec<Point>,
    /// Droite de symétrie : x = axe (mode Y) ou y = axe (mode X).
    pub axe: f64,
}

/// Boîte englobante (plan) de tout ce qui est dessiné, avec 5% d’air.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bornes {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DonneesTrace {
    /// `None` si aucun point fini.
    pub fn bornes(&self) -> Option<Bornes> {
        let mut pts = self
            .courbe
            .iter()
            .chain([&self.sommet, &self.intercept])
            .chain(self.racines.iter())
            .filter(|p| p.x.is_finite() && p.y.is_finite());

        let p0 = pts.next()?;
        let mut b = Bornes {
            x_min: p0.x,
            x_max: p0.x,
            y_min: p0.y,
            y_max: p0.y,
        };
        for p in pts {
            b.x_min = b.x_min.min(p.x);
            b.x_max = b.x_max.max(p.x);
            b.y_min = b.y_min.min(p.y);
            b.y_max = b.y_max.max(p.y);
        }

        // étendue nulle (ex: toutes les valeurs égales) -> fenêtre unité
        if b.x_max - b.x_min <= f64::EPSILON {
            b.x_min -= 1.0;
            b.x_max += 1.0;
        }
        if b.y_max - b.y_min <= f64::EPSILON {
            b.y_min -= 1.0;
            b.y_max += 1.0;
        }

        let dx = (b.x_max - b.x_min) * 0.05;
        let dy = (b.y_max - b.y_min) * 0.05;
        b.x_min -= dx;
        b.x_max += dx;
        b.y_min -= dy;
        b.y_max += dy;
        Some(b)
    }
}

/// Intervalle de la variable libre.
/// - avec racines : [min(sommet, racines) - marge, max(...) + marge]
/// - sans racine  : sommet ± demi-fenêtre
pub fn fenetre(sommet: f64, racines: &[f64], reglages: &Reglages) -> (f64, f64) {
    if racines.is_empty() {
        let d = reglages.demi_fenetre();
        return (sommet - d, sommet + d);
    }

    let (min, max) = racines
        .iter()
        .fold((sommet, sommet), |(lo, hi), &r| (lo.min(r), hi.max(r)));
    let m = reglages.marge_racines();
    (min - m, max + m)
}

/// `n` valeurs régulièrement espacées, bornes incluses (n ≥ 2).
pub fn linspace(debut: f64, fin: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![debut];
    }
    let pas = (fin - debut) / (n - 1) as f64;
    let mut out: Vec<f64> = (0..n).map(|i| debut + i as f64 * pas).collect();
    // borne finale exacte (pas d’accumulation d’arrondi)
    out[n - 1] = fin;
    out
}

/// Courbe échantillonnée dans le plan (x, y).
pub fn echantillonner(
    coeffs: &Coefficients,
    mode: ModeAxe,
    sommet: f64,
    racines: &[f64],
    reglages: &Reglages,
) -> Vec<Point> {
    let (debut, fin) = fenetre(sommet, racines, reglages);
    linspace(debut, fin, reglages.points())
        .into_iter()
        .map(|v| Point::dans_plan(mode, v, coeffs.evaluer(v)))
        .collect()
}
