//! Analyse d’une fonction du second degré (formules fermées).
//!
//! Mode Y : y = ax² + bx + c. Mode X : x = ay² + by + c, mêmes formules avec
//! les rôles de x et y échangés. Chaque grandeur est accompagnée de sa
//! démarche (substitution des coefficients littéraux, résultats à 2 décimales).
//!
//! Précondition : a ≠ 0 (vérifié par la requête avant l’analyse).

use serde::Serialize;

use super::coeffs::{Coefficients, ModeAxe};
use super::format::{deux_decimales, format_equation, format_point};
use super::reglages::Reglages;
use super::trace::{echantillonner, DonneesTrace, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Ouverture {
    Haut,
    Bas,
    Droite,
    Gauche,
}

impl Ouverture {
    fn depuis(a: f64, mode: ModeAxe) -> Self {
        match (mode, a > 0.0) {
            (ModeAxe::Y, true) => Ouverture::Haut,
            (ModeAxe::Y, false) => Ouverture::Bas,
            (ModeAxe::X, true) => Ouverture::Droite,
            (ModeAxe::X, false) => Ouverture::Gauche,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Ouverture::Haut => "vers le haut",
            Ouverture::Bas => "vers le bas",
            Ouverture::Droite => "vers la droite",
            Ouverture::Gauche => "vers la gauche",
        }
    }
}

/// Racines réelles (valeurs de la variable libre).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Racines {
    Aucune,
    Double(f64),
    /// (-b + √D)/(2a) puis (-b - √D)/(2a)
    Deux(f64, f64),
}

impl Racines {
    pub fn valeurs(&self) -> Vec<f64> {
        match *self {
            Racines::Aucune => Vec::new(),
            Racines::Double(r) => vec![r],
            Racines::Deux(r1, r2) => vec![r1, r2],
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Derivations {
    /// coordonnée libre du sommet (-b/2a)
    pub sommet_libre: String,
    /// coordonnée liée du sommet (substitution)
    pub sommet_liee: String,
    pub intercept: String,
    pub discriminant: String,
    pub racines: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Analyse {
    pub coeffs: Coefficients,
    pub mode: ModeAxe,
    pub equation: String,
    pub ouverture: Ouverture,
    pub sommet: Point,
    /// Valeur de la droite de symétrie (x = axe en mode Y, y = axe en mode X).
    pub axe: f64,
    pub intercept: Point,
    pub discriminant: f64,
    pub racines: Racines,
    pub derivations: Derivations,
    pub trace: DonneesTrace,
}

/// `reglages` ne touche que l’échantillonnage du graphe.
pub fn analyser(coeffs: &Coefficients, mode: ModeAxe, reglages: &Reglages) -> Analyse {
    debug_assert!(coeffs.est_quadratique(), "analyse appelée avec a = 0");

    let (a, b, c) = (coeffs.a(), coeffs.b(), coeffs.c());
    let u = mode.libre();
    let w = mode.liee();

    // Sommet
    let s_libre = -b / (2.0 * a);
    let s_liee = coeffs.evaluer(s_libre);
    let sommet = Point::dans_plan(mode, s_libre, s_liee);

    // Intercept : la variable libre vaut 0
    let intercept = Point::dans_plan(mode, 0.0, c);

    // Discriminant : une seule valeur, rapportée ET utilisée pour brancher.
    let d = coeffs.discriminant();
    let racines = if d > 0.0 {
        let rd = d.sqrt();
        Racines::Deux((-b + rd) / (2.0 * a), (-b - rd) / (2.0 * a))
    } else if d == 0.0 {
        Racines::Double(-b / (2.0 * a))
    } else {
        Racines::Aucune
    };

    let derivations = Derivations {
        sommet_libre: format!(
            "{u}ₚ = -b/(2a) = -({b})/(2×{a}) = {}",
            deux_decimales(s_libre)
        ),
        sommet_liee: format!(
            "{w}ₚ = a({u}ₚ)² + b({u}ₚ) + c = {a}({s})² + {b}({s}) + {c} = {}",
            deux_decimales(s_liee),
            s = deux_decimales(s_libre),
        ),
        intercept: format!(
            "Substitution {u} = 0 → {w} = {a}(0)² + {b}(0) + {c} = {}",
            deux_decimales(c)
        ),
        discriminant: format!(
            "D = b² - 4ac = ({b})² - 4({a})({c}) = {}",
            deux_decimales(d)
        ),
        racines: derivation_racines(coeffs, mode, d, &racines),
    };

    let valeurs = racines.valeurs();
    let trace = DonneesTrace {
        mode,
        courbe: echantillonner(coeffs, mode, s_libre, &valeurs, reglages),
        sommet,
        intercept,
        racines: valeurs
            .iter()
            .map(|&r| Point::dans_plan(mode, r, 0.0))
            .collect(),
        axe: s_libre,
    };

    Analyse {
        coeffs: *coeffs,
        mode,
        equation: format_equation(coeffs, mode),
        ouverture: Ouverture::depuis(a, mode),
        sommet,
        axe: s_libre,
        intercept,
        discriminant: d,
        racines,
        derivations,
        trace,
    }
}

fn derivation_racines(coeffs: &Coefficients, mode: ModeAxe, d: f64, racines: &Racines) -> String {
    let (a, b) = (coeffs.a(), coeffs.b());
    let u = mode.libre();
    match *racines {
        Racines::Deux(r1, r2) => format!(
            "{u}₁,₂ = (-b ± √D)/(2a) = (-({b}) ± √{})/(2×{a})\n{u}₁ = {}, {u}₂ = {}",
            deux_decimales(d),
            deux_decimales(r1),
            deux_decimales(r2),
        ),
        Racines::Double(r) => format!("{u} = -b/(2a) = -({b})/(2×{a}) = {}", deux_decimales(r)),
        Racines::Aucune => format!(
            "D < 0, donc pas de racine réelle (la parabole ne coupe pas l’axe {})",
            u.to_ascii_uppercase()
        ),
    }
}

/* ------------------------ Textes affichés ------------------------ */

impl Analyse {
    pub fn texte_sommet(&self) -> String {
        format_point(self.sommet.x, self.sommet.y)
    }

    /// "x = 1.00" (mode Y) ou "y = 1.00" (mode X).
    pub fn texte_axe(&self) -> String {
        format!("{} = {}", self.mode.libre(), deux_decimales(self.axe))
    }

    pub fn texte_intercept(&self) -> String {
        format_point(self.intercept.x, self.intercept.y)
    }

    /// "(3.00, 0.00) et (-1.00, 0.00)" ou message si aucune racine réelle.
    pub fn texte_racines(&self) -> String {
        if self.trace.racines.is_empty() {
            return format!(
                "Ne coupe pas l’axe {}",
                self.mode.libre().to_ascii_uppercase()
            );
        }
        self.trace
            .racines
            .iter()
            .map(|p| format_point(p.x, p.y))
            .collect::<Vec<_>>()
            .join(" et ")
    }

    /// Discriminant arrondi à 2 décimales (charge utile).
    pub fn discriminant_arrondi(&self) -> f64 {
        (self.discriminant * 100.0).round() / 100.0
    }
}
