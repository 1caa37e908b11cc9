//! Tests de propriétés (quickcheck) : lois qui doivent tenir pour toute entrée.
//!
//! - aller-retour : extraire(format_equation(a, b, c)) == (a, b, c)
//! - le discriminant rapporté est celui qui décide du nombre de racines
//! - l’extraction ne panique jamais, et n’échoue que sur un lexème illisible

use quickcheck::{QuickCheck, TestResult};

use super::analyse::{analyser, Racines};
use super::coeffs::{Coefficients, ModeAxe};
use super::erreur::ErreurNoyau;
use super::extraction::extraire;
use super::format::format_equation;
use super::reglages::Reglages;

/// Peu de points : seule la logique des racines nous intéresse ici.
fn reglages_legers() -> Reglages {
    let mut r = Reglages::default();
    r.set_points(2);
    r
}

#[test]
fn prop_aller_retour_format_extraction() {
    fn prop(a: f64, b: f64, c: f64) -> TestResult {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) || a == 0.0 {
            return TestResult::discard();
        }
        let coeffs = Coefficients::new(a, b, c);
        let texte = format_equation(&coeffs, ModeAxe::Y);
        match extraire(&texte) {
            Ok(lu) => TestResult::from_bool(lu.coeffs == coeffs),
            Err(e) => TestResult::error(format!("{texte:?}: {e}")),
        }
    }
    QuickCheck::new()
        .tests(1000)
        .max_tests(5000)
        .quickcheck(prop as fn(f64, f64, f64) -> TestResult);
}

#[test]
fn prop_aller_retour_entiers() {
    // coefficients "scolaires" : petits entiers et demis
    fn prop(a: i16, b: i16, c: i16) -> TestResult {
        if a == 0 {
            return TestResult::discard();
        }
        let coeffs = Coefficients::new(f64::from(a) / 2.0, f64::from(b), f64::from(c) / 2.0);
        let texte = format_equation(&coeffs, ModeAxe::Y);
        TestResult::from_bool(extraire(&texte).map(|e| e.coeffs) == Ok(coeffs))
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(i16, i16, i16) -> TestResult);
}

#[test]
fn prop_discriminant_decide_des_racines() {
    fn prop(a: f64, b: f64, c: f64) -> TestResult {
        let coeffs = Coefficients::new(a, b, c);
        if !(a.is_finite() && b.is_finite() && c.is_finite())
            || a == 0.0
            || !coeffs.discriminant().is_finite()
        {
            return TestResult::discard();
        }
        let r = analyser(&coeffs, ModeAxe::Y, &reglages_legers());
        let d = r.discriminant;
        let ok = d == coeffs.discriminant()
            && match r.racines {
                Racines::Deux(..) => d > 0.0,
                Racines::Double(_) => d == 0.0,
                Racines::Aucune => d < 0.0,
            };
        TestResult::from_bool(ok)
    }
    QuickCheck::new()
        .tests(1000)
        .max_tests(5000)
        .quickcheck(prop as fn(f64, f64, f64) -> TestResult);
}

#[test]
fn prop_extraction_tolerante() {
    fn prop(texte: String) -> TestResult {
        match extraire(&texte) {
            Ok(_) | Err(ErreurNoyau::Lecture { .. }) => TestResult::passed(),
            Err(e) => TestResult::error(format!("erreur inattendue: {e}")),
        }
    }
    QuickCheck::new()
        .tests(2000)
        .quickcheck(prop as fn(String) -> TestResult);
}

#[test]
fn prop_extraction_tolerante_alphabet_reduit() {
    // chaînes faites seulement des symboles utiles : beaucoup plus de matchs partiels
    fn prop(octets: Vec<u8>) -> TestResult {
        const ALPHABET: &[u8] = b"0123456789.+-x^()2 ";
        let texte: String = octets
            .iter()
            .map(|o| ALPHABET[usize::from(*o) % ALPHABET.len()] as char)
            .collect();
        match extraire(&texte) {
            Ok(_) | Err(ErreurNoyau::Lecture { .. }) => TestResult::passed(),
            Err(e) => TestResult::error(format!("{texte:?}: {e}")),
        }
    }
    QuickCheck::new()
        .tests(2000)
        .quickcheck(prop as fn(Vec<u8>) -> TestResult);
}
