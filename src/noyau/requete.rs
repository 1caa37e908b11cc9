//! Requête complète : saisie -> coefficients -> validation -> analyse -> réponse.
//!
//! Deux modes de saisie :
//! - trois champs (a, b, c) lus comme décimaux finis (champ vide refusé)
//! - texte libre, passé à l’extraction
//!
//! a = 0 est refusé AVANT l’analyse. En cas d’échec, aucun résultat partiel.
//!
//! La charge utile JSON porte aussi l’image du graphe (`grafik`, PNG en base64)
//! quand le rendu est disponible (natif).

use log::{info, warn};
use serde::Serialize;

use super::analyse::{analyser, Analyse, Derivations, Racines};
use super::coeffs::{Coefficients, ModeAxe};
use super::erreur::ErreurNoyau;
use super::extraction::{extraire, Extraction};
use super::reglages::Reglages;
use super::trace::DonneesTrace;

#[derive(Clone, Debug, PartialEq)]
pub enum Saisie {
    Coefficients { a: String, b: String, c: String },
    TexteLibre(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Requete {
    pub saisie: Saisie,
    pub mode: ModeAxe,
}

#[derive(Clone, Debug)]
pub struct Reponse {
    pub analyse: Analyse,
    /// Présente seulement en saisie texte libre (démarche de lecture).
    pub extraction: Option<Extraction>,
}

pub fn calculer(requete: &Requete, reglages: &Reglages) -> Result<Reponse, ErreurNoyau> {
    let (coeffs, extraction) = match &requete.saisie {
        Saisie::TexteLibre(texte) => {
            if texte.trim().is_empty() {
                return Err(ErreurNoyau::EntreeVide);
            }
            let e = extraire(texte)?;
            (e.coeffs, Some(e))
        }
        Saisie::Coefficients { a, b, c } => {
            let coeffs = Coefficients::new(
                lire_champ("a", a)?,
                lire_champ("b", b)?,
                lire_champ("c", c)?,
            );
            (coeffs, None)
        }
    };

    if !coeffs.est_quadratique() {
        warn!("requête refusée : a = 0 ({coeffs:?})");
        return Err(ErreurNoyau::CoefficientInvalide);
    }

    let analyse = analyser(&coeffs, requete.mode, reglages);
    info!(
        "requête: {} (D = {}, {:?})",
        analyse.equation, analyse.discriminant, analyse.racines
    );

    Ok(Reponse {
        analyse,
        extraction,
    })
}

/// Décimal fini, espaces autour tolérés. Un champ vide est invalide.
fn lire_champ(nom: &'static str, valeur: &str) -> Result<f64, ErreurNoyau> {
    let v = valeur.trim();
    match v.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(ErreurNoyau::Champ {
            nom,
            valeur: v.to_string(),
        }),
    }
}

/* ------------------------ Charge utile (JSON) ------------------------ */

#[derive(Serialize)]
struct ChargeUtile<'a> {
    success: bool,
    mode: ModeAxe,
    equation: &'a str,
    ouverture: &'static str,
    sommet: String,
    axe_symetrie: String,
    intercept: String,
    racines: String,
    valeurs_racines: &'a Racines,
    discriminant: f64,
    derivations: &'a Derivations,
    trace: &'a DonneesTrace,
    #[serde(skip_serializing_if = "Option::is_none")]
    grafik: Option<String>,
}

impl Reponse {
    pub fn vers_json(&self) -> Result<String, ErreurNoyau> {
        let a = &self.analyse;
        let charge = ChargeUtile {
            success: true,
            mode: a.mode,
            equation: &a.equation,
            ouverture: a.ouverture.libelle(),
            sommet: a.texte_sommet(),
            axe_symetrie: a.texte_axe(),
            intercept: a.texte_intercept(),
            racines: a.texte_racines(),
            valeurs_racines: &a.racines,
            discriminant: a.discriminant_arrondi(),
            derivations: &a.derivations,
            trace: &a.trace,
            grafik: grafik(a)?,
        };
        serde_json::to_string(&charge).map_err(|e| ErreurNoyau::Serialisation(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn grafik(a: &Analyse) -> Result<Option<String>, ErreurNoyau> {
    super::rendu::grafik_base64(a).map(Some)
}

#[cfg(target_arch = "wasm32")]
fn grafik(_: &Analyse) -> Result<Option<String>, ErreurNoyau> {
    Ok(None)
}

/// Échec : `{"success": false, "error": "<message>"}`.
pub fn echec_json(err: &ErreurNoyau) -> String {
    serde_json::json!({
        "success": false,
        "error": err.to_string(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texte(s: &str, mode: ModeAxe) -> Requete {
        Requete {
            saisie: Saisie::TexteLibre(s.to_string()),
            mode,
        }
    }

    fn champs(a: &str, b: &str, c: &str) -> Requete {
        Requete {
            saisie: Saisie::Coefficients {
                a: a.to_string(),
                b: b.to_string(),
                c: c.to_string(),
            },
            mode: ModeAxe::Y,
        }
    }

    #[test]
    fn texte_libre_complet() {
        let requete = texte("f(x) = x² - 2x - 3", ModeAxe::Y);
        let rep = calculer(&requete, &Reglages::default()).unwrap();
        assert_eq!(rep.analyse.equation, "y = x² - 2x - 3");
        assert_eq!(rep.analyse.racines, Racines::Deux(3.0, -1.0));
        assert!(rep.extraction.is_some());
    }

    #[test]
    fn champs_structures() {
        let rep = calculer(&champs("1", " 0 ", "-2.5"), &Reglages::default()).unwrap();
        assert_eq!(rep.analyse.coeffs, Coefficients::new(1.0, 0.0, -2.5));
        assert!(rep.extraction.is_none());
    }

    #[test]
    fn champ_vide_refuse() {
        let err = calculer(&champs("1", "", "0"), &Reglages::default()).unwrap_err();
        assert_eq!(
            err,
            ErreurNoyau::Champ {
                nom: "b",
                valeur: String::new()
            }
        );
        let err = calculer(&champs("1", "0", "   "), &Reglages::default()).unwrap_err();
        assert!(matches!(err, ErreurNoyau::Champ { nom: "c", .. }));
    }

    #[test]
    fn a_nul_refuse() {
        let err = calculer(&texte("2x + 1", ModeAxe::Y), &Reglages::default()).unwrap_err();
        assert_eq!(err, ErreurNoyau::CoefficientInvalide);
        let err = calculer(&champs("0", "1", "1"), &Reglages::default()).unwrap_err();
        assert_eq!(err, ErreurNoyau::CoefficientInvalide);
    }

    #[test]
    fn entree_vide_et_champ_invalide() {
        let err = calculer(&texte("   ", ModeAxe::Y), &Reglages::default()).unwrap_err();
        assert_eq!(err, ErreurNoyau::EntreeVide);

        let err = calculer(&champs("deux", "1", "1"), &Reglages::default()).unwrap_err();
        assert!(matches!(err, ErreurNoyau::Champ { nom: "a", .. }));

        let err = calculer(&champs("inf", "1", "1"), &Reglages::default()).unwrap_err();
        assert!(matches!(err, ErreurNoyau::Champ { nom: "a", .. }));
    }

    #[test]
    fn reglages_transmis() {
        let mut r = Reglages::default();
        r.set_points(50);
        let rep = calculer(&champs("1", "0", "1"), &r).unwrap();
        assert_eq!(rep.analyse.trace.courbe.len(), 50);
    }

    #[test]
    fn json_succes() {
        let rep = calculer(&texte("x^2 - 2x - 3", ModeAxe::Y), &Reglages::default()).unwrap();
        let json = rep.vers_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["mode"], "Y");
        assert_eq!(v["equation"], "y = x² - 2x - 3");
        assert_eq!(v["ouverture"], "vers le haut");
        assert_eq!(v["sommet"], "(1.00, -4.00)");
        assert_eq!(v["axe_symetrie"], "x = 1.00");
        assert_eq!(v["discriminant"], 16.0);
        assert_eq!(v["trace"]["courbe"].as_array().map(Vec::len), Some(500));
    }

    #[test]
    fn json_porte_le_graphe_png() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        let rep = calculer(&texte("x^2 + 1", ModeAxe::X), &Reglages::default()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&rep.vers_json().unwrap()).unwrap();
        let grafik = v["grafik"].as_str().unwrap();
        let png = STANDARD.decode(grafik).unwrap();
        assert!(!png.is_empty());
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn json_echec() {
        let v: serde_json::Value =
            serde_json::from_str(&echec_json(&ErreurNoyau::CoefficientInvalide)).unwrap();
        assert_eq!(v["success"], false);
        assert!(v["error"].as_str().unwrap().contains("second degré"));
    }
}
