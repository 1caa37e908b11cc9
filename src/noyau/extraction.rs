//! Extraction des coefficients (a, b, c) depuis un texte libre.
//!
//! normalise -> jetons -> formes essayées dans l’ordre :
//! 1) forme sommet `a(x±h)^2±k` (avec k, n’importe où dans le texte)
//! 2) forme sommet sans k (doit terminer le texte)
//! 3) forme standard : trois extracteurs indépendants (x^2, x, constante)
//!
//! La première forme qui matche gagne. L’extraction est tolérante : un morceau
//! absent vaut 0 (ou 1 pour un coefficient implicite). Seul un lexème numérique
//! capturé mais illisible (ex: "-.") produit une erreur.

use log::debug;

use super::coeffs::Coefficients;
use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, tokenize, Tok};
use super::normalise::normaliser;

/// Forme reconnue (pour la démarche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forme {
    Sommet,
    Standard,
}

#[derive(Clone, Debug)]
pub struct Extraction {
    pub coeffs: Coefficients,
    pub forme: Forme,
    pub normalise: String,
    pub jetons: String,
}

/// Texte libre -> (a, b, c), avec le texte normalisé, les jetons et la forme
/// reconnue (pour la démarche).
pub fn extraire(texte: &str) -> Result<Extraction, ErreurNoyau> {
    let normalise = normaliser(texte);
    let jetons = tokenize(&normalise);
    let jetons_txt = format_tokens(&jetons);
    debug!("extraction: normalisé={normalise:?} jetons=[{jetons_txt}]");

    let (coeffs, forme) = match forme_sommet(&jetons)? {
        Some(c) => (c, Forme::Sommet),
        None => (forme_standard(&jetons)?, Forme::Standard),
    };
    debug!("extraction: forme {forme:?} -> {coeffs:?}");

    Ok(Extraction {
        coeffs,
        forme,
        normalise,
        jetons: jetons_txt,
    })
}

/* ------------------------ Forme sommet ------------------------ */

/// Morceaux bruts d’un match `coef ( x ±h ) ^ 2 [±k]`.
struct MatchSommet {
    coef: String,
    h: String,
    k: Option<String>,
}

/// `( x ±h ) ^ 2` à partir de `p` (position de la parenthèse ouvrante).
/// Renvoie h (avec son signe) et l’indice juste après le `2`.
fn noyau_sommet(t: &[Tok], p: usize) -> Option<(String, usize)> {
    match t.get(p..p + 7)? {
        [Tok::ParG, Tok::X, Tok::Signe(s), h, Tok::ParD, Tok::Chapeau, deux]
            if h.est_nombre_plein() && deux.est_deux() =>
        {
            Some((format!("{s}{h}"), p + 7))
        }
        _ => None,
    }
}

/// Terme constant après le carré : `[±]nombre` (chiffre en tête).
fn terme_k(t: &[Tok], i: usize) -> Option<String> {
    match (t.get(i), t.get(i + 1)) {
        (Some(Tok::Signe(s)), Some(n)) if n.est_nombre_plein() => Some(format!("{s}{n}")),
        (Some(n), _) if n.est_nombre_plein() => Some(n.to_string()),
        _ => None,
    }
}

fn chercher_sommet(t: &[Tok]) -> Option<MatchSommet> {
    let ouvrantes: Vec<usize> = (0..t.len()).filter(|&p| t[p] == Tok::ParG).collect();

    // 1) avec k, première occurrence
    for &p in &ouvrantes {
        if let Some((h, fin)) = noyau_sommet(t, p) {
            if let Some(k) = terme_k(t, fin) {
                return Some(MatchSommet {
                    coef: prefixe(t, p),
                    h,
                    k: Some(k),
                });
            }
        }
    }

    // 2) sans k : le carré termine l’expression
    ouvrantes.into_iter().find_map(|p| {
        let (h, fin) = noyau_sommet(t, p)?;
        (fin == t.len()).then(|| MatchSommet {
            coef: prefixe(t, p),
            h,
            k: None,
        })
    })
}

fn forme_sommet(t: &[Tok]) -> Result<Option<Coefficients>, ErreurNoyau> {
    let Some(m) = chercher_sommet(t) else {
        return Ok(None);
    };

    let a = lire_coef(&m.coef)?;
    let h = lire(&m.h)?;
    let k = match m.k.as_deref() {
        None | Some("") | Some("+") => 0.0,
        Some(s) => lire(s)?,
    };

    // (x + 1) s’écrit (x - (-1)) : le h de la forme canonique a(x - h)² + k
    // est l’opposé de celui écrit dans les parenthèses.
    Ok(Some(Coefficients::depuis_sommet(a, -h, k)))
}

/* ------------------------ Forme standard ------------------------ */

fn forme_standard(t: &[Tok]) -> Result<Coefficients, ErreurNoyau> {
    let est_carre = |i: usize| {
        t.get(i) == Some(&Tok::X)
            && t.get(i + 1) == Some(&Tok::Chapeau)
            && t.get(i + 2).is_some_and(Tok::est_deux)
    };

    // a : premier x^2
    let a = match (0..t.len()).find(|&i| est_carre(i)) {
        Some(i) => lire_coef(&prefixe(t, i))?,
        None => 0.0,
    };

    // b : premier x non suivi de ^
    let b = match (0..t.len()).find(|&i| t[i] == Tok::X && t.get(i + 1) != Some(&Tok::Chapeau)) {
        Some(i) => lire_coef(&prefixe(t, i))?,
        None => 0.0,
    };

    let c = match constante(t) {
        Some(s) => lire(&s)?,
        None => 0.0,
    };

    Ok(Coefficients::new(a, b, c))
}

/// Premier nombre signé qui n’est ni un exposant, ni le coefficient d’un x.
///
/// Le premier gagne, même si d’autres nombres isolés suivent (entrée mal formée).
fn constante(t: &[Tok]) -> Option<String> {
    t.iter().enumerate().find_map(|(i, tok)| {
        let Tok::Nombre(n) = tok else {
            return None;
        };
        if !n.contains(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let avant = i.checked_sub(1).and_then(|j| t.get(j));
        if avant == Some(&Tok::Chapeau) {
            return None;
        }
        if matches!(t.get(i + 1), Some(Tok::X | Tok::Chapeau)) {
            return None;
        }

        match avant {
            Some(Tok::Signe(s)) => Some(format!("{s}{n}")),
            _ => Some(n.clone()),
        }
    })
}

/* ------------------------ Lecture des nombres ------------------------ */

/// Coefficient collé juste avant `fin` : `[±][nombre]`, éventuellement vide.
fn prefixe(t: &[Tok], fin: usize) -> String {
    let mut debut = fin;
    if debut > 0 && t[debut - 1].est_nombre() {
        debut -= 1;
    }
    if debut > 0 && matches!(t[debut - 1], Tok::Signe(_)) {
        debut -= 1;
    }
    t[debut..fin].iter().map(Tok::to_string).collect()
}

/// "" ou "+" -> 1, "-" -> -1, sinon décimal.
fn lire_coef(s: &str) -> Result<f64, ErreurNoyau> {
    match s {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => lire(s),
    }
}

/// Décimal fini (un lexème de 400 chiffres donnerait +inf).
fn lire(s: &str) -> Result<f64, ErreurNoyau> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurNoyau::Lecture {
            jeton: s.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc(s: &str) -> (f64, f64, f64) {
        let c = extraire(s)
            .unwrap_or_else(|e| panic!("extraire({s:?}) erreur: {e}"))
            .coeffs;
        (c.a(), c.b(), c.c())
    }

    #[test]
    fn prefixes_equivalents() {
        assert_eq!(abc("y=2x^2-3x+5"), (2.0, -3.0, 5.0));
        assert_eq!(abc("2x^2-3x+5"), (2.0, -3.0, 5.0));
        assert_eq!(abc("f(x)=2x^2-3x+5"), (2.0, -3.0, 5.0));
    }

    #[test]
    fn sommet_sans_k() {
        assert_eq!(abc("(x+1)^2"), (1.0, 2.0, 1.0));
        let e = extraire("(x+1)^2").unwrap();
        assert_eq!(e.forme, Forme::Sommet);
    }

    #[test]
    fn sommet_avec_k() {
        // -2(x-3)² + 4 = -2x² + 12x - 14
        assert_eq!(abc("y = -2(x-3)² + 4"), (-2.0, 12.0, -14.0));
        // coefficient "+" implicite
        assert_eq!(abc("+(x-1)^2-1"), (1.0, -2.0, 0.0));
        assert_eq!(abc("-(x+2)^2"), (-1.0, -4.0, -4.0));
    }

    #[test]
    fn sommet_prioritaire_sur_standard() {
        // le "3x" après le carré n’est pas lu : la forme sommet gagne avec k = 3
        assert_eq!(abc("(x+1)^2+3x"), (1.0, 2.0, 4.0));
    }

    #[test]
    fn sommet_sans_k_pas_en_fin() {
        // pas de k, et le carré ne termine pas le texte : forme standard
        let e = extraire("(x+1)^2+x").unwrap();
        assert_eq!(e.forme, Forme::Standard);
        assert_eq!(e.coeffs.a(), 0.0);
    }

    #[test]
    fn coefficients_implicites() {
        assert_eq!(abc("-x^2+4"), (-1.0, 0.0, 4.0));
        assert_eq!(abc("x^2+x"), (1.0, 1.0, 0.0));
        assert_eq!(abc("x² - x - 1"), (1.0, -1.0, -1.0));
    }

    #[test]
    fn decimaux() {
        assert_eq!(abc("0.5x^2 + 1.25x - .75"), (0.5, 1.25, -0.75));
        assert_eq!(abc("1.5(x-0.5)^2"), (1.5, -1.5, 0.375));
    }

    #[test]
    fn x2_est_un_exposant() {
        assert_eq!(abc("3x2 + 2x + 1"), (3.0, 2.0, 1.0));
    }

    #[test]
    fn majuscules_et_moins_unicode() {
        assert_eq!(abc("Y = 4X² \u{2212} 8"), (4.0, 0.0, -8.0));
    }

    #[test]
    fn constante_seule() {
        assert_eq!(abc("7"), (0.0, 0.0, 7.0));
        assert_eq!(abc("2x + 1"), (0.0, 2.0, 1.0));
    }

    #[test]
    fn premiere_constante_gagne() {
        assert_eq!(abc("1 + x^2 + 3"), (1.0, 0.0, 1.0));
    }

    #[test]
    fn exposant_jamais_constante() {
        assert_eq!(abc("x^2 - 4x"), (1.0, -4.0, 0.0));
    }

    #[test]
    fn texte_sans_nombre() {
        assert_eq!(abc(""), (0.0, 0.0, 0.0));
        assert_eq!(abc("bonjour"), (0.0, 0.0, 0.0));
    }

    #[test]
    fn lexeme_illisible() {
        let err = extraire("-.x^2 + 1").unwrap_err();
        assert_eq!(
            err,
            ErreurNoyau::Lecture {
                jeton: "-.".to_string()
            }
        );
        assert!(err.to_string().contains("-."));
    }

    #[test]
    fn coefficient_sommet_illisible() {
        let err = extraire(".(x+1)^2").unwrap_err();
        assert_eq!(
            err,
            ErreurNoyau::Lecture {
                jeton: ".".to_string()
            }
        );
        // même chose avec k
        let err = extraire("-.(x-2)^2+3").unwrap_err();
        assert_eq!(
            err,
            ErreurNoyau::Lecture {
                jeton: "-.".to_string()
            }
        );
    }
}
