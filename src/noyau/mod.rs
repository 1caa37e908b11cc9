//! Noyau quadratique
//!
//! Organisation interne :
//! - normalise.rs  : texte brut -> texte normalisé
//! - jetons.rs     : tokenisation
//! - extraction.rs : formes (sommet puis standard) -> (a, b, c)
//! - coeffs.rs     : Coefficients + ModeAxe
//! - format.rs     : équation affichée + nombres à 2 décimales
//! - analyse.rs    : sommet, axe, intercept, discriminant, racines + démarche
//! - trace.rs      : courbe échantillonnée + repères du graphe
//! - reglages.rs   : échantillonnage / fenêtre (bornés)
//! - rendu.rs      : image PNG (base64) du graphe, natif seulement
//! - requete.rs    : pipeline complet (saisie -> validation -> analyse -> JSON)

pub mod analyse;
pub mod coeffs;
pub mod erreur;
pub mod extraction;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod reglages;
#[cfg(not(target_arch = "wasm32"))]
pub mod rendu;
pub mod requete;
pub mod trace;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use requete::{calculer, echec_json, Reponse, Requete, Saisie};
