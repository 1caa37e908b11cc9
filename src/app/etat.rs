//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (saisie, mode, réponse, erreur, réglages)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun calcul ici (la requête est seulement construite).
//! - Actions déterministes, sans effet de bord caché.
//! - Réglages bornés (voir noyau/reglages.rs).

use crate::noyau::coeffs::ModeAxe;
use crate::noyau::reglages::Reglages;
use crate::noyau::{Reponse, Requete, Saisie};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeSaisie {
    Coefficients,
    #[default]
    TexteLibre,
}

#[derive(Clone, Debug)]
pub struct AppQuadratique {
    // --- entrée utilisateur ---
    pub mode_saisie: ModeSaisie,
    pub mode_axe: ModeAxe,
    pub entree: String, // texte libre
    pub champ_a: String,
    pub champ_b: String,
    pub champ_c: String,

    // --- sorties ---
    pub reponse: Option<Reponse>,
    pub erreur: String,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppQuadratique {
    fn default() -> Self {
        Self {
            mode_saisie: ModeSaisie::default(),
            mode_axe: ModeAxe::default(),
            entree: String::new(),
            champ_a: "1".to_string(),
            champ_b: "0".to_string(),
            champ_c: "0".to_string(),
            reponse: None,
            erreur: String::new(),
            reglages: Reglages::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppQuadratique {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (saisies + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        let mode_saisie = self.mode_saisie;
        *self = Self::default();
        self.mode_saisie = mode_saisie;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        match self.mode_saisie {
            ModeSaisie::TexteLibre => self.entree.clear(),
            ModeSaisie::Coefficients => {
                self.champ_a.clear();
                self.champ_b.clear();
                self.champ_c.clear();
            }
        }
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.reponse = None;
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Échec : pas de résultat partiel, on efface la dernière réponse.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.reponse = None;
        self.focus_entree = true;
    }

    pub fn set_reponse(&mut self, reponse: Reponse) {
        self.erreur.clear();
        self.reponse = Some(reponse);
        self.focus_entree = true;
    }

    pub fn set_points(&mut self, points: usize) {
        self.reglages.set_points(points);
        self.focus_entree = true;
    }

    /// Requête construite depuis la saisie courante.
    pub fn requete(&self) -> Requete {
        let saisie = match self.mode_saisie {
            ModeSaisie::TexteLibre => Saisie::TexteLibre(self.entree.clone()),
            ModeSaisie::Coefficients => Saisie::Coefficients {
                a: self.champ_a.clone(),
                b: self.champ_b.clone(),
                c: self.champ_c.clone(),
            },
        };
        Requete {
            saisie,
            mode: self.mode_axe,
        }
    }
}
