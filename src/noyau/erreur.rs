// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs visibles par l’utilisateur.
///
/// L’extraction est tolérante : seule `Lecture` peut en sortir.
/// Les autres variantes viennent de la requête (validation avant analyse,
/// puis charge utile JSON).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurNoyau {
    /// Jeton numérique reconnu par la forme, mais illisible comme décimal.
    #[error("nombre illisible : '{jeton}'")]
    Lecture { jeton: String },

    /// Champ du mode coefficients vide ou qui n’est pas un nombre fini.
    #[error("coefficient {nom} invalide : '{valeur}'")]
    Champ { nom: &'static str, valeur: String },

    #[error("Le coefficient a ne peut pas être 0 (pas une fonction du second degré)")]
    CoefficientInvalide,

    #[error("Entrez une fonction du second degré")]
    EntreeVide,

    /// Image du graphe (plotters / PNG).
    #[error("rendu du graphe impossible : {0}")]
    Rendu(String),

    #[error("sérialisation JSON impossible : {0}")]
    Serialisation(String),
}
