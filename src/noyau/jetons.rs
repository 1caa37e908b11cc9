// src/noyau/jetons.rs

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Lexème décimal brut : chiffres, un '.' optionnel, chiffres.
    /// Gardé tel quel (la conversion en f64 se fait au moment du match,
    /// pour pouvoir nommer un lexème illisible comme ".").
    Nombre(String),

    /// '+' ou '-'
    Signe(char),

    X,
    Chapeau, // ^

    ParG,
    ParD,

    // Tout le reste (*, /, lettres, ...) : coupe l’adjacence entre jetons.
    Autre(char),
}

impl Tok {
    pub fn est_nombre(&self) -> bool {
        matches!(self, Tok::Nombre(_))
    }

    /// Nombre commençant par un chiffre (h et k de la forme sommet).
    pub fn est_nombre_plein(&self) -> bool {
        matches!(self, Tok::Nombre(n) if n.starts_with(|c: char| c.is_ascii_digit()))
    }

    /// Exposant carré : exactement "2".
    pub fn est_deux(&self) -> bool {
        matches!(self, Tok::Nombre(n) if n == "2")
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Nombre(n) => f.write_str(n),
            Tok::Signe(c) | Tok::Autre(c) => write!(f, "{c}"),
            Tok::X => f.write_str("x"),
            Tok::Chapeau => f.write_str("^"),
            Tok::ParG => f.write_str("("),
            Tok::ParD => f.write_str(")"),
        }
    }
}

/// Tokenize une expression DÉJÀ normalisée (voir normalise.rs).
/// Ne peut pas échouer : un caractère inconnu devient `Tok::Autre`.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '(' => out.push(Tok::ParG),
            ')' => out.push(Tok::ParD),
            '^' => out.push(Tok::Chapeau),
            'x' => out.push(Tok::X),
            '+' | '-' => out.push(Tok::Signe(c)),
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i < chars.len() && chars[i] == '.' {
                    i += 1;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                out.push(Tok::Nombre(chars[start..i].iter().collect()));
                continue;
            }
            _ => out.push(Tok::Autre(c)),
        }
        i += 1;
    }

    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
