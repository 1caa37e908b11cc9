// src/noyau/normalise.rs
//
// Texte brut -> texte normalisé (avant tokenisation).
//
// Ordre :
// 1) espaces retirés + minuscules + variantes du signe moins
// 2) préfixe "f(x)=" ou "y=" retiré (ancré au début)
// 3) "²" -> "^2"
// 4) "x2" -> "x^2" (ambiguïté assumée : un 2 collé à x est un exposant)

/// Préfixes retirés, déjà en minuscules.
const PREFIXES: [&str; 2] = ["f(x)=", "y="];

pub fn normaliser(brut: &str) -> String {
    let mut s: String = brut
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            // − (U+2212), – (U+2013)
            '\u{2212}' | '\u{2013}' => '-',
            _ => c,
        })
        .collect();

    if let Some(reste) = PREFIXES.iter().find_map(|p| s.strip_prefix(p)) {
        s = reste.to_string();
    }

    s.replace('²', "^2").replace("x2", "x^2")
}

#[cfg(test)]
mod tests {
    use super::normaliser;

    #[test]
    fn retire_prefixes() {
        assert_eq!(normaliser("y = 2x^2"), "2x^2");
        assert_eq!(normaliser("f(x) = 2x^2"), "2x^2");
        assert_eq!(normaliser("F(X)=2X²"), "2x^2");
    }

    #[test]
    fn prefixe_ancre_au_debut() {
        // "y=" au milieu : laissé tel quel
        assert_eq!(normaliser("2x^2y=1"), "2x^2y=1");
    }

    #[test]
    fn espaces_exposants_et_moins() {
        assert_eq!(normaliser(" 3 x²  \u{2212} 4x\t+ 1 "), "3x^2-4x+1");
        assert_eq!(normaliser("x2+1"), "x^2+1");
    }
}
