// src/noyau/format.rs

use super::coeffs::{Coefficients, ModeAxe};

/* ------------------------ Nombres ------------------------ */

/// Valeur calculée : notation fixe à deux décimales.
/// -0.0 s’affiche "0.00".
pub fn deux_decimales(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.2}")
}

/// Point "(x, y)" à deux décimales.
pub fn format_point(x: f64, y: f64) -> String {
    format!("({}, {})", deux_decimales(x), deux_decimales(y))
}

/* ------------------------ Équation ------------------------ */

/// Terme signé " + 3x" / " - x" / "" (coefficient nul).
/// `var` vide pour la constante (le 1 n’est alors pas élidé).
fn terme_signe(v: f64, var: &str) -> String {
    if v == 0.0 {
        return String::new();
    }
    let signe = if v > 0.0 { '+' } else { '-' };
    let m = v.abs();
    if m == 1.0 && !var.is_empty() {
        format!(" {signe} {var}")
    } else {
        format!(" {signe} {m}{var}")
    }
}

/// Équation affichée : `y = 2x² - 3x + 5` (mode Y) ou `x = 2y² - 3y + 5` (mode X).
///
/// - a = 1 élidé, a = -1 en "-"
/// - b et c nuls omis, signes explicites " + " / " - "
/// - jamais de "+" en tête
pub fn format_equation(coeffs: &Coefficients, mode: ModeAxe) -> String {
    let v = mode.libre().to_string();
    let a = coeffs.a();

    let a_str = if a == 1.0 {
        String::new()
    } else if a == -1.0 {
        "-".to_string()
    } else {
        a.to_string()
    };

    let eq = format!(
        "{} = {a_str}{v}²{}{}",
        mode.liee(),
        terme_signe(coeffs.b(), &v),
        terme_signe(coeffs.c(), ""),
    );
    eq.replace("  ", " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: f64, b: f64, c: f64, mode: ModeAxe) -> String {
        format_equation(&Coefficients::new(a, b, c), mode)
    }

    #[test]
    fn elisions() {
        assert_eq!(eq(1.0, -1.0, 0.0, ModeAxe::Y), "y = x² - x");
        assert_eq!(eq(-1.0, 1.0, 1.0, ModeAxe::Y), "y = -x² + x + 1");
        assert_eq!(eq(2.0, -3.0, 5.0, ModeAxe::Y), "y = 2x² - 3x + 5");
        assert_eq!(eq(2.0, 0.0, -1.0, ModeAxe::Y), "y = 2x² - 1");
    }

    #[test]
    fn decimaux() {
        assert_eq!(eq(0.5, 2.5, -0.25, ModeAxe::Y), "y = 0.5x² + 2.5x - 0.25");
    }

    #[test]
    fn mode_x_utilise_y() {
        assert_eq!(eq(2.0, 3.0, 1.0, ModeAxe::X), "x = 2y² + 3y + 1");
        assert_eq!(eq(-1.0, -1.0, 0.0, ModeAxe::X), "x = -y² - y");
    }

    #[test]
    fn deux_decimales_sans_moins_zero() {
        assert_eq!(deux_decimales(-0.0), "0.00");
        assert_eq!(deux_decimales(1.005), "1.00");
        assert_eq!(deux_decimales(-4.0), "-4.00");
        assert_eq!(format_point(1.0, -4.0), "(1.00, -4.00)");
    }
}
