// src/app/graphe.rs
//
// Graphe interactif de la parabole, dessiné au painter egui (natif + web).
// Le noyau fournit les données et les bornes (trace.rs) ; ici on ne fait que
// projeter et dessiner. L’image PNG de la charge utile est faite par noyau::rendu.
//
// Repères : courbe (bleu), sommet (rouge), intercept (vert), racines (magenta),
// axe de symétrie (rouge pointillé), axes du repère (gris), quadrillage gradué.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::noyau::analyse::Analyse;
use crate::noyau::coeffs::ModeAxe;
use crate::noyau::format::deux_decimales;
use crate::noyau::trace::{Bornes, DonneesTrace, Point};

const HAUTEUR: f32 = 340.0;
const MARGE_PX: f32 = 12.0;
/// Place réservée aux graduations (gauche et bas).
const MARGE_GRAD_PX: f32 = 34.0;
const GRADUATIONS_MAX: usize = 40;

const BLEU: Color32 = Color32::from_rgb(40, 90, 220);
const ROUGE: Color32 = Color32::from_rgb(210, 40, 40);
const VERT: Color32 = Color32::from_rgb(30, 150, 60);
const MAGENTA: Color32 = Color32::from_rgb(190, 40, 190);

/// Plan -> écran (y vers le haut).
fn projeter(b: &Bornes, ecran: Rect, p: Point) -> Pos2 {
    let tx = ((p.x - b.x_min) / (b.x_max - b.x_min)) as f32;
    let ty = ((p.y - b.y_min) / (b.y_max - b.y_min)) as f32;
    Pos2::new(
        ecran.left() + tx * ecran.width(),
        ecran.bottom() - ty * ecran.height(),
    )
}

/// Pas "rond" (1, 2 ou 5 × 10^n) pour environ 8 graduations.
fn pas_graduation(etendue: f64) -> f64 {
    let brut = etendue / 8.0;
    let puissance = 10f64.powf(brut.log10().floor());
    let reduit = brut / puissance;
    let facteur = if reduit <= 1.0 {
        1.0
    } else if reduit <= 2.0 {
        2.0
    } else if reduit <= 5.0 {
        5.0
    } else {
        10.0
    };
    facteur * puissance
}

fn graduations(min: f64, max: f64) -> Vec<f64> {
    let pas = pas_graduation(max - min);
    if !pas.is_finite() || pas <= 0.0 {
        return Vec::new();
    }
    let premier = (min / pas).ceil();
    (0..GRADUATIONS_MAX)
        .map(|i| (premier + i as f64) * pas)
        .take_while(|&v| v <= max)
        .collect()
}

/// Graduation courte : "2", "-0.5", "1.25" (pas de zéros inutiles).
fn texte_graduation(v: f64) -> String {
    let s = deux_decimales(v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Dessine le graphe sur toute la largeur disponible.
pub fn dessiner(ui: &mut egui::Ui, d: &DonneesTrace, titre: &str) {
    let taille = egui::vec2(ui.available_width(), HAUTEUR);
    let (resp, painter) = ui.allocate_painter(taille, egui::Sense::hover());
    let fond = resp.rect;
    painter.rect_filled(fond, 4.0, ui.visuals().extreme_bg_color);

    let Some(b) = d.bornes() else {
        painter.text(
            fond.center(),
            Align2::CENTER_CENTER,
            "graphe indisponible",
            FontId::proportional(14.0),
            ui.visuals().error_fg_color,
        );
        return;
    };

    let mut ecran = fond.shrink(MARGE_PX);
    ecran.min.x += MARGE_GRAD_PX;
    ecran.max.y -= MARGE_GRAD_PX;
    ecran.min.y += 18.0; // titre
    let proj = |p: Point| projeter(&b, ecran, p);

    let faible = ui.visuals().weak_text_color();
    let grille = Stroke::new(0.6, faible.gamma_multiply(0.35));
    let police = FontId::monospace(10.0);

    // Quadrillage + graduations
    for x in graduations(b.x_min, b.x_max) {
        let bas = proj(Point { x, y: b.y_min });
        painter.line_segment([bas, proj(Point { x, y: b.y_max })], grille);
        painter.text(
            bas + egui::vec2(0.0, 4.0),
            Align2::CENTER_TOP,
            texte_graduation(x),
            police.clone(),
            faible,
        );
    }
    for y in graduations(b.y_min, b.y_max) {
        let gauche = proj(Point { x: b.x_min, y });
        painter.line_segment([gauche, proj(Point { x: b.x_max, y })], grille);
        painter.text(
            gauche - egui::vec2(4.0, 0.0),
            Align2::RIGHT_CENTER,
            texte_graduation(y),
            police.clone(),
            faible,
        );
    }

    // Noms des axes
    let nom_axe = FontId::proportional(13.0);
    painter.text(
        ecran.right_bottom() + egui::vec2(0.0, 18.0),
        Align2::RIGHT_TOP,
        "x",
        nom_axe.clone(),
        ui.visuals().text_color(),
    );
    painter.text(
        ecran.left_top() - egui::vec2(MARGE_GRAD_PX - 4.0, 0.0),
        Align2::LEFT_TOP,
        "y",
        nom_axe,
        ui.visuals().text_color(),
    );

    // Axes du repère (si visibles)
    let axe_trait = Stroke::new(1.2, faible);
    if b.y_min <= 0.0 && 0.0 <= b.y_max {
        painter.line_segment(
            [
                proj(Point { x: b.x_min, y: 0.0 }),
                proj(Point { x: b.x_max, y: 0.0 }),
            ],
            axe_trait,
        );
    }
    if b.x_min <= 0.0 && 0.0 <= b.x_max {
        painter.line_segment(
            [
                proj(Point { x: 0.0, y: b.y_min }),
                proj(Point { x: 0.0, y: b.y_max }),
            ],
            axe_trait,
        );
    }

    // Axe de symétrie : vertical en mode Y, horizontal en mode X
    let (s1, s2) = match d.mode {
        ModeAxe::Y => (
            Point { x: d.axe, y: b.y_min },
            Point { x: d.axe, y: b.y_max },
        ),
        ModeAxe::X => (
            Point { x: b.x_min, y: d.axe },
            Point { x: b.x_max, y: d.axe },
        ),
    };
    painter.extend(egui::Shape::dashed_line(
        &[proj(s1), proj(s2)],
        Stroke::new(1.5, ROUGE.gamma_multiply(0.5)),
        6.0,
        4.0,
    ));

    // Courbe
    let courbe: Vec<Pos2> = d
        .courbe
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|&p| proj(p))
        .collect();
    painter.add(egui::Shape::line(courbe, Stroke::new(2.5, BLEU)));

    // Repères
    for &r in &d.racines {
        painter.circle_filled(proj(r), 4.0, MAGENTA);
    }
    painter.circle_filled(proj(d.intercept), 4.0, VERT);
    painter.circle_filled(proj(d.sommet), 5.0, ROUGE);

    painter.text(
        fond.center_top() + egui::vec2(0.0, 4.0),
        Align2::CENTER_TOP,
        titre,
        FontId::proportional(14.0),
        ui.visuals().text_color(),
    );
}

/// Légende sous le graphe, avec les coordonnées de chaque repère.
pub fn legende(ui: &mut egui::Ui, a: &Analyse) {
    let (intercept, racines) = match a.mode {
        ModeAxe::Y => ("intercept Y", "racines (axe X)"),
        ModeAxe::X => ("intercept X", "racines (axe Y)"),
    };
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(BLEU, format!("— {}", a.equation));
        ui.colored_label(ROUGE, format!("● sommet {}", a.texte_sommet()));
        ui.colored_label(VERT, format!("● {intercept} {}", a.texte_intercept()));
        ui.colored_label(MAGENTA, format!("● {racines} : {}", a.texte_racines()));
        ui.colored_label(
            ROUGE.gamma_multiply(0.5),
            format!("┄ axe de symétrie {}", a.texte_axe()),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_y_vers_le_haut() {
        let b = Bornes {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        let ecran = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0));
        assert_eq!(projeter(&b, ecran, Point { x: 0.0, y: 0.0 }), Pos2::new(0.0, 100.0));
        assert_eq!(projeter(&b, ecran, Point { x: 10.0, y: 10.0 }), Pos2::new(100.0, 0.0));
    }

    #[test]
    fn pas_ronds() {
        assert_eq!(pas_graduation(10.0), 2.0);
        assert_eq!(pas_graduation(80.0), 10.0);
        assert_eq!(pas_graduation(400.0), 50.0);
    }

    #[test]
    fn graduations_dans_les_bornes() {
        let g = graduations(-4.5, 6.5);
        assert_eq!(g, vec![-4.0, -2.0, 0.0, 2.0, 4.0, 6.0]);
        assert!(graduations(0.0, f64::NAN).is_empty());
    }

    #[test]
    fn texte_graduation_court() {
        assert_eq!(texte_graduation(2.0), "2");
        assert_eq!(texte_graduation(-0.5), "-0.5");
        assert_eq!(texte_graduation(1.25), "1.25");
        assert_eq!(texte_graduation(0.0), "0");
    }
}
