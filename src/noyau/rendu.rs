//! Image du graphe pour la charge utile JSON (champ `grafik`).
//!
//! Rendu hors écran avec plotters sur un tampon RGB, puis PNG, puis base64.
//! Contenu : courbe, sommet, intercept, racines, axe de symétrie en pointillés,
//! quadrillage gradué avec noms d’axes, légende avec les coordonnées.
//!
//! Natif seulement : en wasm, la charge utile n’a pas de champ `grafik`.

use std::borrow::Cow;
use std::error::Error;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use eframe::egui;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use super::analyse::Analyse;
use super::coeffs::ModeAxe;
use super::erreur::ErreurNoyau;

/// 8 × 6 pouces à 100 dpi.
pub const LARGEUR: u32 = 800;
pub const HAUTEUR: u32 = 600;

const POLICE: &str = "sans-serif";
/// Police embarquée par egui, réutilisée pour le texte du PNG.
const POLICE_EGUI: &str = "Ubuntu-Light";

/// PNG du graphe, encodé en base64 standard.
pub fn grafik_base64(analyse: &Analyse) -> Result<String, ErreurNoyau> {
    Ok(STANDARD.encode(png(analyse)?))
}

/// PNG brut (LARGEUR × HAUTEUR, RGB 8 bits).
pub fn png(analyse: &Analyse) -> Result<Vec<u8>, ErreurNoyau> {
    installer_police()?;

    let mut rgb = vec![0u8; (LARGEUR * HAUTEUR * 3) as usize];
    dessiner(&mut rgb, analyse).map_err(|e| ErreurNoyau::Rendu(e.to_string()))?;

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&rgb, LARGEUR, HAUTEUR, ExtendedColorType::Rgb8)
        .map_err(|e| ErreurNoyau::Rendu(e.to_string()))?;
    Ok(png)
}

/// Enregistre une seule fois la police "sans-serif" de plotters.
fn installer_police() -> Result<(), ErreurNoyau> {
    static POLICE_INSTALLEE: OnceLock<Result<(), String>> = OnceLock::new();

    POLICE_INSTALLEE
        .get_or_init(|| {
            let defs = egui::FontDefinitions::default();
            let donnees = defs
                .font_data
                .get(POLICE_EGUI)
                .ok_or_else(|| format!("police {POLICE_EGUI} absente"))?;
            let octets: &'static [u8] = match &donnees.font {
                Cow::Borrowed(o) => *o,
                Cow::Owned(_) => return Err(format!("police {POLICE_EGUI} non statique")),
            };
            register_font(POLICE, FontStyle::Normal, octets)
                .map_err(|_| format!("police {POLICE_EGUI} illisible"))
        })
        .clone()
        .map_err(ErreurNoyau::Rendu)
}

/// `n` tirets le long de [p, q] (un morceau sur deux est dessiné).
fn tirets(p: (f64, f64), q: (f64, f64), n: usize) -> Vec<Vec<(f64, f64)>> {
    let en = |t: f64| (p.0 + (q.0 - p.0) * t, p.1 + (q.1 - p.1) * t);
    (0..n)
        .step_by(2)
        .map(|i| vec![en(i as f64 / n as f64), en((i + 1) as f64 / n as f64)])
        .collect()
}

fn dessiner(rgb: &mut [u8], a: &Analyse) -> Result<(), Box<dyn Error>> {
    let d = &a.trace;
    let b = d.bornes().ok_or("graphe indisponible (aucun point fini)")?;

    let racine = BitMapBackend::with_buffer(rgb, (LARGEUR, HAUTEUR)).into_drawing_area();
    racine.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&racine)
        .caption(&a.equation, (POLICE, 22).into_font())
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(b.x_min..b.x_max, b.y_min..b.y_max)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()?;

    // Axes du repère
    let noir = BLACK.stroke_width(1);
    if b.y_min <= 0.0 && 0.0 <= b.y_max {
        chart.draw_series(LineSeries::new([(b.x_min, 0.0), (b.x_max, 0.0)], noir))?;
    }
    if b.x_min <= 0.0 && 0.0 <= b.x_max {
        chart.draw_series(LineSeries::new([(0.0, b.y_min), (0.0, b.y_max)], noir))?;
    }

    // Courbe
    let bleu = BLUE.stroke_width(3);
    chart
        .draw_series(LineSeries::new(
            d.courbe
                .iter()
                .filter(|p| p.x.is_finite() && p.y.is_finite())
                .map(|p| (p.x, p.y)),
            bleu,
        ))?
        .label(a.equation.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], bleu));

    // Axe de symétrie : vertical en mode Y, horizontal en mode X
    let (s1, s2) = match d.mode {
        ModeAxe::Y => ((d.axe, b.y_min), (d.axe, b.y_max)),
        ModeAxe::X => ((b.x_min, d.axe), (b.x_max, d.axe)),
    };
    let rouge_pale = RED.mix(0.5).stroke_width(2);
    chart
        .draw_series(
            tirets(s1, s2, 41)
                .into_iter()
                .map(|t| PathElement::new(t, rouge_pale)),
        )?
        .label(format!("Axe de symétrie : {}", a.texte_axe()))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], rouge_pale));

    // Repères
    let (nom_intercept, nom_racines) = match d.mode {
        ModeAxe::Y => ("Intercept Y", "Racines (axe X)"),
        ModeAxe::X => ("Intercept X", "Racines (axe Y)"),
    };

    if !d.racines.is_empty() {
        chart
            .draw_series(
                d.racines
                    .iter()
                    .map(|r| Circle::new((r.x, r.y), 6, MAGENTA.filled())),
            )?
            .label(format!("{nom_racines} : {}", a.texte_racines()))
            .legend(|(x, y)| Circle::new((x + 10, y), 5, MAGENTA.filled()));
    }

    chart
        .draw_series([Circle::new((d.intercept.x, d.intercept.y), 6, GREEN.filled())])?
        .label(format!("{nom_intercept} {}", a.texte_intercept()))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));

    chart
        .draw_series([Circle::new((d.sommet.x, d.sommet.y), 8, RED.filled())])?
        .label(format!("Sommet {}", a.texte_sommet()))
        .legend(|(x, y)| Circle::new((x + 10, y), 6, RED.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK.mix(0.4))
        .label_font((POLICE, 14).into_font())
        .draw()?;

    racine.present()?;
    Ok(())
}
