// src/app.rs
//
// Calculatrice quadratique — module App (racine)
// ---------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + graphe.rs)
// - Ré-exporter AppQuadratique (pour main.rs: use crate::app::AppQuadratique;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion de Enter est faite dans vue.rs (quand un champ a le focus).

pub mod etat;
pub mod graphe;
pub mod vue;

pub use etat::AppQuadratique;

use eframe::egui;

impl eframe::App for AppQuadratique {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
