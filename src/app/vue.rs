// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppQuadratique (etat.rs) pour natif + wasm
// - Clavier : Enter calcule (quand un champ de saisie est focus)
// - Deux saisies : texte libre ou trois coefficients ; deux modes d’axe
// - Résultats + démarche + graphe (graphe.rs)

use eframe::egui;
use log::{error, warn};

use super::etat::{AppQuadratique, ModeSaisie};
use super::graphe;
use crate::noyau::coeffs::ModeAxe;
use crate::noyau::extraction::Forme;
use crate::noyau::{calculer, echec_json, Reponse};

impl AppQuadratique {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice quadratique");
                ui.add_space(6.0);

                self.ui_modes(ui);
                ui.add_space(6.0);
                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if let Some(rep) = &self.reponse {
                    Self::ui_resultats(ui, rep);

                    ui.add_space(8.0);
                    Self::ui_demarche(ui, rep);

                    ui.add_space(8.0);
                    ui.separator();
                    graphe::dessiner(ui, &rep.analyse.trace, &rep.analyse.equation);
                    graphe::legende(ui, &rep.analyse);
                }
            });
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label("Saisie :");
            ui.selectable_value(&mut self.mode_saisie, ModeSaisie::TexteLibre, "texte libre");
            ui.selectable_value(&mut self.mode_saisie, ModeSaisie::Coefficients, "coefficients");

            ui.separator();

            ui.label("Mode :");
            ui.selectable_value(&mut self.mode_axe, ModeAxe::Y, "y = ax² + bx + c");
            ui.selectable_value(&mut self.mode_axe, ModeAxe::X, "x = ay² + by + c");
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let mut valider = false;

        match self.mode_saisie {
            ModeSaisie::TexteLibre => {
                ui.label("Fonction :");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.entree)
                        .desired_width(ui.available_width())
                        .hint_text("Ex: f(x) = 2x² - 3x + 5, y = -(x+1)² + 4, x^2 - 4")
                        .id_salt("entree_texte")
                        .code_editor(),
                );
                if self.focus_entree {
                    resp.request_focus();
                    self.focus_entree = false;
                }
                valider |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            }
            ModeSaisie::Coefficients => {
                ui.horizontal(|ui| {
                    let champs = [
                        ("a", &mut self.champ_a),
                        ("b", &mut self.champ_b),
                        ("c", &mut self.champ_c),
                    ];
                    for (nom, champ) in champs {
                        ui.label(format!("{nom} ="));
                        let resp = ui.add(
                            egui::TextEdit::singleline(champ)
                                .desired_width(72.0)
                                .id_salt(("champ", nom)),
                        );
                        valider |=
                            resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    }
                });
                self.focus_entree = false;
            }
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultats + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let calc = ui.add_sized([96.0, 30.0], egui::Button::new("Calculer"));
            valider |= calc.clicked();
        });

        self.ui_reglages(ui);

        if valider {
            self.calcul_via_noyau();
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Réglages du graphe")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label("Points :");
                    let mut n = self.reglages.points() as u32;
                    let resp = ui.add(egui::DragValue::new(&mut n).speed(10).range(2..=5000));
                    if resp.changed() {
                        self.set_points(n as usize);
                    }

                    ui.separator();

                    let mut marge = self.reglages.marge_racines();
                    let mut demi = self.reglages.demi_fenetre();
                    ui.label("Marge racines :");
                    let r1 = ui.add(egui::DragValue::new(&mut marge).speed(0.1).range(0.1..=100.0));
                    ui.label("Demi-fenêtre :");
                    let r2 = ui.add(egui::DragValue::new(&mut demi).speed(0.1).range(0.1..=100.0));
                    if r1.changed() || r2.changed() {
                        self.reglages.set_marges(marge, demi);
                    }
                });
            });
    }

    fn ui_resultats(ui: &mut egui::Ui, rep: &Reponse) {
        let a = &rep.analyse;
        let (nom_intercept, nom_racines) = match a.mode {
            ModeAxe::Y => ("Intersection axe Y", "Intersection(s) axe X"),
            ModeAxe::X => ("Intersection axe X", "Intersection(s) axe Y"),
        };

        egui::Grid::new("grille_resultats")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                let mut ligne = |titre: &str, valeur: String| {
                    ui.label(titre);
                    ui.monospace(valeur);
                    ui.end_row();
                };
                ligne("Équation", a.equation.clone());
                ligne("Ouverture", a.ouverture.libelle().to_string());
                ligne("Sommet", a.texte_sommet());
                ligne("Axe de symétrie", a.texte_axe());
                ligne(nom_intercept, a.texte_intercept());
                ligne(nom_racines, a.texte_racines());
                ligne("Discriminant", format!("{}", a.discriminant_arrondi()));
            });

        ui.add_space(4.0);
        if ui.button("Copier JSON").clicked() {
            match rep.vers_json() {
                Ok(json) => ui.ctx().copy_text(json),
                Err(e) => error!("copie JSON impossible: {e}"),
            }
        }
    }

    fn ui_demarche(ui: &mut egui::Ui, rep: &Reponse) {
        let d = &rep.analyse.derivations;
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                if let Some(e) = &rep.extraction {
                    let forme = match e.forme {
                        Forme::Sommet => "forme sommet a(x - h)² + k",
                        Forme::Standard => "forme standard ax² + bx + c",
                    };
                    Self::champ_demarche(
                        ui,
                        "Lecture",
                        "demarche_lecture",
                        &format!("{}\n{forme}", e.normalise),
                    );
                    Self::champ_demarche(ui, "Jetons", "demarche_jetons", &e.jetons);
                }
                Self::champ_demarche(
                    ui,
                    "Sommet",
                    "demarche_sommet",
                    &format!("{}\n{}", d.sommet_libre, d.sommet_liee),
                );
                Self::champ_demarche(ui, "Intersection", "demarche_intercept", &d.intercept);
                Self::champ_demarche(ui, "Discriminant", "demarche_discriminant", &d.discriminant);
                Self::champ_demarche(ui, "Racines", "demarche_racines", &d.racines);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }

    /// Calcule via le noyau, puis dépose la réponse (ou l’erreur) dans l’état UI.
    fn calcul_via_noyau(&mut self) {
        match calculer(&self.requete(), &self.reglages) {
            Ok(rep) => self.set_reponse(rep),
            Err(e) => {
                warn!("échec: {}", echec_json(&e));
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
