// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, pavé 4 colonnes
// - La vue ne calcule rien : elle envoie des Touche et relit deux chaînes

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::{Operateur, Unaire};

const TAILLE_TOUCHE: [f32; 2] = [56.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_memoire(ui);
                ui.add_space(4.0);
                self.ui_fonctions(ui);
                ui.add_space(4.0);
                self.ui_pave_numerique(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_historique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne d’expression ("5 +", "5 + 3 =")
                    ui.weak(self.calc.expression());

                    let texte = egui::RichText::new(self.calc.affichage())
                        .monospace()
                        .size(32.0);
                    if self.calc.en_erreur() {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let a_memoire = self.calc.a_memoire();
            self.bouton_si(ui, a_memoire, "MC", "Efface la mémoire", Touche::MemEffacer);
            self.bouton_si(ui, a_memoire, "MR", "Rappelle la mémoire", Touche::MemRappeler);
            self.bouton(ui, "M+", "Ajoute l’affichage à la mémoire", Touche::MemAjouter);
            self.bouton(ui, "M-", "Soustrait l’affichage de la mémoire", Touche::MemSoustraire);
            self.bouton(ui, "MS", "Stocke l’affichage", Touche::MemStocker);
            if a_memoire {
                ui.weak("M");
            }
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "√x", "Racine carrée", Touche::Unaire(Unaire::Racine));
            self.bouton(ui, "x²", "Carré", Touche::Unaire(Unaire::Carre));
            self.bouton(ui, "1/x", "Inverse", Touche::Unaire(Unaire::Inverse));
            self.bouton(ui, "|x|", "Valeur absolue", Touche::Unaire(Unaire::Absolu));
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "%", "Pourcentage", Touche::Pourcent);
                self.bouton(ui, "C", "Efface tout (mémoire intacte)", Touche::Effacer);
                self.bouton(ui, "DEL", "Efface le dernier chiffre", Touche::Supprimer);
                self.bouton_operateur(ui, "Diviser", Operateur::Divise);
                ui.end_row();

                self.chiffres(ui, ['7', '8', '9']);
                self.bouton_operateur(ui, "Multiplier", Operateur::Fois);
                ui.end_row();

                self.chiffres(ui, ['4', '5', '6']);
                self.bouton_operateur(ui, "Soustraire", Operateur::Moins);
                ui.end_row();

                self.chiffres(ui, ['1', '2', '3']);
                self.bouton_operateur(ui, "Additionner", Operateur::Plus);
                ui.end_row();

                self.bouton(ui, "±", "Change le signe", Touche::Unaire(Unaire::Negation));
                self.chiffres(ui, ['0']);
                self.bouton(ui, ".", "Point décimal", Touche::Point);
                self.bouton(ui, "=", "Calculer", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let resp = egui::CollapsingHeader::new("Historique")
            .default_open(self.voir_historique)
            .show(ui, |ui| {
                let lignes = self.lignes_historique();
                if lignes.is_empty() {
                    ui.weak("vide");
                }
                for (heure, description, resultat) in lignes {
                    ui.horizontal(|ui| {
                        ui.weak(heure);
                        ui.monospace(format!("{description} = {resultat}"));
                    });
                }

                ui.add_space(4.0);
                if ui.button("Effacer l’historique").clicked() {
                    self.calc.effacer_historique();
                }
            });
        self.voir_historique = resp.openness > 0.0;
    }

    fn chiffres<const N: usize>(&mut self, ui: &mut egui::Ui, chiffres: [char; N]) {
        for d in chiffres {
            let label = d.to_string();
            let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
            if resp.clicked() {
                self.touche(Touche::Chiffre(d));
            }
        }
    }

    /// Le symbole vient de l’opérateur ; surligné tant qu’il attend son opérande.
    fn bouton_operateur(&mut self, ui: &mut egui::Ui, tip: &str, op: Operateur) {
        let choisi = self.operateur_en_attente() == Some(op);
        let resp = ui
            .add_sized(
                TAILLE_TOUCHE,
                egui::Button::new(op.symbole()).selected(choisi),
            )
            .on_hover_text(tip);
        if resp.clicked() {
            self.touche(Touche::Operateur(op));
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, t: Touche) {
        self.bouton_si(ui, true, label, tip, t);
    }

    fn bouton_si(&mut self, ui: &mut egui::Ui, actif: bool, label: &str, tip: &str, t: Touche) {
        let resp = ui
            .add_enabled_ui(actif, |ui| {
                ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label))
                    .on_hover_text(tip)
            })
            .inner;

        if resp.clicked() {
            self.touche(t);
        }
    }
}
