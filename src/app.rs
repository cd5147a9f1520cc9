// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis clavier (natif + web) :
        // ESC = C (efface tout sauf la mémoire).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.touche(Touche::Effacer);
        }

        // Pavé physique : texte tapé, Entrée = "=", Retour arrière = DEL.
        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => texte.chars().for_each(|c| self.caractere(c)),
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.touche(Touche::Egal),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.touche(Touche::Supprimer),
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
