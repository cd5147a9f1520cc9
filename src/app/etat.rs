//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le contexte calculatrice et traduire une touche en appel d’API.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice`.
//! - L’UI ne lit que deux chaînes : affichage + ligne d’expression.

use crate::noyau::machine::Etat;
use crate::noyau::{Calculatrice, Operateur, Reglages, Unaire};

/// Une touche du pavé (ou raccourci clavier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Operateur),
    Egal,
    Effacer,
    Supprimer,
    Pourcent,
    Unaire(Unaire),
    MemStocker,
    MemRappeler,
    MemEffacer,
    MemAjouter,
    MemSoustraire,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
    pub voir_historique: bool,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            calc: Calculatrice::new(reglages),
            voir_historique: false,
        }
    }

    pub fn touche(&mut self, t: Touche) {
        let c = &mut self.calc;
        match t {
            Touche::Chiffre(d) => c.saisir_chiffre(d),
            Touche::Point => c.saisir_decimale(),
            Touche::Operateur(op) => c.saisir_operateur(op),
            Touche::Egal => c.egal(),
            Touche::Effacer => c.effacer(),
            Touche::Supprimer => c.supprimer(),
            Touche::Pourcent => c.pourcentage(),
            Touche::Unaire(u) => c.appliquer_unaire(u),
            Touche::MemStocker => c.memoire_stocker(),
            Touche::MemRappeler => c.memoire_rappeler(),
            Touche::MemEffacer => c.memoire_effacer(),
            Touche::MemAjouter => c.memoire_ajouter(),
            Touche::MemSoustraire => c.memoire_soustraire(),
        }
    }

    /// Saisie clavier : chiffres, point (ou virgule), "=", "%", symboles d’opérateur.
    pub fn caractere(&mut self, car: char) {
        match car {
            '0'..='9' => self.touche(Touche::Chiffre(car)),
            '.' | ',' => self.touche(Touche::Point),
            '=' => self.touche(Touche::Egal),
            '%' => self.touche(Touche::Pourcent),
            _ => self.calc.saisir_symbole(&car.to_string()),
        }
    }

    /// Opérateur en attente (pour le mettre en évidence sur le pavé).
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        match self.calc.etat() {
            Etat::OperateurChoisi { op, .. } => Some(op),
            Etat::Repos | Etat::Accumulation { .. } | Etat::Resultat => None,
        }
    }

    /// Lignes prêtes à afficher : (heure, description, résultat).
    pub fn lignes_historique(&self) -> Vec<(String, String, String)> {
        self.calc
            .historique(None)
            .into_iter()
            .map(|e| {
                (
                    e.horodatage.format("%H:%M:%S").to_string(),
                    e.description.clone(),
                    self.calc.formater(&e.resultat),
                )
            })
            .collect()
    }
}
