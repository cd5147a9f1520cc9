//! Contexte propriétaire : une machine, une mémoire, des réglages.
//!
//! C’est la seule surface que l’UI consomme. Le moteur arithmétique est sans état
//! (fonctions libres) : rien à posséder.

use tracing::debug;

use super::arithmetique::{Operateur, Unaire};
use super::erreur::Resultat;
use super::machine::{Etat, Machine};
use super::memoire::{EntreeHistorique, Memoire};
use super::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct Calculatrice {
    machine: Machine,
    memoire: Memoire,
    reglages: Reglages,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Calculatrice {
    pub fn new(reglages: Reglages) -> Self {
        let reglages = reglages.bornes();
        Self {
            machine: Machine::new(&reglages),
            memoire: Memoire::new(reglages.capacite_historique),
            reglages,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        self.machine.saisir_chiffre(chiffre);
    }

    pub fn saisir_operateur(&mut self, op: Operateur) {
        self.machine.saisir_operateur(op);
    }

    /// Variante textuelle : "+", "-", "×"/"*", "÷"/"/". Symbole inconnu => ignoré.
    pub fn saisir_symbole(&mut self, symbole: &str) {
        match Operateur::depuis_symbole(symbole) {
            Some(op) => self.machine.saisir_operateur(op),
            None => debug!(%symbole, "symbole d’opérateur inconnu"),
        }
    }

    pub fn saisir_decimale(&mut self) {
        self.machine.saisir_decimale();
    }

    pub fn egal(&mut self) {
        self.machine.egal(&mut self.memoire);
    }

    pub fn effacer(&mut self) {
        self.machine.effacer();
    }

    pub fn supprimer(&mut self) {
        self.machine.supprimer();
    }

    pub fn pourcentage(&mut self) {
        self.machine.pourcentage();
    }

    pub fn appliquer_unaire(&mut self, unaire: Unaire) {
        self.machine.appliquer_unaire(unaire, &mut self.memoire);
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        self.machine.affichage()
    }

    pub fn expression(&self) -> &str {
        self.machine.expression()
    }

    pub fn etat(&self) -> Etat {
        self.machine.etat()
    }

    /// Vrai si l’affichage est une sentinelle.
    pub fn en_erreur(&self) -> bool {
        self.machine.en_erreur()
    }

    /// Chaîne d’affichage d’un résultat d’historique (mêmes règles que l’écran).
    pub fn formater(&self, r: &Resultat) -> String {
        self.machine.formater(r)
    }

    /* ------------------------ Mémoire (MS / MR / MC / M+ / M-) ------------------------ */

    /// Les sentinelles ne sont jamais stockées.
    pub fn memoire_stocker(&mut self) {
        if let Some(v) = self.machine.valeur() {
            self.memoire.stocker(v);
            debug!(v, "MS");
        }
    }

    pub fn memoire_rappeler(&mut self) {
        let v = self.memoire.rappeler();
        self.machine.afficher_valeur(v);
        debug!(v, "MR");
    }

    pub fn memoire_effacer(&mut self) {
        self.memoire.effacer_memoire();
        debug!("MC");
    }

    pub fn memoire_ajouter(&mut self) {
        if let Some(v) = self.machine.valeur() {
            self.memoire.ajouter(v);
            debug!(v, total = self.memoire.rappeler(), "M+");
        }
    }

    pub fn memoire_soustraire(&mut self) {
        if let Some(v) = self.machine.valeur() {
            self.memoire.soustraire(v);
            debug!(v, total = self.memoire.rappeler(), "M-");
        }
    }

    pub fn a_memoire(&self) -> bool {
        self.memoire.a_valeur()
    }

    /* ------------------------ Historique ------------------------ */

    /// Les plus récentes d’abord ; `None` => limite par défaut des réglages.
    pub fn historique(&self, limite: Option<usize>) -> Vec<&EntreeHistorique> {
        self.memoire
            .historique(limite.unwrap_or(self.reglages.limite_historique))
    }

    pub fn effacer_historique(&mut self) {
        self.memoire.effacer_historique();
    }
}
