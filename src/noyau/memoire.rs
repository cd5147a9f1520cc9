// src/noyau/memoire.rs
//
// Mémoire : un accumulateur (MS/MR/MC/M+/M-) + historique borné.
// - Les mutateurs ignorent en silence toute valeur non finie.
// - L’historique est observationnel : il ne nourrit jamais le calcul.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::arithmetique::ajuster_precision;
use super::erreur::Resultat;

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub horodatage: DateTime<Utc>,
    pub description: String,
    pub resultat: Resultat,
}

#[derive(Clone, Debug)]
pub struct Memoire {
    accumulateur: f64,
    historique: VecDeque<EntreeHistorique>,
    capacite: usize,
}

impl Memoire {
    pub fn new(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            accumulateur: 0.0,
            historique: VecDeque::with_capacity(capacite),
            capacite,
        }
    }

    /* ------------------------ Accumulateur ------------------------ */

    pub fn stocker(&mut self, v: f64) {
        if v.is_finite() {
            self.accumulateur = v;
        }
    }

    pub fn rappeler(&self) -> f64 {
        self.accumulateur
    }

    pub fn effacer_memoire(&mut self) {
        self.accumulateur = 0.0;
    }

    pub fn ajouter(&mut self, v: f64) {
        self.cumuler(v);
    }

    pub fn soustraire(&mut self, v: f64) {
        self.cumuler(-v);
    }

    fn cumuler(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let somme = self.accumulateur + delta;
        // Un dépassement laisse l’accumulateur intact.
        if somme.is_finite() {
            self.accumulateur = ajuster_precision(somme);
        }
    }

    pub fn a_valeur(&self) -> bool {
        self.accumulateur != 0.0
    }

    /* ------------------------ Historique ------------------------ */

    /// Ajoute en tête, puis évince les plus anciennes au-delà de la capacité.
    pub fn enregistrer(&mut self, description: impl Into<String>, resultat: Resultat) {
        self.historique.push_front(EntreeHistorique {
            horodatage: Utc::now(),
            description: description.into(),
            resultat,
        });
        self.historique.truncate(self.capacite);
    }

    /// Les `limite` entrées les plus récentes, la plus récente d’abord.
    pub fn historique(&self, limite: usize) -> Vec<&EntreeHistorique> {
        self.historique.iter().take(limite).collect()
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    #[cfg(test)]
    pub fn taille_historique(&self) -> usize {
        self.historique.len()
    }
}
