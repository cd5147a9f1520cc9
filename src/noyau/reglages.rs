//! Réglages du noyau (fichier TOML optionnel).
//!
//! Toute valeur absente prend sa valeur par défaut ; toute valeur hors bornes est
//! ramenée dans ses bornes (garde-fous, pas d’erreur).

use std::path::Path;

use serde::Deserialize;

use super::erreur::ErreurReglages;
use super::format::DECIMALES_DEFAUT;

/// Variable d’environnement désignant le fichier de réglages (natif).
pub const VAR_REGLAGES: &str = "CALC_REGLAGES";

const CAPACITE_HISTORIQUE_DEFAUT: usize = 100;
const CAPACITE_HISTORIQUE_MAX: usize = 100;
const LIMITE_HISTORIQUE_DEFAUT: usize = 10;
const LONGUEUR_SAISIE_MAX: usize = 15;
const DECIMALES_MAX: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Nombre d’entrées conservées (les plus anciennes sont évincées).
    pub capacite_historique: usize,
    /// Limite par défaut de `historique()`.
    pub limite_historique: usize,
    /// Caractères bruts max d’une saisie (hors signe).
    pub longueur_saisie: usize,
    /// Décimales max en notation normale.
    pub decimales: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            capacite_historique: CAPACITE_HISTORIQUE_DEFAUT,
            limite_historique: LIMITE_HISTORIQUE_DEFAUT,
            longueur_saisie: LONGUEUR_SAISIE_MAX,
            decimales: DECIMALES_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(texte)?;
        Ok(r.bornes())
    }

    pub fn charger(chemin: impl AsRef<Path>) -> Result<Self, ErreurReglages> {
        let texte = std::fs::read_to_string(chemin)?;
        Self::depuis_toml(&texte)
    }

    /// Garde-fou : ramène chaque champ dans ses bornes.
    pub fn bornes(self) -> Self {
        Self {
            capacite_historique: self.capacite_historique.clamp(1, CAPACITE_HISTORIQUE_MAX),
            limite_historique: self.limite_historique.max(1),
            longueur_saisie: self.longueur_saisie.clamp(1, LONGUEUR_SAISIE_MAX),
            decimales: self.decimales.min(DECIMALES_MAX),
        }
    }
}
