//! Erreurs du noyau.
//!
//! `ErreurCalcul` remplace les chaînes sentinelles : son affichage EST la sentinelle
//! montrée à l’écran ("Error", "Infinity", "-Infinity").

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// 0/0, √(négatif), 1/0, opérande mal formé, dépassement de puissance.
    #[error("Error")]
    Invalide,

    /// a/0 avec a > 0, ou dépassement positif.
    #[error("Infinity")]
    Infini,

    /// a/0 avec a < 0, ou dépassement négatif.
    #[error("-Infinity")]
    MoinsInfini,
}

/// Résultat d’une opération du moteur.
pub type Resultat = Result<f64, ErreurCalcul>;

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture du fichier de réglages impossible: {0}")]
    Lecture(#[from] std::io::Error),

    #[error("réglages TOML invalides: {0}")]
    Format(#[from] toml::de::Error),
}
