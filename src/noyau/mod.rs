//! Noyau calculatrice (sans UI)
//!
//! Organisation interne :
//! - erreur.rs       : ErreurCalcul (sentinelles typées) + ErreurReglages
//! - arithmetique.rs : moteur pur (binaires, unaires, précision 15 chiffres)
//! - format.rs       : nombre <-> chaîne d’affichage
//! - memoire.rs      : accumulateur + historique borné
//! - reglages.rs     : réglages TOML (bornés)
//! - machine.rs      : machine à états de saisie
//! - calculatrice.rs : contexte propriétaire (API consommée par l’UI)

pub mod arithmetique;
pub mod calculatrice;
pub mod erreur;
pub mod format;
pub mod machine;
pub mod memoire;
pub mod reglages;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use arithmetique::{Operateur, Unaire};
pub use calculatrice::Calculatrice;
pub use reglages::Reglages;
