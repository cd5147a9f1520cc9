// src/noyau/arithmetique.rs
//
// Moteur arithmétique : fonctions pures en double précision.
// Aucune opération ne panique : tout échec devient une ErreurCalcul.

use std::fmt;

use super::erreur::{ErreurCalcul, Resultat};

/// Opérateur binaire (forme normalisée).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Accepte la forme normalisée et les alias clavier (`*`, `/`, `x`).
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s.trim() {
            "+" => Some(Self::Plus),
            "-" | "−" => Some(Self::Moins),
            "×" | "*" | "x" => Some(Self::Fois),
            "÷" | "/" => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "×",
            Self::Divise => "÷",
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Opération unaire « sur place » (touches √, x², 1/x, ±, |x|).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unaire {
    Racine,
    Carre,
    Inverse,
    Negation,
    Absolu,
}

impl Unaire {
    pub fn appliquer(self, v: f64) -> Resultat {
        match self {
            Self::Racine => racine(v),
            Self::Carre => puissance(v, 2.0),
            Self::Inverse => inverse(v),
            Self::Negation => negation(v),
            Self::Absolu => absolu(v),
        }
    }

    /// Libellé d’historique, ex: "√(9)".
    pub fn decrire(self, operande: &str) -> String {
        match self {
            Self::Racine => format!("√({operande})"),
            Self::Carre => format!("sqr({operande})"),
            Self::Inverse => format!("1/({operande})"),
            Self::Negation => format!("negate({operande})"),
            Self::Absolu => format!("abs({operande})"),
        }
    }
}

/* ------------------------ Précision ------------------------ */

/// Nombre de chiffres significatifs conservés après chaque opération.
const CHIFFRES_SIGNIFICATIFS: usize = 15;

/// Efface les artefacts binaires : |v| < ε => 0, sinon arrondi à 15 chiffres significatifs.
/// (0.1 + 0.2 => 0.3 exactement.)
pub fn ajuster_precision(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    if v.abs() < f64::EPSILON {
        return 0.0;
    }
    // Notation scientifique avec 14 décimales = 15 chiffres significatifs.
    format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v)
        .parse()
        .unwrap_or(v)
}

/// Résultat brut -> Resultat : NaN => Invalide, ±∞ => Infini/MoinsInfini.
fn conclure(v: f64) -> Resultat {
    if v.is_nan() {
        Err(ErreurCalcul::Invalide)
    } else if v == f64::INFINITY {
        Err(ErreurCalcul::Infini)
    } else if v == f64::NEG_INFINITY {
        Err(ErreurCalcul::MoinsInfini)
    } else {
        Ok(ajuster_precision(v))
    }
}

fn exiger_fini(v: f64) -> Result<f64, ErreurCalcul> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::Invalide)
    }
}

/* ------------------------ Binaires ------------------------ */

/// Point d’entrée unique des opérations binaires.
pub fn calculer(a: f64, b: f64, op: Operateur) -> Resultat {
    match op {
        Operateur::Plus => additionner(a, b),
        Operateur::Moins => soustraire(a, b),
        Operateur::Fois => multiplier(a, b),
        Operateur::Divise => diviser(a, b),
    }
}

pub fn additionner(a: f64, b: f64) -> Resultat {
    conclure(exiger_fini(a)? + exiger_fini(b)?)
}

pub fn soustraire(a: f64, b: f64) -> Resultat {
    conclure(exiger_fini(a)? - exiger_fini(b)?)
}

pub fn multiplier(a: f64, b: f64) -> Resultat {
    conclure(exiger_fini(a)? * exiger_fini(b)?)
}

pub fn diviser(a: f64, b: f64) -> Resultat {
    let a = exiger_fini(a)?;
    let b = exiger_fini(b)?;
    if b == 0.0 {
        // Résultat symbolique, distinct d’un dépassement numérique.
        return Err(if a == 0.0 {
            ErreurCalcul::Invalide
        } else if a > 0.0 {
            ErreurCalcul::Infini
        } else {
            ErreurCalcul::MoinsInfini
        });
    }
    conclure(a / b)
}

/* ------------------------ Unaires ------------------------ */

pub fn pourcentage(v: f64) -> Resultat {
    conclure(exiger_fini(v)? / 100.0)
}

pub fn racine(v: f64) -> Resultat {
    let v = exiger_fini(v)?;
    if v < 0.0 {
        return Err(ErreurCalcul::Invalide);
    }
    conclure(v.sqrt())
}

/// Dépassement ou NaN => Invalide (pas d’infini signé ici).
pub fn puissance(base: f64, exposant: f64) -> Resultat {
    let r = exiger_fini(base)?.powf(exiger_fini(exposant)?);
    if r.is_finite() {
        Ok(ajuster_precision(r))
    } else {
        Err(ErreurCalcul::Invalide)
    }
}

pub fn inverse(v: f64) -> Resultat {
    let v = exiger_fini(v)?;
    if v == 0.0 {
        return Err(ErreurCalcul::Invalide);
    }
    conclure(1.0 / v)
}

pub fn negation(v: f64) -> Resultat {
    conclure(-exiger_fini(v)?)
}

pub fn absolu(v: f64) -> Resultat {
    conclure(exiger_fini(v)?.abs())
}
