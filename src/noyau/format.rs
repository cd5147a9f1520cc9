// src/noyau/format.rs
//
// Nombre <-> chaîne d’affichage.
// - sentinelles : NaN => "Error", ±∞ => "Infinity" / "-Infinity"
// - scientifique si |v| >= 1e15 ou 0 < |v| < 1e-10 (6 décimales de mantisse)
// - sinon : <= 10 décimales, zéros finaux retirés, séparateurs de milliers (partie entière)

use super::erreur::{ErreurCalcul, Resultat};

/// Décimales max en notation normale (par défaut).
pub const DECIMALES_DEFAUT: usize = 10;

const SEUIL_GRAND: f64 = 1e15;
const SEUIL_PETIT: f64 = 1e-10;
const DECIMALES_MANTISSE: usize = 6;
pub const SEPARATEUR_MILLIERS: char = ',';

/// Formate avec la précision par défaut.
#[cfg(test)]
pub fn formater(v: f64) -> String {
    formater_avec(v, DECIMALES_DEFAUT)
}

pub fn formater_avec(v: f64, decimales: usize) -> String {
    if v.is_nan() {
        return ErreurCalcul::Invalide.to_string();
    }
    if v.is_infinite() {
        let e = if v > 0.0 {
            ErreurCalcul::Infini
        } else {
            ErreurCalcul::MoinsInfini
        };
        return e.to_string();
    }

    let a = v.abs();
    if a >= SEUIL_GRAND || (a < SEUIL_PETIT && v != 0.0) {
        return formater_scientifique(v);
    }

    let brut = format!("{v:.decimales$}");
    let brut = if brut.contains('.') {
        brut.trim_end_matches('0').trim_end_matches('.')
    } else {
        brut.as_str()
    };

    // -0.0 => "0"
    if brut == "-0" {
        return "0".to_string();
    }

    // Décision prise sur la chaîne arrondie : 999.99999999999 => "1,000".
    grouper_milliers(brut)
}

/// Formate un résultat du moteur : Ok => nombre, Err => sentinelle.
pub fn formater_resultat(r: &Resultat, decimales: usize) -> String {
    match r {
        Ok(v) => formater_avec(*v, decimales),
        Err(e) => e.to_string(),
    }
}

/// -2.5e20 => "-2.500000e+20" (exposant toujours signé).
fn formater_scientifique(v: f64) -> String {
    let s = format!("{v:.DECIMALES_MANTISSE$e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Insère les séparateurs dans la partie entière seulement (rien sous 4 chiffres).
fn grouper_milliers(s: &str) -> String {
    let (signe, reste) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let (entier, decimal) = match reste.split_once('.') {
        Some((e, d)) => (e, Some(d)),
        None => (reste, None),
    };

    let n = entier.len();
    let mut out = String::with_capacity(s.len() + n / 3);
    out.push_str(signe);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEPARATEUR_MILLIERS);
        }
        out.push(c);
    }
    if let Some(d) = decimal {
        out.push('.');
        out.push_str(d);
    }
    out
}

/// Inverse de `formater` : retire les séparateurs puis lit un flottant.
/// "Infinity" / "-Infinity" => ±∞ ; "Error" ou chaîne mal formée => None.
pub fn analyser(s: &str) -> Option<f64> {
    let s = s.trim();
    if s == ErreurCalcul::Infini.to_string() {
        return Some(f64::INFINITY);
    }
    if s == ErreurCalcul::MoinsInfini.to_string() {
        return Some(f64::NEG_INFINITY);
    }

    let nettoye: String = s.chars().filter(|&c| c != SEPARATEUR_MILLIERS).collect();
    // f64::from_str accepte "inf"/"nan" : on les refuse, seul un numéral est valide.
    if !nettoye
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    nettoye.parse::<f64>().ok()
}

/// Vrai si la chaîne est une sentinelle (Error / Infinity / -Infinity).
pub fn est_sentinelle(s: &str) -> bool {
    [
        ErreurCalcul::Invalide,
        ErreurCalcul::Infini,
        ErreurCalcul::MoinsInfini,
    ]
    .iter()
    .any(|e| e.to_string() == s)
}
