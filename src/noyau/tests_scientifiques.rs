//! Tests scientifiques (campagne) : propriétés du moteur, du format et de la machine.
//!
//! Grilles de valeurs fixes (négatifs, décimaux, grands, petits) plutôt que hasard :
//! le hasard vit dans tests_fuzz_safe.rs.

use super::arithmetique::{calculer, Operateur};
use super::calculatrice::Calculatrice;
use super::erreur::ErreurCalcul;
use super::format::{analyser, formater};
use super::machine::Etat;

const GRILLE: &[f64] = &[
    0.0,
    1.0,
    -1.0,
    0.1,
    0.2,
    0.3,
    -0.7,
    2.5,
    3.0,
    7.0,
    -12.75,
    99.99,
    1000.0,
    -4096.5,
    123_456.789,
    1e12,
    -3.3e14,
    1.5e-8,
    2.0e-12,
    7.25e18,
];

fn taper(c: &mut Calculatrice, touches: &str) {
    for t in touches.chars() {
        match t {
            '.' => c.saisir_decimale(),
            '=' => c.egal(),
            d if d.is_ascii_digit() => c.saisir_chiffre(d),
            op => c.saisir_symbole(&op.to_string()),
        }
    }
}

/* ------------------------ Moteur ------------------------ */

#[test]
fn sci_commutativite() {
    for &a in GRILLE {
        for &b in GRILLE {
            for op in [Operateur::Plus, Operateur::Fois] {
                assert_eq!(calculer(a, b, op), calculer(b, a, op), "a={a} b={b} op={op}");
            }
        }
    }
}

#[test]
fn sci_antisymetrie_soustraction() {
    for &a in GRILLE {
        for &b in GRILLE {
            let ab = calculer(a, b, Operateur::Moins).unwrap();
            let ba = calculer(b, a, Operateur::Moins).unwrap();
            assert_eq!(ab, -ba, "a={a} b={b}");
        }
    }
}

#[test]
fn sci_division_par_zero() {
    for &a in GRILLE {
        let attendu = if a == 0.0 {
            ErreurCalcul::Invalide
        } else if a > 0.0 {
            ErreurCalcul::Infini
        } else {
            ErreurCalcul::MoinsInfini
        };
        assert_eq!(calculer(a, 0.0, Operateur::Divise), Err(attendu), "a={a}");
    }
}

#[test]
fn sci_artefacts_flottants() {
    assert_eq!(calculer(0.1, 0.2, Operateur::Plus).map(formater), Ok("0.3".to_string()));
    assert_eq!(calculer(1.1, 2.2, Operateur::Plus), Ok(3.3));
    assert_eq!(calculer(1.0, 0.9, Operateur::Moins), Ok(0.1));
    assert_eq!(calculer(0.7, 3.0, Operateur::Divise).map(formater), Ok("0.2333333333".to_string()));
}

/* ------------------------ Format ------------------------ */

#[test]
fn sci_aller_retour_stable() {
    let mut valeurs: Vec<f64> = GRILLE.to_vec();
    valeurs.extend([1.0 / 3.0, -2.0 / 3.0, 0.1 + 0.2, 999_999_999_999_999.0, 1e15, 1e-10]);
    valeurs.extend([999.99999999999, -999.99999999999, 999_999.999_999_999_99]);

    for x in valeurs {
        let f = formater(x);
        let relu = analyser(&f).unwrap_or_else(|| panic!("x={x} f={f:?}"));
        assert_eq!(formater(relu), f, "x={x}");
    }
}

#[test]
fn sci_aller_retour_proche() {
    for &x in GRILLE.iter().filter(|x| x.abs() < 1e15 && (x.abs() >= 1e-10 || **x == 0.0)) {
        let relu = analyser(&formater(x)).unwrap();
        assert!((relu - x).abs() <= 5e-11, "x={x} relu={relu}");
    }
}

/* ------------------------ Machine ------------------------ */

#[test]
fn sci_cinq_plus_trois() {
    let mut c = Calculatrice::default();
    c.effacer();
    taper(&mut c, "5+3=");
    assert_eq!(c.affichage(), "8");

    let h = c.historique(None);
    assert_eq!(h.len(), 1);
    assert_eq!(h[0].description, "5 + 3");
    assert_eq!(h[0].resultat, Ok(8.0));
}

#[test]
fn sci_zero_virgule_un_plus_zero_virgule_deux() {
    let mut c = Calculatrice::default();
    taper(&mut c, "0.1+0.2=");
    assert_eq!(c.affichage(), "0.3");
}

#[test]
fn sci_reselection_operateur() {
    let mut c = Calculatrice::default();
    taper(&mut c, "5+-");
    assert_eq!(
        c.etat(),
        Etat::OperateurChoisi {
            gauche: 5.0,
            op: Operateur::Moins
        }
    );
    assert!(c.historique(None).is_empty());
}

#[test]
fn sci_double_point() {
    let mut c = Calculatrice::default();
    taper(&mut c, "1..");
    assert_eq!(c.affichage(), "1.");
}

#[test]
fn sci_chiffre_apres_egal() {
    let mut c = Calculatrice::default();
    taper(&mut c, "6×7=");
    assert_eq!(c.affichage(), "42");
    taper(&mut c, "1");
    assert_eq!(c.affichage(), "1");
}

#[test]
fn sci_historique_cent_entrees() {
    let mut c = Calculatrice::default();
    for _ in 0..101 {
        taper(&mut c, "1+1=");
    }
    let h = c.historique(Some(usize::MAX));
    assert_eq!(h.len(), 100);
}

#[test]
fn sci_grands_resultats_scientifiques() {
    let mut c = Calculatrice::default();
    taper(&mut c, "123456789×987654321=");
    assert_eq!(c.affichage(), "1.219326e+17");
}

#[test]
fn sci_milliers_apres_arrondi() {
    let mut c = Calculatrice::default();
    taper(&mut c, "999.99999999999+0=");
    assert_eq!(c.affichage(), "1,000");
    assert_eq!(analyser(c.affichage()).map(formater), Some("1,000".to_string()));
}
