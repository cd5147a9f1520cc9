//! Machine à états de la calculatrice (saisie pavé numérique).
//!
//! Évaluation gauche -> droite, sans priorité (style calculatrice de poche).
//!
//! Contrats :
//! - L’affichage est toujours un numéral valide (un seul point) OU une sentinelle.
//! - Aucune transition ne panique : un échec s’affiche en sentinelle puis l’état
//!   repart comme après `=`.
//! - La machine ne touche jamais à l’accumulateur ; elle ne fait qu’ajouter à l’historique.

use tracing::{debug, warn};

use super::arithmetique::{self, calculer, Operateur, Unaire};
use super::erreur::{ErreurCalcul, Resultat};
use super::format::{
    analyser, est_sentinelle, formater_avec, formater_resultat, SEPARATEUR_MILLIERS,
};
use super::memoire::Memoire;
use super::reglages::Reglages;

/// État explicite (remplace les drapeaux waitingForOperand / justCalculated).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Etat {
    /// Aucun opérateur en attente : saisie du premier opérande.
    Repos,
    /// Opérateur choisi : le prochain chiffre remplace l’affichage.
    OperateurChoisi { gauche: f64, op: Operateur },
    /// Second opérande affiché. `fige` : valeur calculée (%, unaire, MR),
    /// le prochain chiffre repart d’une saisie neuve.
    Accumulation {
        gauche: f64,
        op: Operateur,
        fige: bool,
    },
    /// Résultat affiché, aucun opérateur en attente.
    Resultat,
}

#[derive(Clone, Debug)]
pub struct Machine {
    affichage: String,
    expression: String,
    etat: Etat,
    longueur_saisie: usize,
    decimales: usize,
}

impl Machine {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            affichage: "0".to_string(),
            expression: String::new(),
            etat: Etat::Repos,
            longueur_saisie: reglages.longueur_saisie,
            decimales: reglages.decimales,
        }
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Ligne d’expression : "5 +" en attente, "5 + 3 =" après `=`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    /// Valeur affichée si c’est un nombre fini.
    pub fn valeur(&self) -> Option<f64> {
        analyser(&self.affichage).filter(|v| v.is_finite())
    }

    pub fn en_erreur(&self) -> bool {
        est_sentinelle(&self.affichage)
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        if !chiffre.is_ascii_digit() {
            debug!(%chiffre, "chiffre refusé");
            return;
        }

        match self.etat {
            Etat::OperateurChoisi { gauche, op } => {
                self.affichage = chiffre.to_string();
                self.etat = Etat::Accumulation {
                    gauche,
                    op,
                    fige: false,
                };
            }
            Etat::Resultat => {
                self.affichage = chiffre.to_string();
                self.etat = Etat::Repos;
            }
            Etat::Accumulation {
                gauche,
                op,
                fige: true,
            } => {
                self.affichage = chiffre.to_string();
                self.etat = Etat::Accumulation {
                    gauche,
                    op,
                    fige: false,
                };
            }
            Etat::Repos | Etat::Accumulation { fige: false, .. } => {
                if self.saisie_pleine() {
                    debug!(affichage = %self.affichage, "saisie pleine");
                    return;
                }
                match self.affichage.as_str() {
                    "0" => self.affichage = chiffre.to_string(),
                    "-0" => self.affichage = format!("-{chiffre}"),
                    _ => self.affichage.push(chiffre),
                }
            }
        }

        debug!(%chiffre, affichage = %self.affichage, etat = ?self.etat, "chiffre");
    }

    pub fn saisir_decimale(&mut self) {
        match self.etat {
            Etat::OperateurChoisi { gauche, op }
            | Etat::Accumulation {
                gauche,
                op,
                fige: true,
            } => {
                self.affichage = "0.".to_string();
                self.etat = Etat::Accumulation {
                    gauche,
                    op,
                    fige: false,
                };
            }
            Etat::Resultat => {
                self.affichage = "0.".to_string();
                self.etat = Etat::Repos;
            }
            Etat::Repos | Etat::Accumulation { fige: false, .. } => {
                // Un second point est ignoré.
                if self.affichage.contains('.') || self.saisie_pleine() {
                    return;
                }
                self.affichage.push('.');
            }
        }

        debug!(affichage = %self.affichage, "point décimal");
    }

    pub fn saisir_operateur(&mut self, op: Operateur) {
        let Some(v) = self.valeur() else {
            debug!(affichage = %self.affichage, %op, "opérateur ignoré (affichage non numérique)");
            return;
        };

        let gauche = match self.etat {
            Etat::Repos | Etat::Resultat | Etat::OperateurChoisi { .. } => v,
            // Enchaînement : on évalue la paire en attente avant d’accepter le nouvel opérateur.
            Etat::Accumulation {
                gauche, op: prec, ..
            } => match calculer(gauche, v, prec) {
                Ok(r) => {
                    self.affichage = formater_avec(r, self.decimales);
                    r
                }
                Err(e) => {
                    self.expression = self.decrire_binaire(gauche, prec, v);
                    self.echec(e);
                    return;
                }
            },
        };

        self.etat = Etat::OperateurChoisi { gauche, op };
        self.expression = format!("{} {op}", self.nombre(gauche));
        debug!(%op, gauche, affichage = %self.affichage, "opérateur");
    }

    /// `=` : évalue la paire en attente, l’affiche et l’inscrit à l’historique.
    pub fn egal(&mut self, memoire: &mut Memoire) {
        let (gauche, op) = match self.etat {
            Etat::OperateurChoisi { gauche, op } | Etat::Accumulation { gauche, op, .. } => {
                (gauche, op)
            }
            Etat::Repos | Etat::Resultat => {
                debug!("égal sans opérateur en attente");
                return;
            }
        };

        // NaN si l’affichage n’est pas un numéral : le moteur le refusera (Invalide).
        let droite = self.valeur().unwrap_or(f64::NAN);
        let description = self.decrire_binaire(gauche, op, droite);
        let resultat = calculer(gauche, droite, op);

        memoire.enregistrer(description.clone(), resultat);
        self.expression = format!("{description} =");

        match resultat {
            Ok(r) => {
                self.affichage = formater_avec(r, self.decimales);
                self.etat = Etat::Resultat;
                debug!(%description, affichage = %self.affichage, "égal");
            }
            Err(e) => self.echec(e),
        }
    }

    /// C : remet l’affichage à 0 et oublie l’opération en attente (mémoire intacte).
    pub fn effacer(&mut self) {
        self.affichage = "0".to_string();
        self.expression.clear();
        self.etat = Etat::Repos;
        debug!("effacer");
    }

    /// DEL : retire le dernier caractère du numéral affiché.
    pub fn supprimer(&mut self) {
        if self.en_erreur() {
            self.effacer();
            return;
        }

        match self.etat {
            Etat::OperateurChoisi { .. } => return,
            Etat::Resultat => self.etat = Etat::Repos,
            Etat::Accumulation { gauche, op, .. } => {
                self.etat = Etat::Accumulation {
                    gauche,
                    op,
                    fige: false,
                }
            }
            Etat::Repos => {}
        }

        // Un exposant ne s’édite pas chiffre par chiffre.
        if self.affichage.contains('e') {
            self.affichage = "0".to_string();
            debug!("supprimer (notation scientifique)");
            return;
        }

        let mut brut: String = self
            .affichage
            .chars()
            .filter(|&c| c != SEPARATEUR_MILLIERS)
            .collect();
        brut.pop();
        if brut.is_empty() || brut == "-" {
            brut = "0".to_string();
        }
        self.affichage = brut;
        debug!(affichage = %self.affichage, "supprimer");
    }

    /// % : v => v/100 sur place ; l’opérateur en attente est conservé.
    pub fn pourcentage(&mut self) {
        let Some(v) = self.valeur() else {
            return;
        };
        match arithmetique::pourcentage(v) {
            Ok(r) => {
                self.afficher_calcule(r);
                debug!(v, affichage = %self.affichage, "pourcentage");
            }
            Err(e) => self.echec(e),
        }
    }

    /// √, x², 1/x, ±, |x| : sur place, comme `%`, mais inscrit à l’historique.
    pub fn appliquer_unaire(&mut self, unaire: Unaire, memoire: &mut Memoire) {
        let Some(v) = self.valeur() else {
            return;
        };

        let description = unaire.decrire(&self.nombre(v));
        let resultat = unaire.appliquer(v);
        memoire.enregistrer(description.clone(), resultat);

        match resultat {
            Ok(r) => {
                self.afficher_calcule(r);
                debug!(%description, affichage = %self.affichage, "unaire");
            }
            Err(e) => self.echec(e),
        }
    }

    /// Affiche une valeur venue d’ailleurs (rappel mémoire). Elle devient
    /// l’opérande droit si un opérateur attend.
    pub fn afficher_valeur(&mut self, v: f64) {
        self.affichage = formater_avec(v, self.decimales);
        self.etat = match self.etat {
            Etat::OperateurChoisi { gauche, op } | Etat::Accumulation { gauche, op, .. } => {
                Etat::Accumulation {
                    gauche,
                    op,
                    fige: true,
                }
            }
            Etat::Repos | Etat::Resultat => Etat::Resultat,
        };
    }

    /* ------------------------ Internes ------------------------ */

    fn afficher_calcule(&mut self, r: f64) {
        self.affichage = formater_avec(r, self.decimales);
        self.etat = match self.etat {
            Etat::Repos | Etat::Resultat => Etat::Resultat,
            Etat::Accumulation { gauche, op, .. } => Etat::Accumulation {
                gauche,
                op,
                fige: true,
            },
            // Le prochain chiffre remplace déjà l’affichage.
            e @ Etat::OperateurChoisi { .. } => e,
        };
    }

    /// Échec : sentinelle affichée, puis même remise à zéro qu’après `=`.
    fn echec(&mut self, e: ErreurCalcul) {
        warn!(erreur = %e, expression = %self.expression, "échec du calcul");
        self.affichage = e.to_string();
        self.etat = Etat::Resultat;
    }

    fn saisie_pleine(&self) -> bool {
        self.affichage.chars().filter(|&c| c != '-').count() >= self.longueur_saisie
    }

    fn nombre(&self, v: f64) -> String {
        formater_avec(v, self.decimales)
    }

    fn decrire_binaire(&self, gauche: f64, op: Operateur, droite: f64) -> String {
        format!("{} {op} {}", self.nombre(gauche), self.nombre(droite))
    }

    /// Pour l’historique affiché côté UI.
    pub fn formater(&self, r: &Resultat) -> String {
        formater_resultat(r, self.decimales)
    }
}
