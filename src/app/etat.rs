//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du formulaire (entrée, expression soumise, résultat, erreur)
//! et offrir des opérations simples (C/AC/évaluer) sans logique d’affichage.
//!
//! Contrats :
//! - L’évaluation passe uniquement par `noyau::calc` (pas de parsing ici).
//! - Le message d’erreur affiché est celui du noyau, tel quel.

use crate::noyau::{calc, format_resultat, ErreurCalc};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub soumise: String,  // expression telle qu’envoyée au noyau (écho)
    pub resultat: String, // résultat formaté
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            soumise: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + écho + résultat + erreur).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.soumise.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Soumet l’entrée courante au noyau et dépose résultat OU erreur.
    pub fn evaluer(&mut self) {
        self.soumise = self.entree.clone();
        match calc(&self.soumise) {
            Ok(v) => self.set_resultat(v),
            Err(e) => self.set_erreur(&e),
        }
        self.focus_entree = true;
    }

    fn set_resultat(&mut self, v: f64) {
        self.erreur.clear();
        self.resultat = format_resultat(v);
    }

    fn set_erreur(&mut self, e: &ErreurCalc) {
        log::warn!("{:?}: {e}", self.soumise);
        self.resultat.clear();
        self.erreur = e.to_string();
    }
}
