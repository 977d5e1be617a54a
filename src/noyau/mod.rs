//! Noyau flottant
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (moins unaire, constantes e / p) + table des priorités
//! - eval.rs     : évaluation à deux piles + point d’entrée `calc`
//! - erreur.rs   : erreurs classées (thiserror)
//! - format.rs   : affichage d’un résultat f64

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::calc;
pub use format::format_resultat;
