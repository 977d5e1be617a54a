//! src/app/console.rs
//!
//! Front-end console : une ligne lue, un résultat ou une erreur affiché.
//!
//! - invite "Enter an expression: "
//! - entrée rognée (espaces autour)
//! - succès : "Result: <valeur>", code 0
//! - échec  : message d’erreur du noyau sur la sortie standard, code 52

use std::io::{self, BufRead, Write};

use crate::noyau::{calc, format_resultat};

/// Code de sortie en cas d’erreur d’évaluation.
pub const CODE_ECHEC: i32 = 52;

const INVITE: &str = "Enter an expression: ";

/// Lit une ligne sur `entree`, évalue, écrit sur `sortie`. Retourne le code de sortie.
pub fn executer<R: BufRead, W: Write>(mut entree: R, mut sortie: W) -> io::Result<i32> {
    write!(sortie, "{INVITE}")?;
    sortie.flush()?;

    let mut ligne = String::new();
    entree.read_line(&mut ligne)?;

    evaluer_et_afficher(ligne.trim(), sortie)
}

/// Évalue une expression déjà lue (aussi utilisé par `--expression`).
pub fn evaluer_et_afficher<W: Write>(expression: &str, mut sortie: W) -> io::Result<i32> {
    match calc(expression) {
        Ok(v) => {
            writeln!(sortie, "Result: {}", format_resultat(v))?;
            Ok(0)
        }
        Err(e) => {
            log::debug!("{expression:?}: {e:?}");
            writeln!(sortie, "{e}")?;
            Ok(CODE_ECHEC)
        }
    }
}
