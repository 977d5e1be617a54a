// src/noyau/jetons.rs

use std::f64::consts::{E, PI};
use std::fmt;

use super::erreur::ErreurCalc;

/// Les cinq opérateurs binaires supportés.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    /// Table des priorités : {+:1, -:1, *:2, /:2, ^:3}.
    pub const fn priorite(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
            Op::Caret => 3,
        }
    }

    pub const fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }

    /// Symbole -> opérateur (hors table => UnknownOperator).
    pub fn from_symbole(c: char) -> Result<Op, ErreurCalc> {
        match c {
            '+' => Ok(Op::Plus),
            '-' => Ok(Op::Minus),
            '*' => Ok(Op::Star),
            '/' => Ok(Op::Slash),
            '^' => Ok(Op::Caret),
            _ => Err(ErreurCalc::UnknownOperator(c.to_string())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Texte brut du littéral : la lecture en f64 se fait à l’évaluation
    // (InvalidToken doit pouvoir citer le texte fautif).
    Num(String),
    Op(Op),
    LPar,
    RPar,
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Pousse le littéral en cours (s’il y en a un).
///
/// Un tampon réduit au seul signe "-" (ex: "-(2)") sort comme opérateur :
/// l’évaluateur le rattrapera en moins unaire.
fn vider_nombre(nombre: &mut String, out: &mut Vec<Tok>) {
    if nombre.is_empty() {
        return;
    }
    let texte = std::mem::take(nombre);
    if texte == "-" {
        out.push(Tok::Op(Op::Minus));
    } else {
        out.push(Tok::Num(texte));
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - espaces / tabulations ignorés (ne coupent pas un nombre : "1 2" -> 12)
/// - opérateurs + - * / ^ et parenthèses ( )
/// - moins unaire collé au littéral suivant (début, après '(' ou après un opérateur)
/// - `e` et `p` : développement décimal de e et π ajouté au littéral courant
/// - tout autre caractère : ajouté tel quel au littéral (vérifié à l’évaluation)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    // Dernier caractère non blanc vu (décide unaire / binaire pour '-').
    let mut precedent: Option<char> = None;

    for c in s.chars() {
        match c {
            ' ' | '\t' => continue,

            '+' | '*' | '/' | '^' => {
                vider_nombre(&mut nombre, &mut out);
                out.push(Tok::Op(Op::from_symbole(c)?));
            }
            '(' => {
                vider_nombre(&mut nombre, &mut out);
                out.push(Tok::LPar);
            }
            ')' => {
                vider_nombre(&mut nombre, &mut out);
                out.push(Tok::RPar);
            }

            '-' => {
                vider_nombre(&mut nombre, &mut out);
                let unaire = match precedent {
                    None => true,
                    Some(p) => p == '(' || est_operateur(p),
                };
                if unaire {
                    nombre.push('-');
                } else {
                    out.push(Tok::Op(Op::Minus));
                }
            }

            'e' => nombre.push_str(&E.to_string()),
            'p' => nombre.push_str(&PI.to_string()),

            _ => nombre.push(c),
        }

        precedent = Some(c);
    }

    vider_nombre(&mut nombre, &mut out);

    verifier_jetons(&out)?;
    log::debug!("jetons: {}", format_tokens(&out));

    Ok(out)
}

/// Validation post-lecture : au moins un jeton, parenthèses équilibrées en nombre.
///
/// Seul le solde net est vérifié ici : ")(" passe, l’évaluateur le refuse.
fn verifier_jetons(tokens: &[Tok]) -> Result<(), ErreurCalc> {
    if tokens.is_empty() {
        return Err(ErreurCalc::EmptyExpression);
    }

    let solde: isize = tokens
        .iter()
        .map(|t| match t {
            Tok::LPar => 1,
            Tok::RPar => -1,
            _ => 0,
        })
        .sum();

    if solde != 0 {
        return Err(ErreurCalc::UnclosedParentheses);
    }
    Ok(())
}

/// Format utilitaire (debug/formulaire) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(texte) => texte.clone(),
            Tok::Op(op) => op.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
