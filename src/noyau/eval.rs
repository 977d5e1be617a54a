//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> évaluation à deux piles (valeurs, opérateurs) -> f64
//!
//! Tous les opérateurs sont associatifs à gauche, `^` compris :
//! "2^3^2" = (2^3)^2 = 64.

use num_traits::{Float, Zero};

use super::erreur::ErreurCalc;
use super::jetons::{tokenize, Op, Tok};

/// Entrée de la pile d’opérateurs : '(' ne sert que de barrière.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Ouvrante,
    Op(Op),
}

/// API publique : texte -> valeur ou erreur classée.
pub fn calc(expression: &str) -> Result<f64, ErreurCalc> {
    let jetons = tokenize(expression)?;
    let v = evaluate(&jetons)?;
    log::debug!("{expression:?} = {v}");
    Ok(v)
}

/// Évalue une suite de jetons déjà validée par `tokenize`.
pub fn evaluate(tokens: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut nombres: Vec<f64> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        match tok {
            Tok::LPar => ops.push(Pile::Ouvrante),

            Tok::RPar => {
                // dépile jusqu’à '(' ; une ')' orpheline (ex: ")(") est refusée
                loop {
                    match ops.last().copied() {
                        Some(Pile::Ouvrante) => {
                            ops.pop();
                            break;
                        }
                        Some(Pile::Op(op)) => {
                            ops.pop();
                            appliquer(&mut nombres, op)?;
                        }
                        None => return Err(ErreurCalc::UnclosedParentheses),
                    }
                }
            }

            Tok::Op(op) => {
                // priorité du haut >= priorité courante => on réduit (associativité à gauche)
                while let Some(Pile::Op(haut)) = ops.last().copied() {
                    if haut.priorite() < op.priorite() {
                        break;
                    }
                    ops.pop();
                    appliquer(&mut nombres, haut)?;
                }
                ops.push(Pile::Op(*op));
            }

            Tok::Num(texte) => nombres.push(lire_nombre(texte)?),
        }
    }

    // vide la pile ops
    while let Some(entree) = ops.pop() {
        match entree {
            Pile::Op(op) => appliquer(&mut nombres, op)?,
            Pile::Ouvrante => return Err(ErreurCalc::UnknownOperator("(".into())),
        }
    }

    match nombres.len() {
        1 => Ok(nombres[0]),
        0 => Err(ErreurCalc::EmptyExpression),
        n => Err(ErreurCalc::MissingOperator(n)),
    }
}

/// Littéral -> f64. Hors plage (ex: "1E400") => InvalidToken ;
/// seules les écritures explicites "inf" / "infinity" donnent l’infini.
fn lire_nombre(texte: &str) -> Result<f64, ErreurCalc> {
    let v: f64 = texte
        .parse()
        .map_err(|_| ErreurCalc::InvalidToken(texte.to_string()))?;

    if v.is_infinite() {
        let mot = texte.trim_start_matches(['+', '-']).to_ascii_lowercase();
        if mot != "inf" && mot != "infinity" {
            return Err(ErreurCalc::InvalidToken(texte.to_string()));
        }
    }
    Ok(v)
}

/// Réduction : applique `op` (déjà dépilé par l’appelant) aux deux dernières
/// valeurs (num1 empilée avant num2), empile le résultat.
///
/// Rattrapage : une seule valeur et '-' => négation sur place (moins unaire
/// que le tokenizer n’a pas collé au littéral, ex: "-(2+3)").
fn appliquer(nombres: &mut Vec<f64>, op: Op) -> Result<(), ErreurCalc> {
    if nombres.len() < 2 {
        if let (Op::Minus, Some(seul)) = (op, nombres.last_mut()) {
            *seul = -*seul;
            log::trace!("moins unaire -> {seul}");
            return Ok(());
        }
        return Err(ErreurCalc::NotEnoughOperands(op));
    }

    let (num2, num1) = match (nombres.pop(), nombres.pop()) {
        (Some(b), Some(a)) => (b, a),
        _ => return Err(ErreurCalc::NotEnoughOperands(op)),
    };

    let res = match op {
        Op::Plus => num1 + num2,
        Op::Minus => num1 - num2,
        Op::Star => num1 * num2,
        Op::Slash => {
            if num2.is_zero() {
                return Err(ErreurCalc::DivisionByZero { num1, num2 });
            }
            num1 / num2
        }
        Op::Caret => {
            if num1.is_zero() && num2 <= 0.0 {
                return Err(ErreurCalc::ZeroBase { num1, num2 });
            }
            if num1 < 0.0 && Float::trunc(num2) != num2 {
                return Err(ErreurCalc::NegativeBase { num1, num2 });
            }
            Float::powf(num1, num2)
        }
    };

    log::trace!("{num1} {op} {num2} = {res}");
    nombres.push(res);
    Ok(())
}
