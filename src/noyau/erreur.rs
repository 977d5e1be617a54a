//! Noyau — erreurs typées
//!
//! Toutes les erreurs sont terminales : détectées au point où elles se produisent,
//! remontées telles quelles (pas de reprise, pas de résultat partiel).
//! Les front-ends (console, formulaire) affichent `Display` sans le modifier.

use thiserror::Error;

use super::jetons::Op;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// Aucun jeton (entrée vide ou seulement des espaces).
    #[error("expression vide")]
    EmptyExpression,

    /// Nombre de '(' différent du nombre de ')', ou ')' sans '(' correspondante.
    #[error("parenthèses non fermées")]
    UnclosedParentheses,

    /// Un littéral ne se lit pas comme un flottant.
    #[error("jeton invalide: {0}")]
    InvalidToken(String),

    /// Opérateur sans ses deux opérandes (et pas rattrapable en moins unaire).
    #[error("pas assez d’opérandes pour {0}")]
    NotEnoughOperands(Op),

    /// Symbole absent de la table des priorités arrivé jusqu’à l’application.
    #[error("opérateur inconnu: {0}")]
    UnknownOperator(String),

    #[error("division par zéro: {num1}/{num2}")]
    DivisionByZero { num1: f64, num2: f64 },

    /// 0 élevé à une puissance <= 0.
    #[error("zéro élevé à une puissance non positive: {num1}^{num2}")]
    ZeroBase { num1: f64, num2: f64 },

    /// Base négative, exposant non entier.
    #[error("base négative élevée à une puissance non entière: {num1}^{num2}")]
    NegativeBase { num1: f64, num2: f64 },

    /// Plusieurs valeurs restent sur la pile à la fin, ex: "(2)(3)".
    #[error("opérateur manquant: {0} valeurs sans opérateur")]
    MissingOperator(usize),
}
