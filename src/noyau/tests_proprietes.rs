//! Tests de propriétés : contrat de `calc`.
//!
//! - priorités + associativité à gauche (`^` compris)
//! - les deux chemins du moins unaire (lexical dans tokenize, rattrapage dans l’évaluateur)
//! - parenthèses : solde net au tokenize, ordre vérifié à l’évaluation
//! - domaine numérique : division par zéro, 0^x (x <= 0), base négative

use super::erreur::ErreurCalc;
use super::eval::{calc, evaluate};
use super::jetons::{tokenize, Op, Tok};

fn eval_ok(expr: &str) -> f64 {
    calc(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_err(expr: &str) -> ErreurCalc {
    match calc(expr) {
        Ok(v) => panic!("expr={expr:?} devait échouer, a donné {v}"),
        Err(e) => e,
    }
}

fn assert_proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "attendu {b}, obtenu {a}");
}

/* ------------------------ Priorités / associativité ------------------------ */

#[test]
fn addition_simple() {
    assert_eq!(eval_ok("2 + 3"), 5.0);
}

#[test]
fn priorite_respectee() {
    assert_eq!(eval_ok("2 + 3 * 4"), 14.0);
    assert_eq!(eval_ok("10 - 6 / 2"), 7.0);
    assert_eq!(eval_ok("2 * 3 ^ 2"), 18.0);
}

#[test]
fn parentheses_prioritaires() {
    assert_eq!(eval_ok("(2 + 3) * 4"), 20.0);
    assert_eq!(eval_ok("((1 + 1) * (2 + 2)) ^ 2"), 64.0);
}

#[test]
fn puissance_associative_a_gauche() {
    // (2^3)^2 et non 2^(3^2) = 512
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), 64.0);
    assert_eq!(eval_ok("2 ^ (3 ^ 2)"), 512.0);
}

#[test]
fn soustraction_et_division_a_gauche() {
    assert_eq!(eval_ok("10 - 4 - 3"), 3.0);
    assert_eq!(eval_ok("64 / 4 / 2"), 8.0);
}

#[test]
fn decimaux() {
    assert_proche(eval_ok("0.1 + 0.2"), 0.30000000000000004);
    assert_eq!(eval_ok("1.5 * 4"), 6.0);
}

/* ------------------------ Moins unaire (deux chemins) ------------------------ */

#[test]
fn moins_unaire_en_tete() {
    assert_eq!(eval_ok("-5 + 3"), -2.0);
}

#[test]
fn moins_unaire_apres_operateur_et_parenthese() {
    assert_eq!(eval_ok("2 * -3"), -6.0);
    assert_eq!(eval_ok("2--3"), 5.0);
    assert_eq!(eval_ok("(-4) * 2"), -8.0);
}

#[test]
fn moins_unaire_rattrape_par_l_evaluateur() {
    // tokenize sort "-" seul comme opérateur : une seule valeur sur la pile à la
    // réduction => négation sur place.
    assert_eq!(
        tokenize("-(2 + 3)").unwrap().first(),
        Some(&Tok::Op(Op::Minus))
    );
    assert_eq!(eval_ok("-(2 + 3)"), -5.0);
    assert_eq!(eval_ok("--5"), 5.0);
}

#[test]
fn moins_unaire_rattrapage_direct_sur_jetons() {
    // suite de jetons construite à la main (pas de passage par tokenize)
    let jetons = vec![Tok::Op(Op::Minus), Tok::Num("7".into())];
    assert_eq!(evaluate(&jetons), Ok(-7.0));
}

#[test]
fn rattrapage_reserve_au_moins() {
    let jetons = vec![Tok::Op(Op::Star), Tok::Num("7".into())];
    assert_eq!(evaluate(&jetons), Err(ErreurCalc::NotEnoughOperands(Op::Star)));
}

#[test]
fn pas_assez_d_operandes() {
    assert_eq!(eval_err("2 *"), ErreurCalc::NotEnoughOperands(Op::Star));
    assert_eq!(eval_err("+ 2"), ErreurCalc::NotEnoughOperands(Op::Plus));
    // "-" collé puis sorti comme opérateur, mais "*" se réduit d’abord avec une seule valeur
    assert_eq!(eval_err("2*-(3)"), ErreurCalc::NotEnoughOperands(Op::Star));
    assert!(eval_err("2 *").to_string().contains('*'));
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn constantes_e_et_p() {
    assert_eq!(eval_ok("e"), std::f64::consts::E);
    assert_eq!(eval_ok("p"), std::f64::consts::PI);
    assert_proche(eval_ok("2 * p"), std::f64::consts::TAU);
    assert_eq!(eval_ok("-e"), -std::f64::consts::E);
}

#[test]
fn constante_collee_au_litteral_en_cours() {
    // "2p" : les chiffres de π s’ajoutent au texte "2" (pas de multiplication)
    assert_eq!(eval_ok("2p"), 23.141592653589793);
    assert_eq!(eval_ok("1 2e"), "122.718281828459045".parse::<f64>().unwrap());
    assert_eq!(eval_ok("2p + 1"), 24.141592653589793);
}

#[test]
fn pi_en_toutes_lettres_n_est_pas_une_constante() {
    // 'p' est remplacé, 'i' reste dans le littéral
    assert!(matches!(eval_err("pi"), ErreurCalc::InvalidToken(t) if t.ends_with('i')));
}

/* ------------------------ Domaine numérique ------------------------ */

#[test]
fn division_par_zero() {
    assert_eq!(
        eval_err("1 / 0"),
        ErreurCalc::DivisionByZero { num1: 1.0, num2: 0.0 }
    );
    assert!(matches!(eval_err("1 / (2 - 2)"), ErreurCalc::DivisionByZero { .. }));
}

#[test]
fn zero_puissance_non_positive() {
    assert_eq!(
        eval_err("0 ^ -1"),
        ErreurCalc::ZeroBase { num1: 0.0, num2: -1.0 }
    );
    assert!(matches!(eval_err("0 ^ 0"), ErreurCalc::ZeroBase { .. }));
    assert_eq!(eval_ok("0 ^ 2"), 0.0);
}

#[test]
fn base_negative_exposant_non_entier() {
    assert_eq!(
        eval_err("-2 ^ 0.5"),
        ErreurCalc::NegativeBase { num1: -2.0, num2: 0.5 }
    );
    assert_eq!(eval_ok("-2 ^ 3"), -8.0);
    assert_eq!(eval_ok("-2 ^ 2"), 4.0);
}

#[test]
fn debordement_donne_infini() {
    assert_eq!(eval_ok("10 ^ 400"), f64::INFINITY);
}

#[test]
fn litteral_hors_plage_refuse() {
    assert_eq!(eval_err("1E400"), ErreurCalc::InvalidToken("1E400".into()));
    assert_eq!(eval_err("-1E400"), ErreurCalc::InvalidToken("-1E400".into()));
    assert_eq!(eval_err("2 + 1E400"), ErreurCalc::InvalidToken("1E400".into()));
    // écritures explicites de l’infini : acceptées comme par la lecture flottante
    assert_eq!(eval_ok("inf"), f64::INFINITY);
    assert_eq!(eval_ok("-infinity"), f64::NEG_INFINITY);
    assert_eq!(eval_ok("1E300"), 1e300);
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn parenthese_non_fermee() {
    assert_eq!(eval_err("(2 + 3"), ErreurCalc::UnclosedParentheses);
    assert_eq!(eval_err("2 + 3)"), ErreurCalc::UnclosedParentheses);
}

#[test]
fn fermante_avant_ouvrante_refusee_a_l_evaluation() {
    // solde net nul => tokenize accepte, l’évaluateur refuse la ')' orpheline
    assert!(tokenize(")(").is_ok());
    assert_eq!(eval_err(")("), ErreurCalc::UnclosedParentheses);
    assert_eq!(eval_err("1)+(2"), ErreurCalc::UnclosedParentheses);
}

#[test]
fn parentheses_vides() {
    assert_eq!(eval_err("()"), ErreurCalc::EmptyExpression);
}

#[test]
fn valeurs_sans_operateur() {
    assert_eq!(eval_err("(2)(3)"), ErreurCalc::MissingOperator(2));
}

/* ------------------------ Entrées invalides ------------------------ */

#[test]
fn expression_vide() {
    assert_eq!(eval_err(""), ErreurCalc::EmptyExpression);
    assert_eq!(eval_err("   \t"), ErreurCalc::EmptyExpression);
}

#[test]
fn jeton_invalide_cite_le_texte() {
    let e = eval_err("2 + abc");
    assert_eq!(e, ErreurCalc::InvalidToken("abc".into()));
    assert!(e.to_string().contains("abc"));
    assert!(matches!(eval_err("1.2.3"), ErreurCalc::InvalidToken(_)));
}

#[test]
fn idempotence() {
    for expr in ["2 + 3 * 4", "-(1.5 - e) ^ 2", "1 / 0", "(2"] {
        assert_eq!(calc(expr), calc(expr), "expr={expr:?}");
    }
}

#[test]
fn ouvrante_restante_sur_jetons_non_valides() {
    // jetons non passés par tokenize : la barrière '(' arrive jusqu’à la réduction
    let jetons = vec![Tok::LPar, Tok::Num("1".into())];
    assert_eq!(
        evaluate(&jetons),
        Err(ErreurCalc::UnknownOperator("(".into()))
    );
}

#[test]
fn operateur_seul_sans_valeur_n_est_pas_ignore() {
    // chaque opérateur dépilé est réduit : sans aucune valeur, le moins n’a rien à nier
    let jetons = vec![Tok::Op(Op::Minus)];
    assert_eq!(evaluate(&jetons), Err(ErreurCalc::NotEnoughOperands(Op::Minus)));
    assert_eq!(eval_err("-"), ErreurCalc::NotEnoughOperands(Op::Minus));
    assert_eq!(eval_err("(*)"), ErreurCalc::NotEnoughOperands(Op::Star));
}
