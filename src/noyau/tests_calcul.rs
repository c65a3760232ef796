//! Tests de calcul (campagne) : arithmétique, fonctions, variable, erreurs.
//!
//! Les références numériques sont recalculées avec `f64` quand c’est
//! possible, pour ne pas dépendre de décimales recopiées à la main.

use super::erreur::ErreurEval;
use super::evaluer;
use super::validation::valider_entree;

const EPS: f64 = 1e-6;

fn eval_ok(expr: &str, x: f64) -> f64 {
    evaluer(expr, x).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, x: f64, attendu: f64) {
    let v = eval_ok(expr, x);
    assert!(
        (v - attendu).abs() <= EPS,
        "expr={expr:?} x={x} : {v} != {attendu}"
    );
}

fn assert_invalide(expr: &str) {
    match evaluer(expr, 0.0) {
        Err(ErreurEval::ExpressionInvalide(_)) => {}
        Ok(v) => panic!("expr={expr:?} aurait dû échouer, obtenu {v}"),
    }
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn quatre_operations() {
    assert_proche("134.5675673+456.8946571", 0.0, 591.4622244);
    assert_proche("134.5675673-456.8946571", 0.0, -322.3270898);
    assert_proche("134.5675673*456.8946571", 0.0, 134.5675673 * 456.8946571);
    assert_proche("134.5675673/456.8946571", 0.0, 134.5675673 / 456.8946571);
}

#[test]
fn modulo_et_puissance() {
    assert_proche("101%10", 0.0, 1.0);
    assert_proche("8.11^2.12", 0.0, 8.11f64.powf(2.12));

    for (a, b) in [(2.0, 10.0), (9.0, 0.5), (1.5, 3.25), (7.0, 0.0)] {
        assert_eq!(eval_ok(&format!("{a}^{b}"), 0.0), f64::powf(a, b));
    }
    for (a, b) in [(17.0, 5.0), (5.5, 2.0), (3.0, 7.0), (100.0, 0.75)] {
        assert_eq!(eval_ok(&format!("{a}%{b}"), 0.0), a % b);
    }
}

#[test]
fn priorites_conventionnelles() {
    assert_proche("1+2*3", 0.0, 7.0);
    assert_proche("2*3+1", 0.0, 7.0);
    assert_proche("10-4/2", 0.0, 8.0);
    assert_proche("2+3^2", 0.0, 11.0);
    assert_proche("2*3^2", 0.0, 18.0);
    assert_proche("1+7%4", 0.0, 4.0);
    assert_proche("8-3-2", 0.0, 3.0);
    assert_proche("64/4/2", 0.0, 8.0);
    assert_proche("5*(28-(9-(5-(1+1))))", 0.0, 110.0);
}

#[test]
fn puissance_associee_a_gauche() {
    assert_proche("2^3^2", 0.0, 64.0);
}

/* ------------------------ Notation scientifique ------------------------ */

#[test]
fn notation_scientifique() {
    assert_proche("3.96e+3", 0.0, 3960.0);
    assert_proche("3.96e3", 0.0, 3960.0);
    assert_proche("17.356e-4", 0.0, 0.0017356);
    assert_proche("2e3", 0.0, 2000.0);
    assert_proche("1e2*x", 3.0, 300.0);
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn plus_et_moins_unaires() {
    assert_proche("+156+344", 0.0, 500.0);
    assert_proche("-5+2", 0.0, -3.0);
    assert_proche("58-(-5)/2^3-12", 0.0, 46.625);
    assert_proche("(-(-(-10)))-(-(-10))", 6.0, -20.0);
    assert_proche("78-(-86.23)+9*tan(4)", 0.0, 78.0 + 86.23 + 9.0 * 4f64.tan());
    assert_proche("5*-3", 0.0, -15.0);
    assert_proche("2^-1", 0.0, 0.5);
}

#[test]
fn moins_unaire_avant_puissance() {
    // "~" lie plus fort que "^" : (-2)^2
    assert_proche("-2^2", 0.0, 4.0);
}

#[test]
fn regle_historique_operateur_suivant() {
    // '+' suivi de '-' devient unaire : deux opérandes non reliés
    assert_invalide("5+-3");
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn fonctions_unaires() {
    let cas: [(&str, fn(f64) -> f64, f64); 9] = [
        ("cos", f64::cos, 2.6),
        ("sin", f64::sin, 2.6),
        ("tan", f64::tan, 2.6),
        ("ln", f64::ln, 2.6),
        ("log", f64::log10, 2.6),
        ("asin", f64::asin, 0.5),
        ("acos", f64::acos, 0.5),
        ("atan", f64::atan, 0.5),
        ("sqrt", f64::sqrt, 115.6),
    ];
    for (nom, f, a) in cas {
        assert_eq!(eval_ok(&format!("{nom}({a})"), 0.0), f(a), "{nom}");
    }
    assert_proche("cos(2.6)", 0.0, -0.8568889);
    assert_proche("log(2.6)", 0.0, 0.4149733);
}

#[test]
fn compositions() {
    assert_proche("3*sin(cos(tan(10)))", 0.0, 3.0 * 10f64.tan().cos().sin());
    assert_proche(
        "58*5^8/6+sqrt(45*sin(0.66))",
        0.0,
        58.0 * 5f64.powf(8.0) / 6.0 + (45.0 * 0.66f64.sin()).sqrt(),
    );
}

#[test]
fn identite_trigonometrique() {
    assert_proche("cos(5)^2+sin(5)^2", 0.0, 1.0);
    assert_proche("sin(5)^2+cos(5)^2", 0.0, 1.0);
    for x in [-7.25, -1.0, 0.0, 0.3, 2.0, 42.0, 1e4] {
        assert_proche("cos(x)^2+sin(x)^2", x, 1.0);
    }
}

/* ------------------------ Variable ------------------------ */

#[test]
fn variable_libre() {
    assert_eq!(eval_ok("x^x", 8.0), 16_777_216.0);
    assert_proche("cos(x)-sin(x)", 4.0, 4f64.cos() - 4f64.sin());
    assert_proche("ln(x)*cos(x)", 6.0, 6f64.ln() * 6f64.cos());
    assert_proche("-x", 2.5, -2.5);
    // valeur pleine précision, pas d’arrondi intermédiaire
    assert_eq!(eval_ok("x", 0.123456789012), 0.123456789012);
}

/* ------------------------ IEEE : pas des erreurs ------------------------ */

#[test]
fn infinis_et_nan() {
    assert_eq!(eval_ok("1/0", 0.0), f64::INFINITY);
    assert_eq!(eval_ok("-1/0", 0.0), f64::NEG_INFINITY);
    assert!(eval_ok("0/0", 0.0).is_nan());
    assert!(eval_ok("sqrt(-1.0)", 0.0).is_nan());
    assert!(eval_ok("ln(-1)", 0.0).is_nan());
    assert!(eval_ok("asin(2)", 0.0).is_nan());
    assert_eq!(eval_ok("log(0)", 0.0), f64::NEG_INFINITY);
    assert!(eval_ok("5%0", 0.0).is_nan());
}

/* ------------------------ Entrées refusées ------------------------ */

#[test]
fn entrees_invalides() {
    for s in [
        "",
        "2+(4-5))",
        ")",
        "()",
        "cos",
        "coss(6)",
        "6.7.0-6",
        "6e*5",
        "e+5-6",
        "cos(5)e5-6",
        "*5",
        "1 + 2",
        "2x",
        "5+",
        "cos()+1",
    ] {
        assert_invalide(s);
    }
}

#[test]
fn longueur_260_refusee() {
    assert_invalide(&"0".repeat(260));
    assert_invalide(&format!("1+{}", "1".repeat(258)));
}

#[test]
fn parenthese_orpheline_finit_en_erreur() {
    // Comptes égaux mais ordre faux : la validation laisse passer,
    // la '(' restante atteint l’évaluateur et l’expression est refusée.
    for s in [")5(", "1)+(2", ")(1)(", "2)*(x"] {
        assert!(valider_entree(s).is_ok(), "{s}");
        assert_invalide(s);
    }
}

#[test]
fn erreur_porte_une_raison() {
    let e = evaluer("coss(6)", 0.0).unwrap_err();
    assert!(e.raison().contains("coss"), "{e}");
    assert!(e.to_string().starts_with("expression invalide"));
}
