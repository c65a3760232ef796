//! Noyau — évaluation (pipeline réel)
//!
//! validation -> notation scientifique -> RPN (x substitué) -> pile f64
//!
//! Chaque étape échoue tôt avec `ErreurEval` ; rien n’est conservé d’un
//! appel à l’autre, hors la table statique des priorités.

use log::debug;

use super::erreur::{ErreurEval, Resultat};
use super::jetons::{format_jetons, Jeton};
use super::notation::normaliser_scientifique;
use super::rpn::vers_rpn;
use super::validation::valider_entree;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    /// Expression après réécriture des 'e'.
    pub normalisee: String,
    /// RPN, jetons séparés par des espaces.
    pub rpn: String,
}

/// API publique : évalue `expression` pour la valeur `x` de la variable.
///
/// NaN et ±∞ sont des résultats légitimes (ex: "1/0", "sqrt(-1)") ;
/// seule une entrée mal formée produit une erreur.
pub fn evaluer(expression: &str, x: f64) -> Resultat<f64> {
    let (_, rpn) = preparer(expression, x)?;
    let v = evaluer_rpn(&rpn)?;
    debug!("{expression:?} (x = {x}) = {v}");
    Ok(v)
}

/// Comme `evaluer`, avec en plus la démarche (texte normalisé + RPN).
pub fn evaluer_avec_demarche(expression: &str, x: f64) -> Resultat<(f64, Demarche)> {
    let (normalisee, rpn) = preparer(expression, x)?;
    let demarche = Demarche {
        normalisee,
        rpn: format_jetons(&rpn),
    };
    let v = evaluer_rpn(&rpn)?;
    debug!("{expression:?} -> [{}] = {v}", demarche.rpn);
    Ok((v, demarche))
}

fn preparer(expression: &str, x: f64) -> Resultat<(String, Vec<Jeton>)> {
    valider_entree(expression)?;
    let normalisee = normaliser_scientifique(expression)?;
    let rpn = vers_rpn(&normalisee, x)?;
    debug!("normalisée: {normalisee:?}, {} jetons RPN", rpn.len());
    Ok((normalisee, rpn))
}

/// Évalue une suite RPN ordonnée.
///
/// - Nombre : empilé
/// - Opérateur binaire : dépile droite puis gauche
/// - Fonction : dépile un seul opérande
///
/// Il doit rester exactement une valeur à la fin.
pub fn evaluer_rpn(rpn: &[Jeton]) -> Resultat<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        match *jeton {
            Jeton::Nombre(v) => pile.push(v),

            Jeton::Operateur(op, _) => {
                let droite = depiler(&mut pile, op)?;
                let gauche = depiler(&mut pile, op)?;
                pile.push(binaire(op, gauche, droite)?);
            }

            Jeton::Fonction(nom, _) => {
                let a = depiler(&mut pile, nom)?;
                pile.push(unaire(nom, a)?);
            }

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurEval::invalide("parenthèse inattendue en RPN"));
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        [] => Err(ErreurEval::invalide("aucune valeur")),
        reste => Err(ErreurEval::invalide(format!(
            "{} valeurs non reliées",
            reste.len()
        ))),
    }
}

fn depiler(pile: &mut Vec<f64>, pour: &str) -> Resultat<f64> {
    pile.pop()
        .ok_or_else(|| ErreurEval::invalide(format!("opérande manquant pour {pour}")))
}

fn binaire(op: &str, a: f64, b: f64) -> Resultat<f64> {
    let v = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => a / b,
        "^" => a.powf(b),
        // fmod : signe du dividende, comme `%` sur f64
        "%" => a % b,
        _ => return Err(ErreurEval::invalide(format!("opérateur inconnu: {op}"))),
    };
    Ok(v)
}

fn unaire(nom: &str, a: f64) -> Resultat<f64> {
    let v = match nom {
        "cos" => a.cos(),
        "sin" => a.sin(),
        "tan" => a.tan(),
        "acos" => a.acos(),
        "asin" => a.asin(),
        "atan" => a.atan(),
        "sqrt" => a.sqrt(),
        "log" => a.log10(),
        "ln" => a.ln(),
        "~" => -a,
        _ => return Err(ErreurEval::invalide(format!("fonction inconnue: {nom}"))),
    };
    Ok(v)
}
