//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - erreur.rs     : ErreurEval (unique type d’erreur)
//! - table.rs      : priorités des opérateurs / fonctions (statique)
//! - validation.rs : contrôles globaux sur la chaîne brute
//! - notation.rs   : "3.96e3" -> "3.96*10^3"
//! - jetons.rs     : Jeton + affichage
//! - rpn.rs        : balayage + shunting-yard (x substitué)
//! - eval.rs       : pile RPN + pipeline complet
//! - format.rs     : affichage d’un résultat (%g, 8 chiffres)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod notation;
pub mod rpn;
pub mod table;
pub mod validation;

#[cfg(test)]
mod tests_calcul;


// API publique minimale
pub use erreur::{ErreurEval, Resultat};
pub use eval::{evaluer, evaluer_avec_demarche, Demarche};
pub use format::{formater_resultat, SYMBOLE_ERREUR};
