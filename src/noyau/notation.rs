// src/noyau/notation.rs
//
// Notation scientifique : "3.96e3" -> "3.96*10^3"
// ---------------------------------------------
// On ne crée pas de littéral flottant dédié : le 'e' devient un produit
// par une puissance de 10, et le reste du pipeline (priorités, moins
// unaire) s’en occupe.
//
// Règles pour chaque 'e' :
// - caractère précédent : un chiffre
// - caractère suivant  : un chiffre, '+' ou '-'
// Sinon : expression invalide.

use super::erreur::{ErreurEval, Resultat};

const REMPLACEMENT: &str = "*10^";

pub fn normaliser_scientifique(entree: &str) -> Resultat<String> {
    let mut s = entree.to_string();
    let mut depart = 0;

    while let Some(rel) = s[depart..].find('e') {
        let pos = depart + rel;
        let octets = s.as_bytes();

        let prec_ok = pos >= 1 && octets[pos - 1].is_ascii_digit();
        let suiv_ok = octets
            .get(pos + 1)
            .is_some_and(|&c| c.is_ascii_digit() || c == b'+' || c == b'-');

        if !prec_ok || !suiv_ok {
            return Err(ErreurEval::invalide(format!(
                "notation scientifique mal formée (position {pos})"
            )));
        }

        s.replace_range(pos..pos + 1, REMPLACEMENT);
        depart = pos + REMPLACEMENT.len();
    }

    Ok(s)
}
