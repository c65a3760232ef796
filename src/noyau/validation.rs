//! Contrôles globaux sur la chaîne brute, avant tout découpage.

use super::erreur::{ErreurEval, Resultat};

/// Longueur maximale acceptée (en caractères ASCII).
pub const LONGUEUR_MAX: usize = 255;

/// Variable libre.
pub const VARIABLE: u8 = b'x';

fn caractere_permis(c: u8) -> bool {
    c.is_ascii_digit()
        || c.is_ascii_lowercase()
        || matches!(c, b'.' | b'(' | b')' | b'+' | b'-' | b'*' | b'/' | b'^' | b'%')
}

/// Refuse l’entrée si l’une des règles suivantes échoue :
/// - longueur dans [1, 255]
/// - autant de '(' que de ')'
/// - au moins un chiffre ou la variable `x`
/// - premier caractère différent de '*', '/', '^', '%'
/// - alphabet limité (chiffres, minuscules, opérateurs, parenthèses, '.')
pub fn valider_entree(entree: &str) -> Resultat<()> {
    let octets = entree.as_bytes();

    if octets.is_empty() {
        return Err(ErreurEval::invalide("entrée vide"));
    }
    if octets.len() > LONGUEUR_MAX {
        return Err(ErreurEval::invalide(format!(
            "entrée trop longue ({} > {LONGUEUR_MAX})",
            octets.len()
        )));
    }

    // non-ASCII compris : on balaie par char pour afficher le bon symbole
    if let Some(c) = entree
        .chars()
        .find(|c| !c.is_ascii() || !caractere_permis(*c as u8))
    {
        return Err(ErreurEval::invalide(format!("caractère inattendu: '{c}'")));
    }

    let ouvrantes = octets.iter().filter(|&&c| c == b'(').count();
    let fermantes = octets.iter().filter(|&&c| c == b')').count();
    if ouvrantes != fermantes {
        return Err(ErreurEval::invalide("parenthèses non équilibrées"));
    }

    if !octets.iter().any(|&c| c.is_ascii_digit() || c == VARIABLE) {
        return Err(ErreurEval::invalide("ni chiffre ni variable"));
    }

    if matches!(octets[0], b'*' | b'/' | b'^' | b'%') {
        return Err(ErreurEval::invalide("opérateur binaire en tête"));
    }

    Ok(())
}
