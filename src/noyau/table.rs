// src/noyau/table.rs
//
// Table des priorités (opérateurs + fonctions)
// -------------------------------------------
// Donnée statique, jamais modifiée : partageable entre threads sans verrou.
// Plus la priorité est haute, plus le symbole lie fort.
// Les nombres ont la priorité 0 (ils n’apparaissent pas ici).

/// Symbole interne du moins unaire.
pub const MOINS_UNAIRE: &str = "~";

static TABLE: [(&str, u8); 18] = [
    (")", 6),
    ("(", 6),
    ("cos", 5),
    ("sin", 5),
    ("tan", 5),
    ("acos", 5),
    ("asin", 5),
    ("atan", 5),
    ("ln", 5),
    ("log", 5),
    (MOINS_UNAIRE, 4),
    ("sqrt", 3),
    ("^", 3),
    ("%", 2),
    ("*", 2),
    ("/", 2),
    ("-", 1),
    ("+", 1),
];

/// Cherche un symbole ; renvoie la clé statique et sa priorité.
///
/// Un symbole absent n’a PAS de priorité par défaut : l’appelant doit
/// refuser l’expression.
pub fn chercher(symbole: &str) -> Option<(&'static str, u8)> {
    TABLE.iter().copied().find(|(s, _)| *s == symbole)
}

/// Opérateurs binaires (un seul caractère) reconnus au balayage.
pub fn est_operateur(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'*' | b'/' | b'^' | b'%')
}
