// src/noyau/jetons.rs

use std::fmt;

/// Jeton produit par le balayage.
///
/// Les symboles pointent toujours vers les clés statiques de `table`,
/// donc aucun jeton ne porte un nom absent de la table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    // Binaire : + - * / ^ %
    Operateur(&'static str, u8),
    // Unaire : cos, sin, …, sqrt, et le moins unaire "~"
    Fonction(&'static str, u8),
    ParG,
    ParD,
}

impl Jeton {
    /// Priorité du jeton ; 0 pour un nombre (l’évaluateur s’en sert pour
    /// distinguer opérande et opérateur).
    pub fn priorite(&self) -> u8 {
        match self {
            Jeton::Nombre(_) => 0,
            Jeton::Operateur(_, p) | Jeton::Fonction(_, p) => *p,
            Jeton::ParG | Jeton::ParD => 6,
        }
    }

    pub fn est_par_g(&self) -> bool {
        matches!(self, Jeton::ParG)
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(v) => write!(f, "{v}"),
            Jeton::Operateur(s, _) | Jeton::Fonction(s, _) => f.write_str(s),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
