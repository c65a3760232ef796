//! Erreur unique du noyau.
//!
//! Toute entrée structurellement invalide finit ici ; les cas numériques
//! (division par zéro, racine d’un négatif…) restent des valeurs IEEE.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),
}

impl ErreurEval {
    pub fn invalide(raison: impl Into<String>) -> Self {
        Self::ExpressionInvalide(raison.into())
    }

    /// Raison lisible (sans le préfixe).
    pub fn raison(&self) -> &str {
        match self {
            Self::ExpressionInvalide(r) => r,
        }
    }
}

pub type Resultat<T> = std::result::Result<T, ErreurEval>;
