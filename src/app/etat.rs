//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, x, résultat, erreur,
//! démarche, fenêtre de tracé, courbe) et offrir des opérations simples
//! (DEL/AC, saisie de symboles, dépôt de résultats) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau est appelé depuis vue.rs).
//! - Actions déterministes, sans effet de bord caché.

use super::courbe::{FenetreTrace, Segment};

/// Noms de fonctions : un clic insère "nom(".
pub const FONCTIONS: [&str; 9] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "ln", "log", "sqrt",
];

/// Opérateurs qui se remplacent l’un l’autre s’ils sont tapés à la suite.
const OPERATEURS_REMPLACABLES: &str = "+-*/";

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub normalisee: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub x: f64,

    // --- sorties ---
    pub resultat: String, // valeur formatée, ou SYMBOLE_ERREUR
    pub erreur: String,   // raison détaillée (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- tracé ---
    pub fenetre: FenetreTrace,
    pub courbe: Vec<Segment>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            x: 0.0,
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            fenetre: FenetreTrace::default(),
            courbe: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + courbe).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.courbe.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère (un "sin(" se retire d’un coup).
    pub fn backspace_entree(&mut self) {
        // le plus long d’abord : "asin(" avant "sin("
        let motif = FONCTIONS
            .iter()
            .map(|f| format!("{f}("))
            .filter(|m| self.entree.ends_with(m.as_str()))
            .max_by_key(String::len);

        match motif {
            Some(m) => {
                let n = self.entree.len() - m.len();
                self.entree.truncate(n);
            }
            None => {
                self.entree.pop();
            }
        }
        self.focus_entree = true;
    }

    /// Ajoute un symbole de bouton à l’entrée.
    ///
    /// - fonction : "nom("
    /// - deux opérateurs + - * / à la suite : le second remplace le premier
    pub fn inserer(&mut self, symbole: &str) {
        let est_op = |s: &str| s.len() == 1 && OPERATEURS_REMPLACABLES.contains(s);

        if est_op(symbole)
            && self
                .entree
                .chars()
                .last()
                .is_some_and(|c| OPERATEURS_REMPLACABLES.contains(c))
        {
            self.entree.pop();
        }

        self.entree.push_str(symbole);
        if FONCTIONS.contains(&symbole) {
            self.entree.push('(');
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur d’évaluation.
    ///
    /// Le résultat affiche le marqueur d’erreur ; la démarche est effacée
    /// (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, marqueur: &str, msg: impl Into<String>) {
        self.resultat = marqueur.to_string();
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur formatée + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer une courbe (ou l’effacer en cas d’erreur).
    pub fn set_courbe(&mut self, courbe: Vec<Segment>) {
        self.courbe = courbe;
        self.focus_entree = true;
    }

    /// Garde-fou : fenêtre toujours traçable.
    pub fn corriger_fenetre(&mut self) {
        self.fenetre.corriger();
    }
}
