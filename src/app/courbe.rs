//! src/app/courbe.rs
//!
//! Échantillonnage d’une courbe y = f(x) (sans dessin, sans egui).
//!
//! Contrats :
//! - Une évaluation par échantillon (le noyau ne garde rien entre deux appels).
//! - Une erreur du noyau annule tout le tracé.
//! - NaN / ±∞, ou un saut plus grand que la hauteur de la fenêtre, coupent
//!   la courbe en segments ; l’échantillon fautif est écarté.

use calculatrice_sci::noyau::{evaluer, Resultat};

/// Pas par défaut (comme le tracé d’origine).
pub const PAS_DEFAUT: f64 = 0.01;

/// Garde-fou : nombre d’échantillons par tracé (anti-gel).
pub const ECHANTILLONS_MAX: usize = 20_000;

/// Écart minimal entre bornes d’un même axe.
const ECART_MIN: f64 = 1.0;

/// Morceau continu de courbe : points [x, y].
pub type Segment = Vec<[f64; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FenetreTrace {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub pas: f64,
}

impl Default for FenetreTrace {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
            pas: PAS_DEFAUT,
        }
    }
}

impl FenetreTrace {
    /// Remet la fenêtre dans un état traçable :
    /// - max >= min + 1 sur chaque axe
    /// - pas > 0, et assez grand pour rester sous ECHANTILLONS_MAX
    pub fn corriger(&mut self) {
        if !self.x_min.is_finite() || !self.x_max.is_finite() {
            let d = Self::default();
            self.x_min = d.x_min;
            self.x_max = d.x_max;
        }
        if !self.y_min.is_finite() || !self.y_max.is_finite() {
            let d = Self::default();
            self.y_min = d.y_min;
            self.y_max = d.y_max;
        }

        if self.x_max < self.x_min + ECART_MIN {
            self.x_max = self.x_min + ECART_MIN;
        }
        if self.y_max < self.y_min + ECART_MIN {
            self.y_max = self.y_min + ECART_MIN;
        }

        if !(self.pas.is_finite() && self.pas > 0.0) {
            self.pas = PAS_DEFAUT;
        }
        let pas_min = (self.x_max - self.x_min) / ECHANTILLONS_MAX as f64;
        if self.pas < pas_min {
            self.pas = pas_min;
        }
    }

    /// Hauteur de la fenêtre : au-delà, deux points successifs sont disjoints.
    pub fn hauteur(&self) -> f64 {
        self.y_max - self.y_min
    }

    fn nb_echantillons(&self) -> usize {
        ((self.x_max - self.x_min) / self.pas).floor() as usize + 1
    }
}

/// Évalue `expression` sur toute la fenêtre et découpe en segments.
pub fn echantillonner(expression: &str, fenetre: &FenetreTrace) -> Resultat<Vec<Segment>> {
    let mut f = *fenetre;
    f.corriger();

    let mut segments = Vec::new();
    let mut courant: Segment = Vec::new();

    for k in 0..f.nb_echantillons() {
        let x = f.x_min + k as f64 * f.pas;
        if x > f.x_max {
            break;
        }

        let y = evaluer(expression, x)?;

        let saut = courant
            .last()
            .is_some_and(|p| (p[1] - y).abs() > f.hauteur());

        if !y.is_finite() || saut {
            if !courant.is_empty() {
                segments.push(std::mem::take(&mut courant));
            }
            continue;
        }

        courant.push([x, y]);
    }

    if !courant.is_empty() {
        segments.push(courant);
    }

    Ok(segments)
}
