// src/noyau/format.rs
//
// Affichage d’un résultat f64, style "%g" à 8 chiffres significatifs :
// - exposant décimal dans [-4, 8) : notation fixe
// - sinon : d.ddddddde±XX
// - zéros finaux retirés
// - nan / inf / -inf pour les valeurs IEEE spéciales

/// Chiffres significatifs affichés.
pub const CHIFFRES: usize = 8;

/// Ce que l’interface affiche quand l’évaluation échoue.
pub const SYMBOLE_ERREUR: &str = "calc_error";

pub fn formater_resultat(v: f64) -> String {
    if v.is_nan() {
        return "nan".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if v == 0.0 {
        return "0".into();
    }

    // L’exposant se lit APRÈS arrondi (99999999.5 -> 1e+08).
    let sci = format!("{:.*e}", CHIFFRES - 1, v);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant < -4 || exposant >= CHIFFRES as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        format!(
            "{}e{signe}{:02}",
            retirer_zeros(mantisse),
            exposant.unsigned_abs()
        )
    } else {
        let decimales = (CHIFFRES as i32 - 1 - exposant).max(0) as usize;
        retirer_zeros(&format!("{v:.decimales$}")).to_string()
    }
}

fn retirer_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
