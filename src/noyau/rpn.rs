// src/noyau/rpn.rs
//
// Balayage + shunting-yard -> RPN
// -------------------------------
// Un seul passage gauche -> droite sur la chaîne normalisée.
//
// État de session (recréé à chaque appel, rien ne survit) :
// - accumulateur de nombre (chiffres + '.') et compteur de points
// - accumulateur de nom de fonction (lettres)
// - pile d’attente (opérateurs, fonctions, '(')
// - sortie RPN, en ordre final (ajout en queue, pas d’inversion)
//
// Règles par caractère :
// - chiffre / '.' : prolonge le nombre
// - autre caractère : vide le nombre en cours, puis le nom en cours
// - 'x' : remplacé tout de suite par la valeur de la variable
// - lettre : prolonge le nom de fonction
// - '+' '-' '*' '/' '^' '%' : détection du unaire, puis dépilement par priorité
// - '(' empile ; ')' dépile jusqu’à '('
//
// NOTE:
// - '+' unaire est ignoré ; '-' unaire devient "~" (priorité 4), traité
//   comme une fonction par l’évaluateur.
// - Les fonctions sont empilées sans dépilement préalable.

use log::trace;

use super::erreur::{ErreurEval, Resultat};
use super::jetons::Jeton;
use super::table::{chercher, est_operateur, MOINS_UNAIRE};
use super::validation::VARIABLE;

struct Session<'a> {
    source: &'a [u8],
    x: f64,
    nombre: String,
    points: usize,
    fonction: String,
    attente: Vec<Jeton>,
    sortie: Vec<Jeton>,
}

/// Convertit une expression normalisée (sans 'e') en RPN, `x` substitué.
///
/// Exemple:
///   "cos(x)*2" avec x = 0
///   rpn: [Nombre(0), Fonction("cos"), Nombre(2), Operateur("*")]
pub fn vers_rpn(expression: &str, x: f64) -> Resultat<Vec<Jeton>> {
    let mut session = Session::new(expression, x);
    session.balayer()?;
    Ok(session.sortie)
}

impl<'a> Session<'a> {
    fn new(expression: &'a str, x: f64) -> Self {
        Self {
            source: expression.as_bytes(),
            x,
            nombre: String::new(),
            points: 0,
            fonction: String::new(),
            attente: Vec::new(),
            sortie: Vec::new(),
        }
    }

    fn balayer(&mut self) -> Resultat<()> {
        for i in 0..self.source.len() {
            let c = self.source[i];

            // 1) nombre
            if c.is_ascii_digit() || c == b'.' {
                if c == b'.' {
                    self.points += 1;
                }
                self.nombre.push(c as char);
            } else {
                self.vider_nombre()?;
            }

            // 2) variable : sortie directe
            if c == VARIABLE {
                self.sortie.push(Jeton::Nombre(self.x));
            }

            // 3) nom de fonction
            if c.is_ascii_alphabetic() && c != VARIABLE {
                self.fonction.push(c as char);
            } else {
                self.vider_fonction()?;
            }

            // 4) opérateurs
            if est_operateur(c) {
                self.operateur(i, c)?;
            }

            // 5) parenthèses
            match c {
                b'(' => self.attente.push(Jeton::ParG),
                b')' => self.fermer_parenthese(),
                _ => {}
            }
        }

        self.vider_nombre()?;
        self.vider_fonction()?;

        while let Some(op) = self.attente.pop() {
            self.sortie.push(op);
        }

        Ok(())
    }

    /// Nombre en cours -> sortie. Un seul point décimal autorisé.
    fn vider_nombre(&mut self) -> Resultat<()> {
        if self.nombre.is_empty() {
            return Ok(());
        }
        if self.points > 1 {
            return Err(ErreurEval::invalide(format!(
                "nombre à plusieurs points: {}",
                self.nombre
            )));
        }

        let v: f64 = self
            .nombre
            .parse()
            .map_err(|_| ErreurEval::invalide(format!("nombre invalide: {}", self.nombre)))?;

        self.sortie.push(Jeton::Nombre(v));
        self.nombre.clear();
        self.points = 0;
        Ok(())
    }

    /// Nom de fonction en cours -> pile d’attente (sans dépiler).
    fn vider_fonction(&mut self) -> Resultat<()> {
        if self.fonction.is_empty() {
            return Ok(());
        }

        let (nom, prio) = chercher(&self.fonction)
            .ok_or_else(|| ErreurEval::invalide(format!("fonction inconnue: {}", self.fonction)))?;

        self.attente.push(Jeton::Fonction(nom, prio));
        self.fonction.clear();
        Ok(())
    }

    /// Unaire si :
    /// - premier caractère
    /// - précédé de '(' ou d’un opérateur
    /// - suivi d’un opérateur (règle historique, cf. DESIGN.md)
    fn est_unaire(&self, i: usize) -> bool {
        if i == 0 {
            return true;
        }
        let prec = self.source[i - 1];
        if prec == b'(' || est_operateur(prec) {
            return true;
        }
        self.source.get(i + 1).is_some_and(|&c| est_operateur(c))
    }

    fn operateur(&mut self, i: usize, c: u8) -> Resultat<()> {
        let unaire = (c == b'+' || c == b'-') && self.est_unaire(i);

        let entrant = match c {
            b'+' if unaire => return Ok(()),
            b'-' if unaire => {
                let (s, p) = chercher(MOINS_UNAIRE)
                    .ok_or_else(|| ErreurEval::invalide("moins unaire absent de la table"))?;
                Jeton::Fonction(s, p)
            }
            _ => {
                let texte = [c];
                let texte = std::str::from_utf8(&texte)
                    .map_err(|_| ErreurEval::invalide("opérateur non ASCII"))?;
                let (s, p) = chercher(texte)
                    .ok_or_else(|| ErreurEval::invalide(format!("opérateur inconnu: {texte}")))?;
                Jeton::Operateur(s, p)
            }
        };

        // dépile tant que le sommet lie au moins aussi fort (hors '(')
        while let Some(sommet) = self.attente.last() {
            if sommet.est_par_g() || sommet.priorite() < entrant.priorite() {
                break;
            }
            if let Some(j) = self.attente.pop() {
                trace!("dépile {j} avant {entrant}");
                self.sortie.push(j);
            }
        }

        self.attente.push(entrant);
        Ok(())
    }

    /// ')' : dépile jusqu’à '(' et jette la '('.
    ///
    /// Pile vide sans '(' : rien à faire. La validation (même nombre de
    /// '(' et ')') rend ce cas inatteignable pour une entrée validée.
    fn fermer_parenthese(&mut self) {
        while let Some(j) = self.attente.pop() {
            if j.est_par_g() {
                return;
            }
            self.sortie.push(j);
        }
    }
}
