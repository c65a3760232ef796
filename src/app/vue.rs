// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Valeur de x + fenêtre de tracé éditables
//
// Note :
// - Le tracé est dessiné au Painter (pas de dépendance de plot en plus)

use eframe::egui;
use log::{info, warn};

use calculatrice_sci::noyau::{evaluer_avec_demarche, formater_resultat, SYMBOLE_ERREUR};

use super::courbe::echantillonner;
use super::etat::{AppCalc, Demarche, FONCTIONS};

/// Hauteur de la zone de tracé (pixels).
const HAUTEUR_TRACE: f32 = 260.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_trace(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3.96e3*x, cos(x)^2+sin(x)^2, sqrt(-1)")
                .id_source("entree_edit")
                .char_limit(calculatrice_sci::noyau::validation::LONGUEUR_MAX)
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.add(
                egui::DragValue::new(&mut self.x)
                    .speed(0.1)
                    .prefix("x = "),
            );

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        // Opérateurs, parenthèses, variable
        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/", "^", "%", "x", "e"] {
                self.bouton_insert(ui, s);
            }
        });

        // Fonctions
        ui.horizontal_wrapped(|ui| {
            for f in FONCTIONS {
                self.bouton_insert(ui, f);
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", "x"]] {
                    for s in ligne {
                        self.bouton_insert(ui, s);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", "demarche_norm", &self.demarche.normalisee);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_trace(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let f = &mut self.fenetre;
            let mut change = false;
            change |= ui
                .add(egui::DragValue::new(&mut f.x_min).speed(0.5).prefix("x min "))
                .changed();
            change |= ui
                .add(egui::DragValue::new(&mut f.x_max).speed(0.5).prefix("x max "))
                .changed();
            change |= ui
                .add(egui::DragValue::new(&mut f.y_min).speed(0.5).prefix("y min "))
                .changed();
            change |= ui
                .add(egui::DragValue::new(&mut f.y_max).speed(0.5).prefix("y max "))
                .changed();
            if change {
                self.corriger_fenetre();
            }

            let tracer = ui.add_sized([72.0, 28.0], egui::Button::new("Tracer"));
            if tracer.clicked() {
                self.trace_via_noyau();
            }
        });

        ui.add_space(6.0);
        self.dessiner_courbe(ui);
    }

    /// Dessin : fond, axes (si visibles), segments.
    fn dessiner_courbe(&self, ui: &mut egui::Ui) {
        let taille = egui::vec2(ui.available_width(), HAUTEUR_TRACE);
        let (resp, painter) = ui.allocate_painter(taille, egui::Sense::hover());
        let rect = resp.rect;
        let painter = painter.with_clip_rect(rect);

        painter.rect_filled(rect, egui::CornerRadius::ZERO, ui.visuals().extreme_bg_color);

        let f = self.fenetre;
        let vers_ecran = |x: f64, y: f64| -> egui::Pos2 {
            let px = rect.left() + ((x - f.x_min) / (f.x_max - f.x_min)) as f32 * rect.width();
            let py = rect.bottom() - ((y - f.y_min) / (f.y_max - f.y_min)) as f32 * rect.height();
            egui::pos2(px, py)
        };

        let axes = ui.visuals().widgets.noninteractive.bg_stroke;
        if f.x_min <= 0.0 && 0.0 <= f.x_max {
            painter.line_segment([vers_ecran(0.0, f.y_min), vers_ecran(0.0, f.y_max)], axes);
        }
        if f.y_min <= 0.0 && 0.0 <= f.y_max {
            painter.line_segment([vers_ecran(f.x_min, 0.0), vers_ecran(f.x_max, 0.0)], axes);
        }

        let trait_courbe = egui::Stroke::new(1.5, egui::Color32::LIGHT_BLUE);
        for segment in &self.courbe {
            let points: Vec<egui::Pos2> = segment.iter().map(|p| vers_ecran(p[0], p[1])).collect();
            if points.len() >= 2 {
                painter.add(egui::Shape::line(points, trait_courbe));
            }
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.inserer(symbole);
        }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match evaluer_avec_demarche(&self.entree, self.x) {
            Ok((v, d)) => {
                let d_ui = Demarche {
                    normalisee: d.normalisee,
                    rpn: d.rpn,
                };
                self.set_resultat(formater_resultat(v), d_ui);
            }
            Err(e) => {
                warn!("évaluation refusée: {e}");
                self.set_erreur(SYMBOLE_ERREUR, e.to_string());
            }
        }
    }

    /// Échantillonne la courbe sur la fenêtre courante.
    fn trace_via_noyau(&mut self) {
        match echantillonner(&self.entree, &self.fenetre) {
            Ok(courbe) => {
                info!(
                    "tracé {:?} : {} segment(s), {} point(s)",
                    self.entree,
                    courbe.len(),
                    courbe.iter().map(Vec::len).sum::<usize>()
                );
                self.erreur.clear();
                self.set_courbe(courbe);
            }
            Err(e) => {
                warn!("tracé refusé: {e}");
                self.set_erreur("plot error", e.to_string());
                self.set_courbe(Vec::new());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ResetTotal,
    Backspace,
}
