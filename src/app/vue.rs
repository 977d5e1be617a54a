// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Un seul formulaire :
// - champ "expression" (Enter ou "=" évalue)
// - écho de l’expression soumise, puis résultat OU erreur
// - pavé tactile (chiffres, opérateurs, e, p), focus redonné après clic

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2 + 3) * 4, -2 ^ 3, 2 * p")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus (sinon déclenchements “globaux”).
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/", "^", "e", "p"] {
                self.bouton_insert(ui, s);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", " "]] {
                    for s in ligne {
                        self.bouton_insert(ui, s);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        if self.soumise.is_empty() && self.erreur.is_empty() {
            return;
        }

        ui.label("Expression soumise :");
        Self::champ_monospace(ui, "soumise_out", &self.soumise);

        ui.add_space(6.0);

        if self.erreur.is_empty() {
            ui.label("Résultat :");
            Self::champ_monospace(ui, "resultat_out", &self.resultat);
        } else {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
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
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, to_insert: &str) {
        let label = if to_insert == " " { "␣" } else { to_insert };
        if ui.add_sized([46.0, 28.0], egui::Button::new(label)).clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
}
