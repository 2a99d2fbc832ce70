//! Main application for the k-in-a-row GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::game_state::{GameMode, GameResult, GameState, Side, DEADLINE_CHOICES};
use super::theme::*;
use crate::GameConfig;

/// Presets offered in the Game menu
const PRESETS: [(&str, fn() -> GameConfig); 3] = [
    ("Connect Four", GameConfig::connect_four),
    ("Gomoku 15x15", GameConfig::gomoku),
    ("Tic-tac-toe", GameConfig::tic_tac_toe),
];

/// Main application
pub struct KinarowApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for KinarowApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameConfig::default(), GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl KinarowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn start_game(&mut self, game: GameConfig, mode: GameMode) {
        let deadline = self.state.deadline_ms();
        self.state = GameState::new(game, mode);
        self.state.set_deadline(deadline);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for (name, preset) in PRESETS {
                        ui.menu_button(name, |ui| {
                            let game = preset();
                            if ui.button("Play first vs AI").clicked() {
                                self.start_game(game, GameMode::PvE { human: Side::First });
                                ui.close_menu();
                            }
                            if ui.button("Play second vs AI").clicked() {
                                self.start_game(game, GameMode::PvE { human: Side::Second });
                                ui.close_menu();
                            }
                            if ui.button("Hotseat").clicked() {
                                self.start_game(game, GameMode::PvP { show_suggestions: false });
                                ui.close_menu();
                            }
                        });
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    ui.label(RichText::new("Deadline per move").color(TEXT_MUTED));
                    let mut deadline = self.state.deadline_ms();
                    for ms in DEADLINE_CHOICES {
                        ui.radio_value(&mut deadline, ms, format!("{ms} ms"));
                    }
                    if deadline != self.state.deadline_ms() {
                        self.state.set_deadline(deadline);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", human.name()),
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(format!("{} | {}", self.state.game.label(), mode_text));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over.clone() {
                    ui.add_space(10.0);
                    if self.render_game_over_card(ui, &result) {
                        self.state.reset();
                    }
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        let game = &self.state.game;
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(FIRST_PIECE));
            ui.label(RichText::new("●").size(20.0).color(SECOND_PIECE));
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} IN A ROW", game.k))
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let variant = if game.gravity { "gravity" } else { "free placement" };
            ui.label(
                RichText::new(format!("{}x{}, {}", game.cols, game.rows, variant))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.current_turn;
            let accent = match side {
                Side::First => FIRST_PIECE,
                Side::Second => SECOND_PIECE,
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(side.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                // Colour against the configured deadline
                let budget = self.state.deadline_ms() as f32 / 1000.0;
                let secs = elapsed.as_secs_f32();
                let color = if secs < budget * 0.6 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(
                    RichText::new(format!("{secs:.2}s"))
                        .size(28.0)
                        .strong()
                        .color(color),
                );
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!(
                        "Last AI: {:.3}s (deadline {} ms)",
                        ai_time.as_secs_f32(),
                        self.state.deadline_ms()
                    ))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = RichText::new("Undo").size(12.0).color(TEXT_PRIMARY);
                    if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                if let GameMode::PvP { .. } = self.state.mode {
                    btn_frame.show(ui, |ui| {
                        let label = RichText::new("Hint").size(12.0).color(TEXT_PRIMARY);
                        if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(result.search_type.to_string())
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(
                            RichText::new(format!("Score: {}", score_text(result.score)))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.label(
                            RichText::new(format!("Depth: {}", result.depth))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(reason) = result.stop_reason {
                    ui.label(
                        RichText::new(format!("Stopped: {reason}"))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> {pos}"))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }

                if result.expected_path.len() > 1 {
                    let path: Vec<String> =
                        result.expected_path.iter().map(ToString::to_string).collect();
                    ui.label(
                        RichText::new(format!("Expected: {}", path.join(" -> ")))
                            .size(10.0)
                            .color(PATH_MARKER),
                    );
                }
            });
    }

    /// Returns true when "New Game" was clicked.
    fn render_game_over_card(&self, ui: &mut egui::Ui, result: &GameResult) -> bool {
        let mut new_game = false;
        let (headline, accent) = match result.winner {
            Some(Side::First) => (format!("{} WINS!", Side::First.name().to_uppercase()), FIRST_PIECE),
            Some(Side::Second) => (format!("{} WINS!", Side::Second.name().to_uppercase()), SECOND_PIECE),
            None => ("DRAW".to_string(), TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(accent));

                    if result.winning_line.is_some() {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("by {} in a row", self.state.game.k))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY);
                            if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                                new_game = true;
                            }
                        });
                });
            });

        new_game
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("!").size(14.0).strong());
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = {
                let state = &self.state;
                let show_path = self.show_debug && !state.is_ai_thinking();
                let overlay = Overlay {
                    current_turn: state.current_turn.piece(),
                    last_move: state.last_move,
                    suggested_move: state.suggested_move,
                    winning_line: state
                        .game_over
                        .as_ref()
                        .and_then(|r| r.winning_line.as_deref()),
                    expected_path: if show_path { state.expected_path() } else { &[] },
                    game_over: state.game_over.is_some(),
                };
                self.board_view
                    .show(ui, &state.board, state.game.gravity, &overlay)
            };

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_stone(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            if let GameMode::PvP { .. } = self.state.mode {
                self.state.request_suggestion();
            }
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

/// Score with the win sentinels spelled out
fn score_text(score: i32) -> String {
    match score {
        crate::eval::Score::MAX_WIN => "win".to_string(),
        crate::eval::Score::MIN_WIN => "loss".to_string(),
        s => s.to_string(),
    }
}

impl eframe::App for KinarowApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer ticking
        if self.state.is_ai_thinking() || self.state.game_over.is_none() {
            ctx.request_repaint();
        }
    }
}
