use std::time::{Duration, Instant};

use common::config::Config;
use common::games::SessionRng;
use common::games::rps::{Choice, Outcome, RoundResult, RpsSession};
use common::log;
use eframe::egui;

use crate::sprites::Sprites;
use crate::theme;

const SPRITE_SIZE: f32 = 200.0;
const SPRITE_GAP: f32 = 40.0;

/// Explicit state of the deferred reveal. All transitions happen on the
/// UI thread; `Thinking` holds the deadline after which the round resolves.
#[derive(Clone, Copy)]
enum RoundPhase {
    Idle,
    Thinking { player: Choice, reveal_at: Instant },
    Revealed { result: RoundResult },
}

pub struct RpsApp {
    session: RpsSession,
    rng: SessionRng,
    sprites: Sprites,
    phase: RoundPhase,
    thinking_delay: Duration,
}

impl RpsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Result<Self, String> {
        Self::with_context(&cc.egui_ctx, config)
    }

    fn with_context(ctx: &egui::Context, config: Config) -> Result<Self, String> {
        theme::apply(ctx);
        let sprites = Sprites::load(ctx)?;

        Ok(Self {
            session: RpsSession::new(),
            rng: SessionRng::from_random(),
            sprites,
            phase: RoundPhase::Idle,
            thinking_delay: Duration::from_millis(config.thinking_delay_ms),
        })
    }

    fn start_round(&mut self, player: Choice) {
        self.phase = RoundPhase::Thinking {
            player,
            reveal_at: Instant::now() + self.thinking_delay,
        };
    }

    /// Resolves the pending round once its deadline has passed. Returns
    /// how long to wait before the next repaint while still thinking.
    fn tick(&mut self) -> Option<Duration> {
        let RoundPhase::Thinking { player, reveal_at } = self.phase else {
            return None;
        };

        let now = Instant::now();
        if now < reveal_at {
            return Some(reveal_at - now);
        }

        let result = self.session.play_round(player, &mut self.rng);
        log!(
            "Round {}: {} vs {} -> {:?}",
            self.session.rounds_played(),
            result.player,
            result.opponent,
            result.outcome
        );
        self.phase = RoundPhase::Revealed { result };
        None
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let thinking = matches!(self.phase, RoundPhase::Thinking { .. });
        let button_size = egui::vec2(110.0, 36.0);
        let total_width = button_size.x * 3.0 + ui.spacing().item_spacing.x * 2.0;

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - total_width).max(0.0) / 2.0);
            for choice in Choice::ALL {
                let button = egui::Button::new(
                    egui::RichText::new(choice.name())
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(theme::button_fill(choice))
                .min_size(button_size);

                if ui.add_enabled(!thinking, button).clicked() {
                    self.start_round(choice);
                }
            }
        });
    }

    fn render_sprites(&self, ui: &mut egui::Ui) {
        let (player, opponent) = match self.phase {
            // Rock stands in as a placeholder before the first round.
            RoundPhase::Idle => (Some(Choice::Rock), None),
            RoundPhase::Thinking { player, .. } => (Some(player), None),
            RoundPhase::Revealed { result } => (Some(result.player), Some(result.opponent)),
        };

        let slot = egui::vec2(SPRITE_SIZE, SPRITE_SIZE);
        let total_width = slot.x * 2.0 + SPRITE_GAP;

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - total_width).max(0.0) / 2.0);
            self.render_sprite_slot(ui, player, slot);
            ui.add_space(SPRITE_GAP);
            self.render_sprite_slot(ui, opponent, slot);
        });
    }

    fn render_sprite_slot(&self, ui: &mut egui::Ui, choice: Option<Choice>, slot: egui::Vec2) {
        match choice {
            Some(choice) => {
                ui.add(
                    egui::Image::new(self.sprites.for_choice(choice)).fit_to_exact_size(slot),
                );
            }
            None => {
                ui.allocate_space(slot);
            }
        }
    }

    fn render_round_labels(&self, ui: &mut egui::Ui) {
        match self.phase {
            RoundPhase::Idle => {}
            RoundPhase::Thinking { player, .. } => {
                ui.label(egui::RichText::new(format!("You chose: {}", player)).size(14.0));
                ui.label(egui::RichText::new("Computer is thinking...").size(14.0));
            }
            RoundPhase::Revealed { result } => {
                ui.label(egui::RichText::new(format!("You chose: {}", result.player)).size(14.0));
                ui.label(
                    egui::RichText::new(format!("Computer chose: {}", result.opponent)).size(14.0),
                );
                ui.add_space(8.0);

                let text = match result.outcome {
                    Outcome::Tie => "It's a Tie!",
                    Outcome::PlayerWin => "You Win!",
                    Outcome::OpponentWin => "Computer Wins!",
                };
                ui.label(
                    egui::RichText::new(text)
                        .color(theme::outcome_color(result.outcome))
                        .size(20.0)
                        .strong(),
                );
            }
        }
    }
}

impl eframe::App for RpsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.tick() {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("Rock Paper Scissors")
                        .color(theme::TITLE)
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(12.0);

                self.render_buttons(ui);
                ui.add_space(16.0);
                self.render_sprites(ui);
                ui.add_space(8.0);
                self.render_round_labels(ui);

                ui.add_space(12.0);
                let scores = self.session.scores();
                ui.label(
                    egui::RichText::new(format!(
                        "Score: You {} - {} Computer",
                        scores.player, scores.opponent
                    ))
                    .color(theme::SCORE)
                    .size(16.0),
                );
            });
        });
    }
}
