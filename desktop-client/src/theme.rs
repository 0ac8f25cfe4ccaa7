use common::games::rps::{Choice, Outcome};
use egui::{Color32, Context, Visuals};

// Fixed light theme.
pub const BACKGROUND: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
pub const TEXT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const TITLE: Color32 = Color32::from_rgb(0x19, 0x76, 0xd2);
pub const WIN: Color32 = Color32::from_rgb(0x38, 0x8e, 0x3c);
pub const LOSE: Color32 = Color32::from_rgb(0xd3, 0x2f, 0x2f);
pub const TIE: Color32 = Color32::from_rgb(0x02, 0x88, 0xd1);
pub const SCORE: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);

pub fn button_fill(choice: Choice) -> Color32 {
    match choice {
        Choice::Rock => Color32::from_rgb(0x64, 0xb5, 0xf6),
        Choice::Paper => Color32::from_rgb(0x81, 0xc7, 0x84),
        Choice::Scissors => Color32::from_rgb(0xe5, 0x73, 0x73),
    }
}

pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Tie => TIE,
        Outcome::PlayerWin => WIN,
        Outcome::OpponentWin => LOSE,
    }
}

pub fn apply(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.override_text_color = Some(TEXT);
    ctx.set_visuals(visuals);
}
