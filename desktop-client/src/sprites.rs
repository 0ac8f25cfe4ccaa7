use common::games::rps::Choice;
use eframe::egui;
use image::ImageFormat;

pub struct Sprites {
    rock: egui::TextureHandle,
    paper: egui::TextureHandle,
    scissors: egui::TextureHandle,
}

impl Sprites {
    pub const SIDE: u32 = 200;

    pub fn load(ctx: &egui::Context) -> Result<Self, String> {
        Ok(Self {
            rock: Self::load_texture(ctx, "rock", include_bytes!("../assets/rock.png"))?,
            paper: Self::load_texture(ctx, "paper", include_bytes!("../assets/paper.png"))?,
            scissors: Self::load_texture(ctx, "scissors", include_bytes!("../assets/scissors.png"))?,
        })
    }

    fn load_texture(
        ctx: &egui::Context,
        name: &str,
        bytes: &[u8],
    ) -> Result<egui::TextureHandle, String> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| format!("Invalid {} sprite: {}", name, e))?
            .resize_exact(Self::SIDE, Self::SIDE, image::imageops::FilterType::Triangle)
            .to_rgba8();

        let size = [img.width() as usize, img.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
        Ok(ctx.load_texture(name, color_image, Default::default()))
    }

    pub fn for_choice(&self, choice: Choice) -> &egui::TextureHandle {
        match choice {
            Choice::Rock => &self.rock,
            Choice::Paper => &self.paper,
            Choice::Scissors => &self.scissors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_sprites_decode() {
        let ctx = egui::Context::default();
        let sprites = Sprites::load(&ctx).unwrap();

        for choice in Choice::ALL {
            let _ = sprites.for_choice(choice);
        }
    }
}
