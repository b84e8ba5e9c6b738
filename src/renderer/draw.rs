//! Draw list generation
//!
//! Turns a `GameState` into a flat list of sprite and text commands. Presenters
//! only ever see this list; only active entities make it in.

use glam::Vec2;

use super::assets::{SpriteAsset, TextureHandle, TextureStore};
use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::{Entity, GamePhase, GameState, MenuItem};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const CYAN: [u8; 4] = [0, 255, 255, 255];
const RED: [u8; 4] = [255, 0, 0, 255];

/// Clear color behind everything
pub const CLEAR_COLOR: [u8; 4] = [10, 10, 30, 255];

/// A single draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        asset: SpriteAsset,
        texture: TextureHandle,
        /// Top-left corner
        pos: Vec2,
        size: Vec2,
        tint: [u8; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        size: u32,
        color: [u8; 4],
        /// Position is the text centre rather than its top-left
        centered: bool,
    },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub phase: GamePhase,
    pub clear: [u8; 4],
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    fn new(phase: GamePhase) -> Self {
        Self {
            phase,
            clear: CLEAR_COLOR,
            commands: Vec::new(),
        }
    }

    fn sprite(&mut self, textures: &TextureStore, asset: SpriteAsset, center: Vec2, tint: [u8; 4]) {
        let texture = textures.sprite(asset);
        let size = Vec2::new(texture.width as f32, texture.height as f32);
        self.commands.push(DrawCommand::Sprite {
            asset,
            texture,
            pos: center - size * 0.5,
            size,
            tint,
        });
    }

    /// Active entities only, with the sprite and base color their kind maps to
    fn entity(&mut self, textures: &TextureStore, entity: &impl Entity) {
        if !entity.is_active() {
            return;
        }
        let asset = SpriteAsset::from(entity.kind());
        self.sprite(textures, asset, entity.pos(), asset.color());
    }

    fn text(&mut self, text: impl Into<String>, pos: Vec2, size: u32, color: [u8; 4], centered: bool) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            size,
            color,
            centered,
        });
    }

    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }

    pub fn sprites_of(&self, wanted: SpriteAsset) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { asset, .. } if *asset == wanted))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Build the draw list for the current phase
pub fn build_draw_list(state: &GameState, textures: &TextureStore) -> DrawList {
    let mut list = DrawList::new(state.phase);
    match state.phase {
        GamePhase::Menu => draw_menu(&mut list, state),
        GamePhase::Playing => draw_playing(&mut list, state, textures),
        GamePhase::GameOver => draw_game_over(&mut list, state),
    }
    list
}

fn draw_menu(list: &mut DrawList, state: &GameState) {
    let center_x = VIEWPORT_WIDTH / 2.0;
    list.text("SPACE SHOOTER", Vec2::new(center_x, 150.0), 60, CYAN, true);

    for (item, line) in MenuItem::ALL.iter().zip(state.menu_lines()) {
        let color = if *item == state.menu_selection {
            YELLOW
        } else {
            WHITE
        };
        let y = 300.0 + item.index() as f32 * 60.0;
        list.text(line, Vec2::new(center_x, y), 30, color, true);
    }
}

fn draw_playing(list: &mut DrawList, state: &GameState, textures: &TextureStore) {
    for star in state.backdrop.iter() {
        let b = star.brightness;
        // Stars and particles are drawn from their top-left corner
        list.sprite(textures, SpriteAsset::Star, star.pos + Vec2::ONE, [b, b, b, 255]);
    }

    if let Some(player) = state.player.as_ref() {
        list.entity(textures, player);
    }
    for projectile in &state.projectiles {
        list.entity(textures, projectile);
    }
    for hostile in &state.hostiles {
        list.entity(textures, hostile);
    }
    for particle in state.particles.iter().filter(|p| p.is_active()) {
        let alpha = (particle.alpha() * 255.0) as u8;
        list.sprite(
            textures,
            SpriteAsset::Particle,
            particle.pos + Vec2::splat(2.0),
            [255, 255, 255, alpha],
        );
    }

    list.text(state.hud.score.clone(), Vec2::new(10.0, 10.0), 20, WHITE, false);
    list.text(state.hud.health.clone(), Vec2::new(10.0, 40.0), 20, GREEN, false);
    list.text(state.hud.difficulty.clone(), Vec2::new(10.0, 70.0), 20, YELLOW, false);
}

fn draw_game_over(list: &mut DrawList, state: &GameState) {
    let center_x = VIEWPORT_WIDTH / 2.0;
    list.text("GAME OVER", Vec2::new(center_x, 200.0), 60, RED, true);
    list.text(
        state.final_score_text(),
        Vec2::new(center_x, VIEWPORT_HEIGHT / 2.0),
        30,
        WHITE,
        true,
    );
    list.text(
        "Press SPACE to return to menu",
        Vec2::new(center_x, 400.0),
        20,
        YELLOW,
        true,
    );
}
