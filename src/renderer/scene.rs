//! Scene assembly: game state to draw batches
//!
//! Pure CPU-side pass, kept separate from the GPU code so the draw order and
//! the missing-sprite fallbacks can be tested without a device.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::assets::{AssetGate, AssetId};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;

/// Texture bound while drawing a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    /// 1x1 white texture for untextured geometry
    Blank,
    Unicorn,
    Cloud,
    Rainbow,
}

impl TextureSlot {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn for_asset(asset: AssetId) -> Self {
        match asset {
            AssetId::Unicorn => TextureSlot::Unicorn,
            AssetId::Cloud => TextureSlot::Cloud,
            AssetId::Rainbow => TextureSlot::Rainbow,
        }
    }
}

/// Consecutive triangles sharing one texture
#[derive(Debug, Clone)]
pub struct DrawBatch {
    pub texture: TextureSlot,
    pub vertices: Vec<Vertex>,
}

/// Everything needed to draw one frame, in draw order
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub batches: Vec<DrawBatch>,
}

impl Frame {
    /// Append triangles, merging into the previous batch when the texture matches
    pub fn push(&mut self, texture: TextureSlot, vertices: &[Vertex]) {
        if let Some(batch) = self.batches.last_mut().filter(|b| b.texture == texture) {
            batch.vertices.extend_from_slice(vertices);
            return;
        }
        self.batches.push(DrawBatch {
            texture,
            vertices: vertices.to_vec(),
        });
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }
}

/// Grass dash spacing along the ground line
const GRASS_PERIOD: f32 = 20.0;

/// Resolves a sprite to its texture, or to a tinted blank quad when the
/// image never loaded
struct SpriteLookup<'a> {
    gate: &'a AssetGate,
}

impl SpriteLookup<'_> {
    fn resolve(&self, asset: AssetId, opacity: f32) -> (TextureSlot, [f32; 4]) {
        if self.gate.is_loaded(asset) {
            (TextureSlot::for_asset(asset), [1.0, 1.0, 1.0, opacity])
        } else {
            let [r, g, b, a] = match asset {
                AssetId::Unicorn => colors::FALLBACK_UNICORN,
                AssetId::Cloud => colors::FALLBACK_CLOUD,
                AssetId::Rainbow => colors::FALLBACK_RAINBOW,
            };
            (TextureSlot::Blank, [r, g, b, a * opacity])
        }
    }
}

/// Build the frame for the current state
pub fn build_frame(state: &GameState, gate: &AssetGate, settings: &Settings) -> Frame {
    let mut frame = Frame::default();
    let sprites = SpriteLookup { gate };

    // Sky to grass gradient
    let horizon = VIEW_HEIGHT * colors::HORIZON_STOP;
    frame.push(
        TextureSlot::Blank,
        &shapes::gradient_rect(
            Vec2::ZERO,
            Vec2::new(VIEW_WIDTH, horizon),
            colors::SKY_TOP,
            colors::SKY_HORIZON,
        ),
    );
    frame.push(
        TextureSlot::Blank,
        &shapes::gradient_rect(
            Vec2::new(0.0, horizon),
            Vec2::new(VIEW_WIDTH, VIEW_HEIGHT),
            colors::SKY_HORIZON,
            colors::SKY_BOTTOM,
        ),
    );

    if settings.quality.parallax_enabled() {
        for decoration in &state.decorations {
            let (texture, color) = sprites.resolve(AssetId::Cloud, decoration.opacity);
            frame.push(
                texture,
                &shapes::sprite(decoration.pos, decoration.size, color, false),
            );
        }
    }

    push_grass(&mut frame, state.scroll_offset, settings);

    for platform in &state.platforms {
        let (texture, color) = sprites.resolve(AssetId::Cloud, 1.0);
        frame.push(
            texture,
            &shapes::sprite(platform.pos, platform.size, color, false),
        );
    }

    for collectible in state.collectibles.iter().filter(|c| !c.collected) {
        let bob = if settings.effective_bob() {
            collectible.bob_phase.sin() * 5.0
        } else {
            0.0
        };
        let (texture, color) = sprites.resolve(AssetId::Rainbow, 1.0);
        frame.push(
            texture,
            &shapes::sprite(
                collectible.pos + Vec2::new(0.0, bob),
                collectible.size,
                color,
                false,
            ),
        );
    }

    // Sprite faces left in the source art
    let player = &state.player;
    let gallop = if settings.quality.sprite_bob() {
        player.anim_phase.sin() * 2.0
    } else {
        0.0
    };
    let (texture, color) = sprites.resolve(AssetId::Unicorn, 1.0);
    frame.push(
        texture,
        &shapes::sprite(
            player.pos + Vec2::new(0.0, gallop),
            player.size,
            color,
            true,
        ),
    );

    if settings.shadow {
        let center = Vec2::new(
            player.pos.x + player.size.x / 2.0,
            player.support_y + player.size.y + 10.0,
        );
        frame.push(
            TextureSlot::Blank,
            &shapes::ellipse(center, Vec2::new(40.0, 10.0), colors::SHADOW, 24),
        );
    }

    frame
}

/// Scrolling grass dashes along the ground line, with blades on top
fn push_grass(frame: &mut Frame, scroll_offset: f32, settings: &Settings) {
    let grass_y = GROUND_Y + PLAYER_HEIGHT;
    let shift = scroll_offset % GRASS_PERIOD;
    let blades = settings.quality.grass_blades();

    let mut i = -50.0;
    while i < VIEW_WIDTH + 50.0 {
        let x = i - shift;
        frame.push(
            TextureSlot::Blank,
            &shapes::line(
                Vec2::new(x, grass_y),
                Vec2::new(x + 15.0, grass_y),
                4.0,
                colors::GRASS,
            ),
        );
        if blades {
            frame.push(
                TextureSlot::Blank,
                &shapes::line(
                    Vec2::new(x + 5.0, grass_y),
                    Vec2::new(x + 5.0, grass_y - 8.0),
                    4.0,
                    colors::GRASS,
                ),
            );
            frame.push(
                TextureSlot::Blank,
                &shapes::line(
                    Vec2::new(x + 10.0, grass_y),
                    Vec2::new(x + 10.0, grass_y - 6.0),
                    4.0,
                    colors::GRASS,
                ),
            );
        }
        i += GRASS_PERIOD;
    }
}
