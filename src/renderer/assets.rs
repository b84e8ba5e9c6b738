//! Texture handle store
//!
//! An explicit context object owned by the application and passed to whatever
//! builds draw lists. The simulation never touches it.

use std::collections::HashMap;

use crate::consts::*;
use crate::sim::EntityKind;

/// The five sprites the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteAsset {
    Player,
    Hostile,
    Projectile,
    Particle,
    Star,
}

/// Procedural shape a presenter should rasterize for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteShape {
    Triangle,
    InvertedTriangle,
    Rectangle,
    Square,
    Dot,
}

impl SpriteAsset {
    pub const ALL: [SpriteAsset; 5] = [
        SpriteAsset::Player,
        SpriteAsset::Hostile,
        SpriteAsset::Projectile,
        SpriteAsset::Particle,
        SpriteAsset::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpriteAsset::Player => "player",
            SpriteAsset::Hostile => "hostile",
            SpriteAsset::Projectile => "projectile",
            SpriteAsset::Particle => "particle",
            SpriteAsset::Star => "star",
        }
    }

    pub fn size(&self) -> (f32, f32) {
        match self {
            SpriteAsset::Player => PLAYER_SIZE,
            SpriteAsset::Hostile => HOSTILE_SIZE,
            SpriteAsset::Projectile => PROJECTILE_SIZE,
            SpriteAsset::Particle => PARTICLE_SIZE,
            SpriteAsset::Star => STAR_SIZE,
        }
    }

    pub fn shape(&self) -> SpriteShape {
        match self {
            SpriteAsset::Player => SpriteShape::Triangle,
            SpriteAsset::Hostile => SpriteShape::InvertedTriangle,
            SpriteAsset::Projectile => SpriteShape::Rectangle,
            SpriteAsset::Particle => SpriteShape::Square,
            SpriteAsset::Star => SpriteShape::Dot,
        }
    }

    /// Base RGBA fill
    pub fn color(&self) -> [u8; 4] {
        match self {
            SpriteAsset::Player => [0, 255, 0, 255],
            SpriteAsset::Hostile => [255, 0, 0, 255],
            SpriteAsset::Projectile => [255, 255, 0, 255],
            SpriteAsset::Particle | SpriteAsset::Star => [255, 255, 255, 255],
        }
    }
}

impl From<EntityKind> for SpriteAsset {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => SpriteAsset::Player,
            EntityKind::Hostile => SpriteAsset::Hostile,
            EntityKind::Projectile => SpriteAsset::Projectile,
        }
    }
}

/// Opaque handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureHandle {
    /// Degenerate stand-in used when a lookup misses
    pub const PLACEHOLDER: TextureHandle = TextureHandle {
        id: 0,
        width: 1,
        height: 1,
    };

    pub fn is_placeholder(&self) -> bool {
        self.id == Self::PLACEHOLDER.id
    }
}

/// Named texture handles
#[derive(Debug, Clone, Default)]
pub struct TextureStore {
    textures: HashMap<String, TextureHandle>,
    next_id: u32,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_id: 1,
        }
    }

    /// Store with all five game sprites registered
    pub fn with_builtin() -> Self {
        let mut store = Self::new();
        for asset in SpriteAsset::ALL {
            let (w, h) = asset.size();
            store.insert(asset.name(), w as u32, h as u32);
        }
        log::debug!("Registered {} built-in sprites", store.len());
        store
    }

    /// Register (or replace) a texture and return its handle
    pub fn insert(&mut self, name: &str, width: u32, height: u32) -> TextureHandle {
        // id 0 is reserved for the placeholder
        self.next_id = self.next_id.max(1);
        let handle = TextureHandle {
            id: self.next_id,
            width,
            height,
        };
        self.next_id += 1;
        self.textures.insert(name.to_string(), handle);
        handle
    }

    pub fn get(&self, name: &str) -> Option<TextureHandle> {
        self.textures.get(name).copied()
    }

    /// Look up a texture, falling back to the placeholder when it's missing
    pub fn lookup(&self, name: &str) -> TextureHandle {
        match self.get(name) {
            Some(handle) => handle,
            None => {
                log::warn!("Texture '{}' not found, using placeholder", name);
                TextureHandle::PLACEHOLDER
            }
        }
    }

    pub fn sprite(&self, asset: SpriteAsset) -> TextureHandle {
        self.lookup(asset.name())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
