//! Game state and core simulation types
//!
//! The controller state owns every entity collection by value. Nothing holds a
//! reference to another entity; the only cross-entity logic is the collision pass.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::backdrop::Backdrop;
use super::difficulty::{difficulty_for_score, spawn_interval_for};
use super::entity::{Entity, Hostile, Projectile};
use super::particles::ParticlePool;
use super::player::Player;
use crate::consts::*;

/// Top-level screen/phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu with Start / Exit
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for confirm to return to the menu
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuItem {
    #[default]
    Start,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Start, MenuItem::Exit];

    pub fn index(&self) -> usize {
        match self {
            MenuItem::Start => 0,
            MenuItem::Exit => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Start => "START GAME",
            MenuItem::Exit => "EXIT",
        }
    }
}

/// Display strings refreshed at the end of every playing tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudText {
    pub score: String,
    pub health: String,
    pub difficulty: String,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Single randomness source for spawns, particles and stars
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub menu_selection: MenuItem,
    /// Present only while a game is running or just ended
    pub player: Option<Player>,
    pub hostiles: Vec<Hostile>,
    pub projectiles: Vec<Projectile>,
    pub particles: ParticlePool,
    pub backdrop: Backdrop,
    pub score: u32,
    pub difficulty: f32,
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    pub hud: HudText,
    /// Simulated seconds spent in `Playing` this run
    pub play_time: f32,
    /// Completed games since startup
    pub games_played: u32,
    /// Set by the Exit menu entry or a close event
    exit_requested: bool,
    /// Health hit zero this tick; applied once the tick finishes
    pub(crate) game_over_pending: bool,
}

impl GameState {
    /// Create a state sitting at the menu, with the backdrop already populated
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let backdrop = Backdrop::new(&mut rng);
        let mut state = Self {
            seed,
            rng,
            phase: GamePhase::Menu,
            menu_selection: MenuItem::Start,
            player: None,
            hostiles: Vec::new(),
            projectiles: Vec::new(),
            particles: ParticlePool::new(),
            backdrop,
            score: 0,
            difficulty: 1.0,
            spawn_timer: 0.0,
            spawn_interval: BASE_SPAWN_INTERVAL,
            hud: HudText::default(),
            play_time: 0.0,
            games_played: 0,
            exit_requested: false,
            game_over_pending: false,
        };
        state.refresh_hud();
        state
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn request_exit(&mut self) {
        if !self.exit_requested {
            log::info!("Exit requested");
        }
        self.exit_requested = true;
    }

    /// Menu → Playing: fresh player and reset run stats
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.player = Some(Player::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y)));
        self.score = 0;
        self.difficulty = 1.0;
        self.spawn_timer = 0.0;
        self.spawn_interval = BASE_SPAWN_INTERVAL;
        self.play_time = 0.0;
        self.game_over_pending = false;
        self.refresh_hud();
        log::info!("Game started (seed {})", self.seed);
    }

    /// Playing → GameOver
    pub fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.game_over_pending = false;
        self.games_played += 1;
        log::info!(
            "Game over: score {} after {:.1}s at difficulty {:.1}x",
            self.score,
            self.play_time,
            self.difficulty
        );
    }

    /// GameOver → Menu: drop the player and every transient entity
    pub fn return_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.player = None;
        self.hostiles.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.menu_selection = MenuItem::Start;
    }

    /// Spawn a hostile at a random column above the screen
    pub fn spawn_hostile(&mut self) {
        let x = self
            .rng
            .random_range(HOSTILE_SPAWN_MIN_X..=HOSTILE_SPAWN_MAX_X);
        self.hostiles
            .push(Hostile::new(x, HOSTILE_SPAWN_Y, self.difficulty));
        log::debug!(
            "Spawned hostile at x={:.0} (speed {:.0})",
            x,
            HOSTILE_BASE_SPEED * self.difficulty
        );
    }

    /// Fire a projectile if the cooldown allows; returns whether a shot was fired
    pub fn try_fire(&mut self) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        if !player.can_shoot() {
            return false;
        }
        let muzzle = player.muzzle();
        player.reset_shoot_timer();
        self.projectiles.push(Projectile::new(muzzle.x, muzzle.y));
        true
    }

    /// Remove every inactive hostile, projectile and particle
    pub fn cleanup(&mut self) {
        self.projectiles.retain(|p| p.is_active());
        self.hostiles.retain(|h| h.is_active());
        self.particles.cleanup();
    }

    /// Recompute difficulty and spawn pacing from the score
    pub fn update_difficulty(&mut self) {
        self.difficulty = difficulty_for_score(self.score);
        self.spawn_interval = spawn_interval_for(self.difficulty);
    }

    pub fn refresh_hud(&mut self) {
        self.hud.score = format!("Score: {}", self.score);
        if let Some(player) = &self.player {
            self.hud.health = format!("Health: {}/{}", player.health(), player.max_health);
        }
        self.hud.difficulty = format!("Difficulty: {:.1}x", self.difficulty);
    }

    /// Text for the menu entries, with a marker on the selected one
    pub fn menu_lines(&self) -> Vec<String> {
        MenuItem::ALL
            .iter()
            .map(|item| {
                let marker = if *item == self.menu_selection { ">" } else { " " };
                format!("{} {}", marker, item.label())
            })
            .collect()
    }

    pub fn final_score_text(&self) -> String {
        format!("Final Score: {}", self.score)
    }
}
