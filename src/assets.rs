//! Sprite assets and the load barrier that gates the game start
//!
//! Every asset must report exactly once, either loaded or failed. A failed
//! asset still counts toward the barrier: the game starts anyway and the
//! renderer draws a flat-colored stand-in for the missing sprite.

use std::fmt;

use thiserror::Error;

/// The three sprite images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Unicorn,
    Cloud,
    Rainbow,
}

impl AssetId {
    pub const ALL: [AssetId; 3] = [AssetId::Unicorn, AssetId::Cloud, AssetId::Rainbow];

    /// URL relative to the page
    pub fn path(self) -> &'static str {
        match self {
            AssetId::Unicorn => "assets/unicorn.png",
            AssetId::Cloud => "assets/cloud.png",
            AssetId::Rainbow => "assets/rainbow.png",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetId::Unicorn => "unicorn",
            AssetId::Cloud => "cloud",
            AssetId::Rainbow => "rainbow",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("failed to load asset {asset} from {path}")]
    LoadFailed { asset: AssetId, path: &'static str },
    #[error("asset {0} reported completion more than once")]
    DuplicateSignal(AssetId),
}

/// Load state of a single asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Barrier state after a completion signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Waiting { remaining: usize },
    /// The signal just received was the last one
    Opened,
}

/// Counted barrier over `AssetId::ALL`
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    status: [AssetStatus; 3],
    failures: Vec<AssetError>,
}

impl AssetGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful load
    pub fn loaded(&mut self, asset: AssetId) -> Result<GateState, AssetError> {
        self.complete(asset, AssetStatus::Loaded)?;
        log::info!("Loaded asset {} ({}/{})", asset, self.completed(), AssetId::ALL.len());
        Ok(self.state())
    }

    /// Record a failed load. The failure still counts toward the barrier.
    pub fn failed(&mut self, asset: AssetId) -> Result<GateState, AssetError> {
        self.complete(asset, AssetStatus::Failed)?;
        let err = AssetError::LoadFailed {
            asset,
            path: asset.path(),
        };
        log::error!("{err}; drawing a placeholder instead");
        self.failures.push(err);
        Ok(self.state())
    }

    fn complete(&mut self, asset: AssetId, status: AssetStatus) -> Result<(), AssetError> {
        let slot = &mut self.status[asset.index()];
        if *slot != AssetStatus::Pending {
            return Err(AssetError::DuplicateSignal(asset));
        }
        *slot = status;
        Ok(())
    }

    fn state(&self) -> GateState {
        let remaining = self.remaining();
        if remaining == 0 {
            GateState::Opened
        } else {
            GateState::Waiting { remaining }
        }
    }

    pub fn status(&self, asset: AssetId) -> AssetStatus {
        self.status[asset.index()]
    }

    /// True if the sprite can be drawn textured
    pub fn is_loaded(&self, asset: AssetId) -> bool {
        self.status(asset) == AssetStatus::Loaded
    }

    pub fn completed(&self) -> usize {
        self.status
            .iter()
            .filter(|s| **s != AssetStatus::Pending)
            .count()
    }

    pub fn remaining(&self) -> usize {
        AssetId::ALL.len() - self.completed()
    }

    pub fn is_open(&self) -> bool {
        self.remaining() == 0
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &[AssetError] {
        &self.failures
    }
}
