//! Checksummed binary saves.
//!
//! File layout: 8-byte version magic, 4-byte payload length, bincode payload,
//! 32-byte SHA-256 checksum over everything before it. A failed checksum or
//! magic mismatch refuses the load rather than deserializing garbage.

use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::core::game_state::GameState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::PathBuf;

const SAVE_FILE: &str = "save.dat";
const CHECKSUM_LEN: usize = 32;

pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new() -> io::Result<Self> {
        let dirs = ProjectDirs::from("", "", "inkpress").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no home directory available")
        })?;
        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            save_path: data_dir.join(SAVE_FILE),
        })
    }

    #[cfg(test)]
    pub fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let unique = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "inkpress-test-{}-{}",
            std::process::id(),
            unique
        ));
        fs::create_dir_all(&dir).ok();
        Self {
            save_path: dir.join(SAVE_FILE),
        }
    }

    pub fn save_path(&self) -> &PathBuf {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let payload = bincode::serialize(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut data =
            Vec::with_capacity(8 + 4 + payload.len() + CHECKSUM_LEN);
        data.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
        data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&payload);

        let checksum = Sha256::digest(&data);
        data.extend_from_slice(&checksum);

        fs::write(&self.save_path, data)
    }

    pub fn load(&self) -> io::Result<GameState> {
        let data = fs::read(&self.save_path)?;
        if data.len() < 8 + 4 + CHECKSUM_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "save file truncated",
            ));
        }

        let (body, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
        let expected = Sha256::digest(body);
        if checksum != expected.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "save file checksum mismatch",
            ));
        }

        let magic = u64::from_le_bytes(body[0..8].try_into().map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "save file header corrupt")
        })?);
        if magic != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unrecognized save version",
            ));
        }

        let len = u32::from_le_bytes(body[8..12].try_into().map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "save file header corrupt")
        })?) as usize;
        let payload = &body[12..];
        if payload.len() != len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "save file length mismatch",
            ));
        }

        bincode::deserialize(payload)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn delete_save(&self) -> io::Result<()> {
        if self.save_path.exists() {
            fs::remove_file(&self.save_path)?;
        }
        Ok(())
    }
}
