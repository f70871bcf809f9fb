//! Scene file persistence: one object per line in the text encoding.

use super::Scene;
use crate::draw::codec;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Parses scene text, one object per line.
///
/// Lines with an unrecognized tag or no content produce no object; lines
/// with a recognized tag but corrupt fields are logged and skipped. Loading
/// never fails on content.
pub fn parse_scene(text: &str) -> Scene {
    let mut scene = Scene::new();
    for (number, line) in text.lines().enumerate() {
        match codec::deserialize(line) {
            Ok(Some(obj)) => scene.push(obj),
            Ok(None) => {
                if !line.trim().is_empty() {
                    debug!("line {}: unrecognized object tag, skipping", number + 1);
                }
            }
            Err(err) => {
                warn!("line {}: skipping malformed object: {}", number + 1, err);
            }
        }
    }
    scene
}

/// Encodes a scene as text, one canonical line per object.
pub fn encode_scene(scene: &Scene) -> String {
    let mut text = String::new();
    for obj in scene.objects() {
        text.push_str(&codec::serialize(obj));
        text.push('\n');
    }
    text
}

/// Loads a scene file, skipping unreadable lines.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    let scene = parse_scene(&text);
    debug!(
        "Loaded {} objects from {}",
        scene.len(),
        path.display()
    );
    Ok(scene)
}

/// Saves a scene atomically: write a temporary file, then rename over the
/// target.
pub fn save_scene(scene: &Scene, path: &Path) -> Result<()> {
    let tmp_path = temp_path(path);
    fs::write(&tmp_path, encode_scene(scene))
        .with_context(|| format!("failed to write temporary scene file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to move temporary scene file {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;
    info!("Scene saved to {} ({} objects)", path.display(), scene.len());
    Ok(())
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("tmp{}", counter));
    }
    candidate
}
