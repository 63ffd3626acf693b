//! One-shot generator for the three gameplay sound cues.
//!
//! Run once before the first game launch:
//!
//! ```text
//! cargo run --bin gen_sounds
//! ```
//!
//! Writes 16-bit mono PCM WAV files under `assets/sounds/`.  The game
//! refuses to start without them.

use std::f32::consts::TAU;
use std::fs;
use std::path::Path;

use rand::Rng;

const SAMPLE_RATE: u32 = 44_100;

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new("assets/sounds");
    fs::create_dir_all(out_dir)?;

    write_wav(&out_dir.join("shot_hit.wav"), &hit_cue())?;
    write_wav(&out_dir.join("gun_shot.wav"), &gunshot_cue())?;
    write_wav(&out_dir.join("life_lost.wav"), &life_lost_cue())?;

    println!("Wrote 3 sound cues to assets/sounds.");
    Ok(())
}

/// Bright rising two-note blip confirming a hit.
fn hit_cue() -> Vec<i16> {
    let mut samples = tone(880.0, 0.07, 0.6);
    samples.extend(tone(1318.5, 0.09, 0.6));
    samples
}

/// Short filtered-noise burst standing in for a gunshot.
fn gunshot_cue() -> Vec<i16> {
    let mut rng = rand::thread_rng();
    let len = (SAMPLE_RATE as f32 * 0.15) as usize;
    let mut samples = Vec::with_capacity(len);
    let mut level = 0.0f32;
    for i in 0..len {
        let t = i as f32 / len as f32;
        let noise: f32 = rng.gen_range(-1.0..1.0);
        // One-pole low-pass takes the hiss off the raw noise.
        level += 0.25 * (noise - level);
        let envelope = (1.0 - t).powi(3);
        samples.push(to_i16(level * envelope * 0.9));
    }
    samples
}

/// Falling two-note figure for a lost life.
fn life_lost_cue() -> Vec<i16> {
    let mut samples = tone(330.0, 0.12, 0.5);
    samples.extend(tone(220.0, 0.18, 0.5));
    samples
}

/// A sine tone with a squared decay envelope.
fn tone(freq: f32, secs: f32, gain: f32) -> Vec<i16> {
    let len = (SAMPLE_RATE as f32 * secs) as usize;
    (0..len)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = (1.0 - i as f32 / len as f32).powi(2);
            to_i16((t * freq * TAU).sin() * envelope * gain)
        })
        .collect()
}

fn to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

/// Minimal 16-bit mono PCM WAV container.
fn write_wav(path: &Path, samples: &[i16]) -> anyhow::Result<()> {
    let data_len = (samples.len() * 2) as u32;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    fs::write(path, bytes)?;
    Ok(())
}
