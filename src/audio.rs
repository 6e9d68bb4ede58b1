//! Sound triggers
//!
//! The simulation only names what should be heard. Playback belongs to an
//! external collaborator implementing [`SoundSink`]; [`SoundEffect::tones`]
//! describes a procedural tone for each trigger so no sample files are
//! needed.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a wall
    WallBounce,
    /// Ball hits paddle
    PaddleHit,
    /// Reinforced brick cracks (doesn't break)
    BrickHit,
    /// Normal brick breaks
    BrickBreak,
    /// Bonus brick breaks
    BonusBreak,
    /// Ball fell past the paddle
    LifeLost,
    /// Level cleared
    LevelClear,
    /// Last life lost
    GameOver,
}

impl SoundEffect {
    /// Sound trigger for a simulation event
    pub fn from_event(event: &GameEvent) -> Self {
        use crate::sim::BrickKind;

        match event {
            GameEvent::WallBounce => Self::WallBounce,
            GameEvent::PaddleHit { .. } => Self::PaddleHit,
            GameEvent::BrickCracked { .. } => Self::BrickHit,
            GameEvent::BrickDestroyed {
                kind: BrickKind::Bonus,
                ..
            } => Self::BonusBreak,
            GameEvent::BrickDestroyed { .. } => Self::BrickBreak,
            GameEvent::LifeLost { .. } => Self::LifeLost,
            GameEvent::LevelCleared { .. } => Self::LevelClear,
            GameEvent::GameOver { .. } => Self::GameOver,
        }
    }

    /// Stable identifier for the audio collaborator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WallBounce => "wall_bounce",
            Self::PaddleHit => "paddle_hit",
            Self::BrickHit => "brick_hit",
            Self::BrickBreak => "brick_break",
            Self::BonusBreak => "bonus_break",
            Self::LifeLost => "life_lost",
            Self::LevelClear => "level_clear",
            Self::GameOver => "game_over",
        }
    }

    /// Tones that make up this effect, all starting together
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            Self::WallBounce => WALL_BOUNCE,
            Self::PaddleHit => PADDLE_HIT,
            Self::BrickHit => BRICK_HIT,
            Self::BrickBreak => BRICK_BREAK,
            Self::BonusBreak => BONUS_BREAK,
            Self::LifeLost => LIFE_LOST,
            Self::LevelClear => LEVEL_CLEAR,
            Self::GameOver => GAME_OVER,
        }
    }
}

// Higher ping
const WALL_BOUNCE: &[Tone] = &[Tone::new(Waveform::Sine, 400.0, 400.0, 0.3, 0.08)];
// Solid thump
const PADDLE_HIT: &[Tone] = &[Tone::new(Waveform::Sine, 150.0, 60.0, 0.6, 0.1)];
// Soft tap
const BRICK_HIT: &[Tone] = &[Tone::new(Waveform::Triangle, 300.0, 300.0, 0.25, 0.05)];
// Crackle over a bass thump
const BRICK_BREAK: &[Tone] = &[
    Tone::new(Waveform::Sawtooth, 3500.0, 100.0, 0.35, 0.18),
    Tone::new(Waveform::Sine, 60.0, 60.0, 0.3, 0.1),
];
// Chime chord
const BONUS_BREAK: &[Tone] = &[
    Tone::new(Waveform::Sine, 523.0, 523.0, 0.25, 0.3),
    Tone::new(Waveform::Sine, 659.0, 659.0, 0.25, 0.3),
    Tone::new(Waveform::Sine, 784.0, 784.0, 0.25, 0.3),
];
// Long falling drone
const LIFE_LOST: &[Tone] = &[Tone::new(Waveform::Sine, 300.0, 20.0, 0.5, 0.8)];
const LEVEL_CLEAR: &[Tone] = &[
    Tone::new(Waveform::Triangle, 523.0, 523.0, 0.3, 0.4),
    Tone::new(Waveform::Triangle, 659.0, 659.0, 0.3, 0.4),
    Tone::new(Waveform::Triangle, 784.0, 784.0, 0.3, 0.4),
    Tone::new(Waveform::Triangle, 1047.0, 1047.0, 0.3, 0.4),
];
const GAME_OVER: &[Tone] = &[
    Tone::new(Waveform::Sawtooth, 200.0, 50.0, 0.4, 1.0),
    Tone::new(Waveform::Square, 100.0, 40.0, 0.15, 1.0),
];

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One oscillator with an exponential pitch sweep and decay envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Peak gain before master volume (0.0 - 1.0)
    pub gain: f32,
    pub duration_secs: f32,
}

impl Tone {
    pub const fn new(
        waveform: Waveform,
        start_hz: f32,
        end_hz: f32,
        gain: f32,
        duration_secs: f32,
    ) -> Self {
        Self {
            waveform,
            start_hz,
            end_hz,
            gain,
            duration_secs,
        }
    }
}

/// Consumer of sound triggers. Fire-and-forget: the simulation never waits.
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Records triggers in order
impl SoundSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BrickKind;

    #[test]
    fn test_brick_events_map_by_kind() {
        let bonus = GameEvent::BrickDestroyed {
            row: 0,
            col: 0,
            kind: BrickKind::Bonus,
            points: 50,
        };
        let normal = GameEvent::BrickDestroyed {
            row: 0,
            col: 1,
            kind: BrickKind::Normal,
            points: 10,
        };
        assert_eq!(SoundEffect::from_event(&bonus), SoundEffect::BonusBreak);
        assert_eq!(SoundEffect::from_event(&normal), SoundEffect::BrickBreak);
        assert_eq!(
            SoundEffect::from_event(&GameEvent::BrickCracked { row: 0, col: 0 }),
            SoundEffect::BrickHit
        );
    }

    #[test]
    fn test_every_effect_has_audible_tones() {
        let all = [
            SoundEffect::WallBounce,
            SoundEffect::PaddleHit,
            SoundEffect::BrickHit,
            SoundEffect::BrickBreak,
            SoundEffect::BonusBreak,
            SoundEffect::LifeLost,
            SoundEffect::LevelClear,
            SoundEffect::GameOver,
        ];
        for effect in all {
            let tones = effect.tones();
            assert!(!tones.is_empty(), "{} has no tones", effect.as_str());
            for v in tones {
                assert!(v.start_hz > 0.0 && v.end_hz > 0.0);
                assert!(v.gain > 0.0 && v.gain <= 1.0);
                assert!(v.duration_secs > 0.0);
            }
        }
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<SoundEffect> = Vec::new();
        sink.play(SoundEffect::WallBounce);
        sink.play(SoundEffect::PaddleHit);
        assert_eq!(sink, vec![SoundEffect::WallBounce, SoundEffect::PaddleHit]);
    }
}
