//! Incremental parameter adjustments for exploring a noise configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::fractal::NoiseParams;

/// Which parameter a [`Tweak`] adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweakParam {
    Octaves,
    Frequency,
    Gain,
    Lacunarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
        }
    }
}

/// One step up or down on a single noise parameter.
///
/// Step sizes: octaves 1, frequency 0.001, gain 0.1, lacunarity 0.1.
/// The short form is the parameter's initial (`o`, `f`, `g`, `l`),
/// uppercase for a decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tweak {
    pub param: TweakParam,
    pub direction: Direction,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TweakParseError {
    #[error("Unknown tweak '{0}': expected one of o, f, g, l (uppercase to decrease)")]
    Unknown(String),
}

impl Tweak {
    pub const OCTAVE_STEP: i32 = 1;
    pub const FREQUENCY_STEP: f32 = 0.001;
    pub const GAIN_STEP: f32 = 0.1;
    pub const LACUNARITY_STEP: f32 = 0.1;

    pub fn new(param: TweakParam, direction: Direction) -> Self {
        Self { param, direction }
    }

    /// Parses a whitespace-separated sequence such as `"o o F g"`.
    pub fn parse_sequence(s: &str) -> Result<Vec<Tweak>, TweakParseError> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for Tweak {
    type Err = TweakParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(TweakParseError::Unknown(s.to_string()));
        };

        let direction = if c.is_ascii_uppercase() {
            Direction::Decrease
        } else {
            Direction::Increase
        };
        let param = match c.to_ascii_lowercase() {
            'o' => TweakParam::Octaves,
            'f' => TweakParam::Frequency,
            'g' => TweakParam::Gain,
            'l' => TweakParam::Lacunarity,
            _ => return Err(TweakParseError::Unknown(s.to_string())),
        };

        Ok(Tweak { param, direction })
    }
}

impl fmt::Display for Tweak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.param {
            TweakParam::Octaves => 'o',
            TweakParam::Frequency => 'f',
            TweakParam::Gain => 'g',
            TweakParam::Lacunarity => 'l',
        };
        match self.direction {
            Direction::Increase => write!(f, "{}", c),
            Direction::Decrease => write!(f, "{}", c.to_ascii_uppercase()),
        }
    }
}

impl NoiseParams {
    /// Returns a copy with `tweak` applied. Results are not clamped.
    pub fn apply(&self, tweak: Tweak) -> NoiseParams {
        let sign = tweak.direction.sign();
        let mut next = *self;
        match tweak.param {
            TweakParam::Octaves => match tweak.direction {
                Direction::Increase => next.octaves += Tweak::OCTAVE_STEP,
                Direction::Decrease => next.octaves -= Tweak::OCTAVE_STEP,
            },
            TweakParam::Frequency => next.frequency += Tweak::FREQUENCY_STEP * sign,
            TweakParam::Gain => next.gain += Tweak::GAIN_STEP * sign,
            TweakParam::Lacunarity => next.lacunarity += Tweak::LACUNARITY_STEP * sign,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        assert_eq!(
            "o".parse::<Tweak>().unwrap(),
            Tweak::new(TweakParam::Octaves, Direction::Increase)
        );
        assert_eq!(
            "L".parse::<Tweak>().unwrap(),
            Tweak::new(TweakParam::Lacunarity, Direction::Decrease)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("x".parse::<Tweak>().is_err());
        assert!("og".parse::<Tweak>().is_err());
        assert!("".parse::<Tweak>().is_err());
    }

    #[test]
    fn test_parse_sequence() {
        let tweaks = Tweak::parse_sequence(" o  F g\tL ").unwrap();
        let rendered: Vec<String> = tweaks.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["o", "F", "g", "L"]);

        assert_eq!(
            Tweak::parse_sequence("o q"),
            Err(TweakParseError::Unknown("q".to_string()))
        );
    }

    #[test]
    fn test_apply_steps() {
        let base = NoiseParams::turbulence_demo();

        let p = base.apply("o".parse().unwrap());
        assert_eq!(p.octaves, 4);

        let p = base.apply("O".parse().unwrap());
        assert_eq!(p.octaves, 2);

        let p = base.apply("f".parse().unwrap());
        assert!((p.frequency - 0.011).abs() < 1e-6);

        let p = base.apply("G".parse().unwrap());
        assert!((p.gain - 0.1).abs() < 1e-6);

        let p = base.apply("l".parse().unwrap());
        assert!((p.lacunarity - 3.1).abs() < 1e-6);
        assert_eq!(p.octaves, base.octaves);
    }

    #[test]
    fn test_apply_is_unclamped() {
        let mut params = NoiseParams {
            octaves: 0,
            ..NoiseParams::default()
        };
        params = params.apply("O".parse().unwrap());
        assert_eq!(params.octaves, -1);
    }
}
