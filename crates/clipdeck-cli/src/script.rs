//! Short step syntax for scripted sessions
//!
//! ```text
//! play | next | prev | volume=0.3 | speed=1.5 | fullscreen | exit-fullscreen
//! select=2 | move=0:2 | drop=<payload>@<target> | ended
//! ```

use anyhow::{anyhow, bail, Context};
use clipdeck_core::{PlaybackSpeed, PlayerAction, SkipDirection, Volume};

/// One scripted gesture
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Action(PlayerAction),
    /// Raw drop, validated by the player like a browser drop would be
    Drop { payload: String, target: usize },
}

pub fn parse_step(step: &str) -> anyhow::Result<Step> {
    let (name, arg) = match step.split_once('=') {
        Some((name, arg)) => (name.trim(), Some(arg.trim())),
        None => (step.trim(), None),
    };
    let require = || arg.ok_or_else(|| anyhow!("step '{}' needs a value", name));

    let action = match name {
        "play" | "pause" | "toggle" => PlayerAction::TogglePlayPause,
        "next" => PlayerAction::Skip {
            direction: SkipDirection::Forward,
        },
        "prev" => PlayerAction::Skip {
            direction: SkipDirection::Backward,
        },
        "volume" => {
            let level: f64 = require()?.parse().context("volume must be a number")?;
            PlayerAction::SetVolume {
                volume: Volume::new(level),
            }
        }
        "speed" => PlayerAction::SetSpeed {
            speed: require()?.parse::<PlaybackSpeed>()?,
        },
        "fullscreen" => PlayerAction::ToggleFullScreen,
        "exit-fullscreen" => PlayerAction::ExitFullScreen,
        "select" => PlayerAction::Select {
            index: require()?.parse().context("select needs a row index")?,
        },
        "move" => {
            let (from, to) = require()?
                .split_once(':')
                .ok_or_else(|| anyhow!("move expects FROM:TO"))?;
            PlayerAction::Reorder {
                from: from.parse().context("invalid move source")?,
                to: to.parse().context("invalid move target")?,
            }
        }
        "drop" => {
            let (payload, target) = require()?
                .rsplit_once('@')
                .ok_or_else(|| anyhow!("drop expects PAYLOAD@TARGET"))?;
            return Ok(Step::Drop {
                payload: payload.to_string(),
                target: target.parse().context("invalid drop target")?,
            });
        }
        "ended" => PlayerAction::Ended,
        other => bail!("unknown step '{}'", other),
    };
    Ok(Step::Action(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transport_steps() {
        assert_eq!(
            parse_step("next").unwrap(),
            Step::Action(PlayerAction::Skip {
                direction: SkipDirection::Forward
            })
        );
        assert_eq!(
            parse_step("speed=1.5").unwrap(),
            Step::Action(PlayerAction::SetSpeed {
                speed: PlaybackSpeed::OneAndHalf
            })
        );
        assert_eq!(
            parse_step("volume=2").unwrap(),
            Step::Action(PlayerAction::SetVolume { volume: Volume::MAX })
        );
    }

    #[test]
    fn test_parse_reorder_steps() {
        assert_eq!(
            parse_step("move=0:2").unwrap(),
            Step::Action(PlayerAction::Reorder { from: 0, to: 2 })
        );
        assert_eq!(
            parse_step("drop=garbage@1").unwrap(),
            Step::Drop {
                payload: "garbage".into(),
                target: 1
            }
        );
    }

    #[test]
    fn test_rejects_bad_steps() {
        assert!(parse_step("rewind").is_err());
        assert!(parse_step("speed=3").is_err());
        assert!(parse_step("select").is_err());
        assert!(parse_step("move=1").is_err());
    }
}
