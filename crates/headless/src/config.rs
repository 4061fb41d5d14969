//! Host configuration read from the process environment.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use game_npc::AgentConfig;

/// Settings of the headless host loop.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessConfig {
    /// Number of frames to simulate.
    pub ticks: u64,
    /// Seconds per simulated frame.
    pub frame_time: f64,
    /// RNG seed for the agent; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Optional JSON file holding an [`AgentConfig`].
    pub agent_config: Option<PathBuf>,
    /// Rival walking speed in pixels per second.
    pub rival_speed: f64,
    /// Deliver a scoring collision every this many frames (0 disables).
    pub score_every: u64,
    /// Emit draw calls at trace level.
    pub draw: bool,
    /// Log an agent summary every this many frames.
    pub log_every: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            ticks: 1800,
            frame_time: 1.0 / 60.0,
            seed: None,
            agent_config: None,
            rival_speed: 60.0,
            score_every: 600,
            draw: false,
            log_every: 60,
        }
    }
}

impl HeadlessConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `NPC_TICKS` - Frames to simulate (default: 1800)
    /// - `NPC_FRAME_TIME` - Seconds per frame (default: 1/60)
    /// - `NPC_SEED` - Agent RNG seed (default: entropy)
    /// - `NPC_AGENT_CONFIG` - Path to a JSON agent configuration (default: built-in)
    /// - `NPC_RIVAL_SPEED` - Rival speed in px/s (default: 60)
    /// - `NPC_SCORE_EVERY` - Frames between scoring collisions, 0 disables (default: 600)
    /// - `NPC_DRAW` - Emit draw calls at trace level (default: false)
    /// - `NPC_LOG_EVERY` - Frames between summaries (default: 60)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<u64>("NPC_TICKS") {
            config.ticks = ticks;
        }
        if let Some(frame_time) = read_env::<f64>("NPC_FRAME_TIME")
            && frame_time.is_finite()
            && frame_time > 0.0
        {
            config.frame_time = frame_time;
        }
        config.seed = read_env::<u64>("NPC_SEED");
        config.agent_config = env::var_os("NPC_AGENT_CONFIG").map(PathBuf::from);
        if let Some(speed) = read_env::<f64>("NPC_RIVAL_SPEED") {
            config.rival_speed = speed.max(0.0);
        }
        if let Some(every) = read_env::<u64>("NPC_SCORE_EVERY") {
            config.score_every = every;
        }
        if let Some(draw) = read_env_bool("NPC_DRAW") {
            config.draw = draw;
        }
        if let Some(every) = read_env::<u64>("NPC_LOG_EVERY") {
            config.log_every = every.max(1);
        }

        config
    }

    /// Loads the agent configuration file, or the defaults when none is set.
    pub fn load_agent_config(&self) -> Result<AgentConfig> {
        match &self.agent_config {
            Some(path) => load_agent_config(path),
            None => Ok(AgentConfig::default()),
        }
    }
}

/// Parses a JSON [`AgentConfig`]; omitted fields keep their defaults.
pub fn load_agent_config(path: &Path) -> Result<AgentConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading agent config {}", path.display()))?;
    let config: AgentConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing agent config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_npc::Point;
    use std::io::Write;

    #[test]
    fn partial_agent_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "sense_radius_m": 4.0, "patrol_route": [{{ "x": 200.0, "y": 300.0 }}] }}"#
        )
        .unwrap();

        let config = load_agent_config(file.path()).unwrap();

        assert_eq!(config.sense_radius_m, 4.0);
        assert_eq!(config.patrol_route, vec![Point::new(200.0, 300.0)]);
        assert_eq!(config.arena_width, AgentConfig::DEFAULT_ARENA_WIDTH);
    }

    #[test]
    fn invalid_agent_config_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "run_speed_kmph": -3.0 }}"#).unwrap();

        let err = load_agent_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("run_speed_kmph"));
    }

    #[test]
    fn unreachable_patrol_stop_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "patrol_route": [{{ "x": 2000.0, "y": 300.0 }}, {{ "x": 300.0, "y": 300.0 }}] }}"#
        )
        .unwrap();

        let err = load_agent_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("outside the arena"), "{err}");
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_agent_config(Path::new("/nonexistent/agent.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/agent.json"));
    }
}
