use std::path::PathBuf;

use anyhow::Context as _;
use ohana_engine::{BestScore, GameSession, PieceSeed, SystemClock};
use ohana_runtime::{Runtime, ScreenStack};

use self::screens::PlayScreen;
use crate::{
    model::{score_store::JsonScoreStore, theme::Theme},
    util,
};

mod screens;

const DEFAULT_BEST_SCORE_FILE: &str = "./data/best-score.json";
const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// File that keeps the best score between runs
    #[clap(long, default_value = DEFAULT_BEST_SCORE_FILE)]
    best_score_file: PathBuf,
    /// Theme file (JSON) with the title, tagline and quotes
    #[clap(long)]
    theme: Option<PathBuf>,
    /// Seed for the piece sequence, as 32 hex digits
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Hide the landing preview of the falling piece
    #[clap(long)]
    no_ghost: bool,
    /// Frames drawn per second
    #[clap(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            best_score_file: PathBuf::from(DEFAULT_BEST_SCORE_FILE),
            theme: None,
            seed: None,
            no_ghost: false,
            fps: DEFAULT_FPS,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        best_score_file,
        theme,
        seed,
        no_ghost,
        fps,
    } = arg;

    let theme = match theme {
        Some(path) => util::read_json_file::<Theme, _>("theme", path)?,
        None => Theme::default(),
    };
    let best_score = BestScore::open(Box::new(JsonScoreStore::new(best_score_file)));
    log::info!(
        "best score {} from {}",
        best_score.value(),
        best_score_file.display()
    );

    let clock = SystemClock::new();
    let mut session = GameSession::with_clock(clock)
        .with_quotes(theme.quote_bank())
        .with_best_score(best_score);
    if let Some(seed) = *seed {
        log::info!("piece seed {seed}");
        session = session.with_seed(seed);
    }

    let screen = PlayScreen::new(session, clock, theme, !*no_ghost, *fps);
    let mut stack = ScreenStack::new(Box::new(screen));
    Runtime::new()
        .run(&mut stack)
        .context("Terminal session failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::command::CommandArgs;

    #[test]
    fn test_default_matches_clap_defaults() {
        #[derive(Debug, clap::Parser)]
        struct Wrapper {
            #[clap(flatten)]
            play: PlayArg,
        }

        let parsed = Wrapper::parse_from(["ohana"]).play;
        let default = PlayArg::default();
        assert_eq!(parsed.best_score_file, default.best_score_file);
        assert_eq!(parsed.fps, default.fps);
        assert!(!parsed.no_ghost);
        assert!(parsed.seed.is_none());
    }

    #[test]
    fn test_rejects_bad_seed_and_fps() {
        assert!(CommandArgs::try_parse_from(["ohana", "play", "--seed", "xyz"]).is_err());
        assert!(CommandArgs::try_parse_from(["ohana", "play", "--fps", "0"]).is_err());
        assert!(
            CommandArgs::try_parse_from([
                "ohana",
                "play",
                "--seed",
                "0123456789abcdef0123456789abcdef",
                "--no-ghost",
            ])
            .is_ok()
        );
    }
}
