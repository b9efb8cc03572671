//! `qstep play` - interactive playback

use anyhow::Result;

use qstep::cli::InputArgs;
use qstep::player::{play, PlayerState};
use qstep::trace::generate;
use qstep::tui::Theme;
use qstep::Config;

use super::resolve_input;

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &InputArgs) -> Result<()> {
    let config = Config::load()?;
    let (values, pivot) = resolve_input(args, &config)?;
    let steps = generate(&values, pivot)?;

    let mut state = PlayerState::new(steps, values, pivot);
    state.show_help = config.player.show_help;

    let theme = Theme::from_name(config.player.theme);
    let summary = play(state, &theme)?;

    let message = if summary.finished {
        theme.success_text(&format!("Watched all {} steps.", summary.total))
    } else {
        theme.secondary_text(&format!(
            "Stopped at step {} of {}.",
            summary.position, summary.total
        ))
    };
    println!("{message}");
    Ok(())
}
