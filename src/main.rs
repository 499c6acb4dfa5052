mod assets;
mod audio;
mod config;
mod debug;
mod game;
mod game_over;
mod menu;
mod screens;
mod ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use assets::AssetManager;
use audio::AudioOutput;
use config::{Config, KeyBindings};
use game::input::key_list;
use game::GameState;
use menu::AppState;

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Args {
    debug: bool,
    help: bool,
    config_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let argv: Vec<String> = std::env::args().collect();
    let args = parse_args(&argv)?;

    // Logging goes to a file; the TUI owns stdout
    if let Some(path) = debug::init(args.debug)? {
        eprintln!("Debug logging to {}", path.display());
    }

    let config = match &args.config_path {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };

    // Usage lists the configured keys, so it waits for the config
    if args.help {
        let program = argv.first().map(String::as_str).unwrap_or("flapterm");
        print!("{}", usage(program, &config.keybindings));
        return Ok(());
    }

    // Load every asset up front so problems show before the TUI takes over
    let mut assets = AssetManager::new(config.assets.resolve_directory(), config.physics.texel_size);
    game::preload_assets(&mut assets);
    assets.report_failures(&mut io::stdout())?;

    let audio = audio::default_output();
    let highscore_path = game_over::get_highscore_path();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, &mut assets, audio, highscore_path);

    // Restore terminal before any error is reported
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Drive the app state machine until the player quits
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    assets: &mut AssetManager,
    audio: Rc<dyn AudioOutput>,
    highscore_path: PathBuf,
) -> anyhow::Result<()> {
    let mut app_state = AppState::Menu;
    let mut last_round: Option<GameState> = None;

    loop {
        tracing::debug!(?app_state, "entering screen");

        app_state = match app_state {
            AppState::Menu => {
                let best = game_over::load_highscore(&highscore_path).best;
                screens::run_menu(terminal, config, best)?
            }
            AppState::Playing => {
                let (next, round) = screens::run_game(terminal, config, assets, audio.clone())?;
                last_round = Some(round);
                next
            }
            AppState::GameOver { score } => screens::run_game_over(
                terminal,
                config,
                score,
                last_round.as_ref(),
                &highscore_path,
            )?,
            AppState::Exiting => break,
        };
    }

    tracing::info!("exiting");
    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--debug" | "-d" => parsed.debug = true,
            "--config" | "-c" => {
                let path = rest
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => parsed.help = true,
            other => anyhow::bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(parsed)
}

fn usage(program: &str, keys: &KeyBindings) -> String {
    let flap = key_list(&[keys.flap.as_str(), keys.flap_alt.as_str()]);
    let retry = key_list(&[keys.retry.as_str(), keys.menu_select.as_str()]);
    let rows = [
        (format!("{} / left click", flap), "Flap"),
        (keys.menu_back.clone(), "Back to the menu"),
        (retry, "Retry on the score card"),
        (keys.quit.clone(), "Quit"),
    ];

    let mut text = String::new();
    text.push_str("Flapterm - Flappy Bird in your terminal\n\n");
    text.push_str("Usage:\n");
    text.push_str(&format!("  {}                     # Play\n", program));
    text.push_str(&format!(
        "  {} --debug             # Log to {}\n",
        program,
        debug::log_file_path().display()
    ));
    text.push_str(&format!("  {} --config <path>     # Use a specific config file\n", program));
    text.push_str("\nControls:\n");
    for (names, action) in rows {
        text.push_str(&format!("  {:<26}{}\n", names, action));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse_args(&args(&["flapterm"])).unwrap(), Args::default());
    }

    #[test]
    fn test_debug_and_config() {
        let parsed = parse_args(&args(&["flapterm", "--debug", "--config", "my.toml"])).unwrap();
        assert!(parsed.debug);
        assert_eq!(parsed.config_path, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_config_needs_a_path() {
        assert!(parse_args(&args(&["flapterm", "--config"])).is_err());
    }

    #[test]
    fn test_help_and_unknown_arguments() {
        assert!(parse_args(&args(&["flapterm", "-h"])).unwrap().help);
        assert!(parse_args(&args(&["flapterm", "--fly"])).is_err());
    }

    #[test]
    fn test_usage_lists_configured_keys() {
        let text = usage("flapterm", &KeyBindings::default());
        assert!(text.contains("  Space / Up / left click   Flap\n"));
        assert!(text.contains("  Esc                       Back to the menu\n"));

        let keys = KeyBindings {
            flap: "W".to_string(),
            quit: "X".to_string(),
            ..KeyBindings::default()
        };
        let text = usage("flapterm", &keys);
        assert!(text.contains("  W / Up / left click       Flap\n"));
        assert!(text.contains("  X                         Quit\n"));
        assert!(!text.contains("Space"));
    }
}
