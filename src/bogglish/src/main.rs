use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{info, warn};

use bogglish::config::GameConfig;
use bogglish::game::{
    Dictionary, GameController, GameObserver, GameSession, IgnoreReason, SelectOutcome,
    Submission, TileState,
};

const HELP: &str = "\
Commands:
  <row> <col>   click the tile at that position (0-based)
  submit        score the selected word
  new           start a new game
  hint          list words still on the board
  show          redraw the board
  json          print the game state as JSON
  quit          leave the game";

/// Draws the game as text on any writer.
struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> GameObserver for TerminalView<W> {
    fn invalid_word(&mut self, word: &str) {
        self.print(&format!("Sorry, '{}' is not a valid word!", word));
    }

    fn refresh(&mut self, session: &GameSession) {
        self.print(&BoardView(session).to_string());
    }
}

/// Text rendering of the board, the word being spelled and the score sheet.
struct BoardView<'a>(&'a GameSession);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let grid = session.grid();
        let cols = grid.cols().max(1);

        write!(f, "    ")?;
        for col in 0..grid.cols() {
            write!(f, "  {:<3}", col)?;
        }
        writeln!(f)?;

        for (index, (id, tile)) in grid.iter().enumerate() {
            if index % cols == 0 {
                write!(f, "{:>3} ", index / cols)?;
            }
            match session.state_for(id, tile) {
                TileState::Used => write!(f, "  .  ")?,
                TileState::Active => write!(f, "[{}{:<2}]", tile.letter(), tile.value())?,
                TileState::Inactive => write!(f, " {}{:<2} ", tile.letter(), tile.value())?,
            }
            if index % cols == cols - 1 {
                writeln!(f)?;
            }
        }

        writeln!(f, "Word: {}", session.current_word())?;
        writeln!(f, "Current score: {}", session.score())?;
        write!(f, "Words scored:")?;
        for scored in session.history() {
            write!(f, "\n  {}", scored)?;
        }
        Ok(())
    }
}

fn run<R: BufRead, W: Write>(
    controller: &mut GameController<TerminalView<W>>,
    input: R,
    config: &GameConfig,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] | ["exit"] => break,
            ["help"] | ["?"] => controller.observer_mut().print(HELP),
            ["submit"] | ["s"] => {
                if let Submission::Scored(scored) = controller.on_submit()? {
                    controller
                        .observer_mut()
                        .print(&format!("Scored {}", scored));
                }
            }
            ["new"] | ["n"] => controller.on_new_game()?,
            ["show"] => {
                let text = BoardView(controller.session()).to_string();
                controller.observer_mut().print(&text);
            }
            ["json"] => {
                let json = serde_json::to_string_pretty(&controller.session().snapshot())?;
                controller.observer_mut().print(&json);
            }
            ["hint"] | ["h"] => {
                let words = controller
                    .session()
                    .remaining_words(config.hint_min_length)?;
                let text = if words.is_empty() {
                    "No words left on this board.".to_string()
                } else {
                    let shown: Vec<String> = words
                        .iter()
                        .take(config.hint_limit)
                        .map(ToString::to_string)
                        .collect();
                    format!("{} words left, try: {}", words.len(), shown.join(", "))
                };
                controller.observer_mut().print(&text);
            }
            [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) => {
                    let Some(id) = controller.session().grid().tile_at(row, col) else {
                        controller
                            .observer_mut()
                            .print(&format!("There is no tile at {} {}", row, col));
                        continue;
                    };
                    match controller.on_tile_clicked(id)? {
                        SelectOutcome::Ignored(IgnoreReason::NotAdjacent) => controller
                            .observer_mut()
                            .print("Pick a tile next to the last one."),
                        SelectOutcome::Ignored(IgnoreReason::Used) => {}
                        SelectOutcome::Selected | SelectOutcome::Deselected { .. } => {}
                    }
                }
                _ => controller.observer_mut().print(HELP),
            },
            _ => controller.observer_mut().print(HELP),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting bogglish");
    let config = GameConfig::from_env();

    let dictionary = Dictionary::from_file(&config.dictionary_path)
        .context("cannot start a game without a dictionary")?;
    let session = GameSession::new(Arc::new(dictionary), &config)?;

    let mut view = TerminalView::new(io::stdout());
    view.print(HELP);
    view.refresh(&session);

    let mut controller = GameController::new(session, view);
    run(&mut controller, io::stdin().lock(), &config)?;

    info!(
        "Leaving with a score of {}",
        controller.session().score()
    );
    Ok(())
}
