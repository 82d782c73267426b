use tracing::debug;

use super::grid::TileId;
use super::session::{GameSession, SelectOutcome, Submission};
use crate::error::Result;

/// The rendering side of the game. Implementors draw the session and tell
/// the player about rejected words.
pub trait GameObserver {
    fn invalid_word(&mut self, word: &str);

    fn refresh(&mut self, session: &GameSession);
}

/// Entry points for player actions. Forwards them to the session and lets
/// the observer know when there is something new to show.
pub struct GameController<O: GameObserver> {
    session: GameSession,
    observer: O,
}

impl<O: GameObserver> GameController<O> {
    pub fn new(session: GameSession, observer: O) -> Self {
        Self { session, observer }
    }

    pub fn on_tile_clicked(&mut self, id: TileId) -> Result<SelectOutcome> {
        let outcome = self.session.select(id)?;
        if outcome.changed_state() {
            self.observer.refresh(&self.session);
        } else {
            debug!("Click on {} changed nothing: {:?}", id, outcome);
        }
        Ok(outcome)
    }

    pub fn on_submit(&mut self) -> Result<Submission> {
        let submission = self.session.submit()?;
        match &submission {
            Submission::Scored(_) => self.observer.refresh(&self.session),
            Submission::Rejected { word } => self.observer.invalid_word(word),
        }
        Ok(submission)
    }

    pub fn on_new_game(&mut self) -> Result<()> {
        self.session.reset()?;
        self.observer.refresh(&self.session);
        Ok(())
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
