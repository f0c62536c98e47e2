//! Player registration: sequential ids, the title-grant protocol, and the
//! transactional append-and-persist step.
//!
//! Registration is all-or-nothing: the new player is appended to the
//! in-memory roster and the roster saved; if the save fails, the append is
//! rolled back and the error returned, so memory never runs ahead of disk.

use crate::error::Result;
use crate::messages::CmdMessage;
use crate::model::{Player, Roster, Title, TitleRequest};
use crate::store::RosterStore;
use chrono::Local;

/// Ratings above this trigger the title-grant protocol at registration.
/// At or below it no title request is considered, whatever the input.
pub const TITLE_PROMPT_THRESHOLD: i32 = 1800;

/// How a title request was resolved during registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleDecision {
    Granted(Title),
    /// The requested title has a rating floor the player does not meet.
    /// The player is still registered, untitled.
    Rejected { requested: Title, minimum: i32 },
    /// Input was not a known title code.
    Unrecognized,
    /// No request was made: rating at or below the threshold, no input, or
    /// an explicit `none`.
    NotRequested,
}

/// A completed registration: the stored player plus the title decision,
/// ready to be rendered by the UI layer.
#[derive(Debug, Clone)]
pub struct Registered {
    pub player: Player,
    pub decision: TitleDecision,
}

impl Registered {
    pub fn messages(&self) -> Vec<CmdMessage> {
        let mut messages = Vec::new();

        match &self.decision {
            TitleDecision::Granted(title @ (Title::FM | Title::CM)) => {
                messages.push(CmdMessage::success(format!("{} title accepted.", title)));
            }
            TitleDecision::Granted(title) => {
                messages.push(CmdMessage::success(format!("{} title verified.", title)));
            }
            TitleDecision::Rejected { requested, minimum } => {
                messages.push(CmdMessage::warning(format!(
                    "Rejected: {} title requires minimum {} ELO (you have {}).",
                    requested, minimum, self.player.elo
                )));
            }
            TitleDecision::Unrecognized => {
                messages.push(CmdMessage::info("Input ignored or unknown title."));
            }
            TitleDecision::NotRequested => {}
        }

        messages.push(CmdMessage::success(format!(
            "Player registered: {}",
            self.player.display_name()
        )));
        messages
    }
}

pub struct Registry<S: RosterStore> {
    store: S,
    roster: Roster,
}

impl<S: RosterStore> Registry<S> {
    /// Load whatever the store has; a missing or corrupt document starts
    /// the registry empty.
    pub fn new(store: S) -> Self {
        let roster = store.load();
        Self { store, roster }
    }

    /// Read-only projection in registration order, for the admin view.
    pub fn players(&self) -> &[Player] {
        &self.roster.players
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Register a player. `title_input` is the raw operator answer to the
    /// title prompt; it is only consulted when `elo` clears the threshold.
    /// A rejected or unrecognized title never fails the registration.
    pub fn register(
        &mut self,
        name: &str,
        elo: i32,
        title_input: Option<&str>,
    ) -> Result<Registered> {
        let decision = decide_title(elo, title_input);
        let title = match decision {
            TitleDecision::Granted(title) => title,
            _ => Title::None,
        };

        let player = Player {
            id: self.roster.next_id(),
            name: name.to_string(),
            elo,
            title,
            registered_date: Local::now().date_naive(),
        };

        self.roster.players.push(player.clone());
        if let Err(err) = self.store.save(&self.roster) {
            // Roll back so the registry never diverges from disk.
            self.roster.players.pop();
            return Err(err);
        }

        Ok(Registered { player, decision })
    }
}

fn decide_title(elo: i32, input: Option<&str>) -> TitleDecision {
    if elo <= TITLE_PROMPT_THRESHOLD {
        return TitleDecision::NotRequested;
    }
    let Some(input) = input else {
        return TitleDecision::NotRequested;
    };

    match Title::parse_request(input) {
        TitleRequest::Declined => TitleDecision::NotRequested,
        TitleRequest::Unrecognized(_) => TitleDecision::Unrecognized,
        TitleRequest::Requested(title) => match title.minimum_elo() {
            Some(minimum) if elo < minimum => TitleDecision::Rejected {
                requested: title,
                minimum,
            },
            _ => TitleDecision::Granted(title),
        },
    }
}
