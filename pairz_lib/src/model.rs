//! Domain model: players, titles, and the persisted roster.
//!
//! The on-disk document is a single JSON object `{"players": [...]}` where
//! each player carries `id`, `name`, `elo`, `title`, `registered_date`.
//! Titles serialize as their FIDE code (`"GM"`, `"IM"`, ...) with `"None"`
//! for untitled players, so the file stays readable and round-trips through
//! older data that predates the `title` field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// FIDE title held by a player. `None` is the untitled default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    #[default]
    #[serde(rename = "None")]
    None,
    CM,
    FM,
    NM,
    IM,
    GM,
}

/// Outcome of parsing an operator-entered title code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleRequest {
    /// A recognized title code (never `Title::None`).
    Requested(Title),
    /// The operator explicitly entered `none`.
    Declined,
    /// Anything else, kept verbatim for diagnostics.
    Unrecognized(String),
}

impl Title {
    /// Parse an operator-entered title code, case-insensitive and trimmed.
    pub fn parse_request(input: &str) -> TitleRequest {
        match input.trim().to_uppercase().as_str() {
            "GM" => TitleRequest::Requested(Title::GM),
            "IM" => TitleRequest::Requested(Title::IM),
            "NM" => TitleRequest::Requested(Title::NM),
            "FM" => TitleRequest::Requested(Title::FM),
            "CM" => TitleRequest::Requested(Title::CM),
            "NONE" => TitleRequest::Declined,
            other => TitleRequest::Unrecognized(other.to_string()),
        }
    }

    /// Minimum rating required to hold this title, if any.
    /// FM and CM carry no rating floor.
    pub fn minimum_elo(&self) -> Option<i32> {
        match self {
            Title::GM => Some(2500),
            Title::IM => Some(2200),
            Title::NM => Some(2000),
            Title::FM | Title::CM | Title::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Title::None)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Title::None => "None",
            Title::CM => "CM",
            Title::FM => "FM",
            Title::NM => "NM",
            Title::IM => "IM",
            Title::GM => "GM",
        };
        f.write_str(code)
    }
}

/// A registered player. Immutable once created; the only lifecycle event
/// after registration is deletion of the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub elo: i32,
    #[serde(default)]
    pub title: Title,
    pub registered_date: NaiveDate,
}

impl Player {
    /// Display form used everywhere a player is shown in a pairing:
    /// `"Magnus (GM) [2850]"`, with the title omitted for untitled players.
    pub fn display_name(&self) -> String {
        if self.title.is_none() {
            format!("{} [{}]", self.name, self.elo)
        } else {
            format!("{} ({}) [{}]", self.name, self.title, self.elo)
        }
    }
}

/// The whole persisted document. Insertion order is the only ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequential id for the next registration. Ids are never reused since
    /// players are never deleted individually.
    pub fn next_id(&self) -> u32 {
        self.players.len() as u32 + 1
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_parse_request_case_insensitive() {
        assert_eq!(Title::parse_request("gm"), TitleRequest::Requested(Title::GM));
        assert_eq!(Title::parse_request(" Fm "), TitleRequest::Requested(Title::FM));
        assert_eq!(Title::parse_request("CM"), TitleRequest::Requested(Title::CM));
    }

    #[test]
    fn test_parse_request_none_declines() {
        assert_eq!(Title::parse_request("none"), TitleRequest::Declined);
        assert_eq!(Title::parse_request("NONE"), TitleRequest::Declined);
    }

    #[test]
    fn test_parse_request_unrecognized() {
        assert_eq!(
            Title::parse_request("wgm"),
            TitleRequest::Unrecognized("WGM".to_string())
        );
        // Empty input is not a decline, it is noise.
        assert_eq!(
            Title::parse_request(""),
            TitleRequest::Unrecognized(String::new())
        );
    }

    #[test]
    fn test_minimum_elo_table() {
        assert_eq!(Title::GM.minimum_elo(), Some(2500));
        assert_eq!(Title::IM.minimum_elo(), Some(2200));
        assert_eq!(Title::NM.minimum_elo(), Some(2000));
        assert_eq!(Title::FM.minimum_elo(), None);
        assert_eq!(Title::CM.minimum_elo(), None);
    }

    #[test]
    fn test_display_name_with_title() {
        let player = Player {
            id: 1,
            name: "Magnus".to_string(),
            elo: 2850,
            title: Title::GM,
            registered_date: sample_date(),
        };
        assert_eq!(player.display_name(), "Magnus (GM) [2850]");
    }

    #[test]
    fn test_display_name_untitled() {
        let player = Player {
            id: 2,
            name: "Alice".to_string(),
            elo: 1500,
            title: Title::None,
            registered_date: sample_date(),
        };
        assert_eq!(player.display_name(), "Alice [1500]");
    }

    #[test]
    fn test_player_serialization_roundtrip() {
        let player = Player {
            id: 7,
            name: "Judit".to_string(),
            elo: 2735,
            title: Title::GM,
            registered_date: sample_date(),
        };

        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"title\":\"GM\""));
        assert!(json.contains("\"registered_date\":\"2026-01-15\""));

        let loaded: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, player);
    }

    #[test]
    fn test_untitled_serializes_as_none_string() {
        let player = Player {
            id: 1,
            name: "Alice".to_string(),
            elo: 1500,
            title: Title::None,
            registered_date: sample_date(),
        };
        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"title\":\"None\""));
    }

    #[test]
    fn test_legacy_player_without_title() {
        // Records written before the title field existed.
        let json = r#"{
            "id": 3,
            "name": "Old Timer",
            "elo": 1200,
            "registered_date": "2024-06-01"
        }"#;

        let loaded: Player = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.title, Title::None);
        assert_eq!(loaded.elo, 1200);
    }

    #[test]
    fn test_roster_next_id_sequential() {
        let mut roster = Roster::new();
        assert_eq!(roster.next_id(), 1);

        roster.players.push(Player {
            id: 1,
            name: "A".to_string(),
            elo: 1000,
            title: Title::None,
            registered_date: sample_date(),
        });
        assert_eq!(roster.next_id(), 2);
    }

    #[test]
    fn test_empty_roster_deserializes_from_bare_object() {
        let roster: Roster = serde_json::from_str("{}").unwrap();
        assert!(roster.is_empty());
    }
}
