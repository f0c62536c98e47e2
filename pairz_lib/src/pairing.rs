//! Bracket pairing: partition the roster into fixed rating bands, shuffle
//! each band, and pair sequentially. Randomness is injected through
//! [`Shuffler`] so production pairing stays unseeded while tests pin a seed.

use crate::error::Result;
use crate::model::Player;
use crate::presenter::Presenter;
use rand::seq::SliceRandom;

/// Fixed, non-overlapping rating bands, ascending. Iteration order over
/// [`Band::ALL`] is part of the pairing contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Novice,
    Intermediate,
    ClubPlayer,
    Expert,
    Grandmaster,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Novice,
        Band::Intermediate,
        Band::ClubPlayer,
        Band::Expert,
        Band::Grandmaster,
    ];

    /// Band for a rating. Bounds: `<1000`, `[1000,1500)`, `[1500,2000)`,
    /// `[2000,2500)`, `>=2500`.
    pub fn of(elo: i32) -> Band {
        match elo {
            i32::MIN..=999 => Band::Novice,
            1000..=1499 => Band::Intermediate,
            1500..=1999 => Band::ClubPlayer,
            2000..=2499 => Band::Expert,
            _ => Band::Grandmaster,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Novice => "Novice (<1000)",
            Band::Intermediate => "Intermediate (1000-1500)",
            Band::ClubPlayer => "Club Player (1500-2000)",
            Band::Expert => "Expert (2000-2500)",
            Band::Grandmaster => "Grandmaster (>2500)",
        }
    }
}

/// One pairing. `black == None` is a BYE: the band had odd population and
/// this player sat out. Both sides are finalized display strings; the
/// renderer never needs the live `Player` records.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingRow {
    pub bracket: Band,
    pub white: String,
    pub black: Option<String>,
}

impl PairingRow {
    pub fn is_bye(&self) -> bool {
        self.black.is_none()
    }
}

/// Injected randomness for band shuffling.
pub trait Shuffler {
    fn shuffle(&mut self, players: &mut [Player]);
}

/// Production shuffler backed by the thread-local generator. Pairing is
/// intentionally unseeded: every invocation is independent and
/// non-reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn shuffle(&mut self, players: &mut [Player]) {
        players.shuffle(&mut rand::thread_rng());
    }
}

/// Partition, shuffle per band, pair sequentially. Bands are visited in
/// ascending order; empty bands produce no rows; an odd band leaves its
/// last shuffled player a BYE.
pub fn generate_pairings(players: &[Player], shuffler: &mut dyn Shuffler) -> Vec<PairingRow> {
    let mut rows = Vec::new();

    for band in Band::ALL {
        let mut pool: Vec<Player> = players
            .iter()
            .filter(|p| Band::of(p.elo) == band)
            .cloned()
            .collect();
        if pool.is_empty() {
            continue;
        }

        shuffler.shuffle(&mut pool);

        for pair in pool.chunks(2) {
            match pair {
                [a, b] => rows.push(PairingRow {
                    bracket: band,
                    white: a.display_name(),
                    black: Some(b.display_name()),
                }),
                [a] => rows.push(PairingRow {
                    bracket: band,
                    white: a.display_name(),
                    black: None,
                }),
                _ => {}
            }
        }
    }

    rows
}

/// Generate pairings and hand the finalized batch to the presenter, once,
/// after all bands are processed. Zero players is a no-op: no rows, and the
/// presenter is never invoked.
pub fn run_pairings(
    players: &[Player],
    shuffler: &mut dyn Shuffler,
    presenter: &mut dyn Presenter,
) -> Result<Vec<PairingRow>> {
    let rows = generate_pairings(players, shuffler);
    if rows.is_empty() {
        return Ok(rows);
    }
    presenter.present(&rows)?;
    Ok(rows)
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Shuffler;
    use crate::model::Player;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Deterministic shuffler for tests.
    pub struct SeededShuffler {
        rng: StdRng,
    }

    impl SeededShuffler {
        pub fn new(seed: u64) -> Self {
            Self {
                rng: StdRng::seed_from_u64(seed),
            }
        }
    }

    impl Shuffler for SeededShuffler {
        fn shuffle(&mut self, players: &mut [Player]) {
            players.shuffle(&mut self.rng);
        }
    }

    /// Keeps roster order, so tests can assert the sequential pairing walk.
    pub struct IdentityShuffler;

    impl Shuffler for IdentityShuffler {
        fn shuffle(&mut self, _players: &mut [Player]) {}
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{IdentityShuffler, SeededShuffler};
    use super::*;
    use crate::model::Title;
    use chrono::NaiveDate;

    fn player(id: u32, elo: i32) -> Player {
        Player {
            id,
            name: format!("P{}", id),
            elo,
            title: Title::None,
            registered_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Band::of(999), Band::Novice);
        assert_eq!(Band::of(1000), Band::Intermediate);
        assert_eq!(Band::of(1499), Band::Intermediate);
        assert_eq!(Band::of(1500), Band::ClubPlayer);
        assert_eq!(Band::of(1999), Band::ClubPlayer);
        assert_eq!(Band::of(2000), Band::Expert);
        assert_eq!(Band::of(2499), Band::Expert);
        assert_eq!(Band::of(2500), Band::Grandmaster);
        assert_eq!(Band::of(-50), Band::Novice);
    }

    #[test]
    fn test_empty_roster_produces_no_rows() {
        let rows = generate_pairings(&[], &mut IdentityShuffler);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_even_band_pairs_all() {
        let players = vec![player(1, 1200), player(2, 1200), player(3, 1300), player(4, 1400)];
        let rows = generate_pairings(&players, &mut IdentityShuffler);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.is_bye()));
    }

    #[test]
    fn test_odd_band_leaves_one_bye() {
        let players = vec![player(1, 800), player(2, 850), player(3, 900)];
        let rows = generate_pairings(&players, &mut IdentityShuffler);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().filter(|r| r.is_bye()).count(), 1);
        // The bye is the last row of the band walk.
        assert!(rows[1].is_bye());
    }

    #[test]
    fn test_sequential_walk_pairs_adjacent_positions() {
        let players = vec![player(1, 1200), player(2, 1200), player(3, 1200), player(4, 1200)];
        let rows = generate_pairings(&players, &mut IdentityShuffler);

        assert_eq!(rows[0].white, "P1 [1200]");
        assert_eq!(rows[0].black.as_deref(), Some("P2 [1200]"));
        assert_eq!(rows[1].white, "P3 [1200]");
        assert_eq!(rows[1].black.as_deref(), Some("P4 [1200]"));
    }

    #[test]
    fn test_players_stay_inside_their_band() {
        let players = vec![player(1, 999), player(2, 2500), player(3, 999), player(4, 2600)];
        let rows = generate_pairings(&players, &mut SeededShuffler::new(7));

        for row in &rows {
            match row.bracket {
                Band::Novice => {
                    assert!(row.white.contains("[999]"));
                }
                Band::Grandmaster => {
                    assert!(row.white.contains("[25") || row.white.contains("[26"));
                }
                other => panic!("unexpected band {:?}", other),
            }
        }
    }

    #[test]
    fn test_bands_emitted_in_ascending_order() {
        let players = vec![player(1, 2600), player(2, 500), player(3, 1700), player(4, 2100)];
        let rows = generate_pairings(&players, &mut IdentityShuffler);

        let bands: Vec<Band> = rows.iter().map(|r| r.bracket).collect();
        assert_eq!(
            bands,
            vec![Band::Novice, Band::ClubPlayer, Band::Expert, Band::Grandmaster]
        );
    }

    #[test]
    fn test_every_player_appears_exactly_once() {
        let players: Vec<Player> = (1..=11)
            .map(|i| player(i, 700 + (i as i32) * 230))
            .collect();
        let rows = generate_pairings(&players, &mut SeededShuffler::new(42));

        let mut seen = Vec::new();
        for row in &rows {
            seen.push(row.white.clone());
            if let Some(black) = &row.black {
                seen.push(black.clone());
            }
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), players.len());
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let players: Vec<Player> = (1..=8).map(|i| player(i, 1200)).collect();

        let a = generate_pairings(&players, &mut SeededShuffler::new(9));
        let b = generate_pairings(&players, &mut SeededShuffler::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_titled_player_display_in_rows() {
        let mut magnus = player(1, 2850);
        magnus.name = "Magnus".to_string();
        magnus.title = Title::GM;
        let players = vec![magnus];

        let rows = generate_pairings(&players, &mut IdentityShuffler);
        assert_eq!(rows[0].white, "Magnus (GM) [2850]");
        assert!(rows[0].is_bye());
    }
}
