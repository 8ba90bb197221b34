// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bracket construction and read-only bracket views.
//!
//! A bracket is built once from the seeded participant list. Its topology
//! (which match feeds which slot) never changes afterwards; recording and
//! re-opening results only changes the contents of matches.

use crate::error::DomainError;
use crate::matches::{Match, MatchId, MatchStatus, Slot};
use crate::seeding::{bracket_size, standard_seed_order};
use crate::types::{BracketSide, Participant, ParticipantId, TournamentId, TournamentMode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Which slot of a downstream match an upstream match feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotPosition {
    A,
    B,
}

/// A group of participants sharing a final standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The shared rank (1 is the champion).
    pub rank: usize,
    /// Participants holding this rank.
    pub participants: Vec<ParticipantId>,
}

/// The complete match structure of one tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    pub(crate) tournament: TournamentId,
    pub(crate) mode: TournamentMode,
    pub(crate) seeds: Vec<Participant>,
    pub(crate) matches: Vec<Match>,
    pub(crate) winners_rounds: Vec<Vec<usize>>,
    pub(crate) losers_rounds: Vec<Vec<usize>>,
    pub(crate) final_rounds: Vec<Vec<usize>>,
    /// The match whose result can crown a champion (winners final or grand final).
    pub(crate) deciding_match: usize,
    /// The bracket-reset match, double-elimination only.
    pub(crate) reset_match: Option<usize>,
    /// For each match, the downstream matches and slots its outcome fills.
    pub(crate) dependents: Vec<Vec<(usize, SlotPosition)>>,
    pub(crate) champion: Option<ParticipantId>,
}

/// Allocates match numbers while the topology is laid out.
struct Layout {
    tournament: TournamentId,
    matches: Vec<Match>,
    next_number: u32,
}

impl Layout {
    const fn new(tournament: TournamentId) -> Self {
        Self {
            tournament,
            matches: Vec::new(),
            next_number: 1,
        }
    }

    fn id_of(&self, index: usize) -> MatchId {
        self.matches[index].id
    }

    fn push(
        &mut self,
        side: BracketSide,
        round: usize,
        position: usize,
        source_a: Slot,
        source_b: Slot,
    ) -> usize {
        let id: MatchId = MatchId::new(self.tournament, self.next_number);
        self.next_number += 1;
        self.matches
            .push(Match::new(id, side, round, position, source_a, source_b));
        self.matches.len() - 1
    }

    /// Lays out the winners bracket. The final pushed match is the winners final.
    fn winners_bracket(&mut self, seeds: &[Participant], size: usize) -> Vec<Vec<usize>> {
        let order: Vec<usize> = standard_seed_order(size);
        let seed_slot = |seed: usize| -> Slot {
            seeds
                .get(seed - 1)
                .map_or(Slot::Bye, |p| Slot::Participant(p.id.clone()))
        };

        let mut rounds: Vec<Vec<usize>> = Vec::new();
        let first: Vec<usize> = order
            .chunks(2)
            .enumerate()
            .map(|(position, pair)| {
                self.push(
                    BracketSide::Winners,
                    0,
                    position,
                    seed_slot(pair[0]),
                    seed_slot(pair[1]),
                )
            })
            .collect();
        rounds.push(first);

        while let Some(previous) = rounds.last().filter(|r| r.len() > 1).cloned() {
            let round_index: usize = rounds.len();
            let next: Vec<usize> = previous
                .chunks(2)
                .enumerate()
                .map(|(position, pair)| {
                    let a: Slot = Slot::WinnerOf(self.id_of(pair[0]));
                    let b: Slot = Slot::WinnerOf(self.id_of(pair[1]));
                    self.push(BracketSide::Winners, round_index, position, a, b)
                })
                .collect();
            rounds.push(next);
        }
        rounds
    }

    /// Lays out the losers bracket fed by the given winners rounds.
    ///
    /// Round 1 pairs the losers of winners round 1. Each following winners
    /// round drops its losers into a round of their own, against the
    /// survivors of the losers bracket; between drop rounds the survivors
    /// play each other. Losers of winners rounds 2, 4, ... enter in reverse
    /// order. The final pushed match is the losers final.
    fn losers_bracket(&mut self, winners_rounds: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let mut rounds: Vec<Vec<usize>> = Vec::new();
        let Some(first_winners) = winners_rounds.first().filter(|_| winners_rounds.len() >= 2)
        else {
            return rounds;
        };

        let mut previous: Vec<usize> = first_winners
            .chunks(2)
            .enumerate()
            .map(|(position, pair)| {
                let a: Slot = Slot::LoserOf(self.id_of(pair[0]));
                let b: Slot = Slot::LoserOf(self.id_of(pair[1]));
                self.push(BracketSide::Losers, 0, position, a, b)
            })
            .collect();
        rounds.push(previous.clone());

        for (winners_round, dropping) in winners_rounds.iter().enumerate().skip(1) {
            let reversed: bool = winners_round % 2 == 1;
            let count: usize = previous.len();
            let round_index: usize = rounds.len();
            let mut drop_round: Vec<usize> = Vec::with_capacity(count);
            for (position, &survivor) in previous.iter().enumerate() {
                let entering: usize = if reversed {
                    dropping[count - 1 - position]
                } else {
                    dropping[position]
                };
                let a: Slot = Slot::WinnerOf(self.id_of(survivor));
                let b: Slot = Slot::LoserOf(self.id_of(entering));
                drop_round.push(self.push(BracketSide::Losers, round_index, position, a, b));
            }
            rounds.push(drop_round.clone());
            previous = drop_round;

            if winners_round + 1 < winners_rounds.len() {
                let round_index: usize = rounds.len();
                let consolidation: Vec<usize> = previous
                    .chunks(2)
                    .enumerate()
                    .map(|(position, pair)| {
                        let a: Slot = Slot::WinnerOf(self.id_of(pair[0]));
                        let b: Slot = Slot::WinnerOf(self.id_of(pair[1]));
                        self.push(BracketSide::Losers, round_index, position, a, b)
                    })
                    .collect();
                rounds.push(consolidation.clone());
                previous = consolidation;
            }
        }
        rounds
    }
}

/// Builds a bracket from seeded participants.
///
/// Seeds are placed with the standard `1 vs P, 2 vs P-1, ...` pattern where
/// `P` is the smallest power of two that fits every participant. Positions
/// beyond the participant count are byes; bye matches complete immediately
/// and their winners are advanced before this function returns.
///
/// # Arguments
///
/// * `tournament` - The owning tournament (used for match ids)
/// * `seeds` - Participants in seed order (index 0 is seed 1)
/// * `mode` - Single- or double-elimination
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than two participants are supplied
/// - The same participant id appears twice
pub fn build_bracket(
    tournament: TournamentId,
    seeds: &[Participant],
    mode: TournamentMode,
) -> Result<Bracket, DomainError> {
    if seeds.len() < 2 {
        return Err(DomainError::InsufficientParticipants { count: seeds.len() });
    }

    let mut seen: HashSet<&ParticipantId> = HashSet::new();
    for participant in seeds {
        if !seen.insert(&participant.id) {
            return Err(DomainError::DuplicateParticipant {
                tournament,
                participant: participant.id.clone(),
            });
        }
    }

    let size: usize = bracket_size(seeds.len());
    let mut layout: Layout = Layout::new(tournament);
    let winners_rounds: Vec<Vec<usize>> = layout.winners_bracket(seeds, size);
    let winners_final: usize = layout.matches.len() - 1;

    let (losers_rounds, final_rounds, deciding_match, reset_match) = match mode {
        TournamentMode::SingleElimination => (Vec::new(), Vec::new(), winners_final, None),
        TournamentMode::DoubleElimination => {
            let losers_rounds: Vec<Vec<usize>> = layout.losers_bracket(&winners_rounds);
            let losers_champion: Slot = if losers_rounds.is_empty() {
                Slot::LoserOf(layout.id_of(winners_final))
            } else {
                Slot::WinnerOf(layout.id_of(layout.matches.len() - 1))
            };
            let grand_final: usize = layout.push(
                BracketSide::Final,
                0,
                0,
                Slot::WinnerOf(layout.id_of(winners_final)),
                losers_champion,
            );
            let grand_final_id: MatchId = layout.id_of(grand_final);
            let reset: usize = layout.push(
                BracketSide::Final,
                1,
                0,
                Slot::WinnerOf(grand_final_id),
                Slot::LoserOf(grand_final_id),
            );
            (
                losers_rounds,
                vec![vec![grand_final], vec![reset]],
                grand_final,
                Some(reset),
            )
        }
    };

    let mut bracket: Bracket = Bracket {
        tournament,
        mode,
        seeds: seeds.to_vec(),
        dependents: vec![Vec::new(); layout.matches.len()],
        matches: layout.matches,
        winners_rounds,
        losers_rounds,
        final_rounds,
        deciding_match,
        reset_match,
        champion: None,
    };
    bracket.link_dependents();

    let initial: VecDeque<usize> = (0..bracket.matches.len()).collect();
    bracket.settle(initial);

    Ok(bracket)
}

impl Bracket {
    fn link_dependents(&mut self) {
        for index in 0..self.matches.len() {
            let sources: [(SlotPosition, Option<MatchId>); 2] = [
                (SlotPosition::A, self.matches[index].source_a.upstream()),
                (SlotPosition::B, self.matches[index].source_b.upstream()),
            ];
            for (position, upstream) in sources {
                if let Some(upstream_index) = upstream.and_then(|id| self.index_of(id)) {
                    self.dependents[upstream_index].push((index, position));
                }
            }
        }
    }

    /// Maps a match id to its position in `matches`.
    pub(crate) fn index_of(&self, match_id: MatchId) -> Option<usize> {
        if match_id.tournament != self.tournament || match_id.number == 0 {
            return None;
        }
        let index: usize = usize::try_from(match_id.number).ok()? - 1;
        (index < self.matches.len()).then_some(index)
    }

    /// Returns the owning tournament.
    #[must_use]
    pub const fn tournament(&self) -> TournamentId {
        self.tournament
    }

    /// Returns the elimination format.
    #[must_use]
    pub const fn mode(&self) -> TournamentMode {
        self.mode
    }

    /// Returns the participants in seed order.
    #[must_use]
    pub fn seeds(&self) -> &[Participant] {
        &self.seeds
    }

    /// Looks up a participant by id.
    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.seeds.iter().find(|p| &p.id == id)
    }

    /// Returns every match, ordered by match number.
    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Looks up a match by id.
    #[must_use]
    pub fn get_match(&self, match_id: MatchId) -> Option<&Match> {
        self.index_of(match_id).map(|index| &self.matches[index])
    }

    fn rounds_for(&self, side: BracketSide) -> &[Vec<usize>] {
        match side {
            BracketSide::Winners => &self.winners_rounds,
            BracketSide::Losers => &self.losers_rounds,
            BracketSide::Final => &self.final_rounds,
        }
    }

    /// Returns how many rounds a side has.
    #[must_use]
    pub fn round_count(&self, side: BracketSide) -> usize {
        self.rounds_for(side).len()
    }

    /// Returns the matches of one round in bracket order.
    ///
    /// Returns `None` if the side has no round at `round_index`.
    #[must_use]
    pub fn get_round(&self, side: BracketSide, round_index: usize) -> Option<Vec<&Match>> {
        self.rounds_for(side)
            .get(round_index)
            .map(|round| round.iter().map(|&index| &self.matches[index]).collect())
    }

    /// Returns the match that decides the title on its first playing.
    ///
    /// This is the winners final in single-elimination and the first grand
    /// final match in double-elimination.
    #[must_use]
    pub fn deciding_match(&self) -> &Match {
        &self.matches[self.deciding_match]
    }

    /// Returns the bracket-reset match, if the format has one.
    #[must_use]
    pub fn reset_match(&self) -> Option<&Match> {
        self.reset_match.map(|index| &self.matches[index])
    }

    /// Returns the champion once the bracket is decided.
    #[must_use]
    pub const fn champion(&self) -> Option<&ParticipantId> {
        self.champion.as_ref()
    }

    /// Returns whether a champion has been determined.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.champion.is_some()
    }

    /// Returns the number of matches that were not decided by a bye.
    ///
    /// In single-elimination this is always one less than the number of
    /// participants.
    #[must_use]
    pub fn contested_match_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.is_bye()).count()
    }

    /// Returns the number of matches decided by a bye.
    #[must_use]
    pub fn bye_match_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_bye()).count()
    }

    /// Returns the matches currently waiting for a result.
    #[must_use]
    pub fn ready_matches(&self) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| m.status == MatchStatus::ReadyToPlay)
            .collect()
    }

    /// Returns the number of recorded losses for a participant.
    #[must_use]
    pub fn losses(&self, participant: &ParticipantId) -> u8 {
        let count: usize = self
            .matches
            .iter()
            .filter(|m| m.loser() == Some(participant))
            .count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    /// Returns participants that have been knocked out, in seed order.
    #[must_use]
    pub fn eliminated(&self) -> Vec<&ParticipantId> {
        let limit: u8 = self.mode.losses_to_eliminate();
        self.seeds
            .iter()
            .map(|p| &p.id)
            .filter(|id| self.losses(id) >= limit)
            .collect()
    }

    /// Returns the final standings once a champion is known.
    ///
    /// Participants knocked out in the same round share a rank. Later
    /// knockouts rank higher; the final side outranks the losers side,
    /// which outranks the winners side.
    #[must_use]
    pub fn placements(&self) -> Option<Vec<Placement>> {
        let champion: &ParticipantId = self.champion.as_ref()?;
        let limit: usize = usize::from(self.mode.losses_to_eliminate());

        let mut stages: BTreeMap<(BracketSide, usize), Vec<ParticipantId>> = BTreeMap::new();
        for participant in self.seeds.iter().map(|p| &p.id) {
            if participant == champion {
                continue;
            }
            let knockout: Option<&Match> = self
                .matches
                .iter()
                .filter(|m| m.loser() == Some(participant))
                .nth(limit - 1);
            if let Some(knockout) = knockout {
                stages
                    .entry((knockout.side, knockout.round))
                    .or_default()
                    .push(participant.clone());
            }
        }

        let mut placements: Vec<Placement> = vec![Placement {
            rank: 1,
            participants: vec![champion.clone()],
        }];
        let mut placed: usize = 1;
        for participants in stages.into_values().rev() {
            let count: usize = participants.len();
            placements.push(Placement {
                rank: placed + 1,
                participants,
            });
            placed += count;
        }
        Some(placements)
    }
}
