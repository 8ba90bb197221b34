// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Result recording and winner/loser propagation.

use crate::bracket::{Bracket, SlotPosition};
use crate::error::DomainError;
use crate::matches::{MatchId, MatchStatus, Slot};
use crate::types::ParticipantId;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// What a recorded result changed in the bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advancement {
    /// The match the result was recorded for.
    pub match_id: MatchId,
    /// The winning participant.
    pub winner: ParticipantId,
    /// The losing participant.
    pub loser: ParticipantId,
    /// Set when this loss knocked the loser out of the tournament.
    pub eliminated: Option<ParticipantId>,
    /// Matches that became playable as a consequence of this result.
    pub newly_ready: Vec<MatchId>,
    /// Set when this result decided the tournament.
    pub champion: Option<ParticipantId>,
}

/// Converts a submitted score to a stored score.
fn to_score(match_id: MatchId, value: i64) -> Result<u32, DomainError> {
    if value < 0 {
        return Err(DomainError::InvalidScore {
            match_id,
            reason: format!("score {value} is negative"),
        });
    }
    u32::try_from(value).map_err(|_| DomainError::InvalidScore {
        match_id,
        reason: format!("score {value} exceeds the maximum of {}", u32::MAX),
    })
}

impl Bracket {
    /// Records a verified result and advances the winner (and, in
    /// double-elimination, the loser) into their next matches.
    ///
    /// Validation happens before anything is modified, so a rejected result
    /// leaves the bracket unchanged.
    ///
    /// # Arguments
    ///
    /// * `match_id` - The match being reported
    /// * `score_a` - Score for slot A
    /// * `score_b` - Score for slot B
    /// * `verified_by` - Who verified the result
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match does not exist (`MatchNotFound`)
    /// - The match is not `ReadyToPlay` (`MatchNotReady`)
    /// - A score is negative or out of range (`InvalidScore`)
    /// - The scores are equal (`DrawNotAllowed`)
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        score_a: i64,
        score_b: i64,
        verified_by: &str,
    ) -> Result<Advancement, DomainError> {
        let index: usize = self
            .index_of(match_id)
            .ok_or(DomainError::MatchNotFound(match_id))?;

        let status: MatchStatus = self.matches[index].status;
        if status != MatchStatus::ReadyToPlay {
            return Err(DomainError::MatchNotReady { match_id, status });
        }

        let score_a: u32 = to_score(match_id, score_a)?;
        let score_b: u32 = to_score(match_id, score_b)?;
        if score_a == score_b {
            return Err(DomainError::DrawNotAllowed {
                match_id,
                score: score_a,
            });
        }

        let (winner, loser): (ParticipantId, ParticipantId) = {
            let current = &self.matches[index];
            match (current.slot_a.participant(), current.slot_b.participant()) {
                (Some(a), Some(b)) if score_a > score_b => (a.clone(), b.clone()),
                (Some(a), Some(b)) => (b.clone(), a.clone()),
                _ => return Err(DomainError::MatchNotReady { match_id, status }),
            }
        };

        let ready_before: HashSet<MatchId> = self.ready_matches().iter().map(|m| m.id).collect();

        {
            let current = &mut self.matches[index];
            current.score_a = Some(score_a);
            current.score_b = Some(score_b);
            current.verified_by = Some(verified_by.to_string());
            current.winner = Some(winner.clone());
            current.status = MatchStatus::Completed;
        }

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.propagate(index, &mut queue);
        self.settle(queue);

        let newly_ready: Vec<MatchId> = self
            .ready_matches()
            .iter()
            .map(|m| m.id)
            .filter(|id| !ready_before.contains(id))
            .collect();
        let eliminated: Option<ParticipantId> = (self.losses(&loser)
            >= self.mode.losses_to_eliminate())
        .then(|| loser.clone());

        Ok(Advancement {
            match_id,
            winner,
            loser,
            eliminated,
            newly_ready,
            champion: self.champion.clone(),
        })
    }

    /// Re-opens a completed match so a corrected result can be submitted.
    ///
    /// Every match reachable from the re-opened match (through winner or
    /// loser advancement) is invalidated: slots filled from invalidated
    /// matches return to their sources, recorded results are discarded and
    /// those matches go back to `Pending`. The re-opened match itself returns
    /// to `ReadyToPlay` and any champion is cleared.
    ///
    /// # Arguments
    ///
    /// * `match_id` - The match to re-open
    ///
    /// # Returns
    ///
    /// The ids of the invalidated downstream matches, in match order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The match does not exist (`MatchNotFound`)
    /// - The match is not completed, or was decided by a bye (`MatchNotReopenable`)
    pub fn reopen_match(&mut self, match_id: MatchId) -> Result<Vec<MatchId>, DomainError> {
        let index: usize = self
            .index_of(match_id)
            .ok_or(DomainError::MatchNotFound(match_id))?;

        let target = &self.matches[index];
        if target.status != MatchStatus::Completed {
            return Err(DomainError::MatchNotReopenable {
                match_id,
                reason: "match has not been completed",
            });
        }
        if !target.is_played() {
            return Err(DomainError::MatchNotReopenable {
                match_id,
                reason: "byes are decided when the bracket is built",
            });
        }

        let mut invalidated: BTreeSet<usize> = BTreeSet::new();
        let mut queue: VecDeque<usize> = VecDeque::from([index]);
        while let Some(current) = queue.pop_front() {
            for &(downstream, _) in &self.dependents[current] {
                if invalidated.insert(downstream) {
                    queue.push_back(downstream);
                }
            }
        }

        let stale: HashSet<MatchId> = invalidated
            .iter()
            .chain(std::iter::once(&index))
            .map(|&i| self.matches[i].id)
            .collect();
        let is_stale = |slot: &Slot| slot.upstream().is_some_and(|id| stale.contains(&id));

        for &downstream in &invalidated {
            let reset = &mut self.matches[downstream];
            if is_stale(&reset.source_a) {
                reset.slot_a = reset.source_a.clone();
            }
            if is_stale(&reset.source_b) {
                reset.slot_b = reset.source_b.clone();
            }
            reset.clear_result();
            reset.status = MatchStatus::Pending;
        }

        let target = &mut self.matches[index];
        target.clear_result();
        target.status = MatchStatus::ReadyToPlay;
        self.champion = None;

        Ok(invalidated
            .into_iter()
            .map(|i| self.matches[i].id)
            .collect())
    }

    /// Forwards the outcome of a completed match into its dependents.
    ///
    /// Touched dependents are queued for [`Bracket::settle`].
    pub(crate) fn propagate(&mut self, index: usize, queue: &mut VecDeque<usize>) {
        let (winner, loser, winners_side): (Slot, Slot, Option<ParticipantId>) = {
            let decided = &self.matches[index];
            (
                decided.winner.clone().map_or(Slot::Bye, Slot::Participant),
                decided.loser().cloned().map_or(Slot::Bye, Slot::Participant),
                decided.slot_a.participant().cloned(),
            )
        };

        if index == self.deciding_match {
            match self.reset_match {
                None => {
                    self.champion = winner.participant().cloned();
                    return;
                }
                Some(reset) => {
                    // The winners champion has not lost yet; a win ends it.
                    if winner.participant().is_some() && winner.participant() == winners_side.as_ref()
                    {
                        self.champion = winner.participant().cloned();
                        let reset_match = &mut self.matches[reset];
                        reset_match.slot_a = Slot::Bye;
                        reset_match.slot_b = Slot::Bye;
                        queue.push_back(reset);
                        return;
                    }
                }
            }
        }

        if Some(index) == self.reset_match
            && let Some(champion) = winner.participant()
        {
            self.champion = Some(champion.clone());
        }

        let dependents: Vec<(usize, SlotPosition)> = self.dependents[index].clone();
        for (downstream, position) in dependents {
            let target = &mut self.matches[downstream];
            let source: &Slot = match position {
                SlotPosition::A => &target.source_a,
                SlotPosition::B => &target.source_b,
            };
            let value: Slot = match source {
                Slot::WinnerOf(_) => winner.clone(),
                Slot::LoserOf(_) => loser.clone(),
                Slot::Participant(_) | Slot::Bye => continue,
            };
            match position {
                SlotPosition::A => target.slot_a = value,
                SlotPosition::B => target.slot_b = value,
            }
            queue.push_back(downstream);
        }
    }

    /// Re-evaluates queued matches until no further byes cascade.
    ///
    /// A match with two participants becomes `ReadyToPlay`. A participant
    /// facing a bye wins without playing, and a match between two byes
    /// completes with no winner; both outcomes are propagated in turn.
    pub(crate) fn settle(&mut self, mut queue: VecDeque<usize>) {
        while let Some(index) = queue.pop_front() {
            let current = &mut self.matches[index];
            if current.status == MatchStatus::Completed {
                continue;
            }
            let walkover: Option<Option<ParticipantId>> = match (&current.slot_a, &current.slot_b)
            {
                (Slot::Participant(_), Slot::Participant(_)) => {
                    current.status = MatchStatus::ReadyToPlay;
                    None
                }
                (Slot::Participant(p), Slot::Bye) | (Slot::Bye, Slot::Participant(p)) => {
                    Some(Some(p.clone()))
                }
                (Slot::Bye, Slot::Bye) => Some(None),
                _ => {
                    current.status = MatchStatus::Pending;
                    None
                }
            };
            if let Some(winner) = walkover {
                current.clear_result();
                current.winner = winner;
                current.status = MatchStatus::Completed;
                self.propagate(index, &mut queue);
            }
        }
    }
}
