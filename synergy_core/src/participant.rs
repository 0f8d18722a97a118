//! ParticipantDirectory - Who is playing and which synergies concern them

use crate::types::{ParticipantId, SynergyIndex};

/// Host-supplied list of participants
pub trait ParticipantDirectory {
    /// Every participant with its spectator flag
    fn participants(&self) -> Vec<(ParticipantId, bool)>;

    /// Registry entries the host tracks as relevant to this participant
    fn candidate_indices(&self, participant: ParticipantId) -> &[SynergyIndex];
}

/// One participant as stored in a [`Roster`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: ParticipantId,
    pub is_spectator: bool,
    pub candidates: Vec<SynergyIndex>,
}

/// Simple in-memory participant directory
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Add a participant (replaces an existing entry with the same id)
    pub fn join(&mut self, id: ParticipantId, is_spectator: bool) {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.is_spectator = is_spectator,
            None => self.entries.push(RosterEntry {
                id,
                is_spectator,
                candidates: Vec::new(),
            }),
        }
    }

    pub fn leave(&mut self, id: ParticipantId) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn set_spectator(&mut self, id: ParticipantId, is_spectator: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.is_spectator = is_spectator;
        }
    }

    /// Replace the candidate list of a participant
    pub fn set_candidates(&mut self, id: ParticipantId, candidates: Vec<SynergyIndex>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.candidates = candidates;
        }
    }

    pub fn get(&self, id: ParticipantId) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParticipantDirectory for Roster {
    fn participants(&self) -> Vec<(ParticipantId, bool)> {
        self.entries.iter().map(|e| (e.id, e.is_spectator)).collect()
    }

    fn candidate_indices(&self, participant: ParticipantId) -> &[SynergyIndex] {
        self.get(participant)
            .map(|e| e.candidates.as_slice())
            .unwrap_or(&[])
    }
}
