//! Session-scoped state.
//!
//! Everything a user accumulates lives in one [`Session`]: the day's
//! challenge, the reflection journal and the random source used for draws.
//! Sessions are independent values; a [`SessionRegistry`] keeps several of
//! them apart inside one process. Nothing here is ever written to disk.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Quote;
use crate::challenge::{ChallengePicker, ChallengeState};
use crate::error::{Result, ValidationError};
use crate::inspiration;
use crate::reflection::{ReflectionEntry, ReflectionStore};
use crate::streak::StreakCalculator;

/// Snapshot for the progress tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub recent: Vec<ReflectionEntry>,
    pub streak: u32,
    pub total: usize,
}

pub struct Session {
    challenge: ChallengeState,
    reflections: ReflectionStore,
    picker: ChallengePicker,
    streaks: StreakCalculator,
    rng: Mcg128Xsl64,
}

impl Session {
    /// Session with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(Mcg128Xsl64::from_entropy())
    }

    /// Session whose draws are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Mcg128Xsl64::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    pub fn with_rng(rng: Mcg128Xsl64) -> Self {
        Self {
            challenge: ChallengeState::new(),
            reflections: ReflectionStore::new(),
            picker: ChallengePicker::new(),
            streaks: StreakCalculator::new(),
            rng,
        }
    }

    /// Today's challenge, drawn on first request of the day.
    pub fn current_challenge(&mut self, today: NaiveDate) -> String {
        self.picker
            .get_or_refresh(today, &mut self.challenge, &mut self.rng)
    }

    /// Record a reflection on today's challenge.
    ///
    /// The text is stored as given. An empty reflection is rejected and
    /// leaves the session untouched.
    pub fn submit_reflection(&mut self, today: NaiveDate, text: &str) -> Result<&ReflectionEntry> {
        if text.is_empty() {
            tracing::warn!(%today, "rejected empty reflection");
            return Err(ValidationError::EmptyReflection.into());
        }

        let challenge = self.current_challenge(today);
        tracing::info!(%today, chars = text.chars().count(), "reflection saved");
        Ok(self.reflections.submit(today, challenge, text))
    }

    pub fn streak(&self, today: NaiveDate) -> u32 {
        self.streaks.compute(self.reflections.dates(), today)
    }

    pub fn progress(&self, today: NaiveDate, limit: usize) -> Progress {
        Progress {
            recent: self
                .reflections
                .list_recent(limit)
                .into_iter()
                .cloned()
                .collect(),
            streak: self.streak(today),
            total: self.reflections.len(),
        }
    }

    /// A fresh quote on every call.
    pub fn quote(&mut self) -> &'static Quote {
        inspiration::random_quote(&mut self.rng)
    }

    pub fn reflections(&self) -> &ReflectionStore {
        &self.reflections
    }

    pub fn challenge_state(&self) -> &ChallengeState {
        &self.challenge
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("challenge", &self.challenge)
            .field("reflections", &self.reflections.len())
            .finish_non_exhaustive()
    }
}

/// Opaque session identifier carried by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// How long an untouched session is kept.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
/// Most sessions kept at once; the least recently seen is evicted first.
pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug)]
struct Tracked {
    session: Session,
    last_seen: Instant,
}

/// Independent sessions keyed by id.
///
/// Bounded both ways: sessions idle past the TTL are pruned whenever a new
/// one is created, and at capacity the least recently seen one makes room.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Tracked>,
    seed: Option<u64>,
    idle_ttl: Duration,
    capacity: usize,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// Registry whose new sessions all start from `seed`.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            sessions: HashMap::new(),
            seed,
            idle_ttl: DEFAULT_IDLE_TTL,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Override the idle TTL and capacity. A capacity of 0 is treated as 1.
    pub fn with_limits(mut self, idle_ttl: Duration, capacity: usize) -> Self {
        self.idle_ttl = idle_ttl;
        self.capacity = capacity.max(1);
        self
    }

    /// The session for `id`, created on first sight.
    pub fn get_or_create(&mut self, id: SessionId) -> &mut Session {
        self.get_or_create_at(id, Instant::now())
    }

    fn get_or_create_at(&mut self, id: SessionId, now: Instant) -> &mut Session {
        if !self.sessions.contains_key(&id) {
            self.make_room(now);
            tracing::debug!(session = %id, "new session");
        }
        let seed = self.seed;
        let tracked = self.sessions.entry(id).or_insert_with(|| Tracked {
            session: Session::from_seed(seed),
            last_seen: now,
        });
        tracked.last_seen = now;
        &mut tracked.session
    }

    /// An existing session, marked as seen. Never creates one.
    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        let tracked = self.sessions.get_mut(id)?;
        tracked.last_seen = Instant::now();
        Some(&mut tracked.session)
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id).map(|tracked| &tracked.session)
    }

    /// A throwaway session seeded like the registered ones, for requests
    /// that have no session yet and do not need to keep one.
    pub fn detached(&self) -> Session {
        Session::from_seed(self.seed)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn make_room(&mut self, now: Instant) {
        let ttl = self.idle_ttl;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, tracked| now.saturating_duration_since(tracked.last_seen) <= ttl);
        if self.sessions.len() < before {
            tracing::debug!(pruned = before - self.sessions.len(), "dropped idle sessions");
        }

        while self.sessions.len() >= self.capacity {
            let Some(oldest) = self
                .sessions
                .iter()
                .min_by_key(|(_, tracked)| tracked.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            tracing::debug!(session = %oldest, "evicted least recently seen session");
            self.sessions.remove(&oldest);
        }
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
