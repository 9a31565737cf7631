//! Debounced, generation-keyed name availability check
//!
//! Every name edit bumps a generation counter. A debounce timer and the
//! directory query both carry the generation they were issued for, and their
//! results are applied only while it is still the latest one. Superseded
//! timers and checks are dropped, whatever order they complete in.

/// Availability state of the name field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NameStatus {
    /// Nothing entered
    #[default]
    Empty,
    /// Edited, waiting for the debounce window to pass
    Settling,
    /// Query outstanding
    Checking,
    Available,
    Taken,
}

/// What to do once a debounce window closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// A newer edit arrived; ignore
    Stale,
    /// Resolved without a new query: empty, unchanged since the last answer,
    /// or already being checked
    Resolved,
    /// Query the directory for this name
    Check(String),
}

#[derive(Debug, Clone, Default)]
pub struct NameCheck {
    generation: u64,
    status: NameStatus,
    /// Last name the directory answered for, and whether it was taken
    last_answer: Option<(String, bool)>,
    /// Outstanding query: the generation it was issued for and the name
    in_flight: Option<(u64, String)>,
}

impl NameCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &NameStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, NameStatus::Settling | NameStatus::Checking)
    }

    pub fn is_taken(&self) -> bool {
        self.status == NameStatus::Taken
    }

    /// Record an edit; returns the generation the debounce timer must carry
    pub fn begin_edit(&mut self) -> u64 {
        self.generation += 1;
        self.status = NameStatus::Settling;
        self.generation
    }

    /// The debounce window for `generation` closed with `name` in the field
    pub fn settle(&mut self, generation: u64, name: &str) -> Settled {
        if generation != self.generation {
            return Settled::Stale;
        }

        if name.is_empty() {
            self.status = NameStatus::Empty;
            return Settled::Resolved;
        }

        if let Some((answered, taken)) = &self.last_answer {
            if answered == name {
                self.status = if *taken {
                    NameStatus::Taken
                } else {
                    NameStatus::Available
                };
                return Settled::Resolved;
            }
        }

        self.status = NameStatus::Checking;
        if self.in_flight.as_ref().is_some_and(|(_, asked)| asked == name) {
            return Settled::Resolved;
        }

        self.in_flight = Some((generation, name.to_string()));
        Settled::Check(name.to_string())
    }

    /// Apply a directory answer; returns false when it was superseded
    ///
    /// A failed query leaves the name available and is not remembered, so the
    /// same name is asked about again after the next edit. The outstanding
    /// query also answers later edits that settled back on its name; when the
    /// field has moved on, its answer is only remembered.
    pub fn complete(&mut self, generation: u64, name: &str, answer: Result<bool, String>) -> bool {
        let outstanding = self
            .in_flight
            .as_ref()
            .is_some_and(|(issued, asked)| *issued == generation && asked == name);
        if outstanding {
            self.in_flight = None;
        }

        let current = generation == self.generation || outstanding;
        if !current || self.status != NameStatus::Checking {
            if let (true, Ok(taken)) = (outstanding, answer) {
                self.last_answer = Some((name.to_string(), taken));
            }
            return false;
        }

        match answer {
            Ok(taken) => {
                self.status = if taken {
                    NameStatus::Taken
                } else {
                    NameStatus::Available
                };
                self.last_answer = Some((name.to_string(), taken));
            }
            Err(_) => {
                self.status = NameStatus::Available;
                self.last_answer = None;
            }
        }
        true
    }
}
