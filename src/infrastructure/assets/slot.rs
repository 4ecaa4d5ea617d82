/// Resolution state for one asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    Idle,
    Pending,
    Resolved(String),
    Unresolved,
}

/// Handed out by [`AssetSlot::request`]; a completion is only applied when
/// its ticket still matches the slot's current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub filename: String,
}

/// Tracks the latest requested reference and discards stale completions.
///
/// Requests are sequenced; changing the reference while a lookup is in
/// flight starts a new cycle, and the superseded lookup's completion is
/// ignored when it eventually lands. The in-flight request itself is not
/// cancelled, interest in its result simply lapses.
#[derive(Debug, Default)]
pub struct AssetSlot {
    seq: u64,
    state: AssetState,
}

impl AssetSlot {
    pub fn new() -> Self {
        AssetSlot::default()
    }

    /// Starts a resolution cycle for `reference`. An empty or absent
    /// reference settles as `Unresolved` immediately, with no ticket and no
    /// outbound call.
    pub fn request(&mut self, reference: Option<&str>) -> Option<Ticket> {
        self.seq += 1;

        match reference.map(str::trim) {
            Some(reference) if !reference.is_empty() => {
                self.state = AssetState::Pending;
                Some(Ticket {
                    seq: self.seq,
                    filename: super::resolver::bare_path(reference),
                })
            }
            _ => {
                self.state = AssetState::Unresolved;
                None
            }
        }
    }

    /// Applies a completed lookup. Returns false (and changes nothing) when
    /// the ticket was superseded by a newer request.
    pub fn complete(&mut self, ticket: &Ticket, url: Option<String>) -> bool {
        if ticket.seq != self.seq {
            return false;
        }

        self.state = match url {
            Some(url) => AssetState::Resolved(url),
            None => AssetState::Unresolved,
        };
        true
    }

    pub fn state(&self) -> &AssetState {
        &self.state
    }

    /// The signed URL, if the current cycle resolved one.
    pub fn url(&self) -> Option<&str> {
        match &self.state {
            AssetState::Resolved(url) => Some(url.as_str()),
            _ => None,
        }
    }
}
