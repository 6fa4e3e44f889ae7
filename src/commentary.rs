//! Radio chatter reacting to game events.
//!
//! This is cosmetic and lives entirely outside the simulation. The frame
//! driver forwards [`GameEvent`]s to a [`Radio`], which hands them to a
//! provider on its own worker thread and delivers finished lines back
//! through a channel. Nothing here can block a tick or fail one: provider
//! errors become fixed fallback lines.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender as ChannelSender, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::constants::RADIO_LOG_CAPACITY;
use crate::error::CommentaryError;
use crate::world::GameEvent;

/// Substituted when a provider replies with nothing.
pub const EMPTY_REPLY_FALLBACK: &str = "Floor it, driver!";
/// Substituted when a provider fails outright.
pub const FAILURE_FALLBACK: &str = "Watch out for the cops!";
/// Posted straight to the log when a patrol is rammed.
pub const ARREST_LINE: &str = "Patrol arrested!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    CollectTurbo,
    LevelUp,
    PoliceChase,
    GameOver,
}

impl EventKind {
    /// Captures get a fixed line instead of commentary, so they map to nothing.
    pub fn for_event(event: &GameEvent) -> Option<EventKind> {
        match event {
            GameEvent::Started => Some(EventKind::Start),
            GameEvent::TurboCollected => Some(EventKind::CollectTurbo),
            GameEvent::LifeLost { .. } => Some(EventKind::PoliceChase),
            GameEvent::GameOver { .. } => Some(EventKind::GameOver),
            GameEvent::PatrolCaptured { .. } => None,
        }
    }

    pub fn sender(self) -> Sender {
        match self {
            EventKind::PoliceChase => Sender::Dispatch,
            _ => Sender::Dj,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Dj,
    Dispatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

/// The few most recent messages, newest first.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: VecDeque<RadioMessage>,
    next_id: u64,
}

impl MessageLog {
    pub fn push(&mut self, sender: Sender, text: String) {
        self.next_id += 1;
        self.messages.push_front(RadioMessage {
            id: self.next_id,
            sender,
            text,
        });
        self.messages.truncate(RADIO_LOG_CAPACITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RadioMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Something that can come up with a line for an event. May be slow.
pub trait CommentaryProvider: Send {
    fn commentate(&mut self, kind: EventKind) -> Result<String, CommentaryError>;
}

/// Always returns a usable line: the provider's, or a fixed fallback.
pub fn commentary_or_fallback(provider: &mut dyn CommentaryProvider, kind: EventKind) -> String {
    match provider.commentate(kind) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) | Err(CommentaryError::EmptyReply) => EMPTY_REPLY_FALLBACK.to_string(),
        Err(err) => {
            warn!("commentary for {kind:?} failed: {err}");
            FAILURE_FALLBACK.to_string()
        }
    }
}

/// Offline provider picking from a fixed set of lines per event.
pub struct CannedCommentary {
    rng: StdRng,
}

impl CannedCommentary {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn lines(kind: EventKind) -> &'static [&'static str] {
        match kind {
            EventKind::Start => &[
                "Engines hot, streets cold. Go get that cash!",
                "Underground Radio is live. Drive like you mean it.",
                "Green lights all night. Let's roll.",
            ],
            EventKind::CollectTurbo => &[
                "Turbo engaged! Now they run from you!",
                "Nitro in the tank, cops in the rear-view. Ram 'em!",
                "Full boost! The hunters just became the hunted.",
            ],
            EventKind::LevelUp => &[
                "New sector, bigger stacks. Keep moving.",
                "Sector cleared. The next one pays better.",
            ],
            EventKind::PoliceChase => &[
                "All units, suspect vehicle sighted. Pursue.",
                "Dispatch here: unit down, send backup.",
                "Roadblocks going up. Nobody leaves this grid.",
            ],
            EventKind::GameOver => &[
                "Busted. The loot's in evidence now.",
                "That's the end of the road, driver.",
            ],
        }
    }
}

impl CommentaryProvider for CannedCommentary {
    fn commentate(&mut self, kind: EventKind) -> Result<String, CommentaryError> {
        Self::lines(kind)
            .choose(&mut self.rng)
            .map(|line| line.to_string())
            .ok_or(CommentaryError::EmptyReply)
    }
}

/// Fire-and-forget front end for a provider running on a worker thread.
pub struct Radio {
    requests: Option<ChannelSender<EventKind>>,
    bulletins: ChannelSender<(Sender, String)>,
    replies: Receiver<(Sender, String)>,
    worker: Option<JoinHandle<()>>,
}

impl Radio {
    pub fn spawn(mut provider: Box<dyn CommentaryProvider>) -> std::io::Result<Radio> {
        let (request_tx, request_rx) = mpsc::channel::<EventKind>();
        let (reply_tx, reply_rx) = mpsc::channel();
        let bulletins = reply_tx.clone();
        let worker = thread::Builder::new()
            .name("radio".to_string())
            .spawn(move || {
                for kind in request_rx {
                    let text = commentary_or_fallback(provider.as_mut(), kind);
                    if reply_tx.send((kind.sender(), text)).is_err() {
                        break;
                    }
                }
                debug!("radio worker shutting down");
            })?;
        Ok(Radio {
            requests: Some(request_tx),
            bulletins,
            replies: reply_rx,
            worker: Some(worker),
        })
    }

    /// Queues a request and returns at once.
    pub fn request(&self, kind: EventKind) {
        debug!("radio request {kind:?}");
        if let Some(requests) = &self.requests {
            if requests.send(kind).is_err() {
                warn!("radio worker is gone, dropping {kind:?}");
            }
        }
    }

    pub fn announce(&self, event: &GameEvent) {
        if let GameEvent::PatrolCaptured { .. } = event {
            // `replies` is owned by `self`, so the channel is open.
            let _ = self.bulletins.send((Sender::Dj, ARREST_LINE.to_string()));
            return;
        }
        if let Some(kind) = EventKind::for_event(event) {
            self.request(kind);
        }
    }

    /// Moves whatever has finished into `log` without waiting.
    pub fn poll(&self, log: &mut MessageLog) -> usize {
        let mut received = 0;
        loop {
            match self.replies.try_recv() {
                Ok((sender, text)) => {
                    log.push(sender, text);
                    received += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return received,
            }
        }
    }
}

impl Drop for Radio {
    fn drop(&mut self) {
        // Closing the request channel ends the worker's loop.
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("radio worker panicked");
            }
        }
    }
}
