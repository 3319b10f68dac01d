use crate::core::lookup::Lookup;
use crate::core::types::Signature;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use tracing::{debug, debug_span};

/// Text to display after a transition: committed words and the word being
/// typed, separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEvent {
    pub text: Arc<str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&RenderEvent) + Send>;

/// The four verbs a keypad front end can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadCommand {
    Digit(char),
    Cycle,
    Backspace,
    Commit,
}

impl KeypadCommand {
    /// Phone keypad layout: `2`-`9` type, `*` cycles, `#` deletes, `0` or
    /// space commits.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '2'..='9' => Some(KeypadCommand::Digit(key)),
            '*' => Some(KeypadCommand::Cycle),
            '#' => Some(KeypadCommand::Backspace),
            '0' | ' ' => Some(KeypadCommand::Commit),
            _ => None,
        }
    }
}

/// Incremental predictive-text state for one user.
///
/// Every edit of the typed signature recomputes the candidate set from the
/// lookup and selects its first word; `cycle` walks the set in ascending order
/// and wraps. Subscribers receive the rendered text after each transition.
///
/// A session is single-owner state. The lookup behind it is shared and
/// read-only.
pub struct TypingSession {
    lookup: Arc<dyn Lookup>,

    typed: Signature,
    /// Fixed iteration order over the current candidate set.
    candidates: Vec<String>,
    cursor: Option<usize>,
    committed: Vec<String>,

    text: Arc<str>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl TypingSession {
    pub fn new(lookup: Arc<dyn Lookup>) -> Self {
        Self {
            lookup,
            typed: Signature::new(),
            candidates: Vec::new(),
            cursor: None,
            committed: Vec::new(),
            text: Arc::from(""),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // -- observers ---------------------------------------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&RenderEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Render events delivered through a channel. Sends to a dropped receiver
    /// are ignored.
    pub fn subscribe_channel(&mut self) -> Receiver<RenderEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribe(move |event| {
            let _ = tx.send(event.clone());
        });
        rx
    }

    // -- state -------------------------------------------------------------

    pub fn typed_signature(&self) -> &Signature {
        &self.typed
    }

    /// Candidates in cycling order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn current_word(&self) -> Option<&str> {
        self.cursor.map(|i| self.candidates[i].as_str())
    }

    pub fn committed_words(&self) -> &[String] {
        &self.committed
    }

    /// Text last published to subscribers.
    pub fn text(&self) -> &str {
        &self.text
    }

    // -- transitions ---------------------------------------------------------

    pub fn apply(&mut self, command: KeypadCommand) {
        match command {
            KeypadCommand::Digit(d) => self.add_digit(d),
            KeypadCommand::Cycle => self.cycle(),
            KeypadCommand::Backspace => self.backspace(),
            KeypadCommand::Commit => self.commit(),
        }
    }

    /// Appends a digit and selects the first candidate for the new signature.
    /// Digits outside `'2'..='9'` simply leave no candidates.
    pub fn add_digit(&mut self, digit: char) {
        let _span = debug_span!("add_digit", %digit).entered();
        self.typed = self.typed.with_digit(digit);
        self.refresh();
        self.cycle();
    }

    /// Moves to the next candidate, wrapping after the last one.
    pub fn cycle(&mut self) {
        self.cursor = match (self.candidates.len(), self.cursor) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some((i + 1) % len),
        };
        debug!(cursor = ?self.cursor, word = ?self.current_word(), "cycle");
        self.publish();
    }

    /// Deletes the last typed digit. With nothing typed, reopens the last
    /// committed word for editing. With nothing committed either, does nothing.
    pub fn backspace(&mut self) {
        let _span = debug_span!("backspace").entered();
        if !self.typed.is_empty() {
            self.typed = self.typed.without_last();
        } else if let Some(word) = self.committed.pop() {
            debug!(%word, "reopening committed word");
            self.typed = self.lookup.encode(&word);
        } else {
            return;
        }
        self.refresh();
        self.cycle();
    }

    /// Finalizes the selected candidate, if any, and clears the word in
    /// progress.
    pub fn commit(&mut self) {
        let _span = debug_span!("commit").entered();
        if let Some(word) = self.current_word().map(str::to_string) {
            debug!(%word, "committed");
            self.committed.push(word);
        }
        self.typed = Signature::new();
        self.candidates.clear();
        self.cursor = None;
        self.publish();
    }

    /// Recomputes candidates for the typed signature and rewinds the cursor.
    fn refresh(&mut self) {
        self.candidates = self
            .lookup
            .query(self.typed.as_str())
            .into_iter()
            .collect();
        self.cursor = None;
        debug!(signature = %self.typed, candidates = self.candidates.len(), "candidates refreshed");
    }

    fn render(&self) -> String {
        let mut parts: Vec<&str> = self.committed.iter().map(String::as_str).collect();
        if !self.typed.is_empty() {
            if let Some(word) = self.current_word() {
                parts.push(word);
            }
        }
        parts.join(" ")
    }

    fn publish(&mut self) {
        self.text = Arc::from(self.render());
        let event = RenderEvent { text: Arc::clone(&self.text) };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}
