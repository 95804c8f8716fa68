use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Interval of the tick that refreshes the clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// Emitted once per [`TICK_INTERVAL`] to redraw the clock.
    Tick,
    /// Crossterm events.
    ///
    /// These events are emitted by the terminal.
    Crossterm(CrosstermEvent),
}

/// Terminal event handler.
///
/// Events are produced by a background task and consumed one at a time by the application loop,
/// so handlers never overlap.
#[derive(Debug)]
pub struct EventHandler {
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns the task producing events.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender);
        tokio::spawn(async { actor.run().await });
        Self { receiver }
    }

    /// Receives the next event, waiting until one is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the event task has stopped, which only happens when the terminal event
    /// stream fails.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }
}

/// A task that forwards crossterm events and emits tick events on a fixed schedule.
struct EventTask {
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    async fn run(self) -> color_eyre::Result<()> {
        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    fn send(&self, event: Event) {
        // Shutting down the app drops the receiver, so a failed send is expected here.
        let _ = self.sender.send(event);
    }
}
