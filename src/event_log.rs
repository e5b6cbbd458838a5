//! JSON-lines event log.
//!
//! Subscribed to the engine as an observer. Each notification becomes one
//! line: a `state` record per accepted mutation and a single `game_over`
//! record when the game ends. Observers cannot return errors, so the first
//! write failure is latched, logging stops, and the host picks the error up
//! with [`EventLog::take_error`].

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{EngineObserver, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveRecord {
    pub kind: &'static str,
    pub x: i8,
    pub y: i8,
}

/// Flattened view of a `GameState` (the grid is left out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateRecord {
    pub seq: u64,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub active: Option<ActiveRecord>,
    pub next: &'static str,
    pub paused: bool,
    pub game_over: bool,
}

impl StateRecord {
    pub fn new(seq: u64, state: &GameState) -> Self {
        Self {
            seq,
            score: state.score,
            level: state.level,
            lines: state.lines,
            active: state.active.map(|piece| ActiveRecord {
                kind: piece.kind.as_str(),
                x: piece.position.x,
                y: piece.position.y,
            }),
            next: state.next.as_str(),
            paused: state.paused,
            game_over: state.game_over,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    State(StateRecord),
    GameOver(StateRecord),
}

/// Engine observer writing one JSON object per line.
pub struct EventLog<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
    error: Option<io::Error>,
    failed: bool,
}

impl EventLog<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
            error: None,
            failed: false,
        }
    }

    /// Records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Whether a write has failed; no further records are written once set.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// The latched write error, handed out once.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record<T: Serialize>(&mut self, record: &T) {
        if self.failed {
            return;
        }
        self.buf.clear();
        if let Err(err) = serde_json::to_writer(&mut self.buf, record) {
            self.latch(io::Error::other(err));
            return;
        }
        self.buf.push(b'\n');
        if let Err(err) = self.out.write_all(&self.buf) {
            self.latch(err);
            return;
        }
        self.seq += 1;
    }

    fn latch(&mut self, err: io::Error) {
        self.failed = true;
        self.error = Some(err);
    }
}

impl<W: Write> EngineObserver for EventLog<W> {
    fn on_state_change(&mut self, state: &GameState) {
        let record = LogRecord::State(StateRecord::new(self.seq, state));
        self.write_record(&record);
    }

    fn on_game_over(&mut self, state: &GameState) {
        let record = LogRecord::GameOver(StateRecord::new(self.seq, state));
        self.write_record(&record);
        if !self.failed {
            if let Err(err) = self.out.flush() {
                self.latch(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Engine;
    use crate::types::Command;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn lines(bytes: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(bytes)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn each_notification_is_one_line() {
        let log = Rc::new(RefCell::new(EventLog::new(Vec::new())));
        let mut engine = Engine::new(7);
        engine.subscribe(log.clone());

        engine.apply(Command::MoveLeft);
        engine.apply(Command::Pause);
        drop(engine);

        let log = Rc::try_unwrap(log).ok().unwrap().into_inner();
        let records = lines(&log.into_inner());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "state");
        assert_eq!(records[0]["seq"], 0);
        assert_eq!(records[1]["seq"], 1);
        assert_eq!(records[1]["paused"], true);
        assert_eq!(records[0]["level"], 1);
        assert!(records[0]["active"]["kind"].is_string());
    }

    #[test]
    fn game_over_record_follows_final_state() {
        let mut log = EventLog::new(Vec::new());
        let mut state = crate::core::GameState::fresh(
            crate::types::PieceKind::T,
            crate::types::PieceKind::O,
        );
        state.game_over = true;
        state.active = None;
        state.score = 300;

        log.on_state_change(&state);
        log.on_game_over(&state);

        let records = lines(&log.into_inner());
        assert_eq!(records[1]["type"], "game_over");
        assert_eq!(records[1]["score"], 300);
        assert!(records[1]["active"].is_null());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_latched_once() {
        let mut log = EventLog::new(Broken);
        let state = crate::core::GameState::fresh(
            crate::types::PieceKind::I,
            crate::types::PieceKind::I,
        );

        log.on_state_change(&state);
        log.on_state_change(&state);

        assert!(log.has_failed());
        assert_eq!(log.seq(), 0);
        assert!(log.take_error().is_some());
        assert!(log.take_error().is_none());
        assert!(log.has_failed());
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("unencodable record"))
        }
    }

    #[test]
    fn encode_failure_is_latched() {
        let mut log = EventLog::new(Vec::new());

        log.write_record(&Unencodable);

        assert!(log.has_failed());
        assert_eq!(log.seq(), 0);
        let err = log.take_error().unwrap();
        assert!(err.to_string().contains("unencodable record"));
        assert!(log.into_inner().is_empty());
    }
}
