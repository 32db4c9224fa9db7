//! Background search dispatch.
//!
//! A `SearchTask` runs the bounded search on a worker thread that owns a
//! private clone of the position, and hands back at most one result through a
//! single-slot channel. The caller polls or waits with the live position; a
//! result computed for a position that has since changed is reported as
//! stale and never returned as a move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use crate::game_state::game_state::{GameState, PositionSnapshot};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::PieceSquareScorer;
use crate::search::negamax::{search_bounded, SearchConfig, SearchResult};

/// Outcome of checking on a running task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPoll {
    /// The worker is still searching.
    Pending,
    /// Best move for the position the task was spawned from, with the
    /// search's score and node count.
    Ready { best_move: Move, score: i32, nodes: u64 },
    /// The search produced no move; the caller should use the greedy fallback.
    NoMove,
    /// The live position no longer matches the one being searched.
    Stale,
    /// `cancel` was called before a result was taken.
    Cancelled,
    /// An earlier `poll` already returned the worker's report.
    Consumed,
    /// The worker went away without reporting, for example after a panic.
    Disconnected,
}

pub struct SearchTask {
    snapshot: PositionSnapshot,
    cancel: Arc<AtomicBool>,
    receiver: Receiver<SearchResult>,
    handle: Option<JoinHandle<()>>,
    consumed: bool,
}

impl SearchTask {
    /// Starts searching `game_state` on a new worker thread.
    pub fn spawn(game_state: &GameState, config: SearchConfig) -> Self {
        let (sender, receiver) = mpsc::sync_channel(1);
        let cancel = Arc::new(AtomicBool::new(false));
        let worker_cancel = Arc::clone(&cancel);
        let mut worker_state = game_state.clone();

        info!(depth = config.depth, ply = game_state.ply(), "spawning search worker");

        let handle = thread::spawn(move || {
            let moves = worker_state.legal_moves();
            let result = search_bounded(
                &mut worker_state,
                &moves,
                &config,
                &PieceSquareScorer,
                Some(&worker_cancel),
            );
            if worker_cancel.load(Ordering::Relaxed) {
                debug!("search worker cancelled; dropping partial result");
                return;
            }
            // The receiver may already be gone; nothing is waiting then.
            let _ = sender.send(result);
        });

        Self {
            snapshot: game_state.snapshot(),
            cancel,
            receiver,
            handle: Some(handle),
            consumed: false,
        }
    }

    /// Asks the worker to stop. Any result it produces is discarded.
    pub fn cancel(&self) {
        if !self.cancel.swap(true, Ordering::Relaxed) {
            info!(ply = self.snapshot.ply, "search worker cancel requested");
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Non-blocking check against the live position. Once the report has
    /// been returned, later calls yield `Consumed`.
    pub fn poll(&mut self, live: &GameState) -> TaskPoll {
        if self.consumed {
            return TaskPoll::Consumed;
        }
        if let Some(early) = self.precheck(live) {
            return early;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.consumed = true;
                self.finish(result)
            }
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Disconnected,
        }
    }

    /// Blocks until the worker reports.
    pub fn wait(self, live: &GameState) -> TaskPoll {
        if self.consumed {
            return TaskPoll::Consumed;
        }
        if let Some(early) = self.precheck(live) {
            return early;
        }
        match self.receiver.recv() {
            Ok(result) => self.finish(result),
            Err(_) => TaskPoll::Disconnected,
        }
    }

    fn precheck(&self, live: &GameState) -> Option<TaskPoll> {
        if self.is_cancelled() {
            return Some(TaskPoll::Cancelled);
        }
        if live.snapshot() != self.snapshot {
            self.cancel();
            return Some(TaskPoll::Stale);
        }
        None
    }

    fn finish(&self, result: SearchResult) -> TaskPoll {
        match result.best_move {
            Some(best_move) => TaskPoll::Ready {
                best_move,
                score: result.best_score,
                nodes: result.nodes,
            },
            None => TaskPoll::NoMove,
        }
    }
}

impl Drop for SearchTask {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
