//! Fixed-depth negamax alpha-beta search
//!
//! Every child is searched on its own copy of the position, so the committed
//! board is never touched and there is nothing to undo. Each fully searched
//! node is recorded in the transposition cache, keyed by its occupancy
//! fingerprint; the cache is not consulted for cutoffs.

use super::params::SearchParams;
use super::stats::SearchStats;
use super::tt::TranspositionCache;
use crate::board::{Move, Position};
use crate::eval::{evaluate, Score, INFINITY, LOSS_SCORE};
use crate::movegen::generate_moves;
use crate::utils::RayTable;
use crate::zobrist::ZobristKeys;

/// Main search engine
pub struct SearchEngine {
    /// Edge distances for the board geometry being searched
    rays: RayTable,

    /// Zobrist keys, generated once per geometry
    zobrist: ZobristKeys,

    /// Transposition cache
    tt: TranspositionCache,

    /// Search parameters
    params: SearchParams,

    /// Statistics of the last root search
    stats: SearchStats,
}

impl SearchEngine {
    /// Create a search engine for `width` x `height` boards with fresh random keys
    pub fn new(width: u8, height: u8, params: SearchParams) -> Self {
        Self::with_keys(ZobristKeys::new(width, height), params)
    }

    /// Create a search engine around an existing key table
    pub fn with_keys(zobrist: ZobristKeys, params: SearchParams) -> Self {
        Self {
            rays: RayTable::new(zobrist.width(), zobrist.height()),
            tt: TranspositionCache::new(params.cache_capacity),
            zobrist,
            params,
            stats: SearchStats::new(),
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.tt
    }

    pub fn zobrist(&self) -> &ZobristKeys {
        &self.zobrist
    }

    pub fn rays(&self) -> &RayTable {
        &self.rays
    }

    /// Static score of `pos` for its side to move
    pub fn evaluate(&self, pos: &Position) -> Score {
        evaluate(pos, pos.side_to_move())
    }

    /// Negamax score of `pos` for its side to move, searched `depth` plies
    /// with a full window. Always lies within `[-LOSS_SCORE, LOSS_SCORE]`.
    pub fn search(&mut self, pos: &Position, depth: u8) -> Score {
        self.search_window(pos, depth, -INFINITY, INFINITY)
    }

    /// Negamax score of `pos` within the window `(alpha, beta)` (fail-hard)
    pub fn search_window(&mut self, pos: &Position, depth: u8, alpha: Score, beta: Score) -> Score {
        self.prepare(pos);
        let score = self.negamax(pos, depth, alpha, beta);
        self.finish(depth, score);
        score
    }

    /// Strongest move for the side to move and its score, or `None` when it
    /// has no legal move. Among equal scores the first generated move wins.
    pub fn best_move(&mut self, pos: &Position, depth: u8) -> Option<(Move, Score)> {
        let depth = depth.max(1);
        self.prepare(pos);

        let mut best: Option<(Move, Score)> = None;
        let mut alpha = -INFINITY;
        self.stats.inc_node();

        for mv in generate_moves(pos, &self.rays) {
            let mut child = pos.clone();
            child.make_move(&mv);

            let score = -self.negamax(&child, depth - 1, -INFINITY, -alpha);
            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                alpha = score;
                best = Some((mv, score));
            }
        }

        if let Some((_, score)) = &best {
            self.store(pos, *score);
            self.finish(depth, *score);
        }
        best
    }

    /// Fail-hard negamax
    fn negamax(&mut self, pos: &Position, depth: u8, mut alpha: Score, beta: Score) -> Score {
        self.stats.inc_node();

        if depth == 0 {
            self.stats.inc_leaf();
            return evaluate(pos, pos.side_to_move());
        }

        let moves = generate_moves(pos, &self.rays);
        if moves.is_empty() {
            return -LOSS_SCORE;
        }

        for mv in &moves {
            let mut child = pos.clone();
            child.make_move(mv);

            let score = -self.negamax(&child, depth - 1, -beta, -alpha);
            if score >= beta {
                self.stats.inc_cutoff();
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        self.store(pos, alpha);
        alpha
    }

    fn store(&mut self, pos: &Position, score: Score) {
        let key = self.zobrist.hash(pos);
        self.tt.insert(key, score, pos.side_to_move());
        self.stats.inc_cache_store();
    }

    /// Reset per-search statistics, and rebuild the tables if the board
    /// geometry changed (old fingerprints are dropped with them)
    fn prepare(&mut self, pos: &Position) {
        if (pos.width(), pos.height()) != (self.zobrist.width(), self.zobrist.height()) {
            tracing::debug!(
                width = pos.width(),
                height = pos.height(),
                "board geometry changed, regenerating zobrist keys"
            );
            self.zobrist = ZobristKeys::new(pos.width(), pos.height());
            self.rays = RayTable::new(pos.width(), pos.height());
            self.tt.clear();
        }
        self.stats.reset();
        self.stats.start_timing();
    }

    fn finish(&mut self, depth: u8, score: Score) {
        self.stats.update_timing();
        tracing::debug!(
            depth,
            score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            cache = self.tt.size(),
            elapsed_ms = self.stats.search_time.as_millis() as u64,
            "search finished"
        );
    }
}
