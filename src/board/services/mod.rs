//! Application services for board orchestration.

mod board;

pub use board::BoardService;
