//! Game adapters.
//!
//! Each game supplies its state, move generator, terminal test and static
//! evaluation through [`GameAdapter`](crate::game::GameAdapter). All search
//! logic lives in [`search`](crate::search).

pub mod connect_four;
pub mod nim;
pub mod tictactoe;

pub use connect_four::ConnectFour;
pub use nim::Nim;
pub use tictactoe::TicTacToe;
