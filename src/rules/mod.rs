//! Game rules: win detection, draw detection and turn derivation.

mod draw;
mod turn;
mod win;

pub use draw::is_full;
pub use turn::next_player;
pub use win::check_winner;
