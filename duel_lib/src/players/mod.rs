mod player;
mod random_player;

pub use {
    player::Player, player::PlayerInputError, random_player::RandomPlayer,
};
