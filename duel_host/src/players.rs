mod cli_player;

pub(crate) use cli_player::CliPlayer;
