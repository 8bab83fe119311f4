pub mod game_testers;
pub mod games;
pub mod publishers;
pub mod testers;
