pub mod game_testers;
pub mod games;
pub mod publishers;
pub mod testers;

pub use game_testers::Entity as GameTesters;
pub use game_testers::Model as GameTester;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use publishers::Entity as Publishers;
pub use publishers::Model as Publisher;
pub use testers::Entity as Testers;
pub use testers::Model as Tester;
