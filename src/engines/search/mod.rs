pub mod chromosome;
pub mod elites;
pub mod engine;
pub mod operators;
pub mod population;
pub mod progress;
pub mod selection;

pub use chromosome::Chromosome;
pub use elites::EliteSelection;
pub use engine::{ProgressCallback, SearchConfig, SearchEngine, SearchOutcome};
pub use population::Population;
pub use progress::{ChannelProgress, ConsoleProgress, ProgressMessage};
