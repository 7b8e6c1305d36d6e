use super::engine::ProgressCallback;

/// Prints per-generation progress to stdout.
pub struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_generation_start(&mut self, generation: usize) {
        println!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        println!(
            "Generation {} complete. Best fitness: {:.4}",
            generation + 1,
            best_fitness
        );
    }
}

/// Streams progress over a channel, e.g. to a supervising thread.
pub struct ChannelProgress {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, best_fitness: f64 },
}

impl ChannelProgress {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgress {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
        });
    }
}
