/// Display-side copy of the session score.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    score: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard::default()
    }

    pub fn update(&mut self, score: u32) {
        self.score = score;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn label(&self) -> String {
        format!("Score: {}", self.score)
    }
}
