use async_trait::async_trait;
use duel_lib::players::{Player, PlayerInputError};
use duel_lib::rules::player_actions::{MatchView, PlayerAction, SkillChoice, SkillSlot};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Reads the player's choices from stdin.
pub(crate) struct CliPlayer {
    basic_attack_name: String,
    lines: Lines<BufReader<Stdin>>,
}

impl CliPlayer {
    pub fn new(basic_attack_name: impl Into<String>) -> Self {
        Self {
            basic_attack_name: basic_attack_name.into(),
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    fn print_choices(&self, view: &MatchView, skills: &[SkillChoice]) {
        println!(" == turn {} == ", view.turn);
        println!("0) {} (basic attack)", self.basic_attack_name);
        for choice in skills {
            let note = if choice.usable { "" } else { " (unavailable)" };
            println!("{}) {}{note}", choice.slot.0 + 1, choice.name);
        }
    }

    async fn get_input<T: std::str::FromStr>(&mut self) -> Result<T, PlayerInputError> {
        loop {
            let line = self
                .lines
                .next_line()
                .await
                .map_err(|_| PlayerInputError)?
                .ok_or(PlayerInputError)?;

            match line.trim().parse::<T>() {
                Ok(v) => return Ok(v),
                Err(_) => println!("Parse failed. Please try again:"),
            }
        }
    }

    async fn get_index_lower_than(&mut self, upper_bound: usize) -> Result<usize, PlayerInputError> {
        loop {
            let a = self.get_input::<usize>().await?;
            if a < upper_bound {
                return Ok(a);
            }
            println!("Input should be smaller than {upper_bound}");
        }
    }
}

#[async_trait]
impl Player for CliPlayer {
    async fn choose_action(
        &mut self,
        view: &MatchView,
        skills: &[SkillChoice],
    ) -> Result<PlayerAction, PlayerInputError> {
        self.print_choices(view, skills);

        let index = self.get_index_lower_than(skills.len() + 1).await?;
        if index == 0 {
            Ok(PlayerAction::BasicAttack)
        } else {
            Ok(PlayerAction::UseSkill(SkillSlot(index - 1)))
        }
    }

    fn notify_rejected(&mut self, reason: &str) {
        println!("{reason}");
    }
}
