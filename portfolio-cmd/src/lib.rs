//! Command implementations for the portfolio CLI.
//!
//! Each subcommand issues the same requests the site widgets do, once, and
//! prints the result. Mutating commands print the refreshed data afterwards.

use clap::Subcommand;
use portfolio_core::fact::pick_fact;
use portfolio_core::question::QuestionCount;
use portfolio_core::vote::Dog;

pub mod client;
pub mod output;

use client::BackendClient;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the bottled water rankings
    Rankings,

    /// Print visitor questions, newest first
    Questions {
        /// How many questions to fetch (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<QuestionCount>,
    },

    /// Submit a question, then print the questions
    Ask {
        /// Question text
        content: String,
    },

    /// Delete every stored question, then print the (empty) list
    ClearQuestions,

    /// Print the Teddy vs. Zoe vote tally
    Votes,

    /// Vote for a dog, then print the tally
    Vote {
        /// `teddy` or `zoe`
        dog: Dog,
    },

    /// Print a random fun fact
    Fact,

    /// Print the landmarks shown on the map
    Landmarks,
}

/// A sample in `[0, 1)` taken from the sub-second part of the system clock.
fn clock_sample() -> f64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    f64::from(nanos) / 1_000_000_000.0
}

/// Run `command` against the backend and return the text to print.
pub async fn execute(
    command: Command,
    client: &BackendClient,
    default_count: QuestionCount,
) -> anyhow::Result<String> {
    let text = match command {
        Command::Rankings => output::numbered_list(&client.rankings().await?),
        Command::Questions { count } => {
            output::numbered_list(&client.questions(count.unwrap_or(default_count)).await?)
        }
        Command::Ask { content } => {
            if content.is_empty() {
                anyhow::bail!("Question text is empty");
            }
            client.ask(&content).await?;
            output::numbered_list(&client.questions(default_count).await?)
        }
        Command::ClearQuestions => {
            client.clear_questions().await?;
            output::numbered_list(&client.questions(default_count).await?)
        }
        Command::Votes => output::tally(&client.votes().await?),
        Command::Vote { dog } => {
            client.vote(dog).await?;
            output::tally(&client.votes().await?)
        }
        Command::Fact => format!("{}\n", pick_fact(clock_sample())),
        Command::Landmarks => output::landmarks(),
    };
    Ok(text)
}

pub async fn run(
    command: Command,
    client: &BackendClient,
    default_count: QuestionCount,
) -> anyhow::Result<()> {
    print!("{}", execute(command, client, default_count).await?);
    Ok(())
}
