use structopt::StructOpt;

use ttt_sim::prelude::*;
use ttt_sim_cli_utils::cli_args::SearchOpts;

mod compare;
use compare::{print_report, run_compare, ReportError};

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Tic-Tac-Toe game tree search benchmark")]
pub enum BenchmarkOpts {
    #[structopt(help = "Compare minimax and alpha-beta on the fixed test positions.")]
    Compare {
        #[structopt(long = "--json", help = "Emit the report as JSON")]
        json: bool,

        // Both strategies always run here, so no algorithm flag.
        #[structopt(
            short = "a",
            long = "--ai-mark",
            help = "Mark played by the AI (X or O). The other mark belongs to the human."
        )]
        ai_mark: Option<Mark>,
    },
    #[structopt(help = "Evaluate a single position with the selected algorithm.")]
    Evaluate {
        #[structopt(help = "Board literal: 9 cells of 'X', 'O' or '.'")]
        board: String,

        #[structopt(flatten)]
        search: SearchOpts,
    },
}

fn main() -> Result<(), ReportError> {
    match BenchmarkOpts::from_args() {
        BenchmarkOpts::Compare { json, ai_mark } => {
            let report = run_compare(Matchup::versus(ai_mark.unwrap_or(Mark::X)))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report)?;
            }
        }
        BenchmarkOpts::Evaluate { board, search } => {
            let board: Board = board.parse()?;
            let matchup = search.matchup();
            let mut s = search.make_search();
            let t0 = instant::Instant::now();
            let result = s.evaluate(&board, true, matchup);
            let dt_ns = t0.elapsed().as_nanos();
            print!("{board}");
            println!("score={} | {}", result.score, result.counter.summary(dt_ns));
        }
    }
    Ok(())
}
