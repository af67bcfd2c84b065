use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{poll, read, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use structopt::StructOpt;
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use ttt_sim::prelude::*;
use ttt_sim_cli_utils::cli_args::{GenericSearch, SearchOpts};

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Interactive Tic-Tac-Toe against the game tree search engine")]
struct AppOpts {
    #[structopt(flatten)]
    search: SearchOpts,

    #[structopt(long = "--ai-first", help = "Let the AI make the first move")]
    ai_first: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    HumanWin,
    AiWin,
    Draw,
}

impl Outcome {
    fn message(self) -> &'static str {
        match self {
            Outcome::HumanWin => "You win!",
            Outcome::AiWin => "AI wins!",
            Outcome::Draw => "Draw!",
        }
    }
}

struct App<B: Backend> {
    terminal: Terminal<B>,
    search: GenericSearch,
    matchup: Matchup,
    ai_first: bool,
    board: Board,
    status: String,
    outcome: Option<Outcome>,
}

impl<B: Backend> App<B> {
    fn reset(&mut self) {
        self.board = Board::empty();
        self.outcome = None;
        self.status = format!("Your move ({}): press 1-9.", self.matchup.human);
        if self.ai_first {
            self.ai_move();
        }
    }

    /// Win/draw detection after `mark` moved, in the order the rules
    /// require: the fresh win first, then the full-board draw.
    fn detect_outcome(&mut self, mark: Mark) {
        if self.board.is_win_for(mark) {
            self.outcome = Some(if mark == self.matchup.ai {
                Outcome::AiWin
            } else {
                Outcome::HumanWin
            });
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }
    }

    fn human_move(&mut self, cell_number: u8) {
        let Some(mv) = Move::from_cell_number(cell_number) else {
            self.status = "Enter a number from 1 to 9.".to_string();
            return;
        };
        let next = match self.board.apply(mv, self.matchup.human) {
            Ok(next) => next,
            Err(BoardError::CellOccupied(_)) => {
                self.status = format!("Cell {cell_number} is already taken.");
                return;
            }
            Err(e) => {
                self.status = format!("Invalid move: {e}");
                return;
            }
        };
        self.board = next;
        self.detect_outcome(self.matchup.human);
        if self.outcome.is_none() {
            self.ai_move();
        }
    }

    fn ai_move(&mut self) {
        let t0 = Instant::now();
        let result = self.search.search(&self.board, self.matchup);
        let Some(mv) = result.best_move else {
            self.status = "AI has no move.".to_string();
            return;
        };
        match self.board.apply(mv, self.matchup.ai) {
            Ok(next) => self.board = next,
            Err(e) => {
                self.status = format!("AI selected an illegal move: {e}");
                return;
            }
        }
        self.status = format!(
            "AI played cell {mv}: {} nodes in {:.2?}. Your move.",
            result.counter.states_visited,
            t0.elapsed()
        );
        self.detect_outcome(self.matchup.ai);
    }

    fn board_lines(board: &Board, matchup: Matchup) -> Vec<Spans<'static>> {
        let cell_span = |index: usize| -> Span<'static> {
            let mv = Move::new(index as u8).expect("cell index is in range");
            match board.get(mv) {
                Some(mark) => {
                    let color = if mark == matchup.ai {
                        Color::Red
                    } else {
                        Color::Cyan
                    };
                    Span::styled(
                        format!(" {mark} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )
                }
                None => Span::styled(
                    format!(" {} ", mv.cell_number()),
                    Style::default().fg(Color::DarkGray),
                ),
            }
        };

        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::raw("│"));
                }
                spans.push(cell_span(row * 3 + col));
            }
            lines.push(Spans::from(spans));
            if row < 2 {
                lines.push(Spans::from("───┼───┼───"));
            }
        }
        lines
    }

    fn render(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            board,
            matchup,
            status,
            outcome,
            ..
        } = self;
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(7),
                        Constraint::Length(2),
                        Constraint::Min(1),
                    ]
                    .as_ref(),
                )
                .split(f.size());

            let title = format!(" Tic-Tac-Toe: you are {}, the AI is {} ", matchup.human, matchup.ai);
            let grid = Paragraph::new(Self::board_lines(board, *matchup))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(grid, chunks[0]);

            let status_line = match outcome {
                Some(outcome) => Spans::from(vec![
                    Span::styled(
                        outcome.message(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" Press 'r' to play again."),
                ]),
                None => Spans::from(status.as_str()),
            };
            f.render_widget(Paragraph::new(status_line), chunks[1]);

            let help = Paragraph::new("1-9: place your mark | r: replay | q: quit")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(help, chunks[2]);
        })?;
        Ok(())
    }

    /// Returns true when the app should exit.
    fn keyboard(&mut self) -> crossterm::Result<bool> {
        if let Event::Key(kc) = read()? {
            match kc.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('r') => {
                    if self.outcome.is_some() {
                        self.reset();
                    }
                }
                KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                    if self.outcome.is_none() {
                        self.human_move(c as u8 - b'0');
                    }
                }
                _ => {}
            }
        }
        Ok(false)
    }
}

pub fn main() -> Result<(), io::Error> {
    let opts = AppOpts::from_args();

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut app = App {
        terminal,
        search: opts.search.make_search(),
        matchup: opts.search.matchup(),
        ai_first: opts.ai_first,
        board: Board::empty(),
        status: String::new(),
        outcome: None,
    };
    app.reset();

    loop {
        app.render()?;
        if !poll(Duration::from_millis(200))? {
            continue;
        }
        if app.keyboard()? {
            break;
        }
    }

    // restore terminal
    disable_raw_mode()?;
    execute!(app.terminal.backend_mut(), LeaveAlternateScreen)?;
    app.terminal.show_cursor()?;

    Ok(())
}
