mod catalog;
mod engine;

use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use engine::{Choice, Engine, Event, Phase, ROUNDS};

use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, KeyCode, KeyEvent, MouseEvent, MouseEventKind},
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Styled, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const TICK_RATE: Duration = Duration::from_secs(1);
const REVEAL_DELAY: Duration = Duration::from_secs(2);

const TITLE: &str = "Cultural Dimensions Game";
const TAGLINE: &str = "Guess whether a country sits high or low on a cultural dimension";
const DISCUSSION_PROMPT: &str = "Discuss with your partner why you think this might be the case. \
    Consider historical, social, and economic factors.";

#[derive(Default)]
pub struct CultureQuiz {
    exit: bool,

    engine: Engine,
    tick_due: Option<Instant>,
    reveal_due: Option<Instant>,
}

impl CultureQuiz {
    pub fn run(terminal: &mut DefaultTerminal) -> io::Result<()> {
        let mut game = Self::default();

        while !game.exit {
            terminal.draw(|frame| game.draw(frame))?;
            game.handle_input(terminal)?;
        }

        Ok(())
    }

    fn handle_input(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        if event::poll(self.poll_timeout())? {
            match event::read()? {
                event::Event::Key(key) => self.key_event(key),
                event::Event::Mouse(mouse) => self.mouse_event(mouse, terminal),
                _ => (),
            }
        }

        // pumping last means the loop redraws every deadline-driven change
        // before it blocks on input again
        self.pump_timers();
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn apply(&mut self, event: Event) {
        self.engine.apply(event);
        self.sync_timers();
    }

    // due deadlines become engine events, countdown first: when the clock
    // hitting zero and the reveal delay land in the same wakeup, the timeout
    // wins and the stale advance never fires
    fn pump_timers(&mut self) {
        while let Some(due) = self.tick_due {
            if Instant::now() < due {
                break;
            }
            self.engine.apply(Event::Tick);
            match self.engine.phase() {
                // reschedule from the old deadline so the cadence never drifts
                Phase::Playing | Phase::Reveal => self.tick_due = Some(due + TICK_RATE),
                _ => {
                    self.tick_due = None;
                    self.reveal_due = None;
                }
            }
        }

        if let Some(due) = self.reveal_due {
            if Instant::now() >= due {
                self.reveal_due = None;
                self.apply(Event::Advance);
            }
        }
    }

    // a deadline exists exactly while the engine can still consume it
    fn sync_timers(&mut self) {
        match self.engine.phase() {
            Phase::Playing => {
                if self.tick_due.is_none() {
                    self.tick_due = Some(Instant::now() + TICK_RATE);
                }
                self.reveal_due = None;
            }
            Phase::Reveal => {
                if self.tick_due.is_none() {
                    self.tick_due = Some(Instant::now() + TICK_RATE);
                }
                if self.reveal_due.is_none() {
                    self.reveal_due = Some(Instant::now() + REVEAL_DELAY);
                }
            }
            Phase::Waiting | Phase::Over => {
                self.tick_due = None;
                self.reveal_due = None;
            }
        }
    }

    fn poll_timeout(&self) -> Duration {
        let next = match (self.tick_due, self.reveal_due) {
            (Some(tick), Some(reveal)) => Some(tick.min(reveal)),
            (tick, reveal) => tick.or(reveal),
        };

        match next {
            Some(due) => due.saturating_duration_since(Instant::now()),
            None => Duration::MAX,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn key_event(&mut self, key: KeyEvent) {
        match self.engine.phase() {
            Phase::Waiting | Phase::Over => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.exit = true,
                KeyCode::Char('r') => self.reset(),
                KeyCode::Enter | KeyCode::Char(' ') => self.apply(Event::Start),
                _ => (),
            },
            // answers pressed during the reveal reach the engine and are dropped there
            Phase::Playing | Phase::Reveal => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.exit = true,
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('h') => self.apply(Event::Answer(Choice::High)),
                KeyCode::Char('l') => self.apply(Event::Answer(Choice::Low)),
                _ => (),
            },
        }
    }

    fn mouse_event(&mut self, mouse: MouseEvent, terminal: &mut DefaultTerminal) {
        if let MouseEventKind::Down(_) = mouse.kind {
        } else {
            return;
        }

        match self.engine.phase() {
            Phase::Waiting | Phase::Over => self.apply(Event::Start),
            Phase::Playing | Phase::Reveal => {
                let (high, low) = answer_buttons(terminal.get_frame().area());
                let mouse_rect = Rect::new(mouse.column, mouse.row, 1, 1);

                if mouse_rect.intersects(high) {
                    self.apply(Event::Answer(Choice::High));
                } else if mouse_rect.intersects(low) {
                    self.apply(Event::Answer(Choice::Low));
                }
            }
        }
    }
}

// the playing field rows, shared by the renderer and the mouse hit-testing
fn play_rows(area: Rect) -> Rc<[Rect]> {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Body
        ])
        .split(area);

    let main = vert[1].inner(Margin {
        horizontal: 1,
        vertical: 1,
    });

    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // round / score / time
            Constraint::Length(1), // ---
            Constraint::Length(1), // dimension
            Constraint::Length(3), // description
            Constraint::Length(1), // question
            Constraint::Length(1), // ---
            Constraint::Length(3), // High / Low
            Constraint::Min(0),    // result
            Constraint::Length(1), // hints
        ])
        .split(main)
}

fn answer_buttons(area: Rect) -> (Rect, Rect) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),         // ---
            Constraint::Length(8),      // High
            Constraint::Percentage(10), // ---
            Constraint::Length(8),      // Low
            Constraint::Min(0),         // ---
        ])
        .split(play_rows(area)[6]);

    (buttons[1], buttons[3])
}

impl Widget for &CultureQuiz {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer)
    where
        Self: Sized,
    {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
            ])
            .split(area);

        Paragraph::new(TITLE)
            .set_style(Color::Blue)
            .centered()
            .block(Block::bordered().border_set(border::DOUBLE))
            .render(vert[0], buf);

        let block = Block::bordered().border_set(border::DOUBLE);

        let main = vert[1].inner(Margin {
            horizontal: 1,
            vertical: 1,
        });

        match self.engine.phase() {
            Phase::Waiting => {
                block.title("╡ Menu ╞").render(vert[1], buf);

                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(0),    // ---
                        Constraint::Length(1), // tagline
                        Constraint::Length(1), // ---
                        Constraint::Length(3), // Start
                        Constraint::Min(0),    // ---
                        Constraint::Length(1), // hints
                    ])
                    .split(main);

                Paragraph::new(TAGLINE)
                    .set_style(Color::DarkGray)
                    .italic()
                    .centered()
                    .render(rows[1], buf);

                let start = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Min(0),
                        Constraint::Length(14),
                        Constraint::Min(0),
                    ])
                    .split(rows[3])[1];

                Paragraph::new("Start Game")
                    .centered()
                    .block(Block::bordered().border_set(border::DOUBLE))
                    .render(start, buf);

                Paragraph::new("Enter/click to start and Esc/'q' to quit")
                    .centered()
                    .render(rows[5], buf);
            }
            Phase::Playing | Phase::Reveal => {
                block.title("╡ Playing ╞").render(vert[1], buf);

                let rows = play_rows(area);

                let header = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Min(0),         // ---
                        Constraint::Percentage(20), // Round
                        Constraint::Percentage(20), // Score
                        Constraint::Percentage(20), // Time
                        Constraint::Min(0),         // ---
                    ])
                    .split(rows[0]);

                Paragraph::new(format!("Round: {}/{}", self.engine.round(), ROUNDS))
                    .centered()
                    .render(header[1], buf);
                Paragraph::new(format!("Score: {}", self.engine.score()))
                    .centered()
                    .render(header[2], buf);
                Paragraph::new(format!("Time: {}s", self.engine.seconds()))
                    .centered()
                    .render(header[3], buf);

                if let Some(prompt) = self.engine.prompt() {
                    let dimension =
                        format!("{} ({})", prompt.dimension.name, prompt.dimension.taxonomy);
                    Paragraph::new(Span::from(dimension).fg(Color::Yellow))
                        .centered()
                        .render(rows[2], buf);

                    Paragraph::new(prompt.dimension.description)
                        .centered()
                        .wrap(Wrap { trim: true })
                        .render(rows[3], buf);

                    Paragraph::new(Line::from(vec![
                        Span::raw("Do you think "),
                        prompt.country.bold(),
                        Span::raw(" scores high or low on this dimension?"),
                    ]))
                    .centered()
                    .render(rows[4], buf);
                }

                let (high, low) = answer_buttons(area);

                Paragraph::new(Line::from(vec![
                    Span::styled("H", Style::default().underlined()),
                    Span::raw("igh"),
                ]))
                .centered()
                .block(Block::bordered().border_set(border::DOUBLE))
                .render(high, buf);

                Paragraph::new(Line::from(vec![
                    Span::styled("L", Style::default().underlined()),
                    Span::raw("ow"),
                ]))
                .centered()
                .block(Block::bordered().border_set(border::DOUBLE))
                .render(low, buf);

                if let Phase::Reveal = self.engine.phase() {
                    let panel = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(1), // ---
                            Constraint::Length(5), // result
                            Constraint::Min(0),    // ---
                        ])
                        .split(rows[7])[1];

                    Block::bordered()
                        .border_set(border::DOUBLE)
                        .title("╡ Result ╞")
                        .render(panel, buf);

                    Paragraph::new(DISCUSSION_PROMPT)
                        .set_style(Color::DarkGray)
                        .italic()
                        .centered()
                        .wrap(Wrap { trim: true })
                        .render(
                            panel.inner(Margin {
                                horizontal: 2,
                                vertical: 1,
                            }),
                            buf,
                        );
                }

                Paragraph::new("'h'/'l' to answer, 'r' to restart and Esc/'q' to quit")
                    .centered()
                    .render(rows[8], buf);
            }
            Phase::Over => {
                block.title("╡ Game Over ╞").render(vert[1], buf);

                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(0),    // ---
                        Constraint::Length(1), // Game Over!
                        Constraint::Length(1), // ---
                        Constraint::Length(1), // final score
                        Constraint::Length(1), // ---
                        Constraint::Length(3), // Play Again
                        Constraint::Min(0),    // ---
                        Constraint::Length(1), // hints
                    ])
                    .split(main);

                Paragraph::new(Span::from("Game Over!").fg(Color::Red))
                    .centered()
                    .render(rows[1], buf);

                Paragraph::new(format!(
                    "Your Score: {} out of {}",
                    self.engine.score(),
                    ROUNDS
                ))
                .centered()
                .render(rows[3], buf);

                let again = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Min(0),
                        Constraint::Length(14),
                        Constraint::Min(0),
                    ])
                    .split(rows[5])[1];

                Paragraph::new("Play Again")
                    .centered()
                    .block(Block::bordered().border_set(border::DOUBLE))
                    .render(again, buf);

                Paragraph::new("Enter/click to play again and Esc/'q' to quit")
                    .centered()
                    .render(rows[7], buf);
            }
        }
    }
}
