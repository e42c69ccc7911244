use std::io;
use std::thread;
use std::time::Duration;

use tracing::debug;
use tracing::info;

use crate::board::Board;
use crate::cell::Cell;
use crate::config::Config;

/// Something that can show a board. Gets called once per generation, before it advances.
pub trait Render {
    fn render(&mut self, board: &Board) -> io::Result<()>;
}

/// Frame pacing.
pub trait Clock {
    fn sleep(&mut self, interval: Duration);
}

/// Paces frames by blocking the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Owns the board and runs the render, pace, advance loop.
pub struct Driver<R, C> {
    board: Board,
    renderer: R,
    clock: C,
    interval: Duration,

    /// Number of times the board has been advanced
    generation: u64,
}

/// Build a board from `seed` and hand it to a new [`Driver`].
///
/// The seed can come in any order and may repeat cells.
pub fn setup<I, R, C>(seed: I, renderer: R, clock: C, config: &Config) -> Driver<R, C>
where
    I: IntoIterator<Item = Cell>,
    R: Render,
    C: Clock,
{
    let board: Board = seed.into_iter().collect();

    info!(population = board.population(), "seeded board");

    Driver::new(board, renderer, clock, config.interval)
}

impl<R: Render, C: Clock> Driver<R, C> {
    pub fn new(board: Board, renderer: R, clock: C, interval: Duration) -> Self {
        Self {
            board,
            renderer,
            clock,
            interval,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the current generation, wait, then compute the next one.
    pub fn step(&mut self) -> io::Result<()> {
        self.renderer.render(&self.board)?;
        self.clock.sleep(self.interval);
        self.board.advance();
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.board.population(),
            "step"
        );

        Ok(())
    }

    pub fn run_for(&mut self, steps: u64) -> io::Result<()> {
        for _ in 0..steps {
            self.step()?;
        }

        Ok(())
    }

    /// Step forever. Only returns if rendering fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.step()?;
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::time::Duration;

    use super::Clock;
    use super::Render;
    use super::setup;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::config::Config;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Render(usize),
        Sleep(Duration),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct Recorder(Log);

    impl Render for Recorder {
        fn render(&mut self, board: &Board) -> io::Result<()> {
            self.0.borrow_mut().push(Call::Render(board.population()));
            Ok(())
        }
    }

    impl Clock for Recorder {
        fn sleep(&mut self, interval: Duration) {
            self.0.borrow_mut().push(Call::Sleep(interval));
        }
    }

    struct Broken;

    impl Render for Broken {
        fn render(&mut self, _board: &Board) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn blinker() -> Vec<Cell> {
        vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]
    }

    #[test]
    fn render_then_sleep_then_advance() {
        let log = Log::default();
        let config = Config::default();

        // a lone cell dies on the first advance, so the second render sees nothing
        let mut driver = setup(
            [Cell::new(0, 0)],
            Recorder(log.clone()),
            Recorder(log.clone()),
            &config,
        );

        driver.run_for(2).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Call::Render(1),
                Call::Sleep(config.interval),
                Call::Render(0),
                Call::Sleep(config.interval),
            ]
        );
        assert_eq!(driver.generation(), 2);
    }

    #[test]
    fn setup_collapses_duplicates() {
        let log = Log::default();
        let mut seed = blinker();
        seed.extend(blinker());

        let driver = setup(
            seed,
            Recorder(log.clone()),
            Recorder(log),
            &Config::default(),
        );

        assert_eq!(driver.board().population(), 3);
        assert_eq!(driver.generation(), 0);
    }

    #[test]
    fn blinker_returns_after_two_steps() {
        let log = Log::default();
        let config = Config {
            interval: Duration::ZERO,
            ..Config::default()
        };

        let mut driver = setup(blinker(), Recorder(log.clone()), Recorder(log), &config);
        let start = driver.board().clone();

        driver.step().unwrap();
        assert_ne!(driver.board(), &start);

        driver.step().unwrap();
        assert_eq!(driver.board(), &start);
    }

    #[test]
    fn render_failure_stops_the_loop() {
        let log = Log::default();
        let mut driver = setup(blinker(), Broken, Recorder(log.clone()), &Config::default());

        let err = driver.run().unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        assert!(log.borrow().is_empty(), "never slept");
        assert_eq!(driver.generation(), 0);
        assert_eq!(driver.board().population(), 3);
    }
}
