use log::{debug, warn};
use rand::{Rng, rngs::ThreadRng};
use std::{
    cmp::Ordering,
    io::{self, BufRead, Write},
};

/// Inclusive bounds the secret is drawn from.
pub const SECRET_MIN: i32 = 1;
pub const SECRET_MAX: i32 = 10;
/// Valid guesses allowed per session.
pub const STARTING_ATTEMPTS: u32 = 3;

/// Source of the secret value.
/// The binary wraps the thread RNG; tests inject a fixed value.
pub trait SecretSource {
    /// One integer in `[min, max]` inclusive.
    fn pick(&mut self, min: i32, max: i32) -> i32;
}

/// Thread-RNG backed source used by the binary.
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretSource for ThreadRngSource {
    fn pick(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}

/// Line-oriented user I/O channel.
pub trait Console {
    /// Read one line of input, without the trailing newline.
    fn read_line(&mut self) -> io::Result<String>;
    /// Write text without a trailing newline (the prompt) and flush it.
    fn write(&mut self, text: &str) -> io::Result<()>;
    /// Write one full line.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// Stdin/stdout console used by the binary.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            // Closed stdin would otherwise parse-fail forever on empty reads
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

/// One game: the counters plus the read-evaluate-feedback loop.
/// State lives only as long as the session; nothing carries over.
pub struct GameSession {
    attempts_remaining: u32,
    attempts_made: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            attempts_remaining: STARTING_ATTEMPTS,
            attempts_made: 0,
        }
    }

    /// Play one session to its end: a correct guess, or no attempts left.
    /// The `Err` branch only carries console failures; win and loss both
    /// return `Ok(())`.
    pub fn run(
        &mut self,
        secret_source: &mut impl SecretSource,
        console: &mut impl Console,
    ) -> io::Result<()> {
        let secret = secret_source.pick(SECRET_MIN, SECRET_MAX);
        debug!("secret drawn: {secret}");

        console.write_line("Welcome to the Number Guessing Game!")?;
        console.write_line(&format!(
            "Guess a number between {SECRET_MIN} and {SECRET_MAX}."
        ))?;
        // The revealed secret and the misspelled messages below are pinned
        // by the transcript tests; don't clean them up here.
        console.write_line(&secret.to_string())?;

        while self.attempts_remaining > 0 {
            console.write("Enter your guess: ")?;
            let line = console.read_line()?;

            // Not a number: re-prompt without consuming an attempt
            let guess: i32 = match line.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    warn!("discarding non-numeric input `{}`", line.trim());
                    console.write_line("Please enter a valid number.")?;
                    continue;
                }
            };

            self.attempts_remaining -= 1;
            self.attempts_made += 1;

            match guess.cmp(&secret) {
                Ordering::Less => {
                    console.write_line("Too low! Try again.")?;
                    console.write_line(&format!(
                        "You have {} attempts remining",
                        self.attempts_remaining
                    ))?;
                }
                Ordering::Greater => {
                    console.write_line("Too high! Try again.")?;
                    console.write_line(&format!(
                        "You have {} trials remining",
                        self.attempts_remaining
                    ))?;
                }
                Ordering::Equal => {
                    console.write_line(&format!(
                        "Congratulations! You guessed the number in {} attempts.",
                        self.attempts_made
                    ))?;
                    return Ok(());
                }
            }

            if self.attempts_remaining == 0 {
                console.write_line("You have used up all you attempt")?;
                console.write_line("thanks for playing")?;
            }
        }

        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
