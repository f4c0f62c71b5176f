use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use colored::Colorize;

use sf_story::{GameSession, Mood, SceneView, StoryConfig};

pub fn run(seed: Option<u64>, pace: u64) -> Result<(), String> {
    let graph = super::load_story()?;
    let config = match seed {
        Some(seed) => StoryConfig::default().with_seed(seed),
        None => StoryConfig::default(),
    };
    log::info!("starting adventure (seed: {seed:?})");
    let mut session = GameSession::new(Arc::new(graph), config);
    let pace = Duration::from_millis(pace);

    println!("  Type a choice number, or 'quit' to exit.\n");
    let mut view = session.start().map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        show(&view, pace)?;

        let handle = loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => return Ok(()), // EOF
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            let input = line.trim();
            if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                println!("Goodbye!");
                return Ok(());
            }

            match pick(input, view.choices.len()) {
                Some(index) => break view.choices[index].handle,
                None => {
                    let hint = format!("Pick a number between 1 and {}.", view.choices.len());
                    println!("{}\n", hint.yellow());
                }
            }
        };

        let next = session
            .resolve_choice(handle)
            .map_err(|e| e.to_string())?;
        view = session.enter_scene(next).map_err(|e| e.to_string())?;
        println!();
    }
}

/// Turn a 1-based menu entry into a choice index.
fn pick(input: &str, available: usize) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(n) if (1..=available).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn show(view: &SceneView, pace: Duration) -> Result<(), String> {
    if let Some(heading) = &view.heading {
        println!("  {}\n", heading.bold().underline());
    }
    if view.mood == Mood::Alarm {
        println!("  {}", "~~~~~~~~".red().bold());
    }

    let mut out = io::stdout();
    for sentence in super::sentences(&view.text) {
        if !pace.is_zero() {
            thread::sleep(pace);
        }
        println!("  {}", super::paint(sentence, view.mood));
        out.flush().map_err(|e| e.to_string())?;
    }
    println!();

    for (i, choice) in view.choices.iter().enumerate() {
        println!("  {}. {}", i + 1, choice.label);
    }
    Ok(())
}
