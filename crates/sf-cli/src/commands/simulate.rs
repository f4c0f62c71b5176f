use std::collections::BTreeMap;
use std::sync::Arc;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sf_story::{GameSession, SceneId, StoryConfig};

/// Give up on an adventure that keeps looping after this many choices.
const MAX_STEPS: u32 = 500;

pub fn run(runs: u32, seed: u64) -> Result<(), String> {
    if runs == 0 {
        return Err("runs must be at least 1".into());
    }

    let graph = Arc::new(super::load_story()?);
    log::info!("simulating {runs} adventures with seed {seed}");
    let mut session = GameSession::new(graph, StoryConfig::default().with_seed(seed));
    let mut chooser = StdRng::seed_from_u64(seed.wrapping_add(1));

    let mut endings: BTreeMap<SceneId, u32> = BTreeMap::new();
    let mut unfinished = 0u32;
    let mut total_steps = 0u64;

    for _ in 0..runs {
        let mut view = session
            .enter_scene(SceneId::Intro)
            .map_err(|e| e.to_string())?;
        let mut steps = 0;
        while !view.ending && steps < MAX_STEPS {
            let index = chooser.random_range(0..view.choices.len());
            view = session.choose(index).map_err(|e| e.to_string())?;
            steps += 1;
        }
        total_steps += u64::from(steps);
        if view.ending {
            *endings.entry(view.id).or_default() += 1;
        } else {
            log::warn!("adventure stuck at {} after {MAX_STEPS} choices", view.id);
            unfinished += 1;
        }
    }

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({runs} adventures, seed={seed})").dimmed()
    );
    println!(
        "  {:.1} choices per adventure on average",
        total_steps as f64 / f64::from(runs)
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ending", "Count", "Share"]);

    let mut ranked: Vec<_> = endings.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (ending, count) in ranked {
        let share = f64::from(count) * 100.0 / f64::from(runs);
        table.add_row(vec![
            ending.to_string(),
            count.to_string(),
            format!("{share:.1}%"),
        ]);
    }

    println!("{table}");
    if unfinished > 0 {
        println!();
        println!(
            "  {} {unfinished} adventures still going after {MAX_STEPS} choices",
            "WARN".yellow().bold()
        );
    }

    Ok(())
}
