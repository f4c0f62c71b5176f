use sf_story::SceneId;

pub fn run() -> Result<(), String> {
    let graph = super::load_story()?;
    let reachable = graph.reachable_from(SceneId::Title);

    println!("  All checks passed.");
    println!(
        "  {} scenes, {} reachable from {}, {} endings",
        graph.len(),
        reachable.len(),
        SceneId::Title,
        graph.endings().count()
    );

    Ok(())
}
