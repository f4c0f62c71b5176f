use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let graph = super::load_story()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Mood", "Ending", "Choices"]);

    for scene in graph.scenes() {
        let choices: Vec<String> = scene
            .choices
            .iter()
            .map(|c| format!("{} -> {}", c.label, super::describe_transition(&c.transition)))
            .collect();
        let ending = if scene.ending { "yes" } else { "" };

        table.add_row(vec![
            scene.id.to_string(),
            scene.mood.to_string(),
            ending.to_string(),
            choices.join("\n"),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} scenes, {} endings",
        graph.len(),
        graph.endings().count()
    );

    Ok(())
}
