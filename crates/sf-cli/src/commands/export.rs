use std::path::Path;

use sf_story::{Scene, SceneGraph, Transition};

pub fn run(format: &str, output: Option<&Path>) -> Result<(), String> {
    let graph = super::load_story()?;

    let content = match format {
        "json" => export_json(&graph)?,
        "markdown" | "md" => export_markdown(&graph),
        "dot" => export_dot(&graph),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown, dot"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(graph: &SceneGraph) -> Result<String, String> {
    let scenes: Vec<_> = graph.scenes().map(scene_json).collect();
    let export = serde_json::json!({
        "title": sf_story::story::TITLE,
        "start": sf_story::SceneId::Title,
        "scenes": scenes,
    });

    let mut out = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    out.push('\n');
    Ok(out)
}

fn scene_json(scene: &Scene) -> serde_json::Value {
    let choices: Vec<_> = scene
        .choices
        .iter()
        .map(|c| match c.transition {
            Transition::Goto(target) => serde_json::json!({
                "label": c.label,
                "goto": target,
            }),
            Transition::Branch(policy) => serde_json::json!({
                "label": c.label,
                "branch": policy,
                "targets": policy.targets(),
            }),
        })
        .collect();
    let slots: Vec<_> = scene.slots.iter().map(|s| s.key()).collect();

    serde_json::json!({
        "id": scene.id,
        "heading": scene.heading,
        "text": scene.text,
        "mood": scene.mood,
        "ending": scene.ending,
        "slots": slots,
        "choices": choices,
    })
}

fn export_markdown(graph: &SceneGraph) -> String {
    let mut out = format!("# {}\n\n", sf_story::story::TITLE);

    for scene in graph.scenes() {
        out.push_str(&format!("## {}\n\n", scene.id));
        if let Some(heading) = &scene.heading {
            out.push_str(&format!("**{heading}**\n\n"));
        }
        out.push_str(&format!("{}\n\n", scene.text));
        if scene.ending {
            out.push_str("*Ending.*\n\n");
        }
        for choice in &scene.choices {
            out.push_str(&format!(
                "- {} → {}\n",
                choice.label,
                super::describe_transition(&choice.transition)
            ));
        }
        out.push('\n');
    }

    out
}

fn export_dot(graph: &SceneGraph) -> String {
    let mut out = String::from("digraph spearfishing {\n    rankdir=LR;\n");

    for scene in graph.scenes() {
        let shape = if scene.ending { "doubleoctagon" } else { "box" };
        out.push_str(&format!("    {} [shape={shape}];\n", scene.id));
    }

    for scene in graph.scenes() {
        for choice in &scene.choices {
            let label = choice.label.replace('"', "\\\"");
            match choice.transition {
                Transition::Goto(target) => {
                    out.push_str(&format!("    {} -> {target} [label=\"{label}\"];\n", scene.id));
                }
                Transition::Branch(policy) => {
                    for target in policy.targets() {
                        out.push_str(&format!(
                            "    {} -> {target} [label=\"{label} ({policy})\", style=dashed];\n",
                            scene.id
                        ));
                    }
                }
            }
        }
    }

    out.push_str("}\n");
    out
}
