use crate::output::{print_json, print_table};
use blueprint_core::agent;

pub fn run(json: bool) -> anyhow::Result<()> {
    let agents = agent::all();
    if json {
        return print_json(&agents);
    }

    let rows = agents
        .iter()
        .map(|a| {
            vec![
                a.name.to_string(),
                format!("{}/", a.output_dir),
                a.extension.to_string(),
                a.arg_format.to_string(),
                a.script_variants
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ]
        })
        .collect();
    print_table(&["AGENT", "DIRECTORY", "EXTENSION", "ARGS", "SCRIPTS"], rows);
    Ok(())
}
