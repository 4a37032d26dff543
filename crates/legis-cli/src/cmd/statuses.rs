use crate::output::{print_json, print_table};
use legis_core::LifeCycleStatus;
use serde::Serialize;

#[derive(Serialize)]
struct StatusRow {
    code: &'static str,
    terminal: bool,
    stage: u8,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let rows: Vec<StatusRow> = LifeCycleStatus::all()
        .iter()
        .map(|s| StatusRow {
            code: s.code(),
            terminal: s.is_terminal(),
            stage: s.stage(),
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    print_table(
        &["CODE", "STAGE", "TERMINAL"],
        rows.into_iter()
            .map(|r| {
                vec![
                    r.code.to_string(),
                    r.stage.to_string(),
                    if r.terminal { "yes" } else { "" }.to_string(),
                ]
            })
            .collect(),
    );
    Ok(())
}
