//! Team command handlers.

use tabled::Tabled;

use pawbowl_core::{RosterService, Team};

use crate::cli::{GlobalOpts, OutputFormat, TeamsArgs, TeamsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Score")]
    score: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    service: &RosterService,
    args: TeamsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output.clone().unwrap_or(OutputFormat::Table);
    match args.command {
        TeamsCommand::List => {
            let teams = service.teams().await?;
            let out = render(&format, &teams);
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

// A closure, not a fn item: `render_list` needs a mapper that is
// higher-ranked over the borrow of each element.
fn render(format: &OutputFormat, teams: &[Team]) -> String {
    output::render_list(
        format,
        teams,
        |t| TeamRow {
            id: t.id.to_string(),
            name: t.name.clone(),
            score: t.score.map(|s| s.to_string()).unwrap_or_default(),
        },
        |t| t.id.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use pawbowl_core::TeamId;

    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team {
                id: TeamId(1),
                name: "Ruff".into(),
                score: Some(3),
            },
            Team {
                id: TeamId(2),
                name: "Fluff".into(),
                score: None,
            },
        ]
    }

    #[test]
    fn table_lists_every_team() {
        let out = render(&OutputFormat::Table, &teams());
        assert!(out.contains("Ruff"), "got:\n{out}");
        assert!(out.contains("Fluff"), "got:\n{out}");
        assert!(out.contains('3'), "got:\n{out}");
    }

    #[test]
    fn plain_emits_one_id_per_line() {
        let out = render(&OutputFormat::Plain, &teams());
        assert_eq!(out, "1\n2");
    }
}
