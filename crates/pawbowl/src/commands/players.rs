//! Player command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use pawbowl_core::{Player, PlayerDraft, PlayerId, PlayerStatus, RosterService, RosterState, TeamId};

use crate::cli::{GlobalOpts, OutputFormat, PlayersArgs, PlayersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Team")]
    team: String,
}

impl PlayerRow {
    fn new(player: &Player, state: &RosterState, color: bool) -> Self {
        let status = if color {
            match player.status {
                PlayerStatus::Field => player.status.to_string().green().to_string(),
                PlayerStatus::Bench => player.status.to_string().dimmed().to_string(),
            }
        } else {
            player.status.to_string()
        };
        Self {
            id: player.id.to_string(),
            name: player.name.clone(),
            breed: player.breed.clone(),
            status,
            team: state.team_name(player.team).to_string(),
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(player: &Player, state: &RosterState) -> String {
    let mut lines = vec![
        format!("ID:      {}", player.id),
        format!("Name:    {}", player.name),
        format!("Breed:   {}", player.breed),
        format!("Status:  {}", player.status),
        format!("Team:    {}", state.team_name(player.team)),
    ];
    if let Some(ref url) = player.image_url {
        lines.push(format!("Image:   {url}"));
    }
    if let Some(created) = player.created_at {
        lines.push(format!("Joined:  {}", created.format("%Y-%m-%d %H:%M UTC")));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    service: &RosterService,
    args: PlayersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let format = global.output.clone().unwrap_or(OutputFormat::Table);
    match args.command {
        PlayersCommand::List => {
            // Teams first so names resolve in the table. A team fetch
            // failure only costs the name column, so it degrades; the
            // player fetch is the point of the command and surfaces.
            let mut state = RosterState::default();
            state.replace_teams(service.load_teams().await);
            state.replace_players(service.players().await?);

            if state.players().is_empty() && matches!(format, OutputFormat::Table) {
                output::print_output("No puppies currently on the roster!", global.quiet);
                return Ok(());
            }

            let color = output::should_color();
            let out = output::render_list(
                &format,
                state.players(),
                |p| PlayerRow::new(p, &state, color),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PlayersCommand::Get { id } => {
            let mut state = RosterState::default();
            state.replace_teams(service.load_teams().await);

            let player = service.player(PlayerId(id)).await?;

            let out = output::render_single(
                &format,
                &player,
                |p| detail(p, &state),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PlayersCommand::Add { name, breed, team } => {
            let draft = PlayerDraft {
                name,
                breed,
                team: team.map(TeamId),
            };
            let created = service.add_player(&draft).await?;
            if !global.quiet {
                eprintln!("Added {} (id {})", created.name, created.id);
            }
            Ok(())
        }

        PlayersCommand::Remove { id } => {
            // Fetch first so the prompt can name the puppy.
            let player = service.player(PlayerId(id)).await?;

            if !util::confirm(
                &format!("Remove {} from the roster?", player.name),
                global.yes,
            )? {
                return Ok(());
            }
            service.remove_player(player.id).await?;
            if !global.quiet {
                eprintln!("Removed {}", player.name);
            }
            Ok(())
        }
    }
}
