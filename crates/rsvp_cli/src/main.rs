//! `rsvp` command-line entry point.
//!
//! # Responsibility
//! - Resolve identifiers to users/events and call core services.
//! - Print results as plain lines; keep storage details inside the core.

mod config;

use clap::Parser;
use config::{Cli, Command};
use log::error;
use rsvp_core::db::open_db;
use rsvp_core::{
    DirectoryService, Event, RelationshipService, SqliteEventRepository,
    SqliteRelationRepository, SqliteUserRepository, User,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = rsvp_core::init_logging(cli.effective_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Command::Ping = cli.command {
        println!("rsvp_core ping={}", rsvp_core::ping());
        println!("rsvp_core version={}", rsvp_core::core_version());
        return Ok(());
    }

    let conn = open_db(&cli.db)?;
    let directory = DirectoryService::new(
        SqliteUserRepository::try_new(&conn)?,
        SqliteEventRepository::try_new(&conn)?,
    );
    let relations = RelationshipService::new(SqliteRelationRepository::try_new(&conn)?);

    match &cli.command {
        Command::Ping => {}
        Command::AddUser { name } => {
            let user = directory.create_user(name.as_str())?;
            println!("{}", user.id);
        }
        Command::AddEvent {
            owner,
            description,
            date,
        } => {
            let owner = directory.find_user(*owner)?;
            let event = directory.create_event(&owner, description.as_str(), *date)?;
            println!("{}", event.id);
        }
        Command::Invite {
            inviter,
            invitee,
            event,
        } => {
            let inviter = directory.find_user(*inviter)?;
            let invitee = directory.find_user(*invitee)?;
            let event = directory.find_event(*event)?;
            let outcome = relations.invite(&inviter, &invitee, &event)?;
            println!("{}", if outcome.is_created() { "invited" } else { "already invited" });
        }
        Command::Attend { user, event } => {
            let user = directory.find_user(*user)?;
            let event = directory.find_event(*event)?;
            let outcome = relations.attend(&user, &event)?;
            println!("{}", if outcome.is_created() { "attending" } else { "already attending" });
        }
        Command::ShowUser { id } => {
            let user = directory.find_user(*id)?;
            println!("{} ({})", user.name, user.id);
            print_events("created", &directory.owned_events(&user)?);
            print_events("invited to", &relations.inviting_events(&user)?);
            print_events("attending", &relations.attended_events(&user)?);
            print_events("upcoming", &relations.upcoming_attended_events_now(&user)?);
            print_events("past", &relations.past_attended_events_now(&user)?);
        }
        Command::ShowEvent { id } => {
            let event = directory.find_event(*id)?;
            let owner = directory.find_user(event.owner_id)?;
            println!("{} by {}", describe(&event), owner.name);
            print_users("invited", &relations.inviteds(&event)?);
            print_users("attendees", &relations.attendees(&event)?);
        }
    }

    Ok(())
}

fn describe(event: &Event) -> String {
    match event.date {
        Some(date) => format!("{} [{date}] ({})", event.description, event.id),
        None => format!("{} [undated] ({})", event.description, event.id),
    }
}

fn print_events(label: &str, events: &[Event]) {
    println!("{label}: {}", events.len());
    for event in events {
        println!("  {}", describe(event));
    }
}

fn print_users(label: &str, users: &[User]) {
    println!("{label}: {}", users.len());
    for user in users {
        println!("  {} ({})", user.name, user.id);
    }
}
