use crate::commands::PostFields;
use crate::config::CliConfig;
use crate::logging::init_logging;
use crate::storage::FileStorage;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inkwell_client::pages::{LoginForm, RegisterForm};
use inkwell_client::{AppRoute, BlogClientHttp, SessionStore};
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod storage;

#[derive(Parser, Debug)]
#[clap(name = "inkwell", about = "Terminal client for the Inkwell blog API")]
struct Cli {
    /// Base URL of the blog API.
    #[clap(short, long)]
    server: Option<String>,

    /// Where the login session is kept between runs.
    #[clap(long)]
    session_file: Option<PathBuf>,

    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Register {
        #[clap(long)]
        username: String,
        #[clap(long)]
        password: String,
        /// Defaults to `--password`.
        #[clap(long)]
        confirm_password: Option<String>,
    },
    Login {
        #[clap(long)]
        username: String,
        #[clap(long)]
        password: String,
    },
    Logout,
    Whoami,
    List {
        /// Only posts by this author id.
        #[clap(long)]
        author: Option<String>,
    },
    Show {
        id: String,
    },
    Create {
        #[clap(flatten)]
        fields: FieldArgs,
        /// Image uploaded as the post cover.
        #[clap(long)]
        cover: Option<PathBuf>,
    },
    Edit {
        id: String,
        #[clap(flatten)]
        fields: FieldArgs,
        #[clap(long)]
        cover_url: Option<String>,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[clap(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct FieldArgs {
    #[clap(long)]
    title: Option<String>,
    #[clap(long)]
    summary: Option<String>,
    /// HTML body of the post.
    #[clap(long, conflicts_with = "content_file")]
    content: Option<String>,
    #[clap(long)]
    content_file: Option<PathBuf>,
}

impl FieldArgs {
    fn into_fields(self) -> anyhow::Result<PostFields> {
        let content = match self.content_file {
            Some(path) => Some(
                std::fs::read_to_string(&path)
                    .with_context(|| format!("could not read {}", path.display()))?,
            ),
            None => self.content,
        };
        Ok(PostFields {
            title: self.title,
            summary: self.summary,
            content,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let config = CliConfig::from_env(args.server, args.session_file);
    tracing::debug!(api = %config.api.base_url, session = %config.session_file.display(), "starting");

    let mut store = SessionStore::init(FileStorage::new(&config.session_file));
    let client = BlogClientHttp::connect(config.api)?.with_token(store.access_token());

    match args.command {
        Command::Register {
            username,
            password,
            confirm_password,
        } => {
            let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
            let form = RegisterForm {
                username,
                password,
                confirm_password,
            };
            commands::register_account(&client, form).await?;
        }
        Command::Login { username, password } => {
            commands::login(&client, &mut store, LoginForm { username, password }).await?;
        }
        Command::Logout => {
            store.log_out()?;
            println!("Logged out");
        }
        Command::Whoami => match store.user_info() {
            Some(session) => println!("@{} ({})", session.username, session.id),
            None => println!("Not logged in"),
        },
        Command::List { author } => {
            commands::list(&client, author.as_deref()).await?;
        }
        Command::Show { id } => {
            commands::show(&client, &id).await?;
        }
        Command::Create { fields, cover } => {
            commands::require_session(&AppRoute::Create, &store)?;
            commands::create(&client, fields.into_fields()?, cover.as_deref()).await?;
        }
        Command::Edit {
            id,
            fields,
            cover_url,
        } => {
            commands::require_session(&AppRoute::Edit { id: id.clone() }, &store)?;
            commands::edit(&client, &store, &id, fields.into_fields()?, cover_url).await?;
        }
        Command::Delete { id, yes } => {
            // Same session requirement as editing the post.
            commands::require_session(&AppRoute::Edit { id: id.clone() }, &store)?;
            let stdin = std::io::stdin();
            commands::delete(&client, &id, yes, &mut stdin.lock(), &mut std::io::stdout()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_edit_overrides() {
        let cli = Cli::try_parse_from(["inkwell", "edit", "p1", "--title", "New", "--cover-url", "http://img/x.png"])
            .unwrap();
        match cli.command {
            Command::Edit { id, fields, cover_url } => {
                assert_eq!(id, "p1");
                assert_eq!(fields.title.as_deref(), Some("New"));
                assert!(fields.content.is_none());
                assert_eq!(cover_url.as_deref(), Some("http://img/x.png"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn content_and_content_file_conflict() {
        let parsed = Cli::try_parse_from([
            "inkwell",
            "create",
            "--title",
            "t",
            "--content",
            "<p>x</p>",
            "--content-file",
            "post.html",
        ]);
        assert!(parsed.is_err());
    }
}
