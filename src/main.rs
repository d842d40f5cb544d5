use anyhow::Result;
use clap::{Parser, Subcommand};
use jot::areas::repository::Repository;
use jot::artifacts::ignore::IgnoreRules;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A minimal content-addressed version control system",
    long_about = "jot tracks snapshots of a file tree as immutable, \
    content-addressed history organized into named branches. \
    It is a learning-scale engine, not a replacement for a full VCS.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "Initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "Stores each file's content in the object database and stages it in the index. \
        A directory argument stages every file beneath it."
    )]
    Add {
        #[arg(required = true, help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Record the staged tree as a new commit",
        long_about = "Creates a new commit from the staging index on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history from HEAD",
        long_about = "Walks the commit graph backwards from HEAD, most recent commit first."
    )]
    Log,
    #[command(
        name = "branch",
        about = "Create a new branch at the current HEAD commit"
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(name = "checkout", about = "Switch HEAD to another branch")]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
    #[command(
        name = "status",
        about = "Show the current branch and the commit it resolves to"
    )]
    Status,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut repository = match &cli.command {
        Commands::Init { path: Some(path) } => {
            Repository::new(path, Box::new(std::io::stdout()))?
        }
        _ => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
        }
    };

    if !matches!(&cli.command, Commands::Init { .. }) && !repository.is_initialized() {
        anyhow::bail!("not a jot repository (run 'jot init' first)");
    }

    match &cli.command {
        Commands::Init { .. } => repository.init()?,
        Commands::Add { paths } => {
            // ignore rules are peripheral configuration: loaded here,
            // injected into the core as a plain predicate
            let ignores = IgnoreRules::load(&repository.ignore_path())?;
            repository.add(paths, &ignores)?
        }
        Commands::Commit { message } => repository.commit(message)?,
        Commands::Log => repository.log()?,
        Commands::Branch { name } => repository.branch(name)?,
        Commands::Checkout { name } => repository.checkout(name)?,
        Commands::Status => repository.status()?,
    }

    Ok(())
}
