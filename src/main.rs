use anyhow::Result;
use bitstat::areas::repository::Repository;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bitstat",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Read-only status reporting for git repositories",
    long_about = "Reports how the working tree and the index differ from the last commit. \
    It reads loose objects, the index and the top-level working directory, \
    and never writes to the repository.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        help = "Run as if started in the given directory"
    )]
    directory: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log decoding steps to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists changes staged for commit, changes not staged for commit \
        and untracked files, or reports a clean working tree."
    )]
    Status,
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command pretty-prints a loose object of the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Compute the object ID of a file",
        long_about = "This command prints the blob ID a file would be stored under. \
        The object database is never written."
    )]
    HashObject {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a commit's tree",
        long_about = "This command lists the files recorded in the tree of a commit, HEAD by default."
    )]
    LsTree {
        #[arg(index = 1, help = "The commit SHA or HEAD")]
        revision: Option<String>,
    },
    #[command(
        name = "ls-files",
        about = "List the files in the index",
        long_about = "This command lists the paths staged in the index."
    )]
    LsFiles {
        #[arg(short, long, help = "Show mode and object ID of each entry")]
        stage: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let path = match cli.directory {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repository = Repository::new(&path, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Status => repository.status_report(color)?,
        Commands::CatFile { sha } => repository.cat_file(sha)?,
        Commands::HashObject { file } => repository.hash_object(file)?,
        Commands::LsTree { revision } => repository.ls_tree(revision.as_deref())?,
        Commands::LsFiles { stage } => repository.ls_files(*stage)?,
    }

    Ok(())
}
