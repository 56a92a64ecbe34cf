//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hellorest_domain::HttpMethod;

/// Browse, edit and send requests saved under a collections directory.
#[derive(Debug, Parser)]
#[command(name = "hellorest", author, version, about)]
pub struct Cli {
    /// Collections root. Overrides the settings file.
    #[arg(long, global = true, env = "HELLOREST_COLLECTIONS_ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the collection tree.
    Tree,

    /// Create a collection folder.
    NewFolder {
        /// Folder name; characters other than letters, digits, space, `-`
        /// and `_` are dropped.
        name: String,

        /// Parent folder, relative to the root.
        #[arg(long)]
        parent: Option<PathBuf>,
    },

    /// Save a request, replacing any request with the same name.
    Save(SaveArgs),

    /// Print a saved request.
    Show {
        /// Request file, relative to the root or absolute, or a bare request
        /// name looked up in the tree.
        path: PathBuf,
    },

    /// Send a saved request and print the response.
    Send {
        /// Request file, relative to the root or absolute, or a bare request
        /// name looked up in the tree.
        path: PathBuf,
    },

    /// Show or change stored settings.
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Actions of `config`. Without one, the current settings are printed.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the stored settings.
    Show,

    /// Store the collections root used when `--root` is not given.
    SetRoot {
        /// New collections root.
        dir: PathBuf,
    },

    /// Store the timeout applied to every sent request.
    SetTimeout {
        /// Timeout in milliseconds.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        ms: u64,
    },
}

/// Arguments of `save`.
#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Request name; empty after cleanup means `untitled`.
    pub name: String,

    /// Parent folder, relative to the root.
    #[arg(long)]
    pub parent: Option<PathBuf>,

    /// HTTP method.
    #[arg(long, short = 'X', default_value = "GET", value_parser = parse_method)]
    pub method: HttpMethod,

    /// Request URL.
    #[arg(long, default_value = "")]
    pub url: String,

    /// Header in `Name: Value` form. Repeatable.
    #[arg(long = "header", short = 'H')]
    pub headers: Vec<String>,

    /// Request body.
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the request body from a file.
    #[arg(long)]
    pub body_file: Option<PathBuf>,
}

fn parse_method(raw: &str) -> Result<HttpMethod, String> {
    raw.parse().map_err(|_| {
        format!(
            "expected one of {}",
            HttpMethod::names().collect::<Vec<_>>().join(", ")
        )
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_save_with_headers() {
        let cli = Cli::try_parse_from([
            "hellorest",
            "--root",
            "/tmp/c",
            "save",
            "Login",
            "-X",
            "POST",
            "--url",
            "https://example.com/login",
            "-H",
            "Accept: */*",
            "-H",
            "X-Trace: 1",
            "--body",
            "{}",
        ])
        .expect("parse");

        assert_eq!(cli.root, Some(PathBuf::from("/tmp/c")));
        let Command::Save(args) = cli.command else {
            panic!("expected save");
        };
        assert_eq!(args.name, "Login");
        assert_eq!(args.method, HttpMethod::Post);
        assert_eq!(args.headers, vec!["Accept: */*", "X-Trace: 1"]);
        assert_eq!(args.body.as_deref(), Some("{}"));
    }

    #[test]
    fn body_and_body_file_conflict() {
        let result = Cli::try_parse_from([
            "hellorest",
            "save",
            "x",
            "--body",
            "a",
            "--body-file",
            "b.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn root_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["hellorest", "tree", "--root", "/srv/c"]).expect("parse");
        assert_eq!(cli.root, Some(PathBuf::from("/srv/c")));
        assert!(matches!(cli.command, Command::Tree));
    }

    #[test]
    fn method_is_case_insensitive_and_defaults_to_get() {
        let cli = Cli::try_parse_from(["hellorest", "save", "x", "-X", "patch"]).expect("parse");
        let Command::Save(args) = cli.command else {
            panic!("expected save");
        };
        assert_eq!(args.method, HttpMethod::Patch);

        let cli = Cli::try_parse_from(["hellorest", "save", "x"]).expect("parse");
        let Command::Save(args) = cli.command else {
            panic!("expected save");
        };
        assert_eq!(args.method, HttpMethod::Get);
    }

    #[test]
    fn unknown_method_lists_the_choices() {
        let error = Cli::try_parse_from(["hellorest", "save", "x", "-X", "BREW"])
            .expect_err("BREW is not a method");
        assert!(
            error
                .to_string()
                .contains("expected one of GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS")
        );
    }

    #[test]
    fn parses_config_actions() {
        let cli = Cli::try_parse_from(["hellorest", "config"]).expect("parse");
        assert!(matches!(cli.command, Command::Config { action: None }));

        let cli = Cli::try_parse_from(["hellorest", "config", "set-root", "/srv/c"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Config { action: Some(ConfigAction::SetRoot { dir }) } if dir == PathBuf::from("/srv/c")
        ));

        let cli = Cli::try_parse_from(["hellorest", "config", "set-timeout", "1500"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Config { action: Some(ConfigAction::SetTimeout { ms: 1500 }) }
        ));
        assert!(Cli::try_parse_from(["hellorest", "config", "set-timeout", "0"]).is_err());
    }
}
