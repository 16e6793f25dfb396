use std::path::PathBuf;

use clap::Parser;

/// Parse, print and match frameskin stylesheets against ad-hoc trees.
#[derive(Parser, Debug, Default)]
#[command(name = "frameskin-debug", version, about)]
pub struct Cli {
    /// Stylesheet text.
    #[arg(allow_hyphen_values = true, conflicts_with = "css_file")]
    pub css: Option<String>,

    /// Read the stylesheet from a file instead.
    #[arg(long, value_name = "PATH")]
    pub css_file: Option<PathBuf>,

    /// Print the stylesheet in canonical form.
    #[arg(long)]
    pub print_css: bool,

    /// Ad-hoc tree, e.g. `(window (tab focused) (tab))`.
    #[arg(long, value_name = "TREE")]
    pub tree: Option<String>,

    /// Print the ad-hoc tree in canonical form.
    #[arg(long)]
    pub print_tree: bool,

    /// Print the path of every tree node matched by a selector list. An empty
    /// list is ignored.
    #[arg(long, value_name = "SELECTOR", allow_hyphen_values = true)]
    pub query_tree_indices: Option<String>,

    /// Print the computed style of the node at a path such as "0 1".
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub compute_style: Option<String>,

    /// Keep declarations of unknown properties instead of rejecting them.
    #[arg(long)]
    pub accept_unknown_properties: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_equals_form() {
        let cli = Cli::try_parse_from([
            "frameskin-debug",
            "--tree=(window (focus (e f)) (nonfocus))",
            "--query-tree-indices=.window > .focus",
            "",
        ])
        .unwrap();
        assert_eq!(cli.tree.as_deref(), Some("(window (focus (e f)) (nonfocus))"));
        assert_eq!(cli.query_tree_indices.as_deref(), Some(".window > .focus"));
        assert_eq!(cli.css.as_deref(), Some(""));
    }

    #[test]
    fn css_text_and_file_conflict() {
        let result = Cli::try_parse_from(["frameskin-debug", "--css-file", "a.css", "* { }"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity() {
        let cli = Cli::try_parse_from(["frameskin-debug", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(Cli::default().log_level(), "warn");
    }
}
