//! Tree command implementation

use crate::cli::TreeArgs;
use crate::config::Config;
use crate::content;
use crate::error::Result;
use crate::tree::{format_outline, Icons, TreeView};

/// Render the project structure as text or JSON.
pub fn render(args: &TreeArgs, config: &Config) -> Result<String> {
    let root = content::project_structure();

    if args.json {
        return Ok(serde_json::to_string_pretty(&root)?);
    }

    let mut view = TreeView::with_expand_depth(root, config.tree.expand_depth);
    if args.expand_all {
        view.expand_all();
    }

    let icons = Icons::new(args.ascii || config.view.ascii_icons);
    Ok(format_outline(&view.rows(), &icons))
}

/// Run the tree command
pub fn run(args: TreeArgs, config: &Config) -> Result<()> {
    tracing::debug!(?args, "Rendering project structure");
    let output = render(&args, config)?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(expand_all: bool, json: bool) -> TreeArgs {
        TreeArgs {
            expand_all,
            json,
            ascii: true,
        }
    }

    #[test]
    fn test_default_shows_top_level() {
        let output = render(&args(false, false), &Config::default()).unwrap();
        assert_eq!(output.lines().count(), 4);
        assert!(output.starts_with("v [d] spring-kafka-pact-demo\n"));
    }

    #[test]
    fn test_expand_all_shows_every_node() {
        let output = render(&args(true, false), &Config::default()).unwrap();
        assert_eq!(
            output.lines().count(),
            content::project_structure().count()
        );
        assert!(output.contains("message-consumer-message-provider.json"));
    }

    #[test]
    fn test_json_output() {
        let output = render(&args(false, true), &Config::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["name"], "spring-kafka-pact-demo");
        assert_eq!(json["children"][0]["name"], "src");
    }
}
