//! Snippet command implementation

use crate::cli::SnippetArgs;
use crate::content;
use crate::error::{Result, ShowcaseError};

/// Run the snippet command
pub fn run(args: SnippetArgs) -> Result<()> {
    let snippet = content::find_snippet(&args.title)
        .ok_or_else(|| ShowcaseError::UnknownSnippet(args.title.clone()))?;

    tracing::debug!(title = ?snippet.title, language = ?snippet.language, "Printing snippet");
    println!("{}", snippet.code);
    Ok(())
}
