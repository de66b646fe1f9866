//! View command implementation

use crate::cli::ViewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::tui::{self, App};

/// Build the app for `args` without touching the terminal.
pub fn build_app(args: &ViewArgs, config: &Config) -> Result<App> {
    let mut app = App::new(config);
    if args.ascii {
        app.icons = crate::tree::Icons::ASCII;
    }
    if let Some(tab) = &args.tab {
        app.tabs.select(tab)?;
    }
    app.navigate(&args.route);
    Ok(app)
}

/// Run the view command
pub fn run(args: ViewArgs, config: &Config) -> Result<()> {
    let app = build_app(&args, config)?;
    tui::run(app)
}
