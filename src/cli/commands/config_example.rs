//! --config-example - Write an example `.gitwit`

use anyhow::Result;

use crate::cli::Context;
use crate::core::config::{Config, ExampleOutcome};
use crate::i18n::{tf, Lang};
use crate::ui::output;

/// Write the example configuration in the user's language.
///
/// Inside a repository the file goes to its root, elsewhere to the working
/// directory.
pub fn config_example(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let root = match ctx.open_repo() {
        Ok(git) => git.work_dir()?.to_path_buf(),
        Err(_) => ctx.work_dir()?,
    };

    match Config::generate_example(&root, Lang::current())? {
        ExampleOutcome::Written(path) => output::success(
            tf("config.example.written", &[path.display().to_string()]),
            verbosity,
        ),
        ExampleOutcome::AlreadyExists(path) => output::warn(
            tf("config.example.exists", &[path.display().to_string()]),
            verbosity,
        ),
    }
    Ok(())
}
