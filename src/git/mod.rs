mod gitconfig;
mod utils;

pub use gitconfig::{find_gitconfig, open_gitconfig, resolve_instead_url};
pub use utils::{canonicalize_path, clone_template, home, remove_history};
