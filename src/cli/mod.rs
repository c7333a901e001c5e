mod root;
mod show;

pub use root::Cli;
pub use show::ShowCommand;
