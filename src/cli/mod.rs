mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};

/// Run the program for `args`; returns the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run 'livepass --help' for usage.");
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) => 0,
        Err(Done) if ctx.flags.help || ctx.flags.version => 0,
        Err(Done) => 1,
    }
}
