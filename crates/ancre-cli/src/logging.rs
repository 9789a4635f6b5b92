use colored::Colorize;
use env_logger::{Builder, Env};
use std::io::Write;

pub fn init_logging(quiet: bool) {
    let logging_env = Env::default().filter_or("RUST_LOG", "warn");
    Builder::from_env(logging_env)
        .format(move |buf, record| {
            if quiet {
                return Ok(());
            }

            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .init();
}
