mod command;
mod sink;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
