use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kinetic-setup",
    about = "Set up a new Kinetic Growth implementation project from a quick-start template",
    version
)]
pub struct Cli {
    /// Customer name, e.g. "Acme Co." (becomes acme-co-implementation)
    pub customer: String,
}
