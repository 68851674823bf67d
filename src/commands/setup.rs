use console::style;
use kinetic_setup::wizard::Outcome;
use kinetic_setup::SetupOptions;
use miette::Result;

pub fn run(customer: String) -> Result<()> {
    let options = SetupOptions {
        customer,
        cwd: None,
        config: None,
    };

    match kinetic_setup::setup(options)? {
        Outcome::Completed(session) => {
            println!(
                "  {} {}",
                style("project:").dim(),
                style(session.target_dir.display()).cyan()
            );
        }
        Outcome::Cancelled(_) => {}
    }

    Ok(())
}
