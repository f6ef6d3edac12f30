use clap::{ArgAction, CommandFactory, Parser};
use small_scripts::app::smoothie::{fruit_pairs, recipe, render_summary};
use small_scripts::utils::logger;

#[derive(Parser)]
#[command(name = "smoothie")]
#[command(about = "Create a smoothie recipe")]
struct Args {
    /// The name of the smoothie
    #[arg(long)]
    name: Option<String>,

    /// The type and weight (grams) of a fruit to include; repeatable
    #[arg(long, num_args = 2, value_names = ["TYPE", "WEIGHT"], action = ArgAction::Append)]
    fruit: Vec<String>,

    /// Print the recipe summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    if std::env::args_os().len() == 1 {
        Args::command().print_help()?;
        return Ok(());
    }

    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let items = fruit_pairs(&args.fruit);
    tracing::debug!("Fruits requested: {:?}", items);

    match recipe(&items) {
        Ok(summary) if args.json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Ok(summary) => {
            print!("{}", render_summary(args.name.as_deref(), &summary));
        }
        Err(e) => {
            tracing::error!("Recipe rejected ({:?}): {}", e.category(), e);
            tracing::debug!("Suggestion: {}", e.recovery_suggestion());
            println!("{}", e.user_friendly_message());
        }
    }

    Ok(())
}
