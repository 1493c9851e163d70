use log::{debug, error};
use std::env;
use std::process::ExitCode;

use menu_recipes::{ExtractionPipelineBuilder, RecipeInstance, ScanConfig};

const USAGE: &str = "Usage: menu-recipes <profile> <image>... [--json]";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    };

    let profile: usize = args
        .first()
        .ok_or(USAGE)?
        .parse()
        .map_err(|_| format!("Profile must be a positive number\n{}", USAGE))?;

    let images = args[1..]
        .iter()
        .map(image::open)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Loaded {} images", images.len());

    let config = ScanConfig::load()?;
    let pipeline = ExtractionPipelineBuilder::from_config(&config)?
        .diagnostics(|event| debug!("{:?}", event))
        .build()?;

    let recipes = pipeline.extract(&images, profile).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else {
        print_recipes(&recipes);
    }

    Ok(())
}

fn print_recipes(recipes: &[RecipeInstance]) {
    if recipes.is_empty() {
        println!("No recipes detected.");
        return;
    }

    for recipe in recipes {
        println!(
            "{} + {} -> {}",
            recipe.ingredient1, recipe.ingredient2, recipe.effect
        );
    }
}
